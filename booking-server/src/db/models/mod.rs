//! Database Models

// Serde helpers
pub mod serde_helpers;

// Booking
pub mod chef_event;

// Catalog
pub mod menu;
pub mod product;

// Inventory
pub mod inventory;

// Re-exports
pub use chef_event::{ChefEvent, ChefEventId};
pub use inventory::{
    FulfillmentProvider, InventoryItem, InventoryLevel, SalesChannel, StockLocation,
};
pub use menu::{EmbeddedCourse, EmbeddedDish, EmbeddedIngredient, Menu, MenuId};
pub use product::{EmbeddedVariant, EventProductMeta, Product, ProductId, ProductStatus};
