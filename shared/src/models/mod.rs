//! Domain payloads and enums

pub mod chef_event;
pub mod menu;
pub mod product;

// Re-exports
pub use chef_event::{ChefEventCreate, EventStatus, EventType, LocationType};
pub use menu::{CourseInput, DishInput, IngredientInput, MenuCreate, MenuUpdate};
pub use product::TemplateProductCreate;
