//! Shared types for the Saffron booking platform
//!
//! Wire-level types used by the booking server and any client:
//! request payloads, domain enums and the unified response envelope.

pub mod models;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{EventStatus, EventType, LocationType};
pub use response::{ApiResponse, PaginatedResponse, Pagination};
