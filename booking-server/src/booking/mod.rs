//! Booking domain
//!
//! Request intake, pricing and the advisory slot-conflict check.

pub mod conflict;
pub mod intake;
pub mod pricing;

pub use conflict::ConflictChecker;
pub use intake::IntakeService;
pub use pricing::{PricingSource, Quote};
