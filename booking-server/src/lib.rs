//! Saffron Booking Server - private-chef event booking platform
//!
//! # Architecture overview
//!
//! - **Intake** (`booking`): storefront request validation, pricing and
//!   the advisory slot-conflict check
//! - **Acceptance** (`acceptance`): the saga that turns an approval into
//!   a sellable product, stock location and inventory, with reverse
//!   compensation on failure
//! - **Notifications** (`notify`): queued email dispatch through a
//!   swappable provider
//! - **Storage** (`db`): embedded SurrealDB behind repositories
//! - **HTTP API** (`api`): storefront and admin routes
//!
//! # Module structure
//!
//! ```text
//! booking-server/src/
//! ├── core/          # config, state, server
//! ├── api/           # HTTP routes and handlers
//! ├── booking/       # intake, pricing, conflict check
//! ├── acceptance/    # acceptance saga + collaborators
//! ├── notify/        # email templates, providers, worker
//! ├── services/      # menu read cache
//! ├── db/            # models and repositories
//! └── utils/         # errors, logging, time, validation
//! ```

pub mod acceptance;
pub mod api;
pub mod booking;
pub mod core;
pub mod db;
pub mod notify;
pub mod services;
pub mod utils;

// Re-export public types
pub use booking::{IntakeService, PricingSource};
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Set up process environment: dotenv and logging.
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    config.ensure_work_dir_structure()?;
    let log_dir = config.log_dir();
    init_logger_with_file(Some(&config.log_level), log_dir.to_str());
    Ok(())
}
