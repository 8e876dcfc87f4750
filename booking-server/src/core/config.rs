//! Server configuration
//!
//! # Environment variables
//!
//! Every setting can be overridden through the environment:
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `WORK_DIR` | /var/lib/saffron | database + log directory |
//! | `HTTP_PORT` | 3000 | HTTP API port |
//! | `ENVIRONMENT` | development | development / staging / production |
//! | `ADMIN_BACKEND_URL` | http://localhost:3000 | base for accept/reject links in chef emails |
//! | `STOREFRONT_URL` | http://localhost:8000 | base for customer-facing links |
//! | `RESEND_API_KEY` | (unset) | email provider key; unset = log-only provider |
//! | `EMAIL_FROM` | bookings@localhost | From address on outgoing mail |
//! | `CHEF_EMAIL` | chef@localhost | inbox receiving new-request alerts |
//! | `PRICING_SOURCE` | fixed | fixed price table or template variant pricing |
//! | `MENU_CACHE_TTL_SECS` | 1800 | store menu cache TTL |
//! | `LOG_LEVEL` | info | tracing level filter |

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// Work directory holding the database and log files
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// Runtime environment: development | staging | production
    pub environment: String,

    /// Base URL for the accept/reject links embedded in chef emails
    pub admin_backend_url: String,
    /// Base URL for customer-facing links embedded in emails
    pub storefront_url: String,

    /// Email provider API key; absent means the log-only provider
    pub resend_api_key: Option<String>,
    /// From address on outgoing mail
    pub email_from: String,
    /// Inbox that receives new-request alerts
    pub chef_email: String,

    /// Pricing source: "fixed" | "template"
    pub pricing_source: String,
    /// Store menu cache TTL in seconds
    pub menu_cache_ttl_secs: u64,
    /// Tracing level filter
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables, using defaults
    /// for anything unset.
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/saffron".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            admin_backend_url: std::env::var("ADMIN_BACKEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".into()),
            storefront_url: std::env::var("STOREFRONT_URL")
                .unwrap_or_else(|_| "http://localhost:8000".into()),
            resend_api_key: std::env::var("RESEND_API_KEY").ok().filter(|k| !k.is_empty()),
            email_from: std::env::var("EMAIL_FROM")
                .unwrap_or_else(|_| "bookings@localhost".into()),
            chef_email: std::env::var("CHEF_EMAIL").unwrap_or_else(|_| "chef@localhost".into()),
            pricing_source: std::env::var("PRICING_SOURCE").unwrap_or_else(|_| "fixed".into()),
            menu_cache_ttl_secs: std::env::var("MENU_CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1800),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
        }
    }

    /// Override the parts tests care about
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Directory holding the embedded database
    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    /// Directory holding rolling log files
    pub fn log_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("logs")
    }

    /// Create the work directory layout if it does not exist yet
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.database_dir())?;
        std::fs::create_dir_all(self.log_dir())?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
