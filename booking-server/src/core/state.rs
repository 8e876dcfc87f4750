//! Server state: shared handles behind every request

use std::sync::{Arc, Mutex};
use std::time::Duration;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::acceptance::{
    AcceptanceSaga, SurrealCatalog, SurrealEventStore, SurrealInventory, SurrealLinks,
};
use crate::booking::{IntakeService, PricingSource};
use crate::core::Config;
use crate::db::DbService;
use crate::notify::{
    EmailProvider, LinkContext, LogProvider, NotificationService, NotificationWorker, Notifier,
    QueuedNotification, ResendProvider,
};
use crate::services::MenuCache;

/// Server state, cheap to clone, shared by all handlers.
///
/// Services are constructed per request from the database handle; the
/// state only keeps the long-lived pieces (config, db, notification
/// queue, menu cache).
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Embedded database (SurrealDB)
    pub db: Surreal<Db>,
    /// Notification enqueue handle
    pub notifications: NotificationService,
    /// Active pricing source
    pub pricing: PricingSource,
    /// Store menu read cache
    pub menu_cache: Arc<MenuCache>,
    /// Receiver side for the notification worker, taken once at startup
    worker_rx: Arc<Mutex<Option<mpsc::Receiver<QueuedNotification>>>>,
}

impl ServerState {
    /// Initialize state: work directory, database, notification queue.
    ///
    /// # Panics
    ///
    /// Panics when the work directory or database cannot be set up;
    /// the server cannot run without either.
    pub async fn initialize(config: &Config) -> Self {
        config
            .ensure_work_dir_structure()
            .expect("Failed to create work directory structure");

        let db_service = DbService::new(&config.database_dir())
            .await
            .expect("Failed to initialize database");

        let (notifications, rx) = NotificationService::channel();

        Self {
            config: config.clone(),
            db: db_service.db,
            notifications,
            pricing: PricingSource::from_config(&config.pricing_source),
            menu_cache: Arc::new(MenuCache::new(Duration::from_secs(
                config.menu_cache_ttl_secs,
            ))),
            worker_rx: Arc::new(Mutex::new(Some(rx))),
        }
    }

    /// Spawn the notification worker. Must be called once, before
    /// serving traffic; later calls are no-ops.
    pub fn start_background_tasks(&self, shutdown: CancellationToken) {
        let Some(rx) = self.worker_rx.lock().unwrap().take() else {
            return;
        };

        let provider: Arc<dyn EmailProvider> = match &self.config.resend_api_key {
            Some(key) => Arc::new(ResendProvider::new(key.clone())),
            None => {
                tracing::warn!("RESEND_API_KEY not set, emails will only be logged");
                Arc::new(LogProvider)
            }
        };
        let worker = NotificationWorker::new(
            provider,
            self.link_context(),
            self.config.email_from.clone(),
            self.config.chef_email.clone(),
        );
        tokio::spawn(worker.run(rx, shutdown));
    }

    /// Database handle
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }

    /// Base URLs for links embedded in emails
    pub fn link_context(&self) -> LinkContext {
        LinkContext {
            admin_base: self.config.admin_backend_url.clone(),
            storefront_base: self.config.storefront_url.clone(),
        }
    }

    /// Enqueue-only notifier handle
    pub fn notifier(&self) -> Arc<dyn Notifier> {
        Arc::new(self.notifications.clone())
    }

    /// Intake service over the shared database
    pub fn intake_service(&self) -> IntakeService {
        IntakeService::new(self.get_db(), self.pricing, self.notifier())
    }

    /// Acceptance saga wired to the production collaborators
    pub fn acceptance_saga(&self) -> AcceptanceSaga {
        AcceptanceSaga::new(
            Arc::new(SurrealEventStore::new(self.get_db())),
            Arc::new(SurrealCatalog::new(self.get_db())),
            Arc::new(SurrealInventory::new(self.get_db())),
            Arc::new(SurrealLinks::new(self.get_db())),
            self.notifier(),
        )
    }
}
