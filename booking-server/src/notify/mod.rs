//! Notification dispatch
//!
//! Fire-and-forget email pipeline: callers enqueue a template name plus
//! data, a background worker renders and sends through the configured
//! provider. Nothing here is ever fatal to a booking flow: queue
//! overflows, unknown templates and provider failures are logged and
//! swallowed. There is no retry.

pub mod provider;
pub mod templates;

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

pub use provider::{EmailMessage, EmailProvider, LogProvider, ProviderError, ResendProvider};
pub use templates::{LinkContext, Rendered, TemplateData, TemplateKind};

/// Queue depth before dispatches start being dropped
const QUEUE_CAPACITY: usize = 256;

/// Anything that can accept a notification dispatch
pub trait Notifier: Send + Sync {
    /// Enqueue a notification by template name. Never fails; problems
    /// are logged downstream.
    fn dispatch(&self, template: &str, data: TemplateData);
}

/// One queued dispatch
#[derive(Debug, Clone)]
pub struct QueuedNotification {
    pub template: String,
    pub data: TemplateData,
}

/// Handle held by services and handlers; cheap to clone
#[derive(Clone)]
pub struct NotificationService {
    tx: mpsc::Sender<QueuedNotification>,
}

impl NotificationService {
    /// Build the service and the receiver end for its worker
    pub fn channel() -> (Self, mpsc::Receiver<QueuedNotification>) {
        let (tx, rx) = mpsc::channel(QUEUE_CAPACITY);
        (Self { tx }, rx)
    }
}

impl Notifier for NotificationService {
    fn dispatch(&self, template: &str, data: TemplateData) {
        let queued = QueuedNotification {
            template: template.to_string(),
            data,
        };
        if let Err(e) = self.tx.try_send(queued) {
            tracing::warn!("Dropping notification '{}': {}", template, e);
        }
    }
}

/// Background sender
///
/// Drains the queue until the channel closes or shutdown is requested.
pub struct NotificationWorker {
    provider: Arc<dyn EmailProvider>,
    links: LinkContext,
    from: String,
    chef_email: String,
}

impl NotificationWorker {
    pub fn new(
        provider: Arc<dyn EmailProvider>,
        links: LinkContext,
        from: String,
        chef_email: String,
    ) -> Self {
        Self {
            provider,
            links,
            from,
            chef_email,
        }
    }

    pub async fn run(
        self,
        mut rx: mpsc::Receiver<QueuedNotification>,
        shutdown: CancellationToken,
    ) {
        tracing::info!("Notification worker started (provider: {})", self.provider.name());
        loop {
            tokio::select! {
                _ = shutdown.cancelled() => {
                    tracing::info!("Notification worker received shutdown signal");
                    break;
                }
                queued = rx.recv() => {
                    let Some(queued) = queued else {
                        tracing::info!("Notification channel closed, worker stopping");
                        break;
                    };
                    self.handle(queued).await;
                }
            }
        }
    }

    async fn handle(&self, queued: QueuedNotification) {
        let Some(kind) = TemplateKind::from_name(&queued.template) else {
            tracing::error!("Unknown notification template '{}', dropping", queued.template);
            return;
        };

        let rendered = templates::render(kind, &queued.data, &self.links);
        let to = match kind {
            TemplateKind::ChefAlert => self.chef_email.clone(),
            TemplateKind::RequestConfirmation | TemplateKind::AcceptanceConfirmation => {
                queued.data.event.email.clone()
            }
        };
        let email = EmailMessage {
            to,
            subject: rendered.subject,
            html: rendered.html,
        };

        match self.provider.send(&self.from, &email).await {
            Ok(()) => {
                tracing::debug!(template = %queued.template, to = %email.to, "Notification sent");
            }
            Err(e) => {
                tracing::error!(
                    template = %queued.template,
                    to = %email.to,
                    "Notification send failed (not fatal): {}",
                    e
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use shared::models::{EventStatus, EventType, LocationType};
    use std::sync::Mutex;

    struct RecordingProvider {
        sent: Mutex<Vec<EmailMessage>>,
    }

    #[async_trait]
    impl EmailProvider for RecordingProvider {
        async fn send(&self, _from: &str, email: &EmailMessage) -> Result<(), ProviderError> {
            self.sent.lock().unwrap().push(email.clone());
            Ok(())
        }

        fn name(&self) -> &'static str {
            "recording"
        }
    }

    fn sample_data() -> TemplateData {
        TemplateData::for_event(crate::db::models::ChefEvent {
            id: Some(surrealdb::RecordId::from_table_key("chef_event", "ev1")),
            status: EventStatus::Pending,
            requested_date: "2026-09-15".to_string(),
            requested_time: "18:30".to_string(),
            party_size: 4,
            event_type: EventType::CookingClass,
            location_type: LocationType::ChefLocation,
            location_address: "1 Kitchen Lane, Springfield".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: None,
            notes: None,
            special_requirements: None,
            total_price_cents: 47_996,
            deposit_paid: false,
            estimated_duration_minutes: 180,
            assigned_chef_id: None,
            template_product: None,
            product: None,
            created_at: None,
            updated_at: None,
        })
    }

    fn worker(provider: Arc<RecordingProvider>) -> NotificationWorker {
        NotificationWorker::new(
            provider,
            LinkContext {
                admin_base: "http://admin.test".to_string(),
                storefront_base: "http://shop.test".to_string(),
            },
            "bookings@test".to_string(),
            "chef@test".to_string(),
        )
    }

    #[tokio::test]
    async fn unknown_template_is_a_silent_noop() {
        let provider = Arc::new(RecordingProvider {
            sent: Mutex::new(Vec::new()),
        });
        let worker = worker(provider.clone());
        worker
            .handle(QueuedNotification {
                template: "no_such_template".to_string(),
                data: sample_data(),
            })
            .await;
        assert!(provider.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn chef_alert_goes_to_the_chef_inbox() {
        let provider = Arc::new(RecordingProvider {
            sent: Mutex::new(Vec::new()),
        });
        let worker = worker(provider.clone());
        worker
            .handle(QueuedNotification {
                template: TemplateKind::ChefAlert.name().to_string(),
                data: sample_data(),
            })
            .await;
        let sent = provider.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "chef@test");
    }

    #[tokio::test]
    async fn customer_templates_go_to_the_requester() {
        let provider = Arc::new(RecordingProvider {
            sent: Mutex::new(Vec::new()),
        });
        let worker = worker(provider.clone());
        worker
            .handle(QueuedNotification {
                template: TemplateKind::RequestConfirmation.name().to_string(),
                data: sample_data(),
            })
            .await;
        let sent = provider.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "ada@example.com");
    }
}
