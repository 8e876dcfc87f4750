//! Email providers
//!
//! One trait, two implementations: the Resend HTTP API for real
//! deployments and a log-only provider when no API key is configured.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

const RESEND_ENDPOINT: &str = "https://api.resend.com/emails";

/// A rendered, addressed email ready to send
#[derive(Debug, Clone)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub html: String,
}

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Provider rejected the message: {status} {body}")]
    Api { status: u16, body: String },
}

/// Swappable email transport
#[async_trait]
pub trait EmailProvider: Send + Sync {
    async fn send(&self, from: &str, email: &EmailMessage) -> Result<(), ProviderError>;

    fn name(&self) -> &'static str;
}

/// Resend (api.resend.com) provider
pub struct ResendProvider {
    client: reqwest::Client,
    api_key: String,
}

impl ResendProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
        }
    }
}

#[derive(Serialize)]
struct ResendPayload<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

#[async_trait]
impl EmailProvider for ResendProvider {
    async fn send(&self, from: &str, email: &EmailMessage) -> Result<(), ProviderError> {
        let payload = ResendPayload {
            from,
            to: [email.to.as_str()],
            subject: &email.subject,
            html: &email.html,
        };
        let response = self
            .client
            .post(RESEND_ENDPOINT)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api { status, body });
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "resend"
    }
}

/// Log-only provider for development and tests
#[derive(Default)]
pub struct LogProvider;

#[async_trait]
impl EmailProvider for LogProvider {
    async fn send(&self, from: &str, email: &EmailMessage) -> Result<(), ProviderError> {
        tracing::info!(
            to = %email.to,
            from = %from,
            subject = %email.subject,
            "Email not sent (log provider)"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "log"
    }
}
