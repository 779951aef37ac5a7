use async_trait::async_trait;
use serde_json::Value;

/// Outbound side of the contract with a remote workflow-automation service.
///
/// `Ok` means the remote acknowledged the dispatch with a 2xx; the actual
/// work completes later via exactly one POST back to the callback URL
/// embedded in the payload. Dispatches are fire-and-forget: nothing here
/// retries.
#[async_trait]
pub trait WebhookClient: Send + Sync {
    async fn dispatch(&self, webhook_url: &str, payload: &Value) -> Result<(), WebhookError>;
}

#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("webhook returned HTTP {0}")]
    Status(u16),
}
