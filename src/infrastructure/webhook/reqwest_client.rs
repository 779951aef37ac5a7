use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::application::ports::{WebhookClient, WebhookError};

/// HTTP adapter for the outbound webhook contract.
pub struct ReqwestWebhookClient {
    client: Client,
}

impl ReqwestWebhookClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for ReqwestWebhookClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WebhookClient for ReqwestWebhookClient {
    async fn dispatch(&self, webhook_url: &str, payload: &Value) -> Result<(), WebhookError> {
        let response = self
            .client
            .post(webhook_url)
            .json(payload)
            .send()
            .await
            .map_err(|e| WebhookError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(WebhookError::Status(response.status().as_u16()));
        }

        Ok(())
    }
}
