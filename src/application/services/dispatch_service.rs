use std::sync::Arc;

use serde_json::Value;

use crate::application::ports::{JobStore, JobStoreError, WebhookClient, WebhookError};
use crate::domain::{Job, JobId};

/// Runs the start half of the job lifecycle: create a `pending` record,
/// forward the payload to the category's remote webhook with the job
/// identifier and callback URL attached, then record the dispatch outcome.
///
/// The store write and the outbound call are not transactional: a crash
/// between them leaves an orphaned `pending` record until the TTL expires.
pub struct DispatchService {
    store: Arc<dyn JobStore>,
    webhook_client: Arc<dyn WebhookClient>,
}

impl DispatchService {
    pub fn new(store: Arc<dyn JobStore>, webhook_client: Arc<dyn WebhookClient>) -> Self {
        Self {
            store,
            webhook_client,
        }
    }

    /// `request` becomes the record's request-specific fields; `outbound`
    /// is the body forwarded to the webhook. Both must be JSON objects.
    #[tracing::instrument(skip_all, fields(webhook_url = %webhook_url))]
    pub async fn start_job(
        &self,
        request: Value,
        mut outbound: Value,
        webhook_url: &str,
        callback_url: &str,
    ) -> Result<JobId, StartJobError> {
        let mut job = Job::new(request);
        let id = job.id.clone();

        self.store.set(&id, &job).await?;
        tracing::info!(job_id = %id, "Job created");

        if let Some(body) = outbound.as_object_mut() {
            body.insert("job_id".to_string(), Value::String(id.as_str().to_string()));
            body.insert(
                "callback_url".to_string(),
                Value::String(callback_url.to_string()),
            );
        }

        match self.webhook_client.dispatch(webhook_url, &outbound).await {
            Ok(()) => {
                job.mark_processing();
                self.store.set(&id, &job).await?;
                tracing::info!(job_id = %id, "Dispatch acknowledged, job processing");
                Ok(id)
            }
            Err(e) => {
                job.mark_failed(e.to_string());
                // Failure of this second write is logged, not surfaced: the
                // caller already gets the dispatch error.
                if let Err(store_err) = self.store.set(&id, &job).await {
                    tracing::error!(job_id = %id, error = %store_err, "Failed to record dispatch failure");
                }
                tracing::error!(job_id = %id, error = %e, "Webhook dispatch failed");
                Err(StartJobError::Dispatch(e))
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StartJobError {
    #[error("job store: {0}")]
    Store(#[from] JobStoreError),
    #[error("webhook dispatch: {0}")]
    Dispatch(WebhookError),
}
