mod job_store;
mod webhook_client;

pub use job_store::{JobStore, JobStoreError, JOB_TTL_SECS};
pub use webhook_client::{WebhookClient, WebhookError};
