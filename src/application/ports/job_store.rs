use async_trait::async_trait;

use crate::domain::{Job, JobId};

/// Fixed retention window for job records. Records become unreachable after
/// this many seconds regardless of status.
pub const JOB_TTL_SECS: u64 = 86_400;

/// Key/value storage for job records.
///
/// Backends are interchangeable: values round-trip through JSON without
/// losing shape, unknown and expired identifiers read back as `None`, and
/// concurrent writers to the same identifier race with last-write-wins
/// semantics. There is no compare-and-swap.
#[async_trait]
pub trait JobStore: Send + Sync {
    /// Persist or overwrite a record under its identifier with the fixed
    /// retention window.
    async fn set(&self, id: &JobId, job: &Job) -> Result<(), JobStoreError>;

    /// Fetch a record. Unknown or expired identifiers yield `Ok(None)`.
    async fn get(&self, id: &JobId) -> Result<Option<Job>, JobStoreError>;

    /// Best-effort enumeration. Backends that cannot enumerate cheaply
    /// return an empty list; callers must not rely on this for correctness.
    async fn job_ids(&self) -> Result<Vec<JobId>, JobStoreError> {
        Ok(Vec::new())
    }

    /// Best-effort count; zero when the backend cannot count cheaply.
    async fn len(&self) -> Result<usize, JobStoreError> {
        Ok(0)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum JobStoreError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
    #[error("operation failed: {0}")]
    OperationFailed(String),
    #[error("serialization failed: {0}")]
    Serialization(String),
}
