use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{JobId, JobStatus};

/// One tracked unit of remote work.
///
/// The request-specific fields vary by agent category (a target URL, a
/// company name plus document count, or an arbitrary payload) and are kept
/// as a flattened JSON object so the record round-trips through the store
/// without losing shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: JobId,
    pub status: JobStatus,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub request: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Job {
    /// New record in `pending`, before the remote webhook has been contacted.
    /// `request` must be a JSON object.
    pub fn new(request: Value) -> Self {
        Self {
            id: JobId::generate(),
            status: JobStatus::Pending,
            created_at: Utc::now(),
            completed_at: None,
            request,
            file_url: None,
            result: None,
            error: None,
        }
    }

    /// The remote webhook acknowledged the dispatch.
    pub fn mark_processing(&mut self) {
        self.status = JobStatus::Processing;
    }

    /// Dispatch or completion failed. `completed_at` stays unset: only a
    /// successful completion stamps it.
    pub fn mark_failed(&mut self, error: impl Into<String>) {
        self.status = JobStatus::Failed;
        self.error = Some(error.into());
    }

    /// Callback delivered the expected artifact reference.
    pub fn complete_with_file(&mut self, file_url: impl Into<String>) {
        self.status = JobStatus::Completed;
        self.file_url = Some(file_url.into());
        self.completed_at = Some(Utc::now());
    }

    /// Callback delivered an opaque result payload, stored verbatim.
    pub fn complete_with_result(&mut self, result: Value) {
        self.status = JobStatus::Completed;
        self.result = Some(result);
        self.completed_at = Some(Utc::now());
    }
}
