use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;

use crate::domain::{Job, JobStatus};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);
pub const DEFAULT_MAX_ATTEMPTS: u32 = 60;

/// Acknowledgement returned by a start endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct StartedJob {
    pub job_id: String,
    pub status: String,
    pub message: String,
}

#[derive(Debug)]
pub enum PollOutcome {
    Completed(Job),
    Failed(Job),
    /// Local-only verdict: the attempt budget ran out while the job was
    /// still non-terminal. The server keeps no such state.
    TimedOut,
}

/// Cooperative polling loop over the status endpoint, the way the browser
/// client drives it: poll immediately, then on a fixed interval until a
/// terminal status or the attempt budget is exhausted. Individual poll
/// failures are logged and do not abort the loop. No backoff.
pub struct JobPoller {
    client: reqwest::Client,
    base_url: String,
    interval: Duration,
    max_attempts: u32,
}

impl JobPoller {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            interval: DEFAULT_POLL_INTERVAL,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    pub fn with_schedule(mut self, interval: Duration, max_attempts: u32) -> Self {
        self.interval = interval;
        self.max_attempts = max_attempts;
        self
    }

    pub async fn start_job(&self, category: &str, body: &Value) -> Result<StartedJob, PollerError> {
        let response = self
            .client
            .post(format!("{}/api/{}/start", self.base_url, category))
            .json(body)
            .send()
            .await
            .map_err(|e| PollerError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let error = response
                .json::<Value>()
                .await
                .ok()
                .and_then(|v| v.get("error").and_then(Value::as_str).map(String::from))
                .unwrap_or_else(|| "Unknown error".to_string());
            return Err(PollerError::StartRejected { status, error });
        }

        response
            .json()
            .await
            .map_err(|e| PollerError::InvalidResponse(e.to_string()))
    }

    pub async fn wait_for_result(
        &self,
        category: &str,
        job_id: &str,
    ) -> Result<PollOutcome, PollerError> {
        for attempt in 1..=self.max_attempts {
            match self.fetch_status(category, job_id).await {
                Ok(job) => match job.status {
                    JobStatus::Completed => return Ok(PollOutcome::Completed(job)),
                    JobStatus::Failed => return Ok(PollOutcome::Failed(job)),
                    _ => {
                        tracing::debug!(job_id, status = %job.status, attempt, "Job still in flight")
                    }
                },
                Err(e) => {
                    tracing::warn!(job_id, attempt, error = %e, "Status poll failed");
                }
            }
            tokio::time::sleep(self.interval).await;
        }
        Ok(PollOutcome::TimedOut)
    }

    /// Start a job and poll it to a verdict.
    pub async fn run_to_completion(
        &self,
        category: &str,
        body: &Value,
    ) -> Result<PollOutcome, PollerError> {
        let started = self.start_job(category, body).await?;
        tracing::info!(job_id = %started.job_id, category, "Job started");
        self.wait_for_result(category, &started.job_id).await
    }

    async fn fetch_status(&self, category: &str, job_id: &str) -> Result<Job, PollerError> {
        let response = self
            .client
            .get(format!(
                "{}/api/{}/status?jobId={}",
                self.base_url, category, job_id
            ))
            .send()
            .await
            .map_err(|e| PollerError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(PollerError::Status(response.status().as_u16()));
        }

        response
            .json()
            .await
            .map_err(|e| PollerError::InvalidResponse(e.to_string()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PollerError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("start rejected with HTTP {status}: {error}")]
    StartRejected { status: u16, error: String },
    #[error("status endpoint returned HTTP {0}")]
    Status(u16),
    #[error("unexpected response shape: {0}")]
    InvalidResponse(String),
}
