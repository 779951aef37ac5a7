use async_trait::async_trait;
use redis::AsyncCommands;

use crate::application::ports::{JobStore, JobStoreError, JOB_TTL_SECS};
use crate::domain::{Job, JobId};

/// Redis-backed job store. Records live under `job:<id>` as JSON with a
/// SETEX retention window, so expiry needs no sweep.
///
/// An unreachable backend degrades reads to "not found" rather than
/// erroring; writes surface the failure.
pub struct RedisJobStore {
    client: redis::Client,
    ttl_secs: u64,
}

impl RedisJobStore {
    pub fn new(url: &str) -> Result<Self, JobStoreError> {
        let client =
            redis::Client::open(url).map_err(|e| JobStoreError::ConnectionFailed(e.to_string()))?;
        Ok(Self {
            client,
            ttl_secs: JOB_TTL_SECS,
        })
    }

    fn key(id: &JobId) -> String {
        format!("job:{}", id.as_str())
    }
}

#[async_trait]
impl JobStore for RedisJobStore {
    async fn set(&self, id: &JobId, job: &Job) -> Result<(), JobStoreError> {
        let mut conn = self
            .client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| JobStoreError::ConnectionFailed(e.to_string()))?;

        let json =
            serde_json::to_string(job).map_err(|e| JobStoreError::Serialization(e.to_string()))?;

        let _: () = conn
            .set_ex(Self::key(id), json, self.ttl_secs)
            .await
            .map_err(|e| JobStoreError::OperationFailed(e.to_string()))?;

        tracing::debug!(job_id = %id, "Job stored in Redis");
        Ok(())
    }

    async fn get(&self, id: &JobId) -> Result<Option<Job>, JobStoreError> {
        let mut conn = match self.client.get_multiplexed_async_connection().await {
            Ok(conn) => conn,
            Err(e) => {
                tracing::error!(job_id = %id, error = %e, "Redis unavailable, treating job as not found");
                return Ok(None);
            }
        };

        let raw: Option<String> = match conn.get(Self::key(id)).await {
            Ok(value) => value,
            Err(e) => {
                tracing::error!(job_id = %id, error = %e, "Redis read failed, treating job as not found");
                return Ok(None);
            }
        };

        match raw {
            Some(json) => {
                let job = serde_json::from_str(&json)
                    .map_err(|e| JobStoreError::Serialization(e.to_string()))?;
                Ok(Some(job))
            }
            None => Ok(None),
        }
    }
}
