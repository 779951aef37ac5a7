use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::{JobStore, JobStoreError, JOB_TTL_SECS};
use crate::domain::{Job, JobId};

struct StoredJob {
    job: Job,
    expires_at: Instant,
}

/// In-process job store. Entries carry a per-entry deadline; `get` treats
/// expired entries as absent, and a periodic sweep reclaims the memory.
pub struct MemoryJobStore {
    ttl: Duration,
    entries: RwLock<HashMap<String, StoredJob>>,
}

impl MemoryJobStore {
    pub fn new() -> Self {
        Self::with_ttl(Duration::from_secs(JOB_TTL_SECS))
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Drop entries past their deadline. Expiry is already enforced lazily
    /// on `get`; the sweep only bounds memory.
    pub async fn purge_expired(&self) {
        let now = Instant::now();
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, stored| stored.expires_at > now);
        let removed = before - entries.len();
        if removed > 0 {
            tracing::info!(removed, "Purged expired jobs");
        }
    }

    /// Background sweep, every `interval`.
    pub fn spawn_cleanup(self: Arc<Self>, interval: Duration) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            loop {
                tokio::time::sleep(interval).await;
                self.purge_expired().await;
            }
        })
    }
}

impl Default for MemoryJobStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl JobStore for MemoryJobStore {
    async fn set(&self, id: &JobId, job: &Job) -> Result<(), JobStoreError> {
        let stored = StoredJob {
            job: job.clone(),
            expires_at: Instant::now() + self.ttl,
        };
        self.entries
            .write()
            .await
            .insert(id.as_str().to_string(), stored);
        Ok(())
    }

    async fn get(&self, id: &JobId) -> Result<Option<Job>, JobStoreError> {
        let entries = self.entries.read().await;
        match entries.get(id.as_str()) {
            Some(stored) if stored.expires_at > Instant::now() => Ok(Some(stored.job.clone())),
            _ => Ok(None),
        }
    }

    async fn job_ids(&self) -> Result<Vec<JobId>, JobStoreError> {
        let now = Instant::now();
        let entries = self.entries.read().await;
        Ok(entries
            .values()
            .filter(|stored| stored.expires_at > now)
            .map(|stored| stored.job.id.clone())
            .collect())
    }

    async fn len(&self) -> Result<usize, JobStoreError> {
        let now = Instant::now();
        let entries = self.entries.read().await;
        Ok(entries
            .values()
            .filter(|stored| stored.expires_at > now)
            .count())
    }
}
