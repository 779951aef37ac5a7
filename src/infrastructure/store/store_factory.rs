use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{JobStore, JobStoreError};
use crate::presentation::config::StoreSettings;

use super::memory_store::MemoryJobStore;
use super::redis_store::RedisJobStore;

const CLEANUP_INTERVAL: Duration = Duration::from_secs(3600);

pub struct JobStoreFactory;

impl JobStoreFactory {
    /// Backend selection follows configuration presence: a Redis URL means
    /// the networked store, otherwise the in-process map with its hourly
    /// sweep. Must be called from within a Tokio runtime.
    pub fn create(settings: &StoreSettings) -> Result<Arc<dyn JobStore>, JobStoreError> {
        match settings.redis_url.as_deref() {
            Some(url) => {
                let store = RedisJobStore::new(url)?;
                tracing::info!("Using Redis job store");
                Ok(Arc::new(store))
            }
            None => {
                let store = Arc::new(MemoryJobStore::new());
                Arc::clone(&store).spawn_cleanup(CLEANUP_INTERVAL);
                tracing::info!("REDIS_URL not set, using in-memory job store");
                Ok(store)
            }
        }
    }
}
