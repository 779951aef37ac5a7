use std::time::Duration;

use serde_json::json;

use agent_store::application::ports::JobStore;
use agent_store::domain::{Job, JobId, JobStatus};
use agent_store::infrastructure::store::MemoryJobStore;

fn sample_job() -> Job {
    Job::new(json!({ "url": "https://example.com" }))
}

#[tokio::test]
async fn given_stored_job_when_fetched_then_round_trips() {
    let store = MemoryJobStore::new();
    let job = sample_job();

    store.set(&job.id, &job).await.unwrap();
    let fetched = store.get(&job.id).await.unwrap().unwrap();

    assert_eq!(fetched.id, job.id);
    assert_eq!(fetched.status, JobStatus::Pending);
    assert_eq!(fetched.request["url"], "https://example.com");
}

#[tokio::test]
async fn given_unknown_id_when_fetched_then_none() {
    let store = MemoryJobStore::new();
    let result = store.get(&JobId::from_string("job_0_missing")).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn given_two_writes_to_same_id_then_last_write_wins() {
    let store = MemoryJobStore::new();
    let mut job = sample_job();
    store.set(&job.id, &job).await.unwrap();

    job.mark_processing();
    store.set(&job.id, &job).await.unwrap();

    let fetched = store.get(&job.id).await.unwrap().unwrap();
    assert_eq!(fetched.status, JobStatus::Processing);
}

#[tokio::test]
async fn given_expired_entry_when_fetched_then_none() {
    let store = MemoryJobStore::with_ttl(Duration::from_millis(10));
    let job = sample_job();
    store.set(&job.id, &job).await.unwrap();

    tokio::time::sleep(Duration::from_millis(30)).await;

    assert!(store.get(&job.id).await.unwrap().is_none());
}

#[tokio::test]
async fn given_expired_entries_when_purged_then_counts_drop() {
    let store = MemoryJobStore::with_ttl(Duration::from_millis(10));
    let job = sample_job();
    store.set(&job.id, &job).await.unwrap();
    assert_eq!(store.len().await.unwrap(), 1);

    tokio::time::sleep(Duration::from_millis(30)).await;
    store.purge_expired().await;

    assert_eq!(store.len().await.unwrap(), 0);
    assert!(store.job_ids().await.unwrap().is_empty());
}

#[tokio::test]
async fn given_live_entries_when_enumerated_then_ids_listed() {
    let store = MemoryJobStore::new();
    let a = sample_job();
    let b = sample_job();
    store.set(&a.id, &a).await.unwrap();
    store.set(&b.id, &b).await.unwrap();

    let ids = store.job_ids().await.unwrap();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&a.id));
    assert!(ids.contains(&b.id));
}
