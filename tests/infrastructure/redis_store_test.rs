//! Exercises the Redis adapter against a live server. Run with a local
//! Redis and `REDIS_URL` set, e.g. `REDIS_URL=redis://127.0.0.1:6379`.

use serde_json::json;

use agent_store::application::ports::JobStore;
use agent_store::domain::{Job, JobId, JobStatus};
use agent_store::infrastructure::store::RedisJobStore;

fn redis_store() -> RedisJobStore {
    let url = std::env::var("REDIS_URL").expect("REDIS_URL must be set for this test");
    RedisJobStore::new(&url).expect("failed to build Redis client")
}

#[tokio::test]
#[ignore = "requires a running Redis (set REDIS_URL)"]
async fn given_stored_job_when_fetched_then_round_trips() {
    let store = redis_store();
    let mut job = Job::new(json!({ "url": "https://example.com" }));
    job.mark_processing();

    store.set(&job.id, &job).await.unwrap();
    let fetched = store.get(&job.id).await.unwrap().unwrap();

    assert_eq!(fetched.id, job.id);
    assert_eq!(fetched.status, JobStatus::Processing);
    assert_eq!(fetched.request["url"], "https://example.com");
}

#[tokio::test]
#[ignore = "requires a running Redis (set REDIS_URL)"]
async fn given_unknown_id_when_fetched_then_none() {
    let store = redis_store();
    let result = store
        .get(&JobId::from_string("job_0_never_issued"))
        .await
        .unwrap();
    assert!(result.is_none());
}
