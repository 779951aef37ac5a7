use agent_store::domain::{Job, JobStatus};
use serde_json::json;

#[test]
fn given_new_job_then_pending_with_request_fields_flattened() {
    let job = Job::new(json!({ "url": "https://example.com" }));
    assert_eq!(job.status, JobStatus::Pending);

    let value = serde_json::to_value(&job).unwrap();
    assert_eq!(value["url"], "https://example.com");
    assert_eq!(value["status"], "pending");
    assert!(value["createdAt"].as_str().is_some());
    // Optional fields stay absent until set.
    assert!(value.get("completedAt").is_none());
    assert!(value.get("fileUrl").is_none());
    assert!(value.get("result").is_none());
    assert!(value.get("error").is_none());
}

#[test]
fn given_failed_job_then_error_set_without_completed_at() {
    let mut job = Job::new(json!({ "url": "https://example.com" }));
    job.mark_failed("webhook returned HTTP 500");

    assert_eq!(job.status, JobStatus::Failed);
    assert_eq!(job.error.as_deref(), Some("webhook returned HTTP 500"));
    assert!(job.completed_at.is_none());
}

#[test]
fn given_completed_job_then_artifact_and_timestamp_set() {
    let mut job = Job::new(json!({ "url": "https://example.com" }));
    job.mark_processing();
    job.complete_with_file("https://x/report.pdf");

    assert_eq!(job.status, JobStatus::Completed);
    assert_eq!(job.file_url.as_deref(), Some("https://x/report.pdf"));
    assert!(job.completed_at.is_some());
}

#[test]
fn given_job_when_serialized_then_round_trips_without_shape_loss() {
    let mut job = Job::new(json!({
        "company_name": "Acme Inc",
        "website_url": "https://acme.example",
        "number_documents": 3
    }));
    job.mark_processing();
    job.complete_with_result(json!({ "reply": [{ "File_url": "https://x/a.pdf" }] }));

    let json = serde_json::to_string(&job).unwrap();
    let back: Job = serde_json::from_str(&json).unwrap();

    assert_eq!(back.id, job.id);
    assert_eq!(back.status, JobStatus::Completed);
    assert_eq!(back.request["company_name"], "Acme Inc");
    assert_eq!(back.request["number_documents"], 3);
    assert_eq!(back.result, job.result);
    assert_eq!(back.completed_at, job.completed_at);
}
