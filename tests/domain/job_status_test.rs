use agent_store::domain::JobStatus;

#[test]
fn given_status_when_rendered_then_lowercase_wire_values() {
    assert_eq!(JobStatus::Pending.as_str(), "pending");
    assert_eq!(JobStatus::Processing.as_str(), "processing");
    assert_eq!(JobStatus::Completed.as_str(), "completed");
    assert_eq!(JobStatus::Failed.as_str(), "failed");
}

#[test]
fn given_wire_value_when_parsing_then_round_trips() {
    for status in [
        JobStatus::Pending,
        JobStatus::Processing,
        JobStatus::Completed,
        JobStatus::Failed,
    ] {
        assert_eq!(status.as_str().parse::<JobStatus>(), Ok(status));
    }
}

#[test]
fn given_unknown_wire_value_when_parsing_then_errors() {
    assert!("timeout".parse::<JobStatus>().is_err());
    assert!("PENDING".parse::<JobStatus>().is_err());
}

#[test]
fn given_statuses_then_only_completed_and_failed_are_terminal() {
    assert!(!JobStatus::Pending.is_terminal());
    assert!(!JobStatus::Processing.is_terminal());
    assert!(JobStatus::Completed.is_terminal());
    assert!(JobStatus::Failed.is_terminal());
}

#[test]
fn given_status_when_serialized_then_matches_wire_value() {
    assert_eq!(
        serde_json::to_value(JobStatus::Processing).unwrap(),
        serde_json::json!("processing")
    );
}
