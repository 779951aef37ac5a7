use std::collections::HashSet;

use agent_store::domain::JobId;

fn split(id: &JobId) -> (String, String) {
    let mut parts = id.as_str().splitn(3, '_');
    assert_eq!(parts.next(), Some("job"));
    (
        parts.next().expect("timestamp component").to_string(),
        parts.next().expect("random suffix").to_string(),
    )
}

#[test]
fn given_generated_id_when_inspected_then_matches_pattern() {
    let id = JobId::generate();
    let (millis, suffix) = split(&id);

    assert!(!millis.is_empty() && millis.chars().all(|c| c.is_ascii_digit()));
    assert_eq!(suffix.len(), 9);
    assert!(suffix
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
}

#[test]
fn given_many_generated_ids_then_all_distinct() {
    let mut seen = HashSet::new();
    for _ in 0..1000 {
        assert!(seen.insert(JobId::generate()), "collision in 1000 ids");
    }
}

#[test]
fn given_sequential_ids_then_timestamp_component_is_non_decreasing() {
    let mut last = 0i64;
    for _ in 0..100 {
        let (millis, _) = split(&JobId::generate());
        let millis: i64 = millis.parse().unwrap();
        assert!(millis >= last);
        last = millis;
    }
}

#[test]
fn given_id_when_serialized_then_round_trips_as_plain_string() {
    let id = JobId::from_string("job_1700000000000_abc123xyz");
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, "\"job_1700000000000_abc123xyz\"");

    let back: JobId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
}
