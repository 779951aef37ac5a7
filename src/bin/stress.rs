//! Concurrent-user stress driver for the job pipeline.
//!
//! Simulated users loop start-then-poll against a running backend for a
//! fixed wall-clock window, then the run is summarized. Configuration via
//! `STRESS_TARGET`, `STRESS_USERS` and `STRESS_DURATION_SECS`.

use std::time::{Duration, Instant};

use serde_json::json;

use agent_store::client::{JobPoller, PollOutcome};

const DEFAULT_TARGET: &str = "http://localhost:3001";
const DEFAULT_USERS: usize = 25;
const DEFAULT_DURATION_SECS: u64 = 180;

const TEST_URLS: &[&str] = &[
    "https://example.com",
    "https://google.com",
    "https://github.com",
    "https://stackoverflow.com",
    "https://vercel.com",
];

struct UserResult {
    status: String,
    duration: Duration,
}

async fn simulate_user(user_id: usize, target: String, run_for: Duration) -> Vec<UserResult> {
    let poller = JobPoller::new(&target);
    let url = TEST_URLS[user_id % TEST_URLS.len()];
    let started = Instant::now();
    let mut results = Vec::new();

    tracing::info!(user_id, url, "User starting");

    while started.elapsed() < run_for {
        let job_started = Instant::now();
        match poller
            .run_to_completion("landing-analyzer", &json!({ "url": url }))
            .await
        {
            Ok(outcome) => {
                let status = match outcome {
                    PollOutcome::Completed(_) => "completed",
                    PollOutcome::Failed(_) => "failed",
                    PollOutcome::TimedOut => "timeout",
                };
                let duration = job_started.elapsed();
                tracing::info!(user_id, status, duration_ms = duration.as_millis() as u64, "Job finished");
                results.push(UserResult {
                    status: status.to_string(),
                    duration,
                });
                tokio::time::sleep(Duration::from_secs(1)).await;
            }
            Err(e) => {
                tracing::warn!(user_id, error = %e, "Request errored");
                results.push(UserResult {
                    status: "error".to_string(),
                    duration: job_started.elapsed(),
                });
                tokio::time::sleep(Duration::from_secs(5)).await;
            }
        }
    }

    tracing::info!(user_id, requests = results.len(), "User finished");
    results
}

fn env_or<T: std::str::FromStr>(name: &str, fallback: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(fallback)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let target = std::env::var("STRESS_TARGET").unwrap_or_else(|_| DEFAULT_TARGET.to_string());
    let users = env_or("STRESS_USERS", DEFAULT_USERS);
    let duration = Duration::from_secs(env_or("STRESS_DURATION_SECS", DEFAULT_DURATION_SECS));

    println!(
        "Starting stress test: {} users for {}s against {}",
        users,
        duration.as_secs(),
        target
    );

    let run_started = Instant::now();
    let mut handles = Vec::with_capacity(users);
    for user_id in 0..users {
        handles.push(tokio::spawn(simulate_user(
            user_id,
            target.clone(),
            duration,
        )));
    }

    let mut results = Vec::new();
    for handle in handles {
        results.extend(handle.await?);
    }
    let total_time = run_started.elapsed();

    let total = results.len();
    let completed = results.iter().filter(|r| r.status == "completed").count();
    let failed = results.iter().filter(|r| r.status == "failed").count();
    let timeouts = results.iter().filter(|r| r.status == "timeout").count();
    let errors = results.iter().filter(|r| r.status == "error").count();

    let durations: Vec<Duration> = results
        .iter()
        .filter(|r| r.status == "completed")
        .map(|r| r.duration)
        .collect();
    let avg_ms = if durations.is_empty() {
        0
    } else {
        durations.iter().map(|d| d.as_millis()).sum::<u128>() / durations.len() as u128
    };
    let max_ms = durations.iter().map(|d| d.as_millis()).max().unwrap_or(0);
    let min_ms = durations.iter().map(|d| d.as_millis()).min().unwrap_or(0);

    println!("\nSTRESS TEST RESULTS");
    println!("===================");
    println!("Total requests:   {}", total);
    println!(
        "Success rate:     {:.2}%",
        if total > 0 {
            completed as f64 / total as f64 * 100.0
        } else {
            0.0
        }
    );
    println!(
        "Requests/second:  {:.2}",
        total as f64 / total_time.as_secs_f64()
    );
    println!("Avg duration:     {}ms", avg_ms);
    println!("Max duration:     {}ms", max_ms);
    println!("Min duration:     {}ms", min_ms);
    println!("Failed:           {}", failed);
    println!("Timeouts:         {}", timeouts);
    println!("Errors:           {}", errors);

    Ok(())
}
