mod poller;

pub use poller::{
    JobPoller, PollOutcome, PollerError, StartedJob, DEFAULT_MAX_ATTEMPTS, DEFAULT_POLL_INTERVAL,
};
