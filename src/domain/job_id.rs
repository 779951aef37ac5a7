use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};

const SUFFIX_LEN: usize = 9;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

// Last issued timestamp component; keeps the prefix non-decreasing even if
// the wall clock steps backwards.
static LAST_MILLIS: AtomicI64 = AtomicI64::new(0);

/// Identifier of one asynchronous job: `job_<unix-millis>_<base36-suffix>`.
///
/// Collisions are accepted as negligible; no uniqueness check is performed
/// against the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(String);

impl JobId {
    pub fn generate() -> Self {
        let now = Utc::now().timestamp_millis();
        let previous = LAST_MILLIS.fetch_max(now, Ordering::Relaxed);
        let millis = previous.max(now);

        let mut rng = rand::rng();
        let suffix: String = (0..SUFFIX_LEN)
            .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
            .collect();

        Self(format!("job_{}_{}", millis, suffix))
    }

    pub fn from_string(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
