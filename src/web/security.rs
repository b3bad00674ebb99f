use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, SystemTime};

/// Simple in-memory rate limiter, keyed by `"<action>:<client-ip>"`.
/// Protects the auth form submissions; listing pages are not limited.
pub struct RateLimiter {
    requests: Mutex<HashMap<String, Vec<SystemTime>>>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self {
            requests: Mutex::new(HashMap::new()),
        }
    }

    /// Returns true if the request is allowed, false once `max_requests`
    /// have been seen inside `window`.
    pub fn check_rate_limit(
        &self,
        key: &str,
        max_requests: usize,
        window: Duration,
    ) -> bool {
        let now = SystemTime::now();
        let mut requests = self
            .requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let entry = requests.entry(key.to_string()).or_default();

        entry.retain(|&time| {
            now.duration_since(time).unwrap_or(Duration::from_secs(0)) < window
        });

        if entry.len() >= max_requests {
            return false;
        }

        entry.push(now);

        // Keep the map from growing without bound.
        requests.retain(|_, times| !times.is_empty());

        true
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}
