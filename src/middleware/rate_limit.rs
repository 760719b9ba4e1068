//! Rate limiting for authentication endpoints
//!
//! A sliding-window limiter with a small burst allowance, keyed by an
//! arbitrary string (the submitted email for login/signup attempts). Entries
//! live in memory; restarting the service resets the windows.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

use crate::utils::errors::{ApiError, Result};

/// Rate limit configuration
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Maximum requests per window
    pub max_requests: u32,
    /// Time window duration
    pub window_duration: Duration,
    /// Burst allowance (extra requests allowed in short bursts)
    pub burst_allowance: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 10,
            window_duration: Duration::from_secs(60),
            burst_allowance: 5,
        }
    }
}

/// Tracking entry for one key
#[derive(Debug, Clone)]
struct RateLimitEntry {
    requests: Vec<Instant>,
    burst_used: u32,
    last_reset: Instant,
}

impl RateLimitEntry {
    fn new() -> Self {
        Self {
            requests: Vec::new(),
            burst_used: 0,
            last_reset: Instant::now(),
        }
    }

    /// Clean up old requests outside the window
    fn cleanup(&mut self, window_duration: Duration) {
        let cutoff = Instant::now() - window_duration;
        self.requests.retain(|&time| time > cutoff);

        if self.last_reset.elapsed() > window_duration {
            self.burst_used = 0;
            self.last_reset = Instant::now();
        }
    }

    /// Check if a request is allowed
    fn is_allowed(&mut self, config: &RateLimitConfig) -> bool {
        self.cleanup(config.window_duration);

        let current_requests = self.requests.len() as u32;

        if current_requests < config.max_requests {
            return true;
        }

        if self.burst_used < config.burst_allowance {
            self.burst_used += 1;
            return true;
        }

        false
    }

    fn record_request(&mut self) {
        self.requests.push(Instant::now());
    }

    fn is_stale(&self, cutoff: Instant) -> bool {
        !self.requests.iter().any(|&time| time > cutoff)
    }
}

#[derive(Debug)]
struct LimiterState {
    entries: HashMap<String, RateLimitEntry>,
    last_cleanup: Instant,
}

/// String-keyed rate limiter shared across handlers
///
/// Keys arrive from unauthenticated requests, so the table is swept once
/// per window from inside `check`; it stays bounded by the number of
/// distinct keys seen within the last two windows.
#[derive(Clone)]
pub struct RateLimiter {
    config: RateLimitConfig,
    state: Arc<Mutex<LimiterState>>,
}

impl RateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            config,
            state: Arc::new(Mutex::new(LimiterState {
                entries: HashMap::new(),
                last_cleanup: Instant::now(),
            })),
        }
    }

    /// Record one request for `key`, rejecting it when over the limit
    pub fn check(&self, key: &str) -> Result<()> {
        let mut state = self.state.lock().expect("rate limiter lock poisoned");

        if state.last_cleanup.elapsed() > self.config.window_duration {
            let cutoff = Instant::now() - self.config.window_duration * 2;
            state.entries.retain(|_, entry| !entry.is_stale(cutoff));
            state.last_cleanup = Instant::now();
            debug!(remaining_entries = state.entries.len(), "Swept stale rate limit entries");
        }

        let entry = state
            .entries
            .entry(key.to_string())
            .or_insert_with(RateLimitEntry::new);

        if entry.is_allowed(&self.config) {
            entry.record_request();
            debug!(key = key, "Rate limit check passed");
            Ok(())
        } else {
            warn!(key = key, "Rate limit exceeded");
            Err(ApiError::RateLimitExceeded)
        }
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(RateLimitConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_basic() {
        let config = RateLimitConfig {
            max_requests: 3,
            window_duration: Duration::from_secs(60),
            burst_allowance: 1,
        };

        let limiter = RateLimiter::new(config);

        // First 3 requests should pass
        assert!(limiter.check("asha@college.edu").is_ok());
        assert!(limiter.check("asha@college.edu").is_ok());
        assert!(limiter.check("asha@college.edu").is_ok());

        // 4th request should use burst allowance
        assert!(limiter.check("asha@college.edu").is_ok());

        // 5th request should fail
        assert!(limiter.check("asha@college.edu").is_err());
    }

    #[test]
    fn test_keys_tracked_independently() {
        let config = RateLimitConfig {
            max_requests: 1,
            window_duration: Duration::from_secs(60),
            burst_allowance: 0,
        };

        let limiter = RateLimiter::new(config);

        assert!(limiter.check("a@college.edu").is_ok());
        assert!(limiter.check("a@college.edu").is_err());
        assert!(limiter.check("b@college.edu").is_ok());
    }

    #[test]
    fn test_recent_entries_survive_sweep() {
        let limiter = RateLimiter::default();

        limiter.check("a@college.edu").unwrap();

        let state = limiter.state.lock().unwrap();
        assert_eq!(state.entries.len(), 1);
    }

    #[test]
    fn test_stale_entries_are_swept() {
        let config = RateLimitConfig {
            max_requests: 10,
            window_duration: Duration::from_millis(10),
            burst_allowance: 0,
        };
        let limiter = RateLimiter::new(config);

        for i in 0..100 {
            limiter.check(&format!("user{i}@college.edu")).unwrap();
        }
        assert_eq!(limiter.state.lock().unwrap().entries.len(), 100);

        // let all entries fall out of the two-window retention horizon
        std::thread::sleep(Duration::from_millis(50));
        limiter.check("fresh@college.edu").unwrap();

        let state = limiter.state.lock().unwrap();
        assert_eq!(state.entries.len(), 1);
        assert!(state.entries.contains_key("fresh@college.edu"));
    }
}
