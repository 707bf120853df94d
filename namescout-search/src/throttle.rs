//! Request pacing: a shared rate limiter and the per-engine courtesy delay.
//!
//! Both are explicit values injected into the orchestrator rather than
//! ambient sleeps, so tests can run with [`DelayPolicy::none`] and
//! [`RateLimiter::unlimited`] and never wait on the wall clock.

use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Enforces a minimum interval between the start of consecutive requests.
///
/// Clones share state, so a single limiter throttles the aggregate request
/// rate of every concurrent branch. Waiters are served in lock order.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    min_interval: Duration,
    last_request: Arc<Mutex<Option<Instant>>>,
}

impl RateLimiter {
    /// Create a limiter allowing one request start per `min_interval`.
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_request: Arc::new(Mutex::new(None)),
        }
    }

    /// A limiter that never waits.
    pub fn unlimited() -> Self {
        Self::new(Duration::ZERO)
    }

    /// The configured minimum interval.
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Wait until a request may start, then record the start time.
    pub async fn acquire(&self) {
        if self.min_interval.is_zero() {
            return;
        }
        let mut last = self.last_request.lock().await;
        if let Some(previous) = *last {
            let ready_at = previous + self.min_interval;
            let now = Instant::now();
            if ready_at > now {
                tokio::time::sleep(ready_at - now).await;
            }
        }
        *last = Some(Instant::now());
    }
}

/// Randomised pause inserted after every engine fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayPolicy {
    min: Duration,
    max: Duration,
}

impl DelayPolicy {
    /// Uniform delay in `[min, max]`. Bounds are swapped if given reversed.
    pub fn new(min: Duration, max: Duration) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Build from a `(min, max)` millisecond range, as stored in config.
    pub fn from_millis((min, max): (u64, u64)) -> Self {
        Self::new(Duration::from_millis(min), Duration::from_millis(max))
    }

    /// No delay at all.
    pub fn none() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    /// Lower bound.
    pub fn min(&self) -> Duration {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> Duration {
        self.max
    }

    /// Draw a delay from the configured range.
    pub fn sample(&self) -> Duration {
        if self.min == self.max {
            return self.min;
        }
        let min_ms = self.min.as_millis() as u64;
        let max_ms = self.max.as_millis() as u64;
        Duration::from_millis(rand::thread_rng().gen_range(min_ms..=max_ms))
    }

    /// Sleep for a sampled delay.
    pub async fn pause(&self) {
        let delay = self.sample();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

impl Default for DelayPolicy {
    fn default() -> Self {
        Self::from_millis((800, 2500))
    }
}
