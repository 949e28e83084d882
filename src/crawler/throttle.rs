//! Fixed-interval request pacing
//!
//! Every page request waits until at least `delay` has passed since the
//! previous one, whether or not that request succeeded.

use std::time::{Duration, Instant};

/// Enforces a minimum interval between consecutive requests
#[derive(Debug, Clone)]
pub struct Throttle {
    delay: Duration,
    last_request_time: Option<Instant>,
}

impl Throttle {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            last_request_time: None,
        }
    }

    /// Builds a throttle from a millisecond delay
    pub fn from_millis(delay_ms: u64) -> Self {
        Self::new(Duration::from_millis(delay_ms))
    }

    /// Time remaining before the next request may start, if any
    pub fn time_until_ready(&self, now: Instant) -> Option<Duration> {
        let last = self.last_request_time?;
        let elapsed = now.saturating_duration_since(last);
        if elapsed >= self.delay {
            None
        } else {
            Some(self.delay - elapsed)
        }
    }

    /// Sleeps until the next request is allowed, then records it as started
    pub async fn wait(&mut self) {
        if let Some(wait) = self.time_until_ready(Instant::now()) {
            tracing::trace!("Throttling for {:?}", wait);
            tokio::time::sleep(wait).await;
        }
        self.last_request_time = Some(Instant::now());
    }
}
