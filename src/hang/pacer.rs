//! Launch pacing for dial tasks using the governor crate

use governor::{
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter,
};
use std::time::Duration;

/// Spaces out dial launches so at most one starts per `delay`.
///
/// Only a workaround for platforms that fail dials issued back to back; it
/// orders nothing.
pub struct LaunchPacer {
    limiter: Option<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl LaunchPacer {
    /// A zero delay disables pacing.
    pub fn new(delay: Duration) -> Self {
        let limiter = Quota::with_period(delay).map(RateLimiter::direct);
        Self { limiter }
    }

    /// Wait until the next launch is allowed.
    pub async fn wait(&self) {
        if let Some(limiter) = &self.limiter {
            limiter.until_ready().await;
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.limiter.is_some()
    }
}
