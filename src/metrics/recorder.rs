//! Metrics recorder for hang runs

use metrics::{counter, describe_counter, describe_gauge, gauge};
use std::sync::atomic::{AtomicBool, Ordering};

static METRICS_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Initialize metric descriptions (call once at startup)
pub fn init_metrics() {
    if METRICS_INITIALIZED.swap(true, Ordering::SeqCst) {
        return;
    }

    describe_counter!("hang_fds_dials_total", "Total number of dial tasks launched");
    describe_counter!(
        "hang_fds_connections_total",
        "Total number of dials that connected"
    );
    describe_counter!(
        "hang_fds_outcomes_total",
        "Terminal outcomes of dial tasks, by kind"
    );
    describe_counter!(
        "hang_fds_limit_raises_total",
        "Times the descriptor limit had to be raised"
    );
    describe_gauge!(
        "hang_fds_open_connections",
        "Connections currently held open"
    );
    describe_gauge!("hang_fds_fd_limit", "Soft descriptor limit after raising");
}

/// Record a dial task being launched
pub fn record_dial_started() {
    counter!("hang_fds_dials_total").increment(1);
}

/// Record a dial task's terminal outcome
pub fn record_outcome(kind: &'static str) {
    counter!("hang_fds_outcomes_total", "kind" => kind).increment(1);
}

pub fn record_limit_raised(limit: u64) {
    counter!("hang_fds_limit_raises_total").increment(1);
    gauge!("hang_fds_fd_limit").set(limit as f64);
}

/// Counts one connection as open for as long as it lives.
///
/// The open-connections gauge goes back down when this is dropped, including
/// while a panicking task unwinds.
#[must_use = "the connection counts as open only while this is held"]
pub struct OpenConnection(());

impl OpenConnection {
    pub fn new() -> Self {
        counter!("hang_fds_connections_total").increment(1);
        gauge!("hang_fds_open_connections").increment(1.0);
        Self(())
    }
}

impl Default for OpenConnection {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for OpenConnection {
    fn drop(&mut self) {
        gauge!("hang_fds_open_connections").decrement(1.0);
    }
}
