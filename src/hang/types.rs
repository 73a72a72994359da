use crate::network::NetworkError;
use std::fmt;
use std::io;
use std::time::Duration;

/// Descriptors kept free for the process itself (stdio, runtime internals).
pub const DEFAULT_HEADROOM: u64 = 10;

/// Gap between consecutive dial launches.
pub const DEFAULT_LAUNCH_DELAY: Duration = Duration::from_millis(1);

#[derive(Debug, Clone)]
pub struct HangConfig {
    /// Added to the connection count when negotiating the descriptor limit.
    pub headroom: u64,
    /// Pacing between launches. Some platforms drop dials issued back to
    /// back; the delay has no other meaning. Zero disables pacing.
    pub launch_delay: Duration,
}

impl Default for HangConfig {
    fn default() -> Self {
        Self {
            headroom: DEFAULT_HEADROOM,
            launch_delay: DEFAULT_LAUNCH_DELAY,
        }
    }
}

/// Terminal result of one dial task.
#[derive(Debug)]
pub struct Outcome {
    pub index: usize,
    pub kind: OutcomeKind,
}

#[derive(Debug)]
pub enum OutcomeKind {
    ConnectFailed(NetworkError),
    ReadFailed(io::Error),
    /// Peer closed the connection.
    Closed,
    /// The task panicked before reporting anything else.
    Crashed(String),
}

impl OutcomeKind {
    /// Whether this outcome deserves a diagnostic. Clean closes don't.
    pub fn is_error(&self) -> bool {
        !matches!(self, OutcomeKind::Closed)
    }

    pub fn label(&self) -> &'static str {
        match self {
            OutcomeKind::ConnectFailed(_) => "connect_failed",
            OutcomeKind::ReadFailed(_) => "read_failed",
            OutcomeKind::Closed => "closed",
            OutcomeKind::Crashed(_) => "crashed",
        }
    }
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutcomeKind::ConnectFailed(e) => write!(f, "{e}"),
            OutcomeKind::ReadFailed(e) => write!(f, "{e}"),
            OutcomeKind::Closed => write!(f, "closed by peer"),
            OutcomeKind::Crashed(msg) => write!(f, "task panicked: {msg}"),
        }
    }
}

/// Tally of every outcome collected by one hang run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HangSummary {
    pub launched: usize,
    pub connected: usize,
    pub connect_failed: usize,
    pub read_failed: usize,
    pub closed: usize,
    pub crashed: usize,
}

impl HangSummary {
    pub fn new(launched: usize) -> Self {
        Self {
            launched,
            ..Default::default()
        }
    }

    pub fn record(&mut self, kind: &OutcomeKind) {
        match kind {
            OutcomeKind::ConnectFailed(_) => self.connect_failed += 1,
            OutcomeKind::ReadFailed(_) => {
                self.connected += 1;
                self.read_failed += 1;
            }
            OutcomeKind::Closed => {
                self.connected += 1;
                self.closed += 1;
            }
            OutcomeKind::Crashed(_) => self.crashed += 1,
        }
    }

    pub fn collected(&self) -> usize {
        self.connect_failed + self.read_failed + self.closed + self.crashed
    }

    pub fn is_complete(&self) -> bool {
        self.collected() == self.launched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HangConfig::default();
        assert_eq!(config.headroom, 10);
        assert_eq!(config.launch_delay, Duration::from_millis(1));
    }

    #[test]
    fn test_only_clean_close_is_silent() {
        assert!(!OutcomeKind::Closed.is_error());
        assert!(OutcomeKind::ReadFailed(io::ErrorKind::ConnectionReset.into()).is_error());
        assert!(OutcomeKind::Crashed("boom".into()).is_error());
    }

    #[test]
    fn test_summary_tally() {
        let mut summary = HangSummary::new(4);
        summary.record(&OutcomeKind::Closed);
        summary.record(&OutcomeKind::ReadFailed(io::ErrorKind::ConnectionReset.into()));
        summary.record(&OutcomeKind::Crashed("boom".into()));
        assert!(!summary.is_complete());

        summary.record(&OutcomeKind::ConnectFailed(NetworkError::connect_failed(
            "tcp 127.0.0.1:1",
            io::ErrorKind::ConnectionRefused.into(),
        )));

        assert!(summary.is_complete());
        assert_eq!(summary.connected, 2);
        assert_eq!(summary.collected(), 4);
    }
}
