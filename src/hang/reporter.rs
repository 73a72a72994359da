use crate::hang::types::{HangSummary, OutcomeKind};
use crate::limits::LimitStatus;
use crate::network::Endpoint;

/// Receives the progress of a hang run.
///
/// Called from the orchestrator and from every dial task, so implementations
/// must tolerate concurrent calls.
pub trait Reporter: Send + Sync + 'static {
    fn hanging(&self, count: usize, endpoint: &Endpoint);

    fn limit(&self, status: &LimitStatus);

    fn connected(&self, index: usize);

    fn connection_error(&self, index: usize, kind: &OutcomeKind);

    fn done(&self, summary: &HangSummary);
}

/// Prints progress lines to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutReporter;

impl Reporter for StdoutReporter {
    fn hanging(&self, count: usize, endpoint: &Endpoint) {
        println!("hanging {count} fds at {endpoint}");
    }

    fn limit(&self, status: &LimitStatus) {
        println!("{status}");
    }

    fn connected(&self, index: usize) {
        println!("conn {index} connected");
    }

    fn connection_error(&self, index: usize, kind: &OutcomeKind) {
        println!("conn {index} error: {kind}");
    }

    fn done(&self, _summary: &HangSummary) {
        println!("done");
    }
}
