use crate::hang::error::HangResult;
use crate::hang::pacer::LaunchPacer;
use crate::hang::reporter::{Reporter, StdoutReporter};
use crate::hang::types::{HangConfig, HangSummary, Outcome, OutcomeKind};
use crate::limits::{LimitError, LimitRaiser, LimitSource, SystemLimits};
use crate::metrics;
use crate::network::{DialTarget, Dialer, Endpoint, ReadEnd};
use futures::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Opens `count` connections to an endpoint and holds every one of them
/// until the peer closes it or the process dies.
pub struct ConnectionHanger<S, R> {
    raiser: LimitRaiser<S>,
    reporter: Arc<R>,
    dialer: Dialer,
    config: HangConfig,
}

impl ConnectionHanger<SystemLimits, StdoutReporter> {
    pub fn with_defaults() -> Self {
        Self::new(SystemLimits, StdoutReporter, HangConfig::default())
    }
}

impl<S: LimitSource, R: Reporter> ConnectionHanger<S, R> {
    pub fn new(source: S, reporter: R, config: HangConfig) -> Self {
        Self {
            raiser: LimitRaiser::new(source),
            reporter: Arc::new(reporter),
            dialer: Dialer::new(),
            config,
        }
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn limits(&self) -> &S {
        self.raiser.source()
    }

    /// Raise the descriptor limit, launch one dial task per connection and
    /// wait for all of them to end.
    ///
    /// Only the limit negotiation can fail. Once dialing starts, per
    /// connection failures are reported and tallied, never returned.
    pub async fn hang(&self, count: usize, endpoint: &Endpoint) -> HangResult<HangSummary> {
        self.reporter.hanging(count, endpoint);

        let required = u64::try_from(count)
            .ok()
            .and_then(|count| count.checked_add(self.config.headroom))
            .ok_or(LimitError::TooMany {
                count,
                headroom: self.config.headroom,
            })?;
        let status = self.raiser.ensure_capacity(required)?;
        if status.was_raised() {
            metrics::record_limit_raised(status.current());
        }
        self.reporter.limit(&status);

        // Each task sends exactly once, so the queue never outgrows `count`.
        let (tx, mut rx) = mpsc::unbounded_channel();
        let pacer = LaunchPacer::new(self.config.launch_delay);
        let target = Arc::new(endpoint.target().clone());

        for index in 0..count {
            pacer.wait().await;

            let task = DialTask {
                index,
                target: target.clone(),
                dialer: self.dialer,
                reporter: self.reporter.clone(),
            };
            let tx = tx.clone();
            metrics::record_dial_started();

            tokio::spawn(async move {
                let kind = AssertUnwindSafe(task.run())
                    .catch_unwind()
                    .await
                    .unwrap_or_else(|panic| {
                        metrics::record_outcome("crashed");
                        OutcomeKind::Crashed(panic_message(&*panic))
                    });
                let _ = tx.send(Outcome { index, kind });
            });
        }
        drop(tx);

        let mut summary = HangSummary::new(count);
        while summary.collected() < count {
            let Some(outcome) = rx.recv().await else {
                // Every sender is gone; only possible if the runtime dropped tasks.
                tracing::warn!(
                    collected = summary.collected(),
                    expected = count,
                    "dial tasks vanished without reporting"
                );
                break;
            };

            summary.record(&outcome.kind);
            if outcome.kind.is_error() {
                tracing::debug!(index = outcome.index, kind = outcome.kind.label(), "conn ended");
                self.reporter.connection_error(outcome.index, &outcome.kind);
            }
        }

        self.reporter.done(&summary);
        Ok(summary)
    }
}

/// Hang `count` connections at `endpoint` with system limits, default
/// pacing and stdout progress.
pub async fn hang(count: usize, endpoint: &Endpoint) -> HangResult<HangSummary> {
    ConnectionHanger::with_defaults().hang(count, endpoint).await
}

struct DialTask<R> {
    index: usize,
    target: Arc<DialTarget>,
    dialer: Dialer,
    reporter: Arc<R>,
}

impl<R: Reporter> DialTask<R> {
    async fn run(self) -> OutcomeKind {
        let mut conn = match self.dialer.dial(&self.target).await {
            Ok(conn) => conn,
            Err(e) => {
                metrics::record_outcome("connect_failed");
                return OutcomeKind::ConnectFailed(e);
            }
        };

        tracing::debug!(index = self.index, kind = conn.kind(), "connected");
        // Released on every exit path, unwinding included.
        let _open = metrics::OpenConnection::new();
        self.reporter.connected(self.index);

        // Read until the process exits or the connection goes away.
        let kind = match conn.read_until_closed().await {
            ReadEnd::Closed => OutcomeKind::Closed,
            ReadEnd::Failed(e) => OutcomeKind::ReadFailed(e),
        };
        metrics::record_outcome(kind.label());
        kind
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(msg) = panic.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = panic.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}
