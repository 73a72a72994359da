use crate::limits::error::{LimitError, LimitResult};
use crate::limits::types::{DescriptorLimits, LimitSource, LimitStatus};

/// Raises the soft descriptor limit to cover a required count.
///
/// Mutates process-wide state, so it must run once and before any
/// connection is opened.
pub struct LimitRaiser<S> {
    source: S,
}

impl<S: LimitSource> LimitRaiser<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Make sure the process may hold at least `required` descriptors.
    ///
    /// The soft limit is raised up to, never past, the hard limit. Whether
    /// the raise worked is decided by re-reading the limit afterwards.
    pub fn ensure_capacity(&self, required: u64) -> LimitResult<LimitStatus> {
        let limits = self.source.read().map_err(LimitError::Unavailable)?;

        if limits.covers(required) {
            tracing::debug!(soft = limits.soft, required, "fd limit already sufficient");
            return Ok(LimitStatus::AlreadySufficient {
                current: limits.soft,
                required,
            });
        }

        let target = DescriptorLimits {
            soft: required.min(limits.hard),
            hard: limits.hard,
        };
        if let Err(e) = self.source.write(target) {
            tracing::warn!(soft = target.soft, hard = target.hard, "setrlimit failed: {}", e);
        }

        let confirmed = self.source.read().map_err(LimitError::Unavailable)?;
        if !confirmed.covers(required) {
            return Err(LimitError::RaiseFailed {
                requested: required,
                achieved: confirmed.soft,
            });
        }

        tracing::debug!(soft = confirmed.soft, required, "fd limit raised");
        Ok(LimitStatus::Raised {
            current: confirmed.soft,
            required,
        })
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
