//! Connection hang orchestration.
//!
//! Fans out one dial task per requested connection, each holding its
//! connection open by reading until the peer goes away, and fans every
//! task's outcome back in before reporting completion.

pub mod error;
pub mod orchestrator;
pub mod pacer;
pub mod reporter;
pub mod types;

pub use error::{HangError, HangResult};
pub use orchestrator::{hang, ConnectionHanger};
pub use pacer::LaunchPacer;
pub use reporter::{Reporter, StdoutReporter};
pub use types::{
    HangConfig, HangSummary, Outcome, OutcomeKind, DEFAULT_HEADROOM, DEFAULT_LAUNCH_DELAY,
};
