//! Metrics for dial tasks
//!
//! Exposed through the `metrics` facade; whatever recorder the embedding
//! process installs receives them. Without one they are no-ops.
//!
//! - Dial attempts and successful connections
//! - Terminal outcomes by kind
//! - Connections currently held open

pub mod recorder;

pub use recorder::{
    init_metrics, record_dial_started, record_limit_raised, record_outcome, OpenConnection,
};
