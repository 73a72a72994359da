//! Open a fixed number of connections to one address and hold them open.
//!
//! A test fixture for exercising a peer's connection-acceptance capacity:
//! the descriptor limit is raised once, then one task per connection dials
//! the endpoint and blocks reading until the connection ends. Nothing is
//! ever written to the peer.

pub mod cli;
pub mod hang;
pub mod limits;
pub mod logging;
pub mod metrics;
pub mod network;

pub use hang::{hang, ConnectionHanger, HangConfig, HangError, HangResult, HangSummary};
pub use limits::{LimitError, LimitRaiser, LimitStatus, SystemLimits};
pub use network::{Endpoint, NetworkError};
