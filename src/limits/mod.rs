//! Open-file-descriptor limit negotiation.
//!
//! Raises the process soft limit far enough to hold every requested
//! connection plus the descriptors the process needs for itself. Runs once,
//! before any connection is dialed.

pub mod error;
pub mod raiser;
pub mod system;
pub mod types;

pub use error::{LimitError, LimitResult};
pub use raiser::LimitRaiser;
pub use system::SystemLimits;
pub use types::{DescriptorLimits, LimitSource, LimitStatus};
