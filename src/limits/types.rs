use std::fmt;
use std::io;

/// Soft and hard open-file-descriptor limits of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DescriptorLimits {
    pub soft: u64,
    pub hard: u64,
}

impl DescriptorLimits {
    pub fn covers(&self, required: u64) -> bool {
        self.soft >= required
    }
}

/// Where descriptor limits are read from and written to.
pub trait LimitSource {
    fn read(&self) -> io::Result<DescriptorLimits>;

    fn write(&self, limits: DescriptorLimits) -> io::Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitStatus {
    /// The soft limit already covered the requirement; nothing was written.
    AlreadySufficient { current: u64, required: u64 },
    /// The soft limit was raised and the new value confirmed.
    Raised { current: u64, required: u64 },
}

impl LimitStatus {
    pub fn current(&self) -> u64 {
        match self {
            LimitStatus::AlreadySufficient { current, .. } | LimitStatus::Raised { current, .. } => {
                *current
            }
        }
    }

    pub fn was_raised(&self) -> bool {
        matches!(self, LimitStatus::Raised { .. })
    }
}

impl fmt::Display for LimitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LimitStatus::AlreadySufficient { current, required } => {
                write!(f, "already at {current} >= {required} fds")
            }
            LimitStatus::Raised { current, required } => {
                write!(f, "raised fds to {current} >= {required} fds")
            }
        }
    }
}
