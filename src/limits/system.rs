use crate::limits::types::{DescriptorLimits, LimitSource};
use std::io;

/// The calling process's real `RLIMIT_NOFILE`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLimits;

#[cfg(unix)]
impl LimitSource for SystemLimits {
    fn read(&self) -> io::Result<DescriptorLimits> {
        let (soft, hard) = rlimit::getrlimit(rlimit::Resource::NOFILE)?;
        Ok(DescriptorLimits { soft, hard })
    }

    fn write(&self, limits: DescriptorLimits) -> io::Result<()> {
        rlimit::setrlimit(rlimit::Resource::NOFILE, limits.soft, limits.hard)
    }
}

// No per-process descriptor ceiling to negotiate here.
#[cfg(not(unix))]
impl LimitSource for SystemLimits {
    fn read(&self) -> io::Result<DescriptorLimits> {
        Ok(DescriptorLimits {
            soft: u64::MAX,
            hard: u64::MAX,
        })
    }

    fn write(&self, _limits: DescriptorLimits) -> io::Result<()> {
        Ok(())
    }
}
