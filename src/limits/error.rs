use thiserror::Error;

#[derive(Error, Debug)]
pub enum LimitError {
    #[error("failed to read fd limit: {0}")]
    Unavailable(std::io::Error),

    #[error("failed to raise fd limit to {requested} (still {achieved})")]
    RaiseFailed { requested: u64, achieved: u64 },

    #[error("cannot hold {count} fds plus {headroom} spare: fd count overflows")]
    TooMany { count: usize, headroom: u64 },
}

pub type LimitResult<T> = Result<T, LimitError>;
