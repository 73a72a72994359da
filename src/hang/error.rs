use thiserror::Error;

#[derive(Error, Debug)]
pub enum HangError {
    #[error(transparent)]
    Limit(#[from] crate::limits::LimitError),
}

pub type HangResult<T> = Result<T, HangError>;
