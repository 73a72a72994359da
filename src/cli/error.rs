use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    InvalidArgument(String),
}

pub type CliResult<T> = Result<T, CliError>;
