pub mod args;
pub mod error;

pub use args::Args;
pub use error::{CliError, CliResult};
