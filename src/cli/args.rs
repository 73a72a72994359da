use crate::cli::error::{CliError, CliResult};
use crate::network::{Endpoint, NetworkError};
use clap::Parser;

const EXAMPLES: &str = "\
Opens <fd-num> connections to <multiaddr> and keeps them open until the
process is killed. Useful for test suites.

Examples:
    # open 16 tcp sockets at 127.0.0.1:80
    hang-fds 16 /ip4/127.0.0.1/tcp/80

    # open 1024 unix domain sockets at /foo/var.sock
    hang-fds 1024 /unix/%2Ffoo%2Fvar.sock";

#[derive(Parser, Debug)]
#[command(
    name = "hang-fds",
    about = "Open file descriptors at a multiaddr and hold them open",
    after_help = EXAMPLES
)]
pub struct Args {
    /// Number of connections to open
    #[arg(value_name = "fd-num", allow_negative_numbers = true)]
    pub fd_num: String,

    /// Address to connect to, e.g. /ip4/127.0.0.1/tcp/80
    #[arg(value_name = "multiaddr")]
    pub multiaddr: String,
}

impl Args {
    /// Turn the raw positionals into a connection count and an endpoint.
    /// Touches neither the network nor any resource limit.
    pub fn validate(&self) -> CliResult<(usize, Endpoint)> {
        let count = self.fd_num.parse::<usize>().map_err(|_| {
            CliError::InvalidArgument("fd-num argument must be a number".to_string())
        })?;

        let endpoint = Endpoint::parse(&self.multiaddr).map_err(|e| match e {
            NetworkError::UnsupportedAddress(_) => CliError::InvalidArgument(format!(
                "multiaddr argument must be a valid multiaddr: {e}"
            )),
            _ => CliError::InvalidArgument(
                "multiaddr argument must be a valid multiaddr".to_string(),
            ),
        })?;

        Ok((count, endpoint))
    }
}
