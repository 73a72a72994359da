use thiserror::Error;

#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("invalid multiaddr: {0}")]
    InvalidAddress(String),

    #[error(
        "unsupported multiaddr {0}: expected /ip4|ip6|dns|dns4|dns6/<host>/tcp/<port>, \
         /ip4|ip6/<host>/udp/<port> or /unix/<path>"
    )]
    UnsupportedAddress(String),

    #[error("dial {target}: {source}")]
    ConnectFailed {
        target: String,
        #[source]
        source: std::io::Error,
    },
}

impl NetworkError {
    pub fn connect_failed(target: impl ToString, source: std::io::Error) -> Self {
        NetworkError::ConnectFailed {
            target: target.to_string(),
            source,
        }
    }
}

pub type NetworkResult<T> = Result<T, NetworkError>;
