pub mod connection;
pub mod dialer;
pub mod endpoint;
pub mod error;
pub mod types;

pub use connection::{Connection, ReadEnd};
pub use dialer::Dialer;
pub use endpoint::Endpoint;
pub use error::{NetworkError, NetworkResult};
pub use types::{DialTarget, Host, IpFamily};
