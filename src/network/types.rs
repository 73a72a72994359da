use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpFamily {
    V4,
    V6,
}

impl IpFamily {
    pub fn matches(&self, addr: &SocketAddr) -> bool {
        match self {
            IpFamily::V4 => addr.is_ipv4(),
            IpFamily::V6 => addr.is_ipv6(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Host {
    Ip(IpAddr),
    /// A DNS name, optionally restricted to one address family.
    Name {
        name: String,
        family: Option<IpFamily>,
    },
}

/// Something a [`Dialer`](crate::network::Dialer) knows how to connect to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialTarget {
    Tcp { host: Host, port: u16 },
    Udp(SocketAddr),
    Unix(PathBuf),
}

impl fmt::Display for DialTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DialTarget::Tcp {
                host: Host::Ip(ip),
                port,
            } => write!(f, "tcp {}", SocketAddr::new(*ip, *port)),
            DialTarget::Tcp {
                host: Host::Name { name, .. },
                port,
            } => write!(f, "tcp {name}:{port}"),
            DialTarget::Udp(addr) => write!(f, "udp {addr}"),
            DialTarget::Unix(path) => write!(f, "unix {}", path.display()),
        }
    }
}
