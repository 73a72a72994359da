use crate::network::error::{NetworkError, NetworkResult};
use crate::network::types::{DialTarget, Host, IpFamily};
use multiaddr::{Multiaddr, Protocol};
use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

/// A parsed multiaddr that is known to be dialable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    addr: Multiaddr,
    target: DialTarget,
}

impl Endpoint {
    pub fn parse(s: &str) -> NetworkResult<Self> {
        s.parse()
    }

    pub fn multiaddr(&self) -> &Multiaddr {
        &self.addr
    }

    pub fn target(&self) -> &DialTarget {
        &self.target
    }
}

impl TryFrom<Multiaddr> for Endpoint {
    type Error = NetworkError;

    fn try_from(addr: Multiaddr) -> NetworkResult<Self> {
        let target = dial_target(&addr)?;
        Ok(Self { addr, target })
    }
}

impl FromStr for Endpoint {
    type Err = NetworkError;

    fn from_str(s: &str) -> NetworkResult<Self> {
        let addr =
            Multiaddr::from_str(s).map_err(|e| NetworkError::InvalidAddress(e.to_string()))?;
        Self::try_from(addr)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.addr, f)
    }
}

fn dial_target(addr: &Multiaddr) -> NetworkResult<DialTarget> {
    let unsupported = || NetworkError::UnsupportedAddress(addr.to_string());
    let mut protocols = addr.iter();

    let target = match (protocols.next(), protocols.next()) {
        (Some(Protocol::Ip4(ip)), Some(Protocol::Tcp(port))) => DialTarget::Tcp {
            host: Host::Ip(ip.into()),
            port,
        },
        (Some(Protocol::Ip6(ip)), Some(Protocol::Tcp(port))) => DialTarget::Tcp {
            host: Host::Ip(ip.into()),
            port,
        },
        (Some(Protocol::Dns(name)), Some(Protocol::Tcp(port))) => DialTarget::Tcp {
            host: named(&name, None),
            port,
        },
        (Some(Protocol::Dns4(name)), Some(Protocol::Tcp(port))) => DialTarget::Tcp {
            host: named(&name, Some(IpFamily::V4)),
            port,
        },
        (Some(Protocol::Dns6(name)), Some(Protocol::Tcp(port))) => DialTarget::Tcp {
            host: named(&name, Some(IpFamily::V6)),
            port,
        },
        (Some(Protocol::Ip4(ip)), Some(Protocol::Udp(port))) => {
            DialTarget::Udp(SocketAddr::new(ip.into(), port))
        }
        (Some(Protocol::Ip6(ip)), Some(Protocol::Udp(port))) => {
            DialTarget::Udp(SocketAddr::new(ip.into(), port))
        }
        (Some(Protocol::Unix(path)), None) if cfg!(unix) => {
            DialTarget::Unix(PathBuf::from(path.into_owned()))
        }
        _ => return Err(unsupported()),
    };

    // Trailing protocols (/ws, /p2p/..., ...) are not spoken here.
    if protocols.next().is_some() {
        return Err(unsupported());
    }

    Ok(target)
}

fn named(name: &str, family: Option<IpFamily>) -> Host {
    Host::Name {
        name: name.to_string(),
        family,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;
    use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

    #[test]
    fn test_parse_ip4_tcp() {
        let endpoint = Endpoint::parse("/ip4/127.0.0.1/tcp/80").unwrap();
        assert_eq!(
            endpoint.target(),
            &DialTarget::Tcp {
                host: Host::Ip(IpAddr::V4(Ipv4Addr::LOCALHOST)),
                port: 80
            }
        );
        assert_eq!(endpoint.to_string(), "/ip4/127.0.0.1/tcp/80");
        assert_eq!(endpoint.target().to_string(), "tcp 127.0.0.1:80");
    }

    #[test]
    fn test_parse_ip6_tcp() {
        let endpoint = Endpoint::parse("/ip6/::1/tcp/4001").unwrap();
        assert_eq!(endpoint.target().to_string(), "tcp [::1]:4001");
        assert!(matches!(
            endpoint.target(),
            DialTarget::Tcp { host: Host::Ip(IpAddr::V6(ip)), port: 4001 } if *ip == Ipv6Addr::LOCALHOST
        ));
    }

    #[test]
    fn test_parse_dns4_tcp() {
        let endpoint = Endpoint::parse("/dns4/localhost/tcp/8080").unwrap();
        assert_eq!(
            endpoint.target(),
            &DialTarget::Tcp {
                host: Host::Name {
                    name: "localhost".into(),
                    family: Some(IpFamily::V4)
                },
                port: 8080
            }
        );
    }

    #[test]
    fn test_parse_udp() {
        let endpoint = Endpoint::parse("/ip4/10.0.0.1/udp/53").unwrap();
        assert_eq!(
            endpoint.target(),
            &DialTarget::Udp("10.0.0.1:53".parse().unwrap())
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_unix_from_multiaddr() {
        let addr = Multiaddr::empty().with(Protocol::Unix(Cow::Borrowed("/tmp/hang.sock")));
        let endpoint = Endpoint::try_from(addr).unwrap();
        assert_eq!(
            endpoint.target(),
            &DialTarget::Unix(PathBuf::from("/tmp/hang.sock"))
        );
    }

    #[test]
    fn test_reject_garbage() {
        let err = Endpoint::parse("not-an-address").unwrap_err();
        assert!(matches!(err, NetworkError::InvalidAddress(_)));
    }

    #[test]
    fn test_reject_missing_transport() {
        let err = Endpoint::parse("/ip4/127.0.0.1").unwrap_err();
        assert!(matches!(err, NetworkError::UnsupportedAddress(_)));
    }

    #[test]
    fn test_reject_trailing_protocol() {
        let err = Endpoint::parse("/ip4/127.0.0.1/tcp/80/ws").unwrap_err();
        assert!(matches!(err, NetworkError::UnsupportedAddress(_)));
    }
}
