use crate::network::connection::Connection;
use crate::network::error::{NetworkError, NetworkResult};
use crate::network::types::{DialTarget, Host};
use std::io;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use tokio::net::{TcpStream, UdpSocket};

/// Opens connections to dial targets. No timeouts: a dial waits for as long
/// as the operating system lets it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dialer;

impl Dialer {
    pub fn new() -> Self {
        Self
    }

    pub async fn dial(&self, target: &DialTarget) -> NetworkResult<Connection> {
        tracing::debug!(dial_target = %target, "dialing");

        let result = match target {
            DialTarget::Tcp { host, port } => connect_tcp(host, *port).await.map(Connection::Tcp),
            DialTarget::Udp(addr) => connect_udp(*addr).await.map(Connection::Udp),
            DialTarget::Unix(path) => connect_unix(path).await,
        };

        result.map_err(|e| NetworkError::connect_failed(target, e))
    }
}

async fn connect_tcp(host: &Host, port: u16) -> io::Result<TcpStream> {
    let (name, family) = match host {
        Host::Ip(ip) => return TcpStream::connect((*ip, port)).await,
        Host::Name { name, family } => (name, family),
    };

    let mut last_err = None;
    for addr in tokio::net::lookup_host((name.as_str(), port)).await? {
        if family.map_or(false, |family| !family.matches(&addr)) {
            continue;
        }
        match TcpStream::connect(addr).await {
            Ok(stream) => return Ok(stream),
            Err(e) => last_err = Some(e),
        }
    }

    Err(last_err.unwrap_or_else(|| {
        io::Error::new(
            io::ErrorKind::AddrNotAvailable,
            format!("no usable addresses for {name}"),
        )
    }))
}

async fn connect_udp(addr: SocketAddr) -> io::Result<UdpSocket> {
    let local: SocketAddr = if addr.is_ipv4() {
        (Ipv4Addr::UNSPECIFIED, 0).into()
    } else {
        (Ipv6Addr::UNSPECIFIED, 0).into()
    };
    let socket = UdpSocket::bind(local).await?;
    socket.connect(addr).await?;
    Ok(socket)
}

#[cfg(unix)]
async fn connect_unix(path: &std::path::Path) -> io::Result<Connection> {
    tokio::net::UnixStream::connect(path)
        .await
        .map(Connection::Unix)
}

#[cfg(not(unix))]
async fn connect_unix(_path: &std::path::Path) -> io::Result<Connection> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "unix domain sockets are not available on this platform",
    ))
}
