use bytes::BytesMut;
use std::io;
use tokio::io::AsyncReadExt;
use tokio::net::{TcpStream, UdpSocket};

#[cfg(unix)]
use tokio::net::UnixStream;

const READ_BUFFER_SIZE: usize = 1024;

/// One open outbound connection, held until the peer goes away.
#[derive(Debug)]
pub enum Connection {
    Tcp(TcpStream),
    Udp(UdpSocket),
    #[cfg(unix)]
    Unix(UnixStream),
}

/// How a connection's read loop ended.
#[derive(Debug)]
pub enum ReadEnd {
    /// The peer closed the connection, or the handle was already closed.
    Closed,
    Failed(io::Error),
}

impl ReadEnd {
    pub fn is_clean(&self) -> bool {
        matches!(self, ReadEnd::Closed)
    }
}

impl From<io::Error> for ReadEnd {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::UnexpectedEof | io::ErrorKind::NotConnected | io::ErrorKind::BrokenPipe => {
                ReadEnd::Closed
            }
            _ => ReadEnd::Failed(err),
        }
    }
}

impl Connection {
    /// Read and discard everything the peer sends until the connection ends.
    pub async fn read_until_closed(&mut self) -> ReadEnd {
        let mut buf = BytesMut::with_capacity(READ_BUFFER_SIZE);

        loop {
            buf.clear();
            let read = match self {
                Connection::Tcp(stream) => stream.read_buf(&mut buf).await,
                #[cfg(unix)]
                Connection::Unix(stream) => stream.read_buf(&mut buf).await,
                Connection::Udp(socket) => match socket.recv_buf(&mut buf).await {
                    // Empty datagrams are legal and say nothing about the peer.
                    Ok(0) => continue,
                    other => other,
                },
            };

            match read {
                Ok(0) => return ReadEnd::Closed,
                Ok(n) => tracing::trace!(bytes = n, "discarded"),
                Err(e) => return ReadEnd::from(e),
            }
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Connection::Tcp(_) => "tcp",
            Connection::Udp(_) => "udp",
            #[cfg(unix)]
            Connection::Unix(_) => "unix",
        }
    }
}
