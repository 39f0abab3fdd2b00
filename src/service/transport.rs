//! # Transports
//!
//! Blocking TCP and UDP readers that stamp every chunk with its arrival time
//! and feed it to a [`SentenceAssembler`]. Each transport drives exactly one
//! assembler from the thread that calls [`pump`], which keeps the framing of
//! one stream on one thread.

use std::{
    fmt,
    io::{self, Read},
    net::{Ipv4Addr, TcpStream, UdpSocket},
};

use time::OffsetDateTime;
use tracing::{info, trace};

use crate::{SentenceAssembler, Sink, service::ServiceError};

/// Size of a single TCP read.
pub const READ_BUFFER_SIZE: usize = 4096;

/// Largest payload a UDP datagram can carry.
pub const MAX_DATAGRAM_SIZE: usize = 65_507;

/// Transport protocol of a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    /// A TCP connection; reads are arbitrary slices of the stream.
    Tcp,
    /// UDP datagrams; each datagram is one chunk.
    Udp,
}

/// Where the sentences come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// Host to connect to (TCP), or address to listen on (UDP). An IPv4
    /// multicast address makes the UDP socket join that group.
    pub address: String,
    /// Port to connect to or listen on
    pub port: u16,
    /// Transport protocol
    pub protocol: Protocol,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scheme = match self.protocol {
            Protocol::Tcp => "tcp",
            Protocol::Udp => "udp",
        };

        write!(f, "{scheme}://{}:{}", self.address, self.port)
    }
}

/// Connects to `endpoint` and feeds everything it delivers to `assembler`.
///
/// Runs until the stream fails. A TCP peer closing the connection is reported
/// as [`ServiceError::ConnectionLost`].
pub fn pump<S>(
    endpoint: &Endpoint,
    assembler: &mut SentenceAssembler<S>,
) -> Result<(), ServiceError>
where
    S: Sink<OffsetDateTime, Error = io::Error>,
{
    match endpoint.protocol {
        Protocol::Tcp => {
            let mut stream = TcpStream::connect((endpoint.address.as_str(), endpoint.port))
                .map_err(|source| ServiceError::Connect {
                    endpoint: endpoint.to_string(),
                    source,
                })?;
            info!(%endpoint, "connected");

            pump_stream(&mut stream, endpoint, assembler)
        }
        Protocol::Udp => {
            let socket = bind(endpoint)?;
            info!(%endpoint, "listening");

            pump_datagrams(&socket, endpoint, assembler)
        }
    }
}

/// Feeds every read from `reader` to `assembler` until end of stream.
pub fn pump_stream<R, S>(
    reader: &mut R,
    endpoint: &Endpoint,
    assembler: &mut SentenceAssembler<S>,
) -> Result<(), ServiceError>
where
    R: Read,
    S: Sink<OffsetDateTime, Error = io::Error>,
{
    let mut buffer = [0u8; READ_BUFFER_SIZE];

    loop {
        let n = match reader.read(&mut buffer) {
            Ok(0) => {
                return Err(ServiceError::ConnectionLost {
                    endpoint: endpoint.to_string(),
                });
            }
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(source) => {
                return Err(ServiceError::Receive {
                    endpoint: endpoint.to_string(),
                    source,
                });
            }
        };

        assembler.feed(&buffer[..n], OffsetDateTime::now_utc())?;
    }
}

/// Feeds every datagram received on `socket` to `assembler`.
///
/// Only returns on error.
pub fn pump_datagrams<S>(
    socket: &UdpSocket,
    endpoint: &Endpoint,
    assembler: &mut SentenceAssembler<S>,
) -> Result<(), ServiceError>
where
    S: Sink<OffsetDateTime, Error = io::Error>,
{
    let mut buffer = vec![0u8; MAX_DATAGRAM_SIZE];

    loop {
        let (n, from) = match socket.recv_from(&mut buffer) {
            Ok(received) => received,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(source) => {
                return Err(ServiceError::Receive {
                    endpoint: endpoint.to_string(),
                    source,
                });
            }
        };
        trace!(%from, n, "datagram");

        assembler.feed(&buffer[..n], OffsetDateTime::now_utc())?;
    }
}

/// Binds the UDP socket for `endpoint`, joining its multicast group if any.
pub fn bind(endpoint: &Endpoint) -> Result<UdpSocket, ServiceError> {
    let bind_error = |source| ServiceError::Bind {
        endpoint: endpoint.to_string(),
        source,
    };

    let group = endpoint
        .address
        .parse::<Ipv4Addr>()
        .ok()
        .filter(Ipv4Addr::is_multicast);

    match group {
        Some(group) => {
            let socket =
                UdpSocket::bind((Ipv4Addr::UNSPECIFIED, endpoint.port)).map_err(bind_error)?;
            socket
                .join_multicast_v4(&group, &Ipv4Addr::UNSPECIFIED)
                .map_err(bind_error)?;

            Ok(socket)
        }
        None => UdpSocket::bind((endpoint.address.as_str(), endpoint.port)).map_err(bind_error),
    }
}
