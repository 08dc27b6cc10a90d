use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4, UdpSocket};
use std::time::Duration;

use tracing::{debug, info, trace};

use crate::error::{Result, TransportError};
use crate::traits::Datagram;

/// Port the client binds to receive host-originated datagrams.
pub const DEFAULT_CLIENT_PORT: u16 = 5066;

/// Port the simulation host listens on.
pub const DEFAULT_HOST_PORT: u16 = 5065;

/// Addressing for a [`UdpTransport`].
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Local endpoint to bind. Default: `127.0.0.1:5066`.
    pub local: SocketAddr,
    /// Fixed remote endpoint every datagram is sent to. Default: `127.0.0.1:5065`.
    pub remote: SocketAddr,
    /// Receive timeout. `None` blocks indefinitely, which is the protocol's
    /// assumption. An elapsed timeout is reported as an I/O error.
    pub read_timeout: Option<Duration>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            local: SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, DEFAULT_CLIENT_PORT)),
            remote: SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, DEFAULT_HOST_PORT)),
            read_timeout: None,
        }
    }
}

/// UDP transport bound to one local endpoint and sending to one fixed remote.
///
/// Datagrams are accepted from any sender; the channel is assumed to be a
/// private loopback link with a single trusted host.
pub struct UdpTransport {
    socket: UdpSocket,
    remote: SocketAddr,
}

impl UdpTransport {
    /// Bind the local endpoint with the default addressing.
    pub fn open_default() -> Result<Self> {
        Self::open(TransportConfig::default())
    }

    /// Bind the local endpoint described by `config`.
    ///
    /// Fails with [`TransportError::Bind`] if the address is already in use.
    pub fn open(config: TransportConfig) -> Result<Self> {
        let socket = UdpSocket::bind(config.local).map_err(|e| TransportError::Bind {
            addr: config.local,
            source: e,
        })?;
        socket.set_read_timeout(config.read_timeout)?;

        let local = socket.local_addr()?;
        info!(%local, remote = %config.remote, "udp transport bound");

        Ok(Self {
            socket,
            remote: config.remote,
        })
    }

    /// The address actually bound (resolves port 0 to the assigned port).
    pub fn local_addr(&self) -> Result<SocketAddr> {
        self.socket.local_addr().map_err(Into::into)
    }

    /// The fixed remote endpoint.
    pub fn remote_addr(&self) -> SocketAddr {
        self.remote
    }
}

impl Datagram for UdpTransport {
    fn send(&mut self, datagram: &[u8]) -> Result<()> {
        self.socket
            .send_to(datagram, self.remote)
            .map_err(|e| TransportError::Send {
                addr: self.remote,
                source: e,
            })?;
        trace!(len = datagram.len(), remote = %self.remote, "sent datagram");
        Ok(())
    }

    fn receive(&mut self, buf: &mut [u8]) -> Result<usize> {
        let (len, from) = self.socket.recv_from(buf)?;
        trace!(len, %from, "received datagram");
        Ok(len)
    }
}

impl std::fmt::Debug for UdpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UdpTransport")
            .field("local", &self.socket.local_addr().ok())
            .field("remote", &self.remote)
            .finish()
    }
}

impl Drop for UdpTransport {
    fn drop(&mut self) {
        debug!(remote = %self.remote, "closing udp transport");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loopback_any() -> SocketAddr {
        SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 0))
    }

    fn host_socket() -> UdpSocket {
        let host = UdpSocket::bind(loopback_any()).unwrap();
        host.set_read_timeout(Some(Duration::from_secs(5))).unwrap();
        host
    }

    fn client_for(host: &UdpSocket) -> UdpTransport {
        UdpTransport::open(TransportConfig {
            local: loopback_any(),
            remote: host.local_addr().unwrap(),
            read_timeout: Some(Duration::from_secs(5)),
        })
        .unwrap()
    }

    #[test]
    fn test_default_config_uses_loopback_ports() {
        let config = TransportConfig::default();
        assert_eq!(config.local.port(), DEFAULT_CLIENT_PORT);
        assert_eq!(config.remote.port(), DEFAULT_HOST_PORT);
        assert!(config.local.ip().is_loopback());
        assert!(config.read_timeout.is_none());
    }

    #[test]
    fn test_send_reaches_remote() {
        let host = host_socket();
        let mut client = client_for(&host);
        assert_eq!(client.remote_addr(), host.local_addr().unwrap());

        client.send(&[4]).unwrap();

        let mut buf = [0u8; 16];
        let (len, from) = host.recv_from(&mut buf).unwrap();
        assert_eq!(&buf[..len], &[4]);
        assert_eq!(from, client.local_addr().unwrap());
    }

    #[test]
    fn test_receive_from_any_sender() {
        let host = host_socket();
        let mut client = client_for(&host);
        let stranger = UdpSocket::bind(loopback_any()).unwrap();

        stranger
            .send_to(&[2, 9, 9], client.local_addr().unwrap())
            .unwrap();

        let mut buf = [0u8; 16];
        let len = client.receive(&mut buf).unwrap();
        assert_eq!(&buf[..len], &[2, 9, 9]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_receive_truncates_to_buffer() {
        let host = host_socket();
        let mut client = client_for(&host);

        host.send_to(&[1, 2, 3, 4, 5, 6], client.local_addr().unwrap())
            .unwrap();

        let mut buf = [0u8; 4];
        let len = client.receive(&mut buf).unwrap();
        assert_eq!(len, 4);
        assert_eq!(buf, [1, 2, 3, 4]);
    }

    #[test]
    fn test_bind_conflict_is_bind_error() {
        let first = UdpTransport::open(TransportConfig {
            local: loopback_any(),
            ..TransportConfig::default()
        })
        .unwrap();
        let taken = first.local_addr().unwrap();

        let result = UdpTransport::open(TransportConfig {
            local: taken,
            ..TransportConfig::default()
        });
        assert!(matches!(result, Err(TransportError::Bind { addr, .. }) if addr == taken));
    }

    #[test]
    fn test_read_timeout_surfaces_as_io_error() {
        let host = host_socket();
        let mut client = UdpTransport::open(TransportConfig {
            local: loopback_any(),
            remote: host.local_addr().unwrap(),
            read_timeout: Some(Duration::from_millis(20)),
        })
        .unwrap();

        let mut buf = [0u8; 4];
        let err = client.receive(&mut buf).unwrap_err();
        assert!(matches!(err, TransportError::Io(_)));
    }
}
