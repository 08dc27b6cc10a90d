use bytes::Bytes;
use racecar_transport::Datagram;
use racecar_wire::{encode_command, Command, PayloadReader, PayloadWriter, WireConfig};
use tracing::trace;

use crate::error::Result;

/// The blocking request/response primitive shared by the session loop and
/// every capability module.
///
/// A `Link` owns the transport for the lifetime of the session. All packets,
/// lifecycle and capability alike, go through the same handle, one at a time.
pub struct Link<T> {
    transport: T,
    config: WireConfig,
}

impl<T: Datagram> Link<T> {
    /// Create a link with native byte order.
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, WireConfig::default())
    }

    /// Create a link with explicit codec configuration.
    pub fn with_config(transport: T, config: WireConfig) -> Self {
        Self { transport, config }
    }

    /// Start a request packet for `command`.
    pub fn writer(&self, command: Command) -> PayloadWriter {
        PayloadWriter::new(command, self.config.byte_order)
    }

    /// Send a bare command header.
    pub fn send_command(&mut self, command: Command) -> Result<()> {
        trace!(%command, "send command");
        self.send(&encode_command(command))
    }

    /// Send a finished request packet without waiting for a response.
    pub fn send_packet(&mut self, packet: PayloadWriter) -> Result<()> {
        trace!(command = %packet.command(), len = packet.payload_len(), "send packet");
        self.send(packet.as_bytes())
    }

    /// Send raw bytes as one datagram.
    pub fn send(&mut self, datagram: &[u8]) -> Result<()> {
        self.transport.send(datagram)?;
        Ok(())
    }

    /// Block until one datagram arrives, keeping at most `max_size` bytes.
    pub fn receive(&mut self, max_size: usize) -> Result<Bytes> {
        let mut buf = vec![0u8; max_size];
        let len = self.transport.receive(&mut buf)?;
        buf.truncate(len);
        Ok(Bytes::from(buf))
    }

    /// Receive one datagram holding exactly the `len`-byte response to `command`.
    ///
    /// One byte of slack is read so a longer datagram is reported as
    /// [`WireError::Oversized`](racecar_wire::WireError::Oversized) instead of
    /// being cut to size.
    pub fn receive_payload(&mut self, command: Command, len: usize) -> Result<PayloadReader> {
        let datagram = self.receive(len + 1)?;
        let reader = PayloadReader::new(command, datagram, len, self.config.byte_order)?;
        Ok(reader)
    }

    /// One round-trip: send `packet`, then block for its `response_len`-byte response.
    pub fn request(&mut self, packet: PayloadWriter, response_len: usize) -> Result<PayloadReader> {
        let command = packet.command();
        self.send_packet(packet)?;
        self.receive_payload(command, response_len)
    }

    /// Borrow the underlying transport.
    pub fn get_ref(&self) -> &T {
        &self.transport
    }
}

impl<T> std::fmt::Debug for Link<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Link")
            .field("byte_order", &self.config.byte_order)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use racecar_transport::{Event, MemoryTransport, TransportError};
    use racecar_wire::{ByteOrder, WireError};

    use super::*;
    use crate::error::SessionError;

    #[test]
    fn send_command_is_one_byte() {
        let mut link = Link::new(MemoryTransport::new());
        link.send_command(Command::Acknowledge).unwrap();
        assert_eq!(link.get_ref().sent(), vec![&[4u8][..]]);
    }

    #[test]
    fn receive_bounds_datagram() {
        let mut link = Link::new(MemoryTransport::with_inbound([vec![1u8, 2, 3, 4, 5]]));
        let datagram = link.receive(2).unwrap();
        assert_eq!(datagram.as_ref(), &[1, 2]);
    }

    #[test]
    fn request_sends_before_receiving() {
        let response = 0.5f32.to_le_bytes().to_vec();
        let mut link = Link::with_config(
            MemoryTransport::with_inbound([response.clone()]),
            WireConfig {
                byte_order: ByteOrder::Little,
            },
        );

        let mut packet = link.writer(Command::ControllerGetTrigger);
        packet.put_u8(1);
        let mut reader = link.request(packet, 4).unwrap();

        assert_eq!(reader.get_f32().unwrap(), 0.5);
        assert_eq!(
            link.get_ref().events(),
            &[Event::Sent(vec![16, 1]), Event::Received(response)]
        );
    }

    #[test]
    fn short_response_is_wire_error() {
        let mut link = Link::new(MemoryTransport::with_inbound([vec![0u8]]));
        let packet = link.writer(Command::LidarGetLength);
        let err = link.request(packet, 4).unwrap_err();
        assert!(matches!(
            err,
            SessionError::Wire(WireError::Truncated { expected: 4, actual: 1, .. })
        ));
    }

    #[test]
    fn long_response_is_wire_error() {
        let mut reply = 0.5f32.to_le_bytes().to_vec();
        reply.extend_from_slice(&[0, 0, 0, 0]);
        let mut link = Link::with_config(
            MemoryTransport::with_inbound([reply]),
            WireConfig {
                byte_order: ByteOrder::Little,
            },
        );

        let mut packet = link.writer(Command::ControllerGetTrigger);
        packet.put_u8(0);
        let err = link.request(packet, 4).unwrap_err();

        assert!(matches!(
            err,
            SessionError::Wire(WireError::Oversized {
                command: Command::ControllerGetTrigger,
                expected: 4,
                actual: 5,
            })
        ));
    }

    #[test]
    fn exhausted_transport_is_transport_error() {
        let mut link = Link::new(MemoryTransport::new());
        let err = link.receive(8).unwrap_err();
        assert!(matches!(
            err,
            SessionError::Transport(TransportError::Shutdown)
        ));
    }
}
