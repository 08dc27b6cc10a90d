use bytes::{BufMut, Bytes, BytesMut};

use crate::command::Command;
use crate::error::{Result, WireError};

/// Size of a command header on the wire.
pub const HEADER_SIZE: usize = 1;

/// Byte order used for multi-byte payload fields.
///
/// Both peers are assumed to run on compatible platforms, so the default is
/// the local machine's order. Set it explicitly when talking to a host with a
/// different order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteOrder {
    #[default]
    Native,
    Little,
    Big,
}

impl ByteOrder {
    /// Whether fields are laid out least-significant byte first.
    pub fn is_little(self) -> bool {
        match self {
            ByteOrder::Native => cfg!(target_endian = "little"),
            ByteOrder::Little => true,
            ByteOrder::Big => false,
        }
    }

    pub(crate) fn put_u32(self, dst: &mut BytesMut, value: u32) {
        if self.is_little() {
            dst.put_u32_le(value);
        } else {
            dst.put_u32(value);
        }
    }

    pub(crate) fn put_f32(self, dst: &mut BytesMut, value: f32) {
        if self.is_little() {
            dst.put_f32_le(value);
        } else {
            dst.put_f32(value);
        }
    }
}

/// Codec configuration shared by every packet on a link.
#[derive(Debug, Clone, Default)]
pub struct WireConfig {
    /// Byte order for payload fields. Default: native.
    pub byte_order: ByteOrder,
}

/// Encode a command header.
///
/// Wire format:
/// ```text
/// ┌──────────────┬──────────────────────────────┐
/// │ Command (1B) │ Payload (fixed per command)   │
/// └──────────────┴──────────────────────────────┘
/// ```
/// Lifecycle packets carry no payload.
pub fn encode_command(command: Command) -> Bytes {
    Bytes::copy_from_slice(&[command.code()])
}

/// Append a command header to `dst`.
pub fn put_command(command: Command, dst: &mut BytesMut) {
    dst.reserve(HEADER_SIZE);
    dst.put_u8(command.code());
}

/// Decode the command header at the front of a packet.
///
/// Trailing bytes are ignored. Fails with [`WireError::Empty`] for an empty
/// packet and [`WireError::UnknownCommand`] for a code outside the vocabulary.
pub fn decode_command(packet: &[u8]) -> Result<Command> {
    let code = *packet.first().ok_or(WireError::Empty)?;
    Command::try_from(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_roundtrip_for_whole_vocabulary() {
        for command in Command::ALL {
            let encoded = encode_command(command);
            assert_eq!(encoded.len(), HEADER_SIZE);
            assert_eq!(decode_command(&encoded), Ok(command));
        }
    }

    #[test]
    fn test_decode_empty_packet() {
        assert_eq!(decode_command(&[]), Err(WireError::Empty));
    }

    #[test]
    fn test_decode_ignores_trailing_bytes() {
        assert_eq!(decode_command(&[2, 0xFF, 0xFF, 0xFF]), Ok(Command::Advance));
    }

    #[test]
    fn test_decode_unknown_code() {
        assert_eq!(decode_command(&[255]), Err(WireError::UnknownCommand(255)));
    }

    #[test]
    fn test_put_command_appends() {
        let mut buf = BytesMut::new();
        put_command(Command::DriveStop, &mut buf);
        put_command(Command::Acknowledge, &mut buf);
        assert_eq!(buf.as_ref(), &[20, 4]);
    }

    #[test]
    fn test_byte_order_layout() {
        let mut little = BytesMut::new();
        ByteOrder::Little.put_u32(&mut little, 0x0102_0304);
        assert_eq!(little.as_ref(), &[4, 3, 2, 1]);

        let mut big = BytesMut::new();
        ByteOrder::Big.put_u32(&mut big, 0x0102_0304);
        assert_eq!(big.as_ref(), &[1, 2, 3, 4]);

        let mut native = BytesMut::new();
        ByteOrder::Native.put_f32(&mut native, 1.5);
        assert_eq!(native.as_ref(), &1.5f32.to_ne_bytes());
    }

    #[test]
    fn test_default_config_is_native() {
        assert_eq!(WireConfig::default().byte_order, ByteOrder::Native);
    }
}
