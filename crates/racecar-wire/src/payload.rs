//! Fixed-layout argument and result payloads.
//!
//! The payload schema of each capability command is not self-describing on
//! the wire. Callers build requests with [`PayloadWriter`] and decode
//! responses with [`PayloadReader`], both of which honour the link's
//! [`ByteOrder`].

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::codec::{put_command, ByteOrder, HEADER_SIZE};
use crate::command::Command;
use crate::error::{Result, WireError};

const INITIAL_BUFFER_CAPACITY: usize = 16;

/// Builds a request packet: the command header followed by its arguments.
#[derive(Debug, Clone)]
pub struct PayloadWriter {
    command: Command,
    order: ByteOrder,
    buf: BytesMut,
}

impl PayloadWriter {
    /// Start a packet for `command`.
    pub fn new(command: Command, order: ByteOrder) -> Self {
        let mut buf = BytesMut::with_capacity(INITIAL_BUFFER_CAPACITY);
        put_command(command, &mut buf);
        Self {
            command,
            order,
            buf,
        }
    }

    pub fn put_u8(&mut self, value: u8) -> &mut Self {
        self.buf.put_u8(value);
        self
    }

    pub fn put_u32(&mut self, value: u32) -> &mut Self {
        self.order.put_u32(&mut self.buf, value);
        self
    }

    pub fn put_f32(&mut self, value: f32) -> &mut Self {
        self.order.put_f32(&mut self.buf, value);
        self
    }

    /// The command this packet carries.
    pub fn command(&self) -> Command {
        self.command
    }

    /// Number of argument bytes written after the header.
    pub fn payload_len(&self) -> usize {
        self.buf.len() - HEADER_SIZE
    }

    /// The packet encoded so far.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Finish the packet.
    pub fn finish(self) -> Bytes {
        self.buf.freeze()
    }
}

/// Decodes a response payload with a known fixed layout.
#[derive(Debug, Clone)]
pub struct PayloadReader {
    command: Command,
    order: ByteOrder,
    buf: Bytes,
    len: usize,
}

impl PayloadReader {
    /// Wrap a response to `command` that must be exactly `expected` bytes.
    pub fn new(command: Command, buf: Bytes, expected: usize, order: ByteOrder) -> Result<Self> {
        if buf.len() < expected {
            return Err(WireError::Truncated {
                command,
                expected,
                actual: buf.len(),
            });
        }
        if buf.len() > expected {
            return Err(WireError::Oversized {
                command,
                expected,
                actual: buf.len(),
            });
        }
        Ok(Self {
            command,
            order,
            len: buf.len(),
            buf,
        })
    }

    /// The command this response answers.
    pub fn command(&self) -> Command {
        self.command
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.buf.remaining()
    }

    pub fn get_u8(&mut self) -> Result<u8> {
        self.ensure(1)?;
        Ok(self.buf.get_u8())
    }

    /// A single byte where any non-zero value is `true`.
    pub fn get_bool(&mut self) -> Result<bool> {
        self.get_u8().map(|b| b != 0)
    }

    pub fn get_u32(&mut self) -> Result<u32> {
        self.ensure(4)?;
        Ok(if self.order.is_little() {
            self.buf.get_u32_le()
        } else {
            self.buf.get_u32()
        })
    }

    pub fn get_f32(&mut self) -> Result<f32> {
        self.ensure(4)?;
        Ok(if self.order.is_little() {
            self.buf.get_f32_le()
        } else {
            self.buf.get_f32()
        })
    }

    /// Read `count` consecutive `f32` fields.
    pub fn get_f32_vec(&mut self, count: usize) -> Result<Vec<f32>> {
        self.ensure(count * 4)?;
        (0..count).map(|_| self.get_f32()).collect()
    }

    /// Take the unread bytes as-is.
    pub fn into_remaining(self) -> Bytes {
        self.buf
    }

    fn ensure(&self, len: usize) -> Result<()> {
        if self.buf.remaining() < len {
            let consumed = self.len - self.buf.remaining();
            return Err(WireError::Truncated {
                command: self.command,
                expected: consumed + len,
                actual: self.len,
            });
        }
        Ok(())
    }
}
