//! Command vocabulary and packet codec for the racecar simulator protocol.
//!
//! Every packet is one datagram:
//! - A 1-byte command code
//! - A fixed-layout payload whose shape is determined by the command alone
//!
//! There is no length prefix and no self-describing schema. Both peers
//! hard-code the layout of every command.

pub mod codec;
pub mod command;
pub mod error;
pub mod payload;

pub use codec::{decode_command, encode_command, put_command, ByteOrder, WireConfig, HEADER_SIZE};
pub use command::{Command, CommandKind};
pub use error::{Result, WireError};
pub use payload::{PayloadReader, PayloadWriter};
