use crate::command::Command;

/// Errors that can occur while decoding packets.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WireError {
    /// A command code was expected but the packet was empty.
    #[error("empty packet (expected a command code)")]
    Empty,

    /// The leading byte is not part of the command vocabulary.
    #[error("unknown command code {0}")]
    UnknownCommand(u8),

    /// A response payload is longer than the fixed layout of its command.
    #[error("oversized {command} payload ({actual} bytes, expected {expected})")]
    Oversized {
        command: Command,
        expected: usize,
        actual: usize,
    },

    /// A response payload is shorter than the fixed layout of its command.
    #[error("truncated {command} payload ({actual} bytes, expected {expected})")]
    Truncated {
        command: Command,
        expected: usize,
        actual: usize,
    },
}

pub type Result<T> = std::result::Result<T, WireError>;
