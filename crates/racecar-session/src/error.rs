/// Errors that can occur in session and link operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Transport-level error.
    #[error("transport error: {0}")]
    Transport(#[from] racecar_transport::TransportError),

    /// Packet decoding error.
    #[error("wire error: {0}")]
    Wire(#[from] racecar_wire::WireError),

    /// A capability call was given an argument outside its accepted range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A user callback failed.
    #[error("callback failed: {0}")]
    Callback(Box<dyn std::error::Error + Send + Sync>),

    /// The host already ended the session.
    #[error("session already terminated")]
    Terminated,

    /// An earlier step failed; the session cannot resume.
    #[error("session already failed")]
    Failed,
}

impl SessionError {
    /// Wrap an arbitrary error raised inside a user callback.
    pub fn callback(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Callback(err.into())
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;
