//! Frame-synchronized session loop for the racecar simulator.
//!
//! The host drives the client with lifecycle notifications. The [`Session`]
//! turns them into calls on two user callbacks and acknowledges each one,
//! strictly alternating with the host. Capability modules reach the host
//! through the same [`Link`] using blocking round-trips.

pub mod error;
pub mod link;
pub mod session;
pub mod vehicle;

pub use error::{Result, SessionError};
pub use link::Link;
pub use session::{
    Callback, Session, SessionConfig, SessionState, SessionStats, DEFAULT_MAX_NOTIFICATION_SIZE,
};
pub use vehicle::Vehicle;
