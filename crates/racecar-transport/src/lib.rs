//! Datagram transport between the racecar client and the simulation host.
//!
//! Provides a single [`Datagram`] abstraction with two implementations:
//! - [`UdpTransport`]: UDP socket bound to a fixed loopback endpoint
//! - [`MemoryTransport`]: scripted in-memory peer for tests and replays
//!
//! This is the lowest layer. Everything else builds on the [`Datagram`] trait.

pub mod error;
pub mod memory;
pub mod traits;
pub mod udp;

pub use error::{Result, TransportError};
pub use memory::{Event, MemoryTransport};
pub use traits::Datagram;
pub use udp::{TransportConfig, UdpTransport, DEFAULT_CLIENT_PORT, DEFAULT_HOST_PORT};
