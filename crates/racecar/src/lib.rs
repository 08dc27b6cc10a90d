//! Lockstep control client for the racecar driving simulator.
//!
//! The simulation host drives the client frame by frame over UDP. User code
//! registers a start callback and a per-frame callback; inside them it reads
//! sensors and commands actuators through the capability modules.
//!
//! # Crate Structure
//!
//! - [`transport`]: Datagram transport (UDP, in-memory)
//! - [`wire`]: Command vocabulary and fixed-layout packet codec
//! - [`session`]: Session loop, request/response link, vehicle contract
//! - [`capability`]: Camera, controller, drive, lidar, physics (behind `capability` feature)
//! - [`teleop`]: Gamepad teleoperation program (behind `capability` feature)

/// Re-export transport types.
pub mod transport {
    pub use racecar_transport::*;
}

/// Re-export wire types.
pub mod wire {
    pub use racecar_wire::*;
}

/// Re-export session types.
pub mod session {
    pub use racecar_session::*;
}

/// Re-export capability modules (requires `capability` feature).
#[cfg(feature = "capability")]
pub mod capability {
    pub use racecar_capability::*;
}

#[cfg(feature = "capability")]
pub mod teleop;
