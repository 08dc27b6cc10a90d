//! Capability modules for the simulated racecar.
//!
//! Each module is a thin marshaling layer over the session [`Link`]: it
//! encodes a command with its fixed-layout arguments, blocks for the
//! response, and decodes it. [`Racecar`] bundles them and plugs into the
//! session loop as its [`Vehicle`].
//!
//! [`Link`]: racecar_session::Link
//! [`Vehicle`]: racecar_session::Vehicle

pub mod camera;
pub mod controller;
pub mod drive;
pub mod lidar;
pub mod physics;
pub mod racecar;

pub use camera::{Camera, ColorImage, DepthImage};
pub use controller::{Button, Controller, Joystick, Trigger};
pub use drive::Drive;
pub use lidar::{Lidar, LidarScan};
pub use physics::{Physics, Vector3};
pub use racecar::{Racecar, RacecarConfig};
