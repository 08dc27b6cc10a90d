//! Gamepad teleoperation against a locally running simulator.
//!
//! Start the simulator, then run:
//!   cargo run --example teleop
//!
//! and press "user program" in the simulator window.

use racecar::capability::{Racecar, RacecarConfig};
use racecar::teleop::{self, TeleopConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let car = Racecar::open(RacecarConfig::default())?;
    eprintln!("Bound, waiting for the simulator");

    let mut session = teleop::session(
        car,
        TeleopConfig {
            max_speed: 0.5,
            max_angle: 1.0,
        },
    );
    session.go()?;

    eprintln!("Simulator ended the session after {} frames", session.stats().frames);
    Ok(())
}
