//! Gamepad teleoperation.
//!
//! Right trigger drives forward, left trigger reverses, the left stick's x
//! axis steers. Pressing both triggers at once stops the car. `A` logs a
//! greeting and `B` logs the first lidar sample.

use racecar_capability::{Button, Joystick, Racecar, Trigger};
use racecar_session::{Result, Session};
use racecar_transport::Datagram;
use tracing::{info, warn};

/// Scaling applied to the gamepad inputs.
#[derive(Debug, Clone, Copy)]
pub struct TeleopConfig {
    /// Speed when a trigger is fully pressed, in `[0.0, 1.0]`. Default: 1.0.
    pub max_speed: f32,
    /// Steering angle when the stick is fully deflected, in `[0.0, 1.0]`. Default: 1.0.
    pub max_angle: f32,
}

impl Default for TeleopConfig {
    fn default() -> Self {
        Self {
            max_speed: 1.0,
            max_angle: 1.0,
        }
    }
}

/// Start callback.
pub fn begin<T: Datagram>(_car: &mut Racecar<T>) -> Result<()> {
    info!("teleop started");
    Ok(())
}

/// Frame callback.
pub fn frame<T: Datagram>(car: &mut Racecar<T>, config: &TeleopConfig) -> Result<()> {
    let forward = finite_or_zero("right trigger", car.controller().get_trigger(Trigger::Right)?);
    let back = finite_or_zero("left trigger", car.controller().get_trigger(Trigger::Left)?);

    let speed = if forward > 0.0 && back > 0.0 {
        0.0
    } else {
        (forward - back) * config.max_speed
    };

    let (x, _) = car.controller().get_joystick(Joystick::Left)?;
    let angle = finite_or_zero("left stick x", x) * config.max_angle;

    car.drive()
        .set_speed_angle(speed.clamp(-1.0, 1.0), angle.clamp(-1.0, 1.0))?;

    if car.controller().was_pressed(Button::A)? {
        info!("Kachow!");
    }

    if car.controller().was_pressed(Button::B)? {
        match car.lidar().get_ranges().first() {
            Some(range) => info!(range, "first lidar sample"),
            None => info!("no lidar scan yet"),
        }
    }

    Ok(())
}

// NaN survives clamp and would fail the drive range check.
fn finite_or_zero(input: &'static str, value: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        warn!(input, value, "non-finite gamepad reading treated as zero");
        0.0
    }
}

/// Build a session that runs teleop on `car`.
pub fn session<T: Datagram + 'static>(
    car: Racecar<T>,
    config: TeleopConfig,
) -> Session<Racecar<T>> {
    Session::new(car, begin::<T>, move |car: &mut Racecar<T>| {
        frame(car, &config)
    })
}
