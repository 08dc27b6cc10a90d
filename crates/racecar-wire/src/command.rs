//! The command vocabulary shared with the simulation host.
//!
//! Codes are append-only. Both peers hard-code this table, so a value must
//! never be reassigned once released.

use std::fmt;

use serde::Serialize;

use crate::error::WireError;

/// Every command code understood by the protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Command {
    /// Sentinel sent in reply to a notification the client could not handle.
    Error = 0,
    /// Host: the user program is starting.
    Begin = 1,
    /// Host: one simulated frame has elapsed.
    Advance = 2,
    /// Host: the session is over. Not acknowledged.
    Terminate = 3,
    /// Client: the previous notification has been fully handled.
    Acknowledge = 4,
    RacecarGo = 5,
    RacecarSetStartUpdate = 6,
    RacecarGetDeltaTime = 7,
    RacecarSetUpdateSlowTime = 8,
    CameraGetImage = 9,
    CameraGetDepthImage = 10,
    CameraGetWidth = 11,
    CameraGetHeight = 12,
    ControllerIsDown = 13,
    ControllerWasPressed = 14,
    ControllerWasReleased = 15,
    ControllerGetTrigger = 16,
    ControllerGetJoystick = 17,
    DisplayShowImage = 18,
    DriveSetSpeedAngle = 19,
    DriveStop = 20,
    DriveSetMaxSpeedScaleFactor = 21,
    GpioPinMode = 22,
    GpioPinWrite = 23,
    LidarGetLength = 24,
    LidarGetRanges = 25,
    PhysicsGetLinearAcceleration = 26,
    PhysicsGetAngularVelocity = 27,
}

/// Broad role of a command in the protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandKind {
    /// The `error` sentinel.
    Error,
    /// Drives the session state machine.
    Lifecycle,
    /// A sensor read or actuator write issued by a capability module.
    Capability,
}

impl Command {
    /// The whole vocabulary, in code order.
    pub const ALL: [Command; 28] = [
        Command::Error,
        Command::Begin,
        Command::Advance,
        Command::Terminate,
        Command::Acknowledge,
        Command::RacecarGo,
        Command::RacecarSetStartUpdate,
        Command::RacecarGetDeltaTime,
        Command::RacecarSetUpdateSlowTime,
        Command::CameraGetImage,
        Command::CameraGetDepthImage,
        Command::CameraGetWidth,
        Command::CameraGetHeight,
        Command::ControllerIsDown,
        Command::ControllerWasPressed,
        Command::ControllerWasReleased,
        Command::ControllerGetTrigger,
        Command::ControllerGetJoystick,
        Command::DisplayShowImage,
        Command::DriveSetSpeedAngle,
        Command::DriveStop,
        Command::DriveSetMaxSpeedScaleFactor,
        Command::GpioPinMode,
        Command::GpioPinWrite,
        Command::LidarGetLength,
        Command::LidarGetRanges,
        Command::PhysicsGetLinearAcceleration,
        Command::PhysicsGetAngularVelocity,
    ];

    /// The on-wire code.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Stable snake_case name, as both peers spell it.
    pub fn name(self) -> &'static str {
        match self {
            Command::Error => "error",
            Command::Begin => "begin",
            Command::Advance => "advance",
            Command::Terminate => "terminate",
            Command::Acknowledge => "acknowledge",
            Command::RacecarGo => "racecar_go",
            Command::RacecarSetStartUpdate => "racecar_set_start_update",
            Command::RacecarGetDeltaTime => "racecar_get_delta_time",
            Command::RacecarSetUpdateSlowTime => "racecar_set_update_slow_time",
            Command::CameraGetImage => "camera_get_image",
            Command::CameraGetDepthImage => "camera_get_depth_image",
            Command::CameraGetWidth => "camera_get_width",
            Command::CameraGetHeight => "camera_get_height",
            Command::ControllerIsDown => "controller_is_down",
            Command::ControllerWasPressed => "controller_was_pressed",
            Command::ControllerWasReleased => "controller_was_released",
            Command::ControllerGetTrigger => "controller_get_trigger",
            Command::ControllerGetJoystick => "controller_get_joystick",
            Command::DisplayShowImage => "display_show_image",
            Command::DriveSetSpeedAngle => "drive_set_speed_angle",
            Command::DriveStop => "drive_stop",
            Command::DriveSetMaxSpeedScaleFactor => "drive_set_max_speed_scale_factor",
            Command::GpioPinMode => "gpio_pin_mode",
            Command::GpioPinWrite => "gpio_pin_write",
            Command::LidarGetLength => "lidar_get_length",
            Command::LidarGetRanges => "lidar_get_ranges",
            Command::PhysicsGetLinearAcceleration => "physics_get_linear_acceleration",
            Command::PhysicsGetAngularVelocity => "physics_get_angular_velocity",
        }
    }

    /// Which part of the protocol this command belongs to.
    pub fn kind(self) -> CommandKind {
        match self {
            Command::Error => CommandKind::Error,
            Command::Begin | Command::Advance | Command::Terminate | Command::Acknowledge => {
                CommandKind::Lifecycle
            }
            _ => CommandKind::Capability,
        }
    }

    /// Returns true for notifications the host sends to drive the session.
    pub fn is_host_notification(self) -> bool {
        matches!(self, Command::Begin | Command::Advance | Command::Terminate)
    }
}

impl TryFrom<u8> for Command {
    type Error = WireError;

    fn try_from(code: u8) -> Result<Self, WireError> {
        Command::ALL
            .get(usize::from(code))
            .copied()
            .ok_or(WireError::UnknownCommand(code))
    }
}

impl From<Command> for u8 {
    fn from(command: Command) -> Self {
        command.code()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
