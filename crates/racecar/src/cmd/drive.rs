use std::time::Duration;

use racecar::teleop::{self, TeleopConfig};
use racecar_capability::{Racecar, RacecarConfig};
use racecar_transport::TransportConfig;
use racecar_wire::WireConfig;

use crate::cmd::DriveArgs;
use crate::exit::{session_error, CliError, CliResult, SUCCESS, USAGE};

pub fn run(args: DriveArgs) -> CliResult<i32> {
    let teleop_config = TeleopConfig {
        max_speed: check_scale("--max-speed", args.max_speed)?,
        max_angle: check_scale("--max-angle", args.max_angle)?,
    };
    let read_timeout = args.read_timeout.as_deref().map(parse_timeout).transpose()?;

    let config = RacecarConfig {
        transport: TransportConfig {
            local: args.local,
            remote: args.remote,
            read_timeout,
        },
        wire: WireConfig {
            byte_order: args.byte_order.into(),
        },
    };

    let car = Racecar::open(config).map_err(|e| session_error("bind failed", e))?;
    let mut session = teleop::session(car, teleop_config);
    session
        .go()
        .map_err(|e| session_error("session failed", e))?;

    Ok(SUCCESS)
}

fn check_scale(flag: &str, value: f32) -> CliResult<f32> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(CliError::new(
            USAGE,
            format!("{flag} must be within [0, 1], got {value}"),
        ))
    }
}

fn parse_timeout(input: &str) -> CliResult<Duration> {
    let input = input.trim();
    if input.is_empty() {
        return Err(CliError::new(USAGE, "timeout must not be empty"));
    }

    let (number, millis) = if let Some(num) = input.strip_suffix("ms") {
        (num, true)
    } else if let Some(num) = input.strip_suffix('s') {
        (num, false)
    } else {
        (input, false)
    };

    let value: u64 = number
        .parse()
        .map_err(|_| CliError::new(USAGE, format!("invalid timeout value: {input}")))?;

    if value == 0 {
        return Err(CliError::new(USAGE, "timeout must be greater than zero"));
    }

    if millis {
        Ok(Duration::from_millis(value))
    } else {
        Ok(Duration::from_secs(value))
    }
}
