use std::net::SocketAddr;

use clap::{Args, Subcommand, ValueEnum};
use racecar_transport::{DEFAULT_CLIENT_PORT, DEFAULT_HOST_PORT};
use racecar_wire::ByteOrder;

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod codes;
pub mod drive;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Drive the car with a gamepad until the host ends the session.
    Drive(DriveArgs),
    /// List the protocol command codes.
    Codes(CodesArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Drive(args) => drive::run(args),
        Command::Codes(args) => codes::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum ByteOrderArg {
    Native,
    Little,
    Big,
}

impl From<ByteOrderArg> for ByteOrder {
    fn from(arg: ByteOrderArg) -> Self {
        match arg {
            ByteOrderArg::Native => ByteOrder::Native,
            ByteOrderArg::Little => ByteOrder::Little,
            ByteOrderArg::Big => ByteOrder::Big,
        }
    }
}

#[derive(Args, Debug)]
pub struct DriveArgs {
    /// Local address to bind.
    #[arg(long, default_value_t = SocketAddr::from(([127, 0, 0, 1], DEFAULT_CLIENT_PORT)))]
    pub local: SocketAddr,
    /// Simulation host address.
    #[arg(long, default_value_t = SocketAddr::from(([127, 0, 0, 1], DEFAULT_HOST_PORT)))]
    pub remote: SocketAddr,
    /// Byte order of multi-byte fields.
    #[arg(long, value_name = "ORDER", default_value = "native")]
    pub byte_order: ByteOrderArg,
    /// Speed at full trigger, in [0, 1].
    #[arg(long, default_value_t = 1.0)]
    pub max_speed: f32,
    /// Steering angle at full stick deflection, in [0, 1].
    #[arg(long, default_value_t = 1.0)]
    pub max_angle: f32,
    /// Give up if the host is silent this long (e.g. 5s, 500ms). Default: wait forever.
    #[arg(long, value_name = "DURATION")]
    pub read_timeout: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct CodesArgs {
    /// Only list lifecycle and error codes.
    #[arg(long)]
    pub lifecycle: bool,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
