mod cmd;
mod exit;
mod logging;
mod output;

use clap::Parser;

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "racecar", version, about = "Racecar simulator control client")]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(long, value_name = "LEVEL", default_value = "info", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    let result = cmd::run(cli.command, format);

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drive_defaults_to_simulator_ports() {
        let cli = Cli::try_parse_from(["racecar", "drive"]).expect("drive args should parse");

        let Command::Drive(args) = cli.command else {
            panic!("expected drive subcommand");
        };
        assert_eq!(args.local.to_string(), "127.0.0.1:5066");
        assert_eq!(args.remote.to_string(), "127.0.0.1:5065");
        assert_eq!(args.max_speed, 1.0);
        assert!(args.read_timeout.is_none());
    }

    #[test]
    fn parses_drive_overrides() {
        let cli = Cli::try_parse_from([
            "racecar",
            "drive",
            "--local",
            "127.0.0.1:6000",
            "--byte-order",
            "big",
            "--max-speed",
            "0.25",
            "--read-timeout",
            "2s",
        ])
        .expect("drive overrides should parse");

        let Command::Drive(args) = cli.command else {
            panic!("expected drive subcommand");
        };
        assert_eq!(args.local.port(), 6000);
        assert!(matches!(args.byte_order, cmd::ByteOrderArg::Big));
        assert_eq!(args.max_speed, 0.25);
        assert_eq!(args.read_timeout.as_deref(), Some("2s"));
    }

    #[test]
    fn rejects_unknown_byte_order() {
        let err = Cli::try_parse_from(["racecar", "drive", "--byte-order", "middle"])
            .expect_err("unknown byte order should fail");
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn format_is_global() {
        let cli = Cli::try_parse_from(["racecar", "codes", "--format", "json"])
            .expect("codes args should parse");
        assert!(matches!(cli.format, Some(OutputFormat::Json)));
        assert!(matches!(cli.command, Command::Codes(_)));
    }
}
