use racecar_wire::{Command, CommandKind};

use crate::cmd::CodesArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_codes, OutputFormat};

pub fn run(args: CodesArgs, format: OutputFormat) -> CliResult<i32> {
    let commands: Vec<Command> = Command::ALL
        .iter()
        .copied()
        .filter(|c| !args.lifecycle || c.kind() != CommandKind::Capability)
        .collect();

    print_codes(&commands, format);
    Ok(SUCCESS)
}
