use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use racecar_wire::{Command, CommandKind};
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct CodeOutput {
    code: u8,
    name: &'static str,
    kind: CommandKind,
    host_notification: bool,
}

impl From<Command> for CodeOutput {
    fn from(command: Command) -> Self {
        Self {
            code: command.code(),
            name: command.name(),
            kind: command.kind(),
            host_notification: command.is_host_notification(),
        }
    }
}

pub fn print_codes(commands: &[Command], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out: Vec<CodeOutput> = commands.iter().copied().map(CodeOutput::from).collect();
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "[]".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["CODE", "NAME", "KIND"]);
            for command in commands {
                table.add_row(vec![
                    command.code().to_string(),
                    command.name().to_string(),
                    kind_name(command.kind()).to_string(),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for command in commands {
                println!(
                    "{:>2} {} ({})",
                    command.code(),
                    command.name(),
                    kind_name(command.kind())
                );
            }
        }
    }
}

pub fn kind_name(kind: CommandKind) -> &'static str {
    match kind {
        CommandKind::Error => "error",
        CommandKind::Lifecycle => "lifecycle",
        CommandKind::Capability => "capability",
    }
}
