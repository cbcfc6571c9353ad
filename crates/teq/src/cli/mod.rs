//! CLI support for the `teq` binary.

pub mod args;
pub mod commands;

use std::process::ExitCode;

use args::{Cli, Commands};

/// Dispatches a parsed CLI invocation.
pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Commands::Find(cmd) => commands::find::run(&cmd),
        Commands::Search(cmd) => commands::search::run(&cmd),
        Commands::Show(cmd) => commands::show::run(&cmd),
    }
}
