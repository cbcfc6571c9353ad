//! Command-line entry point for the `teq` binary.

use std::process::ExitCode;

use clap::Parser;
use teq::cli::{self, args::Cli};

fn main() -> ExitCode {
    cli::run(Cli::parse())
}
