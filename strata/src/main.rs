mod commands;
mod ops;
mod prompts;
mod reports;

use std::process::ExitCode;

use clap::Parser;
use eyre::Result;

use crate::commands::Cli;

fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let cli = Cli::parse();
    cli.init_logger();
    cli.run()
}
