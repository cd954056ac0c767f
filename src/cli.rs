//! Command line interface for crab-jukebox
//!
//! This module contains the argument definitions and the commands they run.

mod args;
mod commands;

pub use args::{Cli, Run, Status};
pub use commands::{Commands, RunCommand, StatusCommand};

use crate::error::Result;
use clap::Parser;

/// Run the CLI application
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    cli.command.run(&cli)
}
