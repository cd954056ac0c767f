//! CLI command implementations for crab-jukebox
//!
//! This module contains the implementation of CLI commands: running the
//! touch interface and printing the player status.

mod run;
mod status;

pub use run::RunCommand;
pub use status::StatusCommand;

use crate::{config::Config, error::Result};
use clap::Subcommand;

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run the touch interface against the player
    Run(super::Run),

    /// Print the player status and exit
    Status(super::Status),
}

impl Commands {
    /// Execute the command
    pub fn run(&self, cli: &super::Cli) -> Result<()> {
        let config = cli.build_config();
        self.setup_log(&config);
        match self {
            Self::Run(run) => RunCommand::new(run).run(&config),
            Self::Status(status) => StatusCommand::new(status).run(&config),
        }
    }

    /// Setup logging configuration
    ///
    /// The environment variable wins over `--log-level`.
    fn setup_log(&self, config: &Config) {
        use crate::config::LOG_LEVEL_ENV_VAR;
        use log::LevelFilter;
        use simple_logger::SimpleLogger;
        use std::env;

        let log_level = if let Ok(jukebox_log) = env::var(LOG_LEVEL_ENV_VAR) {
            match jukebox_log.as_str() {
                "trace" => LevelFilter::Trace,
                "debug" => LevelFilter::Debug,
                "info" => LevelFilter::Info,
                "warn" => LevelFilter::Warn,
                "error" => LevelFilter::Error,
                "off" => LevelFilter::Off,
                _ => config.log_level,
            }
        } else {
            config.log_level
        };

        SimpleLogger::new()
            .with_level(log_level)
            .init()
            .unwrap_or_else(|_| eprintln!("Warning: Logger already initialized"));
    }
}
