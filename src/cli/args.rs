//! CLI argument parsing for crab-jukebox
//!
//! This module contains the CLI argument definitions and parsing logic
//! using the clap crate.

use crate::config::{
    Config, DEFAULT_MPD_HOST, DEFAULT_MPD_PORT, DEFAULT_POLL_INTERVAL_MS, DEFAULT_VOLUME_STEP,
};
use clap::{Args, Parser};
use log::LevelFilter;

/// A touchscreen front-end for MPD music players
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Host name or IP of the MPD server
    #[arg(short = 'H', long, global = true, default_value = DEFAULT_MPD_HOST)]
    pub host: String,

    /// Port of the MPD server
    #[arg(short = 'P', long, global = true, default_value_t = DEFAULT_MPD_PORT)]
    pub port: u16,

    /// Milliseconds between two polls of the player
    #[arg(long, value_name = "MS", global = true, default_value_t = DEFAULT_POLL_INTERVAL_MS)]
    pub poll_interval: u64,

    /// Volume change per press of the volume buttons, in percent
    #[arg(
        long,
        global = true,
        default_value_t = DEFAULT_VOLUME_STEP,
        value_parser = clap::value_parser!(i8).range(1..=50)
    )]
    pub volume_step: i8,

    /// Log level
    #[arg(long, value_name = "LEVEL", global = true, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,

    /// The command to execute
    #[command(subcommand)]
    pub command: super::Commands,
}

impl Cli {
    /// Build a Config from CLI arguments
    pub fn build_config(&self) -> Config {
        Config::new()
            .with_mpd_host(&self.host)
            .with_mpd_port(self.port)
            .with_poll_interval(self.poll_interval)
            .with_volume_step(self.volume_step)
            .with_log_level(self.log_level)
    }
}

/// Run command arguments
#[derive(Args)]
pub struct Run;

/// Status command arguments
#[derive(Args)]
pub struct Status {
    /// Also print the playlist
    #[arg(short, long)]
    pub playlist: bool,
}
