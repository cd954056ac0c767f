//! Configuration types for crab-jukebox
//!
//! This module contains configuration structures and related types
//! used throughout the application.

use log::LevelFilter;
use std::time::Duration;

use super::constants::*;

/// Configuration for the application
#[derive(Debug, Clone)]
pub struct Config {
    /// Host of the music daemon
    pub mpd_host: String,
    /// Port of the music daemon
    pub mpd_port: u16,
    /// Interval between reconciliation ticks
    pub poll_interval_ms: u64,
    /// Relative step used by the volume buttons
    pub volume_step: i8,
    /// Number of connection attempts at start-up
    pub connect_retries: u32,
    /// Log level
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mpd_host: DEFAULT_MPD_HOST.to_string(),
            mpd_port: DEFAULT_MPD_PORT,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            volume_step: DEFAULT_VOLUME_STEP,
            connect_retries: MAX_CONNECT_RETRIES,
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the music daemon host
    pub fn with_mpd_host(mut self, host: impl Into<String>) -> Self {
        self.mpd_host = host.into();
        self
    }

    /// Sets the music daemon port
    pub fn with_mpd_port(mut self, port: u16) -> Self {
        self.mpd_port = port;
        self
    }

    /// Sets the reconciliation interval
    pub fn with_poll_interval(mut self, interval_ms: u64) -> Self {
        self.poll_interval_ms = interval_ms;
        self
    }

    /// Sets the volume button step
    pub fn with_volume_step(mut self, step: i8) -> Self {
        self.volume_step = step;
        self
    }

    /// Sets the log level
    pub fn with_log_level(mut self, level: LevelFilter) -> Self {
        self.log_level = level;
        self
    }

    /// Address of the music daemon in `host:port` form
    pub fn mpd_address(&self) -> String {
        format!("{}:{}", self.mpd_host, self.mpd_port)
    }

    /// Interval between reconciliation ticks
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}
