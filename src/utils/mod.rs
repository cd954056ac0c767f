//! Utility functions and helpers for crab-jukebox
//!
//! This module provides various utility functions organized by functionality:
//! - Time formatting for the elapsed/total labels
//! - Network retry for connecting to the player
//! - Text formatting for labels and playlist entries

pub mod formatting;
pub mod network;
pub mod time;

pub use formatting::{format_time_label, format_track_entry, format_volume_label};
pub use network::retry_with_backoff;
pub use time::format_duration;
