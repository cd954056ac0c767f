//! Configuration module for crab-jukebox
//!
//! This module provides configuration constants, default values, and configuration types
//! for the touchscreen player front-end.

mod constants;
mod types;

// Re-export all constants and types
pub use constants::*;
pub use types::*;
