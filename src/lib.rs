//! # crab-jukebox
//!
//! A touchscreen front-end for MPD music players.
//!
//! Screens are compositions of tagged widgets. On every poll tick the active
//! screen fetches one status snapshot from the player and redraws only the
//! widgets whose value changed; modal windows run their own tick loop on top
//! of the screen that opened them.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod player;
pub mod screens;
pub mod ui;
pub mod utils;

#[cfg(test)]
mod testing;

pub use error::{Error, Result};
