//! Configuration constants for crab-jukebox
//!
//! This module contains all hardcoded constants used throughout the application,
//! organized by functionality and following Rust naming conventions.

use ratatui::style::Color;

// =============================================================================
// Player Backend Constants
// =============================================================================

/// Default host of the music daemon
pub const DEFAULT_MPD_HOST: &str = "localhost";

/// Default port of the music daemon
pub const DEFAULT_MPD_PORT: u16 = 6600;

/// Maximum number of attempts when connecting to the music daemon
pub const MAX_CONNECT_RETRIES: u32 = 3;

/// Attempts per tick to reconnect after the daemon dropped the connection
pub const RECONNECT_ATTEMPTS: u32 = 2;

/// Mixer range reported and accepted by the player
pub const VOLUME_MAX: u8 = 100;

// =============================================================================
// Screen Loop Constants
// =============================================================================

/// Default interval between reconciliation ticks in milliseconds
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 250;

/// Default relative step of the volume up/down buttons
pub const DEFAULT_VOLUME_STEP: i8 = 10;

/// Ticks an optimistic playlist selection may wait for the player to confirm it
pub const PENDING_CONFIRMATION_TICKS: u8 = 3;

// =============================================================================
// Logging Constants
// =============================================================================

/// Environment variable name for custom log level
pub const LOG_LEVEL_ENV_VAR: &str = "CRABJUKEBOX_LOG";

/// Log message for the status command
pub const LOG_MSG_STATUS: &str = "Querying player status";

/// Log message for the run command
pub const LOG_MSG_RUN: &str = "Starting touch interface";

// =============================================================================
// Screen Geometry (terminal cells)
// =============================================================================

/// Width of the drawing surface
pub const SCREEN_WIDTH: u16 = 80;

/// Height of the drawing surface
pub const SCREEN_HEIGHT: u16 = 24;

/// Width of an icon button
pub const ICON_WIDTH: u16 = 6;

/// Height of an icon button
pub const ICON_HEIGHT: u16 = 3;

// =============================================================================
// Palette
// =============================================================================

/// Screen background
pub const FIFTIES_CHARCOAL: Color = Color::Rgb(0x3b, 0x3b, 0x3b);

/// Default text colour
pub const FIFTIES_YELLOW: Color = Color::Rgb(0xf2, 0xd4, 0x86);

/// Highlight of the playing playlist entry
pub const FIFTIES_ORANGE: Color = Color::Rgb(0xe8, 0x7d, 0x3e);

/// Modal titles and outlines
pub const FIFTIES_GREEN: Color = Color::Rgb(0x8f, 0xbc, 0x8f);

/// Button faces and separators
pub const FIFTIES_TEAL: Color = Color::Rgb(0x5f, 0x9e, 0xa0);

// =============================================================================
// Window Titles
// =============================================================================

/// Title of the volume modal
pub const TITLE_VOLUME: &str = "Volume";

/// Title of the cover art modal
pub const TITLE_NOW_PLAYING: &str = "Now playing";

/// Title of the settings modal
pub const TITLE_SETTINGS: &str = "Settings";
