use std::fmt;

/// Errors that can happen inside crab-jukebox
#[derive(Debug)]
pub enum Error {
    // Player backend errors
    /// Failed to connect to the music daemon
    PlayerConnectionFailed {
        /// The address that was dialled
        address: String,
        /// The underlying MPD client error
        source: mpd::error::Error,
    },
    /// A status or playlist query against the player failed
    PlayerQueryFailed {
        /// The query that failed
        query: String,
        /// The underlying MPD client error
        source: mpd::error::Error,
    },
    /// A playback or volume command failed in transport
    PlayerCommandFailed {
        /// The command that failed
        command: String,
        /// The underlying MPD client error
        source: mpd::error::Error,
    },
    /// The player refused a command without a transport error
    PlayerCommandRejected {
        /// The command that was refused
        command: String,
        /// Why the command was refused
        reason: String,
    },

    // Screen construction errors
    /// Two widgets were registered under the same tag on one screen
    DuplicateWidgetTag {
        /// The screen being constructed
        screen: String,
        /// The tag registered twice
        tag: String,
    },
    /// A screen asked for a widget it never registered, or of the wrong kind
    MissingWidget {
        /// The tag that was looked up
        tag: String,
        /// The widget kind the caller expected
        expected: &'static str,
    },

    // Rendering and input substrate errors
    /// The drawing surface failed
    SurfaceError {
        /// The operation being performed
        operation: String,
        /// The underlying I/O error
        source: std::io::Error,
    },
    /// Touch or keyboard input handling encountered an error
    InputError {
        /// The error message
        message: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::PlayerConnectionFailed { address, source } => {
                write!(f, "Failed to connect to player at '{address}': {source}")
            }
            Error::PlayerQueryFailed { query, source } => {
                write!(f, "Player query '{query}' failed: {source}")
            }
            Error::PlayerCommandFailed { command, source } => {
                write!(f, "Player command '{command}' failed: {source}")
            }
            Error::PlayerCommandRejected { command, reason } => {
                write!(f, "Player rejected command '{command}': {reason}")
            }
            Error::DuplicateWidgetTag { screen, tag } => {
                write!(f, "Widget tag '{tag}' registered twice on screen '{screen}'")
            }
            Error::MissingWidget { tag, expected } => {
                write!(f, "No {expected} widget registered under tag '{tag}'")
            }
            Error::SurfaceError { operation, source } => {
                write!(f, "Surface operation '{operation}' failed: {source}")
            }
            Error::InputError { message } => {
                write!(f, "Input error: {message}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::PlayerConnectionFailed { source, .. } => Some(source),
            Error::PlayerQueryFailed { source, .. } => Some(source),
            Error::PlayerCommandFailed { source, .. } => Some(source),
            Error::SurfaceError { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
