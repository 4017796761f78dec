//! Error types for protolink.

use thiserror::Error;

/// Result type for protolink operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while registering or dispatching links.
#[derive(Error, Debug)]
pub enum Error {
    /// A protocol was registered with an empty pattern.
    #[error("Protocol pattern must not be empty")]
    EmptyPattern,

    /// A protocol pattern is not a valid regular expression.
    #[error("Invalid protocol pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The host could not open a link (browser, `info` or `man` failed).
    #[error("Failed to open link: {0}")]
    Launch(String),

    /// Error occurred during file I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A protocol configuration file could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),
}
