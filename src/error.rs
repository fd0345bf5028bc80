//! Error types for termouse.

use thiserror::Error;

/// Result type alias for termouse operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while decoding or encoding mouse sequences.
///
/// The event-enrichment state machines never return errors; only the
/// wire-level parsers, encoders and the protocol sniffer do.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The sequence had the wrong field count, a non-numeric field, a bad
    /// terminator or the wrong byte length.
    #[error("malformed mouse sequence: {0}")]
    MalformedSequence(String),

    /// No known mouse protocol matched the input.
    #[error("unknown mouse protocol")]
    UnknownProtocol,

    /// A coordinate cannot be represented in the target protocol.
    #[error("coordinate ({x}, {y}) out of range (max: {max})")]
    CoordinateOutOfRange {
        /// The requested X coordinate.
        x: i32,
        /// The requested Y coordinate.
        y: i32,
        /// The largest representable coordinate.
        max: i32,
    },
}

impl Error {
    /// Shorthand for building a [`Error::MalformedSequence`].
    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        Error::MalformedSequence(msg.into())
    }
}
