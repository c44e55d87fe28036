//! Error types for Wordpack.
//!
//! Clean end-of-stream is not an error: stream readers report it as
//! `Ok(None)`. Everything here is either an I/O failure passed through
//! verbatim, a malformed width handed to the batch codec, or a stream that
//! ended in the middle of a declared record.

use std::io;

/// Result type alias for Wordpack operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Wordpack.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O error from the underlying byte sink or source.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Batch codec error.
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// Stream framing error.
    #[error("stream error: {0}")]
    Stream(#[from] StreamError),
}

/// Batch codec errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// An encoded block length that is not a bit width for the word size.
    #[error("invalid bit width {width}, want 0 to 64")]
    InvalidWidth {
        /// The rejected width (number of words supplied).
        width: usize,
    },
}

/// Stream framing errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StreamError {
    /// The source ended within a header or a declared block.
    #[error("unexpected end of stream: needed {expected} bytes, got {available}")]
    Truncated {
        /// Bytes the record requires.
        expected: usize,
        /// Bytes the source delivered before it ended.
        available: usize,
    },

    /// A raw tail too long for the 8-bit count in the page header.
    #[error("raw tail of {len} values exceeds page header capacity of 127")]
    TailTooLong {
        /// Number of raw values requested.
        len: usize,
    },

    /// The writer failed earlier and its state is undefined.
    #[error("writer is unusable after a previous error")]
    Poisoned,
}

impl Error {
    /// Returns whether the error is a truncated stream.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        matches!(self, Self::Stream(StreamError::Truncated { .. }))
    }
}
