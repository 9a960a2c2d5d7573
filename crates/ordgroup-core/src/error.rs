//! # Errors
//!
//! Collection operations are total and never fail. Errors only arise when a
//! group is rebuilt from external data: strict conversion from a sequence
//! and the byte/JSON formats.

use thiserror::Error;

/// Errors from strict construction of a group.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroupError {
    /// The input sequence repeats a value first seen earlier.
    #[error("duplicate member at index {index}")]
    DuplicateMember {
        /// Position of the repeated value in the input.
        index: usize,
    },
}

/// Errors from encoding or decoding a group.
#[derive(Debug, Error)]
pub enum FormatError {
    /// Payload shorter than the header.
    #[error("payload too short: {len} bytes")]
    Truncated { len: usize },

    /// Magic bytes do not match.
    #[error("invalid header magic")]
    InvalidMagic,

    /// Header carries a version this build cannot read.
    #[error("unsupported format version {found} (expected {expected})")]
    UnsupportedVersion { found: u8, expected: u8 },

    /// Bytes left over after the member sequence.
    #[error("{count} trailing bytes after payload")]
    TrailingBytes { count: usize },

    /// Decoded group exceeds the configured bound.
    #[error("group has {count} members, limit is {limit}")]
    TooManyMembers { count: usize, limit: usize },

    /// Payload decoded but violates the no-duplicates invariant.
    #[error(transparent)]
    Group(#[from] GroupError),

    /// Postcard (de)serialization failure.
    #[error("postcard error: {0}")]
    Postcard(#[from] postcard::Error),

    /// JSON (de)serialization failure.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
