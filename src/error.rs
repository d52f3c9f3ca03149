//! Error types for index construction and queries.

use thiserror::Error;

/// Error variants for BWT index operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The input sequence contains the reserved terminator byte.
    #[error("sequence contains the reserved terminator byte {0:#04x}")]
    ReservedByte(u8),

    /// An extraction range falls outside the indexed sequence.
    #[error("range [{start}, {end}) out of bounds for sequence of length {len}")]
    OutOfBounds {
        /// Inclusive start of the requested range.
        start: usize,
        /// Exclusive end of the requested range.
        end: usize,
        /// Length of the indexed sequence, terminator excluded.
        len: usize,
    },

    /// An internal invariant of the index was violated. The index itself
    /// stays usable; the tag names the operation that detected the fault.
    #[error("index invariant violated during {0}")]
    Malformed(&'static str),
}

/// A specialized Result type for index operations.
pub type Result<T> = std::result::Result<T, Error>;
