//! Custom error types for the blk-reader crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum BlkError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// A field declared more bytes than remain in the data being decoded.
    #[error("Unexpected end of data while reading {context}: needed {needed} bytes, {remaining} remaining")]
    UnexpectedEnd {
        context: &'static str,
        needed: usize,
        remaining: usize,
    },

    /// The 4-byte record marker did not match the configured chain magic.
    /// This indicates corruption, not end-of-segment.
    #[error("Magic mismatch: expected {expected:02x?}, found {found:02x?}")]
    BadMagic { expected: [u8; 4], found: [u8; 4] },

    /// The data is structurally invalid beyond a simple truncation.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// A hash computation failed (bad scrypt parameters or output length).
    #[error("Hash computation failed: {0}")]
    Hash(String),

    /// The segment file after the last one read does not exist. This is the
    /// normal termination signal for iteration, not a corruption report.
    #[error("End of chain reached after segment {last_segment}")]
    EndOfChain { last_segment: u32 },
}

impl BlkError {
    /// True for the normal end-of-iteration signal, false for every failure.
    pub fn is_end_of_chain(&self) -> bool {
        matches!(self, BlkError::EndOfChain { .. })
    }
}

/// A convenience `Result` type alias using the crate's `BlkError` type.
pub type Result<T> = std::result::Result<T, BlkError>;
