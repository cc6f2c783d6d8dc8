//! Custom error types for the packlab-unpack crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum PackError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// The header does not start with the PackLab magic/version bytes, or it
    /// declares a dictionary or checksum the input is too short to contain.
    #[error("Invalid PackLab header")]
    InvalidHeader,

    /// A working buffer could not be allocated. Decoding stops here.
    #[error("Allocation of {requested} bytes failed")]
    AllocationFailed { requested: usize },

    /// A stage would have written past the end of its output buffer.
    #[error("Output overflow: buffer capacity of {capacity} bytes exceeded")]
    OutputOverflow { capacity: usize },

    /// The payload is encrypted, but no key was provided to decrypt it.
    #[error("Encrypted payload requires a key, but none was provided.")]
    KeyRequired,
}

/// A convenience `Result` type alias using the crate's `PackError` type.
pub type Result<T> = std::result::Result<T, PackError>;
