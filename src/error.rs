//! Decode failure taxonomy.
//!
//! Malformed files are expected input, so every way a buffer can be
//! rejected is a [`DecodeError`] value rather than a panic. All variants
//! are fatal for the file being decoded: a bad section header throws every
//! later offset off, and a partially-decoded drawing would be misleading.

use thiserror::Error;

/// Result alias for decode operations.
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Errors raised while decoding an RBM buffer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The first four bytes are not the big-endian `RBM\0` magic.
    #[error("not an RBM file (magic bytes {found:#010x})")]
    InvalidMagic { found: u32 },

    /// The fixed six-byte file header is unusable.
    #[error("invalid RBM header: {detail}")]
    InvalidHeader { detail: String },

    /// A section declared more payload bytes than the buffer still holds.
    #[error("section type {kind} at offset {offset} declares {declared} payload bytes but only {remaining} remain")]
    TruncatedSection {
        kind: u16,
        offset: usize,
        declared: usize,
        remaining: usize,
    },

    /// A fixed-width read ran past the end of the buffer it was given.
    #[error("read of {wanted} bytes at offset {offset} overruns the buffer ({available} bytes left)")]
    OutOfBounds {
        offset: usize,
        wanted: usize,
        available: usize,
    },
}
