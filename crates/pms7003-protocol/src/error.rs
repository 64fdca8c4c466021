//! Protocol error types.

use thiserror::Error;

/// Errors that can occur when encoding commands or decoding payloads.
///
/// Framing problems on the receive path (bad magic, bogus length, checksum
/// mismatch) are not errors: the decoder drops the frame and resynchronizes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Output buffer cannot hold the encoded frame.
    #[error("buffer too small: need {required} bytes, got {actual}")]
    BufferTooSmall {
        /// Bytes required.
        required: usize,
        /// Bytes available.
        actual: usize,
    },

    /// Payload is too short for the requested record.
    #[error("payload too short: expected at least {expected} bytes, got {actual}")]
    PayloadTooShort {
        /// Expected minimum length.
        expected: usize,
        /// Actual payload length.
        actual: usize,
    },

    /// Payload does not fit the length field.
    #[error("payload too long: maximum {max} bytes, got {actual}")]
    PayloadTooLong {
        /// Maximum payload length.
        max: usize,
        /// Actual payload length.
        actual: usize,
    },
}

/// Result type alias for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;
