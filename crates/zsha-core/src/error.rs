//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types used throughout zsha. All errors use `thiserror`
//! for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Hashing itself never fails: any byte sequence is valid input.
//! - Lifecycle misuse of a runtime session names the current state and the
//!   rejected operation.
//! - Digest parsing errors carry the offending length or character position.

use thiserror::Error;

/// Top-level error type for zsha.
#[derive(Error, Debug)]
pub enum ZshaError {
    /// Operation is not permitted in the session's current lifecycle state.
    #[error("invalid state: cannot {operation} a session that is {state}")]
    InvalidState {
        /// Current state name.
        state: String,
        /// Rejected operation name.
        operation: String,
    },

    /// Digest value could not be parsed.
    #[error("digest error: {0}")]
    Digest(#[from] DigestError),

    /// Invalid configuration value.
    #[error("configuration error: {0}")]
    Config(String),

    /// IO error while reading input to hash.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error parsing a hex-encoded digest.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DigestError {
    /// Hex string has the wrong number of characters.
    #[error("expected 64 hex characters, got {0}")]
    InvalidHexLength(usize),

    /// Hex string contains a non-hex character.
    #[error("invalid hex character {character:?} at index {index}")]
    InvalidHexCharacter {
        /// Byte offset of the offending character.
        index: usize,
        /// The offending character.
        character: char,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_state_display() {
        let err = ZshaError::InvalidState {
            state: "FINALIZED".to_string(),
            operation: "write".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("FINALIZED"));
        assert!(msg.contains("write"));
    }

    #[test]
    fn digest_error_converts() {
        let err = ZshaError::from(DigestError::InvalidHexLength(3));
        let msg = format!("{err}");
        assert!(msg.contains("64 hex characters"));
        assert!(msg.contains('3'));
    }

    #[test]
    fn invalid_hex_character_display() {
        let err = DigestError::InvalidHexCharacter {
            index: 7,
            character: 'z',
        };
        let msg = format!("{err}");
        assert!(msg.contains("'z'"));
        assert!(msg.contains("index 7"));
    }

    #[test]
    fn io_error_from_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err = ZshaError::from(io_err);
        assert!(format!("{err}").contains("file missing"));
    }

    #[test]
    fn config_error_display() {
        let err = ZshaError::Config("buffer_size must be non-zero".to_string());
        assert!(format!("{err}").contains("buffer_size"));
    }
}
