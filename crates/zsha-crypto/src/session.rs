//! # Runtime-Checked Hashing Session
//!
//! [`Sha256Digest`] enforces its lifecycle at compile time by consuming
//! itself on `close()`. That does not fit callers that keep a hasher inside a
//! long-lived struct and only hold `&mut` access to it. `Sha256Session`
//! mirrors the same lifecycle but checks it at runtime: writing to or closing
//! a finalized session returns [`ZshaError::InvalidState`] instead of
//! corrupting the digest.
//!
//! Prefer `Sha256Digest` where ownership allows it.

use serde::{Deserialize, Serialize};
use zsha_core::{Sha256Output, ZshaError};

use crate::sha256::Sha256Digest;

/// Lifecycle state of a [`Sha256Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionState {
    /// Accepting input.
    Accumulating,
    /// Digest has been produced; only `reset()` is permitted.
    Finalized,
}

impl SessionState {
    /// Returns the canonical state name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Accumulating => "ACCUMULATING",
            Self::Finalized => "FINALIZED",
        }
    }

    /// Whether this state is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Finalized)
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// SHA-256 hasher with runtime lifecycle checks.
#[derive(Debug, Clone)]
pub struct Sha256Session {
    // `None` once finalized.
    hasher: Option<Sha256Digest>,
}

impl Sha256Session {
    /// Start a session in the `Accumulating` state.
    pub fn new() -> Self {
        Self {
            hasher: Some(Sha256Digest::init()),
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        if self.hasher.is_some() {
            SessionState::Accumulating
        } else {
            SessionState::Finalized
        }
    }

    /// Absorb `data`. Fails if the session is finalized.
    pub fn write(&mut self, data: &[u8]) -> Result<(), ZshaError> {
        match self.hasher.as_mut() {
            Some(hasher) => {
                hasher.write(data);
                Ok(())
            }
            None => Err(self.invalid("write")),
        }
    }

    /// Finalize and return the digest. Fails if already finalized.
    pub fn close(&mut self) -> Result<Sha256Output, ZshaError> {
        match self.hasher.take() {
            Some(hasher) => Ok(hasher.close()),
            None => Err(self.invalid("close")),
        }
    }

    /// Discard any absorbed input and return to `Accumulating`.
    pub fn reset(&mut self) {
        self.hasher = Some(Sha256Digest::init());
    }

    /// Total input bits absorbed, or `None` once finalized.
    pub fn bit_length(&self) -> Option<u64> {
        self.hasher.as_ref().map(Sha256Digest::bit_length)
    }

    fn invalid(&self, operation: &str) -> ZshaError {
        ZshaError::InvalidState {
            state: self.state().name().to_string(),
            operation: operation.to_string(),
        }
    }
}

impl Default for Sha256Session {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Sha256Digest> for Sha256Session {
    fn from(hasher: Sha256Digest) -> Self {
        Self {
            hasher: Some(hasher),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sha256::sha256_digest;

    #[test]
    fn test_new_session_is_accumulating() {
        let s = Sha256Session::new();
        assert_eq!(s.state(), SessionState::Accumulating);
        assert!(!s.state().is_terminal());
        assert_eq!(s.bit_length(), Some(0));
    }

    #[test]
    fn test_write_then_close_matches_one_shot() {
        let mut s = Sha256Session::default();
        s.write(b"ab").unwrap();
        s.write(b"c").unwrap();
        let digest = s.close().unwrap();
        assert_eq!(digest, sha256_digest(b"abc"));
        assert_eq!(s.state(), SessionState::Finalized);
        assert_eq!(s.bit_length(), None);
    }

    #[test]
    fn test_write_after_close_is_rejected() {
        let mut s = Sha256Session::new();
        s.close().unwrap();
        let err = s.write(b"late").unwrap_err();
        match err {
            ZshaError::InvalidState { state, operation } => {
                assert_eq!(state, "FINALIZED");
                assert_eq!(operation, "write");
            }
            other => panic!("expected InvalidState, got {other:?}"),
        }
    }

    #[test]
    fn test_double_close_is_rejected() {
        let mut s = Sha256Session::new();
        s.write(b"abc").unwrap();
        let first = s.close().unwrap();
        assert_eq!(first, sha256_digest(b"abc"));
        assert!(matches!(
            s.close(),
            Err(ZshaError::InvalidState { ref operation, .. }) if operation == "close"
        ));
    }

    #[test]
    fn test_reset_reinitializes() {
        let mut s = Sha256Session::new();
        s.write(b"discarded").unwrap();
        s.reset();
        assert_eq!(s.bit_length(), Some(0));
        s.write(b"abc").unwrap();
        assert_eq!(s.close().unwrap(), sha256_digest(b"abc"));

        s.reset();
        assert_eq!(s.state(), SessionState::Accumulating);
        assert_eq!(s.close().unwrap(), sha256_digest(b""));
    }

    #[test]
    fn test_from_digest_keeps_absorbed_input() {
        let mut h = Sha256Digest::init();
        h.write(b"ab");
        let mut s = Sha256Session::from(h);
        s.write(b"c").unwrap();
        assert_eq!(s.close().unwrap(), sha256_digest(b"abc"));
    }

    #[test]
    fn test_session_state_display_and_serde() {
        assert_eq!(SessionState::Accumulating.to_string(), "ACCUMULATING");
        assert_eq!(SessionState::Finalized.to_string(), "FINALIZED");
        let json = serde_json::to_string(&SessionState::Finalized).unwrap();
        assert_eq!(json, "\"FINALIZED\"");
        let back: SessionState = serde_json::from_str("\"ACCUMULATING\"").unwrap();
        assert_eq!(back, SessionState::Accumulating);
    }
}
