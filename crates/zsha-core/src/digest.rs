//! # SHA-256 Output — Fixed-Size Digest Value
//!
//! Defines `Sha256Output`, the 32-byte result of finalizing a SHA-256 hash.
//! The hasher returns a fresh value on finalization instead of exposing its
//! scratch buffer, so a digest never aliases hasher state.
//!
//! ## Encoding
//!
//! - `to_hex()` and serde use bare lowercase hex (64 characters).
//! - `Display` prefixes the algorithm: `sha256:<hex>`.
//! - `from_hex()` accepts either case and rejects anything that is not
//!   exactly 64 hex characters.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DigestError;

/// Length of a SHA-256 digest in bytes.
pub const SHA256_OUTPUT_LEN: usize = 32;

/// A finalized SHA-256 digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Sha256Output([u8; SHA256_OUTPUT_LEN]);

impl Sha256Output {
    /// Wrap raw digest bytes.
    pub const fn new(bytes: [u8; SHA256_OUTPUT_LEN]) -> Self {
        Self(bytes)
    }

    /// Borrow the raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; SHA256_OUTPUT_LEN] {
        &self.0
    }

    /// Consume the value and return the raw digest bytes.
    pub fn into_bytes(self) -> [u8; SHA256_OUTPUT_LEN] {
        self.0
    }

    /// Render the digest as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Parse a 64-character hex string (upper or lower case).
    pub fn from_hex(s: &str) -> Result<Self, DigestError> {
        let raw = s.as_bytes();
        if raw.len() != SHA256_OUTPUT_LEN * 2 {
            return Err(DigestError::InvalidHexLength(raw.len()));
        }

        let mut bytes = [0u8; SHA256_OUTPUT_LEN];
        for (i, pair) in raw.chunks_exact(2).enumerate() {
            let hi = nibble(s, i * 2, pair[0])?;
            let lo = nibble(s, i * 2 + 1, pair[1])?;
            bytes[i] = (hi << 4) | lo;
        }
        Ok(Self(bytes))
    }
}

fn nibble(s: &str, index: usize, byte: u8) -> Result<u8, DigestError> {
    match byte {
        b'0'..=b'9' => Ok(byte - b'0'),
        b'a'..=b'f' => Ok(byte - b'a' + 10),
        b'A'..=b'F' => Ok(byte - b'A' + 10),
        _ => Err(DigestError::InvalidHexCharacter {
            index,
            // Every byte before `index` was ASCII, so `index` is a char boundary.
            character: s[index..].chars().next().unwrap_or(char::REPLACEMENT_CHARACTER),
        }),
    }
}

impl From<[u8; SHA256_OUTPUT_LEN]> for Sha256Output {
    fn from(bytes: [u8; SHA256_OUTPUT_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Sha256Output> for [u8; SHA256_OUTPUT_LEN] {
    fn from(output: Sha256Output) -> Self {
        output.0
    }
}

impl AsRef<[u8]> for Sha256Output {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl std::str::FromStr for Sha256Output {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl std::fmt::Display for Sha256Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sha256:{}", self.to_hex())
    }
}

impl std::fmt::LowerHex for Sha256Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for b in &self.0 {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

impl Serialize for Sha256Output {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Sha256Output {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Every 32-byte value survives a trip through its hex rendering.
        #[test]
        fn hex_rendering_is_lossless(bytes in any::<[u8; 32]>()) {
            let d = Sha256Output::new(bytes);
            let hex = d.to_hex();
            prop_assert_eq!(hex.len(), 64);
            prop_assert_eq!(Sha256Output::from_hex(&hex).unwrap(), d);
        }

        /// Parsing never panics on arbitrary input.
        #[test]
        fn from_hex_never_panics(s in "\\PC{0,80}") {
            let _ = Sha256Output::from_hex(&s);
        }
    }
}
