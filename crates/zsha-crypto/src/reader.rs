//! # Reader and File Hashing
//!
//! Streams an `std::io::Read` source through [`Sha256Digest`] in fixed-size
//! chunks so arbitrarily large inputs hash in constant memory.

use std::io::{ErrorKind, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use zsha_core::{Sha256Output, ZshaError};

use crate::sha256::Sha256Digest;
use crate::transform::BLOCK_LEN;

/// Default read chunk size (64 KiB).
pub const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

/// Tuning for [`hash_reader()`] and [`hash_file()`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Bytes requested per `read` call. Must be a non-zero multiple of 64 so
    /// every full chunk takes the direct block path.
    pub buffer_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl ReaderConfig {
    /// Check that the configuration is usable.
    pub fn validate(&self) -> Result<(), ZshaError> {
        if self.buffer_size == 0 {
            return Err(ZshaError::Config("buffer_size must be non-zero".to_string()));
        }
        if self.buffer_size % BLOCK_LEN != 0 {
            return Err(ZshaError::Config(format!(
                "buffer_size must be a multiple of {BLOCK_LEN}, got {}",
                self.buffer_size
            )));
        }
        Ok(())
    }
}

/// Hash everything `reader` yields until EOF.
///
/// `Interrupted` reads are retried; any other I/O error aborts the hash.
pub fn hash_reader<R: Read>(
    mut reader: R,
    config: &ReaderConfig,
) -> Result<Sha256Output, ZshaError> {
    config.validate()?;

    let mut buf = vec![0u8; config.buffer_size];
    let mut hasher = Sha256Digest::init();
    let mut total: u64 = 0;

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        hasher.write(&buf[..n]);
        total += n as u64;
        tracing::trace!(chunk = n, total, "absorbed chunk");
    }

    let digest = hasher.close();
    tracing::debug!(bytes = total, digest = %digest, "hashed reader");
    Ok(digest)
}

/// Open `path` and hash its contents.
pub fn hash_file(
    path: impl AsRef<Path>,
    config: &ReaderConfig,
) -> Result<Sha256Output, ZshaError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    let digest = hash_reader(file, config)?;
    tracing::debug!(path = %path.display(), digest = %digest, "hashed file");
    Ok(digest)
}
