//! # Streaming SHA-256
//!
//! `Sha256Digest` absorbs input in arbitrary-sized pieces and produces a
//! [`Sha256Output`] on [`close()`](Sha256Digest::close).
//!
//! ## Lifecycle
//!
//! ```text
//! init() ──▶ Accumulating ──close()──▶ Sha256Output
//!               │    ▲
//!               └────┘ write()
//! ```
//!
//! `close()` takes the hasher by value, so writing to or closing an already
//! finalized hasher does not compile:
//!
//! ```compile_fail
//! use zsha_crypto::Sha256Digest;
//!
//! let mut hasher = Sha256Digest::init();
//! hasher.write(b"abc");
//! let _digest = hasher.close();
//! // ERROR: use of moved value `hasher`
//! hasher.write(b"more");
//! ```
//!
//! ## Invariants
//!
//! - `curlen` is in `[0, 63]` between calls; a full buffer is compressed
//!   before `write` returns.
//! - `length` counts the bits of every block handed to the transform. The
//!   total input length is `length + 8 * curlen`.
//! - The digest does not depend on how input was split across `write` calls.

use zsha_core::Sha256Output;

use crate::transform::{compress, BLOCK_LEN, IV};

const BLOCK_BITS: u64 = (BLOCK_LEN as u64) * 8;

/// Offset within the final block where the 8-byte bit length begins.
const LENGTH_OFFSET: usize = BLOCK_LEN - 8;

/// Incremental SHA-256 hasher.
#[derive(Clone)]
pub struct Sha256Digest {
    state: [u32; 8],
    buffer: [u8; BLOCK_LEN],
    curlen: usize,
    length: u64,
}

impl Sha256Digest {
    /// Create a hasher holding the SHA-256 initial value and no input.
    pub fn init() -> Self {
        Self {
            state: IV,
            buffer: [0u8; BLOCK_LEN],
            curlen: 0,
            length: 0,
        }
    }

    /// Alias for [`init()`](Self::init).
    pub fn new() -> Self {
        Self::init()
    }

    /// Hash `data` in one call.
    pub fn hash(data: &[u8]) -> Sha256Output {
        let mut hasher = Self::init();
        hasher.write(data);
        hasher.close()
    }

    /// Absorb `data`. Empty slices are accepted and change nothing.
    pub fn write(&mut self, mut data: &[u8]) {
        while !data.is_empty() {
            if self.curlen == 0 {
                // Whole blocks straight from the input, skipping the buffer.
                if let Some((block, rest)) = data.split_first_chunk::<BLOCK_LEN>() {
                    compress(&mut self.state, block);
                    self.length = self.length.wrapping_add(BLOCK_BITS);
                    data = rest;
                    continue;
                }
            }

            let n = (BLOCK_LEN - self.curlen).min(data.len());
            self.buffer[self.curlen..self.curlen + n].copy_from_slice(&data[..n]);
            self.curlen += n;
            data = &data[n..];

            if self.curlen == BLOCK_LEN {
                compress(&mut self.state, &self.buffer);
                self.length = self.length.wrapping_add(BLOCK_BITS);
                self.curlen = 0;
            }
        }
    }

    /// Total number of input bits absorbed so far, excluding padding.
    ///
    /// Wraps modulo 2^64, the limit FIPS 180-4 places on message length.
    pub fn bit_length(&self) -> u64 {
        self.length.wrapping_add((self.curlen as u64) * 8)
    }

    /// Number of bytes waiting in the partial block.
    pub fn buffered_len(&self) -> usize {
        self.curlen
    }

    /// Pad, compress the final block(s), and return the digest.
    pub fn close(mut self) -> Sha256Output {
        let bit_length = self.bit_length();

        // 0x80 then zeros up to the length field. When fewer than 9 bytes
        // remain in the current block the run spills into one more block.
        let mut pad = [0u8; BLOCK_LEN];
        pad[0] = 0x80;
        let pad_len = if self.curlen < LENGTH_OFFSET {
            LENGTH_OFFSET - self.curlen
        } else {
            BLOCK_LEN + LENGTH_OFFSET - self.curlen
        };
        self.write(&pad[..pad_len]);
        debug_assert_eq!(self.curlen, LENGTH_OFFSET);

        self.write(&bit_length.to_be_bytes());
        debug_assert_eq!(self.curlen, 0);

        let mut out = [0u8; 32];
        for (chunk, word) in out.chunks_exact_mut(4).zip(self.state) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        Sha256Output::new(out)
    }
}

impl Default for Sha256Digest {
    fn default() -> Self {
        Self::init()
    }
}

impl std::fmt::Debug for Sha256Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sha256Digest")
            .field("bit_length", &self.bit_length())
            .field("buffered_len", &self.curlen)
            .finish_non_exhaustive()
    }
}

impl std::io::Write for Sha256Digest {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        Sha256Digest::write(self, buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Compute the SHA-256 digest of `data`.
pub fn sha256_digest(data: &[u8]) -> Sha256Output {
    Sha256Digest::hash(data)
}

/// Compute the SHA-256 digest of `data` as lowercase hex.
pub fn sha256_hex(data: &[u8]) -> String {
    sha256_digest(data).to_hex()
}
