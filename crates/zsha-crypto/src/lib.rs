//! # zsha-crypto — Streaming SHA-256
//!
//! Provides a FIPS 180-4 SHA-256 implementation built for incremental use:
//!
//! - **Block transform** (`transform.rs`): the compression function and its
//!   constant tables.
//! - **`Sha256Digest`** (`sha256.rs`): byte-oriented streaming hasher.
//!   `close()` consumes the hasher, so reuse after finalization is a compile
//!   error.
//! - **`Sha256Session`** (`session.rs`): the same lifecycle checked at
//!   runtime, for hashers stored behind `&mut`.
//! - **Reader hashing** (`reader.rs`): constant-memory hashing of
//!   `std::io::Read` sources and files.
//!
//! ## Example
//!
//! ```
//! use zsha_crypto::Sha256Digest;
//!
//! let mut hasher = Sha256Digest::init();
//! hasher.write(b"some ");
//! hasher.write(b"data!");
//! let digest = hasher.close();
//! assert_eq!(digest, Sha256Digest::hash(b"some data!"));
//! ```
//!
//! ## Crate Policy
//!
//! - Depends only on `zsha-core` internally.
//! - The hasher never allocates; only `hash_reader` owns a read buffer.
//! - Tests check known-answer vectors and compare against the RustCrypto
//!   `sha2` crate as an independent implementation.

#![forbid(unsafe_code)]

pub mod reader;
pub mod session;
pub mod sha256;
pub mod transform;

pub use reader::{hash_file, hash_reader, ReaderConfig};
pub use session::{SessionState, Sha256Session};
pub use sha256::{sha256_digest, sha256_hex, Sha256Digest};
pub use zsha_core::{Sha256Output, ZshaError};
