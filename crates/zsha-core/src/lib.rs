//! # zsha-core — Foundational Types
//!
//! Defines the value types shared by every zsha crate. It depends on nothing
//! internal; `zsha-crypto` builds the hasher on top of it.
//!
//! ## Key Design Principles
//!
//! 1. **Fixed-size digest newtype.** A SHA-256 result is a `Sha256Output`,
//!    never a bare `Vec<u8>` or `String`. The 32-byte length is part of the
//!    type, and hex parsing goes through a validated constructor.
//!
//! 2. **One error hierarchy.** `ZshaError` is the top-level error for every
//!    fallible operation in the workspace. Lifecycle misuse of a runtime
//!    hashing session surfaces as `ZshaError::InvalidState`.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `zsha-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

#![forbid(unsafe_code)]

pub mod digest;
pub mod error;

// Re-export primary types for ergonomic imports.
pub use digest::{Sha256Output, SHA256_OUTPUT_LEN};
pub use error::{DigestError, ZshaError};
