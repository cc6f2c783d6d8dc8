//! Codec layer for encryption, compression and checksum operations.
//!
//! # Submodules
//!
//! - [`crypto`][]: LFSR keystream and the XOR stream cipher
//! - [`compression`][]: Dictionary run-length expansion
//! - [`checksum`][]: 16-bit additive checksum

pub mod checksum;
pub mod compression;
pub mod crypto;
