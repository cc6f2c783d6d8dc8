//! # packlab-unpack
//!
//! A decoder for PackLab containers.
//! Supports any combination of dictionary run-length compression, LFSR stream
//! encryption and 16-bit checksums.
pub mod packlab;

// Re-export the main types for convenience
pub use packlab::{
    PackError, PacklabConfig, Result, Unpacked, calculate_checksum, decompress_data,
    decrypt_data, lfsr_step, parse_header, unpack,
};
