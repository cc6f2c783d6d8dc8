//! Core data structures for PackLab containers.
//!
//! This module defines the fundamental types used throughout the library:
//! - Format constants (magic bytes, flag bits, dictionary geometry)
//! - The parsed header configuration
//! - The result of a full decode

use super::error::{PackError, Result};

/// Magic and version bytes every PackLab file starts with.
pub const MAGIC: [u8; 3] = [0x02, 0x13, 0x01];

/// Size of the fixed header prefix: magic/version plus the flags byte.
pub const BASE_HEADER_LEN: usize = 4;

/// Number of entries in the compression dictionary.
pub const DICTIONARY_LENGTH: usize = 16;

/// Size of the big-endian checksum field.
pub const CHECKSUM_LENGTH: usize = 2;

/// Sentinel introducing a two-byte escape sequence in compressed data.
pub const ESCAPE_BYTE: u8 = 0x07;

/// Upper bound on the bytes a single input byte can expand to.
pub const MAX_RUN_LENGTH: usize = 16;

pub const FLAG_CHECKSUMMED: u8 = 0x20;
pub const FLAG_ENCRYPTED: u8 = 0x40;
pub const FLAG_COMPRESSED: u8 = 0x80;

/// Configuration parsed from a PackLab header.
///
/// Filled in place by [`parse_header`](crate::packlab::format::header::parse_header).
/// When `is_valid` is false none of the other fields carry meaning, and
/// `dictionary_data` / `checksum_value` are only defined under their flags.
/// Prefer [`dictionary`](Self::dictionary) and [`checksum`](Self::checksum),
/// which encode that rule in their return type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PacklabConfig {
    pub is_valid: bool,
    /// Total header length, which is also the payload offset.
    pub header_len: usize,
    pub is_compressed: bool,
    pub is_encrypted: bool,
    pub is_checksummed: bool,
    pub dictionary_data: [u8; DICTIONARY_LENGTH],
    pub checksum_value: u16,
}

impl PacklabConfig {
    /// The compression dictionary, if the header is valid and declares one.
    pub fn dictionary(&self) -> Option<&[u8; DICTIONARY_LENGTH]> {
        (self.is_valid && self.is_compressed).then_some(&self.dictionary_data)
    }

    /// The expected checksum of the decoded payload, if the header carries one.
    pub fn checksum(&self) -> Option<u16> {
        (self.is_valid && self.is_checksummed).then_some(self.checksum_value)
    }

    /// Returns the payload that follows the header in `input`.
    ///
    /// # Errors
    /// Returns [`PackError::InvalidHeader`] if this configuration is invalid or
    /// does not fit inside `input`.
    pub fn payload<'a>(&self, input: &'a [u8]) -> Result<&'a [u8]> {
        if !self.is_valid {
            return Err(PackError::InvalidHeader);
        }
        input.get(self.header_len..).ok_or(PackError::InvalidHeader)
    }
}

/// Output of a complete decode.
#[derive(Debug, Clone)]
pub struct Unpacked {
    /// Fully decrypted and decompressed bytes.
    pub data: Vec<u8>,
    /// The header configuration the payload was decoded with.
    pub config: PacklabConfig,
    /// Checksum computed over `data`, present only for checksummed files.
    pub actual_checksum: Option<u16>,
    /// True when the file is checksummed and `actual_checksum` differs from
    /// the stored value. Never set for files without a checksum.
    pub checksum_mismatch: bool,
}
