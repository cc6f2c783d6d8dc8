//! PackLab header parsing.
//!
//! This module handles:
//! - Validating the magic/version prefix
//! - Decoding the flags byte
//! - Extracting the compression dictionary and stored checksum

use byteorder::{BigEndian, ByteOrder};
use log::{debug, trace};

use crate::packlab::types::models::{
    BASE_HEADER_LEN, CHECKSUM_LENGTH, DICTIONARY_LENGTH, FLAG_CHECKSUMMED, FLAG_COMPRESSED,
    FLAG_ENCRYPTED, MAGIC, PacklabConfig,
};

/// Parses a PackLab header from the start of `input` into `config`.
///
/// # Header Structure
/// ```text
/// [3 bytes]  Magic/version 02 13 01
/// [1 byte]   Flags
/// [16 bytes] Dictionary (if compressed)
/// [2 bytes]  Checksum, big-endian (if checksummed)
/// ```
///
/// Failure is soft: a short input, a wrong magic, or a header whose declared
/// dictionary/checksum runs past the end of `input` leaves
/// `config.is_valid == false` and returns. Only the fields relevant to what
/// was parsed are written; callers must not assume the rest were reset.
pub fn parse_header(input: &[u8], config: &mut PacklabConfig) {
    trace!("Parsing PackLab header from {} input bytes", input.len());

    if input.len() < BASE_HEADER_LEN {
        debug!("Input too short for a header ({} bytes)", input.len());
        config.is_valid = false;
        return;
    }

    if input[..MAGIC.len()] != MAGIC {
        debug!("Magic/version mismatch: {:02X?}", &input[..MAGIC.len()]);
        config.is_valid = false;
        return;
    }
    config.is_valid = true;

    let flags = input[MAGIC.len()];
    config.is_checksummed = flags & FLAG_CHECKSUMMED != 0;
    config.is_encrypted = flags & FLAG_ENCRYPTED != 0;
    config.is_compressed = flags & FLAG_COMPRESSED != 0;
    debug!(
        "Header flags {:#04x}: compressed={}, encrypted={}, checksummed={}",
        flags, config.is_compressed, config.is_encrypted, config.is_checksummed
    );

    let mut header_len = BASE_HEADER_LEN;
    if config.is_compressed {
        header_len += DICTIONARY_LENGTH;
    }
    if config.is_checksummed {
        header_len += CHECKSUM_LENGTH;
    }

    // Declared fields must fit before any of them is read.
    if input.len() < header_len {
        debug!(
            "Truncated header: declares {} bytes, input has {}",
            header_len,
            input.len()
        );
        config.is_valid = false;
        return;
    }

    let mut offset = BASE_HEADER_LEN;
    if config.is_compressed {
        config
            .dictionary_data
            .copy_from_slice(&input[offset..offset + DICTIONARY_LENGTH]);
        offset += DICTIONARY_LENGTH;
        trace!("Dictionary: {:02X?}", config.dictionary_data);
    }

    if config.is_checksummed {
        config.checksum_value = BigEndian::read_u16(&input[offset..offset + CHECKSUM_LENGTH]);
        offset += CHECKSUM_LENGTH;
        trace!("Stored checksum: {:#06x}", config.checksum_value);
    }

    config.header_len = offset;
    debug!("Header parsed: {} bytes", config.header_len);
}

impl PacklabConfig {
    /// Parses `input` into a fresh configuration record.
    pub fn parse(input: &[u8]) -> Self {
        let mut config = Self::default();
        parse_header(input, &mut config);
        config
    }
}
