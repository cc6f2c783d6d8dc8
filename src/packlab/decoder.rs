//! Payload decoding orchestration (decryption + decompression + verification)

use log::{trace, warn};

use super::codec::{checksum, compression, crypto};
use super::types::error::{PackError, Result};
use super::types::models::{PacklabConfig, Unpacked};

/// Decode the payload that follows a parsed header.
///
/// `config` must be valid; [`PacklabConfig::payload`] is where invalid
/// headers are rejected.
///
/// Packing compresses before it encrypts, so decoding runs in reverse:
/// 1. Decrypt payload (if encrypted)
/// 2. Decompress payload (if compressed)
/// 3. Verify checksum (if checksummed)
///
/// A checksum mismatch is reported in the result, not raised as an error.
pub fn decode_payload(
    payload: &[u8],
    config: &PacklabConfig,
    key: Option<u16>,
) -> Result<Unpacked> {
    let mut data = Vec::new();
    data.try_reserve_exact(payload.len())
        .map_err(|_| PackError::AllocationFailed {
            requested: payload.len(),
        })?;
    data.extend_from_slice(payload);

    // Step 1: Decrypt
    if config.is_encrypted {
        let key = key.ok_or(PackError::KeyRequired)?;
        crypto::decrypt_in_place(&mut data, key);
    }

    // Step 2: Decompress
    if let Some(dictionary) = config.dictionary() {
        data = compression::decompress_payload(&data, dictionary)?;
    }

    // Step 3: Verify checksum
    let actual_checksum = config.checksum().map(|_| checksum::calculate_checksum(&data));
    let checksum_mismatch = match (config.checksum(), actual_checksum) {
        (Some(expected), Some(actual)) if expected != actual => {
            warn!(
                "Checksum mismatch: expected {:#06x}, got {:#06x}",
                expected, actual
            );
            true
        }
        _ => false,
    };
    trace!("Decoded payload: {} bytes", data.len());

    Ok(Unpacked {
        data,
        config: config.clone(),
        actual_checksum,
        checksum_mismatch,
    })
}
