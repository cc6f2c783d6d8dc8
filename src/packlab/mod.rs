//! Core PackLab decoding module

pub mod codec;
pub mod format;
pub mod types;
mod decoder;

use log::info;

pub use codec::checksum::calculate_checksum;
pub use codec::compression::{decompress_data, decompress_payload, max_decompressed_len};
pub use codec::crypto::{Lfsr, decrypt_data, decrypt_in_place, lfsr_step};
pub use format::header::parse_header;
pub use types::error::{PackError, Result};
pub use types::models::*;

/// Decode a complete PackLab file held in memory.
///
/// # Arguments
/// * `input` - The packed file, header included
/// * `key` - LFSR seed; required only when the header marks the payload encrypted
///
/// # Errors
/// Returns an error if:
/// - The header is invalid or truncated
/// - The payload is encrypted and `key` is `None`
/// - A working buffer cannot be allocated
///
/// A checksum mismatch is not an error; check [`Unpacked::checksum_mismatch`].
pub fn unpack(input: &[u8], key: Option<u16>) -> Result<Unpacked> {
    info!("Unpacking PackLab data: {} bytes", input.len());

    let config = PacklabConfig::parse(input);
    let payload = config.payload(input)?;
    let unpacked = decoder::decode_payload(payload, &config, key)?;

    info!(
        "Unpacked {} payload bytes -> {} bytes (checksum {})",
        payload.len(),
        unpacked.data.len(),
        match (config.checksum(), unpacked.checksum_mismatch) {
            (None, _) => "absent",
            (Some(_), false) => "ok",
            (Some(_), true) => "MISMATCH",
        }
    );
    Ok(unpacked)
}
