//! 16-bit additive checksum over decoded payloads.

/// Sums every byte of `data` with 16-bit wraparound.
pub fn calculate_checksum(data: &[u8]) -> u16 {
    data.iter().fold(0u16, |sum, &byte| sum.wrapping_add(u16::from(byte)))
}
