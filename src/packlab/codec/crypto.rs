//! LFSR stream cipher used by PackLab encryption.
//!
//! The keystream is a 16-bit Fibonacci LFSR with taps at bits 0, 11, 13 and
//! 14. Each keystream word covers two payload bytes: the low byte is XORed
//! into the first byte of the pair and the high byte into the second. XOR
//! makes the cipher its own inverse, so the same routine packs and unpacks.

use log::trace;

use crate::packlab::types::error::{PackError, Result};

/// Returns the LFSR state following `state`.
///
/// Feedback is `bit0 ^ bit11 ^ bit13 ^ bit14`, shifted in at bit 15 while the
/// rest of the register moves one position towards bit 0.
#[inline]
pub fn lfsr_step(state: u16) -> u16 {
    let feedback = (state ^ (state >> 11) ^ (state >> 13) ^ (state >> 14)) & 1;
    (feedback << 15) | (state >> 1)
}

/// Keystream generator seeded with an encryption key.
///
/// The seed itself is never emitted: the first word is `lfsr_step(seed)`.
#[derive(Debug, Clone, Copy)]
pub struct Lfsr {
    state: u16,
}

impl Lfsr {
    /// Creates a keystream generator whose first word is `lfsr_step(seed)`.
    pub fn new(seed: u16) -> Self {
        Self { state: seed }
    }
}

impl Iterator for Lfsr {
    type Item = u16;

    fn next(&mut self) -> Option<u16> {
        self.state = lfsr_step(self.state);
        Some(self.state)
    }
}

/// Decrypts (or encrypts) `data` in place with the keystream seeded by `key`.
///
/// An odd trailing byte is XORed with the low byte of the word that would
/// have covered the next pair.
pub fn decrypt_in_place(data: &mut [u8], key: u16) {
    trace!("Decrypting {} bytes in-place with LFSR key {:#06x}", data.len(), key);

    for (pair, word) in data.chunks_mut(2).zip(Lfsr::new(key)) {
        for (byte, mask) in pair.iter_mut().zip(word.to_le_bytes()) {
            *byte ^= mask;
        }
    }
}

/// Decrypts `input` into the front of `output`.
///
/// Exactly `input.len()` bytes are written.
///
/// # Errors
/// Returns [`PackError::OutputOverflow`] if `output` is shorter than `input`.
pub fn decrypt_data(input: &[u8], output: &mut [u8], key: u16) -> Result<()> {
    let capacity = output.len();
    let out = output
        .get_mut(..input.len())
        .ok_or(PackError::OutputOverflow { capacity })?;
    out.copy_from_slice(input);
    decrypt_in_place(out, key);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_shifts_feedback_into_top_bit() {
        assert_eq!(lfsr_step(0x0001), 0x8000);
        assert_eq!(lfsr_step(0x8000), 0x4000);
        assert_eq!(lfsr_step(0x4000), 0xA000);
        assert_eq!(lfsr_step(0xA000), 0xD000);
        assert_eq!(lfsr_step(0x0000), 0x0000);
    }

    #[test]
    fn keystream_skips_the_seed() {
        let words: Vec<u16> = Lfsr::new(0x0001).take(3).collect();
        assert_eq!(words, vec![0x8000, 0x4000, 0xA000]);
    }

    #[test]
    fn pairs_use_low_byte_first() {
        // Seed 0x4000 steps to 0xA000, then 0xD000.
        let mut data = [0x00, 0x00, 0x00, 0x00, 0xFF];
        decrypt_in_place(&mut data, 0x4000);
        let third = lfsr_step(0xD000);
        assert_eq!(data, [0x00, 0xA0, 0x00, 0xD0, 0xFF ^ (third as u8)]);
    }

    #[test]
    fn short_output_is_rejected() {
        let mut out = [0u8; 2];
        let err = decrypt_data(&[1, 2, 3], &mut out, 0x1234).unwrap_err();
        assert!(matches!(err, PackError::OutputOverflow { capacity: 2 }));
    }
}
