//! Dictionary run-length decompression for PackLab payloads.
//!
//! Compressed data is literal bytes interleaved with two-byte escape
//! sequences introduced by [`ESCAPE_BYTE`]:
//! - `07 00`: a literal `07`
//! - `07 CI`: `C` (1-15) copies of `dictionary[I]`
//!
//! An escape byte in the final position has no control byte and is copied
//! through as a literal.

use std::iter;

use log::trace;

use crate::packlab::types::error::{PackError, Result};
use crate::packlab::types::models::{DICTIONARY_LENGTH, ESCAPE_BYTE, MAX_RUN_LENGTH};

/// Returns an output capacity that any `input_len`-byte payload fits in.
///
/// Every two-byte escape expands to at most `MAX_RUN_LENGTH - 1` bytes and
/// every other byte to exactly one.
pub fn max_decompressed_len(input_len: usize) -> usize {
    (input_len / 2)
        .saturating_mul(MAX_RUN_LENGTH - 1)
        .saturating_add(input_len % 2)
}

/// Splits compressed input into `(byte, count)` runs.
fn runs<'a>(
    input: &'a [u8],
    dictionary: &'a [u8; DICTIONARY_LENGTH],
) -> impl Iterator<Item = (u8, usize)> + 'a {
    let mut bytes = input.iter().copied();
    iter::from_fn(move || {
        let run = match bytes.next()? {
            ESCAPE_BYTE => match bytes.next() {
                Some(0x00) => (ESCAPE_BYTE, 1),
                Some(control) => (
                    dictionary[usize::from(control & 0x0F)],
                    usize::from(control >> 4),
                ),
                None => (ESCAPE_BYTE, 1),
            },
            literal => (literal, 1),
        };
        Some(run)
    })
}

/// Expands `input` into `output`, returning the number of bytes written.
///
/// # Errors
/// Returns [`PackError::OutputOverflow`] if the expansion does not fit in
/// `output`. Nothing past `output.len()` is ever written.
pub fn decompress_data(
    input: &[u8],
    output: &mut [u8],
    dictionary: &[u8; DICTIONARY_LENGTH],
) -> Result<usize> {
    let capacity = output.len();
    let mut written = 0usize;

    for (value, count) in runs(input, dictionary) {
        let run = output
            .get_mut(written..written + count)
            .ok_or(PackError::OutputOverflow { capacity })?;
        run.fill(value);
        written += count;
    }

    trace!("Decompressed {} bytes -> {} bytes", input.len(), written);
    Ok(written)
}

/// Decompresses a payload into a freshly allocated buffer.
///
/// A first pass over the escape codes measures the decoded length, so the
/// buffer is allocated once at exactly that size.
///
/// # Errors
/// Returns [`PackError::AllocationFailed`] if the buffer cannot be allocated.
pub fn decompress_payload(input: &[u8], dictionary: &[u8; DICTIONARY_LENGTH]) -> Result<Vec<u8>> {
    let decoded_len: usize = runs(input, dictionary).map(|(_, count)| count).sum();
    let mut output = Vec::new();
    output
        .try_reserve_exact(decoded_len)
        .map_err(|_| PackError::AllocationFailed {
            requested: decoded_len,
        })?;

    for (value, count) in runs(input, dictionary) {
        output.resize(output.len() + count, value);
    }

    trace!("Decompressed {} bytes -> {} bytes", input.len(), output.len());
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> [u8; DICTIONARY_LENGTH] {
        let mut dict = [0u8; DICTIONARY_LENGTH];
        for (i, entry) in dict.iter_mut().enumerate() {
            *entry = 0xA0 + i as u8;
        }
        dict
    }

    #[test]
    fn trailing_escape_is_literal() {
        let out = decompress_payload(&[0x41, ESCAPE_BYTE], &dictionary()).unwrap();
        assert_eq!(out, vec![0x41, ESCAPE_BYTE]);
    }

    #[test]
    fn zero_count_run_emits_nothing() {
        // Control 0x05: count 0, index 5. Never produced by a packer, but legal to decode.
        let out = decompress_payload(&[0x01, ESCAPE_BYTE, 0x05, 0x02], &dictionary()).unwrap();
        assert_eq!(out, vec![0x01, 0x02]);
    }

    #[test]
    fn longest_run_fits_bound() {
        let input = [ESCAPE_BYTE, 0xFF];
        let out = decompress_payload(&input, &dictionary()).unwrap();
        assert_eq!(out, vec![0xAF; 15]);
        assert_eq!(max_decompressed_len(input.len()), 15);
    }

    #[test]
    fn bound_counts_pairs_and_odd_byte() {
        assert_eq!(max_decompressed_len(0), 0);
        assert_eq!(max_decompressed_len(1), 1);
        assert_eq!(max_decompressed_len(2), 15);
        assert_eq!(max_decompressed_len(5), 31);
    }

    #[test]
    fn literal_payload_is_not_oversized() {
        let input = vec![0x41; 4096];
        let out = decompress_payload(&input, &dictionary()).unwrap();
        assert_eq!(out, input);
        assert_eq!(out.capacity(), input.len());
    }

    #[test]
    fn worst_case_input_fills_bound() {
        let input = [ESCAPE_BYTE, 0xF3, ESCAPE_BYTE, 0xF4, 0x41];
        let out = decompress_payload(&input, &dictionary()).unwrap();
        assert_eq!(out.len(), max_decompressed_len(input.len()));
        assert_eq!(out.capacity(), out.len());
    }
}
