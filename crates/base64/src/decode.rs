//! Base64 decoding with a caller-chosen alphabet.

use crate::alphabet::{validate_alphabet, DecodeTable};
use crate::constants::{ALPHABET, ALPHABET_URL, PAD_BYTE};
use crate::error::{Base64Error, Result};

/// Decodes a padded base64 string.
///
/// Input is processed in groups of four symbols. The first two symbols of a
/// group must be alphabet symbols; the last two may be `=`. Each group yields
/// one byte, a second unless the third symbol is `=`, and a third unless the
/// fourth symbol is `=`.
///
/// Padding is checked per group only. A group such as `QQ=A`, or a padded
/// group followed by more groups, is accepted.
///
/// # Arguments
///
/// * `encoded` - The base64 text. Must not be empty.
/// * `chars` - A 64-character alphabet. Defaults to standard base64.
///
/// # Errors
///
/// Checked in this order:
///
/// * [`Base64Error::EmptyData`] if `encoded` is empty.
/// * [`Base64Error::InvalidCharacterSetLength`] or
///   [`Base64Error::InvalidCharacterSetPaddingCharUsed`] for a bad alphabet.
/// * [`Base64Error::InvalidLength`] if the length is not a multiple of 4.
/// * [`Base64Error::InvalidCharacter`] for the first group holding a symbol
///   outside the alphabet.
///
/// # Example
///
/// ```
/// use rfc4648_base64::decode;
///
/// assert_eq!(decode("SGVsbG8sIFdvcmxkIQ==", None).unwrap(), b"Hello, World!");
/// ```
pub fn decode(encoded: &str, chars: Option<&str>) -> Result<Vec<u8>> {
    if encoded.is_empty() {
        return Err(Base64Error::EmptyData);
    }
    let alphabet = validate_alphabet(chars.unwrap_or(ALPHABET))?;
    let input = encoded.as_bytes();
    if input.len() % 4 != 0 {
        return Err(Base64Error::InvalidLength);
    }

    let table = DecodeTable::new(alphabet);
    let mut buf = Vec::with_capacity(input.len() / 4 * 3);

    for group in input.chunks_exact(4) {
        let v0 = sextet(&table, group[0])?;
        let v1 = sextet(&table, group[1])?;
        let pad2 = group[2] == PAD_BYTE;
        let pad3 = group[3] == PAD_BYTE;
        // Padding contributes zero bits.
        let v2 = if pad2 { 0 } else { sextet(&table, group[2])? };
        let v3 = if pad3 { 0 } else { sextet(&table, group[3])? };

        let chunk =
            ((v0 as u32) << 18) | ((v1 as u32) << 12) | ((v2 as u32) << 6) | (v3 as u32);

        buf.push((chunk >> 16) as u8);
        if !pad2 {
            buf.push((chunk >> 8) as u8);
        }
        if !pad3 {
            buf.push(chunk as u8);
        }
    }

    Ok(buf)
}

#[inline]
fn sextet(table: &DecodeTable, symbol: u8) -> Result<u8> {
    table.lookup(symbol).ok_or(Base64Error::InvalidCharacter)
}

/// Decodes text produced with the URL-safe alphabet.
pub fn decode_url(encoded: &str) -> Result<Vec<u8>> {
    decode(encoded, Some(ALPHABET_URL))
}
