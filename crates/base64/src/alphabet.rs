//! Alphabet validation and reverse lookup tables.

use crate::constants::PAD_BYTE;
use crate::error::{Base64Error, Result};

const INVALID: u8 = 0xFF;

/// Checks that `chars` is a usable base64 alphabet and returns it as a fixed
/// 64-byte table.
///
/// Symbols are single bytes, so a string with non-ASCII characters can never
/// hold 64 of them and is reported as a length error.
///
/// # Errors
///
/// * [`Base64Error::InvalidCharacterSetLength`] if `chars` is not 64 ASCII characters.
/// * [`Base64Error::InvalidCharacterSetPaddingCharUsed`] if `chars` contains `=`.
///
/// # Example
///
/// ```
/// use rfc4648_base64::{validate_alphabet, Base64Error, ALPHABET};
///
/// assert!(validate_alphabet(ALPHABET).is_ok());
/// assert_eq!(validate_alphabet("ABC"), Err(Base64Error::InvalidCharacterSetLength));
/// ```
pub fn validate_alphabet(chars: &str) -> Result<&[u8; 64]> {
    let table: &[u8; 64] = chars
        .as_bytes()
        .try_into()
        .map_err(|_| Base64Error::InvalidCharacterSetLength)?;
    if !chars.is_ascii() {
        return Err(Base64Error::InvalidCharacterSetLength);
    }
    if table.contains(&PAD_BYTE) {
        return Err(Base64Error::InvalidCharacterSetPaddingCharUsed);
    }
    Ok(table)
}

/// Reverse lookup from an input byte to its 6-bit value.
///
/// The padding byte is never part of a validated alphabet, so it always looks
/// up as invalid; decoders check for it before consulting the table.
#[derive(Clone)]
pub struct DecodeTable {
    table: [u8; 256],
}

impl DecodeTable {
    /// Builds the table for a validated alphabet.
    pub fn new(alphabet: &[u8; 64]) -> Self {
        let mut table = [INVALID; 256];
        for (value, &symbol) in alphabet.iter().enumerate() {
            table[symbol as usize] = value as u8;
        }
        Self { table }
    }

    /// Returns the 6-bit value of `symbol`, or `None` if it is not part of the
    /// alphabet.
    #[inline]
    pub fn lookup(&self, symbol: u8) -> Option<u8> {
        match self.table[symbol as usize] {
            INVALID => None,
            value => Some(value),
        }
    }
}

impl std::fmt::Debug for DecodeTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let valid = self.table.iter().filter(|&&v| v != INVALID).count();
        f.debug_struct("DecodeTable").field("valid", &valid).finish()
    }
}
