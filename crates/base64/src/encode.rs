//! Base64 encoding with a caller-chosen alphabet.

use crate::alphabet::validate_alphabet;
use crate::constants::{ALPHABET, ALPHABET_URL, PAD};
use crate::error::{Base64Error, Result};

/// Length of the padded encoding of `length` input bytes.
///
/// Saturates at `usize::MAX` for inputs too large to encode.
///
/// ```
/// use rfc4648_base64::encoded_len;
///
/// assert_eq!(encoded_len(0), 0);
/// assert_eq!(encoded_len(1), 4);
/// assert_eq!(encoded_len(3), 4);
/// assert_eq!(encoded_len(4), 8);
/// assert_eq!(encoded_len(usize::MAX), usize::MAX);
/// ```
pub const fn encoded_len(length: usize) -> usize {
    match length.div_ceil(3).checked_mul(4) {
        Some(len) => len,
        None => usize::MAX,
    }
}

/// Encodes a byte slice to a padded base64 string.
///
/// # Arguments
///
/// * `data` - The bytes to encode. Must not be empty.
/// * `chars` - A 64-character alphabet. Defaults to standard base64.
///
/// # Errors
///
/// Checked in this order:
///
/// * [`Base64Error::EmptyData`] if `data` is empty.
/// * [`Base64Error::InvalidCharacterSetLength`] if `chars` is not 64 characters.
/// * [`Base64Error::InvalidCharacterSetPaddingCharUsed`] if `chars` contains `=`.
///
/// # Example
///
/// ```
/// use rfc4648_base64::encode;
///
/// assert_eq!(encode(b"Hello, World!", None).unwrap(), "SGVsbG8sIFdvcmxkIQ==");
/// ```
pub fn encode(data: &[u8], chars: Option<&str>) -> Result<String> {
    if data.is_empty() {
        return Err(Base64Error::EmptyData);
    }
    let alphabet = validate_alphabet(chars.unwrap_or(ALPHABET))?;

    let mut out = String::with_capacity(encoded_len(data.len()));
    encode_groups(data, alphabet, &mut out);
    Ok(out)
}

/// Encodes with the URL-safe alphabet, keeping `=` padding.
pub fn encode_url(data: &[u8]) -> Result<String> {
    encode(data, Some(ALPHABET_URL))
}

/// Appends the encoding of `data` to `out`.
///
/// The first byte of `data` always starts a new 3-byte group; a trailing
/// partial group is padded immediately.
pub(crate) fn encode_groups(data: &[u8], alphabet: &[u8; 64], out: &mut String) {
    for group in data.chunks(3) {
        let mut chunk = (group[0] as u32) << 16;
        if let Some(&o2) = group.get(1) {
            chunk |= (o2 as u32) << 8;
        }
        if let Some(&o3) = group.get(2) {
            chunk |= o3 as u32;
        }

        out.push(alphabet[((chunk >> 18) & 0x3F) as usize] as char);
        out.push(alphabet[((chunk >> 12) & 0x3F) as usize] as char);
        out.push(if group.len() > 1 {
            alphabet[((chunk >> 6) & 0x3F) as usize] as char
        } else {
            PAD
        });
        out.push(if group.len() > 2 {
            alphabet[(chunk & 0x3F) as usize] as char
        } else {
            PAD
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_byte() {
        assert_eq!(encode(b"A", None).unwrap(), "QQ==");
        assert_eq!(encode(b"f", None).unwrap(), "Zg==");
    }

    #[test]
    fn test_two_bytes() {
        assert_eq!(encode(b"fo", None).unwrap(), "Zm8=");
    }

    #[test]
    fn test_three_bytes() {
        assert_eq!(encode(b"foo", None).unwrap(), "Zm9v");
    }

    #[test]
    fn test_hello_world() {
        assert_eq!(encode(b"Hello, World!", None).unwrap(), "SGVsbG8sIFdvcmxkIQ==");
        assert_eq!(encode(b"hello world", None).unwrap(), "aGVsbG8gd29ybGQ=");
    }

    #[test]
    fn test_rfc4648_vectors() {
        let vectors: [(&[u8], &str); 6] = [
            (b"f", "Zg=="),
            (b"fo", "Zm8="),
            (b"foo", "Zm9v"),
            (b"foob", "Zm9vYg=="),
            (b"fooba", "Zm9vYmE="),
            (b"foobar", "Zm9vYmFy"),
        ];
        for (input, expected) in vectors {
            assert_eq!(encode(input, None).unwrap(), expected);
        }
    }

    #[test]
    fn test_url_alphabet() {
        assert_eq!(encode(&[0xFB, 0xFF], None).unwrap(), "+/8=");
        assert_eq!(encode_url(&[0xFB, 0xFF]).unwrap(), "-_8=");
    }

    #[test]
    fn test_empty_is_error() {
        assert_eq!(encode(b"", None), Err(Base64Error::EmptyData));
    }

    #[test]
    fn test_empty_checked_before_alphabet() {
        assert_eq!(encode(b"", Some("ABC")), Err(Base64Error::EmptyData));
    }

    #[test]
    fn test_bad_alphabet() {
        assert_eq!(
            encode(b"Test", Some("ABC")),
            Err(Base64Error::InvalidCharacterSetLength)
        );
        assert_eq!(
            encode(
                b"Test",
                Some("ABCDEFGHIJKLMNOPQRSTUVWXYZ=bcdefghijklmnopqrstuvwxyz0123456789+/")
            ),
            Err(Base64Error::InvalidCharacterSetPaddingCharUsed)
        );
    }

    #[test]
    fn test_encoded_len_saturates() {
        assert_eq!(encoded_len(usize::MAX), usize::MAX);
        assert_eq!(encoded_len(usize::MAX / 4 * 3), usize::MAX / 4 * 4);
    }

    #[test]
    fn test_encode_groups_appends() {
        let alphabet = validate_alphabet(ALPHABET).unwrap();
        let mut out = String::from("x");
        encode_groups(b"foo", alphabet, &mut out);
        encode_groups(b"b", alphabet, &mut out);
        assert_eq!(out, "xZm9vYg==");
    }
}
