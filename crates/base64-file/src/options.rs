//! Settings for file and reader encoding.

use rfc4648_base64::{ALPHABET, ALPHABET_URL, DEFAULT_CHUNK_SIZE};

/// Largest input accepted by default: 1 GiB.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1 << 30;

/// Options for [`encode_file`](crate::encode_file) and friends.
///
/// # Example
///
/// ```
/// use rfc4648_base64_file::EncodeFileOptions;
///
/// let options = EncodeFileOptions::default().url_safe().with_chunk_size(3 * 1024);
/// assert_eq!(options.chunk_size, 3 * 1024);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeFileOptions<'a> {
    /// 64-character alphabet.
    pub chars: &'a str,
    /// Requested read size. Rounded up to a multiple of 3 before use.
    pub chunk_size: usize,
    /// Inputs longer than this are rejected with `FileTooLarge`.
    pub max_size: u64,
}

impl Default for EncodeFileOptions<'_> {
    fn default() -> Self {
        Self {
            chars: ALPHABET,
            chunk_size: DEFAULT_CHUNK_SIZE,
            max_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

impl<'a> EncodeFileOptions<'a> {
    /// Sets the 64-character alphabet.
    pub fn with_chars(mut self, chars: &'a str) -> Self {
        self.chars = chars;
        self
    }

    /// Switches to the URL-safe alphabet.
    pub fn url_safe(self) -> Self {
        self.with_chars(ALPHABET_URL)
    }

    /// Sets the requested read size.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Sets the largest accepted input, in bytes.
    pub fn with_max_size(mut self, max_size: u64) -> Self {
        self.max_size = max_size;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = EncodeFileOptions::default();
        assert_eq!(options.chars, ALPHABET);
        assert_eq!(options.chunk_size, DEFAULT_CHUNK_SIZE);
        assert_eq!(options.max_size, DEFAULT_MAX_FILE_SIZE);
    }

    #[test]
    fn builders() {
        let options = EncodeFileOptions::default()
            .url_safe()
            .with_chunk_size(7)
            .with_max_size(10);
        assert_eq!(options.chars, ALPHABET_URL);
        assert_eq!(options.chunk_size, 7);
        assert_eq!(options.max_size, 10);
    }
}
