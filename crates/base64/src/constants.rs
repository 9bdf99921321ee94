/// Standard base64 alphabet.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// URL-safe base64 alphabet (uses - and _ instead of + and /).
pub const ALPHABET_URL: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Padding character. The same for every alphabet.
pub const PAD: char = '=';

pub(crate) const PAD_BYTE: u8 = b'=';

/// Default chunk size for streaming encoders, in bytes.
///
/// 48 KiB is a multiple of 3, so no chunk boundary ever falls inside a group.
pub const DEFAULT_CHUNK_SIZE: usize = 48 * 1024;
