//! Chunked base64 encoding for inputs that are filled piece by piece.

use crate::alphabet::validate_alphabet;
use crate::constants::ALPHABET;
use crate::encode::{encode_groups, encoded_len};
use crate::error::Result;

/// Largest input length the output is pre-sized for. Bigger hints still work,
/// the string just grows as chunks arrive.
const MAX_PRESIZED_INPUT: usize = 64 * 1024 * 1024;

/// Rounds a requested chunk size up to the nearest non-zero multiple of 3.
///
/// Chunks of this size never split a 3-byte group, so encoding them one after
/// another gives the same text as encoding the whole input at once.
///
/// ```
/// use rfc4648_base64::aligned_chunk_size;
///
/// assert_eq!(aligned_chunk_size(0), 3);
/// assert_eq!(aligned_chunk_size(1), 3);
/// assert_eq!(aligned_chunk_size(16), 18);
/// assert_eq!(aligned_chunk_size(1023), 1023);
/// ```
pub const fn aligned_chunk_size(requested: usize) -> usize {
    if requested == 0 {
        return 3;
    }
    requested.div_ceil(3) * 3
}

/// Incremental encoder that owns a reusable input buffer and the growing
/// output text.
///
/// The caller fills [`StreamEncoder::buffer`] (typically from a reader),
/// hands the filled length to [`StreamEncoder::process`], and repeats. Every
/// call to `process` starts a fresh 3-byte group, so all fills except the last
/// must be a multiple of 3 bytes long or padding ends up in the middle of the
/// output. [`StreamEncoder::finalize`] consumes the encoder and returns the
/// text.
///
/// # Example
///
/// ```
/// use rfc4648_base64::{encode, StreamEncoder};
///
/// let data = b"Hello, World!";
/// let mut encoder = StreamEncoder::new(data.len(), None, 6).unwrap();
/// for piece in data.chunks(6) {
///     encoder.buffer()[..piece.len()].copy_from_slice(piece);
///     encoder.process(piece.len());
/// }
/// assert_eq!(encoder.finalize(), encode(data, None).unwrap());
/// ```
#[derive(Debug)]
pub struct StreamEncoder {
    alphabet: [u8; 64],
    buf: Vec<u8>,
    out: String,
    processed: usize,
}

impl StreamEncoder {
    /// Creates an encoder.
    ///
    /// # Arguments
    ///
    /// * `size_hint` - Expected total input length, used to pre-size the output.
    ///   Only an estimate: any value is accepted, and reservations are capped
    ///   at the encoding of 64 MiB.
    /// * `chars` - A 64-character alphabet. Defaults to standard base64.
    /// * `chunk_size` - Capacity of the input buffer. Should be a multiple of 3,
    ///   see [`aligned_chunk_size`].
    ///
    /// # Errors
    ///
    /// Returns the alphabet validation error if `chars` is unusable.
    pub fn new(size_hint: usize, chars: Option<&str>, chunk_size: usize) -> Result<Self> {
        let alphabet = *validate_alphabet(chars.unwrap_or(ALPHABET))?;
        Ok(Self {
            alphabet,
            buf: vec![0; chunk_size],
            out: String::with_capacity(encoded_len(size_hint.min(MAX_PRESIZED_INPUT))),
            processed: 0,
        })
    }

    /// Writable view of the internal input buffer. Its length is the chunk size.
    pub fn buffer(&mut self) -> &mut [u8] {
        &mut self.buf
    }

    /// Capacity of the input buffer.
    pub fn chunk_size(&self) -> usize {
        self.buf.len()
    }

    /// Encodes the first `filled` bytes of the internal buffer.
    ///
    /// # Panics
    ///
    /// Panics if `filled` exceeds the chunk size.
    pub fn process(&mut self, filled: usize) {
        encode_groups(&self.buf[..filled], &self.alphabet, &mut self.out);
        self.processed += filled;
    }

    /// Encodes a caller-owned chunk with the same semantics as [`process`].
    ///
    /// [`process`]: StreamEncoder::process
    pub fn push(&mut self, chunk: &[u8]) {
        encode_groups(chunk, &self.alphabet, &mut self.out);
        self.processed += chunk.len();
    }

    /// Number of input bytes encoded so far.
    pub fn bytes_processed(&self) -> usize {
        self.processed
    }

    /// Consumes the encoder and returns the accumulated text.
    pub fn finalize(self) -> String {
        self.out
    }
}
