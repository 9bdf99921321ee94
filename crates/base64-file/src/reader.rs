//! Encoding from any [`Read`] source through a [`StreamEncoder`].

use std::io::{ErrorKind, Read};

use rfc4648_base64::{aligned_chunk_size, Base64Error, Result, StreamEncoder};
use tracing::{debug, trace, warn};

use crate::options::EncodeFileOptions;

/// Encodes everything `reader` yields, one chunk at a time.
///
/// Each chunk is filled completely before it is encoded, so short reads never
/// put padding in the middle of the output. `size_hint` only pre-sizes the
/// output; it is capped at `options.max_size` and may be anything.
///
/// # Errors
///
/// * Alphabet validation errors, before anything is read.
/// * [`Base64Error::Io`] if a read fails.
/// * [`Base64Error::FileTooLarge`] once more than `options.max_size` bytes are read.
/// * [`Base64Error::EmptyData`] if the reader yields nothing.
///
/// # Example
///
/// ```
/// use rfc4648_base64_file::{encode_reader, EncodeFileOptions};
///
/// let data: &[u8] = b"Hello, World!";
/// let encoded = encode_reader(data, data.len(), &EncodeFileOptions::default()).unwrap();
/// assert_eq!(encoded, "SGVsbG8sIFdvcmxkIQ==");
/// ```
pub fn encode_reader<R: Read>(
    mut reader: R,
    size_hint: usize,
    options: &EncodeFileOptions<'_>,
) -> Result<String> {
    let chunk_size = aligned_chunk_size(options.chunk_size);
    let max_size = usize::try_from(options.max_size).unwrap_or(usize::MAX);
    let size_hint = size_hint.min(max_size);
    let mut encoder = StreamEncoder::new(size_hint, Some(options.chars), chunk_size)?;
    debug!(chunk_size, size_hint, "encoding stream");

    loop {
        let filled = fill_buffer(&mut reader, encoder.buffer())?;
        if filled == 0 {
            break;
        }
        if encoder.bytes_processed() + filled > max_size {
            warn!(max_size, "input exceeds size limit");
            return Err(Base64Error::FileTooLarge);
        }
        encoder.process(filled);
        trace!(filled, total = encoder.bytes_processed(), "chunk encoded");
        if filled < chunk_size {
            break;
        }
    }

    if encoder.bytes_processed() == 0 {
        return Err(Base64Error::EmptyData);
    }
    debug!(bytes = encoder.bytes_processed(), "stream encoded");
    Ok(encoder.finalize())
}

/// Reads until `buf` is full or the reader is exhausted.
fn fill_buffer<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => {
                warn!(%err, "read failed");
                return Err(Base64Error::Io);
            }
        }
    }
    Ok(filled)
}
