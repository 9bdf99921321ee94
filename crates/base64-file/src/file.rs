//! File-path entry points.

use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::Path;

use rfc4648_base64::{validate_alphabet, Base64Error, Result};
use tracing::{debug, warn};

use crate::options::EncodeFileOptions;
use crate::reader::encode_reader;

/// Encodes the contents of the file at `path`.
///
/// Checks run in this order: the file exists, its metadata is readable and it
/// is a regular file, it is not empty, it is within `options.max_size`, the
/// alphabet is valid, the file opens. Only then is anything read.
pub fn encode_file(path: impl AsRef<Path>, options: &EncodeFileOptions<'_>) -> Result<String> {
    let path = path.as_ref();
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "file not found");
            return Err(Base64Error::FileNotFound);
        }
        Err(err) => {
            warn!(path = %path.display(), %err, "cannot stat file");
            return Err(Base64Error::FileNotReadable);
        }
    };
    if !metadata.is_file() {
        return Err(Base64Error::FileNotReadable);
    }

    let size = metadata.len();
    if size == 0 {
        return Err(Base64Error::EmptyData);
    }
    if size > options.max_size {
        debug!(path = %path.display(), size, max_size = options.max_size, "file too large");
        return Err(Base64Error::FileTooLarge);
    }
    validate_alphabet(options.chars)?;

    let file = File::open(path).map_err(|err| {
        warn!(path = %path.display(), %err, "cannot open file");
        Base64Error::FileNotReadable
    })?;
    debug!(path = %path.display(), size, "encoding file");
    let size_hint = usize::try_from(size).map_err(|_| Base64Error::FileTooLarge)?;
    encode_reader(file, size_hint, options)
}

/// Encodes the file at `input` and writes the text to `output`, replacing it.
///
/// Nothing is written when encoding fails.
pub fn encode_file_to_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: &EncodeFileOptions<'_>,
) -> Result<()> {
    let encoded = encode_file(input, options)?;
    let output = output.as_ref();
    fs::write(output, encoded.as_bytes()).map_err(|err| {
        warn!(path = %output.display(), %err, "cannot write output");
        Base64Error::Io
    })?;
    debug!(path = %output.display(), len = encoded.len(), "output written");
    Ok(())
}
