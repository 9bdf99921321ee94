//! Base64 encoding of files and readers with bounded memory use.
//!
//! Input is read in fixed-size chunks and fed to
//! [`rfc4648_base64::StreamEncoder`], so only one chunk of the source is held
//! at a time. The output is identical to
//! [`rfc4648_base64::encode`] on the whole input, whatever chunk size is
//! requested.
//!
//! Failures are reported through the shared [`Base64Error`]: the file-specific
//! variants come from this crate, everything else from the transform.
//!
//! # Example
//!
//! ```no_run
//! use rfc4648_base64_file::{encode_file, EncodeFileOptions};
//!
//! let encoded = encode_file("input.bin", &EncodeFileOptions::default()).unwrap();
//! println!("{encoded}");
//! ```

mod file;
mod options;
mod reader;

pub use file::{encode_file, encode_file_to_file};
pub use options::{EncodeFileOptions, DEFAULT_MAX_FILE_SIZE};
pub use reader::encode_reader;
pub use rfc4648_base64::{Base64Error, Result};
