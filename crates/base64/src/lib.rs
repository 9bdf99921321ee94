//! Base64 (RFC 4648) encoding and decoding.
//!
//! This crate provides:
//! - Padded encoding and decoding with the standard, URL-safe, or any custom
//!   64-character alphabet
//! - A chunked [`StreamEncoder`] producing the same text as [`encode`] while
//!   holding only one chunk of input at a time
//! - A single flat [`Base64Error`] shared with file-level callers
//!
//! Empty input is an error for both directions rather than an empty result.
//!
//! # Example
//!
//! ```
//! use rfc4648_base64::{decode, encode, ALPHABET_URL};
//!
//! let data = b"hello world";
//! let encoded = encode(data, None).unwrap();
//! assert_eq!(encoded, "aGVsbG8gd29ybGQ=");
//! assert_eq!(decode(&encoded, None).unwrap(), data);
//!
//! let url = encode(&[0xFB, 0xFF], Some(ALPHABET_URL)).unwrap();
//! assert_eq!(url, "-_8=");
//! ```

mod alphabet;
mod constants;
mod decode;
mod encode;
mod error;
mod stream_encoder;

pub use alphabet::{validate_alphabet, DecodeTable};
pub use constants::{ALPHABET, ALPHABET_URL, DEFAULT_CHUNK_SIZE, PAD};
pub use decode::{decode, decode_url};
pub use encode::{encode, encode_url, encoded_len};
pub use error::{Base64Error, Result};
pub use stream_encoder::{aligned_chunk_size, StreamEncoder};
