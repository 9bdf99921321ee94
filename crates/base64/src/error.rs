//! Error taxonomy shared by the transform and the file layer.

use thiserror::Error;

/// Error type for base64 operations.
///
/// The enum is flat so that a whole call chain (file lookup, reading, alphabet
/// validation, decoding) reports through a single channel. The transform
/// functions in this crate only ever return the first five variants; the
/// file-related ones belong to callers doing I/O.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Base64Error {
    /// The input is empty.
    #[error("Input data is empty")]
    EmptyData,
    /// The encoded input length is not a multiple of 4.
    #[error("Invalid input length")]
    InvalidLength,
    /// The encoded input contains a symbol outside the alphabet.
    #[error("Invalid character in input")]
    InvalidCharacter,
    /// The alphabet is not exactly 64 single-byte symbols.
    #[error("Character set must be 64 characters")]
    InvalidCharacterSetLength,
    /// The alphabet contains the padding character.
    #[error("Padding character '=' is not allowed in character set")]
    InvalidCharacterSetPaddingCharUsed,
    /// The input path does not exist.
    #[error("File not found")]
    FileNotFound,
    /// The input path cannot be inspected or opened, or is not a regular file.
    #[error("File is not readable")]
    FileNotReadable,
    /// The input exceeds the configured size limit.
    #[error("File is too large")]
    FileTooLarge,
    /// Reading the input or writing the output failed.
    #[error("I/O error")]
    Io,
}

impl Base64Error {
    /// Returns `true` for the variants raised by file handling rather than by
    /// the transform itself.
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            Base64Error::FileNotFound
                | Base64Error::FileNotReadable
                | Base64Error::FileTooLarge
                | Base64Error::Io
        )
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Base64Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(Base64Error::EmptyData.to_string(), "Input data is empty");
        assert_eq!(
            Base64Error::InvalidCharacterSetLength.to_string(),
            "Character set must be 64 characters"
        );
        assert_eq!(
            Base64Error::InvalidCharacterSetPaddingCharUsed.to_string(),
            "Padding character '=' is not allowed in character set"
        );
    }

    #[test]
    fn io_classification() {
        assert!(Base64Error::FileTooLarge.is_io());
        assert!(Base64Error::Io.is_io());
        assert!(!Base64Error::InvalidCharacter.is_io());
        assert!(!Base64Error::EmptyData.is_io());
    }
}
