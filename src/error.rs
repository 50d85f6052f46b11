//! Unified error types for chatsift.
//!
//! This module provides a single [`ChatsiftError`] enum that covers all error
//! cases in the library.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get clear, actionable error messages
//! - Failures inside a parse pass are recovered per line and never surface
//!   here; only boundary operations (I/O, archive extraction, output
//!   serialization) and the standalone timestamp resolver return errors

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatsift operations.
///
/// # Example
///
/// ```rust
/// use chatsift::error::Result;
/// use chatsift::ParsedMessage;
///
/// fn my_function() -> Result<Vec<ParsedMessage>> {
///     // ... operations that may fail
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatsiftError>;

/// The error type for all chatsift operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatsiftError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - An archive entry is not valid UTF-8
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A header line's date/time tokens did not match the expected
    /// digit/separator grammar.
    ///
    /// Inside a parse pass this is recovered per line: the offending line is
    /// dropped and parsing continues. It only propagates from the standalone
    /// [`resolve_timestamp`](crate::parsing::resolve_timestamp) API.
    #[error("invalid date/time format: {input:?}")]
    InvalidDateFormat {
        /// The combined date/time input that failed to resolve
        input: String,
    },

    /// The zip container could not be opened or read.
    #[cfg(feature = "archive")]
    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// The archive contains no non-directory `.txt` entry.
    ///
    /// Fatal to the load attempt; the caller must supply a valid export.
    #[cfg(feature = "archive")]
    #[error("no transcript (.txt) entry found in archive")]
    NoTextEntryFound,

    /// The selected archive entry decoded to an empty string.
    #[cfg(feature = "archive")]
    #[error("archive entry {entry:?} decoded to empty content")]
    EmptyExtractedContent {
        /// Name of the offending entry
        entry: String,
    },

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ChatsiftError {
    /// Creates an invalid date format error.
    pub fn invalid_date_format(input: impl Into<String>) -> Self {
        ChatsiftError::InvalidDateFormat {
            input: input.into(),
        }
    }

    /// Creates an empty extracted content error.
    #[cfg(feature = "archive")]
    pub fn empty_extracted_content(entry: impl Into<String>) -> Self {
        ChatsiftError::EmptyExtractedContent {
            entry: entry.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatsiftError::Io(_))
    }

    /// Returns `true` if this is a date/time resolution error.
    pub fn is_invalid_date_format(&self) -> bool {
        matches!(self, ChatsiftError::InvalidDateFormat { .. })
    }

    /// Returns `true` if this is an archive-level error (container,
    /// missing entry, or empty entry).
    #[cfg(feature = "archive")]
    pub fn is_archive(&self) -> bool {
        matches!(
            self,
            ChatsiftError::Archive(_)
                | ChatsiftError::NoTextEntryFound
                | ChatsiftError::EmptyExtractedContent { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = ChatsiftError::from(io_err);
        let display = err.to_string();
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
    }

    #[test]
    fn test_invalid_date_format_display() {
        let err = ChatsiftError::invalid_date_format("99/99/2024 8:00:00 AM");
        let display = err.to_string();
        assert!(display.contains("invalid date/time format"));
        assert!(display.contains("99/99/2024"));
    }

    #[cfg(feature = "archive")]
    #[test]
    fn test_no_text_entry_display() {
        let err = ChatsiftError::NoTextEntryFound;
        assert!(err.to_string().contains(".txt"));
    }

    #[cfg(feature = "archive")]
    #[test]
    fn test_empty_extracted_content_display() {
        let err = ChatsiftError::empty_extracted_content("_chat.txt");
        let display = err.to_string();
        assert!(display.contains("_chat.txt"));
        assert!(display.contains("empty"));
    }

    #[test]
    fn test_is_methods() {
        let io_err = ChatsiftError::Io(io::Error::new(io::ErrorKind::NotFound, ""));
        assert!(io_err.is_io());
        assert!(!io_err.is_invalid_date_format());

        let date_err = ChatsiftError::invalid_date_format("bad");
        assert!(date_err.is_invalid_date_format());
        assert!(!date_err.is_io());
    }

    #[cfg(feature = "archive")]
    #[test]
    fn test_is_archive() {
        assert!(ChatsiftError::NoTextEntryFound.is_archive());
        assert!(ChatsiftError::empty_extracted_content("a.txt").is_archive());
        assert!(!ChatsiftError::invalid_date_format("bad").is_archive());
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error;
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err = ChatsiftError::from(io_err);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_error_debug() {
        let err = ChatsiftError::invalid_date_format("bad");
        let debug = format!("{:?}", err);
        assert!(debug.contains("InvalidDateFormat"));
    }
}
