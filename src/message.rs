//! Parsed message type.
//!
//! This module provides [`ParsedMessage`], the structured representation of
//! one logical utterance reconstructed from a chat export.
//!
//! # Overview
//!
//! A message consists of:
//! - **`timestamp`** — naive local wall-clock time of the original device
//! - **`sender`** — trimmed display name as it appeared in the transcript
//! - **`text`** — message body; continuation lines are joined with `\n`
//! - **`media`** — optional classification when the body is a media
//!   placeholder like `<Media omitted>`
//!
//! # Examples
//!
//! ```
//! use chatsift::ParsedMessage;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 2, 1)
//!     .unwrap()
//!     .and_hms_opt(8, 0, 16)
//!     .unwrap();
//! let msg = ParsedMessage::new(ts, "Alice", "Hi");
//! assert_eq!(msg.sender(), "Alice");
//! assert_eq!(msg.text(), "Hi");
//! assert!(msg.media().is_none());
//! ```
//!
//! ## Serialization
//!
//! ```
//! use chatsift::ParsedMessage;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 2, 1)
//!     .unwrap()
//!     .and_hms_opt(8, 0, 16)
//!     .unwrap();
//! let msg = ParsedMessage::new(ts, "Alice", "Hi");
//! let json = serde_json::to_string(&msg)?;
//! let parsed: ParsedMessage = serde_json::from_str(&json)?;
//!
//! assert_eq!(msg, parsed);
//! # Ok::<(), serde_json::Error>(())
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::parsing::media::MediaKind;

/// One logical utterance from a chat export.
///
/// The sender and text fields hold the normalized form: invisible
/// directional marks are stripped and surrounding whitespace trimmed before
/// a message is constructed. Emission order in a parse result equals the
/// order in which each message's header line appeared in the transcript;
/// messages are never re-sorted by timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedMessage {
    /// When the message was sent, as local wall-clock time.
    ///
    /// Exports carry no timezone, so this is deliberately naive.
    pub timestamp: NaiveDateTime,

    /// Display name of the message author, as it appeared in the transcript.
    ///
    /// May be a full name or a single-letter token; never normalized to a
    /// fixed set at this layer.
    pub sender: String,

    /// Text content of the message.
    ///
    /// Contains embedded `\n` when continuation lines were reassembled into
    /// the message.
    pub text: String,

    /// Media classification when the body is an export placeholder.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub media: Option<MediaKind>,
}

impl ParsedMessage {
    /// Creates a new message with no media classification.
    pub fn new(
        timestamp: NaiveDateTime,
        sender: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            sender: sender.into(),
            text: text.into(),
            media: None,
        }
    }

    /// Builder method to set the media classification.
    #[must_use]
    pub fn with_media(mut self, kind: MediaKind) -> Self {
        self.media = Some(kind);
        self
    }

    /// Returns the timestamp.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the media classification, if any.
    pub fn media(&self) -> Option<MediaKind> {
        self.media
    }

    /// Returns `true` if the body is a media placeholder.
    pub fn is_media(&self) -> bool {
        self.media.is_some()
    }

    /// Appends a continuation line to the message text.
    ///
    /// Lines are joined with a single `\n`, preserving original order.
    pub fn append_line(&mut self, line: &str) {
        self.text.push('\n');
        self.text.push_str(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 2, 1)
            .unwrap()
            .and_hms_opt(8, 0, 16)
            .unwrap()
    }

    #[test]
    fn test_message_new() {
        let msg = ParsedMessage::new(ts(), "Alice", "Hi");
        assert_eq!(msg.sender(), "Alice");
        assert_eq!(msg.text(), "Hi");
        assert_eq!(msg.timestamp(), ts());
        assert!(!msg.is_media());
    }

    #[test]
    fn test_append_line_joins_with_newline() {
        let mut msg = ParsedMessage::new(ts(), "Bob", "Hello");
        msg.append_line("How are you?");
        msg.append_line("Still there?");
        assert_eq!(msg.text(), "Hello\nHow are you?\nStill there?");
    }

    #[test]
    fn test_with_media() {
        let msg = ParsedMessage::new(ts(), "Alice", "<Media omitted>").with_media(MediaKind::Other);
        assert!(msg.is_media());
        assert_eq!(msg.media(), Some(MediaKind::Other));
    }

    #[test]
    fn test_serialization_skips_empty_media() {
        let msg = ParsedMessage::new(ts(), "Alice", "Hi");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("Alice"));
        assert!(!json.contains("media"));
    }

    #[test]
    fn test_deserialization() {
        let json = r#"{"timestamp":"2024-02-01T08:00:16","sender":"Bob","text":"Hi"}"#;
        let msg: ParsedMessage = serde_json::from_str(json).unwrap();
        assert_eq!(msg.sender(), "Bob");
        assert_eq!(msg.text(), "Hi");
        assert!(msg.media().is_none());
    }
}
