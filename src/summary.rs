//! Transcript statistics.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::directory::sender_directory;
use crate::message::ParsedMessage;

/// Aggregate statistics over an emitted message sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranscriptSummary {
    pub total_messages: usize,
    pub unique_senders: usize,
    pub media_messages: usize,
    pub text_messages: usize,
    /// Earliest message timestamp; `None` for an empty sequence
    pub first_timestamp: Option<NaiveDateTime>,
    /// Latest message timestamp; `None` for an empty sequence
    pub last_timestamp: Option<NaiveDateTime>,
}

/// Summarizes a message sequence.
///
/// Timestamps are scanned rather than taken from the ends: the sequence is
/// in appearance order, which is not guaranteed chronological.
pub fn summarize(messages: &[ParsedMessage]) -> TranscriptSummary {
    let media_messages = messages.iter().filter(|m| m.is_media()).count();

    TranscriptSummary {
        total_messages: messages.len(),
        unique_senders: sender_directory(messages).len(),
        media_messages,
        text_messages: messages.len() - media_messages,
        first_timestamp: messages.iter().map(ParsedMessage::timestamp).min(),
        last_timestamp: messages.iter().map(ParsedMessage::timestamp).max(),
    }
}
