//! Sender directory.
//!
//! The directory is the set of distinct senders observed across an emitted
//! message sequence, materialized in lexicographic order. It is recomputed
//! fresh on every parse and never mutated in place.

use std::collections::BTreeSet;

use crate::message::ParsedMessage;

/// Collects distinct senders, sorted lexicographically.
///
/// Ordering is plain byte order — locale-independent and stable across
/// runs. Chronological first appearance deliberately plays no part.
///
/// # Example
///
/// ```
/// use chatsift::config::ParserConfig;
/// use chatsift::directory::sender_directory;
/// use chatsift::parsing::parse_transcript;
///
/// let outcome = parse_transcript(
///     "[01/02/2024, 8:00:16 AM] Bob: Hi\n[01/02/2024, 8:01:00 AM] Alice: Hello",
///     &ParserConfig::default(),
/// );
/// assert_eq!(sender_directory(&outcome.messages), vec!["Alice", "Bob"]);
/// ```
pub fn sender_directory(messages: &[ParsedMessage]) -> Vec<String> {
    let unique: BTreeSet<&str> = messages.iter().map(|m| m.sender.as_str()).collect();
    unique.into_iter().map(str::to_owned).collect()
}

/// Returns the participant treated as the chat's principal user.
///
/// This is the alphabetically first directory entry, NOT the
/// chronologically first sender. Surprising, but downstream consumers rely
/// on exactly this convention; do not switch to first-appearance order.
pub fn primary_participant(senders: &[String]) -> Option<&str> {
    senders.first().map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn msg(sender: &str) -> ParsedMessage {
        let ts = NaiveDate::from_ymd_opt(2024, 2, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        ParsedMessage::new(ts, sender, "hi")
    }

    #[test]
    fn test_alphabetical_not_chronological() {
        let messages = vec![msg("Bob"), msg("Alice"), msg("Bob")];
        assert_eq!(sender_directory(&messages), vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_duplicates_removed() {
        let messages = vec![msg("Alice"), msg("Alice"), msg("Alice")];
        assert_eq!(sender_directory(&messages), vec!["Alice"]);
    }

    #[test]
    fn test_empty_sequence() {
        assert!(sender_directory(&[]).is_empty());
    }

    #[test]
    fn test_primary_participant_is_alphabetical_first() {
        let senders = sender_directory(&[msg("Zoe"), msg("Bob")]);
        assert_eq!(primary_participant(&senders), Some("Bob"));
        assert_eq!(primary_participant(&[]), None);
    }
}
