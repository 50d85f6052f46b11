//! Integration tests for chatsift
//!
//! End-to-end parsing scenarios through the public API.

use chatsift::config::ParserConfig;
use chatsift::directory::{primary_participant, sender_directory};
use chatsift::parsing::parse_transcript;
use chatsift::summary::summarize;
use chrono::{Datelike, Timelike};

fn parse(content: &str) -> chatsift::parsing::ParseOutcome {
    parse_transcript(content, &ParserConfig::default())
}

// =========================================================================
// Core scenarios
// =========================================================================

#[test]
fn test_two_messages_with_continuation() {
    let transcript = "[01/02/2024, 8:00:16 AM] Alice: Hi\n\
                      [01/02/2024, 8:01:00 AM] Bob: Hello\n\
                      How are you?";
    let outcome = parse(transcript);

    assert_eq!(outcome.messages.len(), 2);

    assert_eq!(outcome.messages[0].sender, "Alice");
    assert_eq!(outcome.messages[0].text, "Hi");
    let ts = outcome.messages[0].timestamp;
    assert_eq!((ts.day(), ts.month(), ts.year()), (1, 2, 2024));
    assert_eq!((ts.hour(), ts.minute(), ts.second()), (8, 0, 16));

    assert_eq!(outcome.messages[1].sender, "Bob");
    assert_eq!(outcome.messages[1].text, "Hello\nHow are you?");

    assert_eq!(outcome.senders, vec!["Alice", "Bob"]);
}

#[test]
fn test_header_only_transcript_emits_one_message_per_line() {
    let transcript = "[01/02/2024, 8:00:00 AM] Alice: one\n\
                      [01/02/2024, 8:01:00 AM] Bob: two\n\
                      [01/02/2024, 8:02:00 AM] Alice: three\n\
                      [01/02/2024, 8:03:00 AM] Carol: four";
    let outcome = parse(transcript);

    assert_eq!(outcome.messages.len(), 4);
    assert_eq!(outcome.stats.lines_matched, 4);

    // Emission order equals appearance order, not timestamp order
    let texts: Vec<&str> = outcome.messages.iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, vec!["one", "two", "three", "four"]);
}

#[test]
fn test_out_of_order_timestamps_not_resorted() {
    let transcript = "[01/02/2024, 9:00:00 AM] Alice: later\n\
                      [01/02/2024, 8:00:00 AM] Bob: earlier";
    let outcome = parse(transcript);

    assert_eq!(outcome.messages[0].text, "later");
    assert_eq!(outcome.messages[1].text, "earlier");
}

#[test]
fn test_multi_paragraph_paste_reassembled() {
    let transcript = "[01/02/2024, 8:00:00 AM] Alice: Here is the recipe\n\
                      Take two eggs.\n\
                      Whisk them well.\n\
                      Bake for an hour.\n\
                      [01/02/2024, 8:05:00 AM] Bob: Thanks!";
    let outcome = parse(transcript);

    assert_eq!(outcome.messages.len(), 2);
    assert_eq!(
        outcome.messages[0].text,
        "Here is the recipe\nTake two eggs.\nWhisk them well.\nBake for an hour."
    );
}

// =========================================================================
// Idempotence
// =========================================================================

#[test]
fn test_parsing_is_idempotent() {
    let transcript = "[01/02/2024, 8:00:16 AM] Alice: Hi\n\
                      continuation here\n\
                      [01/02/2024, 8:01:00 AM] Bob: Hello";
    let first = parse(transcript);
    let second = parse(transcript);

    assert_eq!(first.messages, second.messages);
    assert_eq!(first.senders, second.senders);
    assert_eq!(first.stats, second.stats);
}

// =========================================================================
// Notice exclusion
// =========================================================================

#[test]
fn test_notice_only_transcript_yields_zero_messages() {
    let transcript = "[01/02/2024, 8:00:00 AM] Alice: Messages and calls are \
                      end-to-end encrypted. No one outside of this chat, not even \
                      WhatsApp, can read or listen to them.";
    let outcome = parse(transcript);

    assert!(outcome.messages.is_empty());
    assert!(outcome.senders.is_empty());
    assert_eq!(outcome.stats.notices_filtered, 1);
}

#[test]
fn test_notice_between_messages_leaves_neighbors_untouched() {
    let transcript = "[01/02/2024, 8:00:00 AM] Alice: before\n\
                      [01/02/2024, 8:00:30 AM] Bob: Messages and calls are end-to-end encrypted.\n\
                      [01/02/2024, 8:01:00 AM] Carol: after";
    let outcome = parse(transcript);

    assert_eq!(outcome.messages.len(), 2);
    assert_eq!(outcome.messages[0].text, "before");
    assert_eq!(outcome.messages[1].text, "after");
    assert_eq!(outcome.stats.notices_filtered, 1);
}

#[test]
fn test_notice_with_continuation_suppressed_whole() {
    // The continuation joins the notice message, then the whole thing is
    // suppressed at flush.
    let transcript = "[01/02/2024, 8:00:00 AM] Alice: 消息和通话已进行端到端加密。\n\
                      只有此聊天中的成员可以查看。";
    let outcome = parse(transcript);

    assert!(outcome.messages.is_empty());
    assert_eq!(outcome.stats.notices_filtered, 1);
}

// =========================================================================
// Sender directory
// =========================================================================

#[test]
fn test_directory_alphabetical_independent_of_appearance() {
    let transcript = "[01/02/2024, 8:00:00 AM] Bob: first chronologically\n\
                      [01/02/2024, 8:01:00 AM] Alice: second chronologically";
    let outcome = parse(transcript);

    assert_eq!(outcome.senders, vec!["Alice", "Bob"]);
    assert_eq!(primary_participant(&outcome.senders), Some("Alice"));
}

#[test]
fn test_directory_matches_freestanding_builder() {
    let transcript = "[01/02/2024, 8:00:00 AM] Zoe: hi\n\
                      [01/02/2024, 8:01:00 AM] Ann: hi\n\
                      [01/02/2024, 8:02:00 AM] Zoe: again";
    let outcome = parse(transcript);

    assert_eq!(outcome.senders, sender_directory(&outcome.messages));
    assert_eq!(outcome.senders, vec!["Ann", "Zoe"]);
}

// =========================================================================
// Degenerate inputs
// =========================================================================

#[test]
fn test_empty_input() {
    let outcome = parse("");
    assert!(outcome.messages.is_empty());
    assert!(outcome.senders.is_empty());
}

#[test]
fn test_whitespace_only_input() {
    let outcome = parse("   \n \t \n   ");
    assert!(outcome.messages.is_empty());
}

#[test]
fn test_garbage_input_yields_empty_not_error() {
    let outcome = parse("this is not\na chat export\nat all");
    assert!(outcome.messages.is_empty());
    assert_eq!(outcome.stats.orphan_lines, 3);
}

// =========================================================================
// Invisible characters
// =========================================================================

#[test]
fn test_directional_mark_before_bracket_still_matches() {
    let marked = "\u{200E}[01/02/2024, 8:00:16 AM] Alice: Hi";
    let plain = "[01/02/2024, 8:00:16 AM] Alice: Hi";

    let from_marked = parse(marked);
    let from_plain = parse(plain);

    assert_eq!(from_marked.messages, from_plain.messages);
    assert_eq!(from_marked.senders, from_plain.senders);
}

#[test]
fn test_marks_stripped_from_sender_and_text() {
    let transcript = "[01/02/2024, 8:00:16 AM] \u{200E}Alice\u{200F}: \u{202A}Hi\u{202C}";
    let outcome = parse(transcript);

    assert_eq!(outcome.messages[0].sender, "Alice");
    assert_eq!(outcome.messages[0].text, "Hi");
}

// =========================================================================
// Summary over parsed output
// =========================================================================

#[test]
fn test_summary_of_parsed_transcript() {
    let transcript = "[01/02/2024, 8:00:00 AM] Alice: Hi\n\
                      [01/02/2024, 9:30:00 AM] Bob: <Media omitted>\n\
                      [01/02/2024, 8:15:00 AM] Alice: out of order";
    let outcome = parse(transcript);
    let summary = summarize(&outcome.messages);

    assert_eq!(summary.total_messages, 3);
    assert_eq!(summary.unique_senders, 2);
    assert_eq!(summary.media_messages, 1);
    assert_eq!(summary.text_messages, 2);
    assert_eq!(summary.first_timestamp.unwrap().hour(), 8);
    assert_eq!(summary.last_timestamp.unwrap().hour(), 9);
}
