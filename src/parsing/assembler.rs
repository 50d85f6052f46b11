//! Message assembly state machine.
//!
//! One linear pass over the transcript's lines. The pass is driven purely by
//! whether a line matches the header grammar, which is what lets arbitrarily
//! long multi-line messages (pasted paragraphs) reassemble correctly:
//!
//! - a header line closes the message under construction and opens a new one
//! - any other non-blank line is appended to the open message
//! - a closed message passes through the notice filter before emission
//!
//! Malformed lines never abort the pass; the design favors best-effort
//! reconstruction of as many valid messages as possible over strict
//! rejection.

use serde::{Deserialize, Serialize};

use crate::config::ParserConfig;
use crate::directory;
use crate::message::ParsedMessage;
use crate::parsing::header::{HeaderCapture, HeaderMatcher};
use crate::parsing::{media, normalize, notice, timestamp};

/// The parser either has no message open or is accumulating one.
#[derive(Debug)]
enum ParserState {
    Idle,
    Building(ParsedMessage),
}

impl ParserState {
    /// Closes the in-progress message, if any, emitting it unless it matches
    /// a system notice.
    fn flush(&mut self, out: &mut Vec<ParsedMessage>, stats: &mut ParseStats, config: &ParserConfig) {
        if let ParserState::Building(message) = std::mem::replace(self, ParserState::Idle) {
            if config.filter_notices && notice::is_system_notice(&message.text) {
                stats.notices_filtered += 1;
                tracing::debug!(sender = %message.sender, "suppressed system notice");
            } else {
                out.push(message);
            }
        }
    }
}

/// Diagnostic counters for one parse pass.
///
/// Returned alongside the message sequence instead of being printed;
/// the parser also emits `tracing` events for per-line failures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Total lines seen, blank ones included
    pub lines_processed: usize,
    /// Header lines that opened a message
    pub lines_matched: usize,
    /// Non-header lines appended to an open message
    pub continuation_lines: usize,
    /// Messages suppressed by the notice filter
    pub notices_filtered: usize,
    /// Header-shaped lines whose date/time failed to resolve
    pub timestamp_failures: usize,
    /// Non-header lines discarded with no message open
    pub orphan_lines: usize,
}

/// The full result of one parse pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseOutcome {
    /// Emitted messages, in header-line appearance order
    pub messages: Vec<ParsedMessage>,
    /// Distinct senders, sorted lexicographically
    pub senders: Vec<String>,
    /// Diagnostic counters
    pub stats: ParseStats,
}

impl ParseOutcome {
    /// Returns `true` if no messages were emitted.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Parses a transcript into an ordered message sequence plus the sender
/// directory.
///
/// Pure and synchronous: one pass over `content`, no side effects beyond
/// `tracing` diagnostics. An empty or whitespace-only transcript yields an
/// empty outcome; there is no fatal path.
///
/// # Example
///
/// ```
/// use chatsift::config::ParserConfig;
/// use chatsift::parsing::parse_transcript;
///
/// let transcript = "[01/02/2024, 8:00:16 AM] Alice: Hi\n\
///                   [01/02/2024, 8:01:00 AM] Bob: Hello\n\
///                   How are you?";
/// let outcome = parse_transcript(transcript, &ParserConfig::default());
///
/// assert_eq!(outcome.messages.len(), 2);
/// assert_eq!(outcome.messages[1].text, "Hello\nHow are you?");
/// assert_eq!(outcome.senders, vec!["Alice", "Bob"]);
/// ```
pub fn parse_transcript(content: &str, config: &ParserConfig) -> ParseOutcome {
    let matcher = HeaderMatcher::new();
    let mut messages = Vec::new();
    let mut stats = ParseStats::default();
    let mut state = ParserState::Idle;

    for raw_line in content.lines() {
        stats.lines_processed += 1;

        let line = normalize::clean(raw_line);
        if line.is_empty() {
            continue;
        }

        match matcher.capture(&line) {
            Some(header) => match timestamp::resolve_timestamp(header.date, header.time) {
                Ok(resolved) => {
                    stats.lines_matched += 1;
                    state.flush(&mut messages, &mut stats, config);
                    state = ParserState::Building(open_message(resolved, &header, config));
                }
                Err(error) => {
                    // Recoverable: the line neither opens a message nor
                    // attaches to the previous one.
                    stats.timestamp_failures += 1;
                    tracing::warn!(%error, line = %line, "dropped header line");
                }
            },
            None => match &mut state {
                ParserState::Building(message) => {
                    stats.continuation_lines += 1;
                    message.append_line(&line);
                }
                ParserState::Idle => {
                    stats.orphan_lines += 1;
                    tracing::debug!(line = %line, "discarded line with no message open");
                }
            },
        }
    }

    state.flush(&mut messages, &mut stats, config);

    tracing::debug!(
        messages = messages.len(),
        lines = stats.lines_processed,
        notices = stats.notices_filtered,
        "parse pass complete"
    );

    let senders = directory::sender_directory(&messages);
    ParseOutcome {
        messages,
        senders,
        stats,
    }
}

fn open_message(
    timestamp: chrono::NaiveDateTime,
    header: &HeaderCapture<'_>,
    config: &ParserConfig,
) -> ParsedMessage {
    let sender = normalize::clean(header.sender);

    // The raw capture is retained when stripping leaves nothing, so an
    // emitted message never carries empty text.
    let cleaned = normalize::clean(header.text);
    let text = if cleaned.is_empty() {
        header.text.to_string()
    } else {
        cleaned
    };

    let mut message = ParsedMessage::new(timestamp, sender, text);
    if config.detect_media
        && let Some(kind) = media::detect_media(&message.text)
    {
        message.media = Some(kind);
    }
    message
}
