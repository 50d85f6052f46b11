//! Header line matching.
//!
//! A header line opens a new message:
//!
//! ```text
//! [1/2/2024, 8:00:16 AM] Alice: Hi
//! ```
//!
//! Exactly one grammar is recognized: bracketed `D/M/YYYY` date, 12-hour
//! `H:MM:SS` time with AM/PM marker, sender terminated by the first colon,
//! non-empty remaining text. Lines in other date conventions are treated as
//! continuation (or orphan) lines by the assembler. The grammar lives behind
//! [`HeaderMatcher`] so an alternative could be substituted without touching
//! the state machine.

use regex::Regex;

/// Bracketed 12-hour header grammar.
///
/// Capture groups: date, time (with AM/PM marker), sender, text. Interior
/// whitespace is tolerated; the AM/PM marker is case-insensitive.
const HEADER_PATTERN: &str =
    r"^\[(\d{1,2}/\d{1,2}/\d{4}),\s*(\d{1,2}:\d{2}:\d{2}\s*[APap][Mm])\]\s*([^:]+):\s*(\S.*)";

/// The four fields captured from a header line.
///
/// Borrows from the matched line; all fields are as-captured, before
/// normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderCapture<'a> {
    /// `D/M/YYYY` date token
    pub date: &'a str,
    /// `H:MM:SS AM|PM` time token
    pub time: &'a str,
    /// Sender token (everything before the first colon after the bracket)
    pub sender: &'a str,
    /// Remaining text on the line
    pub text: &'a str,
}

/// Recognizer for message header lines.
///
/// Compiles its pattern once at construction.
///
/// # Example
///
/// ```
/// use chatsift::parsing::HeaderMatcher;
///
/// let matcher = HeaderMatcher::new();
/// let capture = matcher.capture("[1/2/2024, 8:00:16 AM] Alice: Hi").unwrap();
/// assert_eq!(capture.sender, "Alice");
/// assert_eq!(capture.text, "Hi");
/// ```
#[derive(Debug)]
pub struct HeaderMatcher {
    regex: Regex,
}

impl HeaderMatcher {
    /// Creates a matcher for the bracketed 12-hour header grammar.
    pub fn new() -> Self {
        Self {
            regex: Regex::new(HEADER_PATTERN).expect("header pattern is valid"),
        }
    }

    /// Attempts to match `line` as a header line.
    ///
    /// Returns the structured capture on match, `None` otherwise. A capture
    /// whose sender is whitespace-only is not a real header and yields
    /// `None`.
    pub fn capture<'a>(&self, line: &'a str) -> Option<HeaderCapture<'a>> {
        let caps = self.regex.captures(line)?;
        let sender = caps.get(3).map_or("", |m| m.as_str());
        if sender.trim().is_empty() {
            return None;
        }
        Some(HeaderCapture {
            date: caps.get(1).map_or("", |m| m.as_str()),
            time: caps.get(2).map_or("", |m| m.as_str()),
            sender,
            text: caps.get(4).map_or("", |m| m.as_str()),
        })
    }

    /// Returns `true` if `line` is a header line.
    pub fn is_header(&self, line: &str) -> bool {
        self.capture(line).is_some()
    }
}

impl Default for HeaderMatcher {
    fn default() -> Self {
        Self::new()
    }
}
