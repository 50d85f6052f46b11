//! Output rendering.
//!
//! String-returning converters alongside file writers, so callers that hold
//! output in memory (tests, services) share one code path with the CLI.

use std::fmt::Write as _;

use crate::message::ParsedMessage;

#[cfg(feature = "json-output")]
use crate::error::Result;
#[cfg(feature = "json-output")]
use std::fs::File;
#[cfg(feature = "json-output")]
use std::io::Write as _;
#[cfg(feature = "json-output")]
use std::path::Path;

/// Converts messages to a pretty-printed JSON array.
///
/// # Format
/// ```json
/// [
///   {"timestamp": "2024-02-01T08:00:16", "sender": "Alice", "text": "Hi"}
/// ]
/// ```
#[cfg(feature = "json-output")]
pub fn to_json(messages: &[ParsedMessage]) -> Result<String> {
    Ok(serde_json::to_string_pretty(messages)?)
}

/// Writes messages to a JSON file. Same format as [`to_json`].
#[cfg(feature = "json-output")]
pub fn write_json(messages: &[ParsedMessage], output_path: &Path) -> Result<()> {
    let json = to_json(messages)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    file.write_all(b"\n")?;
    Ok(())
}

/// Renders messages as plain text, one `[timestamp] sender: text` block per
/// message. Continuation lines keep their embedded newlines.
pub fn to_text(messages: &[ParsedMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let _ = writeln!(
            out,
            "[{}] {}: {}",
            message.timestamp.format("%Y-%m-%d %H:%M:%S"),
            message.sender,
            message.text
        );
    }
    out
}
