//! Archive extraction.
//!
//! Exported conversations arrive either as a bare `.txt` transcript or as a
//! `.zip` container holding one. This module opens the container, pulls out
//! the transcript text, and derives a human display label from the container
//! file name. The parsing core never sees the container; it receives the
//! decoded string.

use std::fs::{self, File};
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use zip::ZipArchive;

use crate::error::{ChatsiftError, Result};

/// Transcript entry suffix, matched case-insensitively.
pub const TRANSCRIPT_SUFFIX: &str = ".txt";

/// Container suffix, matched case-insensitively.
pub const ARCHIVE_SUFFIX: &str = ".zip";

/// Literal prefix the exporting application puts on container names,
/// e.g. `WhatsApp Chat - Alice.zip`.
const EXPORT_PREFIX: &str = "WhatsApp Chat - ";

/// A transcript pulled out of a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedTranscript {
    /// Decoded text of the transcript entry
    pub text: String,
    /// Name of the entry inside the container
    pub entry_name: String,
}

/// A transcript loaded from disk, from either input form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedTranscript {
    /// Full transcript text
    pub text: String,
    /// Human display label derived from the file name
    pub label: String,
}

fn has_suffix(name: &str, suffix: &str) -> bool {
    name.to_ascii_lowercase().ends_with(suffix)
}

/// Extracts the transcript from a zip container.
///
/// Selects the first non-directory entry whose name ends in `.txt`
/// (case-insensitive) and decodes it as UTF-8.
///
/// # Errors
///
/// - [`ChatsiftError::NoTextEntryFound`] if no such entry exists
/// - [`ChatsiftError::EmptyExtractedContent`] if the entry decodes to zero
///   length
/// - [`ChatsiftError::Archive`] / [`ChatsiftError::Io`] for container and
///   decoding failures
pub fn extract_transcript<R: Read + Seek>(reader: R) -> Result<ExtractedTranscript> {
    let mut container = ZipArchive::new(reader)?;

    for index in 0..container.len() {
        let mut entry = container.by_index(index)?;
        if entry.is_dir() || !has_suffix(entry.name(), TRANSCRIPT_SUFFIX) {
            continue;
        }

        let entry_name = entry.name().to_string();
        let mut text = String::new();
        entry.read_to_string(&mut text)?;

        if text.is_empty() {
            return Err(ChatsiftError::empty_extracted_content(entry_name));
        }

        tracing::debug!(entry = %entry_name, bytes = text.len(), "extracted transcript entry");
        return Ok(ExtractedTranscript { text, entry_name });
    }

    Err(ChatsiftError::NoTextEntryFound)
}

/// Opens `path` as a zip container and extracts its transcript.
pub fn extract_transcript_path(path: &Path) -> Result<ExtractedTranscript> {
    let file = File::open(path)?;
    extract_transcript(BufReader::new(file))
}

/// Derives a human display label from a container or transcript file name.
///
/// Strips the `"WhatsApp Chat - "` prefix and the file extension; when the
/// prefix is absent the extension-stripped name is used verbatim.
///
/// # Example
///
/// ```
/// use chatsift::archive::display_label;
///
/// assert_eq!(display_label("WhatsApp Chat - Alice.zip"), "Alice");
/// assert_eq!(display_label("holiday.zip"), "holiday");
/// ```
pub fn display_label(file_name: &str) -> String {
    let stem = strip_extension(file_name);
    stem.strip_prefix(EXPORT_PREFIX).unwrap_or(stem).to_string()
}

fn strip_extension(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => name,
    }
}

/// Loads a transcript from `path`, dispatching on its suffix.
///
/// A `.zip` path (case-insensitive) goes through [`extract_transcript`];
/// anything else is read as plain text. The label comes from the file name
/// via [`display_label`].
pub fn load_transcript(path: &Path) -> Result<LoadedTranscript> {
    let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
    let label = display_label(file_name);

    let text = if has_suffix(file_name, ARCHIVE_SUFFIX) {
        extract_transcript_path(path)?.text
    } else {
        fs::read_to_string(path)?
    };

    Ok(LoadedTranscript { text, label })
}
