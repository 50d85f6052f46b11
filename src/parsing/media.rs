//! Media placeholder detection.
//!
//! Exports replace attachments with text placeholders like `<Media omitted>`
//! or `image omitted`. Detection only classifies; a placeholder is still a
//! real message and is never suppressed.

use serde::{Deserialize, Serialize};

/// Placeholder markers, lowercase; matching is case-insensitive substring.
const MEDIA_MARKERS: [&str; 8] = [
    "<media omitted>",
    "<attached:",
    "image omitted",
    "video omitted",
    "audio omitted",
    "document omitted",
    "sticker omitted",
    "gif omitted",
];

/// Classification of a media placeholder body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    Audio,
    Document,
    Sticker,
    Gif,
    /// Placeholder with no recognizable type, e.g. `<Media omitted>`
    Other,
}

/// Detects whether `text` is a media placeholder and classifies it.
///
/// Returns `None` for ordinary message text.
///
/// # Example
///
/// ```
/// use chatsift::parsing::media::{MediaKind, detect_media};
///
/// assert_eq!(detect_media("image omitted"), Some(MediaKind::Image));
/// assert_eq!(detect_media("Hello!"), None);
/// ```
pub fn detect_media(text: &str) -> Option<MediaKind> {
    let lowered = text.to_lowercase();
    if !MEDIA_MARKERS.iter().any(|marker| lowered.contains(marker)) {
        return None;
    }
    Some(classify(&lowered))
}

fn classify(lowered: &str) -> MediaKind {
    if lowered.contains("image") || lowered.contains("photo") {
        MediaKind::Image
    } else if lowered.contains("video") {
        MediaKind::Video
    } else if lowered.contains("audio") || lowered.contains("voice") {
        MediaKind::Audio
    } else if lowered.contains("document") || lowered.contains("pdf") {
        MediaKind::Document
    } else if lowered.contains("sticker") {
        MediaKind::Sticker
    } else if lowered.contains("gif") {
        MediaKind::Gif
    } else {
        MediaKind::Other
    }
}
