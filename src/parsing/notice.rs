//! System notice filtering.
//!
//! The exporting application inserts informational lines that are not
//! genuine participant messages: the end-to-end encryption disclaimer, group
//! lifecycle notices, security code changes. A message whose text matches
//! one of these phrasings is suppressed entirely and does not count toward
//! message totals.

/// Known notice phrasings, lowercase. Matching is case-insensitive
/// substring. Only unambiguous full phrasings are listed; single words like
/// "added" or "left" also occur in genuine messages.
const NOTICE_PHRASES: [&str; 9] = [
    "messages and calls are end-to-end encrypted",
    "消息和通话已进行端到端加密",
    "joined using this group's invite link",
    "created group",
    "changed the subject",
    "changed this group's icon",
    "security code changed",
    "turned on disappearing messages",
    "turned off disappearing messages",
];

/// Returns `true` if `text` matches a known system notice phrasing.
///
/// # Example
///
/// ```
/// use chatsift::parsing::notice::is_system_notice;
///
/// assert!(is_system_notice(
///     "Messages and calls are end-to-end encrypted. No one outside of this chat can read them."
/// ));
/// assert!(!is_system_notice("Hello everyone!"));
/// ```
pub fn is_system_notice(text: &str) -> bool {
    let lowered = text.to_lowercase();
    NOTICE_PHRASES.iter().any(|phrase| lowered.contains(phrase))
}
