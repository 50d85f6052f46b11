//! # Chatsift
//!
//! A Rust library for parsing WhatsApp chat exports into structured,
//! ordered message sequences.
//!
//! ## Overview
//!
//! An export is a plain-text transcript (optionally delivered inside a
//! `.zip` container) where each message starts with a bracketed header line:
//!
//! ```text
//! [1/2/2024, 8:00:16 AM] Alice: Hi
//! ```
//!
//! Chatsift walks the transcript line by line with a small state machine,
//! reassembling multi-line messages, resolving timestamps, stripping the
//! invisible directional marks exports sprinkle in, and suppressing
//! system-generated notices. The parse is a pure, synchronous, in-memory
//! transform: one string in, an ordered message sequence plus a sorted
//! sender directory and diagnostic counters out.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatsift::prelude::*;
//!
//! let transcript = "[01/02/2024, 8:00:16 AM] Alice: Hi\n\
//!                   [01/02/2024, 8:01:00 AM] Bob: Hello\n\
//!                   How are you?";
//!
//! let outcome = parse_transcript(transcript, &ParserConfig::default());
//!
//! assert_eq!(outcome.messages.len(), 2);
//! assert_eq!(outcome.messages[1].text, "Hello\nHow are you?");
//! assert_eq!(outcome.senders, vec!["Alice", "Bob"]);
//! ```
//!
//! ## Archived exports
//!
//! With the `archive` feature (on by default), a `.zip` container can be
//! loaded directly:
//!
//! ```rust,no_run
//! use chatsift::archive::load_transcript;
//! use chatsift::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let loaded = load_transcript("WhatsApp Chat - Alice.zip".as_ref())?;
//!     let outcome = parse_transcript(&loaded.text, &ParserConfig::default());
//!     println!("{}: {} messages", loaded.label, outcome.messages.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parsing`] — the parse pass and its pieces
//!   - [`parse_transcript`](parsing::parse_transcript) — entry point
//!   - [`HeaderMatcher`](parsing::HeaderMatcher) — the header grammar
//!   - [`resolve_timestamp`](parsing::resolve_timestamp) — date/time tokens
//! - [`directory`] — sorted sender directory, primary participant
//! - [`summary`] — aggregate transcript statistics
//! - [`archive`] — zip container extraction and display labels
//! - [`output`] — JSON and plain text renderings
//! - [`config`] — [`ParserConfig`](config::ParserConfig)
//! - [`error`] — unified error types ([`ChatsiftError`], [`Result`])

#[cfg(feature = "archive")]
pub mod archive;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod directory;
pub mod error;
pub mod message;
pub mod output;
pub mod parsing;
pub mod summary;

// Re-export the main types at the crate root for convenience
pub use error::{ChatsiftError, Result};
pub use message::ParsedMessage;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatsift::prelude::*;
/// ```
pub mod prelude {
    // Core message type
    pub use crate::ParsedMessage;

    // Error types
    pub use crate::error::{ChatsiftError, Result};

    // The parse pass
    pub use crate::parsing::{ParseOutcome, ParseStats, parse_transcript};

    // Configuration
    pub use crate::config::ParserConfig;

    // Directory and statistics
    pub use crate::directory::{primary_participant, sender_directory};
    pub use crate::summary::{TranscriptSummary, summarize};

    // Media classification
    pub use crate::parsing::media::MediaKind;

    // Archive extraction
    #[cfg(feature = "archive")]
    pub use crate::archive::{ExtractedTranscript, LoadedTranscript, extract_transcript};
}
