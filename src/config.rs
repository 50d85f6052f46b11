//! Parser configuration.
//!
//! # Example
//!
//! ```rust
//! use chatsift::config::ParserConfig;
//!
//! let config = ParserConfig::new()
//!     .with_filter_notices(false)
//!     .with_detect_media(false);
//! assert!(!config.filter_notices);
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for a parse pass.
///
/// The defaults match the behavior of the exporting application's own
/// viewer: system notices are suppressed and media placeholders are
/// classified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Suppress system/encryption notices instead of emitting them
    /// (default: true)
    pub filter_notices: bool,

    /// Classify media placeholder bodies into [`MediaKind`]
    /// (default: true)
    ///
    /// [`MediaKind`]: crate::parsing::media::MediaKind
    pub detect_media: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            filter_notices: true,
            detect_media: true,
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables notice filtering.
    #[must_use]
    pub fn with_filter_notices(mut self, enabled: bool) -> Self {
        self.filter_notices = enabled;
        self
    }

    /// Enables or disables media placeholder classification.
    #[must_use]
    pub fn with_detect_media(mut self, enabled: bool) -> Self {
        self.detect_media = enabled;
        self
    }
}
