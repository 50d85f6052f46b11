//! Date/time resolution.
//!
//! Converts the captured date and 12-hour time tokens into a naive
//! [`NaiveDateTime`]. Exports carry no timezone, so no conversion is applied;
//! the result is the wall-clock time of the original device.

use chrono::NaiveDateTime;

use crate::error::{ChatsiftError, Result};
use crate::parsing::normalize;

/// Format candidates, most specific first. The header grammar only produces
/// the 12-hour seconds form; the remaining candidates keep the resolver
/// usable as a standalone API.
const DATETIME_FORMATS: [&str; 4] = [
    "%d/%m/%Y %I:%M:%S %p",
    "%d/%m/%Y %I:%M %p",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
];

/// Resolves a `"D/M/YYYY"` date token and an `"H:MM:SS AM|PM"` time token
/// into a naive timestamp.
///
/// Both tokens are scrubbed of directional marks, commas, and surrounding
/// whitespace before matching. Hour 12 AM maps to hour 0 and hour 12 PM to
/// hour 12 (`%I`/`%p` semantics).
///
/// # Errors
///
/// [`ChatsiftError::InvalidDateFormat`] when the tokens do not match any
/// candidate even after scrubbing. Callers inside a parse pass treat this as
/// a per-line recoverable failure.
///
/// # Example
///
/// ```
/// use chatsift::parsing::resolve_timestamp;
/// use chrono::Timelike;
///
/// let ts = resolve_timestamp("1/2/2024", "12:00:00 AM").unwrap();
/// assert_eq!(ts.hour(), 0);
/// ```
pub fn resolve_timestamp(date: &str, time: &str) -> Result<NaiveDateTime> {
    let combined = format!("{} {}", scrub(date), scrub(time));

    for format in DATETIME_FORMATS {
        if let Ok(resolved) = NaiveDateTime::parse_from_str(&combined, format) {
            return Ok(resolved);
        }
    }

    Err(ChatsiftError::invalid_date_format(combined))
}

/// Strips directional marks and stray commas, then trims.
fn scrub(token: &str) -> String {
    normalize::clean(token).replace(',', "")
}
