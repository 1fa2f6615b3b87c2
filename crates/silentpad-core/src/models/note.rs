//! Note model

use chrono::{Local, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Title shown for notes saved without one.
pub const UNTITLED: &str = "Untitled";

const TIMESTAMP_FORMAT: &str = "%b %d, %Y • %H:%M";

/// A unique note identifier, allocated from the millisecond clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(i64);

impl NoteId {
    #[must_use]
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

impl From<i64> for NoteId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

/// A note in the system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier
    pub id: NoteId,
    /// Title, may be empty
    #[serde(default)]
    pub title: String,
    /// Plain text content
    #[serde(default)]
    pub content: String,
    /// Last save timestamp (Unix ms); records without one read as the epoch
    #[serde(default)]
    pub timestamp: i64,
}

impl Note {
    /// Create a note with an explicit id, stamped with the current time
    #[must_use]
    pub fn new(id: NoteId, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            timestamp: now_millis(),
        }
    }

    /// Title for list and editor headers, falling back to "Untitled"
    #[must_use]
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            UNTITLED
        } else {
            &self.title
        }
    }

    /// Both title and content are empty; the editor refuses to save these
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.title.is_empty() && self.content.is_empty()
    }

    /// First line of content, truncated to `max_len` characters with an ellipsis
    #[must_use]
    pub fn preview(&self, max_len: usize) -> String {
        let first_line = self.content.lines().next().unwrap_or("").trim();
        if first_line.chars().count() <= max_len {
            return first_line.to_string();
        }
        let keep = max_len.saturating_sub(3);
        let mut preview: String = first_line.chars().take(keep).collect();
        preview.push_str("...");
        preview
    }

    /// Timestamp rendered as `MMM dd, yyyy • HH:mm` in local time
    #[must_use]
    pub fn formatted_timestamp(&self) -> String {
        format_timestamp(self.timestamp, &Local)
    }

    /// Case-insensitive match against title and content
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query) || self.content.to_lowercase().contains(&query)
    }
}

/// Format a Unix-ms timestamp in the given zone; out-of-range values render empty.
pub fn format_timestamp<Tz>(timestamp_ms: i64, zone: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    zone.timestamp_millis_opt(timestamp_ms)
        .single()
        .map(|time| time.format(TIMESTAMP_FORMAT).to_string())
        .unwrap_or_default()
}

/// Current Unix timestamp in milliseconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_note_id_parse() {
        let id: NoteId = " 1700000000000 ".parse().unwrap();
        assert_eq!(id.as_i64(), 1_700_000_000_000);
        assert!("abc".parse::<NoteId>().is_err());
    }

    #[test]
    fn test_note_serializes_flat_id() {
        let note = Note {
            id: NoteId::from_raw(7),
            title: "A".to_string(),
            content: "x".to_string(),
            timestamp: 42,
        };
        let json = serde_json::to_value(&note).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 7, "title": "A", "content": "x", "timestamp": 42})
        );
    }

    #[test]
    fn test_missing_text_fields_default_empty() {
        let note: Note = serde_json::from_str(r#"{"id": 1, "timestamp": 5}"#).unwrap();
        assert!(note.title.is_empty());
        assert!(note.content.is_empty());
        assert!(note.is_blank());
    }

    #[test]
    fn test_display_title_falls_back() {
        let mut note = Note::new(NoteId::from_raw(1), "", "body");
        assert_eq!(note.display_title(), "Untitled");
        note.title = "Groceries".to_string();
        assert_eq!(note.display_title(), "Groceries");
    }

    #[test]
    fn test_preview() {
        let long = "This is a very long sentence that should be shortened\nsecond";
        let note = Note::new(NoteId::from_raw(1), "", long);
        assert_eq!(note.preview(20), "This is a very lo...");

        let short = Note::new(NoteId::from_raw(2), "", "short\nmore");
        assert_eq!(short.preview(20), "short");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(0, &Utc), "Jan 01, 1970 • 00:00");
        assert_eq!(
            format_timestamp(1_700_000_000_000, &Utc),
            "Nov 14, 2023 • 22:13"
        );
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let note = Note::new(NoteId::from_raw(1), "Shopping", "Buy MILK");
        assert!(note.matches("milk"));
        assert!(note.matches("shop"));
        assert!(!note.matches("bread"));
    }
}
