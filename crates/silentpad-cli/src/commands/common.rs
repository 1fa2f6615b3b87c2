use std::io::{self, IsTerminal};
use std::path::Path;

use chrono::Utc;
use serde::Serialize;
use silentpad_core::kv::FileKvStore;
use silentpad_core::{AppServices, Note, NoteId};

use crate::error::CliError;

pub type Services = AppServices<FileKvStore>;

#[derive(Debug, Serialize)]
pub struct NoteListItem {
    pub id: i64,
    pub title: String,
    pub preview: String,
    pub content: String,
    pub timestamp: i64,
    pub updated: String,
    pub relative_time: String,
}

pub fn open_services(data_dir: &Path) -> Result<Services, CliError> {
    Ok(AppServices::open_path(data_dir)?)
}

pub fn format_note_lines(notes: &[Note]) -> Vec<String> {
    let now_ms = Utc::now().timestamp_millis();
    notes
        .iter()
        .map(|note| {
            let id = note.id.to_string();
            let title = truncate(note.display_title(), 24);
            let preview = note.preview(40);
            let relative_time = relative_age(note.timestamp, now_ms);
            format!("{id:<13}  {title:<24}  {preview:<40}  {relative_time}")
        })
        .collect()
}

pub fn note_to_list_item(note: &Note) -> NoteListItem {
    let now_ms = Utc::now().timestamp_millis();
    NoteListItem {
        id: note.id.as_i64(),
        title: note.display_title().to_string(),
        preview: note.preview(80),
        content: note.content.clone(),
        timestamp: note.timestamp,
        updated: note.formatted_timestamp(),
        relative_time: relative_age(note.timestamp, now_ms),
    }
}

pub fn print_notes(notes: &[Note], as_json: bool) -> Result<(), CliError> {
    if as_json {
        let items = notes.iter().map(note_to_list_item).collect::<Vec<_>>();
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else if notes.is_empty() {
        println!("No notes yet");
    } else {
        for line in format_note_lines(notes) {
            println!("{line}");
        }
    }
    Ok(())
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut truncated = text
        .chars()
        .take(max_chars.saturating_sub(3))
        .collect::<String>();
    truncated.push_str("...");
    truncated
}

const MINUTE_MS: i64 = 60_000;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Largest unit first; anything under a minute is "just now"
const AGE_UNITS: [(i64, &str); 6] = [
    (365 * DAY_MS, "y"),
    (30 * DAY_MS, "mo"),
    (7 * DAY_MS, "w"),
    (DAY_MS, "d"),
    (HOUR_MS, "h"),
    (MINUTE_MS, "m"),
];

/// Age of a note's last save, e.g. `3d ago`
pub fn relative_age(timestamp_ms: i64, now_ms: i64) -> String {
    let elapsed = now_ms.saturating_sub(timestamp_ms);
    AGE_UNITS
        .iter()
        .find(|(unit_ms, _)| elapsed >= *unit_ms)
        .map_or_else(
            || "just now".to_string(),
            |(unit_ms, suffix)| format!("{}{suffix} ago", elapsed / unit_ms),
        )
}

/// Content from the arguments, else from piped stdin; may be empty
pub fn resolve_note_content(content_parts: &[String]) -> Result<String, CliError> {
    match clean_note_text(&content_parts.join(" ")) {
        Some(content) => Ok(content),
        None => Ok(piped_note_text()?.unwrap_or_default()),
    }
}

/// Note body as stored: Windows line endings folded, outer whitespace dropped
pub fn clean_note_text(raw: &str) -> Option<String> {
    let text = raw.replace("\r\n", "\n");
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

pub fn search_query(raw: &str) -> Result<&str, CliError> {
    match raw.trim() {
        "" => Err(CliError::EmptySearchQuery),
        query => Ok(query),
    }
}

pub fn parse_note_id(id: &str) -> Result<NoteId, CliError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(CliError::EmptyNoteId);
    }
    trimmed
        .parse()
        .map_err(|_| CliError::InvalidNoteId(trimmed.to_string()))
}

/// Note text piped into the command, if stdin is not a terminal
pub fn piped_note_text() -> Result<Option<String>, CliError> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }
    let raw = io::read_to_string(stdin.lock())?;
    Ok(clean_note_text(&raw))
}
