//! Data models for SilentPad

mod note;
mod profile;
mod settings;

pub use note::{format_timestamp, now_millis, Note, NoteId, UNTITLED};
pub use profile::Profile;
pub use settings::{clamp_font_size, AppSettings, FONT_SIZE_RANGE};
