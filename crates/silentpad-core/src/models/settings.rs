//! Application settings model

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Allowed note font sizes (sp)
pub const FONT_SIZE_RANGE: RangeInclusive<u32> = 12..=24;

/// Application settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Dark theme
    pub dark_mode: bool,
    /// Reminder notifications
    pub notifications: bool,
    /// Save the editor contents when leaving it
    pub auto_save: bool,
    /// Font size for note content
    pub font_size: u32,
}

impl AppSettings {
    /// Copy with `font_size` clamped into [`FONT_SIZE_RANGE`]
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            font_size: clamp_font_size(self.font_size),
            ..self.clone()
        }
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            notifications: true,
            auto_save: true,
            font_size: 16,
        }
    }
}

pub fn clamp_font_size(size: u32) -> u32 {
    size.clamp(*FONT_SIZE_RANGE.start(), *FONT_SIZE_RANGE.end())
}
