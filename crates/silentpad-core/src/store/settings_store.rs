//! Settings persistence

use crate::error::Result;
use crate::kv::KeyValueStore;
use crate::models::{clamp_font_size, AppSettings};

const DARK_MODE_KEY: &str = "dark_mode";
const NOTIFICATIONS_KEY: &str = "notifications";
const AUTO_SAVE_KEY: &str = "auto_save";
const FONT_SIZE_KEY: &str = "font_size";

/// Loads and saves [`AppSettings`] one key at a time
#[derive(Clone, Debug)]
pub struct SettingsStore<S: KeyValueStore> {
    kv: S,
}

impl<S: KeyValueStore> SettingsStore<S> {
    pub const fn new(kv: S) -> Self {
        Self { kv }
    }

    /// Load settings; missing or unparseable keys keep their defaults
    pub fn load(&self) -> Result<AppSettings> {
        let mut settings = AppSettings::default();

        if let Some(value) = self.get_bool(DARK_MODE_KEY)? {
            settings.dark_mode = value;
        }

        if let Some(value) = self.get_bool(NOTIFICATIONS_KEY)? {
            settings.notifications = value;
        }

        if let Some(value) = self.get_bool(AUTO_SAVE_KEY)? {
            settings.auto_save = value;
        }

        if let Some(value) = self.kv.get(FONT_SIZE_KEY)? {
            if let Ok(size) = value.trim().parse() {
                settings.font_size = clamp_font_size(size);
            }
        }

        Ok(settings)
    }

    /// Save settings, clamping the font size
    pub fn save(&self, settings: &AppSettings) -> Result<()> {
        let settings = settings.normalized();
        let font_size = settings.font_size.to_string();
        self.kv.set_many(&[
            (DARK_MODE_KEY, bool_str(settings.dark_mode)),
            (NOTIFICATIONS_KEY, bool_str(settings.notifications)),
            (AUTO_SAVE_KEY, bool_str(settings.auto_save)),
            (FONT_SIZE_KEY, font_size.as_str()),
        ])?;
        tracing::debug!("Saved settings: {:?}", settings);
        Ok(())
    }

    fn get_bool(&self, key: &str) -> Result<Option<bool>> {
        Ok(self.kv.get(key)?.and_then(|value| parse_bool(&value)))
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

const fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryKvStore;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_load_default_settings() {
        let repo = SettingsStore::new(MemoryKvStore::new());
        assert_eq!(repo.load().unwrap(), AppSettings::default());
    }

    #[test]
    fn test_save_and_load_settings() {
        let repo = SettingsStore::new(MemoryKvStore::new());

        let settings = AppSettings {
            dark_mode: false,
            notifications: false,
            auto_save: true,
            font_size: 20,
        };
        repo.save(&settings).unwrap();

        assert_eq!(repo.load().unwrap(), settings);
    }

    #[test]
    fn test_garbage_values_fall_back() {
        let kv = MemoryKvStore::new();
        kv.set_many(&[("dark_mode", "maybe"), ("font_size", "huge"), ("auto_save", "off")])
            .unwrap();
        let settings = SettingsStore::new(kv).load().unwrap();

        assert!(settings.dark_mode);
        assert_eq!(settings.font_size, 16);
        assert!(!settings.auto_save);
    }

    #[test]
    fn test_font_size_clamped_both_ways() {
        let kv = MemoryKvStore::new();
        let repo = SettingsStore::new(kv.clone());

        repo.save(&AppSettings {
            font_size: 99,
            ..AppSettings::default()
        })
        .unwrap();
        assert_eq!(kv.get("font_size").unwrap().as_deref(), Some("24"));

        kv.set("font_size", "3").unwrap();
        assert_eq!(repo.load().unwrap().font_size, 12);
    }
}
