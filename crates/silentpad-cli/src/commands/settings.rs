use silentpad_core::kv::KeyValueStore;
use silentpad_core::{AppServices, AppSettings};

use crate::cli::SettingsCommands;
use crate::error::CliError;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SettingsUpdate {
    pub dark_mode: Option<bool>,
    pub notifications: Option<bool>,
    pub auto_save: Option<bool>,
    pub font_size: Option<u32>,
}

impl SettingsUpdate {
    pub fn apply(self, settings: &mut AppSettings) {
        if let Some(value) = self.dark_mode {
            settings.dark_mode = value;
        }
        if let Some(value) = self.notifications {
            settings.notifications = value;
        }
        if let Some(value) = self.auto_save {
            settings.auto_save = value;
        }
        if let Some(value) = self.font_size {
            settings.font_size = value;
        }
    }
}

pub fn run_settings<S: KeyValueStore>(
    app: &AppServices<S>,
    command: Option<SettingsCommands>,
) -> Result<(), CliError> {
    let settings = match command {
        None | Some(SettingsCommands::Show) => app.settings.load()?,
        Some(SettingsCommands::Set {
            dark_mode,
            notifications,
            auto_save,
            font_size,
        }) => update_settings(
            app,
            SettingsUpdate {
                dark_mode,
                notifications,
                auto_save,
                font_size,
            },
        )?,
    };

    for line in format_settings(&settings) {
        println!("{line}");
    }
    Ok(())
}

pub fn update_settings<S: KeyValueStore>(
    app: &AppServices<S>,
    update: SettingsUpdate,
) -> Result<AppSettings, CliError> {
    let mut settings = app.settings.load()?;
    update.apply(&mut settings);
    app.settings.save(&settings)?;
    Ok(app.settings.load()?)
}

pub fn format_settings(settings: &AppSettings) -> Vec<String> {
    let on_off = |value: bool| if value { "on" } else { "off" };
    vec![
        format!("dark_mode      {}", on_off(settings.dark_mode)),
        format!("notifications  {}", on_off(settings.notifications)),
        format!("auto_save      {}", on_off(settings.auto_save)),
        format!("font_size      {}sp", settings.font_size),
    ]
}
