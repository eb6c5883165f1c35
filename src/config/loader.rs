/// Settings loader
use std::path::PathBuf;

use super::schema::Settings;

/// Overrides the per-user config directory
pub const CONFIG_DIR_ENV: &str = "KILLCODE_CONFIG_DIR";

/// Load settings from the process environment
pub fn load_settings() -> Settings {
    load_settings_from(|key| std::env::var(key).ok())
}

/// Load settings through an arbitrary variable lookup
///
/// Unset and empty variables both fall back to the defaults.
pub fn load_settings_from<F>(lookup: F) -> Settings
where
    F: Fn(&str) -> Option<String>,
{
    let mut settings = Settings::default();

    if let Some(dir) = lookup(CONFIG_DIR_ENV).filter(|v| !v.trim().is_empty()) {
        settings.config_dir = Some(PathBuf::from(dir));
    }

    settings
}
