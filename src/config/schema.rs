/// Settings schema for the machine identifier cache
use std::path::{Component, Path, PathBuf};

use tracing::warn;

use super::permissions::FILE_MODE;
use crate::error::{MachineIdError, Result};
use crate::identity::cache::CACHE_FILE_NAME;

/// Main settings structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory holding the cache file
    /// None = resolve the per-user config directory
    pub config_dir: Option<PathBuf>,

    /// Cache file name inside the config directory
    pub cache_file_name: String,

    /// Creation mode for the cache file (unix only)
    pub file_mode: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            config_dir: None,
            cache_file_name: CACHE_FILE_NAME.to_string(),
            file_mode: FILE_MODE,
        }
    }
}

impl Settings {
    /// Validate settings
    pub fn validate(&self) -> Result<()> {
        check_cache_file_name(&self.cache_file_name)?;
        check_file_mode(self.file_mode)
    }

    /// Copy with each invalid field reset to its default
    ///
    /// Valid fields, including a config directory override, are kept.
    pub fn repaired(&self) -> Settings {
        let defaults = Settings::default();
        let mut settings = self.clone();

        if let Err(e) = check_cache_file_name(&settings.cache_file_name) {
            warn!(error = %e, "ignoring cache_file_name setting");
            settings.cache_file_name = defaults.cache_file_name;
        }

        if let Err(e) = check_file_mode(settings.file_mode) {
            warn!(error = %e, "ignoring file_mode setting");
            settings.file_mode = defaults.file_mode;
        }

        settings
    }
}

fn check_cache_file_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(MachineIdError::InvalidSettings(
            "cache_file_name cannot be empty".to_string(),
        ));
    }

    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(MachineIdError::InvalidSettings(format!(
            "cache_file_name must be a plain file name, got {name:?}"
        ))),
    }
}

fn check_file_mode(mode: u32) -> Result<()> {
    if mode > 0o777 {
        return Err(MachineIdError::InvalidSettings(format!(
            "file_mode {mode:o} has bits outside 0o777"
        )));
    }
    Ok(())
}
