/// Per-user configuration directory resolution
use std::path::PathBuf;

use crate::error::{MachineIdError, Result};

/// Directory name under the user's home
pub const CONFIG_DIR_NAME: &str = ".killcode";

/// Resolves a stable, writable, per-user directory
pub trait ConfigDirResolver: Send + Sync {
    fn user_config_dir(&self) -> Result<PathBuf>;
}

/// `$HOME/.killcode`, or an explicit override
///
/// The directory is created on demand so callers can write into it
/// straight away.
#[derive(Debug, Clone, Default)]
pub struct UserConfigDir {
    override_dir: Option<PathBuf>,
}

impl UserConfigDir {
    pub fn new(override_dir: Option<PathBuf>) -> Self {
        Self { override_dir }
    }
}

impl ConfigDirResolver for UserConfigDir {
    fn user_config_dir(&self) -> Result<PathBuf> {
        let path = match &self.override_dir {
            Some(dir) => dir.clone(),
            None => dirs::home_dir()
                .ok_or(MachineIdError::NoHomeDir)?
                .join(CONFIG_DIR_NAME),
        };

        std::fs::create_dir_all(&path).map_err(|source| MachineIdError::ConfigDir {
            path: path.clone(),
            source,
        })?;

        Ok(path)
    }
}
