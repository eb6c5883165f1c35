/// Cached machine identifier
///
/// The identifier is stored on disk not for speed but for stability: once
/// written, it survives NIC swaps, MAC changes and virtualization quirks.
/// Every failure on the way (config dir, read, write) is logged and
/// absorbed; callers always get a usable string back.
use std::path::PathBuf;

use tracing::{debug, warn};

use super::calculator::{Identifier, IdentifierCalculator};
use crate::config::{ConfigDirResolver, Settings, UserConfigDir, load_settings};
use crate::error::MachineIdError;
use crate::platform::{DiskFileStore, FileStore};

/// Cache file name inside the config directory
pub const CACHE_FILE_NAME: &str = "machine-id.cache";

/// How an identifier was obtained
///
/// Only for logging and tests; consumers only ever see the string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Resolution {
    /// Read back verbatim from the cache file
    Cached(String),
    /// Computed this run; `persisted` is false if the cache write failed
    Computed { identifier: Identifier, persisted: bool },
    /// No config directory, caching was not attempted
    Uncached(Identifier),
}

impl Resolution {
    pub(crate) fn into_value(self) -> String {
        match self {
            Resolution::Cached(value) => value,
            Resolution::Computed { identifier, .. } | Resolution::Uncached(identifier) => {
                identifier.value
            }
        }
    }
}

/// Identifier calculator wrapped with file persistence
pub struct CacheStore {
    calculator: IdentifierCalculator,
    files: Box<dyn FileStore>,
    config_dir: Box<dyn ConfigDirResolver>,
    cache_file_name: String,
}

impl CacheStore {
    pub fn new(
        calculator: IdentifierCalculator,
        files: Box<dyn FileStore>,
        config_dir: Box<dyn ConfigDirResolver>,
    ) -> Self {
        Self {
            calculator,
            files,
            config_dir,
            cache_file_name: CACHE_FILE_NAME.to_string(),
        }
    }

    pub fn with_cache_file_name(mut self, name: impl Into<String>) -> Self {
        self.cache_file_name = name.into();
        self
    }

    /// Live store for the given settings
    ///
    /// Invalid fields are logged and reset to their defaults.
    pub fn from_settings(settings: &Settings) -> Self {
        let settings = settings.repaired();

        Self::new(
            IdentifierCalculator::system(),
            Box::new(DiskFileStore::new(settings.file_mode)),
            Box::new(UserConfigDir::new(settings.config_dir.clone())),
        )
        .with_cache_file_name(settings.cache_file_name.clone())
    }

    /// Live store configured from the environment
    pub fn system() -> Self {
        Self::from_settings(&load_settings())
    }

    /// Return the cached identifier, or compute and persist a new one
    pub(crate) fn resolve(&self) -> Resolution {
        let dir = match self.config_dir.user_config_dir() {
            Ok(dir) => dir,
            Err(e) => {
                warn!(error = %e, "could not load machine id from cache, returning calculated value");
                return Resolution::Uncached(self.calculator.calculate());
            }
        };

        let cache_file = dir.join(&self.cache_file_name);
        match self.read_cache(cache_file.clone()) {
            Ok(value) => return Resolution::Cached(value),
            Err(e) => debug!(error = %e, "machine id cache miss"),
        }

        // Compute once so the persisted and returned values always agree
        let identifier = self.calculator.calculate();
        let persisted = match self.files.write(&cache_file, identifier.value.as_bytes()) {
            Ok(()) => true,
            Err(source) => {
                let e = MachineIdError::CacheWrite {
                    path: cache_file,
                    source,
                };
                warn!(error = %e, "could not write machine id to cache, returning calculated value");
                false
            }
        };

        Resolution::Computed {
            identifier,
            persisted,
        }
    }

    /// Machine identifier; never fails
    pub fn get_or_compute(&self) -> String {
        let resolution = self.resolve();
        match &resolution {
            Resolution::Cached(_) => debug!("machine id loaded from cache"),
            Resolution::Computed {
                identifier,
                persisted,
            } => debug!(origin = ?identifier.origin, persisted, "machine id computed"),
            Resolution::Uncached(identifier) => {
                debug!(origin = ?identifier.origin, "machine id computed without cache")
            }
        }
        resolution.into_value()
    }

    fn read_cache(&self, path: PathBuf) -> Result<String, MachineIdError> {
        let bytes = match self.files.read(&path) {
            Ok(bytes) => bytes,
            Err(source) => return Err(MachineIdError::CacheRead { path, source }),
        };
        // Contents are trusted as is, no trimming or format check
        String::from_utf8(bytes).map_err(|_| MachineIdError::CacheNotUtf8 { path })
    }
}
