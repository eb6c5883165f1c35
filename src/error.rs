/// Error types for machine identifier resolution
///
/// None of these reach the consumer: every failure is logged and absorbed
/// by the cache store, which always hands back a usable identifier.
use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MachineIdError {
    #[error("could not determine the user home directory")]
    NoHomeDir,

    #[error("could not prepare config directory {}: {source}", path.display())]
    ConfigDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not read machine id cache {}: {source}", path.display())]
    CacheRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("machine id cache {} is not valid UTF-8", path.display())]
    CacheNotUtf8 { path: PathBuf },

    #[error("could not write machine id cache {}: {source}", path.display())]
    CacheWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid hardware address: {0}")]
    InvalidHardwareAddress(String),

    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}

pub type Result<T> = std::result::Result<T, MachineIdError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_include_path() {
        let err = MachineIdError::CacheWrite {
            path: PathBuf::from("/tmp/kc/machine-id.cache"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };

        let msg = err.to_string();
        assert!(msg.contains("/tmp/kc/machine-id.cache"));
        assert!(msg.contains("denied"));
    }
}
