/// Whole-file reads and writes for the identifier cache
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use crate::config::permissions::FILE_MODE;

/// File access used by the cache store
///
/// Contents are raw bytes: no encoding wrapper, no newline handling.
pub trait FileStore: Send + Sync {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Create or overwrite `path` with `contents`
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;
}

/// Real disk access with a fixed creation mode
#[derive(Debug, Clone, Copy)]
pub struct DiskFileStore {
    #[cfg_attr(not(unix), allow(dead_code))]
    mode: u32,
}

impl DiskFileStore {
    pub fn new(mode: u32) -> Self {
        Self { mode }
    }
}

impl Default for DiskFileStore {
    fn default() -> Self {
        Self::new(FILE_MODE)
    }
}

impl FileStore for DiskFileStore {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);

        // Mode only applies when the file is created, matching open(2)
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(self.mode);
        }

        let mut file = options.open(path)?;
        file.write_all(contents)?;
        file.flush()
    }
}
