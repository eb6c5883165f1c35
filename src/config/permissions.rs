/// File permission policy for files this crate writes

/// Owner read/write, group and others read
pub const FILE_MODE: u32 = 0o644;
