/// Platform capabilities - the narrow seams to the host OS
///
/// Identifier logic only talks to the network stack and the filesystem
/// through these traits, so it can be driven by fakes in tests.
pub mod fs;
pub mod interfaces;

pub use fs::{DiskFileStore, FileStore};
pub use interfaces::{InterfaceRecord, InterfaceSource, SystemInterfaces};
