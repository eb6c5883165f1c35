//! KillCode machine identifier
//!
//! Produces a stable, anonymized per-installation identifier used to tag
//! telemetry events:
//! 1. SHA-256 of the first usable network hardware address
//! 2. Random UUID when no such address exists
//! 3. Cached in `<config dir>/machine-id.cache` so the value survives
//!    hardware changes

// Module declarations
pub mod config;
pub mod error;
pub mod identity;
pub mod platform;

pub use error::MachineIdError;
pub use identity::{
    CacheStore, HardwareAddress, Identifier, IdentifierCalculator, Origin, sha256_hex,
};

/// Machine identifier for telemetry
///
/// Never fails: cache and config directory problems are logged and the
/// identifier is computed directly instead.
pub fn get_machine_id() -> String {
    CacheStore::system().get_or_compute()
}
