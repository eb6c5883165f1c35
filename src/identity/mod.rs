/// Identity module - machine identifier derivation and caching
pub mod address;
pub mod cache;
pub mod calculator;
pub mod hash;

pub use address::{BLOCKED_ADDRESSES, HardwareAddress, is_blocked, select_address};
pub use cache::{CACHE_FILE_NAME, CacheStore};
pub use calculator::{Identifier, IdentifierCalculator, Origin, random_identifier};
pub use hash::sha256_hex;
