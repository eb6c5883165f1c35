/// Configuration module - settings and external collaborators for the cache
pub mod dir;
pub mod loader;
pub mod permissions;
pub mod schema;

pub use dir::{ConfigDirResolver, UserConfigDir};
pub use loader::{CONFIG_DIR_ENV, load_settings, load_settings_from};
pub use schema::Settings;
