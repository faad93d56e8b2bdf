//! Configuration module for Wiser
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (WISER_*)
//! 3. Project config (.wiser/config.toml)
//! 4. User config (<config dir>/wiser/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{user_config_path, with_overrides_from, ConfigWarning, PROJECT_CONFIG_PATH};
pub use types::{
    Config, OutputConfig, PublishConfig, StoreConfig, Verbosity, DEFAULT_STORE_PATH,
};
