//! Vela configuration system.
//!
//! TOML-based configuration with full validation. All config sections use
//! sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use vela_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("default url: {}", config.browser.default_url);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{VelaConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;

use vela_common::ConfigError;

/// Load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creating a documented
/// default if none exists. Validation problems are logged, not fatal.
pub fn load_config() -> Result<VelaConfig, ConfigError> {
    toml_loader::load_default()
}

/// Load config from an explicit path (the `--config` override).
pub fn load_config_from(path: &Path) -> Result<VelaConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }
    toml_loader::load_from_path(path)
}
