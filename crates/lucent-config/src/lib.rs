//! Configuration for the lucent PWM tools.
//!
//! # Features
//!
//! - **Config file**: TOML file naming the device, default pin and default duration
//! - **Validation**: Values are checked with the same rules the engine applies
//! - **Paths**: Platform-specific user and system config locations
//!
//! # Example
//!
//! ```rust,no_run
//! use lucent_config::{Config, user_config_file};
//!
//! // Resolve the config for this run (user file, system file, or defaults)
//! let config = Config::load_or_default(None).unwrap();
//!
//! // Write a config with a default pin
//! Config::default()
//!     .with_default_pin(18)
//!     .save(user_config_file())
//!     .unwrap();
//! ```

mod config;
mod error;

/// Platform-specific configuration paths.
pub mod paths;

pub use config::Config;
pub use error::ConfigError;
pub use paths::{
    CONFIG_FILE, ensure_user_config_dir, find_config, system_config_file, user_config_dir,
    user_config_file,
};
