//! Configuration file format and operations.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use lucent_core::{DEFAULT_DEVICE, Minutes, Pin};

use crate::error::ConfigError;
use crate::paths::find_config;

/// Runtime configuration for the `lucent` command.
///
/// Every field is optional in the file; missing keys fall back to the
/// defaults below.
///
/// # TOML Format
///
/// ```toml
/// device = "/dev/pi-blaster"
/// default_pin = 18
/// default_duration = 1.0
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Device file records are written to.
    pub device: PathBuf,

    /// GPIO used when a command does not name one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_pin: Option<u8>,

    /// Ramp duration in minutes when a command does not give one.
    pub default_duration: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            device: PathBuf::from(DEFAULT_DEVICE),
            default_pin: None,
            default_duration: 1.0,
        }
    }
}

impl Config {
    /// Set the device path.
    pub fn with_device(mut self, device: impl Into<PathBuf>) -> Self {
        self.device = device.into();
        self
    }

    /// Set the default pin.
    pub fn with_default_pin(mut self, pin: u8) -> Self {
        self.default_pin = Some(pin);
        self
    }

    /// Set the default duration in minutes.
    pub fn with_default_duration(mut self, minutes: f64) -> Self {
        self.default_duration = minutes;
        self
    }

    /// Load and validate a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        Self::from_toml(&content)
    }

    /// Load and validate a configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the configuration for a run.
    ///
    /// An explicit path must exist. Without one, the first file found by
    /// [`find_config`] is used, and the defaults if there is none.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load(path),
            None => match find_config() {
                Some(path) => Self::load(path),
                None => Ok(Self::default()),
            },
        }
    }

    /// Save the configuration to a TOML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        Ok(())
    }

    /// Convert the configuration to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check every value against the engine's rules.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.default_pin()?;
        self.default_duration()?;
        Ok(())
    }

    /// The default pin, validated.
    pub fn default_pin(&self) -> Result<Option<Pin>, ConfigError> {
        self.default_pin
            .map(Pin::new)
            .transpose()
            .map_err(|source| ConfigError::Invalid {
                key: "default_pin",
                source,
            })
    }

    /// The default duration, validated.
    pub fn default_duration(&self) -> Result<Minutes, ConfigError> {
        Minutes::new(self.default_duration).map_err(|source| ConfigError::Invalid {
            key: "default_duration",
            source,
        })
    }
}
