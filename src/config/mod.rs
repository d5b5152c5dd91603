//! Configuration management module.
//!
//! This module handles loading and saving the application configuration:
//! the wallet service location and credentials, registration timing, and the
//! theme preference.

mod error;

pub use error::ConfigError;

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    time::Duration,
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/sacco-signup";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub wallet_url: String,
    pub api_key: Option<String>,
    pub redirect_delay_ms: u64,
    pub register_timeout_secs: u64, // 0 disables the timeout
    pub theme_name: String,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_wallet_url")]
    pub wallet_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default = "default_redirect_delay_ms")]
    pub redirect_delay_ms: u64,
    #[serde(default = "default_register_timeout_secs")]
    pub register_timeout_secs: u64,
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
}

fn default_wallet_url() -> String {
    "http://localhost:8080/api".to_string()
}

fn default_redirect_delay_ms() -> u64 {
    2000
}

fn default_register_timeout_secs() -> u64 {
    30
}

fn default_theme_name() -> String {
    "tokyo-night".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance holding the defaults.
    ///
    pub fn new() -> Config {
        Config {
            wallet_url: default_wallet_url(),
            api_key: None,
            redirect_delay_ms: default_redirect_delay_ms(),
            register_timeout_secs: default_register_timeout_secs(),
            theme_name: default_theme_name(),
            file_path: None,
        }
    }

    /// Load the configuration file from the custom directory if provided or
    /// the default one otherwise. A missing file is created with the current
    /// values.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        // Use default path unless custom path provided
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        self.file_path = Some(dir_path.join(Path::new(FILE_NAME)));
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;

        if file_path.exists() {
            let contents = fs::read_to_string(file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            let data: FileSpec = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
            self.wallet_url = data.wallet_url;
            self.api_key = data.api_key.filter(|key| !key.is_empty());
            self.redirect_delay_ms = data.redirect_delay_ms;
            self.register_timeout_secs = data.register_timeout_secs;
            self.theme_name = data.theme_name;
        } else {
            self.save()?;
        }

        self.validate()?;
        Ok(())
    }

    /// Serialize the configuration and write it to the disk.
    ///
    pub fn save(&self) -> Result<(), AppError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            wallet_url: self.wallet_url.clone(),
            api_key: self.api_key.clone(),
            redirect_delay_ms: self.redirect_delay_ms,
            register_timeout_secs: self.register_timeout_secs,
            theme_name: self.theme_name.clone(),
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

        if let Some(parent) = file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Reject values the application cannot work with.
    ///
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.wallet_url.starts_with("http://") || self.wallet_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                key: "wallet_url",
                message: format!("'{}' must start with http:// or https://", self.wallet_url),
            });
        }
        Ok(())
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }

    pub fn register_timeout(&self) -> Option<Duration> {
        match self.register_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    /// Returns the path buffer for the default configuration directory or an
    /// error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => {
                let home_path = Path::new(&home);
                let default_config_path = Path::new(DEFAULT_DIRECTORY_PATH);
                Ok(home_path.join(default_config_path))
            }
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}
