use crate::errors::AppResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_server_url")]
    pub server_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: char,
    #[serde(default = "default_max_cell_width")]
    pub max_cell_width: usize,
    /// Raw `Cookie` header value forwarded on every request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_cookie: Option<String>,
}

fn default_server_url() -> String {
    "http://localhost:8080".to_string()
}
fn default_timeout_secs() -> u64 {
    10
}
fn default_log_level() -> String {
    "warn".to_string()
}
fn default_separator_char() -> char {
    '-'
}
fn default_max_cell_width() -> usize {
    40
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            timeout_secs: default_timeout_secs(),
            log_level: default_log_level(),
            separator_char: default_separator_char(),
            max_cell_width: default_max_cell_width(),
            session_cookie: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        if cfg!(target_os = "windows") {
            home.join("clubadmin")
        } else {
            home.join(".clubadmin")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("clubadmin.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            Ok(serde_yaml::from_str(&content)?)
        } else {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            Ok(Self::default())
        }
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Create the config directory and write this configuration.
    /// In test mode nothing touches the disk.
    pub fn save(&self, is_test: bool) -> AppResult<PathBuf> {
        let path = Self::config_file();
        if is_test {
            return Ok(path);
        }

        fs::create_dir_all(Self::config_dir())?;
        let yaml = self.to_yaml()?;
        let mut file = fs::File::create(&path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(path)
    }
}
