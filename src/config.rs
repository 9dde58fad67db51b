use crate::error::{PerfRecapError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the Linear API key
pub const LINEAR_KEY_ENV: &str = "LINEAR_API_KEY";
/// Environment variable overriding the Gemini API key
pub const GEMINI_KEY_ENV: &str = "GEMINI_API_KEY";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Linear API key (personal API key, sent as the Authorization header)
    #[serde(default)]
    pub linear_api_key: String,

    /// Gemini API key
    #[serde(default)]
    pub gemini_api_key: String,

    /// Default lookback window in days (default: 30)
    #[serde(default = "default_timespan")]
    pub default_timespan_days: u32,

    /// Gemini model identifier
    #[serde(default = "default_model")]
    pub gemini_model: String,
}

impl Config {
    /// Load configuration from the default location (~/.config/perf-recap/config.toml)
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PerfRecapError::config(format!(
                "Config file not found at: {}",
                path.display()
            )));
        }

        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| PerfRecapError::config("Could not determine home directory"))?;
        Ok(home.join(".config").join("perf-recap").join("config.toml"))
    }

    /// Create a default configuration file at the default location
    pub fn create_default() -> Result<Self> {
        let config_path = Self::default_config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let config = Self::default();
        let toml_string = toml::to_string_pretty(&config)?;
        fs::write(&config_path, toml_string)?;

        Ok(config)
    }

    /// Load config from file, or create default if it doesn't exist
    pub fn load_or_create_default() -> Result<Self> {
        match Self::load() {
            Ok(config) => Ok(config),
            Err(PerfRecapError::Config(_)) => {
                eprintln!("Config file not found. Creating default config...");
                Self::create_default()
            }
            Err(e) => Err(e),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.default_timespan_days == 0 {
            return Err(PerfRecapError::config("default_timespan_days must be > 0"));
        }

        if self.gemini_model.is_empty() {
            return Err(PerfRecapError::config("gemini_model must not be empty"));
        }

        Ok(())
    }

    /// Linear API key: environment variable wins over the config file
    pub fn linear_api_key(&self) -> Result<String> {
        resolve_key(LINEAR_KEY_ENV, &self.linear_api_key, "linear_api_key")
    }

    /// Gemini API key: environment variable wins over the config file
    pub fn gemini_api_key(&self) -> Result<String> {
        resolve_key(GEMINI_KEY_ENV, &self.gemini_api_key, "gemini_api_key")
    }
}

fn resolve_key(env_var: &str, file_value: &str, field: &str) -> Result<String> {
    if let Ok(value) = env::var(env_var) {
        if !value.is_empty() {
            return Ok(value);
        }
    }
    if !file_value.is_empty() {
        return Ok(file_value.to_string());
    }
    Err(PerfRecapError::MissingConfig(format!(
        "{} (set the {} environment variable or add it to the config file)",
        field, env_var
    )))
}

impl Default for Config {
    fn default() -> Self {
        Self {
            linear_api_key: String::new(),
            gemini_api_key: String::new(),
            default_timespan_days: default_timespan(),
            gemini_model: default_model(),
        }
    }
}

// Serde default functions
fn default_timespan() -> u32 {
    30
}

fn default_model() -> String {
    "gemini-3-flash-preview".to_string()
}
