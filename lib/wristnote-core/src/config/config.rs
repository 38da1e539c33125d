use crate::config::serialize_config;
use crate::paths;
use crate::platform::IconId;
use log::{trace, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Config {
    /// The path the config file was loaded from
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// How long in milliseconds an overlay stays up after a button press
    pub rearm_timeout_ms: u32,
    /// Auto-dismiss timeout of small messages when none is given. 0 disables it
    pub mini_message_timeout_ms: u32,
    /// Auto-dismiss timeout of full screen messages. 0 disables it
    pub message_timeout_ms: u32,
    /// Auto-dismiss timeout of incoming calls. 0 disables it
    pub call_timeout_ms: u32,
    /// Auto-dismiss timeout of alarms. 0 disables it
    pub alarm_timeout_ms: u32,
    /// Small message text is cut to this many characters
    pub max_message_len: usize,
    /// Icon shown next to small messages
    pub mini_message_icon: IconId,
    /// YAML file of messages the simulator can show
    pub message_store_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: None,
            rearm_timeout_ms: 30_000,
            mini_message_timeout_ms: 5_000,
            message_timeout_ms: 30_000,
            call_timeout_ms: 0,
            alarm_timeout_ms: 0,
            max_message_len: 64,
            mini_message_icon: 0,
            message_store_path: None,
        }
    }
}

impl Config {
    pub fn default_config_path() -> Option<PathBuf> {
        paths::default_config_path()
    }

    pub fn load(
        config_path: Option<&Path>,
        save: bool,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let path = match config_path {
            Some(p) => p.to_path_buf(),
            None => {
                Self::default_config_path().ok_or("Could not determine default config directory")?
            }
        };

        if !path.exists() {
            Self::create_default_config_file(&path)?;
            trace!("Created default config file at: {}", path.display());
        }

        let contents = fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

        let mut config = Self::from_yaml(&contents)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;

        config.config_path = Some(path.clone());

        // Write back so fields missing from the file show up with their defaults
        if save {
            if let Err(e) = config.save_to_file(&path) {
                warn!("Failed to update config file with missing fields: {e}");
            }
        }

        Ok(config)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, serde_yaml::Error> {
        // An empty file deserializes to unit, not to a map
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(contents)
    }

    fn create_default_config_file(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        Config::default().save_to_file(path)
    }

    /// Checks values the controller can't run with.
    pub fn validate(&self) -> Result<(), String> {
        if self.rearm_timeout_ms == 0 {
            return Err("rearm_timeout_ms must be greater than 0".to_string());
        }
        if self.max_message_len == 0 {
            return Err("max_message_len must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Save the current config to a file
    pub fn save_to_file(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, serialize_config(self)?)?;
        Ok(())
    }
}
