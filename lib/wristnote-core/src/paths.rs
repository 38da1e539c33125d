use std::path::PathBuf;

/// Get the base directory for Wristnote data files
fn data_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("Wristnote"))
}

/// Get the base directory for Wristnote config files
fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("Wristnote"))
}

/// Get the path to the log file
pub fn log_file_path() -> Option<PathBuf> {
    ensure_data_dir().map(|dir| dir.join("wristnote.log"))
}

/// Get the path to the default config file
pub fn default_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// Ensure the data directory exists
fn ensure_data_dir() -> Option<PathBuf> {
    data_dir().and_then(|dir| {
        std::fs::create_dir_all(&dir).ok()?;
        Some(dir)
    })
}
