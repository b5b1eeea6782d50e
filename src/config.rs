//! Settings — optional YAML file at ~/.notefreq/config.yaml.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// User settings. Every field has a default, so an empty file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Log filter used when neither `RUST_LOG` nor `-v` is given.
    #[serde(default = "Settings::default_log_level")]
    pub log_level: String,
}

impl Settings {
    fn default_log_level() -> String {
        "warn".to_string()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: Self::default_log_level(),
        }
    }
}

/// Default path for the settings file.
pub fn default_config_path() -> PathBuf {
    let mut path = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(".notefreq");
    path.push("config.yaml");
    path
}

/// Load settings from a YAML file. Returns defaults if the file doesn't exist.
pub fn load_settings(path: &Path) -> Result<Settings, io::Error> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }
    serde_yaml::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_settings() {
        assert_eq!(Settings::default().log_level, "warn");
    }

    #[test]
    fn load_nonexistent_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.yaml");
        assert_eq!(load_settings(&path).unwrap(), Settings::default());
    }

    #[test]
    fn load_custom_level() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "log_level: debug").unwrap();
        let settings = load_settings(file.path()).unwrap();
        assert_eq!(settings.log_level, "debug");
    }

    #[test]
    fn empty_file_is_default() {
        let file = NamedTempFile::new().unwrap();
        assert_eq!(load_settings(file.path()).unwrap(), Settings::default());
    }

    #[test]
    fn malformed_file_is_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "log_level: [unclosed").unwrap();
        let err = load_settings(file.path()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn default_path_under_dot_dir() {
        let path = default_config_path();
        assert!(path.ends_with(".notefreq/config.yaml"));
    }
}
