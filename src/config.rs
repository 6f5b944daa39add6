use std::fs;
use std::io;
use std::path::Path;

use merbabu_core::{Policy, Theme, ThemePreset};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

const CONFIG_FILE: &str = "merbabu_config.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub strict: bool,
    pub theme: ThemePreset,
    /// Full theme record; replaces the preset when present.
    pub theme_overrides: Option<Theme>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strict: true,
            theme: ThemePreset::Merbabu,
            theme_overrides: None,
        }
    }
}

impl Config {
    /// Reads `merbabu_config.json` from the working directory. Never writes it.
    pub fn load() -> Self {
        match Self::from_path(CONFIG_FILE) {
            Ok(config) => {
                debug!(path = CONFIG_FILE, "config loaded");
                config
            }
            Err(ConfigError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = CONFIG_FILE, "config file not found, using defaults");
                Config::default()
            }
            Err(err) => {
                warn!(path = CONFIG_FILE, error = %err, "ignoring config file, using defaults");
                Config::default()
            }
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn policy(&self) -> Policy {
        Policy::from_strict(self.strict)
    }

    pub fn resolved_theme(&self) -> Theme {
        self.theme_overrides
            .clone()
            .unwrap_or_else(|| self.theme.theme())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_is_strict_merbabu() {
        let config = Config::default();
        assert_eq!(config.policy(), Policy::Strict);
        assert_eq!(config.resolved_theme(), Theme::merbabu());
    }

    #[test]
    fn lenient_classic_variant() {
        let config: Config = serde_json::from_str(r#"{ "strict": false, "theme": "classic" }"#).unwrap();
        assert_eq!(config.policy(), Policy::Lenient);
        assert_eq!(config.resolved_theme(), Theme::classic());
    }

    #[test]
    fn reads_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "strict": false }}"#).unwrap();

        let config = Config::from_path(file.path()).unwrap();
        assert!(!config.strict);
        assert_eq!(config.theme, ThemePreset::Merbabu);
        assert_eq!(config.theme_overrides, None);
    }

    #[test]
    fn overrides_replace_preset() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "theme": "classic", "theme_overrides": {{ "heading": "Gudang" }} }}"#
        )
        .unwrap();

        let theme = Config::from_path(file.path()).unwrap().resolved_theme();
        assert_eq!(theme.heading, "Gudang");
        assert_eq!(theme.window_title, Theme::merbabu().window_title);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::from_path(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(ref e) if e.kind() == io::ErrorKind::NotFound));
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ strict: ").unwrap();
        assert!(matches!(
            Config::from_path(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }
}
