//! Configuration management for podtui
//!
//! Optional TOML file at ~/.config/podtui/config.toml. Every field has a
//! working default, so first run needs no config at all.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::store::FileStore;

/// Default audio player command.
const DEFAULT_PLAYER: &str = "mpv";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Directory API base URL override (mainly for self-hosted mirrors)
    pub api_base: Option<String>,
    /// Audio player command (mpv-compatible flags assumed)
    pub player: Option<String>,
    /// Data directory override for favorites and logs
    pub data_dir: Option<PathBuf>,
}

impl Config {
    /// Config file path (~/.config/podtui/config.toml)
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("podtui").join("config.toml"))
    }

    /// Load config from the default path, or defaults if not found.
    pub fn load() -> Self {
        Self::load_from(Self::path().as_deref())
    }

    /// Load config from an explicit path (the --config flag), falling back
    /// to defaults on any read or parse problem.
    pub fn load_from(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match std::fs::read_to_string(path) {
            Ok(raw) => match toml::from_str(&raw) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "ignoring malformed config");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    pub fn player_command(&self) -> &str {
        self.player.as_deref().unwrap_or(DEFAULT_PLAYER)
    }

    /// Directory for favorites and logs. Config override first, then the
    /// platform data dir, then the current directory as a last resort.
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .or_else(FileStore::default_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_no_file() {
        let config = Config::load_from(Some(Path::new("/nonexistent/podtui.toml")));
        assert!(config.api_base.is_none());
        assert_eq!(config.player_command(), "mpv");
    }

    #[test]
    fn test_parses_toml_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "api_base = \"http://localhost:9000\"\nplayer = \"mpv-custom\"\n",
        )
        .unwrap();

        let config = Config::load_from(Some(&path));
        assert_eq!(config.api_base.as_deref(), Some("http://localhost:9000"));
        assert_eq!(config.player_command(), "mpv-custom");
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "api_base = [this is not toml").unwrap();

        let config = Config::load_from(Some(&path));
        assert!(config.api_base.is_none());
    }

    #[test]
    fn test_data_dir_override_wins() {
        let config = Config {
            data_dir: Some(PathBuf::from("/tmp/podtui-data")),
            ..Config::default()
        };
        assert_eq!(config.data_dir(), PathBuf::from("/tmp/podtui-data"));
    }
}
