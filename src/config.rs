//! Configuration file loading with environment variable overrides.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::params::{parse_format, OutputFormat};

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Defaults applied when the matching CLI flag is absent.
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Default parameter values from config file.
#[derive(Debug, Default, Deserialize)]
pub struct DefaultsConfig {
    /// Output format (`png`, `jpg`, `jpeg`).
    pub format: Option<String>,
    /// Seed for the color source.
    pub seed: Option<u64>,
}

impl Config {
    /// Load configuration from the given path, or return defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
        let config: Self = toml::from_str(&contents)
            .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
        config.default_format()?;
        Ok(config)
    }

    /// The configured default format, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured format is not supported.
    pub fn default_format(&self) -> Result<Option<OutputFormat>, String> {
        self.defaults.format.as_deref().map(parse_format).transpose()
    }
}

/// Discover the config file path using the resolution order:
/// 1. Explicit path (from `--config` flag)
/// 2. `CHECKERGEN_CONFIG` environment variable
/// 3. `~/.config/checkergen/config.toml`
#[must_use]
pub fn discover_config_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }

    if let Ok(p) = std::env::var("CHECKERGEN_CONFIG") {
        return PathBuf::from(p);
    }

    default_config_path()
}

/// Default config path: `~/.config/checkergen/config.toml`.
fn default_config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home).join(".config/checkergen/config.toml")
    } else {
        PathBuf::from("checkergen.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert!(config.defaults.format.is_none());
        assert!(config.defaults.seed.is_none());
        assert_eq!(config.default_format().unwrap(), None);
    }

    #[test]
    fn load_nonexistent_returns_defaults() {
        let config = Config::load(Path::new("/nonexistent/path/config.toml")).unwrap();
        assert!(config.defaults.format.is_none());
    }

    #[test]
    fn load_valid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[defaults]
format = "JPG"
seed = 42
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.default_format().unwrap(), Some(OutputFormat::Jpg));
        assert_eq!(config.defaults.seed, Some(42));
    }

    #[test]
    fn load_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.toml");
        std::fs::write(&path, "").unwrap();

        let config = Config::load(&path).unwrap();
        assert!(config.defaults.seed.is_none());
    }

    #[test]
    fn load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "this is not valid toml {{{").unwrap();

        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn load_rejects_unknown_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gif.toml");
        std::fs::write(&path, "[defaults]\nformat = \"gif\"\n").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(err.contains("Unsupported format"));
    }

    #[test]
    fn discover_explicit_path() {
        let path = discover_config_path(Some(Path::new("/tmp/my-config.toml")));
        assert_eq!(path, PathBuf::from("/tmp/my-config.toml"));
    }
}
