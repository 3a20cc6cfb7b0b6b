//! CLI configuration with TOML file support.

use proledger_utils::LogFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// File-level settings. Flags and environment variables override these.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CliConfig {
    /// Snapshot file holding the registry state.
    #[serde(default = "default_state_path")]
    pub state_path: PathBuf,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub log_format: LogFormat,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_state_path() -> PathBuf {
    PathBuf::from("./proledger.state")
}

fn default_log_level() -> String {
    "warn".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl CliConfig {
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            state_path: default_state_path(),
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_uses_defaults() {
        let config = CliConfig::from_toml_str("").expect("empty toml should use defaults");
        assert_eq!(config.state_path, PathBuf::from("./proledger.state"));
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_format, LogFormat::Human);
    }

    #[test]
    fn partial_toml_overrides() {
        let toml = r#"
            state_path = "/var/lib/proledger/state.bin"
            log_format = "json"
        "#;
        let config = CliConfig::from_toml_str(toml).expect("should parse");
        assert_eq!(config.state_path, PathBuf::from("/var/lib/proledger/state.bin"));
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn unknown_log_format_rejected() {
        assert!(CliConfig::from_toml_str("log_format = \"xml\"").is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = CliConfig::from_toml_file(Path::new("/nonexistent/proledger.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/proledger.toml"));
    }
}
