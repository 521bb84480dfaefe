//! Configuration management for the CLI.
//!
//! Settings are read from `~/.accord/config.toml` unless another file is
//! given with `--config`. Every key is optional.

use crate::error::{CliError, Result};
use accord_balance::Strategy;
use accord_graph::HeaderPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Balance algorithm
    #[serde(default)]
    pub strategy: StrategySetting,

    /// How header counts are enforced
    #[serde(default)]
    pub header_policy: PolicySetting,

    /// Output settings
    #[serde(default)]
    pub settings: Settings,
}

/// Global output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default)]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `Balanced` / `Not Balanced`
    #[default]
    Text,
    /// Verdict followed by a table
    Table,
    /// JSON format
    Json,
    /// `true` / `false`
    Quiet,
}

/// Balance algorithm as written in the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategySetting {
    /// Triangle scan
    BruteForce,
    /// Pivot split
    #[default]
    Partition,
}

/// Header policy as written in the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicySetting {
    /// Counts are hints
    #[default]
    Advisory,
    /// Stop at the declared edge count
    Bounded,
    /// Counts must match
    Strict,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".accord").join("config.toml"))
    }

    /// Load configuration from the default path, or defaults if absent.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        if path.exists() {
            Self::from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from an explicit file, which must exist.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Text,
        }
    }
}

impl From<StrategySetting> for Strategy {
    fn from(setting: StrategySetting) -> Self {
        match setting {
            StrategySetting::BruteForce => Strategy::BruteForce,
            StrategySetting::Partition => Strategy::Partition,
        }
    }
}

impl From<PolicySetting> for HeaderPolicy {
    fn from(setting: PolicySetting) -> Self {
        match setting {
            PolicySetting::Advisory => HeaderPolicy::Advisory,
            PolicySetting::Bounded => HeaderPolicy::Bounded,
            PolicySetting::Strict => HeaderPolicy::Strict,
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.strategy, StrategySetting::Partition);
        assert_eq!(config.header_policy, PolicySetting::Advisory);
        assert!(config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Text);
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
            strategy = "brute-force"
            header_policy = "strict"

            [settings]
            color = false
            format = "json"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.strategy, StrategySetting::BruteForce);
        assert_eq!(config.header_policy, PolicySetting::Strict);
        assert!(!config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Json);
    }

    #[test]
    fn test_parse_empty_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_partial_settings() {
        let config: Config = toml::from_str("[settings]\nformat = \"table\"\n").unwrap();
        assert!(config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Table);
    }

    #[test]
    fn test_unknown_strategy_rejected() {
        assert!(toml::from_str::<Config>("strategy = \"quantum\"").is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "header_policy = \"bounded\"").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.header_policy, PolicySetting::Bounded);
        assert_eq!(HeaderPolicy::from(config.header_policy), HeaderPolicy::Bounded);
    }

    #[test]
    fn test_from_missing_file() {
        let result = Config::from_file("/definitely/not/here/config.toml");
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_strategy_conversion() {
        assert_eq!(Strategy::from(StrategySetting::BruteForce), Strategy::BruteForce);
        assert_eq!(Strategy::from(StrategySetting::Partition), Strategy::Partition);
    }
}
