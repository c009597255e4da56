//! Deployer configuration
//!
//! Values come from an optional YAML file; command-line flags and environment
//! variables override them.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Log output format
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Inbound endpoint deployer - assembles endpoint definitions and reports the result
#[derive(Parser, Debug, Default)]
#[command(name = "inbound-deployer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short, long, env = "INBOUND_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory holding endpoint definitions
    #[arg(long, env = "INBOUND_ENDPOINTS_DIR")]
    pub endpoints_dir: Option<PathBuf>,

    /// Registry entries file (YAML)
    #[arg(long, env = "INBOUND_REGISTRY_FILE")]
    pub registry_file: Option<PathBuf>,

    /// Properties file backing $FILE: placeholders (YAML)
    #[arg(long, env = "INBOUND_PROPERTIES_FILE")]
    pub properties_file: Option<PathBuf>,

    /// Log output format
    #[arg(long, value_enum, env = "INBOUND_LOG_FORMAT")]
    pub log_format: Option<LogFormat>,

    /// Stop at the first definition that fails to assemble
    #[arg(long, env = "INBOUND_FAIL_FAST")]
    pub fail_fast: bool,
}

/// Deployer settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeployerConfig {
    /// Directory holding endpoint definitions (default: "inbound-endpoints")
    #[serde(default = "default_endpoints_dir")]
    pub endpoints_dir: PathBuf,

    /// Registry entries file; no registry entries when unset
    #[serde(default)]
    pub registry_file: Option<PathBuf>,

    /// Properties file for $FILE: placeholders
    #[serde(default)]
    pub properties_file: Option<PathBuf>,

    /// Log output format (default: text)
    #[serde(default)]
    pub log_format: LogFormat,

    /// Abort on the first failed definition (default: false)
    #[serde(default)]
    pub fail_fast: bool,
}

fn default_endpoints_dir() -> PathBuf {
    PathBuf::from("inbound-endpoints")
}

impl Default for DeployerConfig {
    fn default() -> Self {
        Self {
            endpoints_dir: default_endpoints_dir(),
            registry_file: None,
            properties_file: None,
            log_format: LogFormat::default(),
            fail_fast: false,
        }
    }
}

impl DeployerConfig {
    /// Load settings from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        serde_yaml::from_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Resolve the effective settings for a command line
    pub fn load(cli: &Cli) -> Result<Self> {
        let base = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(base.merge(cli))
    }

    /// Apply command-line overrides
    pub fn merge(mut self, cli: &Cli) -> Self {
        if let Some(dir) = &cli.endpoints_dir {
            self.endpoints_dir = dir.clone();
        }
        if let Some(file) = &cli.registry_file {
            self.registry_file = Some(file.clone());
        }
        if let Some(file) = &cli.properties_file {
            self.properties_file = Some(file.clone());
        }
        if let Some(format) = cli.log_format {
            self.log_format = format;
        }
        self.fail_fast |= cli.fail_fast;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config: DeployerConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, DeployerConfig::default());
        assert_eq!(config.endpoints_dir, PathBuf::from("inbound-endpoints"));
        assert_eq!(config.log_format, LogFormat::Text);
        assert!(!config.fail_fast);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "endpoints_dir: /etc/inbound\nregistry_file: /etc/registry.yaml\nlog_format: json"
        )
        .unwrap();

        let config = DeployerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.endpoints_dir, PathBuf::from("/etc/inbound"));
        assert_eq!(config.registry_file, Some(PathBuf::from("/etc/registry.yaml")));
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.properties_file, None);
    }

    #[test]
    fn test_cli_overrides_file() {
        let cli = Cli {
            endpoints_dir: Some(PathBuf::from("/srv/endpoints")),
            log_format: Some(LogFormat::Json),
            fail_fast: true,
            ..Default::default()
        };
        let config = DeployerConfig {
            registry_file: Some(PathBuf::from("/etc/registry.yaml")),
            ..Default::default()
        }
        .merge(&cli);

        assert_eq!(config.endpoints_dir, PathBuf::from("/srv/endpoints"));
        assert_eq!(config.registry_file, Some(PathBuf::from("/etc/registry.yaml")));
        assert_eq!(config.log_format, LogFormat::Json);
        assert!(config.fail_fast);
    }

    #[test]
    fn test_missing_config_file() {
        let err = DeployerConfig::from_file(Path::new("/nonexistent/inbound.yaml")).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }
}
