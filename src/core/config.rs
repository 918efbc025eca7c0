//! # Configuration
//!
//! Centralizes settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.cliniccloud/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover the options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::search::DEFAULT_BASE_URL;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CloudConfig {
    #[serde(default)]
    pub service: ServiceConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ServiceConfig {
    pub base_url: Option<String>,
}

/// Concrete values after resolution, no Options.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Returns the path to `~/.cliniccloud/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".cliniccloud").join("config.toml"))
}

/// Load config from `~/.cliniccloud/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `CloudConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<CloudConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(CloudConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(CloudConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: CloudConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# ClinicCloud client configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [service]
# base_url = "http://localhost:8000"   # Or set CLINICCLOUD_BASE_URL env var
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

/// Apply the override hierarchy on top of a loaded config file.
pub fn resolve(config: CloudConfig, cli_base_url: Option<String>) -> ResolvedConfig {
    let base_url = cli_base_url
        .or_else(|| std::env::var("CLINICCLOUD_BASE_URL").ok())
        .or(config.service.base_url)
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    ResolvedConfig { base_url }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_flag_wins_over_file() {
        let config = CloudConfig {
            service: ServiceConfig {
                base_url: Some("http://from-file:8000".to_string()),
            },
        };
        let resolved = resolve(config, Some("http://from-cli:9000".to_string()));
        assert_eq!(resolved.base_url, "http://from-cli:9000");
    }

    #[test]
    fn test_file_value_used_when_no_cli_flag() {
        let config = CloudConfig {
            service: ServiceConfig {
                base_url: Some("http://from-file:8000".to_string()),
            },
        };
        let resolved = resolve(config, None);
        assert_eq!(resolved.base_url, "http://from-file:8000");
    }

    #[test]
    fn test_sparse_toml_parses() {
        let config: CloudConfig = toml::from_str("").unwrap();
        assert!(config.service.base_url.is_none());

        let config: CloudConfig =
            toml::from_str("[service]\nbase_url = \"http://api:8000\"\n").unwrap();
        assert_eq!(config.service.base_url.as_deref(), Some("http://api:8000"));
    }
}
