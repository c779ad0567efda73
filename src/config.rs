/// Configuration resolution module
///
/// This module handles:
/// - Locating the platform description file (CLI flag, environment, default)
/// - Parsing it from TOML, or JSON for `.json` files
/// - Validating the port table before any command runs
use crate::error::{Result, SfpUtilError};
use crate::ports::LogicalPort;
use crate::types::{DomInfo, ModuleInfo};
use log::debug;
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable consulted when no `--platform-file` is given
pub const PLATFORM_FILE_ENV: &str = "SFPUTIL_PLATFORM_FILE";

/// Get the default platform description path
/// - Linux: ~/.config/sfputil/platform.toml
/// - macOS: ~/Library/Application Support/sfputil/platform.toml
/// - Windows: %APPDATA%/sfputil/platform.toml
pub fn default_platform_file() -> PathBuf {
    dirs::config_dir()
        .map(|p| p.join("sfputil").join("platform.toml"))
        .unwrap_or_else(|| PathBuf::from("platform.toml"))
}

/// Pick the platform file: explicit path, then environment, then default
pub fn resolve_platform_file(cli_path: Option<&Path>) -> PathBuf {
    resolve_platform_file_from(cli_path, env::var(PLATFORM_FILE_ENV).ok())
}

fn resolve_platform_file_from(cli_path: Option<&Path>, env_value: Option<String>) -> PathBuf {
    if let Some(path) = cli_path {
        debug!("Using platform file from --platform-file: {}", path.display());
        return path.to_path_buf();
    }
    if let Some(value) = env_value.filter(|v| !v.trim().is_empty()) {
        debug!("Using platform file from {}: {}", PLATFORM_FILE_ENV, value);
        return PathBuf::from(value);
    }
    default_platform_file()
}

/// Platform description: the logical port table plus per-module data
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlatformConfig {
    #[serde(default, rename = "port")]
    pub ports: Vec<PortConfig>,

    /// Keyed by physical port index
    #[serde(default, rename = "module")]
    pub modules: BTreeMap<String, ModuleConfig>,
}

/// One logical port and the physical ports behind it
#[derive(Debug, Clone, Deserialize)]
pub struct PortConfig {
    pub name: LogicalPort,
    pub physical: Vec<u32>,
}

/// What the platform reports for one physical port
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModuleConfig {
    #[serde(default)]
    pub present: bool,

    #[serde(default)]
    pub lpmode: bool,

    #[serde(default, rename = "type")]
    pub module_type: Option<String>,

    #[serde(default)]
    pub error_status: Option<String>,

    #[serde(default)]
    pub info: ModuleInfo,

    #[serde(default)]
    pub dom: DomInfo,
}

impl PlatformConfig {
    /// Parse a platform description from text; `json` selects the format
    pub fn parse(content: &str, path: &Path, json: bool) -> Result<Self> {
        let config: PlatformConfig = if json {
            serde_json::from_str(content).map_err(|source| SfpUtilError::Json { path: path.to_path_buf(), source })?
        } else {
            toml::from_str(content).map_err(|source| SfpUtilError::Toml { path: path.to_path_buf(), source })?
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the port table: unique logical names, at least one physical
    /// port each, numeric module keys
    pub fn validate(&self) -> Result<()> {
        if self.ports.is_empty() {
            return Err(SfpUtilError::PortConfig { message: "no ports defined".to_string() });
        }

        let mut seen = HashSet::new();
        for port in &self.ports {
            if !seen.insert(&port.name) {
                return Err(SfpUtilError::PortConfig { message: format!("duplicate logical port '{}'", port.name) });
            }
            if port.physical.is_empty() {
                return Err(SfpUtilError::PortConfig {
                    message: format!("logical port '{}' has no physical ports", port.name),
                });
            }
        }

        for key in self.modules.keys() {
            // Lookups use the canonical decimal form, so "01" would never match
            let canonical = key.parse::<u32>().is_ok_and(|index| index.to_string() == *key);
            if !canonical {
                return Err(SfpUtilError::PortConfig {
                    message: format!("module key '{}' is not a physical port index", key),
                });
            }
        }

        Ok(())
    }

    /// Module data for a physical port, if the file describes it
    pub fn module(&self, physical: u32) -> Option<&ModuleConfig> {
        self.modules.get(&physical.to_string())
    }
}

/// Load and validate a platform description file
pub fn load_platform_config(path: &Path) -> Result<PlatformConfig> {
    debug!("Loading platform description from {}", path.display());

    let content = fs::read_to_string(path).map_err(|source| SfpUtilError::Io { path: path.to_path_buf(), source })?;
    let json = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let config = PlatformConfig::parse(&content, path, json)?;

    debug!("Loaded {} logical ports and {} module entries", config.ports.len(), config.modules.len());
    Ok(config)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
