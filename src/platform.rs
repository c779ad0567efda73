/// Platform access - where module presence, identity and DOM data come from
///
/// Commands talk to an `SfpPlatform`; `FilePlatform` answers from a
/// platform description file instead of a hardware driver.
use crate::config::{ModuleConfig, PlatformConfig};
use crate::error::{Result, SfpUtilError};
use crate::ports::{LogicalPort, compare_logical_ports};
use crate::types::{DomInfo, ModuleInfo, NOT_AVAILABLE, StructuredField};
use log::{debug, warn};
use std::collections::{BTreeMap, BTreeSet};

/// Source of transceiver data for every physical port on a switch
pub trait SfpPlatform {
    /// Logical ports in natural order
    fn logical_ports(&self) -> Vec<LogicalPort>;

    /// Physical ports behind a logical port, in lane order
    fn physical_ports(&self, logical: &LogicalPort) -> Result<Vec<u32>>;

    fn is_present(&self, physical: u32) -> Result<bool>;

    /// Module type string used to pick the DOM layout, e.g. "QSFP28 or later"
    fn module_type(&self, physical: u32) -> Result<String>;

    fn module_info(&self, physical: u32) -> Result<ModuleInfo>;

    fn dom_info(&self, physical: u32) -> Result<DomInfo>;

    fn lpmode(&self, physical: u32) -> Result<bool>;

    /// Error text reported by the module, `None` when healthy
    fn error_status(&self, physical: u32) -> Result<Option<String>>;
}

/// Platform backed by a parsed platform description
#[derive(Debug, Clone)]
pub struct FilePlatform {
    config: PlatformConfig,
    physical: BTreeSet<u32>,
}

impl FilePlatform {
    /// Build the platform; fails when two logical ports claim the same physical port
    pub fn new(config: PlatformConfig) -> Result<Self> {
        let mut owners: BTreeMap<u32, &LogicalPort> = BTreeMap::new();
        for port in &config.ports {
            for &index in &port.physical {
                if let Some(owner) = owners.insert(index, &port.name) {
                    if *owner != port.name {
                        return Err(SfpUtilError::PlatformLoad {
                            message: format!("physical port {} is claimed by both '{}' and '{}'", index, owner, port.name),
                        });
                    }
                }
            }
        }
        let physical: BTreeSet<u32> = owners.into_keys().collect();

        for key in config.modules.keys() {
            if key.parse::<u32>().is_ok_and(|index| !physical.contains(&index)) {
                warn!("Module entry {} is not referenced by any port and will be ignored", key);
            }
        }

        Ok(FilePlatform { config, physical })
    }

    fn checked_module(&self, physical: u32) -> Result<Option<&ModuleConfig>> {
        if !self.physical.contains(&physical) {
            return Err(SfpUtilError::InvalidPort { port: physical.to_string() });
        }
        Ok(self.config.module(physical))
    }

    fn present_module(&self, physical: u32) -> Result<&ModuleConfig> {
        match self.checked_module(physical)? {
            Some(module) if module.present => Ok(module),
            _ => Err(SfpUtilError::NotPresent { physical }),
        }
    }
}

impl SfpPlatform for FilePlatform {
    fn logical_ports(&self) -> Vec<LogicalPort> {
        let mut ports: Vec<LogicalPort> = self.config.ports.iter().map(|p| p.name.clone()).collect();
        ports.sort_by(compare_logical_ports);
        ports
    }

    fn physical_ports(&self, logical: &LogicalPort) -> Result<Vec<u32>> {
        self.config
            .ports
            .iter()
            .find(|p| p.name == *logical)
            .map(|p| p.physical.clone())
            .ok_or_else(|| SfpUtilError::InvalidPort { port: logical.to_string() })
    }

    fn is_present(&self, physical: u32) -> Result<bool> {
        Ok(self.checked_module(physical)?.is_some_and(|m| m.present))
    }

    fn module_type(&self, physical: u32) -> Result<String> {
        let module = self.present_module(physical)?;
        if let Some(module_type) = &module.module_type {
            return Ok(module_type.clone());
        }
        match module.info.get("type").and_then(StructuredField::as_scalar) {
            Some(module_type) => Ok(module_type.to_string()),
            None => {
                debug!("No module type for physical port {}", physical);
                Ok(NOT_AVAILABLE.to_string())
            }
        }
    }

    fn module_info(&self, physical: u32) -> Result<ModuleInfo> {
        Ok(self.present_module(physical)?.info.clone())
    }

    fn dom_info(&self, physical: u32) -> Result<DomInfo> {
        Ok(self.present_module(physical)?.dom.clone())
    }

    fn lpmode(&self, physical: u32) -> Result<bool> {
        Ok(self.present_module(physical)?.lpmode)
    }

    fn error_status(&self, physical: u32) -> Result<Option<String>> {
        Ok(self.present_module(physical)?.error_status.clone())
    }
}
