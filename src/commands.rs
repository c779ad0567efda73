/// Show commands - glue between the platform and the renderers
///
/// Each command resolves the selected ports, asks the platform for data
/// and returns the text to print. Nothing here writes to stdout.
use crate::console_format::format_table;
use crate::error::{Result, SfpUtilError};
use crate::platform::SfpPlatform;
use crate::ports::{PortAddress, physical_addresses};
use crate::report::{InfoReportOptions, convert_dom_to_output_string, convert_sfp_info_to_output_string_with};
use crate::types::NOT_AVAILABLE;
use log::{debug, warn};

/// Expand the selected logical port (or all of them) into physical addresses
pub fn select_ports(platform: &dyn SfpPlatform, port: Option<&str>) -> Result<Vec<PortAddress>> {
    let logical_ports = platform.logical_ports();

    let selected = match port {
        Some(name) => {
            let logical = logical_ports
                .into_iter()
                .find(|p| p.to_string() == name)
                .ok_or_else(|| SfpUtilError::InvalidPort { port: name.to_string() })?;
            vec![logical]
        }
        None => logical_ports,
    };

    let mut addresses = Vec::new();
    for logical in &selected {
        let physical = platform.physical_ports(logical)?;
        debug!("Logical port {} -> physical {:?}", logical, physical);
        addresses.extend(physical_addresses(logical, &physical));
    }
    Ok(addresses)
}

/// `show eeprom`: identity (and optionally DOM) block per physical port
pub fn show_eeprom(
    platform: &dyn SfpPlatform,
    port: Option<&str>,
    dump_dom: bool,
    options: &InfoReportOptions,
) -> Result<String> {
    let mut output = String::new();

    for address in select_ports(platform, port)? {
        let port_name = address.display_name();
        if !platform.is_present(address.physical)? {
            output.push_str(&format!("{}: SFP EEPROM not detected\n", port_name));
        } else {
            output.push_str(&format!("{}: SFP EEPROM detected\n", port_name));
            let info = platform.module_info(address.physical)?;
            output.push_str(&convert_sfp_info_to_output_string_with(&info, options));

            if dump_dom {
                let module_type = platform.module_type(address.physical)?;
                let dom = platform.dom_info(address.physical)?;
                output.push_str(&convert_dom_to_output_string(&module_type, &dom));
            }
        }
        output.push('\n');
    }

    Ok(output)
}

/// `show presence`: Present / Not present per physical port
pub fn show_presence(platform: &dyn SfpPlatform, port: Option<&str>) -> Result<String> {
    let mut rows = Vec::new();
    for address in select_ports(platform, port)? {
        let presence = if platform.is_present(address.physical)? { "Present" } else { "Not present" };
        rows.push(vec![address.display_name(), presence.to_string()]);
    }
    Ok(format_table(&["Port", "Presence"], &rows))
}

/// `show lpmode`: On / Off per physical port
pub fn show_lpmode(platform: &dyn SfpPlatform, port: Option<&str>) -> Result<String> {
    let mut rows = Vec::new();
    for address in select_ports(platform, port)? {
        let mode = present_value(platform, &address, |p, physical| {
            p.lpmode(physical).map(|on| (if on { "On" } else { "Off" }).to_string())
        })?;
        rows.push(vec![address.display_name(), mode]);
    }
    Ok(format_table(&["Port", "Low-power Mode"], &rows))
}

/// `show error-status`: OK, the module's error text, or N/A when empty
pub fn show_error_status(platform: &dyn SfpPlatform, port: Option<&str>) -> Result<String> {
    let mut rows = Vec::new();
    for address in select_ports(platform, port)? {
        let status = present_value(platform, &address, |p, physical| {
            p.error_status(physical).map(|err| err.unwrap_or_else(|| "OK".to_string()))
        })?;
        rows.push(vec![address.display_name(), status]);
    }
    Ok(format_table(&["Port", "Error Status"], &rows))
}

/// Query a present module; absent modules and modules that stop answering show "N/A"
fn present_value<F>(platform: &dyn SfpPlatform, address: &PortAddress, query: F) -> Result<String>
where
    F: Fn(&dyn SfpPlatform, u32) -> Result<String>,
{
    if !platform.is_present(address.physical)? {
        return Ok(NOT_AVAILABLE.to_string());
    }
    match query(platform, address.physical) {
        Ok(value) => Ok(value),
        Err(SfpUtilError::NotPresent { physical }) => {
            warn!("Module in physical port {} disappeared while reading", physical);
            Ok(NOT_AVAILABLE.to_string())
        }
        Err(e) => Err(e),
    }
}

/// `version`
pub fn version_string() -> String {
    format!("sfputil version {}", crate::VERSION)
}

#[cfg(test)]
#[path = "commands_test.rs"]
mod commands_test;
