//! Transceiver diagnostics for SFP/QSFP modules.
//!
//! The rendering core lives in [`report`] (identity and DOM text blocks) and
//! [`ports`] (physical port display names). [`platform`] supplies module data,
//! [`commands`] glues the two together for the `sfputil` binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod console_format;
pub mod error;
pub mod platform;
pub mod ports;
pub mod report;
pub mod tables;
pub mod types;
pub mod ui;

pub use error::{Result, SfpUtilError};
pub use ports::{LogicalPort, PortAddress, get_physical_port_name};
pub use tables::{
    DOM_MODULE_MONITOR_MAP, DOM_MODULE_THRESHOLD_MAP, DOM_VALUE_UNIT_MAP, QSFP_DD_DOM_CHANNEL_MONITOR_MAP,
    QSFP_DOM_CHANNEL_MONITOR_MAP, SFP_DOM_CHANNEL_MONITOR_MAP,
};
pub use report::{
    InfoReportOptions, convert_dom_to_output_string, convert_sfp_info_to_output_string,
    convert_sfp_info_to_output_string_with, format_dict_value_to_string, format_dict_value_to_string_aligned,
};
pub use types::{DomInfo, ModuleInfo, Reading, StructuredField};

/// Crate version reported by `sfputil version`
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
