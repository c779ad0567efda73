/// Report rendering - module identity and DOM telemetry to text
///
/// This module handles:
/// - Rendering ordered DOM values with labels and units
/// - Rendering identity fields, including nested sub-mappings
/// - Assembling the four-section DOM report for a module type
///
/// Every function here is pure: missing keys are skipped, unknown labels
/// fall back to the raw (or title-cased) key, and nothing fails.
use crate::ports::natural_cmp;
use crate::tables::{DomLayout, DomTable, LabelMap, SFP_INFO_CONSUMED_FIELDS, SFP_INFO_FIELDS, UnitMap};
use crate::types::{DomInfo, ModuleInfo, StructuredField};

/// One level of nesting
pub const INDENT: &str = "        ";

const SEPARATOR: &str = ": ";

/// Options for the identity report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InfoReportOptions {
    /// Also render fields outside the known caption table, under
    /// title-cased labels, after the known fields
    pub include_unrecognized: bool,
}

fn indent(depth: usize) -> String {
    INDENT.repeat(depth)
}

/// `": "` right-justified so the separator lands on the alignment column
fn aligned_separator(label: &str, alignment: usize) -> String {
    let width = (SEPARATOR.len() + alignment).saturating_sub(label.len());
    format!("{:>width$}", SEPARATOR, width = width)
}

/// Render the values named by `order`, one `Label: value` line each, nested
/// under a section header.
///
/// Keys absent from `values` and readings equal to "N/A" produce no line.
/// Numeric readings get four decimals and the unit from `units`; text
/// readings are emitted as-is.
pub fn format_dict_value_to_string(order: &[&str], values: &DomInfo, labels: &LabelMap, units: &UnitMap) -> String {
    format_dict_value_to_string_aligned(order, values, labels, units, 0)
}

/// Same as [`format_dict_value_to_string`], padding each separator so it
/// lines up at `alignment` columns after the indent.
pub fn format_dict_value_to_string_aligned(
    order: &[&str],
    values: &DomInfo,
    labels: &LabelMap,
    units: &UnitMap,
    alignment: usize,
) -> String {
    let mut output = String::new();

    for key in order {
        let Some(reading) = values.get(*key) else {
            continue;
        };
        if reading.is_not_available() {
            continue;
        }

        let label = labels.get(*key).copied().unwrap_or(*key);
        let value = reading.render(units.get(*key).copied());
        output.push_str(&format!("{}{}{}{}\n", indent(2), label, aligned_separator(label, alignment), value));
    }

    output
}

fn format_dom_table(table: &DomTable, values: &DomInfo) -> String {
    format_dict_value_to_string_aligned(table.order, values, table.labels, table.units, table.alignment)
}

/// Render the identity block with default options
pub fn convert_sfp_info_to_output_string(info: &ModuleInfo) -> String {
    convert_sfp_info_to_output_string_with(info, &InfoReportOptions::default())
}

/// Render the identity block.
///
/// Known fields come first, in caption order. The `cable_length` line is
/// captioned with the `cable_type` value.
pub fn convert_sfp_info_to_output_string_with(info: &ModuleInfo, options: &InfoReportOptions) -> String {
    let mut output = String::new();

    for (key, caption) in SFP_INFO_FIELDS {
        let Some(field) = info.get(*key) else {
            continue;
        };
        let label = if *key == "cable_length" {
            info.get("cable_type").and_then(StructuredField::as_scalar).unwrap_or(*caption)
        } else {
            *caption
        };
        render_info_field(&mut output, label, field);
    }

    if options.include_unrecognized {
        let mut extra: Vec<_> = info.iter().filter(|(key, _)| !is_known_info_key(key)).collect();
        extra.sort_by(|a, b| a.0.cmp(b.0));
        for (key, field) in extra {
            render_info_field(&mut output, &title_case(key), field);
        }
    }

    output
}

fn render_info_field(output: &mut String, label: &str, field: &StructuredField) {
    match field {
        StructuredField::Scalar(value) => {
            output.push_str(&format!("{}{}{}{}\n", indent(1), label, SEPARATOR, value));
        }
        StructuredField::Nested(entries) => {
            output.push_str(&format!("{}{}:\n", indent(1), label));
            let mut entries: Vec<_> = entries.iter().collect();
            entries.sort_by(|a, b| natural_cmp(a.0, b.0));
            for (inner_key, value) in entries {
                let inner_label = info_caption(inner_key).unwrap_or(inner_key.as_str());
                output.push_str(&format!("{}{}{}{}\n", indent(2), inner_label, SEPARATOR, value));
            }
        }
    }
}

fn info_caption(key: &str) -> Option<&'static str> {
    SFP_INFO_FIELDS.iter().find(|(k, _)| *k == key).map(|(_, caption)| *caption)
}

fn is_known_info_key(key: &str) -> bool {
    info_caption(key).is_some() || SFP_INFO_CONSUMED_FIELDS.contains(&key)
}

/// `type_abbrv_name` -> `Type Abbrv Name`
pub fn title_case(key: &str) -> String {
    key.split(['_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Render the DOM report for a module type: channel monitor, channel
/// threshold, module monitor and module threshold sections, in that order.
/// Each header is printed even when its section is empty.
pub fn convert_dom_to_output_string(module_type: &str, dom: &DomInfo) -> String {
    let layout = DomLayout::for_module_type(module_type);
    let sections = [
        ("ChannelMonitorValues", &layout.channel_monitor),
        ("ChannelThresholdValues", &layout.channel_threshold),
        ("ModuleMonitorValues", &layout.module_monitor),
        ("ModuleThresholdValues", &layout.module_threshold),
    ];

    let mut output = String::new();
    for (header, table) in sections {
        output.push_str(&format!("{}{}:\n", indent(1), header));
        output.push_str(&format_dom_table(table, dom));
    }
    output
}

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;
