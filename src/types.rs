/// Core data structures for transceiver module data
///
/// This module defines the values the platform hands to the report
/// formatter: DOM readings, identity fields and the maps that carry them.
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Sentinel used by platforms for unsupported or unreadable fields
pub const NOT_AVAILABLE: &str = "N/A";

/// DOM telemetry keyed by telemetry key (`temperature`, `rx1power`, ...)
pub type DomInfo = HashMap<String, Reading>;

/// Module identity keyed by field key (`manufacturer`, `serial`, ...)
pub type ModuleInfo = HashMap<String, StructuredField>;

/// A single DOM telemetry reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reading {
    /// Pre-formatted value that already carries its unit, e.g. "41.7539C"
    Text(String),
    /// Bare value; the unit comes from the unit map
    Numeric(f64),
}

impl Reading {
    /// True for the "N/A" sentinel
    pub fn is_not_available(&self) -> bool {
        matches!(self, Reading::Text(s) if s == NOT_AVAILABLE)
    }

    /// Render the reading, appending `unit` only to numeric values
    pub fn render(&self, unit: Option<&str>) -> String {
        match self {
            Reading::Text(s) => s.clone(),
            Reading::Numeric(v) => format!("{:.4}{}", v, unit.unwrap_or("")),
        }
    }
}

impl From<&str> for Reading {
    fn from(s: &str) -> Self {
        Reading::Text(s.to_string())
    }
}

impl From<String> for Reading {
    fn from(s: String) -> Self {
        Reading::Text(s)
    }
}

impl From<f64> for Reading {
    fn from(v: f64) -> Self {
        Reading::Numeric(v)
    }
}

/// An identity field: either a plain value or a key/value sub-mapping
/// (compliance codes, DOM capability flags)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawField")]
pub enum StructuredField {
    Scalar(String),
    Nested(BTreeMap<String, String>),
}

impl StructuredField {
    /// Parse a platform-supplied value.
    ///
    /// Brace-delimited `key: value` lists such as
    /// `{'10/40G Ethernet Compliance Code': '40GBASE-CR4'}` become
    /// `Nested`; everything else, malformed brace strings included, stays
    /// a `Scalar` holding the raw text.
    pub fn parse(raw: &str) -> Self {
        match parse_nested(raw) {
            Some(map) => StructuredField::Nested(map),
            None => {
                if raw.trim_start().starts_with('{') {
                    debug!("Field value looks like a mapping but does not parse: {}", raw);
                }
                StructuredField::Scalar(raw.to_string())
            }
        }
    }

    /// Plain text of a scalar field, `None` for nested fields
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            StructuredField::Scalar(s) => Some(s),
            StructuredField::Nested(_) => None,
        }
    }
}

impl From<&str> for StructuredField {
    fn from(raw: &str) -> Self {
        StructuredField::parse(raw)
    }
}

impl From<String> for StructuredField {
    fn from(raw: String) -> Self {
        StructuredField::parse(&raw)
    }
}

/// Shape of an identity value as it appears in a platform description file
#[derive(Deserialize)]
#[serde(untagged)]
enum RawField {
    Table(BTreeMap<String, RawScalar>),
    Scalar(RawScalar),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawScalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Flag(bool),
}

impl RawScalar {
    fn into_display(self) -> String {
        match self {
            RawScalar::Text(s) => s,
            RawScalar::Integer(i) => i.to_string(),
            RawScalar::Float(f) => f.to_string(),
            RawScalar::Flag(b) => b.to_string(),
        }
    }
}

impl From<RawField> for StructuredField {
    fn from(raw: RawField) -> Self {
        match raw {
            RawField::Table(table) => {
                StructuredField::Nested(table.into_iter().map(|(k, v)| (k, v.into_display())).collect())
            }
            RawField::Scalar(RawScalar::Text(s)) => StructuredField::parse(&s),
            RawField::Scalar(other) => StructuredField::Scalar(other.into_display()),
        }
    }
}

fn parse_nested(raw: &str) -> Option<BTreeMap<String, String>> {
    let body = raw.trim().strip_prefix('{')?.strip_suffix('}')?;
    let mut map = BTreeMap::new();

    for pair in split_top_level(body, ',')? {
        if pair.trim().is_empty() {
            continue;
        }
        let colon = *split_positions(pair, ':')?.first()?;
        let key = unquote(&pair[..colon])?;
        let value = unquote(&pair[colon + 1..])?;
        if key.is_empty() {
            return None;
        }
        map.insert(key, value);
    }

    Some(map)
}

/// Split on `sep` outside quotes and brackets
fn split_top_level(s: &str, sep: char) -> Option<Vec<&str>> {
    let mut pieces = Vec::new();
    let mut start = 0;
    for pos in split_positions(s, sep)? {
        pieces.push(&s[start..pos]);
        start = pos + sep.len_utf8();
    }
    pieces.push(&s[start..]);
    Some(pieces)
}

/// Byte offsets of `sep` outside quotes and brackets; `None` when quotes
/// or brackets are unbalanced
fn split_positions(s: &str, sep: char) -> Option<Vec<usize>> {
    let mut positions = Vec::new();
    let mut quote: Option<char> = None;
    let mut depth = 0usize;

    for (i, c) in s.char_indices() {
        match quote {
            Some(q) => {
                if c == q {
                    quote = None;
                }
            }
            None => match c {
                '\'' | '"' => quote = Some(c),
                '{' | '[' | '(' => depth += 1,
                '}' | ']' | ')' => depth = depth.checked_sub(1)?,
                c if c == sep && depth == 0 => positions.push(i),
                _ => {}
            },
        }
    }

    if quote.is_some() || depth != 0 {
        return None;
    }
    Some(positions)
}

fn unquote(s: &str) -> Option<String> {
    let s = s.trim();
    for q in ['\'', '"'] {
        if s.starts_with(q) {
            return s.strip_prefix(q)?.strip_suffix(q).map(|inner| inner.to_string());
        }
    }
    Some(s.to_string())
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
