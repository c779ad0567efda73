/// Port naming - logical ports, lanes and their display names
///
/// A logical port maps to one or more physical ports. When it maps to more
/// than one, the logical port is "ganged" and every physical port is shown
/// as `<name>:<lane> (ganged)`.
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Logical port identifier: a bare index or an interface name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LogicalPort {
    Index(i64),
    Name(String),
}

impl fmt::Display for LogicalPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicalPort::Index(i) => write!(f, "{}", i),
            LogicalPort::Name(name) => write!(f, "{}", name),
        }
    }
}

impl From<i32> for LogicalPort {
    fn from(i: i32) -> Self {
        LogicalPort::Index(i64::from(i))
    }
}

impl From<u32> for LogicalPort {
    fn from(i: u32) -> Self {
        LogicalPort::Index(i64::from(i))
    }
}

impl From<i64> for LogicalPort {
    fn from(i: i64) -> Self {
        LogicalPort::Index(i)
    }
}

impl From<&str> for LogicalPort {
    fn from(name: &str) -> Self {
        LogicalPort::Name(name.to_string())
    }
}

impl From<String> for LogicalPort {
    fn from(name: String) -> Self {
        LogicalPort::Name(name)
    }
}

impl From<&String> for LogicalPort {
    fn from(name: &String) -> Self {
        LogicalPort::Name(name.clone())
    }
}

/// Display name for one physical port (lane) of a logical port
pub fn get_physical_port_name(logical: impl Into<LogicalPort>, lane_index: usize, is_ganged: bool) -> String {
    let logical = logical.into();
    if is_ganged {
        format!("{}:{} (ganged)", logical, lane_index)
    } else {
        logical.to_string()
    }
}

/// A physical port addressed through its logical port
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortAddress {
    pub logical: LogicalPort,
    /// Zero-based lane within the logical port
    pub lane: usize,
    pub ganged: bool,
    /// Platform index of the physical port
    pub physical: u32,
}

impl PortAddress {
    pub fn display_name(&self) -> String {
        get_physical_port_name(self.logical.clone(), self.lane, self.ganged)
    }
}

/// Expand a logical port into one address per physical port
pub fn physical_addresses(logical: &LogicalPort, physical_ports: &[u32]) -> Vec<PortAddress> {
    let ganged = physical_ports.len() > 1;
    physical_ports
        .iter()
        .enumerate()
        .map(|(lane, physical)| PortAddress { logical: logical.clone(), lane, ganged, physical: *physical })
        .collect()
}

/// Compare strings so embedded numbers sort by value ("Ethernet4" < "Ethernet12")
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();

    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit() => {
                let l_num = take_number(&mut left);
                let r_num = take_number(&mut right);
                // Compare by length first so long runs never overflow
                let l_trim = l_num.trim_start_matches('0');
                let r_trim = r_num.trim_start_matches('0');
                let ord = l_trim.len().cmp(&r_trim.len()).then_with(|| l_trim.cmp(r_trim));
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            (Some(l), Some(r)) => {
                if l != r {
                    return l.cmp(&r);
                }
                left.next();
                right.next();
            }
        }
    }
}

fn take_number(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut digits = String::new();
    while let Some(c) = chars.peek().copied() {
        if !c.is_ascii_digit() {
            break;
        }
        digits.push(c);
        chars.next();
    }
    digits
}

/// Natural ordering over logical ports; indices sort before names
pub fn compare_logical_ports(a: &LogicalPort, b: &LogicalPort) -> Ordering {
    match (a, b) {
        (LogicalPort::Index(x), LogicalPort::Index(y)) => x.cmp(y),
        (LogicalPort::Index(_), LogicalPort::Name(_)) => Ordering::Less,
        (LogicalPort::Name(_), LogicalPort::Index(_)) => Ordering::Greater,
        (LogicalPort::Name(x), LogicalPort::Name(y)) => natural_cmp(x, y),
    }
}
