/// Immutable lookup tables for report rendering
///
/// Label maps, unit maps and field-order tables are process-wide constant
/// data. Order tables are listed in natural key order and are the only
/// source of line order in DOM reports.
use lazy_static::lazy_static;
use std::collections::HashMap;

/// Internal key -> human-readable label
pub type LabelMap = HashMap<&'static str, &'static str>;

/// Internal key -> unit suffix for numeric readings
pub type UnitMap = HashMap<&'static str, &'static str>;

/// Identity fields in display order, paired with their captions
///
/// `cable_type` has no line of its own; its value is the caption of the
/// `cable_length` line.
pub const SFP_INFO_FIELDS: &[(&str, &str)] = &[
    ("application_advertisement", "Application Advertisement"),
    ("connector", "Connector"),
    ("encoding", "Encoding"),
    ("ext_identifier", "Extended Identifier"),
    ("ext_rateselect_compliance", "Extended RateSelect Compliance"),
    ("type", "Identifier"),
    ("cable_length", "Length"),
    ("nominal_bit_rate", "Nominal Bit Rate(100Mbs)"),
    ("specification_compliance", "Specification compliance"),
    ("vendor_date", "Vendor Date Code(YYYY-MM-DD Lot)"),
    ("manufacturer", "Vendor Name"),
    ("vendor_oui", "Vendor OUI"),
    ("model", "Vendor PN"),
    ("hardware_rev", "Vendor Rev"),
    ("serial", "Vendor SN"),
];

/// Identity keys that never get a line of their own
pub const SFP_INFO_CONSUMED_FIELDS: &[&str] = &["cable_type"];

pub const QSFP_DOM_CHANNEL_MONITOR_ORDER: &[&str] = &[
    "rx1power", "rx2power", "rx3power", "rx4power", "tx1bias", "tx1power", "tx2bias", "tx2power", "tx3bias",
    "tx3power", "tx4bias", "tx4power",
];

pub const QSFP_DD_DOM_CHANNEL_MONITOR_ORDER: &[&str] = &[
    "rx1power", "rx2power", "rx3power", "rx4power", "rx5power", "rx6power", "rx7power", "rx8power", "tx1bias",
    "tx1power", "tx2bias", "tx2power", "tx3bias", "tx3power", "tx4bias", "tx4power", "tx5bias", "tx5power",
    "tx6bias", "tx6power", "tx7bias", "tx7power", "tx8bias", "tx8power",
];

pub const SFP_DOM_CHANNEL_MONITOR_ORDER: &[&str] = &["rx1power", "tx1bias", "tx1power"];

pub const QSFP_DOM_CHANNEL_THRESHOLD_ORDER: &[&str] = &[
    "rxpowerhighalarm",
    "rxpowerhighwarning",
    "rxpowerlowalarm",
    "rxpowerlowwarning",
    "txbiashighalarm",
    "txbiashighwarning",
    "txbiaslowalarm",
    "txbiaslowwarning",
];

pub const SFP_DOM_CHANNEL_THRESHOLD_ORDER: &[&str] = &[
    "rxpowerhighalarm",
    "rxpowerhighwarning",
    "rxpowerlowalarm",
    "rxpowerlowwarning",
    "txbiashighalarm",
    "txbiashighwarning",
    "txbiaslowalarm",
    "txbiaslowwarning",
    "txpowerhighalarm",
    "txpowerhighwarning",
    "txpowerlowalarm",
    "txpowerlowwarning",
];

pub const DOM_MODULE_MONITOR_ORDER: &[&str] = &["temperature", "voltage"];

pub const DOM_MODULE_THRESHOLD_ORDER: &[&str] = &[
    "temphighalarm",
    "temphighwarning",
    "templowalarm",
    "templowwarning",
    "vcchighalarm",
    "vcchighwarning",
    "vcclowalarm",
    "vcclowwarning",
];

/// Separator alignment column for channel threshold sections
pub const CHANNEL_THRESHOLD_ALIGN: usize = 18;

/// Separator alignment column for module threshold sections
pub const MODULE_THRESHOLD_ALIGN: usize = 15;

lazy_static! {
    pub static ref QSFP_DOM_CHANNEL_MONITOR_MAP: LabelMap = [
        ("rx1power", "RX1Power"),
        ("rx2power", "RX2Power"),
        ("rx3power", "RX3Power"),
        ("rx4power", "RX4Power"),
        ("tx1bias", "TX1Bias"),
        ("tx2bias", "TX2Bias"),
        ("tx3bias", "TX3Bias"),
        ("tx4bias", "TX4Bias"),
        ("tx1power", "TX1Power"),
        ("tx2power", "TX2Power"),
        ("tx3power", "TX3Power"),
        ("tx4power", "TX4Power"),
    ]
    .into_iter()
    .collect();

    pub static ref QSFP_DD_DOM_CHANNEL_MONITOR_MAP: LabelMap = [
        ("rx1power", "RX1Power"),
        ("rx2power", "RX2Power"),
        ("rx3power", "RX3Power"),
        ("rx4power", "RX4Power"),
        ("rx5power", "RX5Power"),
        ("rx6power", "RX6Power"),
        ("rx7power", "RX7Power"),
        ("rx8power", "RX8Power"),
        ("tx1bias", "TX1Bias"),
        ("tx2bias", "TX2Bias"),
        ("tx3bias", "TX3Bias"),
        ("tx4bias", "TX4Bias"),
        ("tx5bias", "TX5Bias"),
        ("tx6bias", "TX6Bias"),
        ("tx7bias", "TX7Bias"),
        ("tx8bias", "TX8Bias"),
        ("tx1power", "TX1Power"),
        ("tx2power", "TX2Power"),
        ("tx3power", "TX3Power"),
        ("tx4power", "TX4Power"),
        ("tx5power", "TX5Power"),
        ("tx6power", "TX6Power"),
        ("tx7power", "TX7Power"),
        ("tx8power", "TX8Power"),
    ]
    .into_iter()
    .collect();

    pub static ref SFP_DOM_CHANNEL_MONITOR_MAP: LabelMap =
        [("rx1power", "RXPower"), ("tx1bias", "TXBias"), ("tx1power", "TXPower")].into_iter().collect();

    pub static ref QSFP_DOM_CHANNEL_THRESHOLD_MAP: LabelMap = [
        ("rxpowerhighalarm", "RxPowerHighAlarm"),
        ("rxpowerlowalarm", "RxPowerLowAlarm"),
        ("rxpowerhighwarning", "RxPowerHighWarning"),
        ("rxpowerlowwarning", "RxPowerLowWarning"),
        ("txbiashighalarm", "TxBiasHighAlarm"),
        ("txbiaslowalarm", "TxBiasLowAlarm"),
        ("txbiashighwarning", "TxBiasHighWarning"),
        ("txbiaslowwarning", "TxBiasLowWarning"),
    ]
    .into_iter()
    .collect();

    pub static ref SFP_DOM_CHANNEL_THRESHOLD_MAP: LabelMap = [
        ("txpowerhighalarm", "TxPowerHighAlarm"),
        ("txpowerlowalarm", "TxPowerLowAlarm"),
        ("txpowerhighwarning", "TxPowerHighWarning"),
        ("txpowerlowwarning", "TxPowerLowWarning"),
        ("rxpowerhighalarm", "RxPowerHighAlarm"),
        ("rxpowerlowalarm", "RxPowerLowAlarm"),
        ("rxpowerhighwarning", "RxPowerHighWarning"),
        ("rxpowerlowwarning", "RxPowerLowWarning"),
        ("txbiashighalarm", "TxBiasHighAlarm"),
        ("txbiaslowalarm", "TxBiasLowAlarm"),
        ("txbiashighwarning", "TxBiasHighWarning"),
        ("txbiaslowwarning", "TxBiasLowWarning"),
    ]
    .into_iter()
    .collect();

    pub static ref DOM_MODULE_MONITOR_MAP: LabelMap =
        [("temperature", "Temperature"), ("voltage", "Vcc")].into_iter().collect();

    pub static ref DOM_MODULE_THRESHOLD_MAP: LabelMap = [
        ("temphighalarm", "TempHighAlarm"),
        ("templowalarm", "TempLowAlarm"),
        ("temphighwarning", "TempHighWarning"),
        ("templowwarning", "TempLowWarning"),
        ("vcchighalarm", "VccHighAlarm"),
        ("vcclowalarm", "VccLowAlarm"),
        ("vcchighwarning", "VccHighWarning"),
        ("vcclowwarning", "VccLowWarning"),
    ]
    .into_iter()
    .collect();

    pub static ref DOM_VALUE_UNIT_MAP: UnitMap = [
        ("rx1power", "dBm"),
        ("rx2power", "dBm"),
        ("rx3power", "dBm"),
        ("rx4power", "dBm"),
        ("tx1bias", "mA"),
        ("tx2bias", "mA"),
        ("tx3bias", "mA"),
        ("tx4bias", "mA"),
        ("tx1power", "dBm"),
        ("tx2power", "dBm"),
        ("tx3power", "dBm"),
        ("tx4power", "dBm"),
        ("temperature", "C"),
        ("voltage", "Volts"),
    ]
    .into_iter()
    .collect();

    pub static ref QSFP_DD_DOM_VALUE_UNIT_MAP: UnitMap = {
        let mut units: UnitMap = DOM_VALUE_UNIT_MAP.clone();
        units.extend([
            ("rx5power", "dBm"),
            ("rx6power", "dBm"),
            ("rx7power", "dBm"),
            ("rx8power", "dBm"),
            ("tx5bias", "mA"),
            ("tx6bias", "mA"),
            ("tx7bias", "mA"),
            ("tx8bias", "mA"),
            ("tx5power", "dBm"),
            ("tx6power", "dBm"),
            ("tx7power", "dBm"),
            ("tx8power", "dBm"),
        ]);
        units
    };

    pub static ref DOM_MODULE_THRESHOLD_UNIT_MAP: UnitMap = [
        ("temphighalarm", "C"),
        ("templowalarm", "C"),
        ("temphighwarning", "C"),
        ("templowwarning", "C"),
        ("vcchighalarm", "Volts"),
        ("vcclowalarm", "Volts"),
        ("vcchighwarning", "Volts"),
        ("vcclowwarning", "Volts"),
    ]
    .into_iter()
    .collect();

    pub static ref DOM_CHANNEL_THRESHOLD_UNIT_MAP: UnitMap = [
        ("txpowerhighalarm", "dBm"),
        ("txpowerlowalarm", "dBm"),
        ("txpowerhighwarning", "dBm"),
        ("txpowerlowwarning", "dBm"),
        ("rxpowerhighalarm", "dBm"),
        ("rxpowerlowalarm", "dBm"),
        ("rxpowerhighwarning", "dBm"),
        ("rxpowerlowwarning", "dBm"),
        ("txbiashighalarm", "mA"),
        ("txbiaslowalarm", "mA"),
        ("txbiashighwarning", "mA"),
        ("txbiaslowwarning", "mA"),
    ]
    .into_iter()
    .collect();
}

/// One section of a DOM report: keys in display order plus their labels and units
#[derive(Debug, Clone, Copy)]
pub struct DomTable {
    pub order: &'static [&'static str],
    pub labels: &'static LabelMap,
    pub units: &'static UnitMap,
    pub alignment: usize,
}

/// Module family, as far as DOM layout is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleFamily {
    /// QSFP-DD and OSFP: eight lanes
    QsfpDd,
    /// QSFP, QSFP+, QSFP28: four lanes
    Qsfp,
    /// SFP and anything unrecognized: one lane
    Sfp,
}

impl ModuleFamily {
    /// Classify a platform module type string such as "QSFP28 or later"
    pub fn from_module_type(module_type: &str) -> Self {
        if module_type.starts_with("QSFP-DD") || module_type.starts_with("OSFP") {
            ModuleFamily::QsfpDd
        } else if module_type.starts_with("QSFP") {
            ModuleFamily::Qsfp
        } else {
            ModuleFamily::Sfp
        }
    }

    #[cfg(test)]
    fn channel_count(self) -> usize {
        match self {
            ModuleFamily::QsfpDd => 8,
            ModuleFamily::Qsfp => 4,
            ModuleFamily::Sfp => 1,
        }
    }
}

/// The four DOM report sections for one module family
#[derive(Debug, Clone, Copy)]
pub struct DomLayout {
    pub channel_monitor: DomTable,
    pub channel_threshold: DomTable,
    pub module_monitor: DomTable,
    pub module_threshold: DomTable,
}

impl DomLayout {
    pub fn for_family(family: ModuleFamily) -> Self {
        let channel_monitor = match family {
            ModuleFamily::QsfpDd => DomTable {
                order: QSFP_DD_DOM_CHANNEL_MONITOR_ORDER,
                labels: &QSFP_DD_DOM_CHANNEL_MONITOR_MAP,
                units: &QSFP_DD_DOM_VALUE_UNIT_MAP,
                alignment: 0,
            },
            ModuleFamily::Qsfp => DomTable {
                order: QSFP_DOM_CHANNEL_MONITOR_ORDER,
                labels: &QSFP_DOM_CHANNEL_MONITOR_MAP,
                units: &DOM_VALUE_UNIT_MAP,
                alignment: 0,
            },
            ModuleFamily::Sfp => DomTable {
                order: SFP_DOM_CHANNEL_MONITOR_ORDER,
                labels: &SFP_DOM_CHANNEL_MONITOR_MAP,
                units: &DOM_VALUE_UNIT_MAP,
                alignment: 0,
            },
        };

        let channel_threshold = match family {
            ModuleFamily::Qsfp => DomTable {
                order: QSFP_DOM_CHANNEL_THRESHOLD_ORDER,
                labels: &QSFP_DOM_CHANNEL_THRESHOLD_MAP,
                units: &DOM_CHANNEL_THRESHOLD_UNIT_MAP,
                alignment: CHANNEL_THRESHOLD_ALIGN,
            },
            ModuleFamily::QsfpDd | ModuleFamily::Sfp => DomTable {
                order: SFP_DOM_CHANNEL_THRESHOLD_ORDER,
                labels: &SFP_DOM_CHANNEL_THRESHOLD_MAP,
                units: &DOM_CHANNEL_THRESHOLD_UNIT_MAP,
                alignment: CHANNEL_THRESHOLD_ALIGN,
            },
        };

        DomLayout {
            channel_monitor,
            channel_threshold,
            module_monitor: DomTable {
                order: DOM_MODULE_MONITOR_ORDER,
                labels: &DOM_MODULE_MONITOR_MAP,
                units: &DOM_VALUE_UNIT_MAP,
                alignment: 0,
            },
            module_threshold: DomTable {
                order: DOM_MODULE_THRESHOLD_ORDER,
                labels: &DOM_MODULE_THRESHOLD_MAP,
                units: &DOM_MODULE_THRESHOLD_UNIT_MAP,
                alignment: MODULE_THRESHOLD_ALIGN,
            },
        }
    }

    pub fn for_module_type(module_type: &str) -> Self {
        Self::for_family(ModuleFamily::from_module_type(module_type))
    }
}
