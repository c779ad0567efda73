/// End-to-end tests for the sfputil binary
///
/// These run the built binary against the fixture platform description in
/// `test-fixtures/` and check stdout, stderr and exit codes.
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

// Helper to get the fixture platform file
fn fixture_platform() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("test-fixtures/platform.toml")
}

// Helper to run sfputil with a platform file
fn run_sfputil(args: &[&str], platform: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sfputil"))
        .args(args)
        .arg("--platform-file")
        .arg(platform)
        .env_remove("SFPUTIL_PLATFORM_FILE")
        .env_remove("RUST_LOG")
        .output()
        .unwrap_or_else(|e| panic!("Failed to run sfputil {}: {}", args.join(" "), e))
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

// Helper to assert the command succeeded
fn assert_success(output: &Output, context: &str) {
    assert!(
        output.status.success(),
        "{} failed with status: {:?}\nstderr: {}",
        context,
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn test_fixture_exists() {
    assert!(fixture_platform().exists(), "fixture platform file should exist");
}

#[test]
fn test_show_eeprom_dom_for_qsfp28() {
    let output = run_sfputil(&["show", "eeprom", "-p", "Ethernet0", "--dom"], &fixture_platform());
    assert_success(&output, "show eeprom --dom");

    let expected = "\
Ethernet0: SFP EEPROM detected
        Application Advertisement: N/A
        Connector: No separable connector
        Encoding: 64B66B
        Extended Identifier: Power Class 1(1.5W max)
        Extended RateSelect Compliance: QSFP+ Rate Select Version 1
        Identifier: QSFP28 or later
        Length Cable Assembly(m): 3
        Nominal Bit Rate(100Mbs): 255
        Specification compliance:
                10/40G Ethernet Compliance Code: 40GBASE-CR4
        Vendor Date Code(YYYY-MM-DD Lot): 2016-07-18
        Vendor Name: Mellanox
        Vendor OUI: 00-02-c9
        Vendor PN: MCP1600-C003
        Vendor Rev: A2
        Vendor SN: MT1636VS10561
        ChannelMonitorValues:
                RX1Power: -1.6622dBm
                RX2Power: -1.7901dBm
                RX3Power: -1.6973dBm
                RX4Power: -2.0915dBm
                TX1Bias: 35.8400mA
                TX2Bias: 37.5780mA
                TX3Bias: 35.8400mA
                TX4Bias: 35.8400mA
        ChannelThresholdValues:
        ModuleMonitorValues:
                Temperature: 41.7539C
                Vcc: 3.2577Volts
        ModuleThresholdValues:

";
    assert_eq!(stdout(&output), expected);
}

#[test]
fn test_show_eeprom_dom_for_sfp_with_numeric_readings() {
    let output = run_sfputil(&["show", "eeprom", "-p", "Ethernet4", "-d"], &fixture_platform());
    assert_success(&output, "show eeprom -d");

    let expected = "\
Ethernet4:0 (ganged): SFP EEPROM detected
        Vendor Name: Finisar
        Vendor PN: FTLX8571D3BCL
        ChannelMonitorValues:
                RXPower: -2.5000dBm
                TXBias: 6.1000mA
                TXPower: -2.2500dBm
        ChannelThresholdValues:
        ModuleMonitorValues:
                Temperature: 33.2500C
                Vcc: 3.3000Volts
        ModuleThresholdValues:
                TempHighAlarm  : 78.0000C
                TempLowAlarm   : -13.0000C

Ethernet4:1 (ganged): SFP EEPROM not detected

";
    assert_eq!(stdout(&output), expected);
}

#[test]
fn test_show_eeprom_all_fields_adds_unrecognized_fields() {
    let output = run_sfputil(&["show", "eeprom", "-p", "Ethernet0", "--all-fields"], &fixture_platform());
    assert_success(&output, "show eeprom --all-fields");

    let text = stdout(&output);
    assert!(text.contains(
        "        Vendor SN: MT1636VS10561
        Dom Capability:
                Rx_power_support: no
                Temp_support: no
                Tx_power_support: no
                Voltage_support: no
        Type Abbrv Name: QSFP28
"
    ));
}

#[test]
fn test_show_presence() {
    let output = run_sfputil(&["show", "presence"], &fixture_platform());
    assert_success(&output, "show presence");
    let expected = "\
Port                  Presence
--------------------  -----------
Ethernet0             Present
Ethernet4:0 (ganged)  Present
Ethernet4:1 (ganged)  Not present
";
    assert_eq!(stdout(&output), expected);
}

#[test]
fn test_show_lpmode_and_error_status() {
    let output = run_sfputil(&["show", "lpmode", "-p", "Ethernet4"], &fixture_platform());
    assert_success(&output, "show lpmode");
    assert!(stdout(&output).contains("Ethernet4:0 (ganged)  On\n"));

    let output = run_sfputil(&["show", "error-status"], &fixture_platform());
    assert_success(&output, "show error-status");
    let text = stdout(&output);
    assert!(text.contains("Ethernet0             OK\n"));
    assert!(text.contains("Ethernet4:0 (ganged)  Power budget exceeded\n"));
    assert!(text.contains("Ethernet4:1 (ganged)  N/A\n"));
}

#[test]
fn test_unknown_port_exits_with_invalid_port_code() {
    let output = run_sfputil(&["show", "presence", "-p", "Ethernet404"], &fixture_platform());
    assert_eq!(output.status.code(), Some(6));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid port: Ethernet404"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_missing_platform_file_exits_with_load_code() {
    let output = run_sfputil(&["show", "presence"], Path::new("/nonexistent/platform.toml"));
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_inconsistent_port_config_exits_with_port_config_code() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(b"[[port]]\nname = \"Ethernet0\"\nphysical = []\n").unwrap();

    let output = run_sfputil(&["show", "presence"], file.path());
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn test_shared_physical_port_exits_with_load_code() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(b"[[port]]\nname = \"Ethernet0\"\nphysical = [1]\n\n[[port]]\nname = \"Ethernet4\"\nphysical = [1]\n")
        .unwrap();

    let output = run_sfputil(&["show", "presence"], file.path());
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("physical port 1 is claimed by both"));
}

#[test]
fn test_json_platform_file() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(br#"{"port": [{"name": 0, "physical": [1]}], "module": {"1": {"present": true}}}"#).unwrap();

    let output = run_sfputil(&["show", "presence"], file.path());
    assert_success(&output, "show presence from JSON");
    assert_eq!(stdout(&output), "Port  Presence\n----  --------\n0     Present\n");
}

#[test]
fn test_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_sfputil")).arg("version").output().unwrap();
    assert_success(&output, "version");
    assert_eq!(stdout(&output).trim_end(), format!("sfputil version {}", env!("CARGO_PKG_VERSION")));
}
