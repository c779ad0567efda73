/// Tests for config module
#[cfg(test)]
mod tests {
    use crate::config::*;
    use crate::error::SfpUtilError;
    use crate::ports::LogicalPort;
    use crate::types::{Reading, StructuredField};
    use std::io::Write;
    use std::path::{Path, PathBuf};

    const SAMPLE_TOML: &str = r#"
[[port]]
name = "Ethernet0"
physical = [1]

[[port]]
name = "Ethernet4"
physical = [2, 3]

[module.1]
present = true
type = "QSFP28 or later"

[module.1.info]
manufacturer = "Mellanox"
specification_compliance = "{'10/40G Ethernet Compliance Code': '40GBASE-CR4'}"

[module.1.dom]
temperature = "41.7539C"
voltage = 3.2577
"#;

    #[test]
    fn test_parse_toml_platform() {
        let config = PlatformConfig::parse(SAMPLE_TOML, Path::new("platform.toml"), false).expect("Should parse");

        assert_eq!(config.ports.len(), 2);
        assert_eq!(config.ports[0].name, LogicalPort::Name("Ethernet0".to_string()));
        assert_eq!(config.ports[1].physical, vec![2, 3]);

        let module = config.module(1).expect("module 1 should exist");
        assert!(module.present);
        assert!(!module.lpmode);
        assert_eq!(module.module_type.as_deref(), Some("QSFP28 or later"));
        assert_eq!(module.info["manufacturer"], StructuredField::Scalar("Mellanox".to_string()));
        assert!(matches!(module.info["specification_compliance"], StructuredField::Nested(_)));
        assert_eq!(module.dom["temperature"], Reading::Text("41.7539C".to_string()));
        assert_eq!(module.dom["voltage"], Reading::Numeric(3.2577));

        assert!(config.module(2).is_none());
    }

    #[test]
    fn test_parse_json_platform() {
        let json = r#"{
            "port": [{"name": 0, "physical": [1]}],
            "module": {"1": {"present": true, "lpmode": true, "dom": {"tx1bias": 6.5}}}
        }"#;
        let config = PlatformConfig::parse(json, Path::new("platform.json"), true).expect("Should parse");

        assert_eq!(config.ports[0].name, LogicalPort::Index(0));
        let module = config.module(1).unwrap();
        assert!(module.lpmode);
        assert_eq!(module.dom["tx1bias"], Reading::Numeric(6.5));
    }

    #[test]
    fn test_duplicate_logical_port_is_rejected() {
        let toml = r#"
[[port]]
name = "Ethernet0"
physical = [1]

[[port]]
name = "Ethernet0"
physical = [2]
"#;
        let err = PlatformConfig::parse(toml, Path::new("p.toml"), false).unwrap_err();
        assert!(matches!(err, SfpUtilError::PortConfig { .. }));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_port_without_physical_ports_is_rejected() {
        let toml = "[[port]]\nname = \"Ethernet0\"\nphysical = []\n";
        let err = PlatformConfig::parse(toml, Path::new("p.toml"), false).unwrap_err();
        assert!(err.to_string().contains("has no physical ports"));
    }

    #[test]
    fn test_non_numeric_module_key_is_rejected() {
        let toml = "[[port]]\nname = \"Ethernet0\"\nphysical = [1]\n\n[module.first]\npresent = true\n";
        let err = PlatformConfig::parse(toml, Path::new("p.toml"), false).unwrap_err();
        assert!(err.to_string().contains("module key 'first'"));
    }

    #[test]
    fn test_zero_padded_module_key_is_rejected() {
        let toml = "[[port]]\nname = \"Ethernet0\"\nphysical = [1]\n\n[module.01]\npresent = true\n";
        let err = PlatformConfig::parse(toml, Path::new("p.toml"), false).unwrap_err();
        assert!(matches!(err, SfpUtilError::PortConfig { .. }));
        assert!(err.to_string().contains("module key '01'"));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_empty_port_table_is_rejected() {
        let err = PlatformConfig::parse("", Path::new("p.toml"), false).unwrap_err();
        assert!(matches!(err, SfpUtilError::PortConfig { .. }));
    }

    #[test]
    fn test_bad_toml_reports_path() {
        let err = PlatformConfig::parse("[[port]\n", Path::new("broken.toml"), false).unwrap_err();
        assert!(matches!(err, SfpUtilError::Toml { .. }));
        assert!(err.to_string().contains("broken.toml"));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_load_platform_config_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(SAMPLE_TOML.as_bytes()).unwrap();

        let config = load_platform_config(file.path()).expect("Should load");
        assert_eq!(config.ports.len(), 2);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = load_platform_config(Path::new("/nonexistent/sfputil/platform.toml")).unwrap_err();
        assert!(matches!(err, SfpUtilError::Io { .. }));
    }

    #[test]
    fn test_resolve_platform_file_precedence() {
        let cli = PathBuf::from("/tmp/cli.toml");
        assert_eq!(
            super::super::resolve_platform_file_from(Some(cli.as_path()), Some("/tmp/env.toml".to_string())),
            cli
        );
        assert_eq!(
            super::super::resolve_platform_file_from(None, Some("/tmp/env.toml".to_string())),
            PathBuf::from("/tmp/env.toml")
        );
        assert_eq!(super::super::resolve_platform_file_from(None, Some("  ".to_string())), default_platform_file());
        assert_eq!(super::super::resolve_platform_file_from(None, None), default_platform_file());
    }

    #[test]
    fn test_default_platform_file_name() {
        assert!(default_platform_file().ends_with("platform.toml"));
    }
}
