use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "sfputil")]
#[command(about = "Show SFP/QSFP transceiver identity and DOM information")]
#[command(version)]
pub struct CliArgs {
    /// Platform description file (TOML, or JSON with a .json extension)
    /// Default: $SFPUTIL_PLATFORM_FILE, then ~/.config/sfputil/platform.toml (Linux)
    #[arg(long, global = true, value_name = "PATH")]
    pub platform_file: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Display status of SFP transceivers
    #[command(subcommand)]
    Show(ShowCommand),

    /// Display version info
    Version,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ShowCommand {
    /// Display EEPROM data of SFP transceiver(s)
    Eeprom {
        /// Display data for port PORT_NAME only
        #[arg(long, short = 'p', value_name = "PORT_NAME")]
        port: Option<String>,

        /// Display DOM values
        #[arg(long, short = 'd')]
        dom: bool,

        /// Also show identity fields without a standard caption
        #[arg(long)]
        all_fields: bool,
    },

    /// Display presence of SFP transceiver(s)
    Presence {
        /// Display data for port PORT_NAME only
        #[arg(long, short = 'p', value_name = "PORT_NAME")]
        port: Option<String>,
    },

    /// Display low-power mode status of SFP transceiver(s)
    Lpmode {
        /// Display data for port PORT_NAME only
        #[arg(long, short = 'p', value_name = "PORT_NAME")]
        port: Option<String>,
    },

    /// Display error status of SFP transceiver(s)
    ErrorStatus {
        /// Display data for port PORT_NAME only
        #[arg(long, short = 'p', value_name = "PORT_NAME")]
        port: Option<String>,
    },
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_eeprom_flags() {
        let args = CliArgs::try_parse_from(["sfputil", "show", "eeprom", "-p", "Ethernet0", "--dom"]).unwrap();
        assert_eq!(
            args.command,
            Command::Show(ShowCommand::Eeprom { port: Some("Ethernet0".to_string()), dom: true, all_fields: false })
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args =
            CliArgs::try_parse_from(["sfputil", "show", "presence", "--platform-file", "/tmp/p.toml", "-v"]).unwrap();
        assert_eq!(args.platform_file, Some(PathBuf::from("/tmp/p.toml")));
        assert!(args.verbose);
        assert_eq!(args.command, Command::Show(ShowCommand::Presence { port: None }));
    }

    #[test]
    fn test_error_status_is_kebab_case() {
        let args = CliArgs::try_parse_from(["sfputil", "show", "error-status"]).unwrap();
        assert_eq!(args.command, Command::Show(ShowCommand::ErrorStatus { port: None }));
    }

    #[test]
    fn test_version_command() {
        let args = CliArgs::try_parse_from(["sfputil", "version"]).unwrap();
        assert_eq!(args.command, Command::Version);
        assert_eq!(args.platform_file, None);
    }

    #[test]
    fn test_reset_is_not_a_command() {
        assert!(CliArgs::try_parse_from(["sfputil", "reset", "Ethernet0"]).is_err());
    }
}
