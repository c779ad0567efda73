// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use log::debug;
use sfputil::cli::{CliArgs, Command, ShowCommand};
use sfputil::platform::FilePlatform;
use sfputil::report::InfoReportOptions;
use sfputil::{Result, commands, config, ui};

fn main() {
    // Parse CLI arguments
    let args = CliArgs::parse_args();

    init_logging(args.verbose);

    match run(&args) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            ui::print_error(&e.to_string());
            std::process::exit(e.exit_code());
        }
    }
}

/// Set up env_logger; RUST_LOG wins over --verbose
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();
}

/// Execute the selected command, returning the text to print
fn run(args: &CliArgs) -> Result<String> {
    match &args.command {
        Command::Version => Ok(format!("{}\n", commands::version_string())),
        Command::Show(show) => run_show(args, show),
    }
}

fn run_show(args: &CliArgs, show: &ShowCommand) -> Result<String> {
    let platform_file = config::resolve_platform_file(args.platform_file.as_deref());
    let platform = FilePlatform::new(config::load_platform_config(&platform_file)?)?;
    debug!("Platform loaded from {}", platform_file.display());

    match show {
        ShowCommand::Eeprom { port, dom, all_fields } => {
            let options = InfoReportOptions { include_unrecognized: *all_fields };
            commands::show_eeprom(&platform, port.as_deref(), *dom, &options)
        }
        ShowCommand::Presence { port } => commands::show_presence(&platform, port.as_deref()),
        ShowCommand::Lpmode { port } => commands::show_lpmode(&platform, port.as_deref()),
        ShowCommand::ErrorStatus { port } => commands::show_error_status(&platform, port.as_deref()),
    }
}
