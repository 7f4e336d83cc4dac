// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;

use anyhow::Result;

use salamkit::config::{resolve_config_path, Config};
use salamkit::error::exit_code_for;
use salamkit::logging::{LogFormat, LoggingConfig};
use salamkit::{cli, commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(exit_code_for(&e));
    }
}

fn run() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let log_format = matches
        .get_one::<String>("log-format")
        .and_then(|s| s.parse::<LogFormat>().ok());
    LoggingConfig::from_env(log_format, matches.get_flag("verbose")).init();

    let explicit = matches.get_one::<String>("config").map(PathBuf::from);
    let config_path = resolve_config_path(explicit.as_deref())?;
    let cfg = Config::load_or_default(&config_path)?;

    match matches.subcommand() {
        Some(("zakat", sub)) => commands::zakat::handle(&cfg, sub)?,
        Some(("qibla", sub)) => commands::qibla::handle(&cfg, sub)?,
        Some(("tasbih", sub)) => commands::tasbih::handle(sub)?,
        Some(("config", sub)) => commands::config::handle(&cfg, &config_path, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
