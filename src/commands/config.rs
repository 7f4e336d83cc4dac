// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::Path;

use crate::config::Config;
use anyhow::Result;

pub fn handle(cfg: &Config, path: &Path, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", _)) => print!("{}", cfg.to_toml_string()?),
        Some(("path", _)) => println!("{}", path.display()),
        Some(("init", _)) => {
            Config::default().write_new(path)?;
            println!("Config written to {}", path.display());
        }
        _ => {}
    }
    Ok(())
}
