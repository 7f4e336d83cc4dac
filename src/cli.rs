// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, ArgGroup, Command, crate_version, value_parser};

fn json_flag() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print JSON instead of a table")
}

fn amount(id: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .long(id)
        .value_name("AMOUNT")
        .allow_hyphen_values(true)
        .help(help)
}

pub fn build_cli() -> Command {
    Command::new("salamkit")
        .version(crate_version!())
        .about("Zakat calculator, Qibla bearing, and tasbih counter")
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_name("PATH")
                .help("Config file (default: $SALAMKIT_CONFIG or the platform config dir)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Debug logging"),
        )
        .arg(
            Arg::new("log-format")
                .long("log-format")
                .global(true)
                .value_parser(["text", "json", "pretty"])
                .help("Log output format"),
        )
        .subcommand(
            Command::new("zakat")
                .about("Compute Zakat due on current holdings")
                .arg(amount("cash", "Cash and bank balances"))
                .arg(amount("gold", "Market value of gold held"))
                .arg(amount("silver", "Market value of silver held"))
                .arg(amount("investments", "Value of investment holdings"))
                .arg(amount("receivables", "Collectible money owed to you"))
                .arg(amount("liabilities", "Short-term debts you owe"))
                .arg(
                    Arg::new("gold-nisab")
                        .long("gold-nisab")
                        .value_name("AMOUNT")
                        .allow_hyphen_values(true)
                        .help("Override the gold Nisab threshold"),
                )
                .arg(
                    Arg::new("silver-nisab")
                        .long("silver-nisab")
                        .value_name("AMOUNT")
                        .allow_hyphen_values(true)
                        .help("Override the silver Nisab threshold"),
                )
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("qibla")
                .about("Bearing towards the Kaaba")
                .arg(
                    Arg::new("lat")
                        .long("lat")
                        .allow_hyphen_values(true)
                        .requires("lng")
                        .help("Observer latitude in degrees"),
                )
                .arg(
                    Arg::new("lng")
                        .long("lng")
                        .allow_hyphen_values(true)
                        .requires("lat")
                        .help("Observer longitude in degrees"),
                )
                .arg(
                    Arg::new("demo")
                        .long("demo")
                        .action(ArgAction::SetTrue)
                        .help("Use the demo location (London)"),
                )
                .arg(
                    Arg::new("locate")
                        .long("locate")
                        .action(ArgAction::SetTrue)
                        .help("Look up the current location via the configured provider"),
                )
                .group(
                    ArgGroup::new("source")
                        .args(["lat", "demo", "locate"])
                        .multiple(false),
                )
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("tasbih")
                .about("Dhikr counter")
                .subcommand_required(true)
                .subcommand(
                    Command::new("count")
                        .about("Show the counter after a number of taps")
                        .arg(
                            Arg::new("taps")
                                .long("taps")
                                .value_parser(value_parser!(u64))
                                .default_value("0"),
                        )
                        .arg(json_flag()),
                )
                .subcommand(Command::new("phrases").about("List the phrases in order")),
        )
        .subcommand(
            Command::new("config")
                .about("Inspect or create the config file")
                .subcommand_required(true)
                .subcommand(Command::new("show").about("Print the effective configuration"))
                .subcommand(Command::new("path").about("Print the config file path"))
                .subcommand(Command::new("init").about("Write a default config file")),
        )
}
