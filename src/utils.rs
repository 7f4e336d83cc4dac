// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::time::Duration;

use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rust_decimal::Decimal;

use crate::error::SalamError;

const UA: &str = concat!(
    "salamkit/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/alphavelocity/salamkit)"
);

pub fn http_client(timeout: Duration) -> reqwest::Result<reqwest::blocking::Client> {
    reqwest::blocking::Client::builder()
        .timeout(timeout)
        .user_agent(UA)
        .build()
}

/// Strict parse, for values where a typo should be an error (Nisab overrides).
pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.trim()
        .parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

pub fn parse_degrees(s: &str, what: &str, limit: f64) -> Result<f64> {
    let v: f64 = s
        .trim()
        .parse()
        .map_err(|_| SalamError::InvalidInput(format!("Invalid {} '{}'", what, s)))?;
    if !(-limit..=limit).contains(&v) {
        return Err(SalamError::InvalidInput(format!(
            "{} {} is outside [-{}, {}]",
            what, v, limit, limit
        ))
        .into());
    }
    Ok(v)
}

pub fn fmt_money(d: &Decimal, ccy: &str) -> String {
    format!("{} {:.2}", ccy, d.round_dp(2))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

/// Print `v` as pretty JSON when `json_flag` is set. Returns whether it printed.
pub fn maybe_print_json<T: serde::Serialize>(json_flag: bool, v: &T) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    Ok(false)
}
