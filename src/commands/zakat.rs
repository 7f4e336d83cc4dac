// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Config;
use crate::error::SalamError;
use crate::models::{AssetForm, NisabThreshold, ZakatResult};
use crate::utils::{fmt_money, maybe_print_json, parse_decimal, pretty_table};
use crate::zakat::{compute_zakat, to_non_negative_decimal};
use anyhow::{Context, Result};
use rust_decimal::Decimal;
use tracing::warn;

pub fn handle(cfg: &Config, m: &clap::ArgMatches) -> Result<()> {
    let res = run(cfg, m)?;
    if maybe_print_json(m.get_flag("json"), &res)? {
        return Ok(());
    }

    let ccy = cfg.currency.as_str();
    let rows = vec![
        vec!["Total assets".into(), fmt_money(&res.total_assets, ccy)],
        vec!["Nisab".into(), fmt_money(&res.nisab_used, ccy)],
        vec![
            "Eligible".into(),
            (if res.eligible { "yes" } else { "no" }).to_string(),
        ],
        vec!["Zakat due".into(), fmt_money(&res.zakat_due, ccy)],
    ];
    println!("{}", pretty_table(&["Item", "Value"], rows));
    if !res.eligible {
        println!("Net assets are below the Nisab; no Zakat is due.");
    }
    Ok(())
}

pub fn run(cfg: &Config, m: &clap::ArgMatches) -> Result<ZakatResult> {
    let form = form_from_matches(m);
    for (name, raw) in [
        ("cash", &form.cash),
        ("gold", &form.gold_value),
        ("silver", &form.silver_value),
        ("investments", &form.investments),
        ("receivables", &form.receivables),
        ("liabilities", &form.liabilities),
    ] {
        if let Some(raw) = raw {
            warn_if_coerced(name, raw);
        }
    }
    let nisab = nisab_from_matches(cfg, m)?;
    Ok(compute_zakat(&form.to_snapshot(), &nisab))
}

pub fn form_from_matches(m: &clap::ArgMatches) -> AssetForm {
    let get = |id: &str| m.get_one::<String>(id).cloned();
    AssetForm {
        cash: get("cash"),
        gold_value: get("gold"),
        silver_value: get("silver"),
        investments: get("investments"),
        receivables: get("receivables"),
        liabilities: get("liabilities"),
    }
}

/// Configured thresholds with any command-line overrides applied.
pub fn nisab_from_matches(cfg: &Config, m: &clap::ArgMatches) -> Result<NisabThreshold> {
    let mut nisab = cfg.nisab.threshold();
    if let Some(raw) = m.get_one::<String>("gold-nisab") {
        nisab.gold = threshold_override(raw).context("--gold-nisab")?;
    }
    if let Some(raw) = m.get_one::<String>("silver-nisab") {
        nisab.silver = threshold_override(raw).context("--silver-nisab")?;
    }
    Ok(nisab)
}

fn threshold_override(raw: &str) -> Result<Decimal> {
    let d = parse_decimal(raw)?;
    if d.is_sign_negative() && !d.is_zero() {
        return Err(SalamError::InvalidInput(format!("Nisab threshold {} is negative", d)).into());
    }
    Ok(d)
}

fn warn_if_coerced(name: &str, raw: &str) {
    let literal_zero = raw.trim().is_empty()
        || raw
            .trim()
            .parse::<Decimal>()
            .map(|d| d.is_zero())
            .unwrap_or(false);
    if !literal_zero && to_non_negative_decimal(raw).is_zero() {
        warn!(field = name, input = raw, "amount is not a non-negative number, using 0");
    }
}
