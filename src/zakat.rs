// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Zakat eligibility and amount.
//!
//! Everything here is pure and infallible. Form input is coerced leniently:
//! anything that is not a non-negative number counts as zero.

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{AssetForm, AssetSnapshot, NisabThreshold, ZakatResult};

/// 2.5%, fixed.
pub const ZAKAT_RATE: Decimal = Decimal::from_parts(25, 0, 0, false, 3);

pub const GOLD_NISAB_GRAMS: Decimal = Decimal::from_parts(85, 0, 0, false, 0);
pub const SILVER_NISAB_GRAMS: Decimal = Decimal::from_parts(595, 0, 0, false, 0);

impl Default for NisabThreshold {
    fn default() -> Self {
        Self {
            gold: Decimal::from(4340),
            silver: Decimal::from(305),
        }
    }
}

impl NisabThreshold {
    /// Thresholds from per-gram metal prices (85 g gold, 595 g silver).
    pub fn from_metal_prices(gold_per_gram: Decimal, silver_per_gram: Decimal) -> Self {
        Self {
            gold: to_non_negative(gold_per_gram).saturating_mul(GOLD_NISAB_GRAMS),
            silver: to_non_negative(silver_per_gram).saturating_mul(SILVER_NISAB_GRAMS),
        }
    }

    /// The lower of the two thresholds, never below zero.
    pub fn lower(&self) -> Decimal {
        to_non_negative(self.gold.min(self.silver))
    }
}

/// Parse a form value as a non-negative decimal. Empty, malformed, or negative
/// input yields zero. Numbers too large for `Decimal` saturate at `Decimal::MAX`.
pub fn to_non_negative_decimal(raw: &str) -> Decimal {
    let s = raw.trim();
    if s.is_empty() {
        return Decimal::ZERO;
    }
    let parsed = s
        .parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(s));
    match parsed {
        Ok(d) => to_non_negative(d),
        Err(_) => match s.parse::<f64>() {
            Ok(v) if v.is_finite() && v > DECIMAL_LIMIT => {
                debug!(input = s, "amount beyond decimal range, saturating");
                Decimal::MAX
            }
            _ => {
                debug!(input = s, "non-numeric amount treated as zero");
                Decimal::ZERO
            }
        },
    }
}

// Just under Decimal::MAX (~7.9e28); anything above it that parsed as a
// float but not as a decimal is out of range, not malformed.
const DECIMAL_LIMIT: f64 = 7.9e28;

fn to_non_negative(d: Decimal) -> Decimal {
    d.max(Decimal::ZERO)
}

fn field(raw: &Option<String>) -> Decimal {
    raw.as_deref().map(to_non_negative_decimal).unwrap_or_default()
}

impl AssetForm {
    pub fn to_snapshot(&self) -> AssetSnapshot {
        AssetSnapshot {
            cash: field(&self.cash),
            gold_value: field(&self.gold_value),
            silver_value: field(&self.silver_value),
            investments: field(&self.investments),
            receivables: field(&self.receivables),
            liabilities: field(&self.liabilities),
        }
    }
}

impl AssetSnapshot {
    /// Assets minus liabilities. Not clamped: liabilities may exceed assets.
    pub fn net_assets(&self) -> Decimal {
        [
            self.cash,
            self.gold_value,
            self.silver_value,
            self.investments,
            self.receivables,
        ]
        .into_iter()
        .map(to_non_negative)
        .fold(Decimal::ZERO, Decimal::saturating_add)
        .saturating_sub(to_non_negative(self.liabilities))
    }
}

pub fn compute_zakat(snapshot: &AssetSnapshot, nisab: &NisabThreshold) -> ZakatResult {
    let total_assets = snapshot.net_assets();
    let nisab_used = nisab.lower();
    let eligible = total_assets >= nisab_used;
    let zakat_due = if eligible {
        total_assets * ZAKAT_RATE
    } else {
        Decimal::ZERO
    };
    debug!(%total_assets, %nisab_used, eligible, %zakat_due, "zakat computed");
    ZakatResult {
        total_assets,
        nisab_used,
        eligible,
        zakat_due,
    }
}

pub fn compute_zakat_default(snapshot: &AssetSnapshot) -> ZakatResult {
    compute_zakat(snapshot, &NisabThreshold::default())
}
