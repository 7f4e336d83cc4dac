// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Holdings and short-term debts, all in one currency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetSnapshot {
    pub cash: Decimal,
    pub gold_value: Decimal,
    pub silver_value: Decimal,
    pub investments: Decimal,
    pub receivables: Decimal,
    pub liabilities: Decimal,
}

/// Raw form input, one optional string per field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetForm {
    pub cash: Option<String>,
    pub gold_value: Option<String>,
    pub silver_value: Option<String>,
    pub investments: Option<String>,
    pub receivables: Option<String>,
    pub liabilities: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NisabThreshold {
    pub gold: Decimal, // 85 g of gold
    pub silver: Decimal, // 595 g of silver
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZakatResult {
    pub total_assets: Decimal,
    pub nisab_used: Decimal,
    pub eligible: bool,
    pub zakat_due: Decimal,
}

/// WGS84 position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QiblaResult {
    /// Clockwise from true North, in `[0, 360)`.
    pub bearing_degrees: f64,
}
