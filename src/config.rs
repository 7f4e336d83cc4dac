// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! TOML configuration: Nisab thresholds and the location provider.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::models::{GeoCoordinate, NisabThreshold};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("org.salamkit", "Salamkit", "salamkit"));

pub const CONFIG_ENV: &str = "SALAMKIT_CONFIG";

/// London, the placeholder observer used in demo mode.
pub const DEMO_LOCATION: GeoCoordinate = GeoCoordinate::new(51.5074, -0.1278);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub currency: String,
    pub nisab: NisabConfig,
    pub location: LocationConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NisabConfig {
    pub gold: Decimal,
    pub silver: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gold_price_per_gram: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub silver_price_per_gram: Option<Decimal>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationSource {
    Fixed,
    Ip,
    Disabled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationConfig {
    pub provider: LocationSource,
    pub latitude: f64,
    pub longitude: f64,
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: "USD".to_string(),
            nisab: NisabConfig::default(),
            location: LocationConfig::default(),
        }
    }
}

impl Default for NisabConfig {
    fn default() -> Self {
        let t = NisabThreshold::default();
        Self {
            gold: t.gold,
            silver: t.silver,
            gold_price_per_gram: None,
            silver_price_per_gram: None,
        }
    }
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            provider: LocationSource::Fixed,
            latitude: DEMO_LOCATION.latitude,
            longitude: DEMO_LOCATION.longitude,
            endpoint: "http://ip-api.com/json".to_string(),
            timeout_secs: 10,
        }
    }
}

impl NisabConfig {
    /// Thresholds and per-gram prices must be non-negative.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let fields = [
            ("nisab.gold", Some(self.gold)),
            ("nisab.silver", Some(self.silver)),
            ("nisab.gold_price_per_gram", self.gold_price_per_gram),
            ("nisab.silver_price_per_gram", self.silver_price_per_gram),
        ];
        for (field, value) in fields {
            if let Some(v) = value {
                if v.is_sign_negative() && !v.is_zero() {
                    return Err(ConfigError::InvalidValue {
                        field: field.to_string(),
                        reason: format!("{} is negative", v),
                    });
                }
            }
        }
        Ok(())
    }

    /// Per-gram prices win when both are set; otherwise the flat thresholds.
    pub fn threshold(&self) -> NisabThreshold {
        match (self.gold_price_per_gram, self.silver_price_per_gram) {
            (Some(g), Some(s)) => NisabThreshold::from_metal_prices(g, s),
            _ => NisabThreshold {
                gold: self.gold,
                silver: self.silver,
            },
        }
    }
}

impl LocationConfig {
    pub fn coordinate(&self) -> GeoCoordinate {
        GeoCoordinate::new(self.latitude, self.longitude)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

impl Config {
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        config.nisab.validate()?;
        Ok(config)
    }

    /// Load from `path`, falling back to defaults when the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        debug!(path = %path.display(), "loading config");
        Self::load_from_path(path)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self).map_err(ConfigError::SerializeError)?)
    }

    /// Write this config to `path`. Never overwrites an existing file.
    pub fn write_new(&self, path: &Path) -> Result<()> {
        if path.exists() {
            return Err(ConfigError::AlreadyExists(path.display().to_string()).into());
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(ConfigError::WriteError)?;
        }
        fs::write(path, self.to_toml_string()?).map_err(ConfigError::WriteError)?;
        Ok(())
    }
}

/// `--config`, then `$SALAMKIT_CONFIG`, then the platform config dir.
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(p) = explicit {
        return Ok(p.to_path_buf());
    }
    if let Ok(p) = std::env::var(CONFIG_ENV) {
        if !p.trim().is_empty() {
            return Ok(PathBuf::from(p));
        }
    }
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;
    Ok(proj.config_dir().join("config.toml"))
}
