// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Observer position providers.
//!
//! A lookup is a single request that resolves exactly once, with either a
//! coordinate or a [`GeoError`]. There is no retry here; asking again is just
//! another call to [`acquire`].

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::{LocationConfig, LocationSource};
use crate::error::GeoError;
use crate::models::GeoCoordinate;
use crate::utils::http_client;

#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn locate(&self) -> Result<GeoCoordinate, GeoError>;

    fn name(&self) -> &str;
}

/// Always answers with the same coordinate (demo mode).
#[derive(Debug, Clone)]
pub struct FixedLocation {
    coordinate: GeoCoordinate,
}

impl FixedLocation {
    pub fn new(coordinate: GeoCoordinate) -> Self {
        Self { coordinate }
    }
}

#[async_trait]
impl LocationProvider for FixedLocation {
    async fn locate(&self) -> Result<GeoCoordinate, GeoError> {
        Ok(self.coordinate)
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

/// Location lookup switched off by the user.
#[derive(Debug, Clone, Default)]
pub struct DisabledLocation;

#[async_trait]
impl LocationProvider for DisabledLocation {
    async fn locate(&self) -> Result<GeoCoordinate, GeoError> {
        Err(GeoError::PermissionDenied(
            "location lookup is disabled in the configuration".to_string(),
        ))
    }

    fn name(&self) -> &str {
        "disabled"
    }
}

/// Approximate position from an IP geolocation service.
#[derive(Debug, Clone)]
pub struct IpLocation {
    endpoint: String,
    timeout: Duration,
}

impl IpLocation {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout,
        }
    }
}

#[derive(Debug, Deserialize)]
struct IpLookup {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default, alias = "latitude")]
    lat: Option<f64>,
    #[serde(default, alias = "longitude", alias = "lng")]
    lon: Option<f64>,
}

/// Decode an IP lookup response body. Accepts `lat`/`lon` (ip-api.com) as well
/// as `latitude`/`longitude` field names.
pub fn parse_ip_lookup(body: &str) -> Result<GeoCoordinate, GeoError> {
    let r: IpLookup = serde_json::from_str(body)
        .map_err(|e| GeoError::Unavailable(format!("unreadable location response: {}", e)))?;
    if let Some(status) = r.status.as_deref() {
        if !status.eq_ignore_ascii_case("success") {
            let reason = r.message.unwrap_or_else(|| status.to_string());
            return Err(GeoError::Unavailable(reason));
        }
    }
    let (Some(lat), Some(lon)) = (r.lat, r.lon) else {
        return Err(GeoError::Unavailable(
            "location response has no coordinates".to_string(),
        ));
    };
    let coordinate = GeoCoordinate::new(lat, lon);
    if !coordinate.is_valid() {
        return Err(GeoError::Unavailable(format!(
            "location out of range: {}, {}",
            lat, lon
        )));
    }
    Ok(coordinate)
}

fn map_http_error(e: reqwest::Error, timeout: Duration) -> GeoError {
    if e.is_timeout() {
        GeoError::Timeout(timeout)
    } else {
        GeoError::Unavailable(e.to_string())
    }
}

#[async_trait]
impl LocationProvider for IpLocation {
    async fn locate(&self) -> Result<GeoCoordinate, GeoError> {
        let endpoint = self.endpoint.clone();
        let timeout = self.timeout;
        debug!(%endpoint, "requesting IP location");
        // the blocking client must be built and dropped off the async runtime
        let body = tokio::task::spawn_blocking(move || -> Result<String, GeoError> {
            let client = http_client(timeout).map_err(|e| map_http_error(e, timeout))?;
            let resp = client
                .get(&endpoint)
                .send()
                .and_then(|r| r.error_for_status())
                .map_err(|e| map_http_error(e, timeout))?;
            resp.text().map_err(|e| map_http_error(e, timeout))
        })
        .await
        .map_err(|e| GeoError::Unavailable(format!("location task failed: {}", e)))??;
        parse_ip_lookup(&body)
    }

    fn name(&self) -> &str {
        "ip"
    }
}

pub fn from_config(cfg: &LocationConfig) -> Box<dyn LocationProvider> {
    match cfg.provider {
        LocationSource::Fixed => Box::new(FixedLocation::new(cfg.coordinate())),
        LocationSource::Ip => Box::new(IpLocation::new(cfg.endpoint.clone(), cfg.timeout())),
        LocationSource::Disabled => Box::new(DisabledLocation),
    }
}

/// Run one lookup, giving up after `timeout`.
pub async fn acquire(
    provider: &dyn LocationProvider,
    timeout: Duration,
) -> Result<GeoCoordinate, GeoError> {
    match tokio::time::timeout(timeout, provider.locate()).await {
        Ok(Ok(coordinate)) => {
            debug!(provider = provider.name(), ?coordinate, "location acquired");
            Ok(coordinate)
        }
        Ok(Err(e)) => {
            warn!(provider = provider.name(), error = %e, "location lookup failed");
            Err(e)
        }
        Err(_) => {
            warn!(provider = provider.name(), ?timeout, "location lookup timed out");
            Err(GeoError::Timeout(timeout))
        }
    }
}
