// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::{Config, DEMO_LOCATION, LocationSource};
use crate::location::{self, DisabledLocation, IpLocation, LocationProvider};
use crate::models::GeoCoordinate;
use crate::qibla::{compute_bearing, distance_to_kaaba_km};
use crate::utils::{maybe_print_json, parse_degrees, pretty_table};
use anyhow::Result;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct QiblaReport {
    pub observer: GeoCoordinate,
    pub bearing_degrees: f64,
    pub compass_point: &'static str,
    pub distance_km: f64,
}

pub fn handle(cfg: &Config, m: &clap::ArgMatches) -> Result<()> {
    let observer = resolve_observer(cfg, m)?;
    let report = report_for(observer);
    if maybe_print_json(m.get_flag("json"), &report)? {
        return Ok(());
    }

    let rows = vec![
        vec![
            "Observer".into(),
            format!("{:.4}, {:.4}", observer.latitude, observer.longitude),
        ],
        vec!["Bearing".into(), format!("{:.2}°", report.bearing_degrees)],
        vec!["Direction".into(), report.compass_point.to_string()],
        vec!["Distance".into(), format!("{:.0} km", report.distance_km)],
    ];
    println!("{}", pretty_table(&["Qibla", "Value"], rows));
    Ok(())
}

pub fn report_for(observer: GeoCoordinate) -> QiblaReport {
    let res = compute_bearing(&observer);
    QiblaReport {
        observer,
        bearing_degrees: res.bearing_degrees,
        compass_point: res.compass_point(),
        distance_km: distance_to_kaaba_km(&observer),
    }
}

/// Explicit coordinates, then `--demo`, then `--locate` (IP lookup), and
/// otherwise whatever provider the config names.
pub fn resolve_observer(cfg: &Config, m: &clap::ArgMatches) -> Result<GeoCoordinate> {
    if let (Some(lat), Some(lng)) = (m.get_one::<String>("lat"), m.get_one::<String>("lng")) {
        return Ok(GeoCoordinate::new(
            parse_degrees(lat, "latitude", 90.0)?,
            parse_degrees(lng, "longitude", 180.0)?,
        ));
    }
    if m.get_flag("demo") {
        return Ok(DEMO_LOCATION);
    }

    let provider: Box<dyn LocationProvider> = if m.get_flag("locate") {
        match cfg.location.provider {
            LocationSource::Disabled => Box::new(DisabledLocation),
            _ => Box::new(IpLocation::new(
                cfg.location.endpoint.clone(),
                cfg.location.timeout(),
            )),
        }
    } else {
        location::from_config(&cfg.location)
    };

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let observer = rt.block_on(location::acquire(provider.as_ref(), cfg.location.timeout()))?;
    Ok(observer)
}
