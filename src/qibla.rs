// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Qibla bearing: the initial great-circle bearing (forward azimuth) from an
//! observer to the Kaaba, on a spherical Earth.
//!
//! The calculator does not range-check its input; that is the job of whoever
//! supplies the coordinate. Poles and the antimeridian are handled without
//! special cases. An observer standing exactly on the Kaaba gets bearing 0.

use tracing::debug;

use crate::models::{GeoCoordinate, QiblaResult};

pub const KAABA: GeoCoordinate = GeoCoordinate::new(21.4225, 39.8262);

/// Mean Earth radius (IUGG), km.
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

pub fn compute_bearing(observer: &GeoCoordinate) -> QiblaResult {
    if *observer == KAABA {
        return QiblaResult {
            bearing_degrees: 0.0,
        };
    }

    let lat_o = observer.latitude.to_radians();
    let lat_k = KAABA.latitude.to_radians();
    let d_long = (KAABA.longitude - observer.longitude).to_radians();

    let y = d_long.sin() * lat_k.cos();
    let x = lat_o.cos() * lat_k.sin() - lat_o.sin() * lat_k.cos() * d_long.cos();

    let degrees = y.atan2(x).to_degrees();
    let bearing_degrees = if degrees.is_finite() {
        (degrees + 360.0) % 360.0
    } else {
        debug!(?observer, "bearing undefined for observer, using 0");
        0.0
    };
    QiblaResult { bearing_degrees }
}

/// Haversine distance from the observer to the Kaaba.
pub fn distance_to_kaaba_km(observer: &GeoCoordinate) -> f64 {
    let lat_o = observer.latitude.to_radians();
    let lat_k = KAABA.latitude.to_radians();
    let d_lat = lat_k - lat_o;
    let d_long = (KAABA.longitude - observer.longitude).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat_o.cos() * lat_k.cos() * (d_long / 2.0).sin().powi(2);
    // rounding can push `a` a hair past 1 near the antipode
    2.0 * EARTH_RADIUS_KM * a.clamp(0.0, 1.0).sqrt().asin()
}

impl QiblaResult {
    /// 16-wind compass label, e.g. `"SE"`.
    pub fn compass_point(&self) -> &'static str {
        let idx = ((self.bearing_degrees / 22.5).round() as usize) % COMPASS_POINTS.len();
        COMPASS_POINTS[idx]
    }
}
