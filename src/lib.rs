// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod location;
pub mod logging;
pub mod models;
pub mod qibla;
pub mod tasbih;
pub mod utils;
pub mod zakat;

pub use error::{GeoError, Result, SalamError};
pub use models::{AssetForm, AssetSnapshot, GeoCoordinate, NisabThreshold, QiblaResult, ZakatResult};
pub use qibla::compute_bearing;
pub use tasbih::{Phrase, TasbihState};
pub use zakat::{compute_zakat, to_non_negative_decimal};
