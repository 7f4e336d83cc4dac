// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Error types for Salamkit

use std::time::Duration;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SalamError>;

#[derive(Error, Debug)]
pub enum SalamError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Location error: {0}")]
    Location(#[from] GeoError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl SalamError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SalamError::InvalidInput(_) => 3,
            SalamError::Location(GeoError::PermissionDenied(_)) => 2,
            SalamError::Location(_) => 1,
            SalamError::Config(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Failed to write config file: {0}")]
    WriteError(std::io::Error),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Config file already exists at {0}")]
    AlreadyExists(String),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

/// Exit code for an error that reached `main`. Typed errors keep their code
/// through any `anyhow` context added on the way up.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(e) = err.downcast_ref::<SalamError>() {
        return e.exit_code();
    }
    if let Some(e) = err.downcast_ref::<GeoError>() {
        return SalamError::Location(e.clone()).exit_code();
    }
    1
}

/// Failure to obtain the observer's position. Never produced by the bearing
/// computation itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeoError {
    #[error("Location permission denied: {0}")]
    PermissionDenied(String),

    #[error("Location unavailable: {0}")]
    Unavailable(String),

    #[error("Location request timed out after {0:?}")]
    Timeout(Duration),
}
