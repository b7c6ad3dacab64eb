// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::DEFAULT_HAPPY_MARKER;
use crate::error::{DravenError, Result};
use std::env;

/// Controller configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Value written to `status.happy` when the referenced pod exists
    pub happy_marker: String,
    /// Hand fetch failures to the error policy instead of reconciling a default resource
    pub abort_on_fetch_error: bool,
    pub wait_for_crd: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            happy_marker: DEFAULT_HAPPY_MARKER.to_string(),
            abort_on_fetch_error: false,
            wait_for_crd: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        let happy_marker = lookup("DRAVEN_HAPPY_MARKER")
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.happy_marker);
        let abort_on_fetch_error = parse_bool(
            "DRAVEN_ABORT_ON_FETCH_ERROR",
            lookup("DRAVEN_ABORT_ON_FETCH_ERROR"),
            defaults.abort_on_fetch_error,
        )?;
        let wait_for_crd = parse_bool(
            "DRAVEN_WAIT_FOR_CRD",
            lookup("DRAVEN_WAIT_FOR_CRD"),
            defaults.wait_for_crd,
        )?;

        Ok(Config {
            happy_marker,
            abort_on_fetch_error,
            wait_for_crd,
        })
    }
}

fn parse_bool(key: &str, value: Option<String>, default: bool) -> Result<bool> {
    match value {
        None => Ok(default),
        Some(v) => v.trim().to_ascii_lowercase().parse().map_err(|_| {
            DravenError::ConfigError(format!("{} must be 'true' or 'false', got '{}'", key, v))
        }),
    }
}
