// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Per-object exponential backoff for failed reconciles.
//!
//! Each key's delay starts at `BASE_DELAY_MS` and doubles with every
//! consecutive failure, capped at `MAX_DELAY_SECS`. A success clears the key.

use crate::constants::backoff::{BASE_DELAY_MS, MAX_DELAY_SECS};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

#[derive(Debug, Default)]
pub struct ErrorBackoff {
    failures: Mutex<HashMap<String, u32>>,
}

impl ErrorBackoff {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure for `key` and return how long to wait before retrying it
    pub fn record_failure(&self, key: &str) -> Duration {
        let mut failures = self.failures.lock().unwrap_or_else(|e| e.into_inner());
        let count = failures.entry(key.to_string()).or_insert(0);
        *count = count.saturating_add(1);
        delay_for(*count)
    }

    /// Forget the failure history of `key`
    pub fn reset(&self, key: &str) {
        self.failures
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(key);
    }

    /// Number of consecutive failures recorded for `key`
    pub fn failures(&self, key: &str) -> u32 {
        self.failures
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .copied()
            .unwrap_or(0)
    }
}

/// Delay after `failures` consecutive failures (1-based)
pub fn delay_for(failures: u32) -> Duration {
    let max = Duration::from_secs(MAX_DELAY_SECS);
    let exponent = failures.saturating_sub(1);
    let multiplier = 1u64.checked_shl(exponent).unwrap_or(u64::MAX);
    let delay = Duration::from_millis(BASE_DELAY_MS.saturating_mul(multiplier));
    delay.min(max)
}
