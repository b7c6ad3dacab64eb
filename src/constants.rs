// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// API group and version served by the Draven CRD
pub mod api {
    pub const GROUP: &str = "batch.my.domain";
    pub const VERSION: &str = "v1";
    pub const KIND: &str = "Draven";
    pub const PLURAL: &str = "dravens";
}

/// Status value written when the referenced pod is found
pub const DEFAULT_HAPPY_MARKER: &str = "发现了Draven";

/// The controller name, used for the generated ClusterRole
pub const CONTROLLER_NAME: &str = "draven-controller";

/// CRD polling configuration
pub mod crd {
    /// Initial polling interval in seconds when waiting for CRD
    pub const POLL_INTERVAL_SECS: u64 = 10;
    /// Maximum polling interval in seconds (exponential backoff cap)
    pub const POLL_MAX_INTERVAL_SECS: u64 = 60;
}

/// Per-key retry backoff applied by the error policy
pub mod backoff {
    /// Delay after the first failure, in milliseconds
    pub const BASE_DELAY_MS: u64 = 5;
    /// Upper bound on the delay, in seconds
    pub const MAX_DELAY_SECS: u64 = 1000;
}
