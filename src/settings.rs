// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Behavior settings and constants.
//!
//! This module holds non-visual settings that stay stable across theme
//! changes. Visual styling (colors, sizes) belongs in `theme.rs`.

use std::time::Duration;

// ============================================================================
// ANIMATION SETTINGS
// ============================================================================
/// How long an animated `set_progress` takes
const PROGRESS_ANIMATION_MS: u64 = 220;

// ============================================================================
// DEFAULT TRACK SHAPE
// ============================================================================
// (weight, normalized y) pairs. Nine teeth with a mix of half and full
// steps; the interior weights sum to 5.5 of 9 steps, so the last stretch
// to the right edge is the longest.
const DEFAULT_FRACTURE_DATA: [(f64, f64); 9] = [
    (0.5, 0.5),
    (0.5, 0.0),
    (0.5, 0.5),
    (1.0, -0.5),
    (1.0, 0.5),
    (0.5, 0.0),
    (1.0, 1.0),
    (1.0, 0.0),
    (1.0, 0.0),
];

// ============================================================================
// LOGGING
// ============================================================================
/// Default tracing directive when `RUST_LOG` does not override it
const DEFAULT_LOG_DIRECTIVE: &str = "toothy=info";

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Progress animation settings
pub mod animation {
    use super::Duration;

    /// Duration of an animated progress change
    pub const PROGRESS_DURATION: Duration = Duration::from_millis(super::PROGRESS_ANIMATION_MS);
}

/// Shape used before any fracture data is supplied
pub mod shape {
    /// Default `(weight, y)` fracture pairs
    pub const DEFAULT_FRACTURE_DATA: [(f64, f64); 9] = super::DEFAULT_FRACTURE_DATA;
}

/// Logging settings
pub mod logging {
    /// Directive added to the `RUST_LOG` filter
    pub const DEFAULT_DIRECTIVE: &str = super::DEFAULT_LOG_DIRECTIVE;
}
