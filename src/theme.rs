// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Theme colors and constants
//!
//! All colors use hexadecimal format: Color::from_rgb8(0xRR, 0xGG, 0xBB)

use peniko::Color;

// ============================================================================
// BASE COLORS
// ============================================================================
const BASE_WHITE: Color = Color::from_rgb8(0xff, 0xff, 0xff);
const BASE_GRAY: Color = Color::from_rgb8(0x95, 0x95, 0x95);

// ============================================================================
// PROGRESS PATH
// ============================================================================
const PROGRESS_FOREGROUND: Color = BASE_WHITE;
const PROGRESS_BACKGROUND: Color = BASE_GRAY;

// ============================================================================
// POINTER TRACK MARKER
// ============================================================================
const TRACK_MARKER: Color = BASE_GRAY;

// ============================================================================
// BUILDER OVERLAY
// ============================================================================
const BUILDER_DEBUG: Color = Color::from_rgb8(0xff, 0x00, 0xff); // Magenta

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Colors for the progress path
pub mod progress {
    use super::Color;
    /// Filled portion of the path
    pub const FOREGROUND: Color = super::PROGRESS_FOREGROUND;
    /// Full path drawn behind the filled portion
    pub const BACKGROUND: Color = super::PROGRESS_BACKGROUND;
}

/// Colors for the pointer marker
pub mod track {
    use super::Color;
    pub const MARKER: Color = super::TRACK_MARKER;
}

/// Colors and sizes for the builder-mode overlay
pub mod builder {
    use super::Color;
    pub const DEBUG: Color = super::BUILDER_DEBUG;

    /// Width of overlay guide lines
    pub const LINE_WIDTH: f64 = 1.0;
    /// Radius of the latched apex marker
    pub const APEX_RADIUS: f64 = 6.0;
}

/// Default sizes for rendering
pub mod size {
    /// Width of the filled progress path
    pub const PROGRESS_WIDTH: f64 = 3.0;
    /// Width of the background progress path
    pub const PROGRESS_BACKGROUND_WIDTH: f64 = 3.0;
    /// Width of the pointer marker line
    pub const TRACK_WIDTH: f64 = 3.0;
    /// Padding applied on every side of the view
    pub const PADDING: f64 = 12.0;
}
