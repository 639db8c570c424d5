// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Normalized fracture points.
//!
//! A fracture point describes one tooth of the track in unit space. `y`
//! is the vertical offset from the track center (-1 top, +1 bottom) and
//! `x` is the horizontal step weight relative to the previous point. The
//! weights of the first and last points are ignored because those points
//! are pinned to the canvas edges.

/// A single normalized control point of the toothy path
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FracturePoint {
    /// Horizontal step weight (interior points only)
    pub x: f64,
    /// Normalized vertical offset in `[-1, 1]`
    pub y: f64,
}

impl FracturePoint {
    /// Create a fracture point, clamping `y` into `[-1, 1]`
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y: clamp_unit(y),
        }
    }

    /// Return a copy with a new normalized y
    pub fn with_y(self, y: f64) -> Self {
        Self::new(self.x, y)
    }
}

impl From<(f64, f64)> for FracturePoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Clamp a normalized offset into `[-1, 1]`, mapping NaN to the center
pub(crate) fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(-1.0, 1.0)
}
