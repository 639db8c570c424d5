// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Stroke styles derived from the view's config

use crate::config::{CapStyle, ToothyConfig};
use crate::theme;
use kurbo::Stroke;
use peniko::{Brush, Color};

/// A stroke style plus the brush to draw it with
#[derive(Debug, Clone)]
pub struct Paint {
    pub stroke: Stroke,
    pub brush: Brush,
}

impl Paint {
    pub fn new(width: f64, cap: CapStyle, color: Color) -> Self {
        Self {
            stroke: Stroke::new(width).with_caps(cap.into()),
            brush: Brush::Solid(color),
        }
    }
}

/// All paints a progress view draws with
#[derive(Debug, Clone)]
pub struct ProgressPaints {
    /// Filled portion of the path
    pub progress: Paint,
    /// Full path behind the filled portion
    pub background: Paint,
    /// Pointer marker line
    pub track: Paint,
    /// Builder-mode overlay
    pub debug: Paint,
}

impl ProgressPaints {
    pub fn from_config(config: &ToothyConfig) -> Self {
        Self {
            progress: Paint::new(
                config.progress_width,
                config.progress_cap,
                config.progress_color,
            ),
            background: Paint::new(
                config.progress_background_width,
                config.progress_background_cap,
                config.progress_background_color,
            ),
            track: Paint::new(config.track_width, config.track_cap, config.track_color),
            debug: Paint::new(
                theme::builder::LINE_WIDTH,
                CapStyle::Round,
                theme::builder::DEBUG,
            ),
        }
    }
}

impl Default for ProgressPaints {
    fn default() -> Self {
        Self::from_config(&ToothyConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Cap;

    #[test]
    fn paints_follow_config() {
        let config = ToothyConfig {
            progress_width: 5.0,
            progress_cap: CapStyle::Butt,
            track_cap: CapStyle::Square,
            ..ToothyConfig::default()
        };
        let paints = ProgressPaints::from_config(&config);

        assert_eq!(paints.progress.stroke.width, 5.0);
        assert_eq!(paints.progress.stroke.start_cap, Cap::Butt);
        assert_eq!(paints.progress.stroke.end_cap, Cap::Butt);
        assert_eq!(paints.track.stroke.start_cap, Cap::Square);
        assert_eq!(paints.background.stroke.start_cap, Cap::Round);
        assert_eq!(paints.debug.stroke.width, theme::builder::LINE_WIDTH);
    }
}
