// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Style configuration.
//!
//! `ToothyConfig` is the typed, validated style of a progress view. It can
//! be built in code (starting from `Default`) or loaded from TOML, where
//! every key is optional and colors are `#rrggbb` / `#rrggbbaa` strings:
//!
//! ```toml
//! progress_cap = "square"
//! progress_color = "#ffcc00"
//! progress_width = 4.0
//! initial_progress = 0.25
//! builder_mode = false
//!
//! [padding]
//! start = 16.0
//! end = 16.0
//! ```

use crate::theme;
use kurbo::{Cap, Insets};
use peniko::Color;
use peniko::color::{Srgb, parse_color};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a style configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid color '{value}' for {field} (expected #rrggbb or #rrggbbaa)")]
    InvalidColor { field: &'static str, value: String },

    #[error("{field} must be a finite, non-negative number (got {value})")]
    InvalidNumber { field: &'static str, value: f64 },
}

/// Stroke cap style for the progress paths and pointer marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapStyle {
    Butt,
    #[default]
    Round,
    Square,
}

impl CapStyle {
    /// Map a legacy integer cap code: 0 butt, 1 round, anything else square
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => CapStyle::Butt,
            1 => CapStyle::Round,
            _ => CapStyle::Square,
        }
    }
}

impl From<CapStyle> for Cap {
    fn from(style: CapStyle) -> Self {
        match style {
            CapStyle::Butt => Cap::Butt,
            CapStyle::Round => Cap::Round,
            CapStyle::Square => Cap::Square,
        }
    }
}

/// Validated style for a progress view
#[derive(Debug, Clone, PartialEq)]
pub struct ToothyConfig {
    pub progress_cap: CapStyle,
    pub progress_background_cap: CapStyle,
    pub track_cap: CapStyle,

    pub progress_color: Color,
    pub progress_background_color: Color,
    pub track_color: Color,

    /// Stroke widths in pixels
    pub progress_width: f64,
    pub track_width: f64,
    pub progress_background_width: f64,

    /// Progress shown before any `set_progress`, in `[0, 1]`
    pub initial_progress: f64,
    /// Whether apexes can be dragged to reshape the track
    pub builder_mode: bool,
    /// Disabled views ignore pointer input
    pub enabled: bool,
    /// Insets between the view bounds and the drawing canvas
    pub padding: Insets,
}

impl Default for ToothyConfig {
    fn default() -> Self {
        Self {
            progress_cap: CapStyle::Round,
            progress_background_cap: CapStyle::Round,
            track_cap: CapStyle::Round,
            progress_color: theme::progress::FOREGROUND,
            progress_background_color: theme::progress::BACKGROUND,
            track_color: theme::track::MARKER,
            progress_width: theme::size::PROGRESS_WIDTH,
            track_width: theme::size::TRACK_WIDTH,
            progress_background_width: theme::size::PROGRESS_BACKGROUND_WIDTH,
            initial_progress: 0.0,
            builder_mode: false,
            enabled: true,
            padding: Insets::uniform(theme::size::PADDING),
        }
    }
}

impl ToothyConfig {
    /// Load a config from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        tracing::info!("Loading style config: {}", path.display());
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Parse a config from TOML text; missing keys keep their defaults
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let file: StyleFile = toml::from_str(text)?;
        file.validate()
    }
}

/// On-disk shape of the config; every key optional
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct StyleFile {
    progress_cap: Option<CapStyle>,
    progress_background_cap: Option<CapStyle>,
    track_cap: Option<CapStyle>,
    progress_color: Option<String>,
    progress_background_color: Option<String>,
    track_color: Option<String>,
    progress_width: Option<f64>,
    track_width: Option<f64>,
    progress_background_width: Option<f64>,
    initial_progress: Option<f64>,
    builder_mode: Option<bool>,
    enabled: Option<bool>,
    padding: Option<PaddingFile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct PaddingFile {
    start: Option<f64>,
    top: Option<f64>,
    end: Option<f64>,
    bottom: Option<f64>,
}

impl StyleFile {
    fn validate(self) -> Result<ToothyConfig, ConfigError> {
        let defaults = ToothyConfig::default();

        let initial_progress = match self.initial_progress {
            Some(value) if !(0.0..=1.0).contains(&value) => {
                tracing::warn!("initial_progress {} out of range, clamping", value);
                if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) }
            }
            Some(value) => value,
            None => defaults.initial_progress,
        };

        let padding = match self.padding {
            Some(p) => Insets::new(
                length("padding.start", p.start, defaults.padding.x0)?,
                length("padding.top", p.top, defaults.padding.y0)?,
                length("padding.end", p.end, defaults.padding.x1)?,
                length("padding.bottom", p.bottom, defaults.padding.y1)?,
            ),
            None => defaults.padding,
        };

        Ok(ToothyConfig {
            progress_cap: self.progress_cap.unwrap_or(defaults.progress_cap),
            progress_background_cap: self
                .progress_background_cap
                .unwrap_or(defaults.progress_background_cap),
            track_cap: self.track_cap.unwrap_or(defaults.track_cap),
            progress_color: color(
                "progress_color",
                self.progress_color,
                defaults.progress_color,
            )?,
            progress_background_color: color(
                "progress_background_color",
                self.progress_background_color,
                defaults.progress_background_color,
            )?,
            track_color: color("track_color", self.track_color, defaults.track_color)?,
            progress_width: length(
                "progress_width",
                self.progress_width,
                defaults.progress_width,
            )?,
            track_width: length("track_width", self.track_width, defaults.track_width)?,
            progress_background_width: length(
                "progress_background_width",
                self.progress_background_width,
                defaults.progress_background_width,
            )?,
            initial_progress,
            builder_mode: self.builder_mode.unwrap_or(defaults.builder_mode),
            enabled: self.enabled.unwrap_or(defaults.enabled),
            padding,
        })
    }
}

fn color(field: &'static str, value: Option<String>, default: Color) -> Result<Color, ConfigError> {
    match value {
        Some(text) => {
            parse_hex_color(&text).ok_or(ConfigError::InvalidColor { field, value: text })
        }
        None => Ok(default),
    }
}

fn length(field: &'static str, value: Option<f64>, default: f64) -> Result<f64, ConfigError> {
    match value {
        Some(value) if value.is_finite() && value >= 0.0 => Ok(value),
        Some(value) => Err(ConfigError::InvalidNumber { field, value }),
        None => Ok(default),
    }
}

/// Parse `#rrggbb` or `#rrggbbaa` (the leading `#` is optional)
///
/// Only the two hex forms are accepted; other CSS color syntax is
/// rejected before parsing.
pub fn parse_hex_color(text: &str) -> Option<Color> {
    let hex = text.trim().trim_start_matches('#');
    if !matches!(hex.len(), 6 | 8) || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let parsed = parse_color(&format!("#{hex}")).ok()?;
    Some(parsed.to_alpha_color::<Srgb>())
}
