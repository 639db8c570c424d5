// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Rendering adapter.
//!
//! The view never rasterizes anything itself. It describes what to draw
//! as kurbo paths with strokes and peniko brushes, and hands them to a
//! `Painter` supplied by the host (a vello scene, a tiny-skia pixmap, a
//! test recorder, ...).

mod drawing;
mod paint;

pub use drawing::{Frame, paint_frame, progress_path};
pub use paint::{Paint, ProgressPaints};

use kurbo::{Affine, BezPath, Stroke};
use peniko::Brush;

/// Drawing backend that receives the view's shapes
pub trait Painter {
    /// Stroke `shape` after applying `transform`
    fn stroke(&mut self, stroke: &Stroke, transform: Affine, brush: &Brush, shape: &BezPath);

    /// Fill `shape` (non-zero winding) after applying `transform`
    fn fill(&mut self, transform: Affine, brush: &Brush, shape: &BezPath);
}

/// One recorded draw call
#[derive(Debug, Clone)]
pub enum DrawCommand {
    Stroke {
        stroke: Stroke,
        transform: Affine,
        brush: Brush,
        shape: BezPath,
    },
    Fill {
        transform: Affine,
        brush: Brush,
        shape: BezPath,
    },
}

impl DrawCommand {
    /// The shape with its transform applied
    pub fn transformed_shape(&self) -> BezPath {
        match self {
            DrawCommand::Stroke {
                transform, shape, ..
            }
            | DrawCommand::Fill {
                transform, shape, ..
            } => *transform * shape,
        }
    }

    pub fn brush(&self) -> &Brush {
        match self {
            DrawCommand::Stroke { brush, .. } | DrawCommand::Fill { brush, .. } => brush,
        }
    }
}

/// A `Painter` that records every call, in order
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Painter for DisplayList {
    fn stroke(&mut self, stroke: &Stroke, transform: Affine, brush: &Brush, shape: &BezPath) {
        self.commands.push(DrawCommand::Stroke {
            stroke: stroke.clone(),
            transform,
            brush: brush.clone(),
            shape: shape.clone(),
        });
    }

    fn fill(&mut self, transform: Affine, brush: &Brush, shape: &BezPath) {
        self.commands.push(DrawCommand::Fill {
            transform,
            brush: brush.clone(),
            shape: shape.clone(),
        });
    }
}
