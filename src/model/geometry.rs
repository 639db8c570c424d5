// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Fracture points and their pixel-space apexes, kept in lockstep.
//!
//! `Geometry` owns both views of the path: the normalized fracture points
//! (the source of truth) and the absolute apexes derived from them for the
//! current canvas size. Apexes are a cache. Every public mutation goes
//! through a method here that updates both vectors together, so the two
//! can never disagree in length or meaning.
//!
//! All apex coordinates are canvas-local: padding has already been
//! removed, so the first apex sits at x = 0 and the last at the canvas
//! width.

use super::fracture::{FracturePoint, clamp_unit};
use kurbo::{Point, Size};

/// Dual-array geometry model for the toothy track
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Geometry {
    fractures: Vec<FracturePoint>,
    apexes: Vec<Point>,
    canvas: Size,
}

impl Geometry {
    /// Create an empty model for a canvas of the given size
    pub fn new(canvas: Size) -> Self {
        Self {
            fractures: Vec::new(),
            apexes: Vec::new(),
            canvas: sanitize_size(canvas),
        }
    }

    /// Current canvas extent (view size minus padding)
    pub fn canvas(&self) -> Size {
        self.canvas
    }

    /// Half the canvas height; the y of the track's center line
    pub fn half_height(&self) -> f64 {
        self.canvas.height / 2.0
    }

    /// Resize the canvas and re-derive every apex
    pub fn set_canvas(&mut self, canvas: Size) {
        let canvas = sanitize_size(canvas);
        if canvas == self.canvas {
            return;
        }
        tracing::debug!(
            "[Geometry] canvas {}x{} -> {}x{}",
            self.canvas.width,
            self.canvas.height,
            canvas.width,
            canvas.height
        );
        self.canvas = canvas;
        self.recompute();
    }

    /// Replace all fracture points and re-derive every apex
    ///
    /// Always succeeds. An empty sequence leaves an empty apex list and
    /// nothing will be drawn.
    pub fn set_fracture_data<I>(&mut self, points: I)
    where
        I: IntoIterator<Item = FracturePoint>,
    {
        self.fractures = points
            .into_iter()
            .map(|p| FracturePoint::new(p.x, p.y))
            .collect();
        self.recompute();
        tracing::debug!("[Geometry] fracture data set ({} points)", self.len());
    }

    /// The fracture points, in path order
    pub fn fracture_data(&self) -> &[FracturePoint] {
        &self.fractures
    }

    /// The derived apexes, in path order
    pub fn apexes(&self) -> &[Point] {
        &self.apexes
    }

    /// Apex at `index`, if any
    pub fn apex(&self, index: usize) -> Option<Point> {
        self.apexes.get(index).copied()
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.fractures.len()
    }

    /// Whether there are no points
    pub fn is_empty(&self) -> bool {
        self.fractures.is_empty()
    }

    /// Set one fracture point's normalized y and move its apex to match
    ///
    /// Out-of-range indices are ignored.
    pub fn set_fracture_y(&mut self, index: usize, value: f64) {
        let (Some(fracture), Some(apex)) = (self.fractures.get(index), self.apexes.get(index))
        else {
            return;
        };

        let fracture = fracture.with_y(value);
        let apex = Point::new(apex.x, self.apex_y(fracture.y));
        self.replace_pair(index, fracture, apex);
    }

    /// Normalized y of the fracture point at `index`, or 0 if out of range
    pub fn fracture_y(&self, index: usize) -> f64 {
        self.fractures.get(index).map_or(0.0, |p| p.y)
    }

    /// Vertices of the path filled up to `progress`
    ///
    /// Starts at the first apex and walks forward. Apexes at or left of
    /// `progress * width` are emitted as-is; the first apex beyond it is
    /// replaced by an interpolated endpoint on the cut line and the walk
    /// stops there. A zero-length tail is dropped, so progress 0 yields
    /// the first apex alone.
    pub fn apexes_for_progress(&self, progress: f64) -> Vec<Point> {
        let Some(&first) = self.apexes.first() else {
            return Vec::new();
        };

        let max_x = clamp_progress(progress) * self.canvas.width;
        let mut vertices = Vec::with_capacity(self.apexes.len());
        let mut start = first;
        vertices.push(start);

        for &apex in &self.apexes[1..] {
            if apex.x <= max_x {
                vertices.push(apex);
                start = apex;
                continue;
            }

            let end = Point::new(apex.x.min(max_x), interpolate_y(start, apex, max_x));
            if end != start {
                vertices.push(end);
            }
            break;
        }

        vertices
    }

    /// Horizontal grid step used by forward derivation (`width / count`)
    ///
    /// Returns 1 when the step would be zero so callers can divide by it.
    pub fn grid_step(&self) -> f64 {
        let step = grid_step(self.canvas.width, self.len());
        if step == 0.0 { 1.0 } else { step }
    }

    /// Pixel y for a normalized offset
    pub(crate) fn apex_y(&self, normalized: f64) -> f64 {
        let half = self.half_height();
        half + normalized * half
    }

    /// Normalized offset for a pixel y
    pub(crate) fn normalized_y(&self, apex_y: f64) -> f64 {
        let half = self.half_height();
        if half == 0.0 {
            return 0.0;
        }
        clamp_unit((apex_y - half) / half)
    }

    /// Overwrite the fracture/apex pair at `index` together
    pub(crate) fn replace_pair(&mut self, index: usize, fracture: FracturePoint, apex: Point) {
        if index >= self.len() {
            return;
        }
        self.fractures[index] = fracture;
        self.apexes[index] = apex;
    }

    /// Overwrite only the fracture weight at `index`, keeping its apex
    pub(crate) fn replace_weight(&mut self, index: usize, weight: f64) {
        if let Some(fracture) = self.fractures.get_mut(index) {
            fracture.x = weight;
        }
    }

    /// Insert a fracture point and re-derive all apexes
    pub(crate) fn insert_fracture(&mut self, index: usize, point: FracturePoint) {
        if index > self.len() {
            return;
        }
        self.fractures.insert(index, point);
        self.recompute();
    }

    /// Re-derive all apexes from the fracture points
    fn recompute(&mut self) {
        self.apexes = derive_apexes(&self.fractures, self.canvas);
    }
}

/// Derive absolute apexes from fracture points for a canvas
///
/// With `n` points and width `w`, the step is `w / n`. The first apex
/// sits at x = 0 and the last at x = w. Each interior apex is offset from
/// the previous one by `step * weight`, clamped to stay between the
/// previous apex and the right edge. Every y is
/// `half_height + fracture.y * half_height`.
pub fn derive_apexes(points: &[FracturePoint], canvas: Size) -> Vec<Point> {
    let count = points.len();
    if count == 0 {
        return Vec::new();
    }

    let width = canvas.width;
    let half = canvas.height / 2.0;
    let step = grid_step(width, count);
    let last = count - 1;

    let mut prev_x = 0.0;
    points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let x = if index == 0 {
                0.0
            } else if index == last {
                width
            } else {
                let weight = if point.x.is_finite() { point.x } else { 0.0 };
                (step * weight + prev_x).clamp(prev_x, width)
            };
            prev_x = x;
            Point::new(x, half + point.y * half)
        })
        .collect()
}

/// Y of the cut point on the segment `start -> end` at `max_x`
///
/// This is a weighted blend, not a straight linear interpolation. It is
/// reproduced exactly so the cut tooth looks the same as the full path.
pub fn interpolate_y(start: Point, end: Point, max_x: f64) -> f64 {
    if max_x >= end.x {
        return end.y;
    }

    let lambda = ((start.x - max_x) / (max_x - end.x)).abs();
    (start.y + end.y * lambda) / (1.0 + lambda)
}

/// Clamp a progress fraction to `[0, 1]`, mapping NaN to 0
pub(crate) fn clamp_progress(progress: f64) -> f64 {
    if progress.is_nan() {
        return 0.0;
    }
    progress.clamp(0.0, 1.0)
}

fn grid_step(width: f64, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    width / count as f64
}

fn sanitize_size(size: Size) -> Size {
    let clean = |v: f64| if v.is_finite() { v.max(0.0) } else { 0.0 };
    Size::new(clean(size.width), clean(size.height))
}
