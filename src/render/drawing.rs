// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Standalone drawing functions for the track, pointer marker and
//! builder overlay

use super::Painter;
use super::paint::ProgressPaints;
use crate::model::Geometry;
use crate::theme;
use kurbo::{Affine, BezPath, Circle, Insets, Line, Point, Shape};

/// Flattening tolerance for circles
const CURVE_TOLERANCE: f64 = 0.1;

/// Snapshot of everything needed to draw one frame
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub geometry: &'a Geometry,
    pub paints: &'a ProgressPaints,
    pub padding: Insets,
    pub progress: f64,
    pub builder_mode: bool,
    /// Tracked pointer x in view coordinates
    pub pointer_x: Option<f64>,
    /// Apex latched for dragging
    pub latched_apex: Option<usize>,
}

impl Frame<'_> {
    /// Translation from canvas-local to view coordinates
    fn canvas_transform(&self) -> Affine {
        Affine::translate((self.padding.x0, self.padding.y0))
    }
}

/// Polyline through the vertices filled up to `progress`
///
/// `None` when there is no data.
pub fn progress_path(geometry: &Geometry, progress: f64) -> Option<BezPath> {
    let vertices = geometry.apexes_for_progress(progress);
    let (first, rest) = vertices.split_first()?;

    let mut path = BezPath::new();
    path.move_to(*first);
    for vertex in rest {
        path.line_to(*vertex);
    }
    Some(path)
}

/// Draw a full frame: background path, then (outside builder mode) the
/// filled path and pointer marker, then (in builder mode) the overlay
pub fn paint_frame(painter: &mut impl Painter, frame: &Frame<'_>) {
    draw_progress(painter, frame, ProgressLayer::Background);

    if !frame.builder_mode {
        draw_progress(painter, frame, ProgressLayer::Foreground);
        draw_pointer(painter, frame);
    }

    draw_builder_overlay(painter, frame);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProgressLayer {
    Background,
    Foreground,
}

fn draw_progress(painter: &mut impl Painter, frame: &Frame<'_>, layer: ProgressLayer) {
    let (paint, progress) = match layer {
        ProgressLayer::Background => (&frame.paints.background, 1.0),
        ProgressLayer::Foreground => (&frame.paints.progress, frame.progress),
    };

    if frame.geometry.is_empty() || progress <= 0.0 {
        return;
    }

    let Some(path) = progress_path(frame.geometry, progress) else {
        return;
    };

    painter.stroke(&paint.stroke, frame.canvas_transform(), &paint.brush, &path);
}

fn draw_pointer(painter: &mut impl Painter, frame: &Frame<'_>) {
    if frame.builder_mode {
        return;
    }
    let Some(x) = frame.pointer_x else {
        return;
    };

    // The pointer x is already in view coordinates; only shift vertically
    let height = frame.geometry.canvas().height;
    let line = Line::new((x, 0.0), (x, height));
    let transform = Affine::translate((0.0, frame.padding.y0));
    let paint = &frame.paints.track;

    painter.stroke(&paint.stroke, transform, &paint.brush, &line.to_path(CURVE_TOLERANCE));
}

fn draw_builder_overlay(painter: &mut impl Painter, frame: &Frame<'_>) {
    if !frame.builder_mode {
        return;
    }

    let canvas = frame.geometry.canvas();
    let transform = frame.canvas_transform();
    let paint = &frame.paints.debug;
    let latched = frame.latched_apex.and_then(|index| frame.geometry.apex(index));

    // Frame, then the latched apex marker, then guide lines
    painter.stroke(
        &paint.stroke,
        transform,
        &paint.brush,
        &canvas.to_rect().to_path(CURVE_TOLERANCE),
    );

    if let Some(apex) = latched {
        let marker = Circle::new(apex, theme::builder::APEX_RADIUS);
        painter.fill(transform, &paint.brush, &marker.to_path(CURVE_TOLERANCE));
    }

    let mut stroke_line = |from: Point, to: Point| {
        let line = Line::new(from, to);
        painter.stroke(&paint.stroke, transform, &paint.brush, &line.to_path(CURVE_TOLERANCE));
    };

    match latched {
        Some(apex) => {
            stroke_line(Point::new(0.0, apex.y), Point::new(canvas.width, apex.y));
            stroke_line(Point::new(apex.x, 0.0), Point::new(apex.x, canvas.height));
        }
        None => {
            let center = frame.geometry.half_height();
            stroke_line(Point::new(0.0, center), Point::new(canvas.width, center));
            for apex in frame.geometry.apexes().iter().skip(1) {
                stroke_line(Point::new(apex.x, 0.0), Point::new(apex.x, canvas.height));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FracturePoint;
    use crate::render::{DisplayList, DrawCommand};
    use kurbo::{PathEl, Size};

    fn geometry() -> Geometry {
        let mut geometry = Geometry::new(Size::new(300.0, 100.0));
        geometry.set_fracture_data([(0.5, 0.5), (0.5, 0.0), (1.0, 1.0)].map(FracturePoint::from));
        geometry
    }

    fn frame<'a>(geometry: &'a Geometry, paints: &'a ProgressPaints) -> Frame<'a> {
        Frame {
            geometry,
            paints,
            padding: Insets::new(10.0, 5.0, 10.0, 5.0),
            progress: 0.3,
            builder_mode: false,
            pointer_x: None,
            latched_apex: None,
        }
    }

    fn points(path: &BezPath) -> Vec<Point> {
        path.elements()
            .iter()
            .filter_map(|el| match el {
                PathEl::MoveTo(p) | PathEl::LineTo(p) => Some(*p),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn progress_path_is_polyline() {
        let geometry = geometry();
        let path = progress_path(&geometry, 1.0).unwrap();
        assert_eq!(
            points(&path),
            vec![
                Point::new(0.0, 75.0),
                Point::new(50.0, 50.0),
                Point::new(300.0, 100.0)
            ]
        );
        assert!(matches!(path.elements()[0], PathEl::MoveTo(_)));
    }

    #[test]
    fn progress_path_empty_data() {
        let geometry = Geometry::new(Size::new(300.0, 100.0));
        assert!(progress_path(&geometry, 1.0).is_none());
    }

    #[test]
    fn draws_background_then_foreground_translated() {
        let geometry = geometry();
        let paints = ProgressPaints::default();
        let mut list = DisplayList::new();
        paint_frame(&mut list, &frame(&geometry, &paints));

        assert_eq!(list.len(), 2);
        let background = points(&list.commands()[0].transformed_shape());
        assert_eq!(background[0], Point::new(10.0, 80.0));
        assert_eq!(background[2], Point::new(310.0, 105.0));

        let foreground = points(&list.commands()[1].transformed_shape());
        assert_eq!(foreground.len(), 3);
        assert!((foreground[2].x - 100.0).abs() < 1e-9);
        assert_eq!(list.commands()[1].brush(), &paints.progress.brush);
    }

    #[test]
    fn zero_progress_skips_foreground() {
        let geometry = geometry();
        let paints = ProgressPaints::default();
        let mut list = DisplayList::new();
        paint_frame(
            &mut list,
            &Frame {
                progress: 0.0,
                ..frame(&geometry, &paints)
            },
        );
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn empty_data_draws_nothing() {
        let geometry = Geometry::new(Size::new(300.0, 100.0));
        let paints = ProgressPaints::default();
        let mut list = DisplayList::new();
        paint_frame(&mut list, &frame(&geometry, &paints));
        assert!(list.is_empty());
    }

    #[test]
    fn pointer_marker_spans_canvas_height() {
        let geometry = geometry();
        let paints = ProgressPaints::default();
        let mut list = DisplayList::new();
        paint_frame(
            &mut list,
            &Frame {
                pointer_x: Some(120.0),
                ..frame(&geometry, &paints)
            },
        );

        assert_eq!(list.len(), 3);
        let marker = &list.commands()[2];
        assert_eq!(
            points(&marker.transformed_shape()),
            vec![Point::new(120.0, 5.0), Point::new(120.0, 105.0)]
        );
        assert_eq!(marker.brush(), &paints.track.brush);
    }

    #[test]
    fn builder_mode_draws_overlay_instead_of_foreground() {
        let geometry = geometry();
        let paints = ProgressPaints::default();
        let mut list = DisplayList::new();
        paint_frame(
            &mut list,
            &Frame {
                builder_mode: true,
                pointer_x: Some(120.0),
                ..frame(&geometry, &paints)
            },
        );

        // background + frame + center line + 2 apex guides
        assert_eq!(list.len(), 5);
        assert!(
            list.commands()[1..]
                .iter()
                .all(|cmd| cmd.brush() == &paints.debug.brush)
        );
        assert!(
            list.commands()
                .iter()
                .all(|cmd| matches!(cmd, DrawCommand::Stroke { .. }))
        );
        let frame_bounds = list.commands()[1].transformed_shape().bounding_box();
        assert_eq!(frame_bounds, kurbo::Rect::new(10.0, 5.0, 310.0, 105.0));
        let center = points(&list.commands()[2].transformed_shape());
        assert_eq!(center, vec![Point::new(10.0, 55.0), Point::new(310.0, 55.0)]);
    }

    #[test]
    fn builder_mode_marks_latched_apex() {
        let geometry = geometry();
        let paints = ProgressPaints::default();
        let mut list = DisplayList::new();
        paint_frame(
            &mut list,
            &Frame {
                builder_mode: true,
                latched_apex: Some(1),
                ..frame(&geometry, &paints)
            },
        );

        // background + frame + marker + two crosshair lines
        assert_eq!(list.len(), 5);
        assert!(matches!(list.commands()[1], DrawCommand::Stroke { .. }));
        let DrawCommand::Fill { shape, .. } = &list.commands()[2] else {
            panic!("expected the apex marker to be filled");
        };
        let bounds = shape.bounding_box();
        assert!((bounds.center() - Point::new(50.0, 50.0)).hypot() < 1e-6);
        assert_eq!(
            points(&list.commands()[3].transformed_shape()),
            vec![Point::new(10.0, 55.0), Point::new(310.0, 55.0)]
        );
        assert_eq!(
            points(&list.commands()[4].transformed_shape()),
            vec![Point::new(60.0, 5.0), Point::new(60.0, 105.0)]
        );
    }
}
