// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Builder-mode apex editing for Geometry: hit testing, constrained
//! dragging with reverse derivation, and random apex insertion.

use crate::model::{FracturePoint, Geometry};
use kurbo::Point;
use rand::Rng;

impl Geometry {
    /// Horizontal hit-test radius around the pointer (`width / count`)
    ///
    /// `None` when there are no apexes.
    pub fn search_radius(&self) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        Some(self.canvas().width / self.len() as f64)
    }

    /// Index of the apex closest to a canvas-local pointer position
    ///
    /// Only apexes whose x lies within `search_radius` of the pointer x are
    /// considered. Among those the smallest Euclidean distance wins; ties
    /// go to the lowest index.
    pub fn find_nearest_apex(&self, pointer: Point) -> Option<usize> {
        let radius = self.search_radius()?;
        let window = (pointer.x - radius)..=(pointer.x + radius);

        let mut best: Option<(usize, f64)> = None;
        for (index, apex) in self.apexes().iter().enumerate() {
            if !window.contains(&apex.x) {
                continue;
            }

            let distance = (pointer - *apex).hypot();
            match best {
                Some((_, best_distance)) if distance >= best_distance => {}
                _ => best = Some((index, distance)),
            }
        }

        if let Some((index, distance)) = best {
            tracing::debug!(
                "[find_nearest_apex] pointer=({}, {}) -> apex {} at distance {}",
                pointer.x,
                pointer.y,
                index,
                distance
            );
        }

        best.map(|(index, _)| index)
    }

    /// Drag the apex at `index` toward a canvas-local position
    ///
    /// x is kept between the neighboring apexes (the first and last apexes
    /// stay pinned to their edges) and y within the canvas. The fracture
    /// point is then re-derived from the new apex so that re-deriving all
    /// apexes reproduces the dragged position. The following interior
    /// point's weight is re-derived as well, so it does not shift.
    ///
    /// Returns the new apex position, or `None` for an out-of-range index.
    pub fn drag_apex(&mut self, index: usize, target: Point) -> Option<Point> {
        self.apex(index)?;

        let canvas = self.canvas();
        let last = self.len() - 1;
        let prev = index.checked_sub(1).and_then(|i| self.apex(i));
        let next = self.apex(index + 1);

        let lower = prev.map_or(0.0, |p| p.x);
        let upper = next.map_or(canvas.width, |p| p.x);
        let x = if index == 0 {
            0.0
        } else if index == last {
            canvas.width
        } else {
            target.x.max(lower).min(upper)
        };
        let y = target.y.max(0.0).min(canvas.height);

        let apex = Point::new(x, y);
        let weight = self.reverse_weight(apex, prev, next);
        let fracture = FracturePoint::new(weight, self.normalized_y(y));
        self.replace_pair(index, fracture, apex);

        if let Some(next) = next
            && index + 1 < last
        {
            self.replace_weight(index + 1, (next.x - x) / self.grid_step());
        }

        tracing::debug!(
            "[drag_apex] apex {} -> ({}, {}), fracture ({}, {})",
            index,
            x,
            y,
            fracture.x,
            fracture.y
        );

        Some(apex)
    }

    /// Insert a randomly shaped apex at `position` (`len()` appends)
    ///
    /// Returns false, leaving the data untouched, when `position` is past
    /// the end.
    pub fn insert_apex(&mut self, position: usize) -> bool {
        self.insert_apex_with(position, &mut rand::thread_rng())
    }

    /// `insert_apex` with a caller-provided random source
    ///
    /// The new point's y is uniform in `[-1, 1)` and its weight is `1 - y`.
    pub fn insert_apex_with<R: Rng>(&mut self, position: usize, rng: &mut R) -> bool {
        if position > self.len() {
            return false;
        }

        let y: f64 = rng.gen_range(-1.0..1.0);
        self.insert_fracture(position, FracturePoint::new(1.0 - y, y));

        tracing::debug!("[insert_apex] inserted at {} (y = {})", position, y);
        true
    }

    /// Fracture weight that reproduces `apex` under forward derivation
    fn reverse_weight(&self, apex: Point, prev: Option<Point>, next: Option<Point>) -> f64 {
        let (mut step, base) = match (prev, next) {
            (Some(prev), _) => (self.grid_step(), prev.x),
            // The first point's weight is never read back; its base is
            // fixed at 1.
            (None, Some(next)) => (next.x - apex.x, 1.0),
            (None, None) => (1.0, 0.0),
        };

        if step == 0.0 {
            step = 1.0;
        }

        (apex.x - base) / step
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{FracturePoint, Geometry, derive_apexes};
    use kurbo::{Point, Size};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn assert_close(a: Point, b: Point) {
        assert!((a - b).hypot() < 1e-9, "{a:?} != {b:?}");
    }

    fn five_point_model() -> Geometry {
        let mut geometry = Geometry::new(Size::new(500.0, 100.0));
        geometry.set_fracture_data(
            [(0.0, 0.0), (1.0, -0.5), (1.0, 0.5), (1.0, -1.0), (0.0, 1.0)]
                .map(FracturePoint::from),
        );
        geometry
    }

    #[test]
    fn nearest_apex_inside_window() {
        let geometry = five_point_model();
        // Apexes at x = 0, 100, 200, 300, 500; radius 100
        assert_eq!(geometry.find_nearest_apex(Point::new(110.0, 30.0)), Some(1));
        assert_eq!(geometry.find_nearest_apex(Point::new(190.0, 70.0)), Some(2));
        assert_eq!(geometry.find_nearest_apex(Point::new(480.0, 90.0)), Some(4));
    }

    #[test]
    fn nearest_apex_ignores_far_apexes() {
        let mut geometry = Geometry::new(Size::new(1000.0, 100.0));
        geometry.set_fracture_data(
            [(0.0, 0.0), (0.5, 0.0), (0.0, 0.0), (0.0, 0.0)].map(FracturePoint::from),
        );
        // Apexes at x = 0, 125, 125, 1000; radius 250
        assert_eq!(geometry.find_nearest_apex(Point::new(600.0, 50.0)), None);
        assert_eq!(geometry.find_nearest_apex(Point::new(-400.0, 50.0)), None);
    }

    #[test]
    fn nearest_apex_tie_goes_to_lowest_index() {
        let mut geometry = Geometry::new(Size::new(1000.0, 100.0));
        geometry.set_fracture_data(
            [(0.0, 0.0), (0.5, 0.0), (0.0, 0.0), (0.0, 0.0)].map(FracturePoint::from),
        );
        // Apexes 1 and 2 coincide
        assert_eq!(geometry.find_nearest_apex(Point::new(130.0, 50.0)), Some(1));
    }

    #[test]
    fn nearest_apex_prefers_euclidean_distance() {
        let geometry = five_point_model();
        // Apex 1 is at (100, 25), apex 2 at (200, 75)
        assert_eq!(geometry.find_nearest_apex(Point::new(160.0, 75.0)), Some(2));
        assert_eq!(geometry.find_nearest_apex(Point::new(140.0, 25.0)), Some(1));
    }

    #[test]
    fn nearest_apex_on_empty_data() {
        let geometry = Geometry::new(Size::new(100.0, 100.0));
        assert_eq!(geometry.search_radius(), None);
        assert_eq!(geometry.find_nearest_apex(Point::new(0.0, 0.0)), None);
    }

    #[test]
    fn drag_clamps_between_neighbors() {
        let mut geometry = five_point_model();

        let moved = geometry.drag_apex(2, Point::new(900.0, -40.0)).unwrap();
        assert_eq!(moved, Point::new(300.0, 0.0));

        let moved = geometry.drag_apex(2, Point::new(-900.0, 400.0)).unwrap();
        assert_eq!(moved, Point::new(100.0, 100.0));
    }

    #[test]
    fn drag_keeps_edges_pinned() {
        let mut geometry = five_point_model();

        let first = geometry.drag_apex(0, Point::new(80.0, 10.0)).unwrap();
        assert_eq!(first, Point::new(0.0, 10.0));

        let last = geometry.drag_apex(4, Point::new(20.0, 90.0)).unwrap();
        assert_eq!(last, Point::new(500.0, 90.0));

        assert!((geometry.fracture_y(0) - -0.8).abs() < 1e-12);
        assert!((geometry.fracture_y(4) - 0.8).abs() < 1e-12);
    }

    #[test]
    fn drag_round_trips_through_derivation() {
        let mut geometry = five_point_model();
        let targets = [
            (1, Point::new(42.0, 13.0)),
            (2, Point::new(250.0, 66.0)),
            (3, Point::new(260.5, 99.0)),
            (3, Point::new(499.0, 1.0)),
            (1, Point::new(0.0, 50.0)),
        ];

        for (index, target) in targets {
            let moved = geometry.drag_apex(index, target).unwrap();
            let derived = derive_apexes(geometry.fracture_data(), geometry.canvas());
            assert_eq!(derived.len(), geometry.apexes().len());
            for (cached, fresh) in geometry.apexes().iter().zip(&derived) {
                assert_close(*cached, *fresh);
            }
            assert_close(derived[index], moved);
        }
    }

    #[test]
    fn drag_survives_resize() {
        let mut geometry = five_point_model();
        geometry.drag_apex(2, Point::new(250.0, 50.0));

        geometry.set_canvas(Size::new(1000.0, 200.0));
        assert_close(geometry.apex(2).unwrap(), Point::new(500.0, 100.0));
        assert_close(geometry.apex(3).unwrap(), Point::new(600.0, 0.0));
    }

    #[test]
    fn drag_with_zero_step_is_safe() {
        let mut geometry = five_point_model();
        geometry.set_canvas(Size::new(0.0, 100.0));
        let moved = geometry.drag_apex(2, Point::new(10.0, 50.0)).unwrap();
        assert_eq!(moved, Point::new(0.0, 50.0));
        assert!(geometry.fracture_data().iter().all(|p| p.x.is_finite()));
    }

    #[test]
    fn drag_single_point() {
        let mut geometry = Geometry::new(Size::new(100.0, 100.0));
        geometry.set_fracture_data([FracturePoint::new(0.3, 0.0)]);
        let moved = geometry.drag_apex(0, Point::new(70.0, 75.0)).unwrap();
        assert_eq!(moved, Point::new(0.0, 75.0));
        assert_eq!(geometry.fracture_data()[0], FracturePoint::new(0.0, 0.5));
    }

    #[test]
    fn drag_out_of_range_is_noop() {
        let mut geometry = five_point_model();
        let before = geometry.clone();
        assert_eq!(geometry.drag_apex(5, Point::new(1.0, 1.0)), None);
        assert_eq!(geometry, before);
    }

    #[test]
    fn insert_couples_weight_to_offset() {
        let mut geometry = five_point_model();
        let mut rng = StdRng::seed_from_u64(7);

        assert!(geometry.insert_apex_with(2, &mut rng));
        assert_eq!(geometry.len(), 6);
        assert_eq!(geometry.apexes().len(), 6);

        let inserted = geometry.fracture_data()[2];
        assert!((-1.0..1.0).contains(&inserted.y));
        assert!((inserted.x - (1.0 - inserted.y)).abs() < 1e-12);
        assert_eq!(geometry.fracture_data()[3], FracturePoint::new(1.0, 0.5));
    }

    #[test]
    fn insert_appends_and_rejects_past_end() {
        let mut geometry = Geometry::new(Size::new(100.0, 100.0));
        let mut rng = StdRng::seed_from_u64(1);

        assert!(geometry.insert_apex_with(0, &mut rng));
        assert!(geometry.insert_apex_with(1, &mut rng));
        assert!(!geometry.insert_apex_with(5, &mut rng));
        assert_eq!(geometry.len(), 2);
        assert_eq!(geometry.apex(1).unwrap().x, 100.0);

        assert!(geometry.insert_apex(geometry.len()));
        assert_eq!(geometry.len(), 3);
    }
}
