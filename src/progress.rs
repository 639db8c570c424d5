// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! The toothy progress component.
//!
//! `ToothyProgress` owns the geometry model, the pointer tracker, the
//! progress animation and the listener slot. The host feeds it a size,
//! pointer events and clock ticks, and asks it to paint. Whenever the
//! visible state changes the component raises a redraw request that the
//! host collects with `take_redraw_request`.

use crate::accessibility::AccessibilityInfo;
use crate::animation::ProgressDriver;
use crate::config::ToothyConfig;
use crate::editing::{PointerAction, PointerEvent, PointerTracker, TrackingState};
use crate::listener::ProgressListener;
use crate::model::geometry::clamp_progress;
use crate::model::{FracturePoint, Geometry};
use crate::render::{Frame, Painter, ProgressPaints, paint_frame};
use crate::settings;
use kurbo::{Insets, Point, Size};
use std::fmt;
use std::time::Duration;

/// Interactive faceted progress indicator
pub struct ToothyProgress {
    geometry: Geometry,
    tracker: PointerTracker,
    driver: Option<ProgressDriver>,
    listener: Option<Box<dyn ProgressListener>>,
    config: ToothyConfig,
    paints: ProgressPaints,
    progress: f64,
    /// Full view size, padding included
    view_size: Size,
    needs_redraw: bool,
}

impl fmt::Debug for ToothyProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToothyProgress")
            .field("progress", &self.progress)
            .field("view_size", &self.view_size)
            .field("tracking", &self.tracker.state())
            .field("animating", &self.driver.is_some())
            .field("points", &self.geometry.len())
            .field("has_listener", &self.listener.is_some())
            .finish_non_exhaustive()
    }
}

impl Default for ToothyProgress {
    fn default() -> Self {
        Self::new(ToothyConfig::default())
    }
}

impl ToothyProgress {
    /// Create a component with the default track shape
    pub fn new(config: ToothyConfig) -> Self {
        let mut geometry = Geometry::new(Size::ZERO);
        geometry.set_fracture_data(
            settings::shape::DEFAULT_FRACTURE_DATA
                .iter()
                .copied()
                .map(FracturePoint::from),
        );

        tracing::info!(
            "[ToothyProgress] created (builder_mode={}, enabled={})",
            config.builder_mode,
            config.enabled
        );

        Self {
            geometry,
            tracker: PointerTracker::new(),
            driver: None,
            listener: None,
            paints: ProgressPaints::from_config(&config),
            progress: clamp_progress(config.initial_progress),
            config,
            view_size: Size::ZERO,
            needs_redraw: true,
        }
    }

    // ===== Style =====

    pub fn config(&self) -> &ToothyConfig {
        &self.config
    }

    /// Replace the style; progress and shape are kept
    pub fn set_style(&mut self, config: ToothyConfig) {
        self.paints = ProgressPaints::from_config(&config);
        let previous = std::mem::replace(&mut self.config, config);

        // Mode changes go through their setters, which clear latches and
        // stop drags
        let builder_mode =
            std::mem::replace(&mut self.config.builder_mode, previous.builder_mode);
        let enabled = std::mem::replace(&mut self.config.enabled, previous.enabled);
        self.set_builder_mode(builder_mode);
        self.set_enabled(enabled);
        self.update_canvas();
    }

    pub fn set_listener(&mut self, listener: impl ProgressListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    // ===== Layout =====

    /// Set the full view size; the canvas is this minus the padding
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.view_size = Size::new(width, height);
        self.update_canvas();
    }

    pub fn set_padding(&mut self, padding: Insets) {
        self.config.padding = padding;
        self.update_canvas();
    }

    pub fn padding(&self) -> Insets {
        self.config.padding
    }

    /// Drawing area: view size minus padding, never negative
    pub fn canvas_size(&self) -> Size {
        self.geometry.canvas()
    }

    fn update_canvas(&mut self) {
        let pad = self.config.padding;
        let canvas = Size::new(
            self.view_size.width - pad.x0 - pad.x1,
            self.view_size.height - pad.y0 - pad.y1,
        );
        self.geometry.set_canvas(canvas);
        self.invalidate();
    }

    // ===== Modes =====

    pub fn is_builder_mode(&self) -> bool {
        self.config.builder_mode
    }

    /// Toggle apex editing. Leaving builder mode drops any apex latch.
    pub fn set_builder_mode(&mut self, builder_mode: bool) {
        if self.config.builder_mode == builder_mode {
            return;
        }
        tracing::info!("[ToothyProgress] builder mode {}", builder_mode);
        self.config.builder_mode = builder_mode;
        if !builder_mode {
            self.tracker.latch_apex(None);
        }
        self.invalidate();
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Enable or disable pointer input. Disabling stops any active drag.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.config.enabled == enabled {
            return;
        }
        self.config.enabled = enabled;
        if !enabled {
            self.stop_tracking();
        }
    }

    // ===== Progress =====

    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Set progress from code
    ///
    /// Ignored while a pointer is tracking. Animated changes replace any
    /// running animation; immediate changes cancel it.
    pub fn set_progress(&mut self, value: f64, animated: bool) {
        if self.tracker.is_tracking() {
            tracing::debug!(
                "[ToothyProgress] set_progress({}) ignored while tracking",
                value
            );
            return;
        }

        let value = clamp_progress(value);
        if animated {
            self.driver = Some(ProgressDriver::new(self.progress, value));
            self.invalidate();
        } else {
            self.driver = None;
            self.store_progress(value);
        }
    }

    pub fn is_animating(&self) -> bool {
        self.driver.is_some()
    }

    /// Advance the progress animation by `dt`
    ///
    /// Returns true while the animation is still running. While tracking,
    /// the animation keeps time but its values are dropped.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let Some(driver) = &mut self.driver else {
            return false;
        };

        let value = driver.tick(dt);
        let finished = driver.is_finished();
        if finished {
            self.driver = None;
        }

        if !self.tracker.is_tracking() {
            self.store_progress(value);
        }

        !finished
    }

    /// Clamp, store, notify and invalidate
    fn store_progress(&mut self, value: f64) {
        self.progress = clamp_progress(value);
        let from_user = self.tracker.is_tracking();
        if let Some(listener) = self.listener.as_mut() {
            listener.on_progress_changed(self.progress, from_user);
        }
        self.invalidate();
    }

    // ===== Pointer input =====

    pub fn tracking_state(&self) -> TrackingState {
        self.tracker.state()
    }

    pub fn is_tracking(&self) -> bool {
        self.tracker.is_tracking()
    }

    /// Tracked pointer x in view coordinates
    pub fn pointer_x(&self) -> Option<f64> {
        self.tracker.pointer_x()
    }

    /// Apex latched for dragging in builder mode
    pub fn latched_apex(&self) -> Option<usize> {
        self.tracker.nearest_apex()
    }

    /// Handle a pointer event in view coordinates
    ///
    /// Returns false when the component is disabled and the event was not
    /// consumed.
    pub fn on_pointer_event(&mut self, event: PointerEvent) -> bool {
        if !self.config.enabled {
            return false;
        }

        match event.action {
            PointerAction::Down | PointerAction::Move => {
                let latched = self
                    .tracker
                    .nearest_apex()
                    .filter(|_| self.config.builder_mode);
                match latched {
                    Some(index) => self.drag_latched_apex(index, event.pos),
                    None => self.track_pointer(event.pos),
                }
            }
            PointerAction::Up | PointerAction::Cancel => self.stop_tracking(),
        }

        true
    }

    fn track_pointer(&mut self, pos: Point) {
        let pad = self.config.padding;
        let canvas = self.geometry.canvas();

        let was_tracking = self.tracker.is_tracking();
        if !was_tracking && let Some(listener) = self.listener.as_mut() {
            listener.on_tracking_started(self.progress);
        }

        let update = self.tracker.track(pos.x, pad, canvas.width);
        self.store_progress(update.progress);

        if self.config.builder_mode {
            let local = Point::new(update.pixel_x - pad.x0, pos.y - pad.y0);
            let nearest = self.geometry.find_nearest_apex(local);
            self.tracker.latch_apex(nearest);
        }
    }

    fn drag_latched_apex(&mut self, index: usize, pos: Point) {
        let pad = self.config.padding;
        let local = Point::new(pos.x - pad.x0, pos.y - pad.y0);
        if self.geometry.drag_apex(index, local).is_none() {
            self.tracker.latch_apex(None);
        }
        self.invalidate();
    }

    fn stop_tracking(&mut self) {
        if self.tracker.stop()
            && let Some(listener) = self.listener.as_mut()
        {
            listener.on_tracking_stopped(self.progress);
        }
        self.invalidate();
    }

    // ===== Shape =====

    /// Replace the whole shape
    pub fn set_fracture_data<I>(&mut self, points: I)
    where
        I: IntoIterator<Item = FracturePoint>,
    {
        self.geometry.set_fracture_data(points);
        self.tracker.latch_apex(None);
        self.invalidate();
    }

    /// Replace the whole shape from `(weight, y)` pairs
    pub fn set_fracture_data_pairs<I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        self.set_fracture_data(pairs.into_iter().map(FracturePoint::from));
    }

    pub fn fracture_data(&self) -> &[FracturePoint] {
        self.geometry.fracture_data()
    }

    /// Apexes in canvas-local coordinates
    pub fn apexes(&self) -> &[Point] {
        self.geometry.apexes()
    }

    pub fn set_fracture_y(&mut self, index: usize, value: f64) {
        self.geometry.set_fracture_y(index, value);
        self.invalidate();
    }

    pub fn fracture_y(&self, index: usize) -> f64 {
        self.geometry.fracture_y(index)
    }

    /// Insert a random apex at `position`; false if past the end
    pub fn insert_apex(&mut self, position: usize) -> bool {
        let inserted = self.geometry.insert_apex(position);
        if inserted {
            self.tracker.latch_apex(None);
            self.invalidate();
        }
        inserted
    }

    /// Append a random apex
    pub fn push_apex(&mut self) -> bool {
        self.insert_apex(self.geometry.len())
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Vertices of the filled path at the current progress
    pub fn apexes_for_progress(&self) -> Vec<Point> {
        self.geometry.apexes_for_progress(self.progress)
    }

    // ===== Output =====

    pub fn accessibility_info(&self) -> AccessibilityInfo {
        AccessibilityInfo::for_progress(self.progress)
    }

    /// Draw the current state
    pub fn paint(&self, painter: &mut impl Painter) {
        let frame = Frame {
            geometry: &self.geometry,
            paints: &self.paints,
            padding: self.config.padding,
            progress: self.progress,
            builder_mode: self.config.builder_mode,
            pointer_x: self.tracker.pointer_x(),
            latched_apex: self.tracker.nearest_apex(),
        };
        paint_frame(painter, &frame);
    }

    /// Whether a redraw was requested since the last call; clears the flag
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    fn invalidate(&mut self) {
        self.needs_redraw = true;
    }
}
