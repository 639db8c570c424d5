// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Single-pointer tracking: pointer events, the `Idle -> Tracking -> Idle`
//! state machine, and the pointer-to-progress mapping.

use crate::model::geometry::clamp_progress;
use kurbo::{Insets, Point};

/// What happened to the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    /// Pointer pressed
    Down,
    /// Pointer moved while pressed
    Move,
    /// Pointer released
    Up,
    /// Gesture cancelled by the host
    Cancel,
}

/// A pointer event in view coordinates (padding included)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub action: PointerAction,
    pub pos: Point,
}

impl PointerEvent {
    pub fn new(action: PointerAction, pos: Point) -> Self {
        Self { action, pos }
    }

    pub fn down(x: f64, y: f64) -> Self {
        Self::new(PointerAction::Down, Point::new(x, y))
    }

    pub fn moved(x: f64, y: f64) -> Self {
        Self::new(PointerAction::Move, Point::new(x, y))
    }

    pub fn up(x: f64, y: f64) -> Self {
        Self::new(PointerAction::Up, Point::new(x, y))
    }

    pub fn cancel() -> Self {
        Self::new(PointerAction::Cancel, Point::ZERO)
    }

    /// Whether this event starts or continues a gesture
    pub fn is_press(&self) -> bool {
        matches!(self.action, PointerAction::Down | PointerAction::Move)
    }
}

/// Tracker state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackingState {
    #[default]
    Idle,
    Tracking,
}

/// State that only exists while a pointer is down
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    /// Clamped pointer x in view coordinates
    pub pixel_x: f64,
    /// Apex latched for dragging (builder mode)
    pub nearest_apex: Option<usize>,
}

/// Result of feeding a press into the tracker
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackUpdate {
    /// True when this press moved the tracker from `Idle` to `Tracking`
    pub started: bool,
    /// Clamped pointer x in view coordinates
    pub pixel_x: f64,
    /// Progress fraction for that x
    pub progress: f64,
}

/// The `Idle -> Tracking -> Idle` pointer state machine
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointerTracker {
    pointer: Option<PointerState>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> TrackingState {
        if self.pointer.is_some() {
            TrackingState::Tracking
        } else {
            TrackingState::Idle
        }
    }

    pub fn is_tracking(&self) -> bool {
        self.pointer.is_some()
    }

    /// Pointer state, present only while tracking
    pub fn pointer(&self) -> Option<&PointerState> {
        self.pointer.as_ref()
    }

    /// Tracked pointer x in view coordinates
    pub fn pointer_x(&self) -> Option<f64> {
        self.pointer.map(|p| p.pixel_x)
    }

    /// Apex currently latched for dragging
    pub fn nearest_apex(&self) -> Option<usize> {
        self.pointer.and_then(|p| p.nearest_apex)
    }

    /// Latch (or clear) the apex being dragged. Ignored while idle.
    pub fn latch_apex(&mut self, index: Option<usize>) {
        if let Some(pointer) = &mut self.pointer {
            pointer.nearest_apex = index;
        }
    }

    /// Feed a down/move at view x `x` into the tracker
    ///
    /// Enters `Tracking` if idle, stores the clamped pointer x and returns
    /// the progress it maps to. An already latched apex is kept.
    pub fn track(&mut self, x: f64, padding: Insets, canvas_width: f64) -> TrackUpdate {
        let (pixel_x, progress) = progress_for_pointer(x, padding, canvas_width);
        let started = self.pointer.is_none();

        let nearest_apex = self.nearest_apex();
        self.pointer = Some(PointerState {
            pixel_x,
            nearest_apex,
        });

        if started {
            tracing::debug!("[PointerTracker] Idle -> Tracking at x={}", pixel_x);
        }

        TrackUpdate {
            started,
            pixel_x,
            progress,
        }
    }

    /// Return to `Idle`, dropping the pointer position and apex latch
    ///
    /// Returns true if the tracker was tracking.
    pub fn stop(&mut self) -> bool {
        let was_tracking = self.pointer.take().is_some();
        if was_tracking {
            tracing::debug!("[PointerTracker] Tracking -> Idle");
        }
        was_tracking
    }
}

/// Map a view-space pointer x to `(clamped_x, progress)`
///
/// The pointer may overscroll into the end padding but not past it, and
/// never left of the start padding. Progress is the offset from the start
/// padding over the canvas width, clamped to `[0, 1]`. A zero-width
/// canvas maps everything to 0.
pub fn progress_for_pointer(x: f64, padding: Insets, canvas_width: f64) -> (f64, f64) {
    let start = padding.x0;
    let upper = canvas_width + padding.x1;

    let clamped = if x.is_nan() {
        start
    } else if x >= upper {
        upper
    } else if x <= start {
        start
    } else {
        x
    };

    if canvas_width <= 0.0 {
        return (clamped, 0.0);
    }

    let progress = ((clamped - start) / canvas_width).min(1.0);
    (clamped, clamp_progress(progress))
}
