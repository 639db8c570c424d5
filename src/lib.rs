// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Toothy: an interactive faceted progress indicator built on kurbo

use anyhow::Context;
use kurbo::Point;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::filter::Directive;

pub mod accessibility;
pub mod animation;
pub mod config;
pub mod editing;
pub mod listener;
pub mod model;
pub mod progress;
pub mod render;
pub mod settings;
pub mod theme;

pub use config::{CapStyle, ConfigError, ToothyConfig};
pub use editing::{PointerAction, PointerEvent, TrackingState};
pub use listener::ProgressListener;
pub use model::{FracturePoint, Geometry};
pub use progress::ToothyProgress;
pub use render::{DisplayList, Painter};

/// Demo view size in pixels
const DEMO_WIDTH: f64 = 360.0;
const DEMO_HEIGHT: f64 = 96.0;
/// Host frame interval used to drive the animation
const FRAME: Duration = Duration::from_millis(16);

/// Entry point for the headless demo
pub fn run() -> anyhow::Result<()> {
    // Initialize tracing subscriber (can be controlled via RUST_LOG env var)
    let directive: Directive = settings::logging::DEFAULT_DIRECTIVE
        .parse()
        .context("invalid default log directive")?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(directive),
        )
        .init();

    let config = load_config()?;
    let mut view = ToothyProgress::new(config);
    view.set_listener(LogListener);
    view.set_size(DEMO_WIDTH, DEMO_HEIGHT);
    log_frame("initial", &view);

    simulate_drag(&mut view);
    log_frame("after drag", &view);

    animate_to(&mut view, 0.8);
    log_frame("after animation", &view);

    simulate_builder_edit(&mut view);
    log_frame("after builder edit", &view);

    Ok(())
}

/// Load the style config named on the command line, if any
fn load_config() -> anyhow::Result<ToothyConfig> {
    let Some(arg) = std::env::args().nth(1) else {
        tracing::info!("No config given, using default style");
        return Ok(ToothyConfig::default());
    };

    let path = PathBuf::from(arg);
    ToothyConfig::load(&path)
        .with_context(|| format!("failed to load style from {}", path.display()))
}

fn simulate_drag(view: &mut ToothyProgress) {
    let start = view.padding().x0;
    let y = DEMO_HEIGHT / 2.0;

    view.on_pointer_event(PointerEvent::down(start + 20.0, y));
    for step in 1..=8 {
        view.on_pointer_event(PointerEvent::moved(start + 20.0 + step as f64 * 25.0, y));
    }
    view.on_pointer_event(PointerEvent::up(start + 220.0, y));
}

fn animate_to(view: &mut ToothyProgress, target: f64) {
    view.set_progress(target, true);
    let mut frames = 0;
    while view.tick(FRAME) {
        frames += 1;
    }
    tracing::info!("Animation settled after {} frames", frames + 1);
}

fn simulate_builder_edit(view: &mut ToothyProgress) {
    view.set_builder_mode(true);
    let pad = view.padding();

    let Some(apex) = view.apexes().get(2).copied() else {
        return;
    };
    let grab = Point::new(apex.x + pad.x0, apex.y + pad.y0);
    view.on_pointer_event(PointerEvent::down(grab.x, grab.y));
    view.on_pointer_event(PointerEvent::moved(grab.x + 6.0, pad.y0));
    view.on_pointer_event(PointerEvent::up(grab.x + 6.0, pad.y0));

    view.push_apex();
    for (index, point) in view.fracture_data().iter().enumerate() {
        tracing::debug!("fracture {}: ({:.3}, {:.3})", index, point.x, point.y);
    }
    view.set_builder_mode(false);
}

fn log_frame(label: &str, view: &ToothyProgress) {
    let mut list = DisplayList::new();
    view.paint(&mut list);

    let vertices = view.apexes_for_progress();
    tracing::info!(
        "{}: progress {:.3}, {} draw calls, {} filled vertices",
        label,
        view.progress(),
        list.len(),
        vertices.len()
    );
    for vertex in vertices {
        tracing::debug!("  ({:.1}, {:.1})", vertex.x, vertex.y);
    }
}

/// Listener that forwards every callback to the log
struct LogListener;

impl ProgressListener for LogListener {
    fn on_progress_changed(&mut self, progress: f64, from_user: bool) {
        tracing::debug!("progress {:.3} (from_user={})", progress, from_user);
    }

    fn on_tracking_started(&mut self, progress: f64) {
        tracing::info!("tracking started at {:.3}", progress);
    }

    fn on_tracking_stopped(&mut self, progress: f64) {
        tracing::info!("tracking stopped at {:.3}", progress);
    }
}
