// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Progress listener callbacks

/// Observer for progress and tracking changes
///
/// Every method has a no-op default, so implementors only override what
/// they care about. A progress view holds at most one listener and calls
/// it synchronously.
pub trait ProgressListener {
    /// Progress was stored; `from_user` is true while a pointer is tracking
    fn on_progress_changed(&mut self, _progress: f64, _from_user: bool) {}

    /// A pointer went down and tracking began
    fn on_tracking_started(&mut self, _progress: f64) {}

    /// The tracking pointer was released or cancelled
    fn on_tracking_stopped(&mut self, _progress: f64) {}
}
