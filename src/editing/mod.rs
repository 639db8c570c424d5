// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Editing model and interaction

mod apex_editor;
pub mod pointer;

pub use pointer::{
    PointerAction, PointerEvent, PointerState, PointerTracker, TrackUpdate, TrackingState,
    progress_for_pointer,
};
