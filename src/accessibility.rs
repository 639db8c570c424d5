// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Accessibility descriptor handed to the host's assistive-technology
//! bridge. Purely descriptive: nothing here feeds back into the view.

/// Role reported for the view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    ProgressIndicator,
}

/// Range value of the view
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeInfo {
    pub min: f64,
    pub max: f64,
    pub current: f64,
}

/// Everything an accessibility bridge needs to describe the view
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccessibilityInfo {
    pub role: Role,
    /// Platform class name, for bridges that key behavior off it
    pub class_name: &'static str,
    pub description: &'static str,
    pub range: RangeInfo,
}

impl AccessibilityInfo {
    pub const CLASS_NAME: &'static str = "android.widget.ProgressBar";
    pub const DESCRIPTION: &'static str = "ProgressBar";

    /// Descriptor for a progress fraction in `[0, 1]`
    pub fn for_progress(progress: f64) -> Self {
        Self {
            role: Role::ProgressIndicator,
            class_name: Self::CLASS_NAME,
            description: Self::DESCRIPTION,
            range: RangeInfo {
                min: 0.0,
                max: 1.0,
                current: progress,
            },
        }
    }
}
