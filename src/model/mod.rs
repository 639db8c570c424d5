// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Geometry model for the toothy track

pub mod fracture;
pub mod geometry;

pub use fracture::FracturePoint;
pub use geometry::{Geometry, derive_apexes, interpolate_y};
