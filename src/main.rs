// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Toothy demo: drives a progress view headlessly and logs what it draws

fn main() -> anyhow::Result<()> {
    toothy::run()
}
