// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: motion sheet loading

pub mod json;

pub use json::{CurveSpec, MotionSheet, MotionSpec};
