// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: easymotion core library
//!
//! Procedural keyframes for bounce-style emphasis motions: normalized time
//! breakpoints derived from a cubic Bézier, the values to hit at each of
//! them, and the easing of every segment in between.
//!
//! ```
//! use easymotion_core::curves::CurveName;
//! use easymotion_core::preset::Bounce;
//!
//! let bounce = Bounce::new(CurveName::EaseOutQuart.curve(), 20, -200.0, 1.5, 0.6).unwrap();
//! assert_eq!(bounce.times().len(), 41);
//! assert_eq!(bounce.y_ease().len(), 40);
//! ```

pub mod bezier;
pub mod curves;
pub mod error;
pub mod generator;
pub mod loader;
pub mod preset;
pub mod sequence;
pub mod timeline;
pub mod types;

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
pub mod wasm;

pub use error::{MotionError, Result};
pub use preset::{Bounce, EmphasisMotion, Motion, Property, ShockBounce};
pub use types::{CubicBezier, Ease, EaseName};
