// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: type definitions

use serde::{Deserialize, Serialize};

/// Cubic Bézier easing curve pinned at (0,0) and (1,1).
///
/// Serialized as the 4-number array `[x1, y1, x2, y2]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct CubicBezier {
    /// X of the first control point
    pub x1: f64,
    /// Y of the first control point
    pub y1: f64,
    /// X of the second control point
    pub x2: f64,
    /// Y of the second control point
    pub y2: f64,
}

impl CubicBezier {
    /// Identity curve.
    pub const LINEAR: Self = Self::new(0.0, 0.0, 1.0, 1.0);

    /// Create a curve from its two control points.
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

impl From<[f64; 4]> for CubicBezier {
    fn from([x1, y1, x2, y2]: [f64; 4]) -> Self {
        Self::new(x1, y1, x2, y2)
    }
}

impl From<CubicBezier> for [f64; 4] {
    fn from(c: CubicBezier) -> Self {
        [c.x1, c.y1, c.x2, c.y2]
    }
}

/// Named easings a renderer understands without control points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EaseName {
    /// Constant velocity
    Linear,
    /// Accelerate from rest
    EaseIn,
    /// Decelerate to rest
    EaseOut,
    /// Accelerate then decelerate
    EaseInOut,
}

impl EaseName {
    /// Control points a renderer uses for this name.
    pub const fn curve(self) -> CubicBezier {
        match self {
            Self::Linear => CubicBezier::LINEAR,
            Self::EaseIn => CubicBezier::new(0.42, 0.0, 1.0, 1.0),
            Self::EaseOut => CubicBezier::new(0.0, 0.0, 0.58, 1.0),
            Self::EaseInOut => CubicBezier::new(0.42, 0.0, 0.58, 1.0),
        }
    }
}

/// Easing applied to one segment between two consecutive keyframes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ease {
    /// Renderer-native named easing
    Named(EaseName),
    /// Explicit Bézier control points
    Bezier(CubicBezier),
}

impl Ease {
    /// Linear segment.
    pub const LINEAR: Self = Self::Named(EaseName::Linear);

    /// Control points equivalent to this ease.
    pub const fn curve(self) -> CubicBezier {
        match self {
            Self::Named(name) => name.curve(),
            Self::Bezier(curve) => curve,
        }
    }
}

impl From<CubicBezier> for Ease {
    fn from(curve: CubicBezier) -> Self {
        Self::Bezier(curve)
    }
}

impl From<EaseName> for Ease {
    fn from(name: EaseName) -> Self {
        Self::Named(name)
    }
}
