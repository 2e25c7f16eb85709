// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: named easing curves

use crate::types::{CubicBezier, Ease};
use serde::{Deserialize, Serialize};

/// Stock easing curves addressable by name.
///
/// The sine/quad/cubic/quart family follows easings.net; the rest are
/// hand-tuned shapes used by the bounce presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CurveName {
    EaseInSine,
    EaseOutSine,
    EaseInOutSine,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    EaseInQuart,
    EaseOutQuart,
    EaseInOutQuart,
    EaseInTiny,
    EaseOutTiny,
    EaseInRoundish,
    EaseOutRoundish,
    EaseInEarlyEnd,
    EaseInEarlierEnd,
    EaseOutLateStart,
    EaseOutLaterStart,
    /// Overshoots both ways; y is not monotonic.
    EaseRipple,
    EaseSudden,
    /// Overshoots above 1.
    EaseElastic,
}

impl CurveName {
    /// Every stock curve, in declaration order.
    pub const ALL: [CurveName; 23] = [
        Self::EaseInSine,
        Self::EaseOutSine,
        Self::EaseInOutSine,
        Self::EaseInQuad,
        Self::EaseOutQuad,
        Self::EaseInOutQuad,
        Self::EaseInCubic,
        Self::EaseOutCubic,
        Self::EaseInOutCubic,
        Self::EaseInQuart,
        Self::EaseOutQuart,
        Self::EaseInOutQuart,
        Self::EaseInTiny,
        Self::EaseOutTiny,
        Self::EaseInRoundish,
        Self::EaseOutRoundish,
        Self::EaseInEarlyEnd,
        Self::EaseInEarlierEnd,
        Self::EaseOutLateStart,
        Self::EaseOutLaterStart,
        Self::EaseRipple,
        Self::EaseSudden,
        Self::EaseElastic,
    ];

    /// Control points for this curve.
    pub const fn curve(self) -> CubicBezier {
        let [x1, y1, x2, y2] = match self {
            Self::EaseInSine => [0.12, 0.0, 0.39, 0.0],
            Self::EaseOutSine => [0.61, 1.0, 0.88, 1.0],
            Self::EaseInOutSine => [0.37, 0.0, 0.63, 1.0],
            Self::EaseInQuad => [0.11, 0.0, 0.5, 0.0],
            Self::EaseOutQuad => [0.5, 1.0, 0.89, 1.0],
            Self::EaseInOutQuad => [0.45, 0.0, 0.55, 1.0],
            Self::EaseInCubic => [0.32, 0.0, 0.67, 0.0],
            Self::EaseOutCubic => [0.33, 1.0, 0.68, 1.0],
            Self::EaseInOutCubic => [0.65, 0.0, 0.35, 1.0],
            Self::EaseInQuart => [0.5, 0.0, 0.75, 0.0],
            Self::EaseOutQuart => [0.25, 1.0, 0.5, 1.0],
            Self::EaseInOutQuart => [0.76, 0.0, 0.24, 1.0],
            Self::EaseInTiny => [0.5, 0.3, 0.7, 0.5],
            Self::EaseOutTiny => [0.3, 0.5, 0.5, 0.7],
            Self::EaseInRoundish => [0.4, 0.05, 0.75, 0.4],
            Self::EaseOutRoundish => [0.25, 0.6, 0.6, 0.95],
            Self::EaseInEarlyEnd => [0.7, 0.5, 0.3, 1.0],
            Self::EaseInEarlierEnd => [0.65, 0.5, 0.15, 1.0],
            Self::EaseOutLateStart => [0.65, 0.0, 0.35, 0.5],
            Self::EaseOutLaterStart => [0.85, 0.0, 0.35, 0.5],
            Self::EaseRipple => [1.0, 1.67, 0.0, -0.67],
            Self::EaseSudden => [0.0, 1.0, 0.0, 1.0],
            Self::EaseElastic => [0.0, 1.67, 1.0, 1.67],
        };
        CubicBezier::new(x1, y1, x2, y2)
    }

    /// This curve as a segment ease.
    pub const fn ease(self) -> Ease {
        Ease::Bezier(self.curve())
    }
}

impl From<CurveName> for CubicBezier {
    fn from(name: CurveName) -> Self {
        name.curve()
    }
}
