// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: ready-made emphasis motions
//!
//! Each preset derives every channel once at construction and is immutable
//! afterwards. All channels of a preset share the same total duration.

use crate::curves::CurveName;
use crate::error::{MotionError, Result};
use crate::generator::{self, ease, one_based};
use crate::timeline::Channel;
use crate::types::{CubicBezier, Ease};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use tracing::debug;

/// Property animated by one channel of a preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    /// Vertical translation
    Y,
    /// Horizontal scale factor
    ScaleX,
    /// Vertical scale factor
    ScaleY,
}

/// A motion that draws attention to an element in place.
pub trait EmphasisMotion {
    /// Vertical transform origin, as a fraction of the element height.
    fn origin_y(&self) -> f64 {
        1.0
    }

    /// Channel driving `property`.
    fn channel(&self, property: Property) -> &Channel;
}

/// Fewest bounces a preset accepts. The squash channels drop the last peak,
/// so anything shorter loses the requested scale.
pub const MIN_BOUNCES: usize = 3;

/// Most bounces a preset will generate.
pub const MAX_BOUNCES: usize = 4096;

fn bounce_count(kind: &str, count: usize) -> Result<usize> {
    if !(MIN_BOUNCES..=MAX_BOUNCES).contains(&count) {
        return Err(MotionError::invalid(format!(
            "{kind} count must be between {MIN_BOUNCES} and {MAX_BOUNCES}, got {count}"
        )));
    }
    Ok(1 + count * 2)
}

fn check_scales(kind: &str, scale_x: f64, scale_y: f64) -> Result<()> {
    if !scale_x.is_finite() || !scale_y.is_finite() {
        return Err(MotionError::invalid(format!(
            "{kind} scales must be finite, got ({scale_x}, {scale_y})"
        )));
    }
    if scale_x < 1.0 {
        return Err(MotionError::invalid(format!(
            "{kind} scale x must be at least 1, got {scale_x}"
        )));
    }
    if scale_y > 1.0 {
        return Err(MotionError::invalid(format!(
            "{kind} scale y must be at most 1, got {scale_y}"
        )));
    }
    Ok(())
}

/// Vertical channel shared by both presets.
fn bounce_y(y: f64, bounce_times: &[f64]) -> Result<Channel> {
    let keyframes = generator::bounce_keyframes(y, bounce_times)?;
    let y_ease = ease::bounce_ease(
        keyframes.len(),
        CurveName::EaseOutLateStart.ease(),
        CurveName::EaseInEarlyEnd.ease(),
        CurveName::EaseOutLateStart.ease(),
        CurveName::EaseInEarlyEnd.ease(),
    )?;
    Channel::new(bounce_times.to_vec(), keyframes, y_ease)
}

/// Bouncing translation with squash and stretch on every impact.
#[derive(Debug, Clone, PartialEq)]
pub struct Bounce {
    y: Channel,
    scale_x: Channel,
    scale_y: Channel,
}

impl Bounce {
    /// Build `count` bounces whose contacts follow `curve`.
    ///
    /// `y` is the height of the tallest bounce; `scale_x` (at least 1) and
    /// `scale_y` (at most 1) are the squash factors at the hardest impact.
    pub fn new(
        curve: CubicBezier,
        count: usize,
        y: f64,
        scale_x: f64,
        scale_y: f64,
    ) -> Result<Self> {
        check_scales("bounce", scale_x, scale_y)?;
        let times = generator::bounce_times(bounce_count("bounce", count)?, curve)?;
        let y = bounce_y(y, &times)?;
        let scale_x = Self::squash(scale_x, &times)?;
        let scale_y = Self::squash(scale_y, &times)?;
        debug!(count, breakpoints = times.len(), "built bounce");
        Ok(Self {
            y,
            scale_x,
            scale_y,
        })
    }

    fn squash(to: f64, times: &[f64]) -> Result<Channel> {
        let keyframes = one_based(to, |to| generator::off_bounce_keyframes(to, times))?;
        let squash_ease = ease::off_bounce_ease(
            keyframes.len(),
            CurveName::EaseInSine.ease(),
            CurveName::EaseOutSine.ease(),
        )?;
        Channel::new(times.to_vec(), keyframes, squash_ease)
    }

    /// Breakpoints shared by every channel.
    pub fn times(&self) -> &[f64] {
        self.y.times()
    }

    /// Vertical translation keyframes.
    pub fn y_keyframes(&self) -> &[f64] {
        self.y.keyframes()
    }

    /// Vertical translation eases.
    pub fn y_ease(&self) -> &[Ease] {
        self.y.ease()
    }

    /// Horizontal scale keyframes.
    pub fn scale_x_keyframes(&self) -> &[f64] {
        self.scale_x.keyframes()
    }

    /// Horizontal scale eases.
    pub fn scale_x_ease(&self) -> &[Ease] {
        self.scale_x.ease()
    }

    /// Vertical scale keyframes.
    pub fn scale_y_keyframes(&self) -> &[f64] {
        self.scale_y.keyframes()
    }

    /// Vertical scale eases.
    pub fn scale_y_ease(&self) -> &[Ease] {
        self.scale_y.ease()
    }
}

impl EmphasisMotion for Bounce {
    fn channel(&self, property: Property) -> &Channel {
        match property {
            Property::Y => &self.y,
            Property::ScaleX => &self.scale_x,
            Property::ScaleY => &self.scale_y,
        }
    }
}

impl Serialize for Bounce {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Bounce", 8)?;
        state.serialize_field("originY", &self.origin_y())?;
        state.serialize_field("times", self.times())?;
        state.serialize_field("yKeyframes", self.y_keyframes())?;
        state.serialize_field("yEase", self.y_ease())?;
        state.serialize_field("scaleXKeyframes", self.scale_x_keyframes())?;
        state.serialize_field("scaleXEase", self.scale_x_ease())?;
        state.serialize_field("scaleYKeyframes", self.scale_y_keyframes())?;
        state.serialize_field("scaleYEase", self.scale_y_ease())?;
        state.end()
    }
}

/// Bounce whose squash rings with a fast ripple after every impact.
#[derive(Debug, Clone, PartialEq)]
pub struct ShockBounce {
    y: Channel,
    scale_x: Channel,
    scale_y: Channel,
}

impl ShockBounce {
    /// Ripple timing curve.
    pub const SHOCK_CURVE: CurveName = CurveName::EaseOutLaterStart;

    /// Build `count` bounces with a `shock_count` ripple (even, at least 4)
    /// after each impact.
    pub fn new(
        curve: CubicBezier,
        count: usize,
        y: f64,
        scale_x: f64,
        scale_y: f64,
        shock_count: usize,
    ) -> Result<Self> {
        check_scales("shock bounce", scale_x, scale_y)?;
        let bounce_times = generator::bounce_times(bounce_count("shock bounce", count)?, curve)?;
        let y = bounce_y(y, &bounce_times)?;
        let shock_times =
            generator::shock_bounce_times(&bounce_times, shock_count, Self::SHOCK_CURVE.curve())?;
        let scale_x = Self::squash(scale_x, &bounce_times, &shock_times, shock_count)?;
        let scale_y = Self::squash(scale_y, &bounce_times, &shock_times, shock_count)?;
        debug!(
            count,
            shock_count,
            breakpoints = bounce_times.len(),
            shock_breakpoints = shock_times.len(),
            "built shock bounce"
        );
        Ok(Self {
            y,
            scale_x,
            scale_y,
        })
    }

    fn squash(
        to: f64,
        bounce_times: &[f64],
        shock_times: &[f64],
        shock_count: usize,
    ) -> Result<Channel> {
        let keyframes = one_based(to, |to| {
            generator::shock_bounce_keyframes(
                to,
                bounce_times,
                shock_count,
                Self::SHOCK_CURVE.curve(),
            )
        })?;
        let squash_ease = ease::shock_bounce_ease(
            bounce_times.len(),
            CurveName::EaseInTiny.ease(),
            shock_count,
            CurveName::EaseOutSine.ease(),
            CurveName::EaseInSine.ease(),
            CurveName::EaseOutSine.ease(),
            CurveName::EaseInSine.ease(),
        )?;
        Channel::new(shock_times.to_vec(), keyframes, squash_ease)
    }

    /// Breakpoints of the vertical channel.
    pub fn bounce_times(&self) -> &[f64] {
        self.y.times()
    }

    /// Breakpoints of both scale channels.
    pub fn shock_bounce_times(&self) -> &[f64] {
        self.scale_x.times()
    }

    /// Vertical translation keyframes.
    pub fn y_keyframes(&self) -> &[f64] {
        self.y.keyframes()
    }

    /// Vertical translation eases.
    pub fn y_ease(&self) -> &[Ease] {
        self.y.ease()
    }

    /// Horizontal scale keyframes.
    pub fn scale_x_keyframes(&self) -> &[f64] {
        self.scale_x.keyframes()
    }

    /// Horizontal scale eases.
    pub fn scale_x_ease(&self) -> &[Ease] {
        self.scale_x.ease()
    }

    /// Vertical scale keyframes.
    pub fn scale_y_keyframes(&self) -> &[f64] {
        self.scale_y.keyframes()
    }

    /// Vertical scale eases.
    pub fn scale_y_ease(&self) -> &[Ease] {
        self.scale_y.ease()
    }
}

impl EmphasisMotion for ShockBounce {
    fn channel(&self, property: Property) -> &Channel {
        match property {
            Property::Y => &self.y,
            Property::ScaleX => &self.scale_x,
            Property::ScaleY => &self.scale_y,
        }
    }
}

impl Serialize for ShockBounce {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ShockBounce", 9)?;
        state.serialize_field("originY", &self.origin_y())?;
        state.serialize_field("bounceTimes", self.bounce_times())?;
        state.serialize_field("yKeyframes", self.y_keyframes())?;
        state.serialize_field("yEase", self.y_ease())?;
        state.serialize_field("shockBounceTimes", self.shock_bounce_times())?;
        state.serialize_field("scaleXKeyframes", self.scale_x_keyframes())?;
        state.serialize_field("scaleXEase", self.scale_x_ease())?;
        state.serialize_field("scaleYKeyframes", self.scale_y_keyframes())?;
        state.serialize_field("scaleYEase", self.scale_y_ease())?;
        state.end()
    }
}

/// Either preset, as produced by a motion sheet.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Motion {
    /// See [`Bounce`]
    Bounce(Bounce),
    /// See [`ShockBounce`]
    ShockBounce(ShockBounce),
}

impl EmphasisMotion for Motion {
    fn origin_y(&self) -> f64 {
        match self {
            Self::Bounce(m) => m.origin_y(),
            Self::ShockBounce(m) => m.origin_y(),
        }
    }

    fn channel(&self, property: Property) -> &Channel {
        match self {
            Self::Bounce(m) => m.channel(property),
            Self::ShockBounce(m) => m.channel(property),
        }
    }
}
