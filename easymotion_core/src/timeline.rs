// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: channel sampling
//!
//! A [`Channel`] is the `{times, keyframes, ease}` triple a renderer plays for
//! one animated property. [`Animator`] interpolates it the way such a renderer
//! would, which is how the generated sequences are checked end to end.

use crate::error::{MotionError, Result};
use crate::types::Ease;
use serde::Serialize;

impl Ease {
    /// Map linear progress `x` in `0..=1` through this ease.
    pub fn value(&self, x: f64) -> f64 {
        let curve = self.curve();
        if (curve.x1 - curve.y1).abs() < f64::EPSILON && (curve.x2 - curve.y2).abs() < f64::EPSILON
        {
            return x;
        }
        curve.y_from_x(x)
    }
}

/// One interpolation step between two consecutive keyframes.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Start progress inclusive
    pub start: f64,
    /// End progress exclusive
    pub end: f64,
    /// Value at `start`
    pub start_v: f64,
    /// Value at `end`
    pub end_v: f64,
    /// Easing applied between the two
    pub ease: Ease,
}

impl Segment {
    /// Sample the interpolated value at overall progress `progress`.
    pub fn sample(&self, progress: f64) -> f64 {
        if progress <= self.start {
            return self.start_v;
        }
        if progress >= self.end {
            return self.end_v;
        }
        let local = (progress - self.start) / (self.end - self.start);
        let eased = self.ease.value(local);
        self.start_v + (self.end_v - self.start_v) * eased
    }
}

/// Ordered [`Segment`]s covering progress `0..=1`.
#[derive(Debug, Clone, Default)]
pub struct Animator {
    /// Ordered list of segments
    pub segments: Vec<Segment>,
}

impl Animator {
    /// Sample at normalized progress, holding the end values outside `0..=1`.
    pub fn value(&self, progress: f64) -> f64 {
        let (Some(first), Some(last)) = (self.segments.first(), self.segments.last()) else {
            return 0.0;
        };
        if progress <= first.start {
            return first.start_v;
        }
        if progress >= last.end {
            return last.end_v;
        }
        self.segments
            .iter()
            .find(|seg| progress >= seg.start && progress < seg.end)
            .map_or(last.end_v, |seg| seg.sample(progress))
    }

    /// Sample at `elapsed` seconds into an animation lasting `duration` seconds.
    pub fn value_at(&self, elapsed: f64, duration: f64) -> f64 {
        if duration <= 0.0 {
            return self.value(1.0);
        }
        self.value(elapsed / duration)
    }
}

/// Times, keyframes and per-segment eases for one property.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Channel {
    times: Vec<f64>,
    keyframes: Vec<f64>,
    ease: Vec<Ease>,
}

impl Channel {
    /// Bundle a triple, checking that there is one time per keyframe and
    /// one ease per segment.
    pub fn new(times: Vec<f64>, keyframes: Vec<f64>, ease: Vec<Ease>) -> Result<Self> {
        if keyframes.len() < 2 {
            return Err(MotionError::invalid(format!(
                "a channel needs at least 2 keyframes, got {}",
                keyframes.len()
            )));
        }
        if times.len() != keyframes.len() {
            return Err(MotionError::invalid(format!(
                "{} times for {} keyframes",
                times.len(),
                keyframes.len()
            )));
        }
        if ease.len() != keyframes.len() - 1 {
            return Err(MotionError::invalid(format!(
                "{} eases for {} segments",
                ease.len(),
                keyframes.len() - 1
            )));
        }
        Ok(Self {
            times,
            keyframes,
            ease,
        })
    }

    /// Normalized breakpoints.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Value at each breakpoint.
    pub fn keyframes(&self) -> &[f64] {
        &self.keyframes
    }

    /// Ease of each segment.
    pub fn ease(&self) -> &[Ease] {
        &self.ease
    }

    /// Build a sampler for this channel.
    pub fn animator(&self) -> Animator {
        let segments = self
            .ease
            .iter()
            .enumerate()
            .map(|(i, ease)| Segment {
                start: self.times[i],
                end: self.times[i + 1],
                start_v: self.keyframes[i],
                end_v: self.keyframes[i + 1],
                ease: *ease,
            })
            .collect();
        Animator { segments }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CubicBezier, EaseName};

    fn in_out() -> Ease {
        Ease::Bezier(CubicBezier::new(0.42, 0.0, 0.58, 1.0))
    }

    #[test]
    fn segment_sample() {
        let seg = Segment {
            start: 0.0,
            end: 1.0,
            start_v: 0.0,
            end_v: 1.0,
            ease: in_out(),
        };
        assert!((seg.sample(0.25) - 0.129162).abs() < 0.0001);
    }

    #[test]
    fn linear_ease_is_exact() {
        assert_eq!(Ease::LINEAR.value(0.3), 0.3);
        assert_eq!(Ease::Named(EaseName::Linear).value(0.7), 0.7);
    }

    #[test]
    fn animator_value() {
        let channel = Channel::new(
            vec![0.0, 0.5, 1.0],
            vec![0.0, 10.0, 0.0],
            vec![Ease::LINEAR, Ease::LINEAR],
        )
        .unwrap();
        let anim = channel.animator();
        assert_eq!(anim.segments.len(), 2);
        assert_eq!(anim.value(0.25), 5.0);
        assert_eq!(anim.value(0.5), 10.0);
        assert_eq!(anim.value(0.75), 5.0);
        assert_eq!(anim.value(-1.0), 0.0);
        assert_eq!(anim.value(2.0), 0.0);
        assert_eq!(anim.value_at(1.25, 5.0), 5.0);
    }

    #[test]
    fn channel_rejects_mismatched_lengths() {
        assert!(Channel::new(vec![0.0, 1.0], vec![0.0, 1.0, 2.0], vec![Ease::LINEAR]).is_err());
        assert!(Channel::new(vec![0.0, 1.0], vec![0.0, 1.0], vec![]).is_err());
        assert!(Channel::new(vec![0.0], vec![0.0], vec![]).is_err());
    }

    #[test]
    fn empty_animator_is_zero() {
        assert_eq!(Animator::default().value(0.5), 0.0);
    }
}
