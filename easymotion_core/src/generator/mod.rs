// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: time, keyframe and ease sequence generators
//!
//! Keyframe generators are zero-based: they produce deltas around 0 scaled so
//! the extremum equals `to`. Wrap any of them in [`one_based`] to get deltas
//! around 1, as scale channels need.

mod bounce;
pub mod ease;
mod shock;
mod zigzag;

pub use bounce::{
    bounce_down_keyframes, bounce_down_times, bounce_keyframes, bounce_times,
    bounce_times_from_times, bounce_up_keyframes, bounce_up_times, dual_bounce_keyframes,
    dual_bounce_times, flat_bounce_down_keyframes, flat_bounce_up_keyframes,
    off_bounce_keyframes,
};
pub use shock::{shock_bounce_keyframes, shock_bounce_times, MAX_SHOCK_COUNT, MIN_SHOCK_COUNT};
pub use zigzag::{
    bounce_times_from_zigzag_times, scale_zigzag_keyframes, zigzag_keyframes, zigzag_times,
};

use crate::error::{MotionError, Result};
use crate::sequence;
use crate::types::CubicBezier;

/// Smallest time sequence: just the two ends.
pub const MIN_TIMES_COUNT: usize = 2;

/// Largest time sequence any generator will allocate.
pub const MAX_TIMES_COUNT: usize = 1 << 20;

/// Time breakpoints sampling `curve`'s output at `count` evenly spaced inputs.
///
/// The result starts at exactly 0 and ends at exactly 1.
pub fn times(count: usize, curve: CubicBezier) -> Result<Vec<f64>> {
    if count < MIN_TIMES_COUNT {
        return Err(MotionError::invalid(format!(
            "count too small: times needs at least {MIN_TIMES_COUNT}, got {count}"
        )));
    }
    if count > MAX_TIMES_COUNT {
        return Err(MotionError::invalid(format!(
            "count too large: times allows at most {MAX_TIMES_COUNT}, got {count}"
        )));
    }
    curve.validate()?;
    let last = (count - 1) as f64;
    let mut out = Vec::with_capacity(count);
    out.push(0.0);
    for i in 1..count - 1 {
        out.push(curve.y_from_x(i as f64 / last));
    }
    out.push(1.0);
    Ok(out)
}

pub(crate) fn require_odd(count: usize, min: usize, what: &str) -> Result<()> {
    if count % 2 == 0 {
        return Err(MotionError::invalid(format!("{what} must be odd, got {count}")));
    }
    if count < min {
        return Err(MotionError::invalid(format!(
            "{what} must be at least {min}, got {count}"
        )));
    }
    Ok(())
}

pub(crate) fn require_even(count: usize, min: usize, what: &str) -> Result<()> {
    if count % 2 != 0 {
        return Err(MotionError::invalid(format!("{what} must be even, got {count}")));
    }
    if count < min {
        return Err(MotionError::invalid(format!(
            "{what} must be at least {min}, got {count}"
        )));
    }
    Ok(())
}

/// Keyframes proportional to the breakpoints themselves: `times × to`.
pub fn transform_keyframes(to: f64, times: &[f64]) -> Vec<f64> {
    sequence::scale(times, to)
}

/// Evaluate a zero-based generator for a target centred on 1.
///
/// The generator runs with `to - 1` and its output is shifted up by one, so
/// `one_based(1.5, f)` peaks at 1.5 and rests at 1.
pub fn one_based<F>(to: f64, generator: F) -> Result<Vec<f64>>
where
    F: FnOnce(f64) -> Result<Vec<f64>>,
{
    Ok(sequence::shift_up(&generator(to - 1.0)?))
}
