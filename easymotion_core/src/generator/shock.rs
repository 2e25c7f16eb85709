// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: shock bounce generators
//!
//! A shock bounce is an off bounce with a small falling ripple spliced in
//! after every peak.

use super::bounce::{bounce_down_keyframes, bounce_down_times, off_bounce_keyframes};
use super::{require_even, require_odd};
use crate::error::{MotionError, Result};
use crate::types::CubicBezier;
use smallvec::SmallVec;

/// Smallest ripple that still has one rise and one fall.
pub const MIN_SHOCK_COUNT: usize = 4;

/// Largest ripple a shock bounce accepts.
pub const MAX_SHOCK_COUNT: usize = 64;

fn check_shock(bounce_times: &[f64], shock_count: usize) -> Result<()> {
    require_odd(bounce_times.len(), 3, "bounce times length")?;
    require_even(shock_count, MIN_SHOCK_COUNT, "shock count")?;
    if shock_count > MAX_SHOCK_COUNT {
        return Err(MotionError::invalid(format!(
            "shock count must be at most {MAX_SHOCK_COUNT}, got {shock_count}"
        )));
    }
    Ok(())
}

/// Breakpoints of `bounce_times` with `shock_count - 2` ripple breakpoints
/// inserted between each even position and its successor.
pub fn shock_bounce_times(
    bounce_times: &[f64],
    shock_count: usize,
    shock_curve: CubicBezier,
) -> Result<Vec<f64>> {
    check_shock(bounce_times, shock_count)?;
    let down = bounce_down_times(shock_count, shock_curve)?;
    let ripple: SmallVec<[f64; 16]> = down[1..down.len() - 1].iter().copied().collect();

    let n = bounce_times.len();
    let mut out = vec![0.0, bounce_times[1]];
    for i in 2..n - 1 {
        let start = bounce_times[i];
        out.push(start);
        if i % 2 == 0 {
            let span = bounce_times[i + 1] - start;
            out.extend(ripple.iter().map(|r| start + r * span));
        }
    }
    out.push(1.0);
    Ok(out)
}

/// Off bounce values with a decaying ripple after every peak, matching
/// [`shock_bounce_times`] for the same arguments.
pub fn shock_bounce_keyframes(
    to: f64,
    bounce_times: &[f64],
    shock_count: usize,
    shock_curve: CubicBezier,
) -> Result<Vec<f64>> {
    check_shock(bounce_times, shock_count)?;
    let off = off_bounce_keyframes(to, bounce_times)?;
    let ripple_times = bounce_down_times(shock_count, shock_curve)?;

    let mut out = vec![0.0, 0.0];
    for i in 2..off.len() - 1 {
        let peak = off[i];
        out.push(peak);
        if i % 2 == 0 {
            let ripple = bounce_down_keyframes(peak, &ripple_times)?;
            out.extend_from_slice(&ripple[1..ripple.len() - 1]);
        }
    }
    out.push(0.0);
    Ok(out)
}
