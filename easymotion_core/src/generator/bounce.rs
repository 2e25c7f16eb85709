// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: bounce keyframe generators
//!
//! A bounce time sequence alternates contacts (even positions) with the
//! midpoints between them (odd positions). Keyframes rest at 0 on contacts
//! and peak on midpoints, each peak proportional to the airtime around it.

use super::{require_even, require_odd, times};
use crate::error::Result;
use crate::sequence;
use crate::types::CubicBezier;

/// Bounce breakpoints: `count` must be odd.
///
/// Samples `(count + 1) / 2` contacts from `curve` and inserts a midpoint
/// between each pair of them.
pub fn bounce_times(count: usize, curve: CubicBezier) -> Result<Vec<f64>> {
    require_odd(count, 3, "bounce times count")?;
    Ok(bounce_times_from_times(&times(count.div_ceil(2), curve)?))
}

/// Bounce breakpoints from an existing contact sequence.
pub fn bounce_times_from_times(times: &[f64]) -> Vec<f64> {
    sequence::insert_averages(times)
}

/// Bounce values for `bounce_times`, tallest peak equal to `to`.
///
/// Output has the same length as the input, with 0 at both ends.
pub fn bounce_keyframes(to: f64, bounce_times: &[f64]) -> Result<Vec<f64>> {
    require_odd(bounce_times.len(), 3, "bounce times length")?;
    let contacts = sequence::drop_odd_indices(bounce_times);
    let airtimes = sequence::differences(&contacts);
    let peaks = sequence::normalize_to(&airtimes, to)?;
    Ok(sequence::surround(&peaks, 0.0))
}

/// Bounce values with a flat lead-in: the first segment holds 0 and the
/// last peak is dropped so the length is unchanged.
pub fn off_bounce_keyframes(to: f64, bounce_times: &[f64]) -> Result<Vec<f64>> {
    let mut keyframes = bounce_keyframes(to, bounce_times)?;
    keyframes.insert(0, 0.0);
    keyframes.remove(keyframes.len() - 2);
    Ok(keyframes)
}

/// Breakpoints with every interior interval split in two: `n` becomes `2n - 3`.
pub fn dual_bounce_times(bounce_times: &[f64]) -> Result<Vec<f64>> {
    require_odd(bounce_times.len(), 3, "bounce times length")?;
    let interior = sequence::insert_averages(&bounce_times[1..bounce_times.len() - 1]);
    let mut out = Vec::with_capacity(interior.len() + 2);
    out.push(0.0);
    out.extend(interior);
    out.push(1.0);
    Ok(out)
}

/// Bounce values where every peak but the last plays twice.
///
/// Pairs with [`dual_bounce_times`] of the same `bounce_times`.
pub fn dual_bounce_keyframes(to: f64, bounce_times: &[f64]) -> Result<Vec<f64>> {
    let single = bounce_keyframes(to, bounce_times)?;
    let (pairs, end) = single.split_at(single.len() - 1);
    let last_pair = pairs.len() / 2 - 1;
    let mut out = Vec::with_capacity(single.len() * 2 - 3);
    for (i, pair) in pairs.chunks_exact(2).enumerate() {
        out.extend_from_slice(pair);
        if i < last_pair {
            out.extend_from_slice(pair);
        }
    }
    out.extend_from_slice(end);
    Ok(out)
}

/// Falling-only breakpoints: `count` must be even.
///
/// Drops the opening contact of a `count + 1` bounce and stretches the rest
/// back over `[0, 1]`.
pub fn bounce_down_times(count: usize, curve: CubicBezier) -> Result<Vec<f64>> {
    require_even(count, 2, "bounce down times count")?;
    let full = bounce_times(count + 1, curve)?;
    let rest = &full[1..];
    let start = rest[0];
    Ok(rest.iter().map(|v| (v - start) / (1.0 - start)).collect())
}

/// Falling-only values starting on the tallest peak and ending at 0.
pub fn bounce_down_keyframes(to: f64, bounce_down_times: &[f64]) -> Result<Vec<f64>> {
    require_even(bounce_down_times.len(), 2, "bounce down times length")?;
    let lead = bounce_down_times[1];
    let mut mirrored = Vec::with_capacity(bounce_down_times.len() + 1);
    mirrored.push(0.0);
    mirrored.extend(bounce_down_times.iter().map(|v| v + lead));
    let mut keyframes = bounce_keyframes(to, &mirrored)?;
    keyframes.remove(0);
    Ok(keyframes)
}

/// Rising-only breakpoints: `count` must be even.
///
/// Drops the closing contact of a `count + 1` bounce and rescales to end at 1.
pub fn bounce_up_times(count: usize, curve: CubicBezier) -> Result<Vec<f64>> {
    require_even(count, 2, "bounce up times count")?;
    let mut full = bounce_times(count + 1, curve)?;
    full.pop();
    let end = full[full.len() - 1];
    Ok(sequence::divide_scalar(&full, end))
}

/// Rising-only values starting at 0 and ending on the last peak.
pub fn bounce_up_keyframes(to: f64, bounce_up_times: &[f64]) -> Result<Vec<f64>> {
    require_even(bounce_up_times.len(), 2, "bounce up times length")?;
    let mirrored_end = 2.0 - bounce_up_times[bounce_up_times.len() - 2];
    let mut extended = bounce_up_times.to_vec();
    extended.push(mirrored_end);
    let mut keyframes = bounce_keyframes(to, &extended)?;
    keyframes.pop();
    Ok(keyframes)
}

/// Bounce values whose first segment is held flat at the first peak.
pub fn flat_bounce_down_keyframes(to: f64, bounce_times: &[f64]) -> Result<Vec<f64>> {
    let mut keyframes = bounce_keyframes(to, bounce_times)?;
    keyframes[0] = keyframes[1];
    Ok(keyframes)
}

/// Bounce values whose last segment is held flat at the last peak.
pub fn flat_bounce_up_keyframes(to: f64, bounce_times: &[f64]) -> Result<Vec<f64>> {
    let mut keyframes = bounce_keyframes(to, bounce_times)?;
    let n = keyframes.len();
    keyframes[n - 1] = keyframes[n - 2];
    Ok(keyframes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MotionError;

    const OUT_QUART: CubicBezier = CubicBezier::new(0.25, 1.0, 0.5, 1.0);

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn bounce_times_interleave_midpoints() {
        let bt = bounce_times(9, OUT_QUART).unwrap();
        let contacts = times(5, OUT_QUART).unwrap();
        assert_eq!(bt.len(), 9);
        assert_eq!(sequence::drop_odd_indices(&bt), contacts);
        assert!(close(bt[1], (contacts[0] + contacts[1]) / 2.0));
    }

    #[test]
    fn bounce_times_rejects_even() {
        assert!(matches!(
            bounce_times(10, OUT_QUART),
            Err(MotionError::InvalidArgument(_))
        ));
    }

    #[test]
    fn bounce_keyframes_shape() {
        let bt = bounce_times(9, OUT_QUART).unwrap();
        let kf = bounce_keyframes(-200.0, &bt).unwrap();
        assert_eq!(kf.len(), 9);
        assert_eq!(kf[0], 0.0);
        assert_eq!(kf[8], 0.0);
        for i in (0..9).step_by(2) {
            assert_eq!(kf[i], 0.0);
        }
        let min = kf.iter().copied().fold(f64::INFINITY, f64::min);
        assert!(close(min, -200.0));
    }

    #[test]
    fn bounce_keyframes_hand_computed() {
        let kf = bounce_keyframes(2.0, &[0.0, 0.25, 0.5, 0.625, 0.75, 0.875, 1.0]).unwrap();
        assert_eq!(kf, vec![0.0, 2.0, 0.0, 1.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn bounce_keyframes_rejects_flat_times() {
        let err = bounce_keyframes(1.0, &[0.5, 0.5, 0.5]).unwrap_err();
        assert!(matches!(err, MotionError::DegenerateInput(_)));
    }

    #[test]
    fn off_bounce_drops_last_peak() {
        let bt = [0.0, 0.25, 0.5, 0.625, 0.75, 0.875, 1.0];
        let kf = off_bounce_keyframes(2.0, &bt).unwrap();
        assert_eq!(kf, vec![0.0, 0.0, 2.0, 0.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn dual_bounce_lengths_match() {
        let bt = bounce_times(9, OUT_QUART).unwrap();
        let t = dual_bounce_times(&bt).unwrap();
        let kf = dual_bounce_keyframes(1.0, &bt).unwrap();
        assert_eq!(t.len(), 15);
        assert_eq!(kf.len(), t.len());
        assert_eq!(t[0], 0.0);
        assert_eq!(t[14], 1.0);
        assert_eq!(kf[1], kf[3]);
        assert_eq!(kf[kf.len() - 1], 0.0);
    }

    #[test]
    fn bounce_down_starts_on_peak() {
        let t = bounce_down_times(6, OUT_QUART).unwrap();
        assert_eq!(t.len(), 6);
        assert_eq!(t[0], 0.0);
        assert!(close(t[5], 1.0));
        let kf = bounce_down_keyframes(3.0, &t).unwrap();
        assert_eq!(kf.len(), 6);
        assert!(close(kf[0], 3.0));
        assert_eq!(kf[1], 0.0);
        assert_eq!(kf[5], 0.0);
    }

    #[test]
    fn bounce_up_ends_on_peak() {
        let t = bounce_up_times(6, OUT_QUART).unwrap();
        assert_eq!(t.len(), 6);
        assert_eq!(t[0], 0.0);
        assert_eq!(t[5], 1.0);
        let kf = bounce_up_keyframes(1.0, &t).unwrap();
        assert_eq!(kf.len(), 6);
        assert_eq!(kf[0], 0.0);
        assert!(kf[5] > 0.0);
    }

    #[test]
    fn down_and_up_reject_odd() {
        assert!(bounce_down_times(5, OUT_QUART).is_err());
        assert!(bounce_up_times(7, OUT_QUART).is_err());
        assert!(bounce_down_keyframes(1.0, &[0.0, 0.5, 1.0]).is_err());
        assert!(bounce_up_keyframes(1.0, &[0.0, 0.5, 1.0]).is_err());
    }

    #[test]
    fn flat_variants_copy_neighbour() {
        let bt = [0.0, 0.25, 0.5, 0.625, 0.75, 0.875, 1.0];
        let down = flat_bounce_down_keyframes(2.0, &bt).unwrap();
        assert_eq!(down[0], 2.0);
        assert_eq!(down[1], 2.0);
        let up = flat_bounce_up_keyframes(2.0, &bt).unwrap();
        assert_eq!(up[6], 1.0);
        assert_eq!(up[5], 1.0);
    }
}
