// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: ordered numeric sequence operations
//!
//! Every function borrows its input and returns a fresh `Vec`.

use crate::error::{MotionError, Result};

/// Sum of all elements, `0.0` when empty.
pub fn sum(seq: &[f64]) -> f64 {
    seq.iter().sum()
}

/// Multiply every element by `k`.
pub fn scale(seq: &[f64], k: f64) -> Vec<f64> {
    seq.iter().map(|v| v * k).collect()
}

/// Add `k` to every element.
pub fn add_scalar(seq: &[f64], k: f64) -> Vec<f64> {
    seq.iter().map(|v| v + k).collect()
}

/// Subtract `k` from every element.
pub fn subtract_scalar(seq: &[f64], k: f64) -> Vec<f64> {
    seq.iter().map(|v| v - k).collect()
}

/// Divide every element by `k`. Division by zero yields IEEE infinities or NaN.
pub fn divide_scalar(seq: &[f64], k: f64) -> Vec<f64> {
    seq.iter().map(|v| v / k).collect()
}

/// Add one to every element, turning deltas around 0 into deltas around 1.
pub fn shift_up(seq: &[f64]) -> Vec<f64> {
    add_scalar(seq, 1.0)
}

/// Interleave the midpoint of each adjacent pair: `n` elements become `2n - 1`.
pub fn insert_averages(seq: &[f64]) -> Vec<f64> {
    let Some(last) = seq.last() else {
        return Vec::new();
    };
    let mut out = Vec::with_capacity(seq.len() * 2 - 1);
    for pair in seq.windows(2) {
        out.push(pair[0]);
        out.push((pair[0] + pair[1]) / 2.0);
    }
    out.push(*last);
    out
}

/// Keep the elements at even positions.
pub fn drop_odd_indices<T: Clone>(seq: &[T]) -> Vec<T> {
    seq.iter().step_by(2).cloned().collect()
}

/// Place `v` before every element and once more at the end: `n` becomes `2n + 1`.
pub fn surround<T: Clone>(seq: &[T], v: T) -> Vec<T> {
    let mut out = Vec::with_capacity(seq.len() * 2 + 1);
    for item in seq {
        out.push(v.clone());
        out.push(item.clone());
    }
    out.push(v);
    out
}

/// Consecutive differences `seq[i] - seq[i - 1]`.
pub fn differences(seq: &[f64]) -> Vec<f64> {
    seq.windows(2).map(|pair| pair[1] - pair[0]).collect()
}

/// Largest element, `None` when empty.
pub fn max(seq: &[f64]) -> Option<f64> {
    seq.iter().copied().reduce(f64::max)
}

/// Scale `seq` so its maximum becomes `to`.
///
/// Fails with [`MotionError::DegenerateInput`] when the maximum is zero,
/// non-finite, or the sequence is empty, and with
/// [`MotionError::InvalidArgument`] when `to` is not finite.
pub fn normalize_to(seq: &[f64], to: f64) -> Result<Vec<f64>> {
    if !to.is_finite() {
        return Err(MotionError::invalid(format!(
            "normalization target must be finite, got {to}"
        )));
    }
    match max(seq) {
        Some(m) if m != 0.0 && m.is_finite() => Ok(scale(seq, to / m)),
        Some(m) => Err(MotionError::degenerate(format!(
            "cannot normalize against a maximum of {m}"
        ))),
        None => Err(MotionError::degenerate("cannot normalize an empty sequence")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elementwise_ops() {
        let s = [1.0, 2.0, 4.0];
        assert_eq!(scale(&s, 2.0), vec![2.0, 4.0, 8.0]);
        assert_eq!(add_scalar(&s, 1.0), vec![2.0, 3.0, 5.0]);
        assert_eq!(subtract_scalar(&s, 1.0), vec![0.0, 1.0, 3.0]);
        assert_eq!(divide_scalar(&s, 2.0), vec![0.5, 1.0, 2.0]);
        assert_eq!(shift_up(&s), vec![2.0, 3.0, 5.0]);
        assert_eq!(sum(&s), 7.0);
    }

    #[test]
    fn divide_by_zero_is_ieee() {
        let out = divide_scalar(&[1.0, 0.0, -1.0], 0.0);
        assert_eq!(out[0], f64::INFINITY);
        assert!(out[1].is_nan());
        assert_eq!(out[2], f64::NEG_INFINITY);
    }

    #[test]
    fn insert_averages_interleaves_midpoints() {
        assert_eq!(
            insert_averages(&[0.0, 1.0, 3.0]),
            vec![0.0, 0.5, 1.0, 2.0, 3.0]
        );
        assert_eq!(insert_averages(&[7.0]), vec![7.0]);
        assert!(insert_averages(&[]).is_empty());
    }

    #[test]
    fn drop_odd_and_surround() {
        assert_eq!(drop_odd_indices(&[1, 2, 3, 4, 5]), vec![1, 3, 5]);
        assert_eq!(surround(&[1, 2], 0), vec![0, 1, 0, 2, 0]);
        assert_eq!(surround::<i32>(&[], 9), vec![9]);
    }

    #[test]
    fn differences_and_normalize() {
        assert_eq!(differences(&[0.0, 0.5, 2.0]), vec![0.5, 1.5]);
        assert_eq!(normalize_to(&[0.5, 1.0], -4.0).unwrap(), vec![-2.0, -4.0]);
    }

    #[test]
    fn normalize_rejects_degenerate() {
        assert!(matches!(
            normalize_to(&[0.0, 0.0], 1.0),
            Err(MotionError::DegenerateInput(_))
        ));
        assert!(matches!(
            normalize_to(&[], 1.0),
            Err(MotionError::DegenerateInput(_))
        ));
        assert!(normalize_to(&[f64::NAN, 1.0], 1.0).is_ok());
        assert!(matches!(
            normalize_to(&[1.0], f64::INFINITY),
            Err(MotionError::InvalidArgument(_))
        ));
    }
}
