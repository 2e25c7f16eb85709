// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: zigzag generators

use super::{bounce_times, one_based, require_odd, MAX_TIMES_COUNT};
use crate::error::{MotionError, Result};
use crate::sequence;
use crate::types::CubicBezier;

/// Peak breakpoints of a `2 * count - 3` bounce, plus both ends.
pub fn zigzag_times(count: usize, curve: CubicBezier) -> Result<Vec<f64>> {
    if !(3..=MAX_TIMES_COUNT).contains(&count) {
        return Err(MotionError::invalid(format!(
            "zigzag count must be between 3 and {MAX_TIMES_COUNT}, got {count}"
        )));
    }
    let full = bounce_times(count * 2 - 3, curve)?;
    let last = full.len() - 1;
    Ok(full
        .iter()
        .enumerate()
        .filter(|(i, _)| *i == 0 || *i == last || i % 2 == 1)
        .map(|(_, v)| *v)
        .collect())
}

/// Rebuild bounce breakpoints from zigzag peaks by mirroring each
/// half-interval across its peak.
pub fn bounce_times_from_zigzag_times(zigzag_times: &[f64]) -> Result<Vec<f64>> {
    let n = zigzag_times.len();
    if n < 3 {
        return Err(MotionError::invalid(format!(
            "zigzag times length must be at least 3, got {n}"
        )));
    }
    let mut contacts = Vec::with_capacity(n - 3);
    let mut half = zigzag_times[1];
    for i in 1..n - 2 {
        let contact = zigzag_times[i] + half;
        contacts.push(contact);
        half = zigzag_times[i + 1] - contact;
    }

    let mut out = Vec::with_capacity(2 * n - 3);
    out.extend_from_slice(&zigzag_times[..2]);
    for (contact, peak) in contacts.iter().zip(&zigzag_times[2..]) {
        out.push(*contact);
        out.push(*peak);
    }
    out.push(zigzag_times[n - 1]);
    require_odd(out.len(), 3, "rebuilt bounce times length")?;
    Ok(out)
}

/// Alternating up/down values for `zigzag_times`, largest upswing equal to `to`.
pub fn zigzag_keyframes(to: f64, zigzag_times: &[f64]) -> Result<Vec<f64>> {
    let contacts = sequence::drop_odd_indices(&bounce_times_from_zigzag_times(zigzag_times)?);
    let swings: Vec<f64> = sequence::differences(&contacts)
        .into_iter()
        .enumerate()
        .map(|(i, d)| if i % 2 == 0 { d } else { -d })
        .collect();
    let swings = sequence::normalize_to(&swings, to)?;
    let mut out = Vec::with_capacity(swings.len() + 2);
    out.push(0.0);
    out.extend(swings);
    out.push(0.0);
    Ok(out)
}

/// [`zigzag_keyframes`] centred on 1.
pub fn scale_zigzag_keyframes(to: f64, zigzag_times: &[f64]) -> Result<Vec<f64>> {
    one_based(to, |to| zigzag_keyframes(to, zigzag_times))
}
