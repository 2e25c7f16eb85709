// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: ease sequence generators
//!
//! Each function takes the length of the keyframe sequence it pairs with and
//! returns one ease per segment, `keyframes_count - 1` in total.

use super::shock::MIN_SHOCK_COUNT;
use super::{require_even, require_odd};
use crate::error::{MotionError, Result};
use crate::types::Ease;

fn assemble(head: Ease, pair: [Ease; 2], pairs: usize, tail: &[Ease]) -> Vec<Ease> {
    let mut ease = Vec::with_capacity(1 + pairs * 2 + tail.len());
    ease.push(head);
    for _ in 0..pairs {
        ease.extend_from_slice(&pair);
    }
    ease.extend_from_slice(tail);
    ease
}

/// Rise/fall pairs between the first and last segment of an odd bounce.
fn bounce_pairs(keyframes_count: usize) -> usize {
    (keyframes_count - 1) / 2 - 1
}

/// `start`, then `between` for every interior segment, then `end`.
pub fn uniform_ease(
    keyframes_count: usize,
    start: Ease,
    end: Ease,
    between: Ease,
) -> Result<Vec<Ease>> {
    if keyframes_count < 4 {
        return Err(MotionError::invalid(format!(
            "keyframes count must be at least 4, got {keyframes_count}"
        )));
    }
    let mut ease = vec![start];
    ease.extend(std::iter::repeat(between).take(keyframes_count - 3));
    ease.push(end);
    Ok(ease)
}

/// Eases for [`bounce_keyframes`](super::bounce_keyframes): `[start, (down, up)…, end]`.
pub fn bounce_ease(
    keyframes_count: usize,
    start: Ease,
    end: Ease,
    up: Ease,
    down: Ease,
) -> Result<Vec<Ease>> {
    require_odd(keyframes_count, 3, "bounce keyframes count")?;
    Ok(assemble(start, [down, up], bounce_pairs(keyframes_count), &[end]))
}

/// Eases for [`off_bounce_keyframes`](super::off_bounce_keyframes), linear at both ends.
pub fn off_bounce_ease(keyframes_count: usize, up: Ease, down: Ease) -> Result<Vec<Ease>> {
    require_odd(keyframes_count, 3, "off bounce keyframes count")?;
    Ok(assemble(
        Ease::LINEAR,
        [up, down],
        bounce_pairs(keyframes_count),
        &[Ease::LINEAR],
    ))
}

/// Eases for [`bounce_down_keyframes`](super::bounce_down_keyframes).
pub fn bounce_down_ease(
    keyframes_count: usize,
    start: Ease,
    end: Ease,
    up: Ease,
    down: Ease,
) -> Result<Vec<Ease>> {
    require_even(keyframes_count, 4, "bounce down keyframes count")?;
    Ok(assemble(start, [up, down], keyframes_count / 2 - 2, &[up, end]))
}

/// Eases for [`bounce_up_keyframes`](super::bounce_up_keyframes).
pub fn bounce_up_ease(
    keyframes_count: usize,
    start: Ease,
    end: Ease,
    up: Ease,
    down: Ease,
) -> Result<Vec<Ease>> {
    require_even(keyframes_count, 4, "bounce up keyframes count")?;
    Ok(assemble(start, [down, up], keyframes_count / 2 - 2, &[down, end]))
}

/// Eases for [`flat_bounce_down_keyframes`](super::flat_bounce_down_keyframes).
pub fn flat_bounce_down_ease(
    keyframes_count: usize,
    end: Ease,
    up: Ease,
    down: Ease,
) -> Result<Vec<Ease>> {
    require_odd(keyframes_count, 3, "flat bounce down keyframes count")?;
    Ok(assemble(
        Ease::LINEAR,
        [down, up],
        bounce_pairs(keyframes_count),
        &[end],
    ))
}

/// Eases for [`flat_bounce_up_keyframes`](super::flat_bounce_up_keyframes).
pub fn flat_bounce_up_ease(
    keyframes_count: usize,
    start: Ease,
    up: Ease,
    down: Ease,
) -> Result<Vec<Ease>> {
    require_odd(keyframes_count, 3, "flat bounce up keyframes count")?;
    Ok(assemble(
        start,
        [down, up],
        bounce_pairs(keyframes_count),
        &[Ease::LINEAR],
    ))
}

/// Eases for [`shock_bounce_keyframes`](super::shock_bounce_keyframes).
///
/// `bounce_keyframes_count` is the length of the plain bounce the shock
/// bounce was built from, not of the shock keyframes themselves.
pub fn shock_bounce_ease(
    bounce_keyframes_count: usize,
    up: Ease,
    shock_count: usize,
    shock_start: Ease,
    shock_end: Ease,
    shock_up: Ease,
    shock_down: Ease,
) -> Result<Vec<Ease>> {
    require_odd(bounce_keyframes_count, 3, "bounce keyframes count")?;
    require_even(shock_count, MIN_SHOCK_COUNT, "shock count")?;
    let ripple = bounce_down_ease(shock_count, shock_start, shock_end, shock_up, shock_down)?;
    let pairs = bounce_pairs(bounce_keyframes_count);
    let mut ease = Vec::with_capacity(2 + pairs * (ripple.len() + 1));
    ease.push(Ease::LINEAR);
    for _ in 0..pairs {
        ease.push(up);
        ease.extend_from_slice(&ripple);
    }
    ease.push(Ease::LINEAR);
    Ok(ease)
}
