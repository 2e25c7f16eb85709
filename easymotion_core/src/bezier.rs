// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: Bézier inversion
//!
//! Curves are pinned at (0,0) and (1,1), so only the two inner control
//! points contribute besides the `t³` end-anchor term.

use crate::error::{MotionError, Result};
use crate::types::CubicBezier;
use tracing::warn;

const X_TOLERANCE: f64 = 1e-5;
const SUBDIVISION_MAX_ITERATIONS: usize = 64;

impl CubicBezier {
    fn calc_bezier(t: f64, a1: f64, a2: f64) -> f64 {
        let mt = 1.0 - t;
        3.0 * mt * mt * t * a1 + 3.0 * mt * t * t * a2 + t * t * t
    }

    /// X coordinate at parameter `t`.
    pub fn x_at(&self, t: f64) -> f64 {
        Self::calc_bezier(t, self.x1, self.x2)
    }

    /// Y coordinate at parameter `t`.
    pub fn y_at(&self, t: f64) -> f64 {
        Self::calc_bezier(t, self.y1, self.y2)
    }

    /// Point on the curve at parameter `t`.
    pub fn xy_at(&self, t: f64) -> (f64, f64) {
        (self.x_at(t), self.y_at(t))
    }

    /// Check that x is monotonic in `t`, which bisection relies on.
    ///
    /// With both x control values inside `[0, 1]` the derivative of x stays
    /// non-negative over the whole parameter range.
    pub fn validate(&self) -> Result<()> {
        let inside = |v: f64| (0.0..=1.0).contains(&v);
        if inside(self.x1) && inside(self.x2) {
            Ok(())
        } else {
            Err(MotionError::invalid(format!(
                "curve x control values must lie in [0, 1], got x1={} x2={}",
                self.x1, self.x2
            )))
        }
    }

    fn binary_subdivide(&self, x: f64) -> f64 {
        let mut lower = 0.0;
        let mut upper = 1.0;
        let mut t = 0.5;
        let mut near_x = self.x_at(t);
        for _ in 0..SUBDIVISION_MAX_ITERATIONS {
            if (x - near_x).abs() <= X_TOLERANCE {
                return t;
            }
            if x > near_x {
                lower = t;
            } else {
                upper = t;
            }
            t = (lower + upper) / 2.0;
            near_x = self.x_at(t);
        }
        if (x - near_x).abs() > X_TOLERANCE {
            warn!(x, t, near_x, "bisection stopped before reaching tolerance");
        }
        t
    }

    /// Y value of the curve where its x equals `x`.
    ///
    /// `0` and `1` map to themselves without searching.
    pub fn y_from_x(&self, x: f64) -> f64 {
        if x == 0.0 || x == 1.0 {
            return x;
        }
        let t = self.binary_subdivide(x);
        self.y_at(t)
    }
}
