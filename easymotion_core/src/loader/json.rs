// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: JSON motion sheet loader
//!
//! A motion sheet lists presets to build in one go:
//!
//! ```json
//! { "duration": 5,
//!   "motions": [
//!     { "type": "bounce", "curve": "easeOutQuart", "count": 20,
//!       "y": -200, "scaleX": 1.5, "scaleY": 0.6 } ] }
//! ```

use crate::curves::CurveName;
use crate::error::{MotionError, Result};
use crate::preset::{Bounce, Motion, ShockBounce};
use crate::types::CubicBezier;
use serde::{Deserialize, Serialize};
use std::io::Read;
use tracing::trace;

const DEFAULT_DURATION: f64 = 5.0;

fn default_duration() -> f64 {
    DEFAULT_DURATION
}

/// A curve given by stock name or by control points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CurveSpec {
    /// One of the [`CurveName`] presets
    Named(CurveName),
    /// `[x1, y1, x2, y2]`
    Points(CubicBezier),
}

impl CurveSpec {
    /// Resolve to control points.
    pub fn curve(self) -> CubicBezier {
        match self {
            Self::Named(name) => name.curve(),
            Self::Points(curve) => curve,
        }
    }
}

/// Parameters of one preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum MotionSpec {
    /// Parameters of [`Bounce::new`]
    #[serde(rename_all = "camelCase")]
    Bounce {
        curve: CurveSpec,
        count: usize,
        y: f64,
        scale_x: f64,
        scale_y: f64,
    },
    /// Parameters of [`ShockBounce::new`]
    #[serde(rename_all = "camelCase")]
    ShockBounce {
        curve: CurveSpec,
        count: usize,
        y: f64,
        scale_x: f64,
        scale_y: f64,
        shock_count: usize,
    },
}

impl MotionSpec {
    /// Construct the preset.
    pub fn build(&self) -> Result<Motion> {
        match *self {
            Self::Bounce {
                curve,
                count,
                y,
                scale_x,
                scale_y,
            } => Bounce::new(curve.curve(), count, y, scale_x, scale_y).map(Motion::Bounce),
            Self::ShockBounce {
                curve,
                count,
                y,
                scale_x,
                scale_y,
                shock_count,
            } => ShockBounce::new(curve.curve(), count, y, scale_x, scale_y, shock_count)
                .map(Motion::ShockBounce),
        }
    }
}

/// Batch of presets sharing one playback duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MotionSheet {
    /// Total duration in seconds of every motion
    #[serde(default = "default_duration")]
    pub duration: f64,
    /// Presets in declaration order
    pub motions: Vec<MotionSpec>,
}

impl MotionSheet {
    /// Build every preset, stopping at the first invalid one.
    pub fn build(&self) -> Result<Vec<Motion>> {
        if !(self.duration > 0.0 && self.duration.is_finite()) {
            return Err(MotionError::invalid(format!(
                "duration must be positive, got {}",
                self.duration
            )));
        }
        self.motions.iter().map(MotionSpec::build).collect()
    }
}

/// Load a motion sheet from a reader containing JSON.
pub fn from_reader<R: Read>(mut reader: R) -> Result<MotionSheet> {
    let mut s = String::new();
    reader.read_to_string(&mut s)?;
    let sheet: MotionSheet = serde_json::from_str(&s)?;
    trace!(
        motions = sheet.motions.len(),
        duration = sheet.duration,
        "loaded motion sheet"
    );
    Ok(sheet)
}

/// Load a motion sheet directly from a byte slice containing JSON.
pub fn from_slice(data: &[u8]) -> Result<MotionSheet> {
    let cursor = std::io::Cursor::new(data);
    from_reader(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Read;

    fn fixture(name: &str) -> std::path::PathBuf {
        std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../tests/data")
            .join(name)
    }

    #[test]
    fn parse_demo_sheet() {
        let sheet = from_reader(File::open(fixture("demo_sheet.json")).unwrap()).unwrap();
        assert_eq!(sheet.duration, 5.0);
        assert_eq!(sheet.motions.len(), 2);
        assert!(matches!(
            sheet.motions[0],
            MotionSpec::Bounce {
                curve: CurveSpec::Named(CurveName::EaseOutQuart),
                count: 20,
                ..
            }
        ));
    }

    #[test]
    fn from_slice_matches_reader() {
        let path = fixture("demo_sheet.json");
        let mut bytes = Vec::new();
        File::open(&path).unwrap().read_to_end(&mut bytes).unwrap();
        let from_reader_sheet = from_reader(File::open(&path).unwrap()).unwrap();
        let from_slice_sheet = from_slice(&bytes).unwrap();
        assert_eq!(from_reader_sheet, from_slice_sheet);
    }

    #[test]
    fn duration_defaults() {
        let sheet = from_slice(br#"{ "motions": [] }"#).unwrap();
        assert_eq!(sheet.duration, 5.0);
        assert!(sheet.build().unwrap().is_empty());
    }

    #[test]
    fn curve_points_parse() {
        let sheet = from_slice(
            br#"{ "motions": [ { "type": "shockBounce", "curve": [0.3, 0.5, 0.5, 0.7],
                 "count": 3, "y": -20, "scaleX": 1.2, "scaleY": 0.8, "shockCount": 4 } ] }"#,
        )
        .unwrap();
        let MotionSpec::ShockBounce { curve, .. } = sheet.motions[0] else {
            panic!("expected shock bounce");
        };
        assert_eq!(curve.curve(), CubicBezier::new(0.3, 0.5, 0.5, 0.7));
        assert_eq!(sheet.build().unwrap().len(), 1);
    }

    #[test]
    fn invalid_motion_fails_build() {
        let sheet = from_reader(File::open(fixture("bad_scale.json")).unwrap()).unwrap();
        assert!(matches!(
            sheet.build(),
            Err(MotionError::InvalidArgument(_))
        ));
    }

    #[test]
    fn malformed_json_is_reported() {
        assert!(matches!(from_slice(b"{"), Err(MotionError::Json(_))));
        assert!(matches!(
            from_slice(br#"{ "motions": [], "speed": 2 }"#),
            Err(MotionError::Json(_))
        ));
        assert!(from_slice(br#"{ "duration": 0, "motions": [] }"#)
            .unwrap()
            .build()
            .is_err());
    }
}
