// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: wasm bindings

use wasm_bindgen::prelude::*;

use crate::{
    loader::json,
    preset::{Bounce, EmphasisMotion, Motion, Property, ShockBounce},
    types::CubicBezier,
};

fn js_err(err: impl ToString) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn curve_from(points: &[f64]) -> Result<CubicBezier, JsValue> {
    let points: [f64; 4] = points
        .try_into()
        .map_err(|_| js_err(format!("a curve needs 4 numbers, got {}", points.len())))?;
    Ok(CubicBezier::from(points))
}

fn property_from(name: &str) -> Result<Property, JsValue> {
    match name {
        "y" => Ok(Property::Y),
        "scaleX" => Ok(Property::ScaleX),
        "scaleY" => Ok(Property::ScaleY),
        other => Err(js_err(format!("unknown property {other}"))),
    }
}

/// Build a [`Bounce`] and return it as renderer-ready JSON.
#[wasm_bindgen]
pub fn bounce(
    curve: &[f64],
    count: usize,
    y: f64,
    scale_x: f64,
    scale_y: f64,
) -> Result<String, JsValue> {
    let motion = Bounce::new(curve_from(curve)?, count, y, scale_x, scale_y).map_err(js_err)?;
    serde_json::to_string(&motion).map_err(js_err)
}

/// Build a [`ShockBounce`] and return it as renderer-ready JSON.
#[wasm_bindgen(js_name = shockBounce)]
pub fn shock_bounce(
    curve: &[f64],
    count: usize,
    y: f64,
    scale_x: f64,
    scale_y: f64,
    shock_count: usize,
) -> Result<String, JsValue> {
    let motion = ShockBounce::new(curve_from(curve)?, count, y, scale_x, scale_y, shock_count)
        .map_err(js_err)?;
    serde_json::to_string(&motion).map_err(js_err)
}

/// Motions built from a JSON motion sheet.
#[wasm_bindgen]
pub struct EasyMotionWasm {
    duration: f64,
    motions: Vec<Motion>,
}

#[wasm_bindgen]
impl EasyMotionWasm {
    /// Load and build a motion sheet.
    #[wasm_bindgen(constructor)]
    pub fn new(data: &str) -> Result<EasyMotionWasm, JsValue> {
        let sheet = json::from_slice(data.as_bytes()).map_err(js_err)?;
        let motions = sheet.build().map_err(js_err)?;
        Ok(Self {
            duration: sheet.duration,
            motions,
        })
    }

    /// Playback duration in seconds.
    #[wasm_bindgen(getter)]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Number of motions in the sheet.
    #[wasm_bindgen]
    pub fn len(&self) -> usize {
        self.motions.len()
    }

    /// Whether the sheet has no motions.
    #[wasm_bindgen(js_name = isEmpty)]
    pub fn is_empty(&self) -> bool {
        self.motions.is_empty()
    }

    /// Motion `index` as renderer-ready JSON.
    #[wasm_bindgen(js_name = motionJson)]
    pub fn motion_json(&self, index: usize) -> Result<String, JsValue> {
        let motion = self
            .motions
            .get(index)
            .ok_or_else(|| js_err(format!("no motion at {index}")))?;
        serde_json::to_string(motion).map_err(js_err)
    }

    /// Value of `property` on motion `index` at `elapsed` seconds.
    #[wasm_bindgen]
    pub fn sample(&self, index: usize, property: &str, elapsed: f64) -> Result<f64, JsValue> {
        let motion = self
            .motions
            .get(index)
            .ok_or_else(|| js_err(format!("no motion at {index}")))?;
        let channel = motion.channel(property_from(property)?);
        Ok(channel.animator().value_at(elapsed, self.duration))
    }
}
