// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: demo presets
//!
//! Prints the keyframes of the demo presets as JSON. Pass a motion sheet
//! path to print that sheet's presets instead. Set `RUST_LOG=debug` to see
//! what the generators are doing.

use easymotion_core::curves::CurveName;
use easymotion_core::loader::json;
use easymotion_core::{Bounce, CubicBezier, EmphasisMotion, Motion, Property, ShockBounce};
use std::fs::File;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn demo_motions() -> easymotion_core::Result<(f64, Vec<Motion>)> {
    let bounce = Bounce::new(CurveName::EaseOutQuart.curve(), 20, -200.0, 1.5, 0.6)?;
    let shock = ShockBounce::new(
        CubicBezier::new(0.3, 0.5, 0.5, 0.7),
        10,
        -200.0,
        1.5,
        0.6,
        6,
    )?;
    Ok((5.0, vec![Motion::Bounce(bounce), Motion::ShockBounce(shock)]))
}

fn main() -> easymotion_core::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let (duration, motions) = match std::env::args().nth(1) {
        Some(path) => {
            let sheet = json::from_reader(File::open(&path)?)?;
            (sheet.duration, sheet.build()?)
        }
        None => demo_motions()?,
    };

    for (index, motion) in motions.iter().enumerate() {
        let y = motion.channel(Property::Y);
        let halfway = y.animator().value_at(duration / 2.0, duration);
        info!(
            index,
            breakpoints = y.times().len(),
            halfway,
            "motion ready"
        );
    }

    println!("{}", serde_json::to_string_pretty(&motions)?);
    Ok(())
}
