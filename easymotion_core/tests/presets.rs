// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
use easymotion_core::loader::json;
use easymotion_core::{
    Bounce, CubicBezier, EmphasisMotion, Motion, MotionError, Property, ShockBounce,
};

const CURVE: CubicBezier = CubicBezier::new(0.25, 1.0, 0.5, 1.0);

fn min(seq: &[f64]) -> f64 {
    seq.iter().copied().fold(f64::INFINITY, f64::min)
}

fn max(seq: &[f64]) -> f64 {
    seq.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

#[test]
fn bounce_end_to_end() {
    let b = Bounce::new(CURVE, 20, -200.0, 1.5, 0.6).unwrap();
    assert_eq!(b.times().len(), 41);
    assert!(testutil::close(min(b.y_keyframes()), -200.0));
    assert_eq!(b.y_keyframes()[0], 0.0);
    assert_eq!(b.y_keyframes()[40], 0.0);
    assert!(testutil::close(max(b.scale_x_keyframes()), 1.5));
    assert!(testutil::close(min(b.scale_y_keyframes()), 0.6));
    for p in [Property::Y, Property::ScaleX, Property::ScaleY] {
        let channel = b.channel(p);
        assert_eq!(channel.times().len(), 41);
        assert_eq!(channel.keyframes().len(), 41);
        assert_eq!(channel.ease().len(), 40);
    }
}

#[test]
fn bounce_scale_direction_guard() {
    assert!(matches!(
        Bounce::new(CURVE, 20, -200.0, 0.5, 0.6),
        Err(MotionError::InvalidArgument(_))
    ));
    assert!(matches!(
        Bounce::new(CURVE, 20, -200.0, 1.5, 1.5),
        Err(MotionError::InvalidArgument(_))
    ));
}

#[test]
fn shock_bounce_end_to_end() {
    let curve = CubicBezier::new(0.3, 0.5, 0.5, 0.7);
    let s = ShockBounce::new(curve, 10, -200.0, 1.5, 0.6, 6).unwrap();
    assert_eq!(s.bounce_times().len(), 21);
    assert_eq!(s.y_keyframes().len(), 21);
    assert_eq!(s.y_ease().len(), 20);
    assert_eq!(s.shock_bounce_times().len(), 21 + 9 * 4);
    assert_eq!(s.scale_x_keyframes().len(), s.shock_bounce_times().len());
    assert_eq!(s.scale_y_keyframes().len(), s.shock_bounce_times().len());
    assert_eq!(s.scale_x_ease().len(), s.shock_bounce_times().len() - 1);
    assert!(testutil::close(max(s.scale_x_keyframes()), 1.5));
    assert!(testutil::close(min(s.scale_y_keyframes()), 0.6));
    assert_eq!(s.scale_x_keyframes()[0], 1.0);
    assert_eq!(s.scale_x_keyframes()[56], 1.0);
}

#[test]
fn shock_bounce_requires_even_shock() {
    let err = ShockBounce::new(CURVE, 10, -200.0, 1.5, 0.6, 5).unwrap_err();
    assert!(matches!(err, MotionError::InvalidArgument(_)));
}

#[test]
fn sampling_hits_every_keyframe() {
    let b = Bounce::new(CURVE, 6, -120.0, 1.3, 0.7).unwrap();
    for p in [Property::Y, Property::ScaleX, Property::ScaleY] {
        let channel = b.channel(p);
        let anim = channel.animator();
        for (t, k) in channel.times().iter().zip(channel.keyframes()) {
            assert_eq!(anim.value(*t), *k);
        }
    }
}

#[test]
fn sampling_tallest_bounce() {
    let b = Bounce::new(CURVE, 20, -200.0, 1.5, 0.6).unwrap();
    let y = b.channel(Property::Y).animator();
    let peak_time = b.times()[1];
    assert!(testutil::close(y.value(peak_time), -200.0));
    assert!((y.value_at(peak_time * 5.0, 5.0) + 200.0).abs() < 0.01);
    assert!(y.value(peak_time / 2.0) < 0.0);
    assert!(y.value(peak_time / 2.0) > -200.0);
}

#[test]
fn demo_sheet_builds_and_serializes() {
    let path =
        std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../tests/data/demo_sheet.json");
    let data = std::fs::read(path).unwrap();
    let sheet = json::from_slice(&data).unwrap();
    let motions = sheet.build().unwrap();
    assert_eq!(motions.len(), 2);
    assert!(matches!(motions[0], Motion::Bounce(_)));
    assert!(matches!(motions[1], Motion::ShockBounce(_)));

    let v = serde_json::to_value(&motions[1]).unwrap();
    assert_eq!(v["type"], "shockBounce");
    assert_eq!(v["shockBounceTimes"].as_array().unwrap().len(), 57);
    assert_eq!(v["scaleXEase"].as_array().unwrap().len(), 56);
    assert_eq!(v["scaleXEase"][0], "linear");
    assert_eq!(v["scaleXEase"][1].as_array().unwrap().len(), 4);
}
