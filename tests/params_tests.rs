// Host-side tests for the live parameter store and its range/step rules.

use shape_field::core::params::*;

#[test]
fn defaults_sit_inside_their_ranges() {
    let p = Params::default();
    for spec in PARAM_SPECS.iter() {
        let v = p.get(spec.key);
        assert!(spec.contains(v), "{} default {} out of range", spec.label, v);
    }
    assert_eq!(p.scaler, 0.1);
    assert_eq!(p.rotation_rate, 32.0);
    assert_eq!(p.time_multiplier, 10.0);
    assert_eq!(p.smoothing, 0.9);
    assert_eq!(p.shape_spin, 140.0);
    assert_eq!(p.shape_scaler, 128.0);
}

#[test]
fn specs_cover_every_key_once() {
    let keys = [
        ParamKey::Scaler,
        ParamKey::RotationRate,
        ParamKey::TimeMultiplier,
        ParamKey::Smoothing,
        ParamKey::ShapeSpin,
        ParamKey::ShapeScaler,
    ];
    for key in keys {
        assert_eq!(PARAM_SPECS.iter().filter(|s| s.key == key).count(), 1);
        assert_eq!(spec_for(key).key, key);
    }
}

#[test]
fn set_clamps_out_of_range_values() {
    let mut p = Params::default();
    assert_eq!(p.set(ParamKey::RotationRate, 1000.0), 64.0);
    assert_eq!(p.rotation_rate, 64.0);
    assert_eq!(p.set(ParamKey::ShapeScaler, -5.0), 16.0);
    assert_eq!(p.shape_scaler, 16.0);
    assert_eq!(p.set(ParamKey::Scaler, 0.0), 0.0);
}

#[test]
fn set_snaps_to_step_grid() {
    let mut p = Params::default();
    assert_eq!(p.set(ParamKey::ShapeSpin, 135.0), 140.0);
    assert_eq!(p.set(ParamKey::TimeMultiplier, 12.4), 10.0);
    assert_eq!(p.set(ParamKey::RotationRate, 3.2), 4.0);
    let s = p.set(ParamKey::Smoothing, 0.734);
    assert!((s - 0.73).abs() < 1e-5, "smoothing snapped to {s}");
}

#[test]
fn set_rejects_non_finite_input() {
    let mut p = Params::default();
    assert_eq!(p.set(ParamKey::Scaler, f32::NAN), 0.0);
    assert_eq!(p.set(ParamKey::ShapeSpin, f32::INFINITY), 20.0);
}

#[test]
fn get_reads_back_what_set_stored() {
    let mut p = Params::default();
    for spec in PARAM_SPECS.iter() {
        let stored = p.set(spec.key, spec.max);
        assert_eq!(p.get(spec.key), stored);
        assert!((stored - spec.max).abs() < 1e-4);
    }
}
