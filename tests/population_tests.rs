// Host-side tests for shape population building and template grouping.

use rand::rngs::StdRng;
use rand::SeedableRng;
use shape_field::core::geometry::TEMPLATE_COUNT;
use shape_field::core::shapes::*;
use shape_field::core::SHAPE_COUNT;
use std::f64::consts::PI;

fn population(seed: u64) -> Vec<ShapeInstance> {
    let mut rng = StdRng::seed_from_u64(seed);
    build_population(TEMPLATE_COUNT, SHAPE_COUNT, &mut rng)
}

#[test]
fn builds_exactly_the_requested_count() {
    for seed in [0, 1, 42, 0xDEAD_BEEF] {
        assert_eq!(population(seed).len(), 1024);
    }
}

#[test]
fn same_seed_same_population() {
    assert_eq!(population(7), population(7));
    assert_ne!(population(7), population(8));
}

#[test]
fn positions_are_integers_within_extent() {
    for s in population(3) {
        for c in s.position.to_array() {
            assert_eq!(c, c.floor(), "position {c} is not integral");
            assert!((-3000.0..3000.0).contains(&c), "position {c} out of range");
        }
    }
}

#[test]
fn rotations_start_in_half_turn() {
    for s in population(4) {
        for r in s.rotation.to_array() {
            assert!((0.0..PI).contains(&r), "rotation {r} out of range");
        }
    }
}

#[test]
fn template_choice_is_in_range_and_spread() {
    let shapes = population(5);
    let mut seen = [0usize; TEMPLATE_COUNT];
    for s in &shapes {
        assert!(s.geometry_index < TEMPLATE_COUNT);
        seen[s.geometry_index] += 1;
    }
    // 1024 uniform draws over 16 templates: every template shows up
    assert!(seen.iter().all(|n| *n > 0), "histogram {seen:?}");
}

#[test]
fn scale_starts_at_one() {
    assert!(population(6).iter().all(|s| s.scale == glam::Vec3::ONE));
}

#[test]
fn grouping_keeps_every_instance_and_covers_all_templates() {
    let mut shapes = population(9);
    let before = shapes.clone();
    let ranges = group_by_template(&mut shapes, TEMPLATE_COUNT);

    assert_eq!(shapes.len(), before.len());
    assert_eq!(ranges.len(), TEMPLATE_COUNT);
    assert_eq!(ranges.first().map(|r| r.start), Some(0));
    assert_eq!(ranges.last().map(|r| r.end), Some(shapes.len() as u32));
    for (t, r) in ranges.iter().enumerate() {
        for s in &shapes[r.start as usize..r.end as usize] {
            assert_eq!(s.geometry_index, t);
        }
    }
    for s in &before {
        assert!(shapes.contains(s));
    }
}

#[test]
fn grouping_reports_empty_ranges_for_unused_templates() {
    let mut shapes = population(10);
    for s in shapes.iter_mut() {
        s.geometry_index = 2;
    }
    let ranges = group_by_template(&mut shapes, 4);
    assert!(ranges[0].is_empty());
    assert!(ranges[1].is_empty());
    assert_eq!(ranges[2], 0..1024);
    assert!(ranges[3].is_empty());
}

#[test]
fn model_matrix_places_origin_at_position() {
    let s = ShapeInstance {
        geometry_index: 0,
        position: glam::Vec3::new(10.0, -20.0, 30.0),
        rotation: glam::DVec3::new(0.3, 1.1, 2.0),
        scale: glam::Vec3::splat(2.0),
    };
    let m = s.model_matrix();
    let origin = m.transform_point3(glam::Vec3::ZERO);
    assert!((origin - s.position).length() < 1e-4);
    // uniform scale survives rotation
    let unit = m.transform_vector3(glam::Vec3::X);
    assert!((unit.length() - 2.0).abs() < 1e-4);
}

#[test]
fn model_matrix_is_periodic_in_large_rotations() {
    let base = ShapeInstance {
        geometry_index: 1,
        position: glam::Vec3::new(5.0, 6.0, 7.0),
        rotation: glam::DVec3::new(0.4, -0.9, 2.5),
        scale: glam::Vec3::ONE,
    };
    let turns = 2.0 * PI * 100_000.0;
    let spun = ShapeInstance {
        rotation: base.rotation + glam::DVec3::new(turns, -turns, turns),
        ..base.clone()
    };
    let a = base.model_matrix().to_cols_array();
    let b = spun.model_matrix().to_cols_array();
    for (x, y) in a.iter().zip(&b) {
        assert!((x - y).abs() < 1e-4, "{x} vs {y}");
    }
}
