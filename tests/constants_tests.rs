// Host-side tests for constants and their relationships.

use shape_field::core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn analyser_constants_agree() {
    assert_eq!(FREQUENCY_BIN_COUNT, 256);
    assert_eq!(FREQUENCY_BIN_COUNT as u32 * 2, FFT_SIZE);
    assert!(FFT_SIZE.is_power_of_two());
    assert!(MIN_DECIBELS < MAX_DECIBELS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_frustum_reaches_the_field() {
    assert!(CAMERA_NEAR > 0.0 && CAMERA_NEAR < CAMERA_FAR);
    // farthest corner of the cube is still inside the far plane
    let corner = (3.0 * POSITION_EXTENT * POSITION_EXTENT).sqrt() as f32;
    assert!(corner < CAMERA_FAR);
    assert!(CAMERA_FOV_Y_DEG > 0.0 && CAMERA_FOV_Y_DEG < 180.0);
}

#[test]
fn population_and_background() {
    assert_eq!(SHAPE_COUNT, 1024);
    assert_eq!(INITIAL_SHADER_TIME, 1.0);
    for c in BACKGROUND_RGB {
        assert!((c - 23.0 / 255.0).abs() < 1e-12);
    }
}

#[test]
fn notice_links_out() {
    assert!(MIC_NOTICE_HTML.contains("<a href="));
    assert!(!MIC_NOTICE_CLASS.is_empty());
}

#[test]
fn shader_source_declares_entry_points() {
    assert!(SHAPES_WGSL.contains("fn vs_main"));
    assert!(SHAPES_WGSL.contains("fn fs_main"));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn antialiasing_uses_a_portable_sample_count() {
    // WebGPU only guarantees 1 and 4 samples for render targets
    assert_eq!(MSAA_SAMPLE_COUNT, 4);
}
