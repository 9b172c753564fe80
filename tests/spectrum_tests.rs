// Host-side tests for frequency pairing and the frequency buffer.

use shape_field::core::spectrum::*;
use shape_field::core::FREQUENCY_BIN_COUNT;

fn ramp() -> Vec<u8> {
    (1..=16).map(|i| (i * 10) as u8).collect()
}

#[test]
fn pair_index_folds_odd_onto_even() {
    assert_eq!(pair_index(0), 0);
    assert_eq!(pair_index(1), 0);
    assert_eq!(pair_index(3), 2);
    assert_eq!(pair_index(4), 4);
    assert_eq!(pair_index(15), 14);
}

#[test]
fn odd_index_uses_previous_bin_and_halves_only_second() {
    // frequency = [10, 20, 30, 40, ...]
    let f = ramp();
    assert_eq!(pair_average(&f, 3), 30.0 + 40.0 / 2.0);
    assert_eq!(pair_average(&f, 3), pair_average(&f, 2));
}

#[test]
fn even_index_uses_next_bin() {
    let f = ramp();
    assert_eq!(pair_average(&f, 4), f[4] as f32 + f[5] as f32 / 2.0);
    assert_eq!(pair_average(&f, 4), 50.0 + 30.0);
}

#[test]
fn weighting_is_not_an_arithmetic_mean() {
    let f = [100u8, 50, 0, 0];
    assert_eq!(pair_average(&f, 0), 125.0);
    assert_ne!(pair_average(&f, 0), (100.0 + 50.0) / 2.0);
}

#[test]
fn missing_bins_read_as_zero() {
    assert_eq!(pair_average(&[], 7), 0.0);
    assert_eq!(pair_average(&[8u8], 0), 8.0);
}

#[test]
fn byte_extremes_do_not_overflow() {
    let f = [255u8; 16];
    assert_eq!(pair_average(&f, 15), 255.0 + 127.5);
}

#[test]
fn default_buffer_is_silent_and_half_window() {
    let buf = FrequencyBuffer::default();
    assert_eq!(buf.len(), FREQUENCY_BIN_COUNT);
    assert_eq!(buf.len(), 256);
    assert!(buf.is_silent());
}

#[test]
fn writes_through_mut_slice_are_visible() {
    let mut buf = FrequencyBuffer::zeroed(4);
    buf.as_mut_slice()[1] = 9;
    assert!(!buf.is_silent());
    assert_eq!(buf.as_slice(), &[0, 9, 0, 0]);
}
