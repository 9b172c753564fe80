//! Per-frame update of the shape field.
//!
//! Clocks and rotations accumulate in `f64`; they are narrowed to `f32` only
//! when handed to the GPU.
//!
//! [`Visualizer`] owns the only mutable scene state (shapes, camera, shader
//! time, elapsed clock and the random source). The driver calls
//! [`Visualizer::update`] once per tick and then hands the result to the
//! renderer; nothing here touches the browser.

use glam::Vec3;
use rand::Rng;
use std::ops::Range;

use super::camera::CameraRig;
use super::constants::INITIAL_SHADER_TIME;
use super::params::Params;
use super::shapes::{build_population, group_by_template, ShapeInstance};
use super::spectrum::pair_average;

/// Global spin envelope for one frame: `|sin(elapsed) + 2| / shape_spin`.
#[inline]
pub fn oscillation_factor(elapsed_sec: f64, shape_spin: f32) -> f64 {
    (elapsed_sec.sin() + 2.0).abs() / shape_spin as f64
}

/// Uniform scale for a shape given its paired frequency average.
#[inline]
pub fn scaled_size(average: f32, params: &Params) -> f32 {
    params.scaler + average / params.shape_scaler
}

pub struct Visualizer<R: Rng> {
    shapes: Vec<ShapeInstance>,
    template_ranges: Vec<Range<u32>>,
    pub camera: CameraRig,
    shader_time: f64,
    elapsed: f64,
    rng: R,
}

impl<R: Rng> Visualizer<R> {
    /// Scatter `count` shapes over `template_count` templates using `rng`,
    /// which is kept for the per-frame spin draws.
    pub fn new(template_count: usize, count: usize, mut rng: R) -> Self {
        let mut shapes = build_population(template_count, count, &mut rng);
        let template_ranges = group_by_template(&mut shapes, template_count);
        Self {
            shapes,
            template_ranges,
            camera: CameraRig::default(),
            shader_time: INITIAL_SHADER_TIME,
            elapsed: 0.0,
            rng,
        }
    }

    pub fn shapes(&self) -> &[ShapeInstance] {
        &self.shapes
    }

    /// Contiguous instance range of each template within [`Self::shapes`].
    pub fn template_ranges(&self) -> &[Range<u32>] {
        &self.template_ranges
    }

    pub fn shader_time(&self) -> f64 {
        self.shader_time
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Advance one frame of `dt_sec` seconds.
    ///
    /// `frequency` is read only; an all-zero sample leaves every shape at the
    /// `scaler` baseline.
    pub fn update(&mut self, dt_sec: f64, frequency: &[u8], params: &Params) {
        self.elapsed += dt_sec;
        self.shader_time += dt_sec * params.time_multiplier as f64;

        let sine = oscillation_factor(self.elapsed, params.shape_spin);
        for shape in self.shapes.iter_mut() {
            shape.rotation.x += self.rng.gen::<f64>() * sine;
            shape.rotation.y -= self.rng.gen::<f64>() * sine;
            shape.rotation.z += self.rng.gen::<f64>() * sine;

            let average = pair_average(frequency, shape.geometry_index);
            shape.scale = Vec3::splat(scaled_size(average, params));
        }

        self.camera.drift(dt_sec, params.rotation_rate);
    }
}
