//! Shape population: the fixed set of mesh instances scattered through space.

use glam::{DVec3, Mat4, Vec3};
use rand::Rng;
use std::f64::consts::PI;
use std::ops::Range;

use super::camera::euler_quat;
use super::constants::POSITION_EXTENT;

#[derive(Clone, Debug, PartialEq)]
pub struct ShapeInstance {
    /// Index into the geometry template list; also the shader `choice`.
    pub geometry_index: usize,
    pub position: Vec3,
    /// Accumulated spin in radians; grows without bound
    pub rotation: DVec3,
    pub scale: Vec3,
}

impl ShapeInstance {
    /// Local-to-world transform: scale, then XYZ Euler rotation, then translation.
    pub fn model_matrix(&self) -> Mat4 {
        let q = euler_quat(self.rotation);
        Mat4::from_scale_rotation_translation(self.scale, q, self.position)
    }
}

/// Build `count` instances bound to random templates.
///
/// Positions are integer-valued in `[-3000, 3000)` per axis, rotations are in
/// `[0, π)` per axis and every scale starts at one.
pub fn build_population<R: Rng>(
    template_count: usize,
    count: usize,
    rng: &mut R,
) -> Vec<ShapeInstance> {
    (0..count)
        .map(|_| {
            let geometry_index = rng.gen_range(0..template_count);
            let mut coord = || {
                rng.gen_range(-POSITION_EXTENT..POSITION_EXTENT).floor() as f32
            };
            let position = Vec3::new(coord(), coord(), coord());
            let rotation = DVec3::new(
                rng.gen_range(0.0..PI),
                rng.gen_range(0.0..PI),
                rng.gen_range(0.0..PI),
            );
            ShapeInstance {
                geometry_index,
                position,
                rotation,
                scale: Vec3::ONE,
            }
        })
        .collect()
}

/// Reorder `shapes` so instances of the same template are contiguous and
/// return the instance range of each template (empty ranges included).
pub fn group_by_template(
    shapes: &mut [ShapeInstance],
    template_count: usize,
) -> Vec<Range<u32>> {
    shapes.sort_by_key(|s| s.geometry_index);
    let mut ranges = Vec::with_capacity(template_count);
    let mut start = 0usize;
    for t in 0..template_count {
        let len = shapes[start..]
            .iter()
            .take_while(|s| s.geometry_index == t)
            .count();
        ranges.push(start as u32..(start + len) as u32);
        start += len;
    }
    ranges
}
