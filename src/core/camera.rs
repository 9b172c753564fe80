use glam::{DVec3, EulerRot, Mat4, Quat};
use std::f64::consts::TAU;

use super::constants::{CAMERA_FAR, CAMERA_FOV_Y_DEG, CAMERA_NEAR};

/// XYZ Euler angles to an `f32` quaternion.
///
/// Angles are accumulated in `f64` and may be arbitrarily large; each is
/// wrapped into `[0, 2π)` before narrowing so the orientation stays exact.
pub fn euler_quat(rotation: DVec3) -> Quat {
    let wrap = |a: f64| a.rem_euclid(TAU) as f32;
    Quat::from_euler(
        EulerRot::XYZ,
        wrap(rotation.x),
        wrap(rotation.y),
        wrap(rotation.z),
    )
}

/// Perspective camera parked at the origin that only ever rotates.
#[derive(Clone, Debug)]
pub struct CameraRig {
    /// Unbounded drift angles in radians
    pub rotation: DVec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            rotation: DVec3::ZERO,
            aspect: 1.0,
            fovy_radians: CAMERA_FOV_Y_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }
}

impl CameraRig {
    /// Unbounded drift: +x, -y, +z by `dt / rotation_rate` each.
    pub fn drift(&mut self, dt_sec: f64, rotation_rate: f32) {
        let step = dt_sec / rotation_rate as f64;
        self.rotation.x += step;
        self.rotation.y -= step;
        self.rotation.z += step;
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.aspect = width as f32 / height as f32;
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Inverse of the camera's world transform (rotation only).
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_quat(euler_quat(self.rotation).conjugate())
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
