//! Perspective camera for the 3D bowl.
//!
//! Orbiting always happens around the world origin and re-aims the camera
//! at it, while panning slides eye and target together. Zoom scales the
//! eye's distance from the origin.

use glam::{Mat4, Vec3};

use crate::constants::*;

/// Polar coordinates around +Y, with `theta` measured from +Z toward +X.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spherical {
    pub radius: f32,
    pub phi: f32,
    pub theta: f32,
}

impl Spherical {
    pub fn from_vec3(v: Vec3) -> Self {
        let radius = v.length();
        if radius == 0.0 {
            return Self {
                radius: 0.0,
                phi: 0.0,
                theta: 0.0,
            };
        }
        Self {
            radius,
            phi: (v.y / radius).clamp(-1.0, 1.0).acos(),
            theta: v.x.atan2(v.z),
        }
    }

    pub fn to_vec3(self) -> Vec3 {
        let s = self.phi.sin() * self.radius;
        Vec3::new(s * self.theta.sin(), self.phi.cos() * self.radius, s * self.theta.cos())
    }
}

#[derive(Clone, Debug)]
pub struct OrbitCamera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl OrbitCamera {
    pub fn new(aspect: f32) -> Self {
        Self {
            eye: camera_start_vec3(),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Orbit by a drag of `(dx, dy)` pixels.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        let mut s = Spherical::from_vec3(self.eye);
        s.theta -= dx * ORBIT_SPEED;
        s.phi = (s.phi + dy * ORBIT_SPEED).clamp(PHI_MIN, PHI_MAX);
        self.eye = s.to_vec3();
        self.target = Vec3::ZERO;
    }

    /// Slide the camera within its view plane by a drag of `(dx, dy)` pixels.
    pub fn pan(&mut self, dx: f32, dy: f32) {
        let (right, up) = self.view_axes();
        let offset = right * (-dx * PAN_SPEED) + up * (dy * PAN_SPEED);
        self.eye += offset;
        self.target += offset;
    }

    /// Wheel zoom about the origin; positive `delta_y` moves away. Returns
    /// whether the step was applied.
    pub fn zoom(&mut self, delta_y: f32) -> bool {
        if delta_y == 0.0 {
            return false;
        }
        let direction = if delta_y > 0.0 { 1.0 } else { -1.0 };
        let distance = self.eye.length();
        let new_distance = distance + direction * ZOOM_STEP * distance;
        if new_distance > ZOOM_MIN_DISTANCE && new_distance < ZOOM_MAX_DISTANCE {
            // Target follows the eye so a panned view keeps its direction.
            let eye = self.eye * (new_distance / distance);
            self.target += eye - self.eye;
            self.eye = eye;
            true
        } else {
            false
        }
    }

    /// Camera right and up vectors in world space.
    pub fn view_axes(&self) -> (Vec3, Vec3) {
        let forward = (self.target - self.eye).normalize_or_zero();
        let right = forward.cross(self.up).normalize_or_zero();
        let up = right.cross(forward);
        (right, up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
