use serde::{Deserialize, Serialize};

use crate::math::{Ray, Vector3};

/// A Camera object. Represents a viewable area that a scene can be rendered to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Camera {
    pub vw: u32,
    pub vh: u32,
    pub origin: Vector3,
    pub target: Vector3,
    /// Vertical field of view, in degrees.
    pub fov: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            vw: 300,
            vh: 200,
            origin: Vector3::new(0., 0., 5.),
            target: Vector3::zero(),
            fov: 60.,
        }
    }
}

impl Camera {
    /// Cotangent of the half field of view.
    fn chf(fov: f64) -> f64 {
        ((90. - fov * 0.5) * 0.017453).tan()
    }

    /// Calculate the normalized direction through a screen point, where (0, 0) is top left.
    pub fn direction_at(&self, x: f64, y: f64) -> Vector3 {
        let forward = (self.target - self.origin).normalize();
        let right = forward.cross(Vector3::up()).normalize();
        let up = right.cross(forward);

        let nx = x - self.vw as f64 * 0.5;
        let ny = y - self.vh as f64 * 0.5;
        let z = self.vh as f64 * 0.5 * Self::chf(self.fov);
        (forward * z + right * nx - up * ny).normalize()
    }

    /// The primary ray through the center of pixel (x, y).
    pub fn ray_at(&self, x: u32, y: u32) -> Ray {
        Ray::new(
            self.origin,
            self.direction_at(x as f64 + 0.5, y as f64 + 0.5),
        )
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn center_looks_at_target() {
        let camera = Camera {
            vw: 100,
            vh: 50,
            origin: Vector3::new(0., 2., 0.),
            target: Vector3::new(4., 2., 0.),
            ..Default::default()
        };
        let d = camera.direction_at(50., 25.);
        assert_abs_diff_eq!(d, Vector3::new(1., 0., 0.), epsilon = 1e-12);
    }

    #[test]
    fn image_axes_point_right_and_down() {
        let camera = Camera::default();
        // looking down -z: right is +x, image rows grow toward -y
        let d = camera.direction_at(300., 200.);
        assert!(d.x > 0.);
        assert!(d.y < 0.);
    }
}
