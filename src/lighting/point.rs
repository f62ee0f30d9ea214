use serde::{Deserialize, Serialize};

use crate::math::Vector3;

use super::{Illumination, Light};

/// A point light, which is a light that emits in all directions from a specified position.
///
/// Intensity does not fall off with distance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub position: Vector3,
    pub color: Vector3,
}

impl Default for Point {
    fn default() -> Self {
        Self {
            position: Vector3::zero(),
            color: Vector3::one(),
        }
    }
}

impl Light for Point {
    fn illuminate(&self, point: Vector3) -> Illumination {
        Illumination {
            dir_to_light: self.position - point,
            color: self.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_distance_falloff() {
        let light = Point {
            position: Vector3::new(0., 10., 0.),
            color: Vector3::splat(0.5),
        };
        let near = light.illuminate(Vector3::new(0., 9., 0.));
        let far = light.illuminate(Vector3::new(0., -90., 0.));
        assert_eq!(near.color, far.color);
        assert_eq!(far.dir_to_light, Vector3::new(0., 100., 0.));
    }
}
