use serde::{Deserialize, Serialize};

use crate::math::Vector3;

use super::{Illumination, Light};

/// A directional light, which has no position, just a vector direction that is
/// true for all points in the world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Directional {
    /// The direction the light travels in.
    pub direction: Vector3,
    pub color: Vector3,
}

impl Default for Directional {
    fn default() -> Self {
        Self {
            direction: Vector3::new(0., -1., 0.),
            color: Vector3::one(),
        }
    }
}

impl Light for Directional {
    fn illuminate(&self, _point: Vector3) -> Illumination {
        Illumination {
            dir_to_light: -self.direction,
            color: self.color,
        }
    }
}
