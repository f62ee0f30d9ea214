mod directional;
mod point;

use crate::math::Vector3;

pub use directional::*;
pub use point::*;

/// A single light sample as seen from a surface point.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Illumination {
    /// Direction from the surface point toward the light. Not necessarily normalized.
    pub dir_to_light: Vector3,
    /// Linear RGB color of the light, intensity included.
    pub color: Vector3,
}

/// This trait represents any object that is a light.
pub trait Light: Send + Sync {
    /// The light arriving at `point`.
    fn illuminate(&self, point: Vector3) -> Illumination;
}
