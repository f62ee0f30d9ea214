use crate::{
    config::ShadingConfig,
    math::{Ray, Vector3},
    object::Hit,
};

use super::{accumulate, composite::blend, Composite};

/// Sinusoidal veins along world `x`, warped by fractal noise sampled at the same
/// world point. The composite's transform does not affect the pattern.
#[derive(Debug, Clone)]
pub struct MarbleMaterial {
    composite: Composite,
    octaves: u32,
    frequency: f64,
    amplitude: f64,
}

impl MarbleMaterial {
    pub fn new(composite: Composite, octaves: u32, frequency: f64, amplitude: f64) -> Self {
        Self {
            composite,
            octaves,
            frequency,
            amplitude,
        }
    }

    pub fn composite(&self) -> &Composite {
        &self.composite
    }

    pub fn octaves(&self) -> u32 {
        self.octaves
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// `sin(frequency * x + amplitude * noise)`, which is negative over half of
    /// its period. Left unclamped unless `config.clamp_blend` is set.
    pub fn blend_factor(&self, hit: &Hit, config: &ShadingConfig) -> f64 {
        let warp = accumulate(hit.point, self.octaves);
        let c = (self.frequency * hit.point.x + self.amplitude * warp).sin();
        blend(c, config)
    }

    pub fn shade(
        &self,
        ray: &Ray,
        hit: &Hit,
        dir_to_light: Vector3,
        light_color: Vector3,
        config: &ShadingConfig,
    ) -> Vector3 {
        let c = self.blend_factor(hit, config);
        self.composite
            .mix(c, ray, hit, dir_to_light, light_color, config)
    }
}
