use crate::{
    config::ShadingConfig,
    math::{Ray, Vector3},
    object::Hit,
    perlin,
};

use super::{composite::blend, Composite};

/// Fractal sum of `octaves` noise samples. Each octave doubles the sampling
/// frequency and halves the weight, starting from full weight.
///
/// The sum is not normalized and can leave 0-1 in both directions.
pub fn accumulate(mut point: Vector3, octaves: u32) -> f64 {
    let mut sum = 0.;
    let mut weight = 1.;
    for _ in 0..octaves {
        sum += perlin::noise(point) * weight;
        weight /= 2.;
        point = point * 2.;
    }
    sum
}

/// Blends two materials by fractal Perlin noise over local space.
#[derive(Debug, Clone)]
pub struct NoiseMaterial {
    composite: Composite,
    octaves: u32,
}

impl NoiseMaterial {
    pub fn new(composite: Composite, octaves: u32) -> Self {
        Self { composite, octaves }
    }

    pub fn composite(&self) -> &Composite {
        &self.composite
    }

    pub fn octaves(&self) -> u32 {
        self.octaves
    }

    pub fn blend_factor(&self, hit: &Hit, config: &ShadingConfig) -> f64 {
        let c = accumulate(self.composite.local_point(hit), self.octaves);
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
