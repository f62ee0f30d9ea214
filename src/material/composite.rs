use std::sync::Arc;

use crate::{
    config::ShadingConfig,
    math::{Lerp, Matrix, Ray, Vector3},
    object::Hit,
};

use super::{Material, RasterState, SpecularFixPass};

/// The state shared by every procedural material: a world-to-local transform
/// and two child materials, which may be shared with other composites.
#[derive(Debug, Clone)]
pub struct Composite {
    transform: Matrix,
    material1: Arc<Material>,
    material2: Arc<Material>,
}

impl Composite {
    pub fn new(transform: Matrix, material1: Arc<Material>, material2: Arc<Material>) -> Self {
        Self {
            transform,
            material1,
            material2,
        }
    }

    pub fn transform(&self) -> Matrix {
        self.transform
    }

    pub fn material1(&self) -> &Arc<Material> {
        &self.material1
    }

    pub fn material2(&self) -> &Arc<Material> {
        &self.material2
    }

    /// The intersection point in this material's local space. Normals are not transformed.
    pub fn local_point(&self, hit: &Hit) -> Vector3 {
        self.transform.transform_point(hit.point)
    }

    /// Mix the children as `material1 * (1 - c) + material2 * c`.
    pub fn mix(
        &self,
        c: f64,
        ray: &Ray,
        hit: &Hit,
        dir_to_light: Vector3,
        light_color: Vector3,
        config: &ShadingConfig,
    ) -> Vector3 {
        let color1 = self.material1.shade(ray, hit, dir_to_light, light_color, config);
        let color2 = self.material2.shade(ray, hit, dir_to_light, light_color, config);
        color1.lerp(color2, c)
    }

    /// Only the first child is bound, the preview pipeline has no notion of a blend.
    pub fn raster_bind<S: RasterState>(&self, state: &mut S, pass: Option<SpecularFixPass>) {
        self.material1.raster_bind(state, pass);
    }
}

/// Apply the optional 0-1 clamp to an unbounded blend factor.
pub(crate) fn blend(c: f64, config: &ShadingConfig) -> f64 {
    if config.clamp_blend {
        c.clamp(0., 1.)
    } else {
        c
    }
}
