use crate::{
    config::ShadingConfig,
    math::{Ray, Vector3},
    object::Hit,
};

use super::Composite;

/// A hard edged 3D checkerboard: unit cells in local space, centered on integer
/// points, alternating between the two children.
#[derive(Debug, Clone)]
pub struct Checkerboard {
    composite: Composite,
}

impl Checkerboard {
    pub fn new(composite: Composite) -> Self {
        Self { composite }
    }

    pub fn composite(&self) -> &Composite {
        &self.composite
    }

    /// Whether the cell containing `hit` belongs to `material1`: the rounded
    /// local coordinates sum to an odd number.
    pub fn is_first(&self, hit: &Hit) -> bool {
        let p = self.composite.local_point(hit);
        let sum = p.x.round() + p.y.round() + p.z.round();
        sum.rem_euclid(2.) == 1.
    }

    /// 0 selects `material1`, 1 selects `material2`.
    pub fn blend_factor(&self, hit: &Hit) -> f64 {
        if self.is_first(hit) {
            0.
        } else {
            1.
        }
    }

    pub fn shade(
        &self,
        ray: &Ray,
        hit: &Hit,
        dir_to_light: Vector3,
        light_color: Vector3,
        config: &ShadingConfig,
    ) -> Vector3 {
        let child = if self.is_first(hit) {
            self.composite.material1()
        } else {
            self.composite.material2()
        };
        child.shade(ray, hit, dir_to_light, light_color, config)
    }
}
