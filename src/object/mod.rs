mod plane;
mod sphere;

use crate::{
    material::Material,
    math::{Ray, Vector3},
};

pub use plane::*;
pub use sphere::*;

/// The result of a ray intersection.
#[derive(Clone, Debug, PartialEq)]
pub struct Hit {
    /// World space intersection point.
    pub point: Vector3,
    /// Surface normal at `point`, expected to be unit length.
    pub normal: Vector3,
    /// Ray parameter of the intersection.
    pub near: f64,
}

impl Hit {
    pub fn new(point: Vector3, normal: Vector3, near: f64) -> Self {
        Self {
            point,
            normal,
            near,
        }
    }
}

/// A trait that represents any type that can be intersected by a Ray.
pub trait Intersect {
    /// Find the intersection, if any, between the ray provided and this shape.
    fn intersect(&self, ray: &Ray) -> Option<Hit>;
}

/// A trait that represents any type that is a scene object, and can thus be viewed in the final render.
pub trait SceneObject: Intersect + Send + Sync {
    /// Grab this scene object's material.
    fn material(&self) -> &Material;
}
