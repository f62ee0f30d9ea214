//! The noise primitive procedural materials are built on.

use lazy_static::lazy_static;
use noise::{NoiseFn, Perlin};

use crate::math::Vector3;

lazy_static! {
    static ref PERLIN: Perlin = Perlin::new();
}

/// Sample 3D Perlin noise at a point.
///
/// Deterministic for the lifetime of the process, continuous, and roughly
/// within -1 to 1.
pub fn noise(p: Vector3) -> f64 {
    PERLIN.get(p.to_array())
}
