mod matrix;
mod ray;
mod vector;

pub use matrix::*;
pub use ray::*;
pub use vector::*;

/// A type that can be linearly interpolated between two values of itself.
///
/// `t` is not clamped, values outside 0-1 extrapolate.
pub trait Lerp {
    fn lerp(self, other: Self, t: f64) -> Self;
}

impl Lerp for Vector3 {
    /// Weighted mix `self * (1 - t) + other * t`.
    fn lerp(self, other: Self, t: f64) -> Self {
        self * (1. - t) + other * t
    }
}
