mod checkerboard;
mod composite;
mod marble;
mod noise;
mod phong;
mod raster;

use std::sync::Arc;

use crate::{
    config::ShadingConfig,
    math::{Ray, Vector3},
    object::Hit,
};

pub use checkerboard::*;
pub use composite::*;
pub use marble::*;
pub use self::noise::*;
pub use phong::*;
pub use raster::*;

/// A 24-bit color, RGB. Only produced when writing out an image, shading works in
/// linear floating point `Vector3`s.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Instantiate a new Color.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Instantiate a new Color from 3 f64s, expected to be in the range 0-1.
    pub fn newf(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: (r.clamp(0., 1.) * 255.0) as u8,
            g: (g.clamp(0., 1.) * 255.0) as u8,
            b: (b.clamp(0., 1.) * 255.0) as u8,
        }
    }
}

impl From<Vector3> for Color {
    fn from(v: Vector3) -> Self {
        Self::newf(v.x, v.y, v.z)
    }
}

impl From<Color> for image::Rgb<u8> {
    fn from(c: Color) -> Self {
        image::Rgb([c.r, c.g, c.b])
    }
}

/// A surface material. The set of variants is closed: one analytic leaf and
/// three procedural composites that mix two shared child materials.
#[derive(Debug, Clone)]
pub enum Material {
    Phong(PhongMaterial),
    Checkerboard(Checkerboard),
    Noise(NoiseMaterial),
    Marble(MarbleMaterial),
}

impl Material {
    /// Radiance contributed by a single light sample at `hit`.
    ///
    /// `dir_to_light` need not be normalized. Light is not attenuated by distance.
    pub fn shade(
        &self,
        ray: &Ray,
        hit: &Hit,
        dir_to_light: Vector3,
        light_color: Vector3,
        config: &ShadingConfig,
    ) -> Vector3 {
        match self {
            Self::Phong(m) => m.shade(ray, hit, dir_to_light, light_color, config),
            Self::Checkerboard(m) => m.shade(ray, hit, dir_to_light, light_color, config),
            Self::Noise(m) => m.shade(ray, hit, dir_to_light, light_color, config),
            Self::Marble(m) => m.shade(ray, hit, dir_to_light, light_color, config),
        }
    }

    /// Program the preview pipeline's material state for this material.
    ///
    /// Composites bind their first child only; the preview never shows a blend.
    pub fn raster_bind<S: RasterState>(&self, state: &mut S, pass: Option<SpecularFixPass>) {
        match self {
            Self::Phong(m) => m.raster_bind(state, pass),
            Self::Checkerboard(m) => m.composite().raster_bind(state, pass),
            Self::Noise(m) => m.composite().raster_bind(state, pass),
            Self::Marble(m) => m.composite().raster_bind(state, pass),
        }
    }

    /// The representative diffuse color: the leaf's own, or the first child's for composites.
    pub fn diffuse_color(&self) -> Vector3 {
        match self {
            Self::Phong(m) => m.diffuse_color(),
            Self::Checkerboard(m) => m.composite().material1().diffuse_color(),
            Self::Noise(m) => m.composite().material1().diffuse_color(),
            Self::Marble(m) => m.composite().material1().diffuse_color(),
        }
    }

    /// Wrap this material for sharing between composites and scene objects.
    pub fn shared(self) -> Arc<Material> {
        Arc::new(self)
    }
}

impl From<PhongMaterial> for Material {
    fn from(m: PhongMaterial) -> Self {
        Self::Phong(m)
    }
}

impl From<Checkerboard> for Material {
    fn from(m: Checkerboard) -> Self {
        Self::Checkerboard(m)
    }
}

impl From<NoiseMaterial> for Material {
    fn from(m: NoiseMaterial) -> Self {
        Self::Noise(m)
    }
}

impl From<MarbleMaterial> for Material {
    fn from(m: MarbleMaterial) -> Self {
        Self::Marble(m)
    }
}

impl Default for Material {
    fn default() -> Self {
        PhongMaterial::new(Vector3::one(), Vector3::zero(), 0.).into()
    }
}
