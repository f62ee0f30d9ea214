use std::convert::TryFrom;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RasterError {
    #[error("specular fix pass index {0} is out of range, expecting 0, 1 or 2")]
    InvalidPass(u8),
}

/// Per-surface material parameters of the preview pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaterialParam {
    Diffuse,
    Ambient,
    Specular,
}

/// One of the three sequential draws used to hide the highlight artifact the
/// preview pipeline shows for wide specular lobes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecularFixPass {
    /// Draw only the specular highlights.
    Specular,
    /// Compute normal dot light.
    NormalDotLight,
    /// Add the ambient and diffuse terms.
    DiffuseAmbient,
}

impl SpecularFixPass {
    /// All passes, in draw order.
    pub const ALL: [SpecularFixPass; 3] = [
        SpecularFixPass::Specular,
        SpecularFixPass::NormalDotLight,
        SpecularFixPass::DiffuseAmbient,
    ];

    pub fn index(self) -> u8 {
        match self {
            Self::Specular => 0,
            Self::NormalDotLight => 1,
            Self::DiffuseAmbient => 2,
        }
    }
}

impl TryFrom<u8> for SpecularFixPass {
    type Error = RasterError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Self::Specular),
            1 => Ok(Self::NormalDotLight),
            2 => Ok(Self::DiffuseAmbient),
            n => Err(RasterError::InvalidPass(n)),
        }
    }
}

/// The material state machine of a rasterizing preview pipeline.
///
/// Implementations are stateful and must be driven from a single thread, in
/// draw order.
pub trait RasterState {
    /// Set an RGBA material parameter for both faces.
    fn material(&mut self, param: MaterialParam, rgba: [f32; 4]);

    /// Set the specular exponent, expected within 0-128.
    fn shininess(&mut self, exponent: f32);

    /// Draw a surface with whatever state is currently bound.
    fn draw_surface(&mut self, surface: usize);
}

/// A snapshot of the preview material state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MaterialState {
    pub diffuse: [f32; 4],
    pub ambient: [f32; 4],
    pub specular: [f32; 4],
    pub shininess: f32,
}

/// A draw issued against a `RecordingState`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCall {
    pub surface: usize,
    pub state: MaterialState,
}

/// An in-memory `RasterState` that keeps the current state and logs every draw.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingState {
    pub current: MaterialState,
    pub draws: Vec<DrawCall>,
}

impl RasterState for RecordingState {
    fn material(&mut self, param: MaterialParam, rgba: [f32; 4]) {
        match param {
            MaterialParam::Diffuse => self.current.diffuse = rgba,
            MaterialParam::Ambient => self.current.ambient = rgba,
            MaterialParam::Specular => self.current.specular = rgba,
        }
    }

    fn shininess(&mut self, exponent: f32) {
        self.current.shininess = exponent;
    }

    fn draw_surface(&mut self, surface: usize) {
        self.draws.push(DrawCall {
            surface,
            state: self.current,
        });
    }
}
