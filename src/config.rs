use serde::{Deserialize, Serialize};

/// Switches that apply uniformly to every material evaluation of a render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadingConfig {
    /// Single-sided shading. Lights behind the surface contribute nothing and
    /// negative cosines clamp to zero. When false, surfaces are lit from both
    /// sides using the absolute cosine.
    pub single_sided: bool,

    /// Blinn half-vector specular. When false, the mirror reflection vector is used.
    pub blinn: bool,

    /// Clamp the blend factor of noise and marble materials to 0-1 before
    /// mixing. Off by default: unclamped factors extrapolate past either child.
    pub clamp_blend: bool,
}

impl Default for ShadingConfig {
    fn default() -> Self {
        Self {
            single_sided: true,
            blinn: true,
            clamp_blend: false,
        }
    }
}
