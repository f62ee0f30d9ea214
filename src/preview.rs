//! Driving a rasterized preview of the scene's materials.

use log::debug;

use crate::{
    material::{RasterState, SpecularFixPass},
    object::SceneObject,
};

/// Binds and draws every surface in order, once, or three times with the specular fix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreviewPass {
    pub specular_fix: bool,
}

impl PreviewPass {
    pub fn new(specular_fix: bool) -> Self {
        Self { specular_fix }
    }

    /// The sequence of draws over the whole scene, `None` being the plain single pass.
    pub fn passes(&self) -> Vec<Option<SpecularFixPass>> {
        if self.specular_fix {
            SpecularFixPass::ALL.iter().copied().map(Some).collect()
        } else {
            vec![None]
        }
    }

    /// Bind each object's material and draw it, in draw order.
    pub fn run<S: RasterState>(&self, objects: &[Box<dyn SceneObject>], state: &mut S) {
        for pass in self.passes() {
            debug!(
                "preview pass {:?} over {} surfaces",
                pass.map(SpecularFixPass::index),
                objects.len()
            );
            for (i, object) in objects.iter().enumerate() {
                object.material().raster_bind(state, pass);
                state.draw_surface(i);
            }
        }
    }
}
