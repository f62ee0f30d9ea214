use std::path::Path;

use log::info;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    camera::Camera,
    config::ShadingConfig,
    lighting::Light,
    material::Color,
    math::{Ray, Vector3},
    object::{Hit, SceneObject},
};

/// A very small value, close to zero, to prevent weird overlapping.
pub const EPSILON: f64 = 0.00000000001;

/// Scene options. Defaults are provided.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneOptions {
    /// Switches applied to every material evaluation.
    pub shading: ShadingConfig,

    /// The ambient color of the scene, scaled by each surface's diffuse color.
    pub ambient: Vector3,

    /// Color of rays that hit nothing.
    pub background: Vector3,

    /// Draw the preview in three passes to hide wide-lobe highlight artifacts.
    pub specular_fix: bool,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            shading: ShadingConfig::default(),
            ambient: Vector3::splat(0.1),
            background: Vector3::zero(),
            specular_fix: false,
        }
    }
}

/// A scene, which contains a list of objects, lights, and a camera to render from.
#[derive(Default)]
pub struct Scene {
    pub objects: Vec<Box<dyn SceneObject>>,
    pub lights: Vec<Box<dyn Light>>,
    pub camera: Camera,
    pub options: SceneOptions,
}

impl Scene {
    /// Find the nearest object struck by a ray.
    pub fn cast_ray(&self, ray: &Ray) -> Option<(&dyn SceneObject, Hit)> {
        self.objects
            .iter()
            .filter_map(|object| object.intersect(ray).map(|hit| (object.as_ref(), hit)))
            .min_by(|(_, a), (_, b)| {
                a.near
                    .partial_cmp(&b.near)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    }

    /// Trace out a ray, getting its linear color.
    ///
    /// Every light contributes one direct sample; there are no shadow or
    /// secondary rays.
    pub fn trace_ray(&self, ray: &Ray) -> Vector3 {
        let (object, hit) = match self.cast_ray(ray) {
            Some(r) => r,
            None => return self.options.background,
        };

        let material = object.material();
        let mut color = self.options.ambient * material.diffuse_color();
        for light in self.lights.iter() {
            let light = light.illuminate(hit.point);
            color += material.shade(
                ray,
                &hit,
                light.dir_to_light,
                light.color,
                &self.options.shading,
            );
        }

        color
    }

    /// Trace out a pixel, where top-left of the image is (0, 0).
    /// This function is run many times in parallel.
    pub fn trace_pixel(&self, x: u32, y: u32) -> Color {
        self.trace_ray(&self.camera.ray_at(x, y)).into()
    }

    /// Render the image out as a list of Colors.
    pub fn render(&self) -> Vec<Color> {
        let (vw, vh) = (self.camera.vw, self.camera.vh);

        // materials are immutable once built, so pixels shade independently
        (0..(vw * vh))
            .into_par_iter()
            .map(|i| self.trace_pixel(i % vw, i / vw))
            .collect::<Vec<_>>()
    }

    /// Render the image out to the desired save file.
    pub fn render_to<P: AsRef<Path>>(
        &self,
        path: P,
        format: image::ImageFormat,
    ) -> image::ImageResult<()> {
        info!(
            "rendering {}x{} with {} objects and {} lights",
            self.camera.vw,
            self.camera.vh,
            self.objects.len(),
            self.lights.len()
        );
        let rendered = self.render();

        let mut imgbuf: image::RgbImage = image::ImageBuffer::new(self.camera.vw, self.camera.vh);
        for (i, color) in rendered.into_iter().enumerate() {
            imgbuf.put_pixel(
                i as u32 % self.camera.vw,
                i as u32 / self.camera.vw,
                color.into(),
            );
        }

        imgbuf.save_with_format(path, format)?;
        info!("render written");
        Ok(())
    }
}
