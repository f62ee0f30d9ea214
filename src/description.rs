//! Scene descriptions in RON, and building the shared material graph out of them.

use std::{
    collections::{BTreeMap, HashMap, HashSet},
    fs,
    path::Path,
    sync::Arc,
};

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    camera::Camera,
    lighting::{Directional, Point},
    material::{Checkerboard, Composite, MarbleMaterial, Material, NoiseMaterial, PhongMaterial},
    math::{Matrix, Vector3},
    object::{Plane, Sphere},
    scene::{Scene, SceneOptions},
};

#[derive(Debug, Error)]
pub enum DescriptionError {
    #[error("failed to read scene description: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scene description: {0}")]
    Parse(String),

    #[error("{referenced_by} references unknown material {name}")]
    UnknownMaterial { name: String, referenced_by: String },

    #[error("material {0} is its own descendant")]
    CyclicMaterial(String),

    #[error("material {name} has specular exponent {exponent}, expecting a finite value of at least 0")]
    InvalidExponent { name: String, exponent: f64 },
}

/// Translation, rotation (Euler XYZ, radians) and scale, applied scale first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformDesc {
    pub translate: Vector3,
    pub rotate: Vector3,
    pub scale: Vector3,
}

impl Default for TransformDesc {
    fn default() -> Self {
        Self {
            translate: Vector3::zero(),
            rotate: Vector3::zero(),
            scale: Vector3::one(),
        }
    }
}

impl TransformDesc {
    pub fn to_matrix(&self) -> Matrix {
        Matrix::from(self.translate)
            * Matrix::from_euler_xyz(self.rotate.x, self.rotate.y, self.rotate.z)
            * Matrix::scaling(self.scale)
    }
}

fn one() -> f64 {
    1.
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MaterialDesc {
    Phong {
        diffuse: Vector3,
        #[serde(default)]
        specular: Vector3,
        #[serde(default)]
        exponent: f64,
        #[serde(default)]
        reflective: Vector3,
        #[serde(default)]
        transparent: Vector3,
        #[serde(default = "one")]
        index_of_refraction: f64,
    },
    Checkerboard {
        #[serde(default)]
        transform: TransformDesc,
        material1: String,
        material2: String,
    },
    Noise {
        #[serde(default)]
        transform: TransformDesc,
        material1: String,
        material2: String,
        octaves: u32,
    },
    Marble {
        #[serde(default)]
        transform: TransformDesc,
        material1: String,
        material2: String,
        octaves: u32,
        frequency: f64,
        amplitude: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ObjectDesc {
    Sphere {
        center: Vector3,
        radius: f64,
        material: String,
    },
    Plane {
        origin: Vector3,
        normal: Vector3,
        material: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LightDesc {
    Directional(Directional),
    Point(Point),
}

/// Everything needed to build a `Scene`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    #[serde(default)]
    pub options: SceneOptions,
    #[serde(default)]
    pub camera: Camera,
    pub materials: BTreeMap<String, MaterialDesc>,
    pub objects: Vec<ObjectDesc>,
    #[serde(default)]
    pub lights: Vec<LightDesc>,
}

impl SceneDescription {
    /// Parse a description from RON source.
    pub fn parse(source: &str) -> Result<Self, DescriptionError> {
        ron::from_str(source).map_err(|e| DescriptionError::Parse(e.to_string()))
    }

    /// Read and parse a description file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DescriptionError> {
        let source = fs::read_to_string(path)?;
        Self::parse(&source)
    }

    /// Build every named material. Children are shared, each name is built once.
    pub fn build_materials(&self) -> Result<BTreeMap<String, Arc<Material>>, DescriptionError> {
        let mut resolver = Resolver::new(&self.materials);
        self.materials
            .keys()
            .map(|name| Ok((name.clone(), resolver.resolve(name, "scene")?)))
            .collect()
    }

    /// Build the full scene. Fails on the first configuration error found.
    pub fn build(&self) -> Result<Scene, DescriptionError> {
        let materials = self.build_materials()?;
        let lookup = |name: &str, i: usize| {
            materials
                .get(name)
                .cloned()
                .ok_or_else(|| DescriptionError::UnknownMaterial {
                    name: name.to_owned(),
                    referenced_by: format!("object #{}", i),
                })
        };

        let mut scene = Scene {
            camera: self.camera.clone(),
            options: self.options.clone(),
            ..Default::default()
        };

        for (i, object) in self.objects.iter().enumerate() {
            match object {
                ObjectDesc::Sphere {
                    center,
                    radius,
                    material,
                } => scene.objects.push(Box::new(Sphere::new(
                    *center,
                    *radius,
                    lookup(material.as_str(), i)?,
                ))),
                ObjectDesc::Plane {
                    origin,
                    normal,
                    material,
                } => scene.objects.push(Box::new(Plane::new(
                    *origin,
                    *normal,
                    lookup(material.as_str(), i)?,
                ))),
            }
        }

        for light in self.lights.iter() {
            match light {
                LightDesc::Directional(l) => scene.lights.push(Box::new(l.clone())),
                LightDesc::Point(l) => scene.lights.push(Box::new(l.clone())),
            }
        }

        debug!(
            "built scene with {} materials, {} objects, {} lights",
            materials.len(),
            scene.objects.len(),
            scene.lights.len()
        );
        Ok(scene)
    }
}

/// Depth first material construction with cycle detection.
struct Resolver<'a> {
    descs: &'a BTreeMap<String, MaterialDesc>,
    built: HashMap<String, Arc<Material>>,
    visiting: HashSet<String>,
}

impl<'a> Resolver<'a> {
    fn new(descs: &'a BTreeMap<String, MaterialDesc>) -> Self {
        Self {
            descs,
            built: HashMap::new(),
            visiting: HashSet::new(),
        }
    }

    fn resolve(&mut self, name: &str, referenced_by: &str) -> Result<Arc<Material>, DescriptionError> {
        if let Some(material) = self.built.get(name) {
            return Ok(material.clone());
        }

        let descs = self.descs;
        let desc = descs
            .get(name)
            .ok_or_else(|| DescriptionError::UnknownMaterial {
                name: name.to_owned(),
                referenced_by: format!("material {}", referenced_by),
            })?;

        if !self.visiting.insert(name.to_owned()) {
            return Err(DescriptionError::CyclicMaterial(name.to_owned()));
        }

        let material: Material = match desc {
            MaterialDesc::Phong {
                diffuse,
                specular,
                exponent,
                reflective,
                transparent,
                index_of_refraction,
            } => {
                if !exponent.is_finite() || *exponent < 0. {
                    return Err(DescriptionError::InvalidExponent {
                        name: name.to_owned(),
                        exponent: *exponent,
                    });
                }
                PhongMaterial::new(*diffuse, *specular, *exponent)
                    .with_transport(*reflective, *transparent, *index_of_refraction)
                    .into()
            }
            MaterialDesc::Checkerboard {
                transform,
                material1,
                material2,
            } => Checkerboard::new(self.composite(name, transform, material1, material2)?).into(),
            MaterialDesc::Noise {
                transform,
                material1,
                material2,
                octaves,
            } => NoiseMaterial::new(
                self.composite(name, transform, material1, material2)?,
                *octaves,
            )
            .into(),
            MaterialDesc::Marble {
                transform,
                material1,
                material2,
                octaves,
                frequency,
                amplitude,
            } => MarbleMaterial::new(
                self.composite(name, transform, material1, material2)?,
                *octaves,
                *frequency,
                *amplitude,
            )
            .into(),
        };

        debug!("built material {}", name);
        self.visiting.remove(name);
        let material = Arc::new(material);
        self.built.insert(name.to_owned(), material.clone());
        Ok(material)
    }

    fn composite(
        &mut self,
        name: &str,
        transform: &TransformDesc,
        material1: &str,
        material2: &str,
    ) -> Result<Composite, DescriptionError> {
        Ok(Composite::new(
            transform.to_matrix(),
            self.resolve(material1, name)?,
            self.resolve(material2, name)?,
        ))
    }
}
