use crate::{
    config::ShadingConfig,
    math::{Ray, Vector3},
    object::Hit,
};

use super::{MaterialParam, RasterState, SpecularFixPass};

/// Largest shininess the preview pipeline accepts.
pub const MAX_PREVIEW_EXPONENT: f64 = 128.;

/// An analytic Phong / Blinn-Phong material.
#[derive(Debug, Clone, PartialEq)]
pub struct PhongMaterial {
    diffuse: Vector3,
    specular: Vector3,
    exponent: f64,

    /// Tint of mirror reflections. Stored for recursive tracers, unused by `shade`.
    reflective: Vector3,

    /// Tint of transmitted light. Stored for recursive tracers, unused by `shade`.
    transparent: Vector3,

    index_of_refraction: f64,
}

impl PhongMaterial {
    pub fn new(diffuse: Vector3, specular: Vector3, exponent: f64) -> Self {
        Self {
            diffuse,
            specular,
            exponent,
            reflective: Vector3::zero(),
            transparent: Vector3::zero(),
            index_of_refraction: 1.,
        }
    }

    /// Attach the light transport properties used by a recursive tracer.
    pub fn with_transport(
        mut self,
        reflective: Vector3,
        transparent: Vector3,
        index_of_refraction: f64,
    ) -> Self {
        self.reflective = reflective;
        self.transparent = transparent;
        self.index_of_refraction = index_of_refraction;
        self
    }

    pub fn diffuse_color(&self) -> Vector3 {
        self.diffuse
    }

    pub fn specular_color(&self) -> Vector3 {
        self.specular
    }

    pub fn exponent(&self) -> f64 {
        self.exponent
    }

    pub fn reflective_color(&self) -> Vector3 {
        self.reflective
    }

    pub fn transparent_color(&self) -> Vector3 {
        self.transparent
    }

    pub fn index_of_refraction(&self) -> f64 {
        self.index_of_refraction
    }

    /// The exponent clamped into the range the preview pipeline supports.
    /// Shading itself always uses the unclamped value.
    pub fn preview_exponent(&self) -> f64 {
        self.exponent.clamp(0., MAX_PREVIEW_EXPONENT)
    }

    pub fn shade(
        &self,
        ray: &Ray,
        hit: &Hit,
        dir_to_light: Vector3,
        light_color: Vector3,
        config: &ShadingConfig,
    ) -> Vector3 {
        let l = dir_to_light.normalize();
        let n = hit.normal.normalize();
        let t = l.dot(n);
        if t < 0. && config.single_sided {
            return Vector3::zero();
        }

        // single sided clamps negative cosines, double sided mirrors them
        let facing = |cos: f64| {
            if config.single_sided {
                cos.max(0.)
            } else {
                cos.abs()
            }
        };

        let diffuse = self.diffuse * facing(t);

        let view = ray.direction.normalize();
        let cos_spec = if config.blinn {
            let halfway = (l - view).normalize();
            n.dot(halfway)
        } else {
            let reflected = n * (2. * t) - l;
            -view.dot(reflected)
        };
        let specular = self.specular * facing(cos_spec).powf(self.exponent);

        (diffuse + specular) * light_color
    }

    pub fn raster_bind<S: RasterState>(&self, state: &mut S, pass: Option<SpecularFixPass>) {
        let diffuse = rgba(self.diffuse);
        let specular = rgba(self.specular);
        let shininess = self.preview_exponent() as f32;
        let zero = [0.; 4];
        let one = [1.; 4];

        match pass {
            None => {
                state.material(MaterialParam::Diffuse, diffuse);
                state.material(MaterialParam::Ambient, diffuse);
                state.material(MaterialParam::Specular, specular);
                state.shininess(shininess);
            }
            Some(SpecularFixPass::Specular) => {
                state.material(MaterialParam::Diffuse, zero);
                state.material(MaterialParam::Ambient, zero);
                state.material(MaterialParam::Specular, specular);
                state.shininess(shininess);
            }
            Some(SpecularFixPass::NormalDotLight) => {
                state.material(MaterialParam::Diffuse, one);
                state.material(MaterialParam::Ambient, zero);
                state.material(MaterialParam::Specular, zero);
            }
            Some(SpecularFixPass::DiffuseAmbient) => {
                state.material(MaterialParam::Diffuse, diffuse);
                state.material(MaterialParam::Ambient, diffuse);
                state.material(MaterialParam::Specular, zero);
            }
        }
    }
}

fn rgba(c: Vector3) -> [f32; 4] {
    [c.x as f32, c.y as f32, c.z as f32, 1.]
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::*;
    use crate::material::RecordingState;

    fn random_unit(rng: &mut StdRng) -> Vector3 {
        loop {
            let v = Vector3::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            );
            let m = v.magnitude();
            if m > 0.1 && m <= 1. {
                return v / m;
            }
        }
    }

    fn hit(normal: Vector3) -> Hit {
        Hit::new(Vector3::zero(), normal, 1.)
    }

    fn ray(direction: Vector3) -> Ray {
        Ray::new(Vector3::zero() - direction * 4., direction)
    }

    #[test]
    fn red_diffuse_lit_head_on() {
        let m = PhongMaterial::new(Vector3::new(1., 0., 0.), Vector3::zero(), 32.);
        let up = Vector3::new(0., 0., 1.);
        let c = m.shade(
            &ray(-up),
            &hit(up),
            up,
            Vector3::one(),
            &ShadingConfig::default(),
        );
        assert_eq!(c, Vector3::new(1., 0., 0.));
    }

    #[test]
    fn single_sided_cuts_off_back_lights() {
        let mut rng = StdRng::seed_from_u64(7);
        let m = PhongMaterial::new(Vector3::one(), Vector3::one(), 4.);
        for blinn in [true, false] {
            let config = ShadingConfig {
                blinn,
                ..Default::default()
            };
            for _ in 0..500 {
                let n = random_unit(&mut rng);
                let l = random_unit(&mut rng);
                if n.dot(l) >= 0. {
                    continue;
                }
                let c = m.shade(&ray(random_unit(&mut rng)), &hit(n), l, Vector3::one(), &config);
                assert_eq!(c, Vector3::zero());
            }
        }
    }

    #[test]
    fn pure_diffuse_ignores_specular_model() {
        let mut rng = StdRng::seed_from_u64(11);
        let diffuse = Vector3::new(0.8, 0.4, 0.2);
        let light = Vector3::new(0.5, 1., 0.25);
        let m = PhongMaterial::new(diffuse, Vector3::zero(), 20.);
        for _ in 0..500 {
            let n = random_unit(&mut rng);
            let l = random_unit(&mut rng);
            let t = n.dot(l);
            if t < 0. {
                continue;
            }
            // keep the view away from the light so the half vector is defined
            let v = -n;
            if (l - v).magnitude() < 1e-3 {
                continue;
            }
            let expected = diffuse * t * light;
            for blinn in [true, false] {
                let config = ShadingConfig {
                    blinn,
                    ..Default::default()
                };
                let c = m.shade(&ray(v), &hit(n), l, light, &config);
                assert_abs_diff_eq!(c, expected, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn double_sided_mirrors_back_lights() {
        let m = PhongMaterial::new(Vector3::new(0., 1., 0.), Vector3::zero(), 1.);
        let config = ShadingConfig {
            single_sided: false,
            ..Default::default()
        };
        let n = Vector3::new(0., 0., 1.);
        let l = Vector3::new(0., 0.6, -0.8);
        let c = m.shade(&ray(-n), &hit(n), l, Vector3::one(), &config);
        assert_abs_diff_eq!(c, Vector3::new(0., 0.8, 0.), epsilon = 1e-12);
    }

    #[test]
    fn double_sided_specular_uses_absolute_cosine() {
        let m = PhongMaterial::new(Vector3::zero(), Vector3::one(), 2.);
        let n = Vector3::new(0., 0., 1.);
        let l = Vector3::new(0., 0.6, -0.8);

        // viewer below the surface: N.H = -1.8 / sqrt(3.6)
        let blinn = ShadingConfig {
            single_sided: false,
            blinn: true,
            ..Default::default()
        };
        let up = Vector3::new(0., 0., 1.);
        let h = (l - up).normalize();
        assert!(n.dot(h) < 0.);
        let c = m.shade(&ray(up), &hit(n), l, Vector3::one(), &blinn);
        assert_abs_diff_eq!(c, Vector3::splat(n.dot(h).abs().powf(2.)), epsilon = 1e-12);
        assert_abs_diff_eq!(c, Vector3::splat(0.9), epsilon = 1e-12);

        // R = (0, -0.6, -0.8), viewer above: -V.R = -0.8
        let mirror = ShadingConfig {
            single_sided: false,
            blinn: false,
            ..Default::default()
        };
        let down = -up;
        let r = n * (2. * l.dot(n)) - l;
        assert!(-down.dot(r) < 0.);
        let c = m.shade(&ray(down), &hit(n), l, Vector3::one(), &mirror);
        assert_abs_diff_eq!(c, Vector3::splat(0.64), epsilon = 1e-12);
    }

    #[test]
    fn light_direction_is_normalized() {
        let m = PhongMaterial::new(Vector3::one(), Vector3::zero(), 1.);
        let n = Vector3::new(0., 0., 1.);
        let near = m.shade(&ray(-n), &hit(n), n, Vector3::one(), &ShadingConfig::default());
        let far = m.shade(&ray(-n), &hit(n), n * 100., Vector3::one(), &ShadingConfig::default());
        // no distance attenuation
        assert_eq!(near, far);
    }

    #[test]
    fn mirror_highlight_peaks_along_reflection() {
        let m = PhongMaterial::new(Vector3::zero(), Vector3::one(), 50.);
        let config = ShadingConfig {
            blinn: false,
            ..Default::default()
        };
        let n = Vector3::new(0., 0., 1.);
        let l = Vector3::new(1., 0., 1.).normalize();
        // viewer sits on the mirror direction of the light
        let view_dir = Vector3::new(1., 0., -1.).normalize();
        let peak = m.shade(&ray(view_dir), &hit(n), l, Vector3::one(), &config);
        assert_abs_diff_eq!(peak, Vector3::one(), epsilon = 1e-9);

        let off = m.shade(&ray(-n), &hit(n), l, Vector3::one(), &config);
        assert!(off.x < 1e-6);
    }

    #[test]
    fn blinn_highlight_peaks_on_half_vector() {
        let m = PhongMaterial::new(Vector3::zero(), Vector3::new(0.5, 0.5, 0.5), 8.);
        let n = Vector3::new(0., 0., 1.);
        let l = Vector3::new(0., 1., 1.).normalize();
        let view_dir = Vector3::new(0., 1., -1.).normalize();
        let c = m.shade(&ray(view_dir), &hit(n), l, Vector3::one(), &ShadingConfig::default());
        assert_abs_diff_eq!(c, Vector3::splat(0.5), epsilon = 1e-9);
    }

    #[test]
    fn preview_exponent_is_clamped_but_shading_is_not() {
        assert_eq!(PhongMaterial::new(Vector3::one(), Vector3::one(), 500.).preview_exponent(), 128.);
        assert_eq!(PhongMaterial::new(Vector3::one(), Vector3::one(), -3.).preview_exponent(), 0.);
        assert_eq!(PhongMaterial::new(Vector3::one(), Vector3::one(), 500.).exponent(), 500.);
    }

    #[test]
    fn transport_properties_are_kept() {
        let m = PhongMaterial::new(Vector3::one(), Vector3::zero(), 1.).with_transport(
            Vector3::splat(0.5),
            Vector3::splat(0.25),
            1.5,
        );
        assert_eq!(m.reflective_color(), Vector3::splat(0.5));
        assert_eq!(m.transparent_color(), Vector3::splat(0.25));
        assert_eq!(m.index_of_refraction(), 1.5);
    }

    #[test]
    fn binds_single_pass_state() {
        let m = PhongMaterial::new(Vector3::new(1., 0.5, 0.), Vector3::new(0., 0., 1.), 300.);
        let mut state = RecordingState::default();
        m.raster_bind(&mut state, None);
        assert_eq!(state.current.diffuse, [1., 0.5, 0., 1.]);
        assert_eq!(state.current.ambient, [1., 0.5, 0., 1.]);
        assert_eq!(state.current.specular, [0., 0., 1., 1.]);
        assert_eq!(state.current.shininess, 128.);
    }

    #[test]
    fn binds_specular_fix_passes() {
        let m = PhongMaterial::new(Vector3::new(1., 0.5, 0.), Vector3::new(0., 0., 1.), 16.);
        let mut state = RecordingState::default();

        m.raster_bind(&mut state, Some(SpecularFixPass::Specular));
        assert_eq!(state.current.diffuse, [0.; 4]);
        assert_eq!(state.current.ambient, [0.; 4]);
        assert_eq!(state.current.specular, [0., 0., 1., 1.]);
        assert_eq!(state.current.shininess, 16.);

        m.raster_bind(&mut state, Some(SpecularFixPass::NormalDotLight));
        assert_eq!(state.current.diffuse, [1.; 4]);
        assert_eq!(state.current.ambient, [0.; 4]);
        assert_eq!(state.current.specular, [0.; 4]);

        m.raster_bind(&mut state, Some(SpecularFixPass::DiffuseAmbient));
        assert_eq!(state.current.diffuse, [1., 0.5, 0., 1.]);
        assert_eq!(state.current.ambient, [1., 0.5, 0., 1.]);
        assert_eq!(state.current.specular, [0.; 4]);
    }
}
