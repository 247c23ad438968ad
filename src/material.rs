//! Material system for ray tracing.
//!
//! Implements four material types: Lambertian (diffuse), Metal (specular),
//! Dielectric (transparent) and DiffuseLight (emissive). The integrator only
//! depends on the scatter/emitted contract, not on the individual variants.

use glam::Vec3A;

use crate::hittable::HitRecord;
use crate::random::{self, DefaultRng};
use crate::ray::Ray;

/// RGB color type using Vec3A for SIMD optimization.
pub type Color = Vec3A;

/// Result of a successful scatter: the outgoing ray and its attenuation.
#[derive(Debug, Clone, Copy)]
pub struct Scatter {
    /// Per-channel reflectance applied to the scattered ray's radiance
    pub attenuation: Color,
    /// The outgoing ray; inherits the incoming ray's time
    pub ray: Ray,
}

/// Material types for ray tracing.
///
/// Closed enum dispatched by match. Copy so hit records and primitives can
/// hold materials by value without shared ownership.
#[derive(Debug, Clone, Copy)]
pub enum MaterialType {
    /// Lambertian diffuse material for matte surfaces.
    Lambertian {
        /// Surface color/reflectance.
        albedo: Color,
    },

    /// Metallic material with specular reflection.
    Metal {
        /// Metal color.
        albedo: Color,
        /// Surface roughness (0.0 = mirror, 1.0 = rough).
        fuzz: f32,
    },

    /// Dielectric (transparent) material with refraction.
    Dielectric {
        /// Index of refraction (1.0 = air, 1.5 = glass, etc.).
        refraction_index: f32,
    },

    /// Emissive material for light sources; absorbs all incoming rays.
    DiffuseLight {
        /// Radiance emitted regardless of viewing direction.
        emit: Color,
    },
}

impl Default for MaterialType {
    fn default() -> Self {
        MaterialType::Lambertian {
            albedo: Color::ZERO,
        }
    }
}

impl MaterialType {
    /// Compute ray scattering for this material.
    ///
    /// Returns the attenuated outgoing ray, or None if the ray is absorbed.
    pub fn scatter(&self, r_in: &Ray, rec: &HitRecord, rng: &mut DefaultRng) -> Option<Scatter> {
        match *self {
            MaterialType::Lambertian { albedo } => scatter_lambertian(albedo, r_in, rec, rng),
            MaterialType::Metal { albedo, fuzz } => scatter_metal(albedo, fuzz, r_in, rec, rng),
            MaterialType::Dielectric { refraction_index } => {
                scatter_dielectric(refraction_index, r_in, rec, rng)
            }
            MaterialType::DiffuseLight { .. } => None,
        }
    }

    /// Radiance emitted at the given surface point.
    ///
    /// Zero for every non-emissive material.
    pub fn emitted(&self, _u: f32, _v: f32, _p: Vec3A) -> Color {
        match *self {
            MaterialType::DiffuseLight { emit } => emit,
            _ => Color::ZERO,
        }
    }
}

/// Lambertian diffuse scattering with cosine-weighted distribution.
fn scatter_lambertian(
    albedo: Color,
    r_in: &Ray,
    rec: &HitRecord,
    rng: &mut DefaultRng,
) -> Option<Scatter> {
    let mut scatter_direction = rec.normal + random::random_unit_vector(rng);

    // Catch degenerate scatter direction (very close to zero)
    if scatter_direction.length_squared() < 1e-8 {
        scatter_direction = rec.normal;
    }

    Some(Scatter {
        attenuation: albedo,
        ray: Ray::new(rec.p, scatter_direction, r_in.time),
    })
}

/// Metallic reflection with optional surface roughness.
fn scatter_metal(
    albedo: Color,
    fuzz: f32,
    r_in: &Ray,
    rec: &HitRecord,
    rng: &mut DefaultRng,
) -> Option<Scatter> {
    let reflected = reflect(r_in.direction, rec.normal);
    let direction = reflected.normalize() + fuzz.min(1.0) * random::random_unit_vector(rng);

    // Fuzzed rays that end up below the surface are absorbed
    if direction.dot(rec.normal) <= 0.0 {
        return None;
    }

    Some(Scatter {
        attenuation: albedo,
        ray: Ray::new(rec.p, direction, r_in.time),
    })
}

/// Dielectric scattering with reflection and refraction using Fresnel equations.
fn scatter_dielectric(
    refraction_index: f32,
    r_in: &Ray,
    rec: &HitRecord,
    rng: &mut DefaultRng,
) -> Option<Scatter> {
    let ri = if rec.front_face {
        1.0 / refraction_index
    } else {
        refraction_index
    };

    let unit_direction = r_in.direction.normalize();
    let cos_theta = (-unit_direction).dot(rec.normal).min(1.0);
    let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

    let cannot_refract = ri * sin_theta > 1.0;

    let direction = if cannot_refract || reflectance(cos_theta, ri) > random::random_f32(rng) {
        reflect(unit_direction, rec.normal)
    } else {
        refract(unit_direction, rec.normal, ri)
    };

    Some(Scatter {
        // Glass doesn't attenuate light
        attenuation: Color::ONE,
        ray: Ray::new(rec.p, direction, r_in.time),
    })
}

/// Reflect a vector off a surface using the law of reflection.
fn reflect(v: Vec3A, n: Vec3A) -> Vec3A {
    v - 2.0 * v.dot(n) * n
}

/// Refract a vector through an interface using Snell's law.
fn refract(uv: Vec3A, n: Vec3A, etai_over_etat: f32) -> Vec3A {
    let cos_theta = (-uv).dot(n).min(1.0);
    let r_out_perp = etai_over_etat * (uv + cos_theta * n);
    let r_out_parallel = -(1.0 - r_out_perp.length_squared()).abs().sqrt() * n;
    r_out_perp + r_out_parallel
}

/// Compute Fresnel reflectance using Schlick's approximation.
fn reflectance(cosine: f32, refraction_index: f32) -> f32 {
    let r0 = (1.0 - refraction_index) / (1.0 + refraction_index);
    let r0 = r0 * r0;
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}
