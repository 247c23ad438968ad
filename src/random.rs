//! Random sampling helpers for ray tracing.
//!
//! Every sampling function takes an explicit RNG handle instead of touching a
//! shared generator: each render worker owns an independently seeded stream,
//! which keeps renders reproducible for a fixed seed and free of data races.

use glam::Vec3A;
use rand::Rng;
use rand_chacha::ChaCha20Rng;

/// The RNG used throughout the renderer.
///
/// ChaCha20 is seedable, portable across platforms, and cheap enough for the
/// sample counts involved.
pub type DefaultRng = ChaCha20Rng;

/// Generate a random f32 in [0.0, 1.0)
pub fn random_f32(rng: &mut DefaultRng) -> f32 {
    rng.random()
}

/// Generate a random f32 in [min, max)
pub fn random_f32_range(rng: &mut DefaultRng, min: f32, max: f32) -> f32 {
    min + (max - min) * random_f32(rng)
}

/// Generate random unit vector uniformly distributed on the unit sphere.
pub fn random_unit_vector(rng: &mut DefaultRng) -> Vec3A {
    // Uniform θ in [0, 2π), uniform cos(φ) in [-1, 1]
    let theta = 2.0 * std::f32::consts::PI * rng.random::<f32>();
    let cos_phi = 2.0 * rng.random::<f32>() - 1.0;
    let sin_phi = (1.0 - cos_phi * cos_phi).sqrt();

    Vec3A::new(sin_phi * theta.cos(), sin_phi * theta.sin(), cos_phi)
}

/// Generate a random point inside the unit disk (z = 0) by rejection sampling.
pub fn random_in_unit_disk(rng: &mut DefaultRng) -> Vec3A {
    loop {
        let p = Vec3A::new(
            random_f32_range(rng, -1.0, 1.0),
            random_f32_range(rng, -1.0, 1.0),
            0.0,
        );
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Generate a random RGB color with components in [0.0, 1.0).
pub fn random_color(rng: &mut DefaultRng) -> Vec3A {
    Vec3A::new(random_f32(rng), random_f32(rng), random_f32(rng))
}

/// Generate a random RGB color with components in [min, max).
pub fn random_color_range(rng: &mut DefaultRng, min: f32, max: f32) -> Vec3A {
    Vec3A::new(
        random_f32_range(rng, min, max),
        random_f32_range(rng, min, max),
        random_f32_range(rng, min, max),
    )
}
