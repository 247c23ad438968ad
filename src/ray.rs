//! Ray representation for 3D ray tracing.
//!
//! A ray is defined as r(t) = origin + t * direction, representing a semi-infinite
//! line in 3D space used for intersection testing. Each ray also carries the
//! shutter time at which it samples the scene, for motion blur.

use glam::Vec3A;

/// Ray in 3D space defined by origin, direction and sample time.
///
/// Mathematical representation: r(t) = origin + t * direction
#[derive(Debug, Clone, Copy, Default)]
pub struct Ray {
    /// Starting point of the ray in world coordinates.
    ///
    /// Typically the camera position (or a defocus-disk sample) for primary
    /// rays, or a surface point for scattered rays.
    pub origin: Vec3A,

    /// Direction vector of the ray.
    ///
    /// Not required to be normalized; the intersection math divides by the
    /// squared length where it matters.
    pub direction: Vec3A,

    /// Shutter time in [0, 1) at which this ray samples the scene.
    ///
    /// Moving primitives evaluate their position at this time. Scattered rays
    /// inherit the time of the ray that spawned them.
    pub time: f32,
}

impl Ray {
    /// Create a new ray with origin, direction and sample time.
    pub fn new(origin: Vec3A, direction: Vec3A, time: f32) -> Self {
        Self {
            origin,
            direction,
            time,
        }
    }

    /// Compute a point at parameter t along the ray.
    ///
    /// Returns r(t) = origin + t * direction.
    pub fn at(&self, t: f32) -> Vec3A {
        self.origin + t * self.direction
    }
}
