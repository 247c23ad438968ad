//! Sphere primitive for ray tracing.
//!
//! Implements ray-sphere intersection using the half-angle quadratic formula.
//! The center is stored as a [`Ray`] so a sphere moving linearly over the
//! shutter interval is the same code path as a static one with zero velocity.

use glam::Vec3A;
use std::f32::consts::PI;

use crate::aabb::Aabb;
use crate::hittable::{HitRecord, Hittable};
use crate::interval::Interval;
use crate::material::MaterialType;
use crate::ray::Ray;

/// Sphere primitive defined by a (possibly moving) center, radius and material.
#[derive(Debug, Clone)]
pub struct Sphere {
    /// Center position as a function of time: origin at t=0, direction is the
    /// velocity over the shutter interval.
    center: Ray,

    /// Radius of the sphere (always non-negative).
    radius: f32,

    /// Material properties determining light interaction.
    material: MaterialType,

    /// Precomputed box; for moving spheres the union of the t=0 and t=1 boxes.
    bbox: Aabb,
}

impl Sphere {
    /// Create a static sphere.
    ///
    /// Negative radius values are clamped to 0.0.
    pub fn new(center: Vec3A, radius: f32, material: MaterialType) -> Self {
        let radius = radius.max(0.0);
        let rvec = Vec3A::splat(radius);
        Self {
            center: Ray::new(center, Vec3A::ZERO, 0.0),
            radius,
            material,
            bbox: Aabb::from_points(center - rvec, center + rvec),
        }
    }

    /// Create a sphere moving linearly from `center0` at t=0 to `center1` at t=1.
    ///
    /// Negative radius values are clamped to 0.0.
    pub fn new_moving(center0: Vec3A, center1: Vec3A, radius: f32, material: MaterialType) -> Self {
        let radius = radius.max(0.0);
        let rvec = Vec3A::splat(radius);
        let center = Ray::new(center0, center1 - center0, 0.0);
        let box0 = Aabb::from_points(center.at(0.0) - rvec, center.at(0.0) + rvec);
        let box1 = Aabb::from_points(center.at(1.0) - rvec, center.at(1.0) + rvec);
        Self {
            center,
            radius,
            material,
            bbox: Aabb::enclosing(&box0, &box1),
        }
    }

    /// Map an outward unit normal to equirectangular (u, v) coordinates.
    ///
    /// u in [0, 1] is the angle around the y axis from x = -1, v in [0, 1] is
    /// the angle from y = -1 to y = +1.
    fn sphere_uv(p: Vec3A) -> (f32, f32) {
        let theta = (-p.y).acos();
        let phi = (-p.z).atan2(p.x) + PI;
        (phi / (2.0 * PI), theta / PI)
    }
}

impl Hittable for Sphere {
    fn hit(&self, r: &Ray, ray_t: Interval, rec: &mut HitRecord) -> bool {
        // Evaluate the center at the ray's sample time for motion blur
        let current_center = self.center.at(r.time);
        let oc = current_center - r.origin;

        // Half-angle quadratic coefficients
        let a = r.direction.length_squared();
        let h = r.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return false;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root that lies in the acceptable range
        let mut root = (h - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (h + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return false;
            }
        }

        rec.t = root;
        rec.p = r.at(rec.t);
        let outward_normal = (rec.p - current_center) / self.radius;
        rec.set_face_normal(r, outward_normal);
        // Texture coordinates come from the outward normal, not the hit point
        (rec.u, rec.v) = Self::sphere_uv(outward_normal);
        rec.material = self.material;

        true
    }

    fn bounding_box(&self) -> Aabb {
        self.bbox
    }
}
