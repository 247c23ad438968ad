//! Ray-object intersection system.
//!
//! Defines the [`Hittable`] trait for geometric primitives and [`HitRecord`]
//! for storing intersection data.

use glam::Vec3A;

use crate::aabb::Aabb;
use crate::interval::Interval;
use crate::material::MaterialType;
use crate::ray::Ray;

/// Ray-object intersection information.
///
/// Contains intersection point, surface normal, distance, surface coordinates
/// and material data needed for shading calculations.
#[derive(Debug, Clone, Default)]
pub struct HitRecord {
    /// Point where the ray intersects the object
    pub p: Vec3A,
    /// Surface normal at the intersection point (unit vector)
    pub normal: Vec3A,
    /// Distance along the ray to the intersection point
    pub t: f32,
    /// Surface u coordinate in [0, 1] (equirectangular longitude for spheres)
    pub u: f32,
    /// Surface v coordinate in [0, 1] (equirectangular latitude for spheres)
    pub v: f32,
    /// True if ray hits the front face, false if hits the back face
    pub front_face: bool,
    /// Material of the object at the hit point
    pub material: MaterialType,
}

impl HitRecord {
    /// Set surface normal and determine front/back face.
    ///
    /// `outward_normal` must be a unit vector. The stored normal always points
    /// against the incident ray; `front_face` records which side was hit,
    /// which materials need to pick the refraction direction.
    pub fn set_face_normal(&mut self, r: &Ray, outward_normal: Vec3A) {
        self.front_face = r.direction.dot(outward_normal) < 0.0;
        self.normal = if self.front_face {
            outward_normal
        } else {
            -outward_normal
        };
    }
}

/// Trait for objects that can be intersected by rays.
///
/// Core abstraction for geometric primitives. Must be thread-safe
/// (Sync + Send) so a scene can be shared read-only across render workers.
pub trait Hittable: Sync + Send {
    /// Test for ray intersection within the given parameter range.
    ///
    /// Returns true if hit, updating the hit record with intersection details.
    /// An accepted t-value always satisfies `ray_t.surrounds(t)`.
    fn hit(&self, r: &Ray, ray_t: Interval, rec: &mut HitRecord) -> bool;

    /// Bounding box enclosing the object over the whole shutter interval.
    fn bounding_box(&self) -> Aabb;
}

/// Collection of objects forming a scene.
///
/// Uses linear search for intersection testing. Supports polymorphic
/// objects through Box<dyn Hittable>.
#[derive(Default)]
pub struct HittableList {
    /// Vector of boxed hittable objects
    pub objects: Vec<Box<dyn Hittable>>,
    bbox: Aabb,
}

impl HittableList {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            bbox: Aabb::EMPTY,
        }
    }

    /// Add an object to the scene, growing the cached bounding box.
    pub fn add(&mut self, object: Box<dyn Hittable>) {
        self.bbox = Aabb::enclosing(&self.bbox, &object.bounding_box());
        self.objects.push(object);
    }
}

impl Hittable for HittableList {
    fn hit(&self, r: &Ray, ray_t: Interval, rec: &mut HitRecord) -> bool {
        let mut temp_rec = HitRecord::default();
        let mut hit_anything = false;
        let mut closest_so_far = ray_t.max;

        // Each accepted hit shrinks the acceptance interval, so the record
        // left behind is the closest intersection.
        for object in &self.objects {
            if object.hit(r, Interval::new(ray_t.min, closest_so_far), &mut temp_rec) {
                hit_anything = true;
                closest_so_far = temp_rec.t;
                *rec = temp_rec.clone();
            }
        }

        hit_anything
    }

    fn bounding_box(&self) -> Aabb {
        self.bbox
    }
}
