//! Axis-aligned bounding boxes.
//!
//! An AABB is stored as one [`Interval`] per axis. Boxes are used purely as an
//! acceleration hint by aggregates; a missed box test may skip work but never
//! changes the rendered result.

use glam::Vec3A;

use crate::interval::Interval;
use crate::ray::Ray;

/// Axis-aligned bounding box represented as three axis intervals.
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    /// Extent along the x axis
    pub x: Interval,
    /// Extent along the y axis
    pub y: Interval,
    /// Extent along the z axis
    pub z: Interval,
}

impl Default for Aabb {
    fn default() -> Self {
        Aabb::EMPTY
    }
}

impl Aabb {
    /// Empty box, the identity for [`Aabb::enclosing`].
    pub const EMPTY: Aabb = Aabb {
        x: Interval::EMPTY,
        y: Interval::EMPTY,
        z: Interval::EMPTY,
    };

    /// Create a box from three axis intervals.
    pub fn new(x: Interval, y: Interval, z: Interval) -> Self {
        let mut aabb = Self { x, y, z };
        aabb.pad_to_minimums();
        aabb
    }

    /// Create a box with two opposite corner points.
    ///
    /// The points may be in any order; each axis interval takes the
    /// per-component min and max.
    pub fn from_points(a: Vec3A, b: Vec3A) -> Self {
        Self::new(
            Interval::new(a.x.min(b.x), a.x.max(b.x)),
            Interval::new(a.y.min(b.y), a.y.max(b.y)),
            Interval::new(a.z.min(b.z), a.z.max(b.z)),
        )
    }

    /// Create the tightest box enclosing both input boxes.
    pub fn enclosing(a: &Aabb, b: &Aabb) -> Self {
        Self {
            x: Interval::enclosing(a.x, b.x),
            y: Interval::enclosing(a.y, b.y),
            z: Interval::enclosing(a.z, b.z),
        }
    }

    /// Slab test: does the ray pass through the box within `ray_t`?
    pub fn hit(&self, r: &Ray, mut ray_t: Interval) -> bool {
        for axis in 0..3 {
            let ax = self.axis_interval(axis);
            let adinv = 1.0 / r.direction[axis];

            let t0 = (ax.min - r.origin[axis]) * adinv;
            let t1 = (ax.max - r.origin[axis]) * adinv;

            let (t0, t1) = if t0 < t1 { (t0, t1) } else { (t1, t0) };
            ray_t.min = ray_t.min.max(t0);
            ray_t.max = ray_t.max.min(t1);

            if ray_t.max <= ray_t.min {
                return false;
            }
        }
        true
    }

    fn axis_interval(&self, axis: usize) -> Interval {
        match axis {
            0 => self.x,
            1 => self.y,
            _ => self.z,
        }
    }

    // Zero-thickness slabs produce false negatives in the slab test, so every
    // axis keeps a small minimum width.
    fn pad_to_minimums(&mut self) {
        let delta = 0.0001;
        if self.x.size() < delta {
            self.x = self.x.expand(delta);
        }
        if self.y.size() < delta {
            self.y = self.y.expand(delta);
        }
        if self.z.size() < delta {
            self.z = self.z.expand(delta);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_points_orders_each_axis() {
        let b = Aabb::from_points(Vec3A::new(1.0, -2.0, 3.0), Vec3A::new(-1.0, 2.0, 5.0));
        assert_eq!(b.x.min, -1.0);
        assert_eq!(b.x.max, 1.0);
        assert_eq!(b.y.min, -2.0);
        assert_eq!(b.y.max, 2.0);
        assert_eq!(b.z.min, 3.0);
        assert_eq!(b.z.max, 5.0);
    }

    #[test]
    fn degenerate_axes_are_padded() {
        let b = Aabb::from_points(Vec3A::new(0.0, 0.0, 0.0), Vec3A::new(1.0, 0.0, 1.0));
        assert!(b.y.size() > 0.0);
    }

    #[test]
    fn enclosing_covers_both_boxes() {
        let a = Aabb::from_points(Vec3A::splat(-1.0), Vec3A::splat(0.0));
        let b = Aabb::from_points(Vec3A::splat(0.5), Vec3A::splat(2.0));
        let u = Aabb::enclosing(&a, &b);
        assert_eq!(u.x.min, -1.0);
        assert_eq!(u.x.max, 2.0);
        assert_eq!(u.z.min, -1.0);
        assert_eq!(u.z.max, 2.0);
    }

    #[test]
    fn enclosing_with_empty_is_identity() {
        let a = Aabb::from_points(Vec3A::splat(-1.0), Vec3A::splat(1.0));
        let u = Aabb::enclosing(&Aabb::EMPTY, &a);
        assert_eq!(u.x.min, a.x.min);
        assert_eq!(u.y.max, a.y.max);
    }

    #[test]
    fn slab_test_hits_and_misses() {
        let b = Aabb::from_points(Vec3A::splat(-1.0), Vec3A::splat(1.0));
        let toward = Ray::new(Vec3A::new(0.0, 0.0, -5.0), Vec3A::new(0.0, 0.0, 1.0), 0.0);
        let away = Ray::new(Vec3A::new(0.0, 0.0, -5.0), Vec3A::new(0.0, 0.0, -1.0), 0.0);
        let offset = Ray::new(Vec3A::new(3.0, 0.0, -5.0), Vec3A::new(0.0, 0.0, 1.0), 0.0);
        assert!(b.hit(&toward, Interval::new(0.001, f32::INFINITY)));
        assert!(!b.hit(&away, Interval::new(0.001, f32::INFINITY)));
        assert!(!b.hit(&offset, Interval::new(0.001, f32::INFINITY)));
    }
}
