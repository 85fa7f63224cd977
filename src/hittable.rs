//! Ray-object intersection system.
//!
//! Defines the [`Hittable`] trait for geometric primitives, [`HitRecord`]
//! for intersection data, and [`HittableList`] for aggregating a scene.

use crate::interval::Interval;
use crate::ray::Ray;
use crate::vec3::{Point3, Vec3};

/// Ray-object intersection information.
///
/// Produced fresh by each successful intersection test; the list aggregate
/// keeps only the nearest one seen so far.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord {
    /// Point where the ray intersects the surface
    pub p: Point3,
    /// Surface normal at the intersection point (unit length).
    ///
    /// Always the geometric outward normal. It is never flipped to face the
    /// incident ray, so a ray starting inside a sphere sees a normal
    /// pointing away from itself. The normal-visualization shading relies on
    /// this orientation.
    pub normal: Vec3,
    /// Parametric distance along the ray to the intersection point
    pub t: f64,
}

/// Trait for objects that can be intersected by rays.
///
/// `Sync + Send` so a scene can be shared across threads; nothing in a
/// render mutates a primitive.
pub trait Hittable: Sync + Send {
    /// Test for ray intersection with `t` strictly inside `ray_t`.
    ///
    /// Returns the nearest intersection in range, or `None` on a miss.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord>;
}

/// Collection of objects forming a scene.
///
/// Linear search over polymorphic members; resolves to the globally
/// nearest intersection.
#[derive(Default)]
pub struct HittableList {
    objects: Vec<Box<dyn Hittable>>,
}

impl HittableList {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object to the scene.
    pub fn add(&mut self, object: Box<dyn Hittable>) {
        self.objects.push(object);
    }

    /// Remove all objects from the scene.
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Number of objects in the scene.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// True when the scene holds no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Hittable for HittableList {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let mut closest_so_far = ray_t.max;
        let mut closest_hit = None;

        for object in &self.objects {
            // Narrow the ceiling to the best t seen so far, so farther
            // members are rejected inside their own root selection. An
            // equal-t candidate fails `surrounds`, keeping the earlier
            // member on exact ties.
            if let Some(rec) = object.hit(ray, Interval::new(ray_t.min, closest_so_far)) {
                closest_so_far = rec.t;
                closest_hit = Some(rec);
            }
        }

        closest_hit
    }
}
