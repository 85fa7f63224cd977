//! Sphere primitive.
//!
//! Analytic ray-sphere intersection via the simplified quadratic formula.

use crate::hittable::{HitRecord, Hittable};
use crate::interval::Interval;
use crate::ray::Ray;
use crate::vec3::Point3;

/// Sphere defined by center and radius.
///
/// The radius is taken as given: only `radius > 0` describes a valid
/// sphere, but degenerate input is the caller's responsibility. A zero
/// radius makes the normal computation divide by zero.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    center: Point3,
    radius: f64,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Point3, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Center point of the sphere in world coordinates.
    pub fn center(&self) -> Point3 {
        self.center
    }

    /// Radius of the sphere.
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let oc = ray.origin - self.center;

        // Simplified quadratic coefficients, with b = 2 * half_b factored out
        let a = ray.direction.length_squared();
        let half_b = oc.dot(ray.direction);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = half_b * half_b - a * c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrtd = discriminant.sqrt();

        // Find the nearest root that lies in the acceptable range
        let mut root = (-half_b - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (-half_b + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let p = ray.at(root);
        Some(HitRecord {
            t: root,
            p,
            // Outward normal, unit length by construction. Not flipped
            // toward the incident ray.
            normal: (p - self.center) / self.radius,
        })
    }
}
