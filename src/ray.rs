//! Ray representation for intersection testing.
//!
//! A ray is the parametric line r(t) = origin + t * direction. Negative t
//! evaluates behind the origin; callers restrict the usable range with an
//! [`Interval`](crate::interval::Interval).

use crate::vec3::{Point3, Vec3};

/// Ray in 3D space defined by origin and direction.
///
/// `direction` is not required to be unit length; code that needs a unit
/// direction (the sky gradient) normalizes at the point of use.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Starting point of the ray in world coordinates.
    pub origin: Point3,
    /// Direction vector of the ray.
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray with origin and direction.
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Point at parameter `t` along the ray: origin + t * direction.
    ///
    /// Accepts any real `t`, including negative. No validation here.
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + t * self.direction
    }
}
