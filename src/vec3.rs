//! Vector, point and color types for scene geometry.
//!
//! Everything is double precision. Points, free vectors and linear RGB
//! colors share one representation; which one a value means is determined
//! by context, not by the type system.

pub use glam::DVec3 as Vec3;

/// Location in world space. Alias of [`Vec3`] kept for geometric clarity.
pub type Point3 = Vec3;

/// Linear RGB color with components nominally in [0, 1].
pub type Color = Vec3;

/// Normalize a vector to unit length.
///
/// Undefined for the zero vector (produces NaN components); callers only
/// normalize directions they know to be nonzero.
pub fn unit_vector(v: Vec3) -> Vec3 {
    v.normalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_vector_has_length_one() {
        for v in [
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(-0.001, 400.0, 0.0),
            Vec3::new(0.0, 0.0, -1.0),
        ] {
            assert!((unit_vector(v).length() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn dot_and_cross_follow_right_handed_convention() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);
        assert_eq!(x.dot(y), 0.0);
        assert_eq!(x.cross(y), Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn length_squared_matches_length() {
        let v = Vec3::new(3.0, 4.0, 12.0);
        assert_eq!(v.length_squared(), 169.0);
        assert_eq!(v.length(), 13.0);
    }
}
