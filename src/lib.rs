//! Raylite offline ray tracer
//!
//! Casts camera rays through a virtual viewport into a scene of hittable
//! primitives, shades each pixel from the nearest intersection's surface
//! normal (sky gradient on a miss), and emits the result as ASCII PPM.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod camera;
pub mod cli;
pub mod color;
pub mod hittable;
pub mod image;
pub mod interval;
pub mod logger;
pub mod output;
pub mod random;
pub mod ray;
pub mod sphere;
pub mod vec3;
