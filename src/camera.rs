//! Camera for ray generation and scene rendering.

use indicatif::{ProgressBar, ProgressStyle};
use log::info;

use crate::hittable::Hittable;
use crate::image::Image;
use crate::interval::Interval;
use crate::random::Sampler;
use crate::ray::Ray;
use crate::vec3::{Color, Point3, Vec3};

/// Pinhole camera with a fixed viewport, looking down -z from the origin.
///
/// Configure the public fields, then call [`render`](Camera::render); the
/// derived viewport geometry is computed once by `initialize` and cached
/// until the camera is rebuilt. Shading is the normal-visualization debug
/// ramp over a vertical sky gradient.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Ratio of image width over height
    pub aspect_ratio: f64,
    /// Rendered image width in pixel count
    pub image_width: u32,
    /// Number of random samples for each pixel (1 disables jittering)
    pub samples_per_pixel: u32,
    /// Jitter PRNG seed; `None` seeds from OS entropy
    pub seed: Option<u64>,

    /// Rendered image height, derived from width and aspect ratio
    image_height: u32,
    /// Color scale factor for a sum of pixel samples (1 / samples_per_pixel)
    pixel_samples_scale: f64,
    /// Camera position in world space
    center: Point3,
    /// World position of the top-left pixel (pixel 0,0)
    pixel00_loc: Point3,
    /// Offset vector from pixel to pixel horizontally (right direction)
    pixel_delta_u: Vec3,
    /// Offset vector from pixel to pixel vertically (down direction)
    pixel_delta_v: Vec3,
    /// Jitter source, seeded once when the camera initializes
    sampler: Sampler,
    /// Flag tracking whether the derived geometry has been calculated
    initialized: bool,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    /// Create a camera with default settings: square 100x100 image, one
    /// sample per pixel, entropy-seeded jitter.
    pub fn new() -> Self {
        Self {
            aspect_ratio: 1.0,
            image_width: 100,
            samples_per_pixel: 1,
            seed: None,
            image_height: 0,
            pixel_samples_scale: 1.0,
            center: Point3::ZERO,
            pixel00_loc: Point3::ZERO,
            pixel_delta_u: Vec3::ZERO,
            pixel_delta_v: Vec3::ZERO,
            sampler: Sampler::seeded(0),
            initialized: false,
        }
    }

    /// Derive the viewport geometry from the current settings.
    ///
    /// Idempotent; called automatically by [`render`](Camera::render).
    /// Height is floored at 1 pixel, width is taken as given.
    pub fn initialize(&mut self) {
        if self.initialized {
            return;
        }

        self.image_height = ((self.image_width as f64 / self.aspect_ratio) as u32).max(1);

        self.pixel_samples_scale = 1.0 / self.samples_per_pixel as f64;

        self.sampler = match self.seed {
            Some(seed) => Sampler::seeded(seed),
            None => Sampler::from_entropy(),
        };

        self.center = Point3::ZERO;

        // Viewport spans 2 world units vertically at focal distance 1
        let focal_length = 1.0;
        let viewport_height = 2.0;
        let viewport_width =
            viewport_height * (self.image_width as f64 / self.image_height as f64);

        // Vectors across the horizontal and down the vertical viewport
        // edges; v is negated so row order walks top to bottom in a y-up
        // world
        let viewport_u = Vec3::new(viewport_width, 0.0, 0.0);
        let viewport_v = Vec3::new(0.0, -viewport_height, 0.0);

        self.pixel_delta_u = viewport_u / self.image_width as f64;
        self.pixel_delta_v = viewport_v / self.image_height as f64;

        // Pixel (0,0) sits half a delta inside the upper-left viewport
        // corner, centering each pixel in its cell
        let viewport_upper_left =
            self.center - Vec3::new(0.0, 0.0, focal_length) - viewport_u / 2.0 - viewport_v / 2.0;
        self.pixel00_loc = viewport_upper_left + 0.5 * (self.pixel_delta_u + self.pixel_delta_v);

        self.initialized = true;
    }

    /// Rendered image height in pixel count (valid after initialization).
    pub fn image_height(&self) -> u32 {
        self.image_height
    }

    /// Render the scene into a linear-color framebuffer.
    ///
    /// Pixels are produced row-major, top row first. Each pixel averages
    /// `samples_per_pixel` jittered rays, except that a single sample is
    /// aimed exactly at the pixel center. Scanline progress is reported on
    /// stderr as a side channel.
    pub fn render(&mut self, world: &dyn Hittable) -> Image {
        self.initialize();

        info!(
            "Rendering {}x{} at {} samples per pixel...",
            self.image_width, self.image_height, self.samples_per_pixel
        );
        let render_start = std::time::Instant::now();
        let pb = ProgressBar::new(self.image_height as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{bar:40} {pos}/{len} scanlines ETA: {eta}")
                .unwrap(),
        );

        let mut image = Image::new(self.image_width, self.image_height);
        for j in 0..self.image_height {
            for i in 0..self.image_width {
                let mut pixel_color = Color::ZERO;
                for _sample in 0..self.samples_per_pixel {
                    let r = self.get_ray(i, j);
                    pixel_color += ray_color(&r, world);
                }
                image.set_pixel(i, j, pixel_color * self.pixel_samples_scale);
            }
            pb.inc(1);
        }

        pb.finish();
        info!("Render finished in {:.2?}", render_start.elapsed());

        image
    }

    /// Generate a camera ray through pixel `(i, j)`.
    ///
    /// Multi-sample renders jitter the target uniformly within the pixel's
    /// footprint; a single-sample render aims at the exact center so its
    /// output is deterministic.
    fn get_ray(&mut self, i: u32, j: u32) -> Ray {
        let offset = if self.samples_per_pixel > 1 {
            self.sampler.sample_square()
        } else {
            Vec3::ZERO
        };
        let pixel_sample = self.pixel00_loc
            + ((i as f64 + offset.x) * self.pixel_delta_u)
            + ((j as f64 + offset.y) * self.pixel_delta_v);

        Ray::new(self.center, pixel_sample - self.center)
    }
}

/// Color for one ray: normal visualization on a hit, sky gradient on a miss.
fn ray_color(r: &Ray, world: &dyn Hittable) -> Color {
    if let Some(rec) = world.hit(r, Interval::new(0.0, f64::INFINITY)) {
        // Map each normal component from [-1, 1] to [0, 1]
        return 0.5 * (rec.normal + Color::new(1.0, 1.0, 1.0));
    }

    // Vertical gradient from white at the horizon to light blue at the
    // zenith, independent of x and z
    let unit_direction = r.direction.normalize();
    let a = 0.5 * (unit_direction.y + 1.0);
    (1.0 - a) * Color::new(1.0, 1.0, 1.0) + a * Color::new(0.5, 0.7, 1.0)
}
