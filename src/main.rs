use clap::Parser;
use log::{error, info};
use std::io::{self, BufWriter};

use raylite::camera::Camera;
use raylite::cli::Args;
use raylite::hittable::HittableList;
use raylite::logger::init_logger;
use raylite::output::{save_ppm, write_ppm};
use raylite::sphere::Sphere;
use raylite::vec3::Point3;

/// Build the demo scene: one small sphere over a large ground sphere.
fn create_scene() -> HittableList {
    let mut world = HittableList::new();
    world.add(Box::new(Sphere::new(Point3::new(0.0, 0.0, -1.0), 0.5)));
    world.add(Box::new(Sphere::new(Point3::new(0.0, -100.5, -1.0), 100.0)));
    world
}

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.into());

    info!(
        "Image width: {}, aspect ratio: {:.4}, samples per pixel: {}",
        args.width, args.aspect_ratio, args.samples_per_pixel
    );

    let world = create_scene();

    let mut camera = Camera::new();
    camera.aspect_ratio = args.aspect_ratio;
    camera.image_width = args.width;
    camera.samples_per_pixel = args.samples_per_pixel;
    camera.seed = args.seed;

    let image = camera.render(&world);

    let result = match &args.output {
        Some(path) => save_ppm(&image, path),
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            write_ppm(&image, &mut writer)
        }
    };

    if let Err(e) = result {
        error!("Failed to write image: {}", e);
        std::process::exit(1);
    }
}
