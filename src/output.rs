//! PPM image sink.
//!
//! Serializes a rendered framebuffer as ASCII PPM (P3): a header declaring
//! dimensions and the maximum channel value, then one `r g b` line per
//! pixel, row-major with the top row first. The declared dimensions always
//! match the emitted pixel count because both come from the same buffer.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::{info, warn};

use crate::color::write_color;
use crate::image::Image;

/// Write an image to any sink in ASCII PPM format.
pub fn write_ppm<W: Write>(image: &Image, out: &mut W) -> io::Result<()> {
    // P3 means colors are ASCII, with 255 as the max channel value
    writeln!(out, "P3")?;
    writeln!(out, "{} {}", image.width(), image.height())?;
    writeln!(out, "255")?;

    for pixel in image.pixels() {
        write_color(out, *pixel)?;
    }
    out.flush()
}

/// Save an image as a PPM file, logging the outcome.
pub fn save_ppm<P: AsRef<Path>>(image: &Image, path: P) -> io::Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    match write_ppm(image, &mut writer) {
        Ok(()) => {
            info!("Image saved as {}", path.display());
            Ok(())
        }
        Err(e) => {
            warn!("Failed to save image to {}: {}", path.display(), e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Camera;
    use crate::hittable::HittableList;
    use crate::image::Image;
    use crate::vec3::Color;

    #[test]
    fn header_matches_dimensions() {
        let image = Image::new(3, 2);
        let mut buf = Vec::new();
        write_ppm(&image, &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("P3"));
        assert_eq!(lines.next(), Some("3 2"));
        assert_eq!(lines.next(), Some("255"));
        assert_eq!(lines.count(), 6);
    }

    #[test]
    fn pixels_serialize_in_row_major_order() {
        let mut image = Image::new(2, 1);
        image.set_pixel(0, 0, Color::new(1.0, 0.0, 0.0));
        image.set_pixel(1, 0, Color::new(0.0, 0.5, 0.0));

        let mut buf = Vec::new();
        write_ppm(&image, &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "P3\n2 1\n255\n255 0 0\n0 128 0\n"
        );
    }

    #[test]
    fn empty_scene_end_to_end_is_the_sky_gradient() {
        let mut cam = Camera::new();
        cam.aspect_ratio = 1.0;
        cam.image_width = 2;
        cam.seed = Some(0);
        let world = HittableList::new();
        let image = cam.render(&world);

        let mut buf = Vec::new();
        write_ppm(&image, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(&lines[..3], &["P3", "2 2", "255"]);
        assert_eq!(lines.len(), 7);

        let triple = |line: &str| -> Vec<u16> {
            line.split_whitespace()
                .map(|v| v.parse().unwrap())
                .collect()
        };
        let top = triple(lines[3]);
        let bottom = triple(lines[5]);
        // Within a row the gradient is symmetric in x
        assert_eq!(lines[3], lines[4]);
        assert_eq!(lines[5], lines[6]);
        // The top row sits closer to the blue end of the gradient
        assert!(top[0] < bottom[0]);
        assert!(top.iter().all(|&v| v <= 255));
    }
}
