//! Row-major framebuffer produced by a render.

use crate::vec3::Color;

/// Linear-color image, row-major with row 0 at the top.
#[derive(Debug, Clone)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Image {
    /// Create a black image of the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width as usize) * (height as usize)],
        }
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel at column `i`, row `j` (row 0 is the top row).
    pub fn pixel(&self, i: u32, j: u32) -> Color {
        self.pixels[(j as usize) * (self.width as usize) + i as usize]
    }

    /// Store the pixel at column `i`, row `j`.
    pub fn set_pixel(&mut self, i: u32, j: u32, color: Color) {
        self.pixels[(j as usize) * (self.width as usize) + i as usize] = color;
    }

    /// All pixels in output order: row-major, top row first.
    pub fn pixels(&self) -> impl Iterator<Item = &Color> {
        self.pixels.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixels_iterate_row_major() {
        let mut img = Image::new(2, 2);
        img.set_pixel(0, 0, Color::new(1.0, 0.0, 0.0));
        img.set_pixel(1, 0, Color::new(0.0, 1.0, 0.0));
        img.set_pixel(0, 1, Color::new(0.0, 0.0, 1.0));

        let collected: Vec<Color> = img.pixels().copied().collect();
        assert_eq!(collected.len(), 4);
        assert_eq!(collected[0], Color::new(1.0, 0.0, 0.0));
        assert_eq!(collected[1], Color::new(0.0, 1.0, 0.0));
        assert_eq!(collected[2], Color::new(0.0, 0.0, 1.0));
        assert_eq!(collected[3], Color::ZERO);
    }
}
