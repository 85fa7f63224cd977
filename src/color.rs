//! Color encoding for 8-bit output.
//!
//! Averaged linear channel values are clamped to [0, 0.999] and scaled by
//! 256, so the byte value never overflows to 256 for a channel at or above
//! full intensity.

use std::io::{self, Write};

use crate::interval::Interval;
use crate::vec3::Color;

/// Valid channel range before byte scaling.
const INTENSITY: Interval = Interval {
    min: 0.0,
    max: 0.999,
};

/// Encode one linear channel value to a byte in [0, 255].
pub fn encode_channel(value: f64) -> u8 {
    (256.0 * INTENSITY.clamp(value)) as u8
}

/// Write one pixel as an ASCII `r g b` line.
pub fn write_color<W: Write>(out: &mut W, pixel: Color) -> io::Result<()> {
    writeln!(
        out,
        "{} {} {}",
        encode_channel(pixel.x),
        encode_channel(pixel.y),
        encode_channel(pixel.z)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overbright_clamps_to_255_not_256() {
        assert_eq!(encode_channel(1.2), 255);
        assert_eq!(encode_channel(1.0), 255);
        assert_eq!(encode_channel(0.999), 255);
    }

    #[test]
    fn negative_clamps_to_zero() {
        assert_eq!(encode_channel(-0.1), 0);
        assert_eq!(encode_channel(0.0), 0);
    }

    #[test]
    fn midscale_floors() {
        assert_eq!(encode_channel(0.5), 128);
        // Just under a step boundary stays on the lower byte
        assert_eq!(encode_channel(128.0 / 256.0 - 1e-9), 127);
    }

    #[test]
    fn write_color_formats_one_line() {
        let mut buf = Vec::new();
        write_color(&mut buf, Color::new(0.0, 0.5, 1.0)).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "0 128 255\n");
    }
}
