//! Image output.
//!
//! Serializes the rendered HDR buffer either as a plain-text PPM pixel stream
//! (the renderer's native output contract) or as an 8-bit PNG file.

use std::io::{self, Write};

use image::{ImageBuffer, Rgb};
use log::{info, warn};

use crate::interval::Interval;

/// Channel values are clamped here before scaling to 8-bit integers.
const INTENSITY: Interval = Interval {
    min: 0.0,
    max: 0.999,
};

/// Write an f32 RGB image as a plain-text PPM (P3) pixel stream.
///
/// Emits the header lines `P3`, `<width> <height>` and `255`, then one
/// `<r> <g> <b>` line per pixel, rows top-to-bottom and columns
/// left-to-right. Each channel is gamma corrected (gamma 2, square root),
/// clamped to [0, 0.999] and scaled by 256.
pub fn write_ppm<W: Write>(
    out: &mut W,
    image: &ImageBuffer<Rgb<f32>, Vec<f32>>,
) -> io::Result<()> {
    writeln!(out, "P3")?;
    writeln!(out, "{} {}", image.width(), image.height())?;
    writeln!(out, "255")?;

    for pixel in image.pixels() {
        let r = (256.0 * INTENSITY.clamp(linear_to_gamma(pixel[0]))) as u8;
        let g = (256.0 * INTENSITY.clamp(linear_to_gamma(pixel[1]))) as u8;
        let b = (256.0 * INTENSITY.clamp(linear_to_gamma(pixel[2]))) as u8;
        writeln!(out, "{} {} {}", r, g, b)?;
    }

    out.flush()
}

/// Gamma 2 transfer: linear component to display component.
fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Save an f32 RGB image as PNG with HDR to LDR tone mapping.
///
/// Values are clamped to [0.0, 1.0], run through the sRGB transfer curve
/// (linear portion below 0.0031308, power curve above) and scaled to 8-bit.
pub fn save_image_as_png(image: &ImageBuffer<Rgb<f32>, Vec<f32>>, output_path: &str) {
    let u8_image: ImageBuffer<Rgb<u8>, Vec<u8>> =
        ImageBuffer::from_fn(image.width(), image.height(), |x, y| {
            let pixel = image.get_pixel(x, y);

            // sRGB gamma correction with linear portion for dark values
            let linear_to_srgb = |linear: f32| -> f32 {
                if linear <= 0.0 {
                    0.0
                } else if linear <= 0.0031308 {
                    12.92 * linear
                } else {
                    1.055 * linear.powf(1.0 / 2.4) - 0.055
                }
            };

            Rgb([
                (linear_to_srgb(pixel[0].clamp(0.0, 1.0)) * 255.0) as u8,
                (linear_to_srgb(pixel[1].clamp(0.0, 1.0)) * 255.0) as u8,
                (linear_to_srgb(pixel[2].clamp(0.0, 1.0)) * 255.0) as u8,
            ])
        });

    match u8_image.save(output_path) {
        Ok(_) => info!("Image saved as {}", output_path),
        Err(e) => warn!("Failed to save image: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ppm_stream_has_header_and_one_line_per_pixel() {
        let mut image: ImageBuffer<Rgb<f32>, Vec<f32>> = ImageBuffer::new(3, 2);
        for pixel in image.pixels_mut() {
            *pixel = Rgb([0.25, 1.0, 0.0]);
        }

        let mut out = Vec::new();
        write_ppm(&mut out, &image).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "P3");
        assert_eq!(lines[1], "3 2");
        assert_eq!(lines[2], "255");
        assert_eq!(lines.len(), 3 + 3 * 2);
        // 0.25 gamma-corrects to 0.5, scaling to 128; 1.0 clamps to 0.999
        assert_eq!(lines[3], "128 255 0");
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut image: ImageBuffer<Rgb<f32>, Vec<f32>> = ImageBuffer::new(1, 1);
        image.put_pixel(0, 0, Rgb([17.0, -3.0, 0.0]));

        let mut out = Vec::new();
        write_ppm(&mut out, &image).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().nth(3).unwrap(), "255 0 0");
    }
}
