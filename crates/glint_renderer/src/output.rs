//! Image output.
//!
//! Converts the linear framebuffer to 8-bit display values (gamma 2, clamped)
//! and writes it either as an ASCII PPM or through the `image` crate.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::{Color, Framebuffer};
use glint_math::Interval;
use log::debug;
use thiserror::Error;

/// Errors that can occur while writing an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

/// Display intensities stay below 1.0 so scaling never reaches 256.
const INTENSITY: Interval = Interval {
    min: 0.0,
    max: 0.999,
};

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f64) -> f64 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Convert a linear color to 8-bit RGB.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let to_byte = |c: f64| (255.999 * INTENSITY.clamp(linear_to_gamma(c))) as u8;
    [to_byte(color.x), to_byte(color.y), to_byte(color.z)]
}

impl Framebuffer {
    /// Convert to packed RGB bytes, top row first.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb(*color));
        }
        bytes
    }
}

/// Write the framebuffer as an ASCII (P3) PPM.
pub fn write_ppm<W: Write>(framebuffer: &Framebuffer, writer: &mut W) -> std::io::Result<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", framebuffer.width, framebuffer.height)?;
    writeln!(writer, "255")?;

    for color in &framebuffer.pixels {
        let [r, g, b] = color_to_rgb(*color);
        writeln!(writer, "{} {} {}", r, g, b)?;
    }

    Ok(())
}

/// Save the framebuffer, picking the format from the file extension.
///
/// `.ppm` is written as ASCII PPM; anything else goes to the `image` crate
/// (PNG, BMP, TGA, ...). Missing parent directories are created.
pub fn save_image(framebuffer: &Framebuffer, path: impl AsRef<Path>) -> Result<(), OutputError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let is_ppm = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("ppm"));

    if is_ppm {
        let mut writer = BufWriter::new(File::create(path)?);
        write_ppm(framebuffer, &mut writer)?;
        writer.flush()?;
    } else {
        image::save_buffer(
            path,
            &framebuffer.to_rgb8(),
            framebuffer.width,
            framebuffer.height,
            image::ColorType::Rgb8,
        )?;
    }

    debug!("Wrote {}x{} image to {}", framebuffer.width, framebuffer.height, path.display());
    Ok(())
}
