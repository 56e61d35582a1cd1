//! PNG export for built icons.
//!
//! Debug/inspection helper; the renderer consumes the raw RGBA buffer and
//! never goes through a file.

use image::{ImageFormat, RgbaImage};
use thiserror::Error;

use crate::badge::IconDescriptor;

/// Errors raised when exporting an icon.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The pixel buffer does not match the declared dimensions.
    #[error("pixel buffer does not match {0}x{0} RGBA dimensions")]
    BufferShape(u32),

    /// Encoding or I/O failure from the image backend.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

impl IconDescriptor {
    /// Converts the descriptor into an owned RGBA image.
    pub fn to_image(&self) -> Result<RgbaImage, ExportError> {
        RgbaImage::from_raw(self.size, self.size, self.pixels.clone())
            .ok_or(ExportError::BufferShape(self.size))
    }

    /// Writes the icon to a PNG file.
    pub fn save_png(&self, path: impl AsRef<std::path::Path>) -> Result<(), ExportError> {
        self.to_image()?.save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::badge::default_shield;

    #[test]
    fn test_to_image_dimensions() {
        let icon = default_shield().build().unwrap();
        let img = icon.to_image().unwrap();
        assert_eq!(img.dimensions(), (32, 32));
        assert_eq!(img.get_pixel(16, 16).0, icon.pixel(16, 16));
    }

    #[test]
    fn test_save_png_roundtrip() {
        let icon = default_shield().build().unwrap();
        let path = std::env::temp_dir().join("shield_icon_export_test.png");
        icon.save_png(&path).unwrap();

        let loaded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(loaded.dimensions(), (32, 32));
        assert_eq!(loaded.get_pixel(16, 16).0, icon.pixel(16, 16));

        std::fs::remove_file(&path).ok();
    }
}
