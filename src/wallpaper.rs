// SPDX-License-Identifier: GPL-3.0-or-later
// src/wallpaper.rs
//
// Wallpaper image loading.

use std::path::Path;

use image::{DynamicImage, GenericImageView, ImageReader};

/// The decoded wallpaper image.
///
/// The geometry core only consumes the pixel dimensions and the derived
/// aspect ratio; the decoded bitmap is kept for the rendering collaborator.
pub struct Wallpaper {
    image: DynamicImage,
}

impl Wallpaper {
    /// Load and decode a wallpaper from disk.
    pub fn open(path: &Path) -> image::ImageResult<Self> {
        let image = ImageReader::open(path)?.decode()?;
        Ok(Self { image })
    }

    /// Native pixel dimensions (width, height).
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Pixel aspect ratio (width / height).
    pub fn aspect_ratio(&self) -> f64 {
        let (width, height) = self.dimensions();
        f64::from(width) / f64::from(height)
    }

    /// Access the decoded bitmap for rendering.
    pub fn image(&self) -> &DynamicImage {
        &self.image
    }
}

impl From<DynamicImage> for Wallpaper {
    fn from(image: DynamicImage) -> Self {
        Self { image }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_ratio_is_width_over_height() {
        let wallpaper = Wallpaper::from(DynamicImage::new_rgba8(1125, 250));
        assert_eq!(wallpaper.dimensions(), (1125, 250));
        assert!((wallpaper.aspect_ratio() - 4.5).abs() < 1e-12);
    }
}
