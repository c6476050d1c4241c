//! PNG output of a [`Raster`].
//!
//! This module is feature-gated behind `png` (default on) so that embedders
//! drawing straight to a surface do not pull in the `image` crate.
//! The pixel loop itself lives in [`crate::pixel`] (always available).

use oklch_picker_core::error::PickerError;
use std::path::Path;

use crate::pixel::Raster;

/// Writes a raster as a PNG image.
///
/// Returns `PickerError::InvalidDimensions` if the raster dimensions overflow
/// `u32`, or `PickerError::Io` on write failure.
pub fn write_png(raster: &Raster, path: &Path) -> Result<(), PickerError> {
    let w = u32::try_from(raster.width()).map_err(|_| PickerError::InvalidDimensions)?;
    let h = u32::try_from(raster.height()).map_err(|_| PickerError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(w, h, raster.data().to_vec())
        .ok_or_else(|| PickerError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| PickerError::Io(e.to_string()))?;
    log::debug!("wrote {}x{} PNG to {}", w, h, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::{render_gradient, render_hue_strip};
    use oklch_picker_core::plane::{GradientPlane, HueStrip};

    #[test]
    fn write_png_round_trip() {
        let raster = render_gradient(&GradientPlane::new(16, 12, 280.67)).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plane.png");

        write_png(&raster, &path).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 16);
        assert_eq!(img.height(), 12);
        assert_eq!(img.into_raw(), raster.into_data());
    }

    #[test]
    fn write_png_hue_strip() {
        let raster = render_hue_strip(&HueStrip::new(32, 4, 0.7)).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("strip.png");
        write_png(&raster, &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn write_png_to_missing_directory_is_io_error() {
        let raster = render_gradient(&GradientPlane::new(2, 2, 0.0)).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("plane.png");
        assert!(matches!(write_png(&raster, &path), Err(PickerError::Io(_))));
    }
}
