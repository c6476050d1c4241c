//! Pure-computation RGBA8 rasterization of the gradient plane and hue strip.
//!
//! This module is always available (no feature gate) so that both the `png`
//! snapshot path and an on-screen surface can share the same pixel loop.

use oklch_picker_core::color::{oklch_to_srgb, Srgb};
use oklch_picker_core::error::PickerError;
use oklch_picker_core::plane::{GradientPlane, HueStrip};

/// A row-major RGBA8 pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Raster {
    /// Wraps a pre-built buffer, validating that `data.len() == width * height * 4`.
    pub fn from_data(width: usize, height: usize, data: Vec<u8>) -> Result<Self, PickerError> {
        if width == 0 || height == 0 {
            return Err(PickerError::InvalidDimensions);
        }
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(4))
            .ok_or(PickerError::InvalidDimensions)?;
        if data.len() != expected {
            return Err(PickerError::InvalidDimensions);
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Raster width in device pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Raster height in device pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Read-only access to the RGBA bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// The four bytes of pixel `(x, y)`. Panics if out of bounds.
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let i = (y * self.width + x) * 4;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }
}

/// Scales an sRGB color to 0–255 per channel with full opacity.
pub fn srgb_to_rgba8(srgb: Srgb) -> [u8; 4] {
    let [r, g, b] = srgb.to_rgb8();
    [r, g, b, 255]
}

/// Rasterizes the gradient plane at its device size.
///
/// Returns `PickerError::InvalidDimensions` for a zero-sized or badly scaled
/// plane.
pub fn render_gradient(plane: &GradientPlane) -> Result<Raster, PickerError> {
    let (width, height) = plane.device_size()?;
    let mut data = Vec::with_capacity(buffer_len(width, height)?);
    for y in 0..height {
        push_gradient_row(&mut data, plane, y, width, height);
    }
    Raster::from_data(width, height, data)
}

/// Appends row `y` of the gradient to `data`.
pub(crate) fn push_gradient_row(
    data: &mut Vec<u8>,
    plane: &GradientPlane,
    y: usize,
    width: usize,
    height: usize,
) {
    data.extend((0..width).flat_map(|x| srgb_to_rgba8(plane.sample(x, y, width, height))));
}

/// Byte length of a `width × height` RGBA8 buffer.
pub(crate) fn buffer_len(width: usize, height: usize) -> Result<usize, PickerError> {
    width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(4))
        .ok_or(PickerError::InvalidDimensions)
}

/// Rasterizes the hue strip: every row is the same hue sweep.
pub fn render_hue_strip(strip: &HueStrip) -> Result<Raster, PickerError> {
    let (width, height) = strip.device_size()?;
    buffer_len(width, height)?;
    let row: Vec<u8> = (0..width)
        .flat_map(|x| srgb_to_rgba8(oklch_to_srgb(strip.pixel_color(x, width))))
        .collect();
    let data = row.repeat(height);
    Raster::from_data(width, height, data)
}
