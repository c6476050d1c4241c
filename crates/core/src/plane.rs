//! Geometry of the lightness × chroma gradient plane and the hue strip.
//!
//! [`GradientPlane`] maps positions at a fixed hue to OKLCh colors:
//! lightness runs from 1 at the top to 0 at the bottom, chroma from 0 at the
//! left edge to `max_chroma` at the right. [`HueStrip`] sweeps hue across its
//! width at fixed lightness and chroma. Both only describe the mapping; the
//! pixel loop lives in the raster crate.

use crate::color::{oklch_to_srgb, OkLch, OklchColor, Srgb};
use crate::error::PickerError;
use crate::params::{param_f64, param_usize};
use serde_json::{json, Value};

/// Default logical plane size in CSS pixels.
const DEFAULT_SIZE: usize = 280;
/// Default chroma at the right edge of the plane.
pub const DEFAULT_MAX_CHROMA: f64 = 0.4;
/// Chroma used to paint the hue strip.
pub const HUE_STRIP_CHROMA: f64 = 0.25;
/// Default hue strip height.
const DEFAULT_STRIP_HEIGHT: usize = 36;

/// Parameters of the lightness/chroma gradient at one hue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientPlane {
    /// Logical width.
    pub width: usize,
    /// Logical height.
    pub height: usize,
    /// Hue in degrees shared by every pixel.
    pub hue: f64,
    /// Chroma at the right edge.
    pub max_chroma: f64,
    /// Device pixel ratio applied when rasterizing.
    pub scale: f64,
}

impl Default for GradientPlane {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE, DEFAULT_SIZE, 0.0)
    }
}

impl GradientPlane {
    /// A plane with the default max chroma at scale 1.
    pub fn new(width: usize, height: usize, hue: f64) -> Self {
        Self {
            width,
            height,
            hue,
            max_chroma: DEFAULT_MAX_CHROMA,
            scale: 1.0,
        }
    }

    pub fn with_max_chroma(self, max_chroma: f64) -> Self {
        Self { max_chroma, ..self }
    }

    pub fn with_scale(self, scale: f64) -> Self {
        Self { scale, ..self }
    }

    /// Extracts plane parameters from a JSON object, falling back to defaults.
    ///
    /// Keys: `width`, `height`, `hue`, `max_chroma`, `scale`.
    pub fn from_json(params: &Value) -> Self {
        Self {
            width: param_usize(params, "width", DEFAULT_SIZE),
            height: param_usize(params, "height", DEFAULT_SIZE),
            hue: param_f64(params, "hue", 0.0),
            max_chroma: param_f64(params, "max_chroma", DEFAULT_MAX_CHROMA),
            scale: param_f64(params, "scale", 1.0),
        }
    }

    /// Current parameter values as a JSON object.
    pub fn params(&self) -> Value {
        json!({
            "width": self.width,
            "height": self.height,
            "hue": self.hue,
            "max_chroma": self.max_chroma,
            "scale": self.scale,
        })
    }

    /// Schema describing the plane parameters, their ranges and defaults.
    pub fn param_schema() -> Value {
        json!({
            "width": {
                "type": "integer",
                "default": DEFAULT_SIZE,
                "min": 1,
                "description": "Logical width of the plane"
            },
            "height": {
                "type": "integer",
                "default": DEFAULT_SIZE,
                "min": 1,
                "description": "Logical height of the plane"
            },
            "hue": {
                "type": "number",
                "default": 0.0,
                "min": 0.0,
                "max": 360.0,
                "description": "Hue in degrees shared by every pixel"
            },
            "max_chroma": {
                "type": "number",
                "default": DEFAULT_MAX_CHROMA,
                "min": 0.0,
                "max": 0.4,
                "description": "Chroma at the right edge"
            },
            "scale": {
                "type": "number",
                "default": 1.0,
                "min": 0.25,
                "max": 4.0,
                "description": "Device pixel ratio"
            }
        })
    }

    /// Raster size in device pixels: logical size times `scale`, rounded.
    ///
    /// Returns `PickerError::InvalidDimensions` if either side is zero or
    /// the scale is not a positive finite number.
    pub fn device_size(&self) -> Result<(usize, usize), PickerError> {
        device_size(self.width, self.height, self.scale)
    }

    /// Color of device pixel `(x, y)` in a `width × height` raster.
    ///
    /// Row 0 is lightness 1, the last row lightness 0; column 0 is chroma 0,
    /// the last column `max_chroma`. A single row or column sits at the
    /// lightness-1 / chroma-0 edge.
    pub fn pixel_color(&self, x: usize, y: usize, width: usize, height: usize) -> OkLch {
        OkLch {
            l: 1.0 - fraction(y, height),
            c: fraction(x, width) * self.max_chroma,
            h: self.hue,
        }
    }

    /// sRGB value of device pixel `(x, y)`, gamut clipped.
    pub fn sample(&self, x: usize, y: usize, width: usize, height: usize) -> Srgb {
        oklch_to_srgb(self.pixel_color(x, y, width, height))
    }

    /// Lightness and chroma under a logical position, clamped into the plane.
    pub fn lightness_chroma_at(&self, x: f64, y: f64) -> (f64, f64) {
        let w = self.width.max(1) as f64;
        let h = self.height.max(1) as f64;
        let x = x.clamp(0.0, w);
        let y = y.clamp(0.0, h);
        (1.0 - y / h, x / w * self.max_chroma)
    }

    /// Logical position of a color's lightness and chroma (where the handle
    /// sits). Inverse of [`lightness_chroma_at`](Self::lightness_chroma_at).
    pub fn position_of(&self, color: &OklchColor) -> (f64, f64) {
        let x = if self.max_chroma > 0.0 {
            color.c / self.max_chroma * self.width as f64
        } else {
            0.0
        };
        let y = (1.0 - color.l) * self.height as f64;
        (x, y)
    }
}

/// A horizontal strip sweeping hue 0..360 at fixed lightness and chroma.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HueStrip {
    pub width: usize,
    pub height: usize,
    pub lightness: f64,
    pub chroma: f64,
    pub scale: f64,
}

impl HueStrip {
    /// A strip at the given lightness with the standard strip chroma.
    pub fn new(width: usize, height: usize, lightness: f64) -> Self {
        Self {
            width,
            height,
            lightness,
            chroma: HUE_STRIP_CHROMA,
            scale: 1.0,
        }
    }

    /// Extracts strip parameters from a JSON object, falling back to defaults.
    ///
    /// Keys: `width`, `height`, `lightness`, `chroma`, `scale`.
    pub fn from_json(params: &Value) -> Self {
        Self {
            width: param_usize(params, "width", DEFAULT_SIZE),
            height: param_usize(params, "height", DEFAULT_STRIP_HEIGHT),
            lightness: param_f64(params, "lightness", 0.7),
            chroma: param_f64(params, "chroma", HUE_STRIP_CHROMA),
            scale: param_f64(params, "scale", 1.0),
        }
    }

    pub fn device_size(&self) -> Result<(usize, usize), PickerError> {
        device_size(self.width, self.height, self.scale)
    }

    /// Color of device column `x` in a raster `width` pixels wide.
    pub fn pixel_color(&self, x: usize, width: usize) -> OkLch {
        OkLch {
            l: self.lightness,
            c: self.chroma,
            h: fraction(x, width) * 360.0,
        }
    }
}

/// `i / (n - 1)`, or 0 when `n <= 1`.
fn fraction(i: usize, n: usize) -> f64 {
    if n <= 1 {
        0.0
    } else {
        i as f64 / (n - 1) as f64
    }
}

fn device_size(width: usize, height: usize, scale: f64) -> Result<(usize, usize), PickerError> {
    if !(scale.is_finite() && scale > 0.0) {
        return Err(PickerError::InvalidDimensions);
    }
    let w = (width as f64 * scale).round() as usize;
    let h = (height as f64 * scale).round() as usize;
    if w == 0 || h == 0 {
        return Err(PickerError::InvalidDimensions);
    }
    w.checked_mul(h).ok_or(PickerError::InvalidDimensions)?;
    Ok((w, h))
}
