#![deny(unsafe_code)]
//! Core types for the OKLCH relative color picker.
//!
//! Provides the color math (`OklchColor`, OKLCh -> OKLab -> linear RGB -> sRGB),
//! the per-component `Transform` model with its absolute/relative round trip,
//! the `ResultColorEngine` session with CSS relative color output, gradient
//! plane geometry, the preset origin catalog, and parameter helpers.

pub mod color;
pub mod css;
pub mod engine;
pub mod error;
pub mod params;
pub mod plane;
pub mod preset;
pub mod transform;

pub use color::{OkLab, OkLch, OklchColor, OklchComponent, Srgb};
pub use engine::{ResultColorEngine, Transforms};
pub use error::PickerError;
pub use plane::{GradientPlane, HueStrip};
pub use preset::Preset;
pub use transform::{Transform, TransformKind};
