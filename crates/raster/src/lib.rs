#![deny(unsafe_code)]
//! CPU rasterization for the OKLCH picker: the lightness × chroma gradient
//! plane at a fixed hue, the hue strip, and PNG snapshots.
//!
//! This crate sits on top of `oklch-picker-core`, which owns the color math
//! and plane geometry. Both the CLI and any on-screen surface depend on this
//! crate to share one pixel loop.

pub mod pixel;
pub mod renderer;

#[cfg(feature = "png")]
pub mod snapshot;

pub use pixel::{render_gradient, render_hue_strip, Raster};
pub use renderer::{GradientRenderer, RenderJob};
