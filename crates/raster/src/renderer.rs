//! Regeneration of the gradient plane with stale-frame suppression.
//!
//! Every [`GradientRenderer::request`] supersedes all earlier requests. A
//! [`RenderJob`] checks between rows whether it is still the latest request
//! and gives up as soon as it is not, so a frame for an outdated hue, size or
//! max chroma is never returned. Jobs are `Send` and may run on any thread.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use log::debug;
use oklch_picker_core::error::PickerError;
use oklch_picker_core::plane::GradientPlane;

use crate::pixel::{buffer_len, push_gradient_row, Raster};

/// Hands out render jobs for one picker surface.
#[derive(Debug, Default)]
pub struct GradientRenderer {
    latest: Arc<AtomicU64>,
    last_plane: Option<GradientPlane>,
}

impl GradientRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new regeneration, invalidating every job issued before it.
    pub fn request(&mut self, plane: GradientPlane) -> RenderJob {
        let generation = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(
            "gradient request #{generation}: hue={} max_chroma={} {}x{}@{}",
            plane.hue, plane.max_chroma, plane.width, plane.height, plane.scale
        );
        self.last_plane = Some(plane);
        RenderJob {
            plane,
            generation,
            latest: Arc::clone(&self.latest),
        }
    }

    /// Requests a new frame only if the parameters differ from the last
    /// request. Returns `None` when the current frame is still valid.
    pub fn request_if_changed(&mut self, plane: GradientPlane) -> Option<RenderJob> {
        if self.last_plane == Some(plane) {
            return None;
        }
        Some(self.request(plane))
    }

    /// Invalidates all outstanding jobs without starting a new one.
    pub fn cancel(&mut self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
        self.last_plane = None;
    }
}

/// One pending regeneration of the gradient plane.
#[derive(Debug)]
pub struct RenderJob {
    plane: GradientPlane,
    generation: u64,
    latest: Arc<AtomicU64>,
}

impl RenderJob {
    pub fn plane(&self) -> &GradientPlane {
        &self.plane
    }

    /// True once a newer request (or a cancel) has been issued.
    pub fn is_stale(&self) -> bool {
        self.latest.load(Ordering::SeqCst) != self.generation
    }

    /// Rasterizes the plane.
    ///
    /// Returns `Ok(None)` if the job was superseded before or while running,
    /// and `PickerError::InvalidDimensions` for an unrenderable plane.
    pub fn run(self) -> Result<Option<Raster>, PickerError> {
        let (width, height) = self.plane.device_size()?;
        let mut data = Vec::with_capacity(buffer_len(width, height)?);
        for y in 0..height {
            if self.is_stale() {
                debug!("gradient request #{} discarded at row {y}", self.generation);
                return Ok(None);
            }
            push_gradient_row(&mut data, &self.plane, y, width, height);
        }
        if self.is_stale() {
            debug!("gradient request #{} discarded after render", self.generation);
            return Ok(None);
        }
        debug!("gradient request #{} finished", self.generation);
        Raster::from_data(width, height, data).map(Some)
    }
}
