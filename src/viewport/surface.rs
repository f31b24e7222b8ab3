use thiserror::Error;

use super::Viewport;

/// Surface size in physical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowDimensions {
    pub width: u32,
    pub height: u32,
}

impl WindowDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("surface lost or outdated, reconfigured")]
    SurfaceLost,
    #[error("out of GPU memory")]
    OutOfMemory,
    #[error("surface timed out")]
    Timeout,
    #[error("render surface disposed")]
    Disposed,
    #[error("{0}")]
    Other(String),
}

/// Something the viewport can be drawn to.
pub trait RenderSurface {
    /// Current size in physical pixels
    fn dimensions(&self) -> WindowDimensions;

    fn resize(&mut self, dimensions: WindowDimensions);

    /// Draw one frame of the viewport
    fn render(&mut self, viewport: &Viewport) -> Result<(), RenderError>;

    /// Release GPU resources. No rendering happens afterwards.
    fn dispose(&mut self);
}
