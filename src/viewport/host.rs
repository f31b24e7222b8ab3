use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{debug, info};
use thiserror::Error;

use super::{RenderError, RenderSurface, Viewport, WindowDimensions};
use crate::scene::SceneObject;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostState {
    Uninitialized,
    Running,
    Disposed,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("viewport host is already mounted")]
    AlreadyMounted,
    #[error("viewport host has been disposed")]
    Disposed,
}

/// Shared flag the event loop checks before scheduling another frame.
#[derive(Debug, Clone, Default)]
pub struct FrameToken(Arc<AtomicBool>);

impl FrameToken {
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Owns the viewport and its surface for the lifetime of the render loop.
pub struct ViewportHost<S: RenderSurface> {
    viewport: Viewport,
    surface: Option<S>,
    state: HostState,
    token: FrameToken,
    frames: u64,
}

impl<S: RenderSurface> ViewportHost<S> {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            surface: None,
            state: HostState::Uninitialized,
            token: FrameToken::default(),
            frames: 0,
        }
    }

    /// Attach the surface and start running.
    pub fn mount(&mut self, surface: S) -> Result<(), HostError> {
        match self.state {
            HostState::Running => return Err(HostError::AlreadyMounted),
            HostState::Disposed => return Err(HostError::Disposed),
            HostState::Uninitialized => {}
        }
        let dims = surface.dimensions();
        self.viewport.resize(dims.width, dims.height);
        self.surface = Some(surface);
        self.state = HostState::Running;
        info!("viewport mounted at {}x{}", dims.width, dims.height);
        Ok(())
    }

    /// Advance and draw one frame. Returns `Ok(false)` when not running.
    pub fn frame(&mut self) -> Result<bool, RenderError> {
        if self.state != HostState::Running || self.token.is_cancelled() {
            return Ok(false);
        }
        let Some(surface) = self.surface.as_mut() else {
            return Ok(false);
        };
        self.viewport.advance();
        surface.render(&self.viewport)?;
        self.frames += 1;
        Ok(true)
    }

    /// Resize listener; ignored unless running or when a side is zero.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if self.state != HostState::Running {
            return false;
        }
        if !self.viewport.resize(width, height) {
            return false;
        }
        if let Some(surface) = self.surface.as_mut() {
            surface.resize(WindowDimensions::new(width, height));
        }
        true
    }

    /// Swap the displayed object; picked up by the next frame.
    pub fn show(&mut self, object: Option<SceneObject>) -> Result<(), HostError> {
        if self.state == HostState::Disposed {
            return Err(HostError::Disposed);
        }
        self.viewport.set_current(object);
        Ok(())
    }

    /// Stop the loop and release the surface. Idempotent.
    pub fn unmount(&mut self) {
        if self.state == HostState::Disposed {
            return;
        }
        self.token.cancel();
        if let Some(mut surface) = self.surface.take() {
            surface.dispose();
        }
        self.state = HostState::Disposed;
        debug!("viewport disposed after {} frames", self.frames);
    }

    pub fn state(&self) -> HostState {
        self.state
    }

    pub fn token(&self) -> FrameToken {
        self.token.clone()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames
    }
}

impl<S: RenderSurface> Drop for ViewportHost<S> {
    fn drop(&mut self) {
        self.unmount();
    }
}
