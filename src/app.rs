use std::sync::Arc;

use log::{error, info, warn};
use tokio::runtime::Handle;
use tokio::sync::watch;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::ActiveEventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::auth::LocalAuth;
use crate::config::AppConfig;
use crate::renderer::GpuRenderer;
use crate::scene::SceneObject;
use crate::session::Session;
use crate::ui::PromptPanel;
use crate::viewport::{FrameToken, RenderError, Viewport, ViewportHost};

/// Window shell: owns the viewport host and feeds it the session's current
/// model.
pub struct App {
    config: AppConfig,
    show_ui: bool,
    session: Session,
    auth: Arc<LocalAuth>,
    runtime: Handle,
    current: watch::Receiver<Option<Arc<SceneObject>>>,
    window: Option<Arc<Window>>,
    host: Option<ViewportHost<GpuRenderer>>,
    frame_token: Option<FrameToken>,
}

impl App {
    pub fn new(
        config: AppConfig,
        show_ui: bool,
        session: Session,
        auth: Arc<LocalAuth>,
        runtime: Handle,
    ) -> Self {
        let current = session.subscribe_current();
        Self {
            config,
            show_ui,
            session,
            auth,
            runtime,
            current,
            window: None,
            host: None,
            frame_token: None,
        }
    }

    fn spawn_startup_prompt(&mut self) {
        let Some(prompt) = self.config.prompt.take() else {
            return;
        };
        let session = self.session.clone();
        self.runtime.spawn(async move {
            if let Err(e) = session.generate(&prompt).await {
                warn!("startup prompt {:?} failed: {}", prompt, e);
            }
        });
    }

    /// Hand the newest session model to the viewport, if it changed.
    fn sync_current(&mut self) {
        if !self.current.has_changed().unwrap_or(false) {
            return;
        }
        let object = self.current.borrow_and_update().clone();
        if let Some(host) = self.host.as_mut() {
            if let Err(e) = host.show(object.map(|o| (*o).clone())) {
                warn!("dropping model update: {}", e);
            }
        }
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(mut host) = self.host.take() {
            host.unmount();
        }
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title(self.config.window.title.clone())
                .with_inner_size(winit::dpi::LogicalSize::new(
                    self.config.window.width,
                    self.config.window.height,
                )),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                error!("failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let mut renderer = match pollster::block_on(GpuRenderer::new(window.clone())) {
            Ok(r) => r,
            Err(e) => {
                error!("failed to initialize renderer: {:#}", e);
                event_loop.exit();
                return;
            }
        };

        if self.show_ui {
            let mut panel =
                PromptPanel::new(self.session.clone(), self.auth.clone(), self.runtime.clone());
            renderer.set_overlay(Box::new(move |ctx| panel.show(ctx)));
        }

        let mut host = ViewportHost::new(Viewport::new(self.config.viewport));
        if let Err(e) = host.mount(renderer) {
            error!("failed to mount viewport: {}", e);
            event_loop.exit();
            return;
        }
        if let Some(object) = self.session.current() {
            if let Err(e) = host.show(Some((*object).clone())) {
                warn!("could not show current model: {}", e);
            }
        }

        self.frame_token = Some(host.token());
        self.host = Some(host);
        self.window = Some(window);
        self.spawn_startup_prompt();
        info!("window ready");
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui handle the event first
        if self.show_ui {
            if let Some(renderer) = self.host.as_mut().and_then(|h| h.surface_mut()) {
                if renderer.handle_event(&event) {
                    return;
                }
            }
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => self.shutdown(event_loop),
            WindowEvent::Resized(size) => {
                if let Some(host) = self.host.as_mut() {
                    host.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => {
                self.sync_current();
                let Some(host) = self.host.as_mut() else {
                    return;
                };
                match host.frame() {
                    Ok(_) => {}
                    Err(RenderError::SurfaceLost) => {}
                    Err(RenderError::OutOfMemory) => {
                        error!("out of GPU memory, exiting");
                        self.shutdown(event_loop);
                    }
                    Err(e) => warn!("render error: {}", e),
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        let running = self
            .frame_token
            .as_ref()
            .is_some_and(|token| !token.is_cancelled());
        if running {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(mut host) = self.host.take() {
            host.unmount();
        }
    }
}
