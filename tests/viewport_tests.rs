use std::cell::RefCell;
use std::rc::Rc;

use prompt3d::prompt::parse;
use prompt3d::scene::{build, GenerationOptions, SceneObject};
use prompt3d::viewport::{
    HostError, HostState, RenderError, RenderSurface, Viewport, ViewportHost, WindowDimensions,
    CURRENT_OBJECT_NAME,
};

#[derive(Default)]
struct Log {
    frames: Vec<Option<String>>,
    disposed: usize,
}

struct RecordingSurface {
    dims: WindowDimensions,
    log: Rc<RefCell<Log>>,
}

impl RecordingSurface {
    fn new(width: u32, height: u32) -> (Self, Rc<RefCell<Log>>) {
        let log = Rc::new(RefCell::new(Log::default()));
        let surface = Self {
            dims: WindowDimensions::new(width, height),
            log: log.clone(),
        };
        (surface, log)
    }
}

impl RenderSurface for RecordingSurface {
    fn dimensions(&self) -> WindowDimensions {
        self.dims
    }

    fn resize(&mut self, dimensions: WindowDimensions) {
        self.dims = dimensions;
    }

    fn render(&mut self, viewport: &Viewport) -> Result<(), RenderError> {
        let summary = viewport.current().map(|c| c.summary());
        self.log.borrow_mut().frames.push(summary);
        Ok(())
    }

    fn dispose(&mut self) {
        self.log.borrow_mut().disposed += 1;
    }
}

fn object(text: &str) -> SceneObject {
    build(&parse(text), &GenerationOptions::default()).unwrap()
}

#[cfg(test)]
mod swap_tests {
    use super::*;

    #[test]
    fn test_two_swaps_leave_one_current_object() {
        let (surface, log) = RecordingSurface::new(800, 600);
        let mut host = ViewportHost::new(Viewport::default());
        host.mount(surface).unwrap();

        host.show(Some(object("red sphere"))).unwrap();
        host.frame().unwrap();
        host.show(Some(object("blue torus"))).unwrap();
        host.frame().unwrap();

        let children = host.viewport().children();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].name, CURRENT_OBJECT_NAME);
        let frames = &log.borrow().frames;
        assert_eq!(frames.len(), 2);
        assert!(frames[0].as_deref().unwrap().starts_with("sphere"));
        assert!(frames[1].as_deref().unwrap().starts_with("torus"));
    }

    #[test]
    fn test_show_none_clears_current() {
        let (surface, log) = RecordingSurface::new(800, 600);
        let mut host = ViewportHost::new(Viewport::default());
        host.mount(surface).unwrap();
        host.show(Some(object("box"))).unwrap();
        host.show(None).unwrap();
        host.frame().unwrap();

        assert!(host.viewport().current().is_none());
        assert_eq!(log.borrow().frames, vec![None]);
    }

    #[test]
    fn test_object_shown_before_mount_is_drawn() {
        let (surface, log) = RecordingSurface::new(640, 480);
        let mut host = ViewportHost::new(Viewport::default());
        host.show(Some(object("green cone"))).unwrap();
        host.mount(surface).unwrap();
        host.frame().unwrap();

        assert!(log.borrow().frames[0].as_deref().unwrap().starts_with("cone"));
    }

    #[test]
    fn test_current_object_spins_each_frame() {
        let (surface, _) = RecordingSurface::new(100, 100);
        let mut host = ViewportHost::new(Viewport::default());
        host.mount(surface).unwrap();
        host.show(Some(object("box"))).unwrap();
        for _ in 0..10 {
            host.frame().unwrap();
        }
        let rotation = host.viewport().current().unwrap().transform.rotation.y;
        assert!((rotation - 0.1).abs() < 1e-5);
        assert_eq!(host.frames_rendered(), 10);
    }
}

#[cfg(test)]
mod lifecycle_tests {
    use super::*;

    #[test]
    fn test_no_frames_after_unmount() {
        let (surface, log) = RecordingSurface::new(800, 600);
        let mut host = ViewportHost::new(Viewport::default());
        host.mount(surface).unwrap();
        host.frame().unwrap();
        host.unmount();

        assert_eq!(host.frame().unwrap(), false);
        assert_eq!(log.borrow().frames.len(), 1);
        assert_eq!(log.borrow().disposed, 1);
        assert_eq!(host.state(), HostState::Disposed);
        assert!(host.token().is_cancelled());
    }

    #[test]
    fn test_unmount_is_idempotent() {
        let (surface, log) = RecordingSurface::new(800, 600);
        let mut host = ViewportHost::new(Viewport::default());
        host.mount(surface).unwrap();
        host.unmount();
        host.unmount();
        assert_eq!(log.borrow().disposed, 1);
    }

    #[test]
    fn test_show_after_dispose_rejected() {
        let (surface, _) = RecordingSurface::new(800, 600);
        let mut host = ViewportHost::new(Viewport::default());
        host.mount(surface).unwrap();
        host.unmount();
        assert_eq!(host.show(Some(object("box"))), Err(HostError::Disposed));
    }

    #[test]
    fn test_remount_after_dispose_rejected() {
        let (a, _) = RecordingSurface::new(10, 10);
        let (b, _) = RecordingSurface::new(10, 10);
        let mut host = ViewportHost::new(Viewport::default());
        host.mount(a).unwrap();
        host.unmount();
        assert!(matches!(host.mount(b), Err(HostError::Disposed)));
    }

    #[test]
    fn test_drop_disposes_surface() {
        let (surface, log) = RecordingSurface::new(800, 600);
        let token = {
            let mut host = ViewportHost::new(Viewport::default());
            host.mount(surface).unwrap();
            host.token()
        };
        assert_eq!(log.borrow().disposed, 1);
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_resize_updates_aspect_and_ignores_zero() {
        let (surface, _) = RecordingSurface::new(800, 600);
        let mut host = ViewportHost::new(Viewport::default());
        host.mount(surface).unwrap();

        assert!(host.resize(1000, 500));
        assert_eq!(host.viewport().camera.aspect, 2.0);
        assert_eq!(host.surface().unwrap().dims, WindowDimensions::new(1000, 500));

        assert!(!host.resize(0, 500));
        assert_eq!(host.viewport().camera.aspect, 2.0);
    }
}
