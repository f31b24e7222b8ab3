//! Scene graph, camera and lights for the live preview, plus the host that
//! drives its render loop.

mod camera;
mod host;
mod lighting;
mod surface;

pub use camera::PerspectiveCamera;
pub use host::{FrameToken, HostError, HostState, ViewportHost};
pub use lighting::{AmbientLight, DirectionalLight, LightingRig, PointLight};
pub use surface::{RenderError, RenderSurface, WindowDimensions};

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::math::HexColor;
use crate::scene::SceneObject;

/// Reserved name of the displayed generated object.
pub const CURRENT_OBJECT_NAME: &str = "generatedModel";

pub const BACKGROUND: HexColor = HexColor::from_u32(0x0f0f23);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportSettings {
    /// Radians about Y per frame.
    pub rotation_step: f32,
    pub fov_degrees: f32,
    pub camera_distance: f32,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            rotation_step: 0.01,
            fov_degrees: 75.0,
            camera_distance: 5.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Viewport {
    pub camera: PerspectiveCamera,
    pub lights: LightingRig,
    pub background: HexColor,
    rotation_step: f32,
    children: Vec<SceneObject>,
    revision: u64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(ViewportSettings::default())
    }
}

impl Viewport {
    pub fn new(settings: ViewportSettings) -> Self {
        let camera = PerspectiveCamera {
            fov_degrees: settings.fov_degrees,
            position: Vec3::new(0.0, 0.0, settings.camera_distance),
            ..Default::default()
        };
        Self {
            camera,
            lights: LightingRig::default(),
            background: BACKGROUND,
            rotation_step: settings.rotation_step,
            children: Vec::new(),
            revision: 0,
        }
    }

    /// Replace the displayed object. Any child carrying the reserved name is
    /// removed first, so at most one remains afterwards.
    pub fn set_current(&mut self, object: Option<SceneObject>) {
        self.children.retain(|c| c.name != CURRENT_OBJECT_NAME);
        if let Some(mut object) = object {
            object.name = CURRENT_OBJECT_NAME.to_string();
            object.transform.position = Vec3::ZERO;
            self.children.push(object);
        }
        self.revision += 1;
    }

    pub fn current(&self) -> Option<&SceneObject> {
        self.children.iter().find(|c| c.name == CURRENT_OBJECT_NAME)
    }

    pub fn children(&self) -> &[SceneObject] {
        &self.children
    }

    /// Bumped whenever the set of children changes.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn rotation_step(&self) -> f32 {
        self.rotation_step
    }

    /// One frame of animation: spin the current object about Y.
    pub fn advance(&mut self) {
        let step = self.rotation_step;
        if let Some(current) = self
            .children
            .iter_mut()
            .find(|c| c.name == CURRENT_OBJECT_NAME)
        {
            current.transform.rotation.y += step;
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        self.camera.set_viewport_size(width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt;
    use crate::scene::{self, GenerationOptions};

    fn object(text: &str) -> SceneObject {
        scene::build(&prompt::parse(text), &GenerationOptions::default()).unwrap()
    }

    #[test]
    fn test_set_current_renames_and_centers() {
        let mut viewport = Viewport::default();
        let mut sphere = object("sphere");
        sphere.transform.position = Vec3::new(3.0, 0.0, 0.0);
        viewport.set_current(Some(sphere));
        let current = viewport.current().unwrap();
        assert_eq!(current.name, CURRENT_OBJECT_NAME);
        assert_eq!(current.transform.position, Vec3::ZERO);
    }

    #[test]
    fn test_clear_current() {
        let mut viewport = Viewport::default();
        viewport.set_current(Some(object("cube")));
        viewport.set_current(None);
        assert!(viewport.current().is_none());
        assert!(viewport.children().is_empty());
    }

    #[test]
    fn test_swaps_keep_single_current() {
        let mut viewport = Viewport::default();
        viewport.set_current(Some(object("plane")));
        viewport.set_current(Some(object("cube")));
        viewport.set_current(Some(object("cone")));
        assert_eq!(viewport.children().len(), 1);
        assert_eq!(viewport.children()[0].name, CURRENT_OBJECT_NAME);
        assert_eq!(viewport.revision(), 3);
    }

    #[test]
    fn test_advance_rotates_current_only() {
        let mut viewport = Viewport::default();
        viewport.advance();
        viewport.set_current(Some(object("torus")));
        for _ in 0..10 {
            viewport.advance();
        }
        let rotation = viewport.current().unwrap().transform.rotation;
        assert!((rotation.y - 0.1).abs() < 1e-5);
        assert_eq!(rotation.x, 0.0);
    }

    #[test]
    fn test_revision_bumps() {
        let mut viewport = Viewport::default();
        let before = viewport.revision();
        viewport.set_current(None);
        assert_eq!(viewport.revision(), before + 1);
    }

    #[test]
    fn test_settings_applied_to_camera() {
        let viewport = Viewport::new(ViewportSettings {
            rotation_step: 0.02,
            fov_degrees: 60.0,
            camera_distance: 8.0,
        });
        assert_eq!(viewport.camera.fov_degrees, 60.0);
        assert_eq!(viewport.camera.position.z, 8.0);
        assert_eq!(viewport.rotation_step(), 0.02);
    }
}
