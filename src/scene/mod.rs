//! Scene objects produced by the builder and shown in the viewport.

mod builder;

pub use builder::{build, BuildError, GenerationOptions};

use glam::{EulerRot, Mat4, Quat, Vec3};

use crate::geometry::Geometry;
use crate::material::Material;
use crate::math::AABB;

/// Position, XYZ euler rotation in radians, and scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    pub fn with_uniform_scale(mut self, scale: f32) -> Self {
        self.scale = Vec3::splat(scale);
        self
    }

    pub fn matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_scale_rotation_translation(self.scale, rotation, self.position)
    }
}

#[derive(Debug, Clone)]
pub struct MeshNode {
    pub name: String,
    pub geometry: Geometry,
    pub material: Material,
    pub transform: Transform,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

impl MeshNode {
    pub fn new(name: impl Into<String>, geometry: Geometry, material: Material) -> Self {
        Self {
            name: name.into(),
            geometry,
            material,
            transform: Transform::default(),
            cast_shadow: false,
            receive_shadow: false,
        }
    }
}

/// A group of mesh nodes. The first node is always the primary mesh.
#[derive(Debug, Clone)]
pub struct SceneObject {
    pub name: String,
    pub transform: Transform,
    nodes: Vec<MeshNode>,
}

impl SceneObject {
    pub fn new(name: impl Into<String>, primary: MeshNode) -> Self {
        Self {
            name: name.into(),
            transform: Transform::default(),
            nodes: vec![primary],
        }
    }

    pub fn push(&mut self, node: MeshNode) {
        self.nodes.push(node);
    }

    pub fn primary(&self) -> &MeshNode {
        &self.nodes[0]
    }

    pub fn nodes(&self) -> &[MeshNode] {
        &self.nodes
    }

    pub fn decorations(&self) -> &[MeshNode] {
        &self.nodes[1..]
    }

    pub fn mesh_count(&self) -> usize {
        self.nodes.len()
    }

    /// Node-to-world matrices, group transform applied.
    pub fn world_matrices(&self) -> impl Iterator<Item = (&MeshNode, Mat4)> + '_ {
        let group = self.transform.matrix();
        self.nodes
            .iter()
            .map(move |node| (node, group * node.transform.matrix()))
    }

    pub fn bounds(&self) -> Option<AABB> {
        self.world_matrices()
            .filter_map(|(node, matrix)| {
                node.geometry
                    .mesh()
                    .bounds()
                    .map(|b| b.transformed(&matrix))
            })
            .reduce(|a, b| a.union(&b))
    }

    /// One-line description for lists and logs.
    pub fn summary(&self) -> String {
        let primary = self.primary();
        let density = primary
            .geometry
            .density()
            .map(|d| format!(", {} segments", d))
            .unwrap_or_default();
        format!(
            "{}{}, {}, {} mesh(es)",
            primary.geometry.kind(),
            density,
            primary.material.color,
            self.mesh_count()
        )
    }
}
