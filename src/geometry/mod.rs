//! Triangle meshes for the ten primitive kinds.

pub mod polyhedra;
pub mod primitives;

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::math::AABB;
use crate::prompt::PrimitiveKind;

/// Tessellation tier chosen by the caller.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Low,
    #[default]
    Medium,
    High,
}

impl Complexity {
    /// Segment count used by every density-aware constructor.
    pub fn segments(self) -> u32 {
        match self {
            Complexity::Low => 8,
            Complexity::Medium => 16,
            Complexity::High => 32,
        }
    }
}

/// Indexed triangle list in object space.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffers {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

impl MeshBuffers {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub(crate) fn push_vertex(&mut self, position: [f32; 3], normal: [f32; 3]) -> u32 {
        self.positions.push(position);
        self.normals.push(normal);
        (self.positions.len() - 1) as u32
    }

    pub(crate) fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    /// Line-list indices covering each distinct triangle edge once.
    pub fn edge_indices(&self) -> Vec<u32> {
        let mut seen = HashSet::new();
        let mut lines = Vec::new();
        for tri in self.indices.chunks_exact(3) {
            for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
                if seen.insert((a.min(b), a.max(b))) {
                    lines.push(a);
                    lines.push(b);
                }
            }
        }
        lines
    }

    pub fn bounds(&self) -> Option<AABB> {
        AABB::from_points(self.positions.iter())
    }
}

/// Constructor parameters, kept alongside the mesh for inspection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeometryParams {
    Box {
        width: f32,
        height: f32,
        depth: f32,
        segments: u32,
    },
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
    Cylinder {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        radial_segments: u32,
    },
    Cone {
        radius: f32,
        height: f32,
        radial_segments: u32,
    },
    Torus {
        radius: f32,
        tube: f32,
        radial_segments: u32,
        tubular_segments: u32,
    },
    Plane {
        width: f32,
        height: f32,
        width_segments: u32,
        height_segments: u32,
    },
    Polyhedron {
        radius: f32,
        detail: u32,
    },
}

#[derive(Debug, Clone)]
pub struct Geometry {
    kind: PrimitiveKind,
    params: GeometryParams,
    mesh: Arc<MeshBuffers>,
}

impl Geometry {
    /// Canonical unit-sized geometry for `kind` at the given tier.
    pub fn for_kind(kind: PrimitiveKind, complexity: Complexity) -> Self {
        let s = complexity.segments();
        match kind {
            PrimitiveKind::Box => Self::cuboid(1.0, 1.0, 1.0, s),
            PrimitiveKind::Sphere => Self::sphere(1.0, s, s),
            PrimitiveKind::Cylinder => Self::cylinder(1.0, 1.0, 2.0, s),
            PrimitiveKind::Cone => Self::cone(1.0, 2.0, s),
            PrimitiveKind::Torus => Self::torus(1.0, 0.4, s / 2, s),
            PrimitiveKind::Plane => Self::plane(2.0, 2.0, s, s),
            PrimitiveKind::Octahedron
            | PrimitiveKind::Dodecahedron
            | PrimitiveKind::Icosahedron
            | PrimitiveKind::Tetrahedron => Self::polyhedron(kind, 1.0),
        }
    }

    pub fn cuboid(width: f32, height: f32, depth: f32, segments: u32) -> Self {
        let segments = segments.max(1);
        Self::new(
            PrimitiveKind::Box,
            GeometryParams::Box {
                width,
                height,
                depth,
                segments,
            },
            primitives::cuboid(width, height, depth, segments),
        )
    }

    pub fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> Self {
        let width_segments = width_segments.max(3);
        let height_segments = height_segments.max(2);
        Self::new(
            PrimitiveKind::Sphere,
            GeometryParams::Sphere {
                radius,
                width_segments,
                height_segments,
            },
            primitives::sphere(radius, width_segments, height_segments),
        )
    }

    pub fn cylinder(radius_top: f32, radius_bottom: f32, height: f32, radial_segments: u32) -> Self {
        let radial_segments = radial_segments.max(3);
        Self::new(
            PrimitiveKind::Cylinder,
            GeometryParams::Cylinder {
                radius_top,
                radius_bottom,
                height,
                radial_segments,
            },
            primitives::cylinder(radius_top, radius_bottom, height, radial_segments),
        )
    }

    pub fn cone(radius: f32, height: f32, radial_segments: u32) -> Self {
        let radial_segments = radial_segments.max(3);
        Self::new(
            PrimitiveKind::Cone,
            GeometryParams::Cone {
                radius,
                height,
                radial_segments,
            },
            primitives::cylinder(0.0, radius, height, radial_segments),
        )
    }

    pub fn torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> Self {
        let radial_segments = radial_segments.max(2);
        let tubular_segments = tubular_segments.max(3);
        Self::new(
            PrimitiveKind::Torus,
            GeometryParams::Torus {
                radius,
                tube,
                radial_segments,
                tubular_segments,
            },
            primitives::torus(radius, tube, radial_segments, tubular_segments),
        )
    }

    pub fn plane(width: f32, height: f32, width_segments: u32, height_segments: u32) -> Self {
        let width_segments = width_segments.max(1);
        let height_segments = height_segments.max(1);
        Self::new(
            PrimitiveKind::Plane,
            GeometryParams::Plane {
                width,
                height,
                width_segments,
                height_segments,
            },
            primitives::plane(width, height, width_segments, height_segments),
        )
    }

    /// One of the four platonic solids at detail 0. Any other kind falls
    /// back to the tetrahedron table.
    pub fn polyhedron(kind: PrimitiveKind, radius: f32) -> Self {
        let solid = polyhedra::Solid::from_kind(kind).unwrap_or(polyhedra::Solid::Tetrahedron);
        Self::new(
            solid.kind(),
            GeometryParams::Polyhedron { radius, detail: 0 },
            polyhedra::build(solid, radius),
        )
    }

    fn new(kind: PrimitiveKind, params: GeometryParams, mesh: MeshBuffers) -> Self {
        Self {
            kind,
            params,
            mesh: Arc::new(mesh),
        }
    }

    pub fn kind(&self) -> PrimitiveKind {
        self.kind
    }

    pub fn params(&self) -> &GeometryParams {
        &self.params
    }

    pub fn mesh(&self) -> &MeshBuffers {
        &self.mesh
    }

    /// Shared handle, so renderers can cache uploads by pointer.
    pub fn mesh_arc(&self) -> &Arc<MeshBuffers> {
        &self.mesh
    }

    /// Tessellation density along the primary axis; `None` for the
    /// fixed-detail polyhedra.
    pub fn density(&self) -> Option<u32> {
        match self.params {
            GeometryParams::Box { segments, .. } => Some(segments),
            GeometryParams::Sphere { width_segments, .. } => Some(width_segments),
            GeometryParams::Cylinder {
                radial_segments, ..
            } => Some(radial_segments),
            GeometryParams::Cone {
                radial_segments, ..
            } => Some(radial_segments),
            GeometryParams::Torus {
                tubular_segments, ..
            } => Some(tubular_segments),
            GeometryParams::Plane { width_segments, .. } => Some(width_segments),
            GeometryParams::Polyhedron { .. } => None,
        }
    }
}
