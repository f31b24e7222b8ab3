//! Platonic solids at detail 0, flat shaded.
//!
//! Each face gets its own three vertices so normals stay per-face.

use glam::Vec3;

use super::MeshBuffers;
use crate::prompt::PrimitiveKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solid {
    Tetrahedron,
    Octahedron,
    Icosahedron,
    Dodecahedron,
}

impl Solid {
    pub fn from_kind(kind: PrimitiveKind) -> Option<Self> {
        match kind {
            PrimitiveKind::Tetrahedron => Some(Solid::Tetrahedron),
            PrimitiveKind::Octahedron => Some(Solid::Octahedron),
            PrimitiveKind::Icosahedron => Some(Solid::Icosahedron),
            PrimitiveKind::Dodecahedron => Some(Solid::Dodecahedron),
            _ => None,
        }
    }

    pub fn kind(self) -> PrimitiveKind {
        match self {
            Solid::Tetrahedron => PrimitiveKind::Tetrahedron,
            Solid::Octahedron => PrimitiveKind::Octahedron,
            Solid::Icosahedron => PrimitiveKind::Icosahedron,
            Solid::Dodecahedron => PrimitiveKind::Dodecahedron,
        }
    }

    fn vertices(self) -> Vec<Vec3> {
        let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
        let r = 1.0 / t;
        let raw: Vec<[f32; 3]> = match self {
            Solid::Tetrahedron => vec![
                [1.0, 1.0, 1.0],
                [-1.0, -1.0, 1.0],
                [-1.0, 1.0, -1.0],
                [1.0, -1.0, -1.0],
            ],
            Solid::Octahedron => vec![
                [1.0, 0.0, 0.0],
                [-1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [0.0, -1.0, 0.0],
                [0.0, 0.0, 1.0],
                [0.0, 0.0, -1.0],
            ],
            Solid::Icosahedron => vec![
                [-1.0, t, 0.0],
                [1.0, t, 0.0],
                [-1.0, -t, 0.0],
                [1.0, -t, 0.0],
                [0.0, -1.0, t],
                [0.0, 1.0, t],
                [0.0, -1.0, -t],
                [0.0, 1.0, -t],
                [t, 0.0, -1.0],
                [t, 0.0, 1.0],
                [-t, 0.0, -1.0],
                [-t, 0.0, 1.0],
            ],
            Solid::Dodecahedron => vec![
                [-1.0, -1.0, -1.0],
                [-1.0, -1.0, 1.0],
                [-1.0, 1.0, -1.0],
                [-1.0, 1.0, 1.0],
                [1.0, -1.0, -1.0],
                [1.0, -1.0, 1.0],
                [1.0, 1.0, -1.0],
                [1.0, 1.0, 1.0],
                [0.0, -r, -t],
                [0.0, -r, t],
                [0.0, r, -t],
                [0.0, r, t],
                [-r, -t, 0.0],
                [-r, t, 0.0],
                [r, -t, 0.0],
                [r, t, 0.0],
                [-t, 0.0, -r],
                [t, 0.0, -r],
                [-t, 0.0, r],
                [t, 0.0, r],
            ],
        };
        raw.into_iter().map(Vec3::from_array).collect()
    }

    fn faces(self) -> &'static [[usize; 3]] {
        match self {
            Solid::Tetrahedron => &[[2, 1, 0], [0, 3, 2], [1, 3, 0], [2, 3, 1]],
            Solid::Octahedron => &[
                [0, 2, 4],
                [0, 4, 3],
                [0, 3, 5],
                [0, 5, 2],
                [1, 2, 5],
                [1, 5, 3],
                [1, 3, 4],
                [1, 4, 2],
            ],
            Solid::Icosahedron => &[
                [0, 11, 5],
                [0, 5, 1],
                [0, 1, 7],
                [0, 7, 10],
                [0, 10, 11],
                [1, 5, 9],
                [5, 11, 4],
                [11, 10, 2],
                [10, 7, 6],
                [7, 1, 8],
                [3, 9, 4],
                [3, 4, 2],
                [3, 2, 6],
                [3, 6, 8],
                [3, 8, 9],
                [4, 9, 5],
                [2, 4, 11],
                [6, 2, 10],
                [8, 6, 7],
                [9, 8, 1],
            ],
            // Twelve pentagons, three triangles each.
            Solid::Dodecahedron => &[
                [3, 11, 7],
                [3, 7, 15],
                [3, 15, 13],
                [7, 19, 17],
                [7, 17, 6],
                [7, 6, 15],
                [17, 4, 8],
                [17, 8, 10],
                [17, 10, 6],
                [8, 0, 16],
                [8, 16, 2],
                [8, 2, 10],
                [0, 12, 1],
                [0, 1, 18],
                [0, 18, 16],
                [6, 10, 2],
                [6, 2, 13],
                [6, 13, 15],
                [2, 16, 18],
                [2, 18, 3],
                [2, 3, 13],
                [18, 1, 9],
                [18, 9, 11],
                [18, 11, 3],
                [4, 14, 12],
                [4, 12, 0],
                [4, 0, 8],
                [11, 9, 5],
                [11, 5, 19],
                [11, 19, 7],
                [19, 5, 14],
                [19, 14, 4],
                [19, 4, 17],
                [1, 12, 14],
                [1, 14, 5],
                [1, 5, 9],
            ],
        }
    }
}

/// Vertices projected onto the sphere of `radius`; every face wound so its
/// normal points away from the origin.
pub fn build(solid: Solid, radius: f32) -> MeshBuffers {
    let vertices: Vec<Vec3> = solid
        .vertices()
        .into_iter()
        .map(|v| v.normalize() * radius)
        .collect();

    let mut mesh = MeshBuffers::default();
    for &[i0, i1, i2] in solid.faces() {
        let (p0, mut p1, mut p2) = (vertices[i0], vertices[i1], vertices[i2]);
        let mut normal = (p1 - p0).cross(p2 - p0);
        if normal.dot(p0 + p1 + p2) < 0.0 {
            std::mem::swap(&mut p1, &mut p2);
            normal = -normal;
        }
        let normal = normal.normalize_or_zero().to_array();
        let a = mesh.push_vertex(p0.to_array(), normal);
        let b = mesh.push_vertex(p1.to_array(), normal);
        let c = mesh.push_vertex(p2.to_array(), normal);
        mesh.push_triangle(a, b, c);
    }
    mesh
}
