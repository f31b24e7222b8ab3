//! Parametric surfaces: box, UV sphere, cylinder/cone, torus, plane.
//!
//! Vertex order follows the usual grid layout (rows of `segments + 1`
//! vertices, seams duplicated) and triangles wind counter-clockwise seen
//! from outside.

use std::f32::consts::{PI, TAU};

use glam::Vec3;

use super::MeshBuffers;

pub fn cuboid(width: f32, height: f32, depth: f32, segments: u32) -> MeshBuffers {
    let mut mesh = MeshBuffers::default();
    let (hw, hh, hd) = (width * 0.5, height * 0.5, depth * 0.5);

    // (normal, u axis, v axis, u extent, v extent, offset along normal)
    let faces = [
        (Vec3::X, Vec3::NEG_Z, Vec3::Y, depth, height, hw),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y, depth, height, hw),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z, width, depth, hh),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z, width, depth, hh),
        (Vec3::Z, Vec3::X, Vec3::Y, width, height, hd),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y, width, height, hd),
    ];

    let row = segments + 1;
    for (normal, u_axis, v_axis, u_size, v_size, offset) in faces {
        let base = mesh.vertex_count() as u32;
        for iy in 0..=segments {
            let v = iy as f32 / segments as f32 - 0.5;
            for ix in 0..=segments {
                let u = ix as f32 / segments as f32 - 0.5;
                let p = normal * offset + u_axis * (u * u_size) + v_axis * (v * v_size);
                mesh.push_vertex(p.to_array(), normal.to_array());
            }
        }
        for iy in 0..segments {
            for ix in 0..segments {
                let a = base + iy * row + ix;
                let b = a + 1;
                let c = a + row;
                let d = c + 1;
                mesh.push_triangle(a, b, d);
                mesh.push_triangle(a, d, c);
            }
        }
    }
    mesh
}

pub fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> MeshBuffers {
    let mut mesh = MeshBuffers::default();
    let row = width_segments + 1;

    for iy in 0..=height_segments {
        let v = iy as f32 / height_segments as f32;
        for ix in 0..=width_segments {
            let u = ix as f32 / width_segments as f32;
            let normal = Vec3::new(
                -(u * TAU).cos() * (v * PI).sin(),
                (v * PI).cos(),
                (u * TAU).sin() * (v * PI).sin(),
            );
            mesh.push_vertex((normal * radius).to_array(), normal.to_array());
        }
    }

    // Pole rows collapse to a point, so only one triangle per quad there.
    for iy in 0..height_segments {
        for ix in 0..width_segments {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;
            if iy != 0 {
                mesh.push_triangle(a, b, d);
            }
            if iy != height_segments - 1 {
                mesh.push_triangle(b, c, d);
            }
        }
    }
    mesh
}

/// Open-ended only where a radius is zero (the cone's apex).
pub fn cylinder(radius_top: f32, radius_bottom: f32, height: f32, radial_segments: u32) -> MeshBuffers {
    let mut mesh = MeshBuffers::default();
    let half = height * 0.5;
    let slope = (radius_bottom - radius_top) / height;
    let row = radial_segments + 1;

    for y in 0..=1u32 {
        let v = y as f32;
        let radius = v * (radius_bottom - radius_top) + radius_top;
        for x in 0..=radial_segments {
            let theta = x as f32 / radial_segments as f32 * TAU;
            let (sin, cos) = theta.sin_cos();
            let position = [radius * sin, -v * height + half, radius * cos];
            let normal = Vec3::new(sin, slope, cos).normalize();
            mesh.push_vertex(position, normal.to_array());
        }
    }
    for x in 0..radial_segments {
        let a = x;
        let b = row + x;
        let c = row + x + 1;
        let d = x + 1;
        if radius_top > 0.0 {
            mesh.push_triangle(a, b, d);
        }
        if radius_bottom > 0.0 {
            mesh.push_triangle(b, c, d);
        }
    }

    if radius_top > 0.0 {
        cap(&mut mesh, radius_top, half, radial_segments, true);
    }
    if radius_bottom > 0.0 {
        cap(&mut mesh, radius_bottom, half, radial_segments, false);
    }
    mesh
}

fn cap(mesh: &mut MeshBuffers, radius: f32, half: f32, radial_segments: u32, top: bool) {
    let sign = if top { 1.0 } else { -1.0 };
    let normal = [0.0, sign, 0.0];

    let center_start = mesh.vertex_count() as u32;
    for _ in 0..radial_segments {
        mesh.push_vertex([0.0, half * sign, 0.0], normal);
    }
    let ring_start = mesh.vertex_count() as u32;
    for x in 0..=radial_segments {
        let theta = x as f32 / radial_segments as f32 * TAU;
        let (sin, cos) = theta.sin_cos();
        mesh.push_vertex([radius * sin, half * sign, radius * cos], normal);
    }
    for x in 0..radial_segments {
        let c = center_start + x;
        let i = ring_start + x;
        if top {
            mesh.push_triangle(i, i + 1, c);
        } else {
            mesh.push_triangle(i + 1, i, c);
        }
    }
}

pub fn torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> MeshBuffers {
    let mut mesh = MeshBuffers::default();
    let row = tubular_segments + 1;

    for j in 0..=radial_segments {
        let v = j as f32 / radial_segments as f32 * TAU;
        for i in 0..=tubular_segments {
            let u = i as f32 / tubular_segments as f32 * TAU;
            let position = Vec3::new(
                (radius + tube * v.cos()) * u.cos(),
                (radius + tube * v.cos()) * u.sin(),
                tube * v.sin(),
            );
            let center = Vec3::new(radius * u.cos(), radius * u.sin(), 0.0);
            let normal = (position - center).normalize_or_zero();
            mesh.push_vertex(position.to_array(), normal.to_array());
        }
    }
    for j in 1..=radial_segments {
        for i in 1..=tubular_segments {
            let a = row * j + i - 1;
            let b = row * (j - 1) + i - 1;
            let c = row * (j - 1) + i;
            let d = row * j + i;
            mesh.push_triangle(a, b, d);
            mesh.push_triangle(b, c, d);
        }
    }
    mesh
}

/// Lies in the XY plane facing +Z.
pub fn plane(width: f32, height: f32, width_segments: u32, height_segments: u32) -> MeshBuffers {
    let mut mesh = MeshBuffers::default();
    let row = width_segments + 1;
    let seg_w = width / width_segments as f32;
    let seg_h = height / height_segments as f32;

    for iy in 0..=height_segments {
        let y = iy as f32 * seg_h - height * 0.5;
        for ix in 0..=width_segments {
            let x = ix as f32 * seg_w - width * 0.5;
            mesh.push_vertex([x, -y, 0.0], [0.0, 0.0, 1.0]);
        }
    }
    for iy in 0..height_segments {
        for ix in 0..width_segments {
            let a = ix + row * iy;
            let b = ix + row * (iy + 1);
            let c = ix + 1 + row * (iy + 1);
            let d = ix + 1 + row * iy;
            mesh.push_triangle(a, b, d);
            mesh.push_triangle(b, c, d);
        }
    }
    mesh
}
