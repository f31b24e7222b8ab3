use glam::Mat4;

use crate::material::Material;
use crate::viewport::LightingRig;

/// Vertex layout shared by the triangle and line pipelines
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl GpuVertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<GpuVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }

    pub fn interleave(positions: &[[f32; 3]], normals: &[[f32; 3]]) -> Vec<GpuVertex> {
        positions
            .iter()
            .zip(normals)
            .map(|(p, n)| GpuVertex {
                position: *p,
                normal: *n,
            })
            .collect()
    }
}

/// Per-frame camera and lights, bind group 0
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GlobalsUniform {
    pub view_proj: [[f32; 4]; 4],
    pub camera_position: [f32; 4],
    /// rgb premultiplied by intensity
    pub ambient: [f32; 4],
    /// xyz toward the light
    pub light_direction: [f32; 4],
    pub light_color: [f32; 4],
    /// w holds the cutoff distance
    pub point_position: [f32; 4],
    pub point_color: [f32; 4],
}

impl GlobalsUniform {
    pub fn new(view_proj: Mat4, camera_position: glam::Vec3, lights: &LightingRig) -> Self {
        let scaled = |rgb: [f32; 3], k: f32| [rgb[0] * k, rgb[1] * k, rgb[2] * k, 1.0];
        let dir = lights.directional.direction();
        let point = lights.point.position;
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            camera_position: camera_position.extend(1.0).to_array(),
            ambient: scaled(lights.ambient.color.to_linear(), lights.ambient.intensity),
            light_direction: [dir.x, dir.y, dir.z, 0.0],
            light_color: scaled(
                lights.directional.color.to_linear(),
                lights.directional.intensity,
            ),
            point_position: [point.x, point.y, point.z, lights.point.distance],
            point_color: scaled(lights.point.color.to_linear(), lights.point.intensity),
        }
    }
}

/// Per-mesh transform and material, bind group 1
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DrawUniform {
    pub model: [[f32; 4]; 4],
    pub normal_matrix: [[f32; 4]; 4],
    /// Linear rgb plus opacity
    pub color: [f32; 4],
    /// metalness, roughness, unused, unused
    pub params: [f32; 4],
}

impl DrawUniform {
    pub fn new(model: Mat4, material: &Material) -> Self {
        let [r, g, b] = material.color.to_linear();
        Self {
            model: model.to_cols_array_2d(),
            normal_matrix: model.inverse().transpose().to_cols_array_2d(),
            color: [r, g, b, material.opacity()],
            params: [material.metalness(), material.roughness(), 0.0, 0.0],
        }
    }
}
