use std::sync::Arc;

use log::{debug, info, warn};
use wgpu::util::DeviceExt;
use winit::window::Window;

use crate::scene::MeshNode;
use crate::types::{DrawUniform, GlobalsUniform, GpuVertex};
use crate::viewport::{RenderError, RenderSurface, Viewport, WindowDimensions};

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

type Result<T> = anyhow::Result<T>;

/// egui content drawn over the 3D view each frame.
pub type Overlay = Box<dyn FnMut(&egui::Context)>;

struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    edge_buffer: wgpu::Buffer,
    edge_count: u32,
    draw_buffer: wgpu::Buffer,
    draw_bind_group: wgpu::BindGroup,
    wireframe: bool,
    transparent: bool,
}

/// wgpu rasterizer for the viewport, with an egui layer on top.
pub struct GpuRenderer {
    window: Arc<Window>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface: wgpu::Surface<'static>,
    surface_config: wgpu::SurfaceConfiguration,
    depth_view: wgpu::TextureView,
    globals_buffer: wgpu::Buffer,
    globals_bind_group: wgpu::BindGroup,
    draw_layout: wgpu::BindGroupLayout,
    opaque_pipeline: wgpu::RenderPipeline,
    blended_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,
    meshes: Vec<GpuMesh>,
    uploaded_revision: Option<u64>,
    egui_renderer: egui_wgpu::Renderer,
    egui_state: egui_winit::State,
    egui_ctx: egui::Context,
    overlay: Option<Overlay>,
    disposed: bool,
}

impl GpuRenderer {
    pub async fn new(window: Arc<Window>) -> Result<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone())?;
        let adapter = Self::request_adapter(&instance, &surface).await?;
        let (device, queue) = Self::request_device(&adapter).await?;
        info!("using adapter {}", adapter.get_info().name);

        let surface_config = Self::create_surface_config(&surface, &adapter, size.width, size.height);
        surface.configure(&device, &surface_config);

        let depth_view = Self::create_depth_view(&device, size.width, size.height);

        let globals_layout = Self::uniform_layout(&device, "Globals Layout", wgpu::ShaderStages::VERTEX_FRAGMENT);
        let draw_layout = Self::uniform_layout(&device, "Draw Layout", wgpu::ShaderStages::VERTEX_FRAGMENT);

        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Globals Buffer"),
            size: std::mem::size_of::<GlobalsUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let globals_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Globals Bind Group"),
            layout: &globals_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Mesh Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("mesh.wgsl").into()),
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Mesh Pipeline Layout"),
            bind_group_layouts: &[&globals_layout, &draw_layout],
            push_constant_ranges: &[],
        });

        let format = surface_config.format;
        let opaque_pipeline = Self::create_pipeline(
            &device,
            &pipeline_layout,
            &shader,
            format,
            PipelineKind::Opaque,
        );
        let blended_pipeline = Self::create_pipeline(
            &device,
            &pipeline_layout,
            &shader,
            format,
            PipelineKind::Blended,
        );
        let line_pipeline = Self::create_pipeline(
            &device,
            &pipeline_layout,
            &shader,
            format,
            PipelineKind::Lines,
        );

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(
            &device,
            format,
            egui_wgpu::RendererOptions::default(),
        );

        info!("renderer initialized at {}x{} ({:?})", size.width, size.height, format);

        Ok(Self {
            window,
            device,
            queue,
            surface,
            surface_config,
            depth_view,
            globals_buffer,
            globals_bind_group,
            draw_layout,
            opaque_pipeline,
            blended_pipeline,
            line_pipeline,
            meshes: Vec::new(),
            uploaded_revision: None,
            egui_renderer,
            egui_state,
            egui_ctx,
            overlay: None,
            disposed: false,
        })
    }

    async fn request_adapter(
        instance: &wgpu::Instance,
        surface: &wgpu::Surface<'_>,
    ) -> Result<wgpu::Adapter> {
        instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| anyhow::anyhow!("failed to find appropriate adapter: {e}"))
    }

    async fn request_device(adapter: &wgpu::Adapter) -> Result<(wgpu::Device, wgpu::Queue)> {
        Ok(adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Viewport Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
                experimental_features: Default::default(),
                trace: Default::default(),
            })
            .await?)
    }

    fn create_surface_config(
        surface: &wgpu::Surface,
        adapter: &wgpu::Adapter,
        width: u32,
        height: u32,
    ) -> wgpu::SurfaceConfiguration {
        let surface_caps = surface.get_capabilities(adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .unwrap_or(surface_caps.formats[0]);

        wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        }
    }

    fn create_depth_view(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
        device
            .create_texture(&wgpu::TextureDescriptor {
                label: Some("Depth Texture"),
                size: wgpu::Extent3d {
                    width: width.max(1),
                    height: height.max(1),
                    depth_or_array_layers: 1,
                },
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: DEPTH_FORMAT,
                usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
                view_formats: &[],
            })
            .create_view(&wgpu::TextureViewDescriptor::default())
    }

    fn uniform_layout(
        device: &wgpu::Device,
        label: &str,
        visibility: wgpu::ShaderStages,
    ) -> wgpu::BindGroupLayout {
        device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some(label),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        })
    }

    fn create_pipeline(
        device: &wgpu::Device,
        layout: &wgpu::PipelineLayout,
        shader: &wgpu::ShaderModule,
        format: wgpu::TextureFormat,
        kind: PipelineKind,
    ) -> wgpu::RenderPipeline {
        let (label, topology, cull_mode, blend, depth_write) = match kind {
            PipelineKind::Opaque => (
                "Opaque Pipeline",
                wgpu::PrimitiveTopology::TriangleList,
                Some(wgpu::Face::Back),
                wgpu::BlendState::REPLACE,
                true,
            ),
            PipelineKind::Blended => (
                "Blended Pipeline",
                wgpu::PrimitiveTopology::TriangleList,
                None,
                wgpu::BlendState::ALPHA_BLENDING,
                false,
            ),
            PipelineKind::Lines => (
                "Line Pipeline",
                wgpu::PrimitiveTopology::LineList,
                None,
                wgpu::BlendState::ALPHA_BLENDING,
                true,
            ),
        };

        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_main"),
                buffers: &[GpuVertex::layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(blend),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: depth_write,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        })
    }

    fn upload(&self, node: &MeshNode) -> GpuMesh {
        let mesh = node.geometry.mesh();
        let vertices = GpuVertex::interleave(&mesh.positions, &mesh.normals);
        let edges = mesh.edge_indices();

        let vertex_buffer = self.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Mesh Vertices"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = self.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Mesh Indices"),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        let edge_buffer = self.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Mesh Edges"),
            contents: bytemuck::cast_slice(&edges),
            usage: wgpu::BufferUsages::INDEX,
        });
        let draw_buffer = self.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Draw Buffer"),
            size: std::mem::size_of::<DrawUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let draw_bind_group = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Draw Bind Group"),
            layout: &self.draw_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: draw_buffer.as_entire_binding(),
            }],
        });

        GpuMesh {
            vertex_buffer,
            index_buffer,
            index_count: mesh.indices.len() as u32,
            edge_buffer,
            edge_count: edges.len() as u32,
            draw_buffer,
            draw_bind_group,
            wireframe: node.material.wireframe,
            transparent: node.material.is_transparent(),
        }
    }

    /// Re-upload geometry when the viewport's children changed, then refresh
    /// per-mesh uniforms.
    fn sync(&mut self, viewport: &Viewport) {
        if self.uploaded_revision != Some(viewport.revision()) {
            let meshes: Vec<GpuMesh> = viewport
                .children()
                .iter()
                .flat_map(|object| object.nodes())
                .map(|node| self.upload(node))
                .collect();
            debug!("uploaded {} meshes for revision {}", meshes.len(), viewport.revision());
            self.meshes = meshes;
            self.uploaded_revision = Some(viewport.revision());
        }

        let draws = viewport
            .children()
            .iter()
            .flat_map(|object| object.world_matrices())
            .map(|(node, matrix)| DrawUniform::new(matrix, &node.material));
        for (gpu, draw) in self.meshes.iter().zip(draws) {
            self.queue
                .write_buffer(&gpu.draw_buffer, 0, bytemuck::cast_slice(&[draw]));
        }

        let globals = GlobalsUniform::new(
            viewport.camera.view_projection(),
            viewport.camera.position,
            &viewport.lights,
        );
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::cast_slice(&[globals]));
    }

    pub fn set_overlay(&mut self, overlay: Overlay) {
        self.overlay = Some(overlay);
    }

    /// Forward a window event to egui; true when egui consumed it.
    pub fn handle_event(&mut self, event: &winit::event::WindowEvent) -> bool {
        self.egui_state.on_window_event(&self.window, event).consumed
    }

    fn draw_overlay(&mut self, encoder: &mut wgpu::CommandEncoder, view: &wgpu::TextureView) {
        let Some(overlay) = self.overlay.as_mut() else {
            return;
        };

        let raw_input = self.egui_state.take_egui_input(&self.window);
        let full_output = self.egui_ctx.run(raw_input, |ctx| overlay(ctx));

        self.egui_state
            .handle_platform_output(&self.window, full_output.platform_output);

        let tris = self
            .egui_ctx
            .tessellate(full_output.shapes, self.egui_ctx.pixels_per_point());
        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui_renderer
                .update_texture(&self.device, &self.queue, *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.surface_config.width, self.surface_config.height],
            pixels_per_point: self.window.scale_factor() as f32,
        };

        self.egui_renderer.update_buffers(
            &self.device,
            &self.queue,
            encoder,
            &tris,
            &screen_descriptor,
        );

        {
            let render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("egui Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            let mut render_pass = render_pass.forget_lifetime();
            self.egui_renderer
                .render(&mut render_pass, &tris, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum PipelineKind {
    Opaque,
    Blended,
    Lines,
}

impl RenderSurface for GpuRenderer {
    fn dimensions(&self) -> WindowDimensions {
        WindowDimensions::new(self.surface_config.width, self.surface_config.height)
    }

    fn resize(&mut self, dimensions: WindowDimensions) {
        if dimensions.is_empty() || self.disposed {
            return;
        }
        self.surface_config.width = dimensions.width;
        self.surface_config.height = dimensions.height;
        self.surface.configure(&self.device, &self.surface_config);
        self.depth_view = Self::create_depth_view(&self.device, dimensions.width, dimensions.height);
    }

    fn render(&mut self, viewport: &Viewport) -> std::result::Result<(), RenderError> {
        if self.disposed {
            return Err(RenderError::Disposed);
        }
        self.sync(viewport);

        let output = match self.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.surface_config);
                return Err(RenderError::SurfaceLost);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(wgpu::SurfaceError::Timeout) => return Err(RenderError::Timeout),
            Err(e) => return Err(RenderError::Other(e.to_string())),
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Viewport Encoder"),
            });

        let [r, g, b] = viewport.background.to_linear();
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: r as f64,
                            g: g as f64,
                            b: b as f64,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });
            render_pass.set_bind_group(0, &self.globals_bind_group, &[]);

            // Opaque surfaces first, then blended ones, then wireframes.
            render_pass.set_pipeline(&self.opaque_pipeline);
            for mesh in self.meshes.iter().filter(|m| !m.wireframe && !m.transparent) {
                render_pass.set_bind_group(1, &mesh.draw_bind_group, &[]);
                render_pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                render_pass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                render_pass.draw_indexed(0..mesh.index_count, 0, 0..1);
            }
            render_pass.set_pipeline(&self.blended_pipeline);
            for mesh in self.meshes.iter().filter(|m| !m.wireframe && m.transparent) {
                render_pass.set_bind_group(1, &mesh.draw_bind_group, &[]);
                render_pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                render_pass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                render_pass.draw_indexed(0..mesh.index_count, 0, 0..1);
            }
            render_pass.set_pipeline(&self.line_pipeline);
            for mesh in self.meshes.iter().filter(|m| m.wireframe) {
                render_pass.set_bind_group(1, &mesh.draw_bind_group, &[]);
                render_pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                render_pass.set_index_buffer(mesh.edge_buffer.slice(..), wgpu::IndexFormat::Uint32);
                render_pass.draw_indexed(0..mesh.edge_count, 0, 0..1);
            }
        }

        self.draw_overlay(&mut encoder, &view);

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }

    fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.overlay = None;
        self.meshes.clear();
        if let Err(e) = self.device.poll(wgpu::PollType::Wait {
            submission_index: None,
            timeout: None,
        }) {
            warn!("device poll during dispose failed: {}", e);
        }
        info!("renderer disposed");
    }
}
