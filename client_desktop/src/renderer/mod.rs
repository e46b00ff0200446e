pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use std::sync::Arc;

use crate::camera::Camera;
use crate::mesh::{create_circle, create_rectangle, Mesh};
use crate::scene::Scene;
use resources::{GameBuffers, InstanceData};
use wgpu::*;
use winit::window::Window;

const CIRCLE_SEGMENTS: u16 = 32;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to create surface: {0}")]
    CreateSurface(#[from] CreateSurfaceError),
    #[error("no compatible graphics adapter found")]
    NoAdapter,
    #[error("surface reports no supported formats")]
    NoSurfaceFormat,
    #[error("failed to create device: {0}")]
    RequestDevice(#[from] RequestDeviceError),
    #[error("failed to acquire frame: {0}")]
    Surface(#[from] SurfaceError),
}

pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,
    pub size: (u32, u32),

    pub main_pipeline: RenderPipeline,
    pub camera_bind_group: BindGroup,

    pub buffers: GameBuffers,
    pub meshes: (Mesh, Mesh), // rect, circle

    // Last uploaded rectangles, to skip redundant uploads
    pub last_rects: Option<Vec<InstanceData>>,
    pub warned_overflow: bool,
}

impl Renderer {
    /// Set up the GPU for `window`, with the camera framing an arena of
    /// `arena_width` x `arena_height` units
    pub async fn new(
        window: Arc<Window>,
        arena_width: f32,
        arena_height: f32,
    ) -> Result<Self, RenderError> {
        let ctx = init::init_wgpu(window).await?;
        let camera = Camera::orthographic(arena_width, arena_height);

        let buffers = resources::create_buffers(&ctx.device, &camera);
        let shapes = pipeline::ShapePipeline::new(&ctx.device, ctx.config.format);

        let rect_mesh = create_rectangle(&ctx.device);
        let circle_mesh = create_circle(&ctx.device, CIRCLE_SEGMENTS);

        let camera_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &shapes.camera_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: buffers.camera.as_entire_binding(),
            }],
        });

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            surface_config: ctx.config,
            size: ctx.size,
            main_pipeline: shapes.pipeline,
            camera_bind_group,
            buffers,
            meshes: (rect_mesh, circle_mesh),
            last_rects: None,
            warned_overflow: false,
        })
    }

    /// Reconfigure the swapchain; zero-sized (minimized) windows are ignored
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.size = (width, height);
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface.configure(&self.device, &self.surface_config);
    }

    pub fn draw(&mut self, scene: &Scene) -> Result<(), RenderError> {
        draw::draw_frame(self, scene)
    }
}
