use anyhow::{Result, anyhow};
use wgpu::{
    Backends, Color, CommandEncoderDescriptor, Device, DeviceDescriptor, Instance,
    InstanceDescriptor, LoadOp, Operations, Queue, RenderPassColorAttachment,
    RenderPassDescriptor, RequestAdapterOptions, StoreOp, Surface, SurfaceConfiguration,
    SurfaceError, SurfaceTarget, TextureUsages, TextureViewDescriptor,
};

use crate::{disc::Disc, pipelines::disc::DiscPipeline};

/// GPU context plus the fixed disc pipeline. Everything here is built once;
/// the only mutation after construction is surface reconfiguration.
pub(crate) struct Render {
    surface: Surface<'static>,
    device: Device,
    queue: Queue,
    config: SurfaceConfiguration,
    disc_pipeline: DiscPipeline,
}

impl Render {
    pub(crate) async fn new(
        target: impl Into<SurfaceTarget<'static>>,
        width: u32,
        height: u32,
    ) -> Result<Self> {
        let instance = Instance::new(&InstanceDescriptor {
            backends: Backends::default(),
            ..Default::default()
        });

        let surface = instance.create_surface(target)?;

        let adapter = instance
            .request_adapter(&RequestAdapterOptions {
                compatible_surface: Some(&surface),
                ..Default::default()
            })
            .await?;

        log::info!("rendering with {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(&DeviceDescriptor {
                label: Some("Device Descriptor"),
                ..Default::default()
            })
            .await?;

        let surface_capabilities = surface.get_capabilities(&adapter);

        let surface_format = surface_capabilities
            .formats
            .iter()
            .find(|format| format.is_srgb())
            .or(surface_capabilities.formats.first())
            .copied()
            .ok_or_else(|| anyhow!("Surface is incompatible with the adapter"))?;

        let config = SurfaceConfiguration {
            usage: TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width,
            height,
            present_mode: surface_capabilities
                .present_modes
                .first()
                .copied()
                .ok_or_else(|| anyhow!("Surface is incompatible with the adapter"))?,
            alpha_mode: surface_capabilities
                .alpha_modes
                .first()
                .copied()
                .ok_or_else(|| anyhow!("No supported alpha modes found"))?,
            view_formats: Vec::new(),
            desired_maximum_frame_latency: 2,
        };

        surface.configure(&device, &config);

        let disc = Disc::new();
        log::info!(
            "disc geometry: {} vertices, drawing {}",
            disc.vertices().len(),
            disc.strip_vertex_count()
        );

        let disc_pipeline = DiscPipeline::new(&disc, config.format, &device);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            disc_pipeline,
        })
    }

    pub(crate) fn resize(&mut self, new_width: u32, new_height: u32) {
        if new_height > 0 && new_width > 0 {
            self.config.width = new_width;
            self.config.height = new_height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    pub(crate) fn render(&mut self) -> Result<()> {
        let surface_texture = match self.surface.get_current_texture() {
            Ok(surface_texture) => surface_texture,
            Err(SurfaceError::Lost | SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                log::debug!("surface lost, skipping frame");
                return Ok(());
            }
            Err(SurfaceError::Timeout | SurfaceError::Other) => {
                log::debug!("no drawable surface, skipping frame");
                return Ok(());
            }
            Err(err @ SurfaceError::OutOfMemory) => return Err(err.into()),
        };

        let texture_view = surface_texture.texture.create_view(&TextureViewDescriptor {
            label: Some("Texture View Descriptor"),
            ..Default::default()
        });

        let mut encoder = self
            .device
            .create_command_encoder(&CommandEncoderDescriptor {
                label: Some("Command Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&RenderPassDescriptor {
                color_attachments: &[Some(RenderPassColorAttachment {
                    view: &texture_view,
                    ops: Operations {
                        load: LoadOp::Clear(Color {
                            r: 0.0,
                            g: 0.0,
                            b: 0.0,
                            a: 1.0,
                        }),
                        store: StoreOp::Store,
                    },
                    resolve_target: None,
                    depth_slice: None,
                })],
                label: Some("Render Pass"),
                ..Default::default()
            });

            self.disc_pipeline.set_render_pass(&mut render_pass);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        surface_texture.present();

        Ok(())
    }
}
