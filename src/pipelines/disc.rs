use wgpu::{
    BlendState, ColorTargetState, ColorWrites, Device, FragmentState, FrontFace,
    MultisampleState, PipelineCompilationOptions, PipelineLayoutDescriptor, PolygonMode,
    PrimitiveState, PrimitiveTopology, RenderPass, RenderPipeline, RenderPipelineDescriptor,
    TextureFormat, VertexState, include_wgsl,
};

use crate::{disc::Disc, utils::VertexBufferData};

pub(crate) struct DiscPipeline {
    vertex_buffer_data: VertexBufferData,
    pipeline: RenderPipeline,
}

impl DiscPipeline {
    pub(crate) fn new(disc: &Disc, texture_format: TextureFormat, device: &Device) -> Self {
        let shader_module = device.create_shader_module(include_wgsl!("disc.wgsl"));

        let layout = device.create_pipeline_layout(&PipelineLayoutDescriptor {
            label: Some("Disc Pipeline Layout"),
            ..Default::default()
        });

        let vertex_buffer_data = disc.create_vertex_buffer_data(device);

        let pipeline = device.create_render_pipeline(&RenderPipelineDescriptor {
            label: Some("Disc Pipeline"),
            vertex: VertexState {
                module: &shader_module,
                entry_point: Some("vs_main"),
                compilation_options: PipelineCompilationOptions::default(),
                buffers: &[vertex_buffer_data.vertex_buffer_layout.clone()],
            },
            fragment: Some(FragmentState {
                module: &shader_module,
                entry_point: Some("fs_main"),
                compilation_options: PipelineCompilationOptions::default(),
                targets: &[Some(ColorTargetState {
                    format: texture_format,
                    blend: Some(BlendState::REPLACE),
                    write_mask: ColorWrites::ALL,
                })],
            }),
            primitive: PrimitiveState {
                topology: PrimitiveTopology::TriangleStrip,
                front_face: FrontFace::Ccw,
                // strip triangles alternate winding
                cull_mode: None,
                polygon_mode: PolygonMode::Fill,
                ..Default::default()
            },
            depth_stencil: None,
            multiview: None,
            cache: None,
            multisample: MultisampleState::default(),
            layout: Some(&layout),
        });

        Self {
            vertex_buffer_data,
            pipeline,
        }
    }

    pub(crate) fn set_render_pass(&self, render_pass: &mut RenderPass<'_>) {
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_vertex_buffer(0, self.vertex_buffer_data.vertex_buffer.slice(..));
        render_pass.draw(0..self.vertex_buffer_data.vertex_count, 0..1);
    }
}
