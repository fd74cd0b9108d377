use wgpu::{Buffer, VertexBufferLayout};

pub(crate) struct VertexBufferData {
    pub(crate) vertex_buffer: Buffer,
    pub(crate) vertex_buffer_layout: VertexBufferLayout<'static>,
    /// Vertex count handed to the draw call.
    pub(crate) vertex_count: u32,
}
