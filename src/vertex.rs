use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
pub(crate) struct Vertex {
    pub(crate) position: [f32; 4],
    pub(crate) color: [f32; 4],
}

impl Vertex {
    pub(crate) fn new(position: [f32; 4], color: [f32; 4]) -> Self {
        Self { position, color }
    }
}
