use wgpu::{
    BufferUsages, Device, VertexAttribute, VertexBufferLayout, VertexStepMode,
    util::{BufferInitDescriptor, DeviceExt},
    vertex_attr_array,
};

use crate::{color::hsv_to_rgba, utils::VertexBufferData, vertex::Vertex};

/// Rim resolution: vertices generated per degree of arc.
const SAMPLES_PER_DEGREE: u32 = 2;

const SWEEP_DEGREES: u32 = 360;

const VERTEX_ATTRIBUTES: [VertexAttribute; 2] =
    vertex_attr_array![0 => Float32x4, 1 => Float32x4];

/// Triangle-strip approximation of a unit disc, hue-cycled around the rim
/// and blending toward a white center. Generated once at startup and
/// immutable afterwards.
pub(crate) struct Disc {
    vertices: Vec<Vertex>,
}

impl Disc {
    pub(crate) fn new() -> Self {
        Self {
            vertices: circle_vertices(SAMPLES_PER_DEGREE),
        }
    }

    pub(crate) fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Vertex count handed to the strip draw: half the entries, rounded down.
    pub(crate) fn strip_vertex_count(&self) -> u32 {
        self.vertices.len() as u32 / 2
    }

    pub(crate) fn create_vertex_buffer_data(&self, device: &Device) -> VertexBufferData {
        let vertex_buffer = device.create_buffer_init(&BufferInitDescriptor {
            label: Some("Disc Vertex Buffer"),
            contents: bytemuck::cast_slice(&self.vertices),
            usage: BufferUsages::VERTEX,
        });

        let vertex_buffer_layout = VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: VertexStepMode::Vertex,
            attributes: &VERTEX_ATTRIBUTES,
        };

        VertexBufferData {
            vertex_buffer,
            vertex_buffer_layout,
            vertex_count: self.strip_vertex_count(),
        }
    }
}

/// Rim vertices on the unit circle at `1 / samples_per_degree` degree
/// increments, one full hue cycle around the sweep, with a white origin
/// vertex appended after every second sample.
fn circle_vertices(samples_per_degree: u32) -> Vec<Vertex> {
    let steps = SWEEP_DEGREES * samples_per_degree;

    let origin = Vertex::new([0.0, 0.0, 0.0, 1.0], [1.0, 1.0, 1.0, 1.0]);

    let mut vertices = Vec::with_capacity((steps + 1 + steps / 2) as usize);

    for i in 0..=steps {
        let theta = (i as f32 / samples_per_degree as f32).to_radians();
        let hue = i as f32 / steps as f32;

        vertices.push(Vertex::new(
            [theta.cos(), theta.sin(), 0.0, 1.0],
            hsv_to_rgba(hue, 1.0, 1.0),
        ));

        if (i + 1) % 2 == 0 {
            vertices.push(origin);
        }
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-5;

    fn is_origin(vertex: &Vertex) -> bool {
        vertex.position == [0.0, 0.0, 0.0, 1.0] && vertex.color == [1.0, 1.0, 1.0, 1.0]
    }

    #[test]
    fn entry_counts_per_resolution() {
        // steps + 1 rim samples, one origin after every second of them
        assert_eq!(circle_vertices(1).len(), 361 + 180);
        assert_eq!(circle_vertices(2).len(), 721 + 360);
    }

    #[test]
    fn origin_follows_every_second_rim_sample() {
        let vertices = circle_vertices(SAMPLES_PER_DEGREE);

        for (index, vertex) in vertices.iter().enumerate() {
            assert_eq!(is_origin(vertex), index % 3 == 2, "entry {index}");
        }
    }

    #[test]
    fn rim_vertices_lie_on_the_unit_circle() {
        let vertices = circle_vertices(SAMPLES_PER_DEGREE);

        for vertex in vertices.iter().filter(|vertex| !is_origin(vertex)) {
            let [x, y, z, w] = vertex.position;

            assert!((x * x + y * y - 1.0).abs() < TOLERANCE);
            assert_eq!(z, 0.0);
            assert_eq!(w, 1.0);
        }
    }

    #[test]
    fn rim_hues_sweep_evenly_from_zero_to_one() {
        let vertices = circle_vertices(SAMPLES_PER_DEGREE);
        let rim: Vec<&Vertex> = vertices
            .iter()
            .filter(|vertex| !is_origin(vertex))
            .collect();

        let steps = (SWEEP_DEGREES * SAMPLES_PER_DEGREE) as usize;
        assert_eq!(rim.len(), steps + 1);

        for (sample, vertex) in rim.iter().enumerate() {
            let expected = hsv_to_rgba(sample as f32 / steps as f32, 1.0, 1.0);

            for (c, e) in vertex.color.iter().zip(expected.iter()) {
                assert!((c - e).abs() < TOLERANCE, "sample {sample}");
            }
        }

        // both ends of the sweep land on red
        for endpoint in [rim[0], rim[steps]] {
            for (c, e) in endpoint.color.iter().zip([1.0, 0.0, 0.0, 1.0].iter()) {
                assert!((c - e).abs() < TOLERANCE);
            }
        }
    }

    #[test]
    fn strip_draw_count_is_half_the_entries() {
        let disc = Disc::new();

        assert_eq!(disc.vertices().len(), 1081);
        assert_eq!(disc.strip_vertex_count(), 540);
    }
}
