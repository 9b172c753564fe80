use crate::core::geometry::GeometryTemplate;
use wgpu::util::DeviceExt;

/// One geometry template uploaded to the GPU.
pub(crate) struct GpuMesh {
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) index_buffer: wgpu::Buffer,
    pub(crate) index_count: u32,
}

pub(crate) const VERTEX_LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
    array_stride: (std::mem::size_of::<f32>() * 3) as u64,
    step_mode: wgpu::VertexStepMode::Vertex,
    attributes: &[wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x3,
        offset: 0,
        shader_location: 0,
    }],
};

pub(crate) fn upload_templates(
    device: &wgpu::Device,
    templates: &[GeometryTemplate],
) -> Vec<GpuMesh> {
    templates
        .iter()
        .map(|t| {
            let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(t.name),
                contents: bytemuck::cast_slice(&t.mesh.positions),
                usage: wgpu::BufferUsages::VERTEX,
            });
            let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(t.name),
                contents: bytemuck::cast_slice(&t.mesh.indices),
                usage: wgpu::BufferUsages::INDEX,
            });
            GpuMesh {
                vertex_buffer,
                index_buffer,
                index_count: t.mesh.indices.len() as u32,
            }
        })
        .collect()
}
