//! GPU buffer management for the viewer.
//!
//! The pipeline rebuilds its [`MeshBuffers`] every tick, so these wrappers
//! are created fresh each frame and dropped with it, with no buffer reuse.

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use lathe::mesh::{MeshBuffers, MeshVertex};
use lathe::nalgebra::Point3;

/// Vertex buffer layout matching [`MeshVertex`] (position, normal,
/// texcoord).
pub fn mesh_vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<MeshVertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            // position
            wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x3,
            },
            // normal
            wgpu::VertexAttribute {
                offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                shader_location: 1,
                format: wgpu::VertexFormat::Float32x3,
            },
            // texcoord
            wgpu::VertexAttribute {
                offset: (std::mem::size_of::<[f32; 3]>() * 2) as wgpu::BufferAddress,
                shader_location: 2,
                format: wgpu::VertexFormat::Float32x2,
            },
        ],
    }
}

/// Solid mesh data uploaded to the GPU.
pub struct GpuMesh {
    /// Consolidated vertex buffer.
    pub vertex_buffer: wgpu::Buffer,
    /// Matching index buffer.
    pub index_buffer: wgpu::Buffer,
    /// Draw-call size, straight from the consolidator.
    pub num_indices: u32,
}

impl GpuMesh {
    /// Upload consolidated buffers; `None` when there is nothing to draw.
    pub fn from_buffers(device: &wgpu::Device, buffers: &MeshBuffers) -> Option<Self> {
        if buffers.is_empty() {
            return None;
        }

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Solid Vertex Buffer"),
            contents: bytemuck::cast_slice(&buffers.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Solid Index Buffer"),
            contents: bytemuck::cast_slice(&buffers.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        Some(Self {
            vertex_buffer,
            index_buffer,
            num_indices: buffers.index_count(),
        })
    }
}

/// Flat-colored vertex for the profile-editor overlay.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct OverlayVertex {
    /// Position in editor clip space.
    pub position: [f32; 3],
    /// Flat color.
    pub color: [f32; 3],
}

impl OverlayVertex {
    /// Vertex buffer layout for overlay pipelines.
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<OverlayVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
            ],
        }
    }
}

/// A polyline uploaded for the editor viewport.
pub struct OverlayStrip {
    /// Vertex buffer of [`OverlayVertex`] entries.
    pub vertex_buffer: wgpu::Buffer,
    /// Number of vertices in the strip.
    pub num_vertices: u32,
}

impl OverlayStrip {
    /// Upload a polyline with a flat color; `None` for an empty polyline.
    pub fn from_points(
        device: &wgpu::Device,
        points: &[Point3<f64>],
        color: [f32; 3],
    ) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let vertices: Vec<OverlayVertex> = points
            .iter()
            .map(|p| OverlayVertex {
                position: [p.x as f32, p.y as f32, p.z as f32],
                color,
            })
            .collect();

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Overlay Vertex Buffer"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        Some(Self {
            vertex_buffer,
            num_vertices: vertices.len() as u32,
        })
    }
}
