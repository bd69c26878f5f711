use glam::{EulerRot, Mat4, Vec3};

/// Vertex data for the GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }

    const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { position: [x, y, z] }
    }
}

/// Per-mesh uniform buffer data for the GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshUniform {
    pub mvp: [[f32; 4]; 4],
    pub color: [f32; 3],
    pub _pad: f32,
}

impl MeshUniform {
    pub fn new(mvp: Mat4, color: [f32; 3]) -> Self {
        Self {
            mvp: mvp.to_cols_array_2d(),
            color,
            _pad: 0.0,
        }
    }
}

/// Unit cube centered on the origin, 1x1x1.
#[derive(Debug, Clone, Copy, Default)]
pub struct CubeGeometry;

impl CubeGeometry {
    // Corners: 0-3 front (+z), 4-7 back (-z), bottom before top on each face
    const VERTICES: [Vertex; 8] = [
        Vertex::new(-0.5, -0.5, 0.5),
        Vertex::new(0.5, -0.5, 0.5),
        Vertex::new(0.5, 0.5, 0.5),
        Vertex::new(-0.5, 0.5, 0.5),
        Vertex::new(-0.5, -0.5, -0.5),
        Vertex::new(0.5, -0.5, -0.5),
        Vertex::new(0.5, 0.5, -0.5),
        Vertex::new(-0.5, 0.5, -0.5),
    ];

    // Counter-clockwise when viewed from outside the cube
    const INDICES: [u16; 36] = [
        0, 1, 2, 0, 2, 3, // front
        5, 4, 7, 5, 7, 6, // back
        1, 5, 6, 1, 6, 2, // right
        4, 0, 3, 4, 3, 7, // left
        3, 2, 6, 3, 6, 7, // top
        4, 5, 1, 4, 1, 0, // bottom
    ];

    pub fn vertices(&self) -> &'static [Vertex] {
        &Self::VERTICES
    }

    pub fn indices(&self) -> &'static [u16] {
        &Self::INDICES
    }
}

/// Flat, unlit, fixed-color material.
#[derive(Debug, Clone, Copy)]
pub struct Material {
    pub color: [f32; 3],
}

impl Material {
    pub const fn new(color: [f32; 3]) -> Self {
        Self { color }
    }
}

/// A renderable object: immutable geometry and material, mutable transform.
#[derive(Debug, Clone)]
pub struct Mesh {
    geometry: CubeGeometry,
    material: Material,
    pub rotation: Vec3,
    pub position: Vec3,
}

impl Mesh {
    pub fn new(geometry: CubeGeometry, material: Material) -> Self {
        Self {
            geometry,
            material,
            rotation: Vec3::ZERO,
            position: Vec3::ZERO,
        }
    }

    pub fn geometry(&self) -> &CubeGeometry {
        &self.geometry
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// World transform: translation applied after an XYZ euler rotation.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_euler(
                EulerRot::XYZ,
                self.rotation.x,
                self.rotation.y,
                self.rotation.z,
            )
    }
}
