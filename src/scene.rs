use crate::mesh::{CubeGeometry, Material, Mesh};

/// Color of the default cube, 0x00ff00 in linear RGB.
pub const CUBE_COLOR: [f32; 3] = [0.0, 1.0, 0.0];

/// Root container of renderable objects.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    meshes: Vec<Mesh>,
}

impl Scene {
    pub fn new() -> Self {
        Self { meshes: Vec::new() }
    }

    pub fn add(&mut self, mesh: Mesh) {
        self.meshes.push(mesh);
    }

    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    pub fn meshes_mut(&mut self) -> &mut [Mesh] {
        &mut self.meshes
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }
}

/// Creates the default scene: a single green unit cube at the origin.
pub fn create_default_scene() -> Scene {
    let mut scene = Scene::new();

    let cube = Mesh::new(CubeGeometry, Material::new(CUBE_COLOR));
    scene.add(cube);

    scene
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scene_has_one_mesh() {
        let scene = create_default_scene();
        assert_eq!(scene.len(), 1);
        assert!(!scene.is_empty());
    }

    #[test]
    fn default_cube_starts_at_rest() {
        let scene = create_default_scene();
        let cube = &scene.meshes()[0];

        assert_eq!(cube.rotation, glam::Vec3::ZERO);
        assert_eq!(cube.position, glam::Vec3::ZERO);
        assert_eq!(cube.material().color, CUBE_COLOR);
    }
}
