use crate::camera::Camera;
use crate::easing::EasingFunction;
use crate::frame::FrameInfo;
use crate::scene::{create_default_scene, Scene};
use crate::tween::{Repeat, Tween};

/// Per-tick rotation increment, in radians, on each spin axis.
pub const ROTATION_STEP: f32 = 0.01;
/// Where the position tween drives the cube's x coordinate.
pub const TWEEN_TARGET_X: f32 = 2.0;
/// Length of one tween leg in seconds.
pub const TWEEN_DURATION: f32 = 2.0;

/// Camera placement and projection for the default scene.
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_Z: f32 = 5.0;

/// Anything that can draw a scene from a camera's viewpoint.
///
/// The windowed binary plugs the wgpu renderer in here; tests plug in a
/// counting mock so the loop can run without a display.
pub trait DrawScene {
    fn draw(&mut self, scene: &Scene, camera: &Camera) -> Result<(), Box<dyn std::error::Error>>;
}

/// Application context: the scene graph, the camera, the position tween and
/// the tick counter, constructed once at startup and handed to the frame
/// callback. The only writer of mesh rotation and position.
pub struct SceneApp {
    scene: Scene,
    camera: Camera,
    tween: Tween,
    ticks: u64,
}

impl SceneApp {
    /// Build the default scene for a viewport with the given aspect ratio.
    /// The aspect is baked into the camera and never updated afterwards.
    pub fn new(aspect: f32) -> Self {
        let scene = create_default_scene();

        let mut camera = Camera::new(CAMERA_FOV_DEGREES, aspect, CAMERA_NEAR, CAMERA_FAR);
        camera.position.z = CAMERA_Z;

        let initial_x = scene.meshes().first().map_or(0.0, |m| m.position.x);
        let tween = Tween::new(initial_x, TWEEN_TARGET_X, TWEEN_DURATION)
            .with_easing(EasingFunction::QuadraticInOut)
            .with_yoyo(true)
            .with_repeat(Repeat::Infinite);

        Self {
            scene,
            camera,
            tween,
            ticks: 0,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Advance the animation by one frame.
    ///
    /// Rotation moves a fixed step per tick; the tween moves by the frame's
    /// wall-clock delta. Both mutations go through this single path.
    pub fn tick(&mut self, frame: &FrameInfo) {
        let x = self.tween.advance(frame.delta);

        if let Some(cube) = self.scene.meshes_mut().first_mut() {
            cube.rotation.x += ROTATION_STEP;
            cube.rotation.y += ROTATION_STEP;
            cube.position.x = x;
        }

        self.ticks += 1;
    }

    /// Tick once per frame from the given clock and draw after every tick.
    /// Returns when the clock runs out or the target fails.
    pub fn run_frames<D: DrawScene>(
        &mut self,
        frames: impl Iterator<Item = FrameInfo>,
        target: &mut D,
    ) -> Result<(), Box<dyn std::error::Error>> {
        for frame in frames {
            self.tick(&frame);
            target.draw(&self.scene, &self.camera)?;
        }
        Ok(())
    }
}
