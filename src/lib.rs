pub mod app;
pub mod camera;
pub mod cli;
pub mod easing;
pub mod frame;
pub mod mesh;
pub mod renderer;
pub mod scene;
pub mod tween;

pub use app::{DrawScene, SceneApp, ROTATION_STEP, TWEEN_DURATION, TWEEN_TARGET_X};
pub use scene::create_default_scene;
