use std::sync::Arc;

use anyhow::{anyhow, Context};
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use cube_scene::app::{DrawScene, SceneApp};
use cube_scene::camera::Camera;
use cube_scene::cli::Cli;
use cube_scene::frame::{FixedFrames, WallClockFrames};
use cube_scene::renderer::Renderer;
use cube_scene::scene::Scene;

const FPS_UPDATE_INTERVAL: f32 = 1.0;
const HEADLESS_HZ: f32 = 60.0;

struct App {
    cli: Cli,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    state: Option<SceneApp>,
    frames: WallClockFrames,
    frame_count: u32,
    fps_update_timer: f32,
}

impl App {
    fn new(cli: Cli) -> Self {
        Self {
            cli,
            window: None,
            renderer: None,
            state: None,
            frames: WallClockFrames::new(),
            frame_count: 0,
            fps_update_timer: 0.0,
        }
    }

    fn update_fps(&mut self, delta: f32) {
        self.frame_count += 1;
        self.fps_update_timer += delta;

        if self.fps_update_timer >= FPS_UPDATE_INTERVAL {
            let fps = self.frame_count as f32 / self.fps_update_timer;
            println!("FPS: {:.1}", fps);
            self.frame_count = 0;
            self.fps_update_timer = 0.0;
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("Cube Scene")
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        self.cli.width,
                        self.cli.height,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    eprintln!("Failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            // Aspect is fixed from the startup size; later resizes only
            // reconfigure the surface.
            let size = window.inner_size();
            let aspect = size.width as f32 / size.height.max(1) as f32;
            let state = SceneApp::new(aspect);

            let renderer = match pollster::block_on(Renderer::new(window.clone(), state.scene())) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Failed to initialize renderer: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            self.window = Some(window);
            self.renderer = Some(renderer);
            self.state = Some(state);
            self.frames = WallClockFrames::new();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size);
                }
            }
            WindowEvent::RedrawRequested => {
                let Some(frame) = self.frames.next() else {
                    return;
                };

                self.update_fps(frame.delta);

                if let Some(state) = &mut self.state {
                    state.tick(&frame);
                }

                if let (Some(renderer), Some(state), Some(window)) =
                    (&mut self.renderer, &self.state, &self.window)
                {
                    match renderer.render(state.scene(), state.camera()) {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            renderer.resize(window.inner_size());
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            eprintln!("Render error: out of GPU memory");
                            event_loop.exit();
                        }
                        Err(e) => eprintln!("Render error: {}", e),
                    }
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Draw target for headless runs: accepts every frame and renders nothing.
struct NullDraw;

impl DrawScene for NullDraw {
    fn draw(&mut self, _scene: &Scene, _camera: &Camera) -> Result<(), Box<dyn std::error::Error>> {
        Ok(())
    }
}

fn run_headless(frame_count: u64, cli: &Cli) -> anyhow::Result<()> {
    let aspect = cli.width as f32 / cli.height.max(1) as f32;
    let mut state = SceneApp::new(aspect);

    state
        .run_frames(FixedFrames::new(frame_count, HEADLESS_HZ), &mut NullDraw)
        .map_err(|e| anyhow!("simulation failed: {}", e))?;

    let cube = state
        .scene()
        .meshes()
        .first()
        .context("scene lost its mesh")?;
    println!(
        "Simulated {} frames at {} Hz",
        state.ticks(),
        HEADLESS_HZ
    );
    println!(
        "rotation: ({:.4}, {:.4})  position.x: {:.4}",
        cube.rotation.x, cube.rotation.y, cube.position.x
    );

    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if let Some(frame_count) = cli.frames {
        return run_headless(frame_count, &cli);
    }

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    let mut app = App::new(cli);

    println!("Cube scene - Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
