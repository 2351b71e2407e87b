use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use classroom_viewer::animation::AnimationDriver;
use classroom_viewer::camera::{OrbitController, OrbitState};
use classroom_viewer::cli::Cli;
use classroom_viewer::config::LayoutConfig;
use classroom_viewer::frame::FrameClock;
use classroom_viewer::input::PointerInput;
use classroom_viewer::renderer::SceneRenderer;
use classroom_viewer::scenes::build_classroom;
use classroom_viewer::types::Scene;

const FPS_UPDATE_INTERVAL: f32 = 1.0;

struct App {
    cli: Cli,
    window: Option<Arc<Window>>,
    renderer: Option<SceneRenderer>,
    scene: Scene,
    driver: AnimationDriver,
    orbit: OrbitController,
    input: PointerInput,
    clock: FrameClock,
    frame_count: u32,
    fps: f32,
    fps_update_timer: f32,
}

impl App {
    fn new(cli: Cli, scene: Scene, driver: AnimationDriver, orbit: OrbitController) -> Self {
        Self {
            cli,
            window: None,
            renderer: None,
            scene,
            driver,
            orbit,
            input: PointerInput::new(),
            clock: FrameClock::new(),
            frame_count: 0,
            fps: 0.0,
            fps_update_timer: 0.0,
        }
    }

    fn update_fps(&mut self, delta: f32) {
        self.frame_count += 1;
        self.fps_update_timer += delta;

        if self.fps_update_timer >= FPS_UPDATE_INTERVAL {
            self.fps = self.frame_count as f32 / self.fps_update_timer;
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
                    .with_title("Classroom Scene")
                    .with_inner_size(winit::dpi::LogicalSize::new(self.cli.width, self.cli.height)),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    log::error!("failed to create window: {e}");
                    event_loop.exit();
                    return;
                }
            };

            let renderer = match pollster::block_on(SceneRenderer::new(
                window.clone(),
                &self.scene,
                !self.cli.no_ui,
            )) {
                Ok(r) => r,
                Err(e) => {
                    log::error!("failed to initialize renderer: {e}");
                    event_loop.exit();
                    return;
                }
            };

            self.window = Some(window);
            self.renderer = Some(renderer);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui handle the event first
        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            if renderer.handle_event(window, &event) {
                return;
            }
        }

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
            WindowEvent::Resized(new_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(new_size);
                }
            }
            WindowEvent::RedrawRequested => {
                let frame = self.clock.tick();
                self.update_fps(frame.delta);
                self.driver.run(frame.time, &mut self.scene.props);

                if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
                    match renderer.render(&self.orbit, &self.scene, window, self.fps, frame.time) {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            let size = window.inner_size();
                            renderer.resize(size);
                        }
                        Err(e) => log::error!("render error: {e}"),
                    }
                }
            }
            other => {
                self.input.process_event(&other, &mut self.orbit);
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut config = match &cli.layout {
        Some(path) => LayoutConfig::load(path)?,
        None => LayoutConfig::default(),
    };
    if let Some(rows) = cli.rows {
        config.desk_rows = rows;
    }
    if let Some(cols) = cli.cols {
        config.desk_cols = cols;
    }

    let (scene, driver) = build_classroom(&config);
    let orbit = OrbitController::new(OrbitState::new(0.0, 0.0, config.initial_distance));

    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli, scene, driver, orbit);

    log::info!("Controls: drag to orbit, wheel to zoom, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
