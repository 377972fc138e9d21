//! Heliodon demo harness.
//!
//! Builds the shadow-study scene from a configuration and drives it either
//! in a window (winit render loop) or headless for a fixed frame count.

use anyhow::Result;
use clap::Parser;
use heliodon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowId};

#[derive(Parser)]
#[command(name = "heliodon", version, about = "Shadow-study scene playground")]
struct Cli {
    /// Motion mode: static, sphere-orbit, light-orbit, wobble
    #[arg(short, long, value_parser = parse_mode)]
    mode: Option<MotionMode>,

    /// Path to a JSON scene configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Background color override, hex (e.g. "#E7FAFF")
    #[arg(long, value_parser = parse_color)]
    clear_color: Option<Color>,

    /// Run without a window for a fixed number of frames
    #[arg(long)]
    headless: bool,

    /// Number of frames to run in headless mode
    #[arg(long, default_value_t = 300)]
    frames: u32,

    /// Window width in pixels
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Window height in pixels
    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_mode(s: &str) -> std::result::Result<MotionMode, ParseMotionModeError> {
    s.parse()
}

fn parse_color(s: &str) -> std::result::Result<Color, ParseColorError> {
    Color::from_hex_str(s)
}

/// Errors loading the scene configuration file.
#[derive(Error, Debug)]
enum ConfigError {
    /// Could not read the file.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a valid configuration.
    #[error("failed to parse config file: {0}")]
    Json(#[from] serde_json::Error),
}

fn load_config(path: Option<&Path>) -> std::result::Result<SceneConfig, ConfigError> {
    match path {
        None => Ok(SceneConfig::default()),
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&text)?)
        }
    }
}

/// Windowed application state.
struct App {
    config: SceneConfig,
    width: u32,
    height: u32,
    window: Option<Arc<Window>>,
    engine: Option<Engine>,
    built: Option<BuiltScene>,
    updater: FrameUpdater,
}

impl App {
    fn new(config: SceneConfig, width: u32, height: u32) -> Self {
        let updater = FrameUpdater::new(config.motion.clone());
        Self {
            config,
            width,
            height,
            window: None,
            engine: None,
            built: None,
            updater,
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(engine), Some(built)) = (self.engine.as_mut(), self.built.as_ref()) else {
            return;
        };

        self.updater.tick(&built.handles);

        match engine.render(&built.scene) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let (w, h) = (engine.width(), engine.height());
                engine.context.resize(w, h);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("out of GPU memory, exiting");
                event_loop.exit();
            }
            Err(e) => log::warn!("surface error: {e}"),
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title("heliodon")
            .with_inner_size(PhysicalSize::new(self.width, self.height));
        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let engine = match pollster::block_on(Engine::new(
            Arc::clone(&window),
            self.width,
            self.height,
        )) {
            Ok(engine) => engine,
            Err(e) => {
                log::error!("failed to initialize engine: {e}");
                event_loop.exit();
                return;
            }
        };

        self.built = Some(SceneBuilder::new(self.config.clone()).build());
        self.engine = Some(engine);
        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key: Key::Named(NamedKey::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(engine) = self.engine.as_mut() {
                    engine.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }
}

/// Run the scene without a window for a fixed number of frames.
fn run_headless(config: SceneConfig, frames: u32) {
    let built = SceneBuilder::new(config.clone()).build();
    let mut updater = FrameUpdater::new(config.motion.clone());

    for frame in 0..frames {
        updater.tick(&built.handles);

        if frame % 60 == 0 {
            if let (Ok(sphere), Ok(sun)) = (built.handles.sphere.read(), built.handles.sun.read()) {
                log::info!(
                    "frame {frame}: counter {:.3}, sphere {:?}, sun direction {:?}",
                    updater.counter(),
                    sphere.position,
                    sun.direction
                );
            }
        }
    }

    log::info!("finished {frames} frames, final counter {:.3}", updater.counter());
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if cli.verbose { "debug" } else { "info" }),
    )
    .init();

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(mode) = cli.mode {
        config.motion.mode = mode;
    }
    if let Some(color) = cli.clear_color {
        config.clear_color = color;
    }

    log::info!("motion mode: {:?}", config.motion.mode);

    if cli.headless {
        run_headless(config, cli.frames);
        return Ok(());
    }

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);
    let mut app = App::new(config, cli.width, cli.height);
    event_loop.run_app(&mut app)?;

    Ok(())
}
