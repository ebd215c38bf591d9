use std::collections::HashSet;
use std::time::{Duration, Instant};

use pixels::{PixelsBuilder, SurfaceTexture};
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use crate::error::AppError;
use crate::graphics::{Renderer2d, draw_on};
use crate::pixels_surface::PixelsSurface;
use crate::surface::{Surface, SurfaceSize};

pub struct AppConfig {
    pub title: String,
    pub size: SurfaceSize,
    pub target_fps: u32,
    pub vsync: bool,
}

/// Discrete key presses collected since the previous frame, in arrival order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputFrame {
    pub keys_pressed: Vec<VirtualKeyCode>,
}

/// Turns raw key events into press edges.
///
/// The OS keeps sending `Pressed` while a key is held; only the first one counts until the key
/// is released again.
#[derive(Debug, Default)]
pub struct KeyTracker {
    held: HashSet<VirtualKeyCode>,
}

impl KeyTracker {
    /// Returns `true` when this event is a fresh press.
    pub fn on_key(&mut self, key: VirtualKeyCode, state: ElementState) -> bool {
        match state {
            ElementState::Pressed => self.held.insert(key),
            ElementState::Released => {
                self.held.remove(&key);
                false
            }
        }
    }

    pub fn clear(&mut self) {
        self.held.clear();
    }
}

pub fn frame_interval(target_fps: u32) -> Duration {
    Duration::from_secs_f64(1.0 / f64::from(target_fps.max(1)))
}

pub trait GameApp {
    type State;

    fn init_state(&mut self) -> Self::State;

    /// One frame of simulation. `dt` is the measured wall-clock time since the previous frame.
    fn update_state(&mut self, state: &mut Self::State, input: &InputFrame, dt: Duration);

    fn render(&mut self, state: &Self::State, renderer: &mut dyn Renderer2d);
}

/// Opens the window and runs `game` until the window is closed.
///
/// Setup failures are returned. Once the loop is running, a failed resize or present is fatal:
/// it is logged and the process exits with code 1.
pub fn run_game<G>(config: AppConfig, mut game: G) -> Result<(), AppError>
where
    G: GameApp + 'static,
    G::State: 'static,
{
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(config.title.as_str())
        .with_inner_size(LogicalSize::new(config.size.width, config.size.height))
        .with_resizable(false)
        .build(&event_loop)?;

    let physical = window.inner_size();
    let surface_texture = SurfaceTexture::new(physical.width, physical.height, &window);
    let pixels = PixelsBuilder::new(config.size.width, config.size.height, surface_texture)
        .enable_vsync(config.vsync)
        .build()?;
    let mut surface = PixelsSurface::new(pixels, config.size);

    log::info!(
        "window ready: {}x{} logical, {}x{} physical, target {} fps",
        config.size.width,
        config.size.height,
        physical.width,
        physical.height,
        config.target_fps
    );

    let frame_interval = frame_interval(config.target_fps);
    let mut state = game.init_state();
    let mut keys = KeyTracker::default();
    let mut pending = InputFrame::default();
    let mut last_frame = Instant::now();
    let mut next_redraw = Instant::now();

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::WaitUntil(next_redraw);

        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    log::info!("close requested, exiting");
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::Focused(false) => {
                    keys.clear();
                }
                WindowEvent::Resized(size) => {
                    if let Err(err) = surface.resize_surface(size.width, size.height) {
                        log::error!("surface resize failed: {err}");
                        *control_flow = ControlFlow::ExitWithCode(1);
                    }
                }
                WindowEvent::ScaleFactorChanged { new_inner_size, .. } => {
                    if let Err(err) =
                        surface.resize_surface(new_inner_size.width, new_inner_size.height)
                    {
                        log::error!("surface resize failed: {err}");
                        *control_flow = ControlFlow::ExitWithCode(1);
                    }
                }
                WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            state: key_state,
                            virtual_keycode: Some(key),
                            ..
                        },
                    ..
                } => {
                    if keys.on_key(key, key_state) {
                        pending.keys_pressed.push(key);
                    }
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                let now = Instant::now();
                if now >= next_redraw {
                    next_redraw = now + frame_interval;
                    window.request_redraw();
                }
            }
            Event::RedrawRequested(_) => {
                let now = Instant::now();
                let dt = now.saturating_duration_since(last_frame);
                last_frame = now;

                let input = std::mem::take(&mut pending);
                game.update_state(&mut state, &input, dt);

                draw_on(&mut surface, |gfx| game.render(&state, gfx));
                if let Err(err) = surface.present() {
                    log::error!("present failed: {err}");
                    *control_flow = ControlFlow::ExitWithCode(1);
                }
            }
            _ => {}
        }
    })
}
