use clap::Parser;
use log::{debug, error, info, warn};
use winit::{
    dpi::{PhysicalPosition, PhysicalSize},
    event::{ElementState, Event, KeyboardInput, MouseButton, VirtualKeyCode, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

use mandelbrot_explorer::{Engine, EngineConfig};

mod display;
mod gpu;

use display::Display;

/// Explore the Mandelbrot set. Left-click zooms in, right-click zooms out.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Window width in pixels. Defaults to the monitor's width
    #[arg(long)]
    width: Option<u32>,
    /// Window height in pixels. Defaults to the monitor's height
    #[arg(long)]
    height: Option<u32>,
    /// Render worker threads. Defaults to the available hardware parallelism
    #[arg(short, long)]
    workers: Option<usize>,
    /// Iteration limit for the escape-time test
    #[arg(short, long, default_value_t = mandelbrot_explorer::config::DEFAULT_MAX_ITERATIONS)]
    max_iterations: u32,
}

/// The first three status lines, for the window title.
fn title(engine: &Engine) -> String {
    engine
        .status_text()
        .lines()
        .take(3)
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Map a window position to a grid pixel; the surface may not match the grid.
fn to_grid(
    position: PhysicalPosition<f64>,
    surface: PhysicalSize<u32>,
    engine: &Engine,
) -> (i32, i32) {
    let grid = engine.screen_size();
    let x = position.x * grid.width as f64 / surface.width.max(1) as f64;
    let y = position.y * grid.height as f64 / surface.height.max(1) as f64;
    (x as i32, y as i32)
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let event_loop = EventLoop::new();

    let monitor_size = event_loop
        .primary_monitor()
        .map(|monitor| monitor.size())
        .unwrap_or_else(|| PhysicalSize::new(1280, 720));
    let requested_size = PhysicalSize::new(
        args.width.unwrap_or(monitor_size.width),
        args.height.unwrap_or(monitor_size.height),
    );

    let window = WindowBuilder::new()
        .with_title("Mandelbrot")
        .with_inner_size(requested_size)
        .build(&event_loop)
        .expect("failed to create window");

    let size = window.inner_size();
    let mut engine = Engine::with_config(
        size.width.max(1),
        size.height.max(1),
        EngineConfig {
            max_iterations: args.max_iterations,
            workers: args.workers,
            ..EngineConfig::default()
        },
    );
    info!(
        "exploring at {}x{} with {} workers",
        engine.screen_size().width,
        engine.screen_size().height,
        engine.workers()
    );

    let mut display = Display::new(&window, engine.screen_size(), engine.pixels());
    let mut cursor = PhysicalPosition::new(0.0, 0.0);
    let mut status = String::new();

    event_loop.run(move |event, _, control_flow| {
        control_flow.set_wait();

        match event {
            Event::WindowEvent { window_id, event } if window_id == window.id() => match event {
                WindowEvent::CloseRequested
                | WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            state: ElementState::Pressed,
                            virtual_keycode: Some(VirtualKeyCode::Escape),
                            ..
                        },
                    ..
                } => {
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::Resized(size) => {
                    display.resize(size);
                    window.request_redraw();
                }
                WindowEvent::ScaleFactorChanged { new_inner_size, .. } => {
                    display.resize(*new_inner_size);
                    window.request_redraw();
                }
                WindowEvent::CursorMoved { position, .. } => {
                    cursor = position;
                    let (x, y) = to_grid(cursor, display.size(), &engine);
                    engine.set_cursor(x, y);
                    window.request_redraw();
                }
                WindowEvent::MouseInput {
                    state: ElementState::Pressed,
                    button,
                    ..
                } => {
                    let (x, y) = to_grid(cursor, display.size(), &engine);
                    match button {
                        MouseButton::Left => {
                            engine.zoom_in();
                            engine.set_center(x, y);
                        }
                        MouseButton::Right => {
                            engine.zoom_out();
                            engine.set_center(x, y);
                        }
                        _ => {}
                    }
                    window.request_redraw();
                }
                _ => {}
            },
            Event::RedrawRequested(window_id) if window_id == window.id() => {
                if engine.render_frame() {
                    display.upload(engine.pixels());
                }

                let text = engine.status_text();
                if text != status {
                    debug!("{}", text.trim_end());
                    window.set_title(&title(&engine));
                    status = text;
                }

                match display.present() {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        error!("out of GPU memory");
                        *control_flow = ControlFlow::Exit;
                    }
                    Err(err) => warn!("failed to present frame: {:?}", err),
                }
            }
            _ => {}
        }
    });
}
