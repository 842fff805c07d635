//! An explorable Mandelbrot set: pixel/plane mapping, escape-time evaluation,
//! colouring and parallel frame rendering behind a small [`Engine`] API.

pub mod colour;
pub mod complex;
pub mod config;
pub mod engine;
pub mod escape;
pub mod pixel;
pub mod render;
pub mod screen;
pub mod viewport;

pub use complex::Complex;
pub use config::EngineConfig;
pub use engine::{Engine, RenderState};
