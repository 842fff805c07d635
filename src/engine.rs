//! The explorable fractal view: viewport, cursor, pixel grid and render state.

use std::fmt::Write;

use log::{debug, trace};

use crate::{
    complex::Complex,
    config::EngineConfig,
    pixel::{Pixel, PixelGrid},
    render::{self, FrameRenderer},
    screen,
    viewport::Viewport,
};

/// Whether the pixel grid needs recomputing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderState {
    /// The viewport changed since the grid was last computed.
    Calculating,
    /// The grid matches the viewport and can be redisplayed as is.
    Displaying,
}

pub struct Engine {
    screen_size: screen::Size,
    viewport: Viewport,
    cursor: Complex,
    state: RenderState,
    grid: PixelGrid,
    renderer: FrameRenderer,
}

impl Engine {
    /// An engine with the default configuration.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_config(width, height, EngineConfig::default())
    }

    pub fn with_config(width: u32, height: u32, config: EngineConfig) -> Self {
        let screen_size = screen::Size::new(width, height);
        debug!("creating {}x{} engine with {:?}", width, height, config);

        Self {
            screen_size,
            viewport: Viewport::new(screen_size, config.base_extent, config.zoom_factor),
            cursor: Complex::ZERO,
            state: RenderState::Calculating,
            grid: PixelGrid::new(screen_size),
            renderer: FrameRenderer::new(
                render::worker_count(config.workers),
                config.max_iterations,
            ),
        }
    }

    /// Recompute the grid if the viewport changed. Returns whether it did.
    pub fn render_frame(&mut self) -> bool {
        match self.state {
            RenderState::Displaying => false,
            RenderState::Calculating => {
                self.renderer.render(&self.viewport, &mut self.grid);
                self.state = RenderState::Displaying;
                true
            }
        }
    }

    pub fn zoom_in(&mut self) {
        self.viewport.zoom_in();
        self.invalidate();
    }

    pub fn zoom_out(&mut self) {
        self.viewport.zoom_out();
        self.invalidate();
    }

    /// Center the view on the plane point under pixel `(px, py)`.
    pub fn set_center(&mut self, px: i32, py: i32) {
        let center = self.viewport.pixel_to_plane(self.screen_size, px, py);
        self.viewport.set_center(center);
        self.invalidate();
    }

    /// Record the plane point under the pointer. Does not invalidate the frame.
    pub fn set_cursor(&mut self, px: i32, py: i32) {
        self.cursor = self.viewport.pixel_to_plane(self.screen_size, px, py);
    }

    /// HUD text: title, center, cursor and usage hints, one per line.
    pub fn status_text(&self) -> String {
        let mut text = String::new();
        // Writing to a `String` cannot fail.
        let _ = writeln!(text, "Mandelbrot Set");
        let _ = writeln!(text, "Center: {}", self.viewport.center);
        let _ = writeln!(text, "Cursor: {}", self.cursor);
        let _ = writeln!(text, "Left-click to Zoom in");
        let _ = writeln!(text, "Right-click to Zoom out");
        text
    }

    pub fn pixels(&self) -> &[Pixel] {
        self.grid.pixels()
    }

    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    pub fn state(&self) -> RenderState {
        self.state
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn cursor(&self) -> Complex {
        self.cursor
    }

    pub fn screen_size(&self) -> screen::Size {
        self.screen_size
    }

    pub fn workers(&self) -> usize {
        self.renderer.workers()
    }

    pub fn max_iterations(&self) -> u32 {
        self.renderer.max_iterations()
    }

    fn invalidate(&mut self) {
        trace!("frame invalidated");
        self.state = RenderState::Calculating;
    }
}
