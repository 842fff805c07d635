/// Iteration limit used when none is configured.
pub const DEFAULT_MAX_ITERATIONS: u32 = 64;

/// Width of the visible plane region at zoom level 0.
pub const DEFAULT_BASE_EXTENT: f64 = 4.0;

/// Extent multiplier applied per zoom step.
pub const DEFAULT_ZOOM_FACTOR: f64 = 0.5;

/// Engine tuning knobs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EngineConfig {
    pub max_iterations: u32,
    pub base_extent: f64,
    /// Must lie in `(0, 1)` so that zooming in shrinks the extent.
    pub zoom_factor: f64,
    /// Worker threads per frame. `None` or `Some(0)` means "detect".
    pub workers: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            base_extent: DEFAULT_BASE_EXTENT,
            zoom_factor: DEFAULT_ZOOM_FACTOR,
            workers: None,
        }
    }
}
