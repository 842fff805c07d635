/*!
Parallel frame computation.

The pixel grid's rows are dealt out to `W` workers by stride: worker `t` owns
rows `t, t + W, t + 2W, ...`. Each worker receives its rows as `&mut` slices,
so row ownership is disjoint by construction and the grid needs no locking.

Workers run as tasks on a persistent [`rayon::ThreadPool`] of `W` threads; the
frame is complete when the enclosing [`rayon::scope`] returns.
*/

use std::time::Instant;

use log::{debug, info, trace, warn};

use crate::{
    colour,
    escape,
    pixel::{Pixel, PixelGrid},
    screen,
    viewport::Viewport,
};

/// Worker count used when hardware parallelism cannot be determined.
pub const FALLBACK_WORKERS: usize = 4;

/// Resolve the number of workers per frame.
///
/// An explicit non-zero request wins; otherwise the detected hardware
/// parallelism is used, falling back to [`FALLBACK_WORKERS`].
pub fn worker_count(requested: Option<usize>) -> usize {
    match requested {
        Some(workers) if workers > 0 => workers,
        _ => match num_cpus::get() {
            0 => FALLBACK_WORKERS,
            detected => detected,
        },
    }
}

/// The rows owned by each worker, as `(y, row)` pairs.
type Band<'a> = Vec<(u32, &'a mut [Pixel])>;

/// Deal the grid's rows out to `workers` bands by stride.
fn stride_bands(grid: &mut PixelGrid, workers: usize) -> Vec<Band<'_>> {
    let mut bands: Vec<Band> = (0..workers).map(|_| Vec::new()).collect();
    for (y, row) in grid.rows_mut().enumerate() {
        bands[y % workers].push((y as u32, row));
    }
    bands
}

/// Run one task per band on the current rayon pool and wait for all of them.
fn render_bands(
    bands: Vec<Band<'_>>,
    size: screen::Size,
    viewport: &Viewport,
    max_iterations: u32,
) {
    rayon::scope(|scope| {
        for (worker, band) in bands.into_iter().enumerate() {
            scope.spawn(move |_| {
                trace!("worker {} rendering {} rows", worker, band.len());
                for (y, row) in band {
                    for (x, pixel) in row.iter_mut().enumerate() {
                        let x = x as u32;
                        let c = viewport.pixel_to_plane(size, x as i32, y as i32);
                        let iterations = escape::count_iterations(c, max_iterations);
                        pixel.set(x, y, colour::map_colour(iterations, max_iterations));
                    }
                }
            });
        }
    });
}

pub struct FrameRenderer {
    workers: usize,
    max_iterations: u32,
    pool: Option<rayon::ThreadPool>,
}

impl FrameRenderer {
    pub fn new(workers: usize, max_iterations: u32) -> Self {
        let workers = workers.max(1);
        debug!("using {} render workers", workers);

        let pool = match rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|index| format!("render-worker-{}", index))
            .build()
        {
            Ok(pool) => Some(pool),
            Err(err) => {
                warn!("failed to build render pool, using the global pool: {}", err);
                None
            }
        };

        Self {
            workers,
            max_iterations,
            pool,
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Compute every pixel of `grid` for `viewport`. Blocks until all workers finish.
    pub fn render(&self, viewport: &Viewport, grid: &mut PixelGrid) {
        trace!("begin render");
        let start = Instant::now();

        let size = grid.size();
        let max_iterations = self.max_iterations;
        let bands = stride_bands(grid, self.workers);

        match &self.pool {
            Some(pool) => pool.install(|| render_bands(bands, size, viewport, max_iterations)),
            None => render_bands(bands, size, viewport, max_iterations),
        }

        info!(
            "rendered {}x{} frame with {} workers in {:?}",
            size.width,
            size.height,
            self.workers,
            start.elapsed()
        );
        trace!("end render");
    }
}
