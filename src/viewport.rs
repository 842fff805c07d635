//! The visible region of the complex plane and the pixel-to-plane mapping.

use log::debug;

use crate::{complex::Complex, screen};

/// Visible region of the complex plane.
///
/// `extent_imaginary / extent_real` always equals the screen's aspect ratio, so
/// pixels stay square at every zoom level.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub center: Complex,
    pub extent_real: f64,
    pub extent_imaginary: f64,
    pub zoom_level: i32,
    base_extent: f64,
    zoom_factor: f64,
    aspect_ratio: f64,
}

impl Viewport {
    /// The initial view: centered at the origin, zoom level 0.
    pub fn new(screen_size: screen::Size, base_extent: f64, zoom_factor: f64) -> Self {
        assert!(
            base_extent > 0.0 && base_extent.is_finite(),
            "base extent must be positive and finite, got {}",
            base_extent
        );
        assert!(
            zoom_factor > 0.0 && zoom_factor < 1.0,
            "zoom factor must lie in (0, 1), got {}",
            zoom_factor
        );

        let aspect_ratio = screen_size.aspect_ratio();
        Self {
            center: Complex::ZERO,
            extent_real: base_extent,
            extent_imaginary: base_extent * aspect_ratio,
            zoom_level: 0,
            base_extent,
            zoom_factor,
            aspect_ratio,
        }
    }

    /// Map a pixel position to the plane point it shows.
    ///
    /// Screen `y` grows downward while the imaginary axis grows upward, so the
    /// vertical axis is flipped. Positions outside the raster extrapolate.
    pub fn pixel_to_plane(&self, screen_size: screen::Size, px: i32, py: i32) -> Complex {
        let width = screen_size.width as f64;
        let height = screen_size.height as f64;

        let real = (px as f64 / width) * self.extent_real
            + (self.center.real - self.extent_real / 2.0);
        let imaginary = ((height - py as f64) / height) * self.extent_imaginary
            + (self.center.imaginary - self.extent_imaginary / 2.0);

        Complex { real, imaginary }
    }

    pub fn zoom_in(&mut self) {
        self.zoom_level += 1;
        self.update_extent();
    }

    /// Unbounded: the zoom level may go arbitrarily negative.
    pub fn zoom_out(&mut self) {
        self.zoom_level -= 1;
        self.update_extent();
    }

    pub fn set_center(&mut self, center: Complex) {
        self.center = center;
        debug!("recentered to {}", self.center);
    }

    fn update_extent(&mut self) {
        let scale = self.zoom_factor.powi(self.zoom_level);
        self.extent_real = self.base_extent * scale;
        self.extent_imaginary = self.base_extent * self.aspect_ratio * scale;
        debug!(
            "zoom level {}, extent {} x {}",
            self.zoom_level, self.extent_real, self.extent_imaginary
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_BASE_EXTENT, DEFAULT_ZOOM_FACTOR};

    const EPSILON: f64 = 1e-12;

    fn viewport(size: screen::Size) -> Viewport {
        Viewport::new(size, DEFAULT_BASE_EXTENT, DEFAULT_ZOOM_FACTOR)
    }

    #[test]
    fn initial_viewport_preserves_aspect_ratio() {
        let size = screen::Size::new(800, 600);
        let vp = viewport(size);
        assert_eq!(vp.center, Complex::ZERO);
        assert_eq!(vp.zoom_level, 0);
        assert_eq!(vp.extent_real, 4.0);
        assert_eq!(vp.extent_imaginary, 3.0);
    }

    #[test]
    fn top_left_pixel_maps_to_top_left_corner() {
        let size = screen::Size::new(800, 600);
        let vp = viewport(size);
        let corner = vp.pixel_to_plane(size, 0, 0);
        assert_eq!(corner, Complex::new(-2.0, 1.5));
    }

    #[test]
    fn bottom_right_pixel_is_within_one_step_of_bottom_right_corner() {
        let size = screen::Size::new(800, 600);
        let vp = viewport(size);

        let far = vp.pixel_to_plane(size, 800, 600);
        assert_eq!(far, Complex::new(2.0, -1.5));

        let last = vp.pixel_to_plane(size, 799, 599);
        let step_real = vp.extent_real / 800.0;
        let step_imaginary = vp.extent_imaginary / 600.0;
        assert!((last.real - (2.0 - step_real)).abs() < EPSILON);
        assert!((last.imaginary - (-1.5 + step_imaginary)).abs() < EPSILON);
    }

    #[test]
    fn center_pixel_maps_to_center() {
        let size = screen::Size::new(640, 480);
        let mut vp = viewport(size);
        assert_eq!(vp.pixel_to_plane(size, 320, 240), Complex::ZERO);

        vp.set_center(Complex::new(-0.75, 0.1));
        vp.zoom_in();
        vp.zoom_in();
        let center = vp.pixel_to_plane(size, 320, 240);
        assert!((center.real - -0.75).abs() < EPSILON);
        assert!((center.imaginary - 0.1).abs() < EPSILON);
    }

    #[test]
    fn imaginary_axis_points_up() {
        let size = screen::Size::new(100, 100);
        let vp = viewport(size);
        let upper = vp.pixel_to_plane(size, 50, 10);
        let lower = vp.pixel_to_plane(size, 50, 90);
        assert!(upper.imaginary > lower.imaginary);
    }

    #[test]
    fn zoom_is_monotonic_and_reversible() {
        let size = screen::Size::new(1920, 1080);
        let mut vp = viewport(size);
        let original = vp;

        vp.zoom_in();
        assert!(vp.extent_real < original.extent_real);
        assert!(vp.extent_imaginary < original.extent_imaginary);

        vp.zoom_out();
        vp.zoom_out();
        assert!(vp.extent_real > original.extent_real);

        vp.zoom_in();
        assert_eq!(vp.zoom_level, original.zoom_level);
        assert!((vp.extent_real - original.extent_real).abs() < EPSILON);
        assert!((vp.extent_imaginary - original.extent_imaginary).abs() < EPSILON);
    }

    #[test]
    fn zoom_keeps_aspect_ratio() {
        let size = screen::Size::new(1920, 1080);
        let mut vp = viewport(size);
        for _ in 0..10 {
            vp.zoom_in();
        }
        let ratio = vp.extent_imaginary / vp.extent_real;
        assert!((ratio - size.aspect_ratio()).abs() < EPSILON);

        for _ in 0..25 {
            vp.zoom_out();
        }
        assert_eq!(vp.zoom_level, -15);
        assert!(vp.extent_real > 0.0);
        let ratio = vp.extent_imaginary / vp.extent_real;
        assert!((ratio - size.aspect_ratio()).abs() < EPSILON);
    }
}
