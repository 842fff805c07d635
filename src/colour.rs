//! Colouring algorithm.

/// An 8-bit RGB colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Rgb { r: 0, g: 0, b: 0 };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Opaque RGBA bytes.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, u8::MAX]
    }
}

/**
Map an iteration count to a colour.

Points that never escaped (`iterations == max_iterations`) are black. Escaping
points are coloured by `t = iterations / max_iterations` on an "ice and glow"
palette: power-law ramps per channel, modulated by a slow sine wave, plus a
glow that peaks at `t = 0.5`. Every channel is clamped to `[0, 255]`.
*/
pub fn map_colour(iterations: u32, max_iterations: u32) -> Rgb {
    if iterations >= max_iterations {
        return Rgb::BLACK;
    }

    let t = iterations as f64 / max_iterations as f64;
    palette(t, iterations as f64)
}

fn palette(t: f64, iterations: f64) -> Rgb {
    let mut red = 255.0 * t.powf(0.35);
    let mut green = 180.0 * t.powi(2);
    let mut blue = 255.0 * (1.0 - t).powf(1.8);

    let wave = 0.5 + 0.5 * (t * 12.0 + iterations * 0.05).sin();
    red *= 0.7 + 0.3 * wave;
    green *= 0.6 + 0.4 * wave;
    blue *= 0.8 + 0.2 * wave;

    let glow = 90.0 * (1.0 - (0.5 - t).abs() * 2.0).powi(2);
    red += glow * 0.9;
    green += glow * 0.5;
    blue += glow * 1.2;

    Rgb {
        r: channel(red),
        g: channel(green),
        b: channel(blue),
    }
}

fn channel(value: f64) -> u8 {
    value.clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX_ITER: u32 = 64;

    #[test]
    fn interior_is_black() {
        for _ in 0..3 {
            assert_eq!(map_colour(MAX_ITER, MAX_ITER), Rgb::BLACK);
        }
        assert_eq!(map_colour(1000, 1000), Rgb::BLACK);
    }

    #[test]
    fn escaping_points_are_not_black() {
        for n in 0..MAX_ITER {
            assert_ne!(map_colour(n, MAX_ITER), Rgb::BLACK, "n = {}", n);
        }
    }

    #[test]
    fn palette_is_deterministic() {
        for n in 0..MAX_ITER {
            assert_eq!(map_colour(n, MAX_ITER), map_colour(n, MAX_ITER));
        }
    }

    #[test]
    fn palette_is_continuous() {
        // Sample the palette finely; neighbouring samples must not jump. The red
        // ramp is steep right at t = 0, so start just above it.
        let steps = 10_000;
        let first = steps / 100;
        let t0 = first as f64 / steps as f64;
        let mut previous = palette(t0, t0 * MAX_ITER as f64);
        for i in first + 1..steps {
            let t = i as f64 / steps as f64;
            let current = palette(t, t * MAX_ITER as f64);
            for (a, b) in [
                (previous.r, current.r),
                (previous.g, current.g),
                (previous.b, current.b),
            ] {
                assert!((a as i32 - b as i32).abs() <= 2, "jump at t = {}", t);
            }
            previous = current;
        }
    }

    #[test]
    fn channel_clamps() {
        assert_eq!(channel(-10.0), 0);
        assert_eq!(channel(300.0), 255);
        assert_eq!(channel(f64::NAN), 0);
    }

    #[test]
    fn rgba_is_opaque() {
        assert_eq!(Rgb::new(1, 2, 3).to_rgba(), [1, 2, 3, 255]);
    }
}
