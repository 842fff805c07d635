//! Escape-time test for the quadratic recurrence `z' = z^2 + c`.

use crate::complex::Complex;

/// Squared escape radius. Once `|z| > 2` the orbit is known to diverge.
const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/**
Count how many iterations the orbit of `0` under `z' = z^2 + c` stays within the
escape radius.

Returns a value in `0..=max_iterations`. A result of exactly `max_iterations`
means the orbit never escaped and `c` is treated as a member of the set.
*/
pub fn count_iterations(c: Complex, max_iterations: u32) -> u32 {
    let (mut zx, mut zy) = (0.0_f64, 0.0_f64);
    let mut iteration = 0;

    while iteration < max_iterations {
        let zx2 = zx * zx;
        let zy2 = zy * zy;

        if zx2 + zy2 > ESCAPE_RADIUS_SQUARED {
            break;
        }

        let next_zx = zx2 - zy2 + c.real;
        let next_zy = 2.0 * zx * zy + c.imaginary;
        zx = next_zx;
        zy = next_zy;

        iteration += 1;
    }

    iteration
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX_ITER: u32 = 64;

    #[test]
    fn origin_is_in_the_set() {
        assert_eq!(count_iterations(Complex::ZERO, MAX_ITER), MAX_ITER);
    }

    #[test]
    fn far_point_escapes_after_one_iteration() {
        // z1 = c = 2 + 2i has |z1|^2 = 8 > 4.
        assert_eq!(count_iterations(Complex::new(2.0, 2.0), MAX_ITER), 1);
    }

    #[test]
    fn known_interior_points_do_not_escape() {
        for c in [
            Complex::new(-1.0, 0.0),
            Complex::new(-0.1, 0.1),
            Complex::new(0.25, 0.0),
            Complex::new(-2.0, 0.0),
        ] {
            assert_eq!(count_iterations(c, MAX_ITER), MAX_ITER, "{}", c);
        }
    }

    #[test]
    fn points_just_outside_escape_late() {
        let n = count_iterations(Complex::new(0.26, 0.0), MAX_ITER);
        assert!(n > 5 && n < MAX_ITER, "{}", n);
    }

    #[test]
    fn result_never_exceeds_limit() {
        for limit in [0, 1, 7, 64, 500] {
            assert!(count_iterations(Complex::new(-0.5, 0.5), limit) <= limit);
        }
        assert_eq!(count_iterations(Complex::new(10.0, 0.0), 0), 0);
    }

    #[test]
    fn axis_convention_is_not_swapped() {
        // 0.4i is bounded for longer than 0.4 (which escapes quickly); a swapped
        // real/imaginary convention would reverse these.
        let on_real = count_iterations(Complex::new(0.4, 0.0), MAX_ITER);
        let on_imaginary = count_iterations(Complex::new(0.0, 0.4), MAX_ITER);
        assert!(on_real < on_imaginary, "{} vs {}", on_real, on_imaginary);
    }
}
