use std::f64::consts::TAU;

use num::complex::Complex64;

/// Fill `out` with evenly spaced points on the unit circle, one per root:
/// magnitude 1, angles 0, 2π/n, 4π/n, ...
///
/// Deterministic, and the points are pairwise distinct for any degree.
pub fn unit_circle(out: &mut [Complex64]) {
    let n = out.len();
    debug_assert!(n >= 1, "a polynomial of degree 0 has no roots to guess");

    let angle_step = TAU / n as f64;
    for (k, y) in out.iter_mut().enumerate() {
        *y = Complex64::from_polar(1.0, angle_step * k as f64);
    }
}
