//! Testing utilities, do not depend on any of these in production!

use num::complex::Complex64;

/// Check that two sets of roots are equal up to `tol`, ignoring order.
///
/// Each root in `roots1` greedily claims the nearest unclaimed root in
/// `roots2`.
#[must_use]
pub fn check_roots(roots1: &[Complex64], roots2: &[Complex64], tol: f64) -> bool {
    if roots1.len() != roots2.len() {
        return false;
    }

    let mut remaining = roots2.to_vec();
    for r1 in roots1 {
        let mut best_idx = 0;
        let mut best_d = f64::MAX;
        for (i, r2) in remaining.iter().enumerate() {
            let d = (r1 - r2).norm();
            if d < best_d {
                best_idx = i;
                best_d = d;
            }
        }
        if best_d > tol {
            return false;
        }
        remaining.remove(best_idx);
    }
    true
}
