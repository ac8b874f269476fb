use num::complex::Complex64;
use num::{One, Zero};

use super::Strategy;
use crate::error::{Error, Result};
use crate::poly::Poly;

/// Single-threaded loop over the root indices; the baseline the parallel
/// strategies are checked against.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sequential;

/// Weierstrass denominator for root `skip`: the product of its differences
/// with every other current estimate.
pub(crate) fn product_skip(roots: &[Complex64], skip: usize) -> Complex64 {
    let mut product = Complex64::one();
    for (i, r) in roots.iter().enumerate() {
        if i == skip {
            continue;
        }
        product *= roots[skip] - r;
    }
    product
}

/// One Weierstrass update for root `i`, read entirely from the `roots`
/// snapshot.
pub(crate) fn next_root(poly: &Poly, roots: &[Complex64], i: usize) -> Result<Complex64> {
    let denominator = product_skip(roots, i);
    if denominator.is_zero() {
        return Err(Error::CoincidentRoots { skip: i });
    }
    Ok(roots[i] - poly.eval(roots[i]) / denominator)
}

impl Strategy for Sequential {
    fn step(&self, poly: &Poly, roots: &[Complex64]) -> Result<Vec<Complex64>> {
        (0..roots.len())
            .map(|i| next_root(poly, roots, i))
            .collect()
    }

    fn converged(&self, before: &[Complex64], after: &[Complex64], tolerance: f64) -> bool {
        debug_assert_eq!(before.len(), after.len());
        before
            .iter()
            .zip(after)
            .all(|(b, a)| (a - b).norm() <= tolerance)
    }
}
