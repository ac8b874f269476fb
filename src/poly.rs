use num::complex::Complex64;
use num::Zero;

use crate::error::{Error, Result};

/// Real polynomial, stored as coefficients of terms of ascending degree:
/// index `i` holds the coefficient of `x^i`.
#[derive(Clone, Debug, PartialEq)]
pub struct Poly(Vec<f64>);

impl Poly {
    /// Create a polynomial from coefficients in ascending degree order.
    ///
    /// High-order zero coefficients are stripped, so `[1.0, 2.0, 0.0]` is
    /// the linear `2x + 1`.
    ///
    /// # Errors
    /// - [`Error::NonFiniteCoefficient`] if any coefficient is NaN or
    ///   infinite
    /// - [`Error::DegreeTooLow`] if fewer than two coefficients remain
    ///   after stripping, i.e. the input is empty or constant
    pub fn new(coeffs: &[f64]) -> Result<Self> {
        for (index, c) in coeffs.iter().enumerate() {
            if !c.is_finite() {
                return Err(Error::NonFiniteCoefficient { index });
            }
        }
        let mut coeffs = coeffs.to_vec();
        while coeffs.last() == Some(&0.0) {
            coeffs.pop();
        }
        if coeffs.len() < 2 {
            return Err(Error::DegreeTooLow);
        }
        Ok(Self(coeffs))
    }

    /// Highest exponent with a nonzero coefficient; equals the number of
    /// roots.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.0.len() - 1
    }

    /// Coefficients in ascending degree order.
    #[must_use]
    pub fn coeffs(&self) -> &[f64] {
        &self.0
    }

    /// Evaluate the polynomial at `x` by Horner's rule.
    ///
    /// The constant term survives evaluation at zero; `x^0` is 1 even for
    /// `x = 0`.
    #[must_use]
    pub fn eval(&self, x: Complex64) -> Complex64 {
        self.0
            .iter()
            .rev()
            .fold(Complex64::zero(), |acc, &c| acc * x + c)
    }

    /// Closed-form root of a degree-1 polynomial.
    pub(crate) fn linear_root(&self) -> Complex64 {
        debug_assert_eq!(self.degree(), 1);
        Complex64::new(-self.0[0] / self.0[1], 0.0)
    }
}
