use thiserror::Error;

/// The top-level error type for this crate.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Fewer than two coefficients remain once high-order zeros are
    /// stripped, i.e. the input has no roots to find.
    #[error("polynomial must have degree at least 1")]
    DegreeTooLow,

    /// A coefficient is NaN or infinite.
    #[error("coefficient {index} is not finite")]
    NonFiniteCoefficient { index: usize },

    #[error("invalid solver configuration: {reason}")]
    InvalidConfig { reason: &'static str },

    /// Two root estimates coincide, so the Weierstrass denominator for root
    /// `skip` is exactly zero and its correction is undefined.
    #[error("root estimates coincide, correction term for root {skip} is undefined")]
    CoincidentRoots { skip: usize },

    /// The iteration budget ran out before every root settled within the
    /// tolerance. Carries the number of iterations attempted, not the
    /// unsettled estimates.
    #[error("did not converge within {iterations} iterations")]
    NoConverge { iterations: usize },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
