use thiserror::Error;

/// Everything that can go wrong when building a distribution or
/// evaluating it over a sequence of points.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DistError {
    /// A parameter (or a special function argument) was outside it's domain.
    /// For example a non-positive standard deviation, `a >= b` for a uniform
    /// or a value outside `[0, 1]` for the incomplete beta function.
    #[error("A parameter was outside the domain of the function. ")]
    DomainErr,
    /// A NaN (Not a Number) was found in the parameters or in the points.
    #[error("A NaN (Not a Number) was found in the input. ")]
    NanErr,
    /// A number did not fullfill the conditions of the function. Usually it
    /// was infinite when only finite values are allowed.
    #[error("A number did not fullfill the conditions of the function (it was probably infinite). ")]
    InvalidNumber,
    /// There was an error when performing some numerical computation.
    /// The value could not be represented or an iterative method did not converge.
    #[error(
        "There was an error when performing some numerical computation. Overflow or no convergence. "
    )]
    NumericalError,
}

impl DistError {
    /// Classifies a parameter that is **not** finite.
    ///
    /// Returns [DistError::NanErr] for NaNs and [DistError::InvalidNumber] for `+-inf`.
    /// If the value is finite, [None] is returned.
    #[must_use]
    pub fn classify_non_finite(value: f64) -> Option<DistError> {
        if value.is_nan() {
            return Some(DistError::NanErr);
        }
        if value.is_infinite() {
            return Some(DistError::InvalidNumber);
        }
        return None;
    }
}
