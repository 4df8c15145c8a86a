//! A Domain represents the set of points where the pdf of a distribution
//! can be non-zero (it's [support](https://en.wikipedia.org/wiki/Support_(mathematics))).
//!
//! All the distributions of the library are continuous, so the support is
//! always an interval of the real numbers: a [ContinuousDomain].
//!
//! Evaluating a distribution outside it's domain is **not** an error. The pdf
//! is `0.0` there and the cdf saturates to `0.0` (below) or `1.0` (above).
//!

/// A [domain](https://en.wikipedia.org/wiki/Domain_of_a_function) of a region
/// of the real numbers.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ContinuousDomain {
    /// All real numbers
    #[default]
    Reals,
    /// The values contained in the range (**both** inclusive).
    ///
    /// The first number is the minimum, and the last is the maximum.
    ///
    /// Has the **invariant** that `min < max`.
    Range(f64, f64),
    /// All the numbers from the given value onwards.
    From(f64),
    /// All the numbers until the given value.
    To(f64),
}

impl ContinuousDomain {
    /// Returns true if `x` is inside the domain (bounds included).
    /// NaNs are never contained.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        match self {
            ContinuousDomain::Reals => !x.is_nan(),
            ContinuousDomain::Range(min, max) => (*min <= x) && (x <= *max),
            ContinuousDomain::From(min) => *min <= x,
            ContinuousDomain::To(max) => x <= *max,
        }
    }

    /// Returns true if `x` is stricly smaller than every value of the domain.
    #[must_use]
    pub fn is_below(&self, x: f64) -> bool {
        return x < self.get_bounds().0;
    }

    /// Returns true if `x` is stricly greater than every value of the domain.
    #[must_use]
    pub fn is_above(&self, x: f64) -> bool {
        return self.get_bounds().1 < x;
    }

    /// Returns the upper and lower bounds of the domain.
    ///
    /// Take into account that the values can also include positive and negative infinity.
    /// It is guaranteed that return.0 <= return.1. If the bounds are finite, the values
    /// themselves are included.
    #[must_use]
    pub fn get_bounds(&self) -> (f64, f64) {
        match &self {
            ContinuousDomain::Reals => (f64::NEG_INFINITY, f64::INFINITY),
            ContinuousDomain::Range(min, max) => (*min, *max),
            ContinuousDomain::From(min) => (*min, f64::INFINITY),
            ContinuousDomain::To(max) => (f64::NEG_INFINITY, *max),
        }
    }
}
