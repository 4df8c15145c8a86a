//! # Uniform distribution
//!
//! The [uniform distribution](https://en.wikipedia.org/wiki/Continuous_uniform_distribution)
//! is a continuous distributions where all possible outcomes in the interval `[a, b]` have
//! equal likelyhood of happening.
//!

use rand::Rng;

use crate::{
    distribution_trait::{Distribution, Sampling},
    domain::ContinuousDomain,
    errors::DistError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Uniform {
    domain: ContinuousDomain,
    /// The minimum value
    a: f64,
    /// The maximum value
    b: f64,
}

impl Uniform {
    /// Creates a new [uniform distribution](https://en.wikipedia.org/wiki/Continuous_uniform_distribution).
    ///
    ///  - `a` indicates the minimum value.
    ///  - `b` indicates the maximum value.
    ///  - `a < b` must be fulfilled or [DistError::DomainErr] will be returned.
    ///  - `a` and `b` must both be finite values (no `+-inf` or NaNs)
    ///  - `b - a` must be finite, otherwise [DistError::NumericalError] is returned.
    pub fn new(a: f64, b: f64) -> Result<Uniform, DistError> {
        for value in [a, b] {
            if let Some(error) = DistError::classify_non_finite(value) {
                log::debug!("Rejected uniform parameters a = {a}, b = {b}: {error}");
                return Err(error);
            }
        }

        if b <= a {
            log::debug!("Rejected uniform parameters a = {a}, b = {b}: `a < b` does not hold. ");
            return Err(DistError::DomainErr);
        }

        if !(b - a).is_finite() {
            log::debug!("Rejected uniform parameters a = {a}, b = {b}: `b - a` overflows. ");
            return Err(DistError::NumericalError);
        }

        let domain: ContinuousDomain = ContinuousDomain::Range(a, b);

        return Ok(Uniform { domain, a, b });
    }

    /// Creates a new [uniform distribution](https://en.wikipedia.org/wiki/Continuous_uniform_distribution).
    /// Does not do any checks.
    ///
    ///  - `a` indicates the minimum value.
    ///  - `b` indicates the maximum value.
    ///
    /// ## Safety
    ///
    /// If the folllowing conditions are not fullfiled, the returned distribution
    /// will be invalid.
    ///
    ///  - `a < b`.
    ///  - `a` and `b` must both be finite values (no `+-inf` or NaNs)
    ///  - `b - a` must be finite.
    ///
    #[must_use]
    pub const unsafe fn new_unchecked(a: f64, b: f64) -> Uniform {
        let domain: ContinuousDomain = ContinuousDomain::Range(a, b);

        return Uniform { domain, a, b };
    }

    /// Return `a` (minimum value).
    #[must_use]
    pub const fn get_a(&self) -> f64 {
        return self.a;
    }

    /// Return `b` (maximum value).
    #[must_use]
    pub const fn get_b(&self) -> f64 {
        return self.b;
    }
}

impl Distribution for Uniform {
    fn pdf(&self, x: f64) -> f64 {
        // closed interval, both bounds have density
        if self.domain.contains(x) {
            return 1.0 / (self.b - self.a);
        }
        return 0.0;
    }

    fn get_domain(&self) -> &ContinuousDomain {
        return &self.domain;
    }

    fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return x;
        }

        if x < self.a {
            return 0.0;
        }

        if self.b < x {
            return 1.0;
        }

        return (x - self.a) / (self.b - self.a);
    }

    fn expected_value(&self) -> Option<f64> {
        return Some(0.5 * (self.a + self.b));
    }

    fn variance(&self) -> Option<f64> {
        let range: f64 = self.b - self.a;
        return Some(range * range / 12.0);
    }
}

impl Sampling for Uniform {
    fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        // `random::<f64>()` is in [0, 1), so the result is in [a, b)
        let q: f64 = rng.random::<f64>();
        return self.a + q * (self.b - self.a);
    }

    fn sample_multiple_with<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<f64> {
        let mut ret: Vec<f64> = Vec::with_capacity(n);

        let d: f64 = self.b - self.a;
        for _ in 0..n {
            let q: f64 = rng.random::<f64>();
            ret.push(self.a + q * d);
        }

        return ret;
    }
}

impl Default for Uniform {
    fn default() -> Self {
        return Uniform {
            domain: ContinuousDomain::Range(0.0, 1.0),
            a: 0.0,
            b: 1.0,
        };
    }
}
