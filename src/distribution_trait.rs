//! This script contains the interfaces used to comunicate with the distributions.
//!
//!  - [Distribution]: evaluation of the pdf and cdf (single points or whole sequences)
//!     and the basic moments.
//!  - [Sampling]: generation of random variates from an explicit random
//!     number generator.
//!

use rand::Rng;

use crate::{domain::ContinuousDomain, errors::DistError};

/// The trait for any continuous distribution.
///
/// All the distributions of this library have an analytical pdf and cdf, so
/// both are requiered methods. The `*_multiple` methods just map the single
/// point version over a sequence and return a vector of the same length.
///
/// Evaluating outside the [domain](Distribution::get_domain) is not an error:
/// the pdf returns `0.0` and the cdf returns `0.0` or `1.0`.
pub trait Distribution {
    //Requiered methods:

    /// Evaluates the [PDF](https://en.wikipedia.org/wiki/Probability_density_function)
    /// (Probability Density function) of the distribution at point `x`.
    ///
    ///  - `0.0 <= pdf(x)`
    ///  - It is normalized. (It has an area under the curbe of `1.0`)
    ///  - As `x` approaches `+-inf`, `pdf(x)` tends to `0.0`
    fn pdf(&self, x: f64) -> f64;

    /// Returns a reference to the pdf [ContinuousDomain], wich indicates at wich points
    /// the pdf can be non-zero. The returned domain should be constant and not change.
    fn get_domain(&self) -> &ContinuousDomain;

    /// Evaluates the [CDF](https://en.wikipedia.org/wiki/Cumulative_distribution_function)
    /// (Cumulative distribution function).
    ///
    /// If the function is evaluated outside the domain of the pdf, it will
    /// return either `0.0` or `1.0`. If the value can not be computed
    /// (see [Distribution::try_cdf]) a NaN is returned.
    fn cdf(&self, x: f64) -> f64;

    /// The [expected value](https://en.wikipedia.org/wiki/Expected_value) of the
    /// distribution, or [None] if it is undefined.
    fn expected_value(&self) -> Option<f64>;

    /// The [variance](https://en.wikipedia.org/wiki/Variance) of the distribution,
    /// or [None] if it is undefined. It may be `+inf`.
    fn variance(&self) -> Option<f64>;

    // Provided methods:

    /// Same as [Distribution::cdf] but reporting an error instead of a NaN when
    /// the underlying numerical method fails.
    ///
    /// Distributions whose cdf can not fail just wrap [Distribution::cdf].
    fn try_cdf(&self, x: f64) -> Result<f64, DistError> {
        return Ok(self.cdf(x));
    }

    /// Evaluates the [Distribution::pdf] on every point. The returned vector has
    /// the same length as `points`.
    fn pdf_multiple(&self, points: &[f64]) -> Vec<f64> {
        let mut ret: Vec<f64> = Vec::with_capacity(points.len());
        for &point in points {
            ret.push(self.pdf(point));
        }
        return ret;
    }

    /// Evaluates the [Distribution::cdf] on every point. The returned vector has
    /// the same length as `points`.
    fn cdf_multiple(&self, points: &[f64]) -> Vec<f64> {
        let mut ret: Vec<f64> = Vec::with_capacity(points.len());
        for &point in points {
            ret.push(self.cdf(point));
        }
        return ret;
    }

    /// Evaluates the [Distribution::try_cdf] on every point.
    ///
    /// The first error aborts the evaluation, no partial result is returned.
    fn try_cdf_multiple(&self, points: &[f64]) -> Result<Vec<f64>, DistError> {
        let mut ret: Vec<f64> = Vec::with_capacity(points.len());
        for &point in points {
            ret.push(self.try_cdf(point)?);
        }
        return Ok(ret);
    }

    /// The [standard deviation](https://en.wikipedia.org/wiki/Standard_deviation),
    /// the square root of the [Distribution::variance].
    fn standard_deviation(&self) -> Option<f64> {
        return self.variance().map(f64::sqrt);
    }
}

/// Generation of random variates.
///
/// The random number generator is always explicit: there is no global
/// random state in the library. [Sampling::sample_with] and
/// [Sampling::sample_multiple_with] take any generator (a seeded
/// [StdRng](rand::rngs::StdRng) for reproducible results, for example), while
/// [Sampling::sample] and [Sampling::sample_multiple] use the
/// thread-local generator of [rand::rng].
pub trait Sampling {
    //Requiered method:

    /// Draws a single random variate using `rng`.
    fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R) -> f64;

    // Provided methods:

    /// Draws `n` random variates using `rng`.
    fn sample_multiple_with<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<f64> {
        let mut ret: Vec<f64> = Vec::with_capacity(n);
        for _ in 0..n {
            ret.push(self.sample_with(rng));
        }
        return ret;
    }

    /// Draws a single random variate with the thread-local generator.
    fn sample(&self) -> f64 {
        let mut rng: rand::rngs::ThreadRng = rand::rng();
        return self.sample_with(&mut rng);
    }

    /// Draws `n` random variates with the thread-local generator.
    fn sample_multiple(&self, n: usize) -> Vec<f64> {
        let mut rng: rand::rngs::ThreadRng = rand::rng();
        return self.sample_multiple_with(n, &mut rng);
    }
}
