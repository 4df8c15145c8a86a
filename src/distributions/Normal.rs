//! # Normal distribution
//!
//! The [Normal distribution](https://en.wikipedia.org/wiki/Normal_distribution)
//! ia a very important continuous probability distribution.
//!
//! This distribution is very frequent in statistics and extremly well studied.
//! It also has a key role en the [Central Limit Theorem](https://en.wikipedia.org/wiki/Central_limit_theorem)
//! (CLT), wich says that the (normalized) sum of `n` random variables of
//! (almost) **any** distribution will be normally distributed as `n` grows to infinity.
//!
//! We implement the [Normal] distribution and the [StdNormal], wich is the same as [Normal]
//! but for fixed `mean = 0.0` and `std_dev = 1.0`.
//!
//! Random variates are generated with the
//! [Box–Muller transform](https://en.wikipedia.org/wiki/Box%E2%80%93Muller_transform),
//! see [StdNormalGenerator].
//!

use rand::Rng;
use std::f64::consts::PI;

use crate::{
    distribution_trait::{Distribution, Sampling},
    domain::ContinuousDomain,
    errors::DistError,
    euclid,
};

pub const NORMAL_DOMAIN: ContinuousDomain = ContinuousDomain::Reals;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct StdNormal {
    domain: ContinuousDomain,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Normal {
    std_normal: StdNormal,
    /// The mean of the distribution
    mean: f64,
    /// The standard deviation of the distribution
    standard_deviation: f64,
}

/// An infinite iterator of [StdNormal] samples.
///
/// The [Box–Muller transform](https://en.wikipedia.org/wiki/Box%E2%80%93Muller_transform)
/// takes 2 independent uniforms `u_1` in `(0, 1]` and `u_2` in `[0, 1)` and gives 2
/// independent standard normal variates:
///
/// > r = sqrt(-2 * ln(u_1))
/// > z_1 = r * cos(2 * pi * u_2)
/// > z_2 = r * sin(2 * pi * u_2)
///
/// The second variate is stored and returned in the next call.
pub struct StdNormalGenerator<R: Rng> {
    rng: R,
    spare: Option<f64>,
}

/// An infinite iterator of [Normal] samples. Just a scaled and shifted [StdNormalGenerator].
pub struct NormalGenerator<R: Rng> {
    rng: StdNormalGenerator<R>,
    mean: f64,
    standard_deviation: f64,
}

impl StdNormal {
    /// Create a Standard normal distribution. Has a mean of `0.0` and a standard
    /// deviation of `1.0`.
    #[must_use]
    pub const fn new() -> StdNormal {
        return StdNormal {
            domain: NORMAL_DOMAIN,
        };
    }

    /// Returns an iterator that generates [StdNormal] samples using `rng`.
    ///
    /// Pass `&mut rng` if you want to keep using the generator afterwards.
    pub fn iter<R: Rng>(&self, rng: R) -> StdNormalGenerator<R> {
        return StdNormalGenerator::new(rng);
    }
}

impl Normal {
    /// Create a [Normal] distribution.
    ///
    ///  - The `mean` must be finite (No `+-inf` or NaNs)
    ///  - The `standard_deviation` must be finite (No `+-inf` or NaNs)
    ///  - The `standard_deviation` must be stricly greater than `0.0`.
    ///
    /// If those conditions are not fullfiled, an error will be returned.
    pub fn new(mean: f64, standard_deviation: f64) -> Result<Normal, DistError> {
        for value in [mean, standard_deviation] {
            if let Some(error) = DistError::classify_non_finite(value) {
                log::debug!("Rejected normal parameters mean = {mean}, std_dev = {standard_deviation}: {error}");
                return Err(error);
            }
        }

        if standard_deviation <= 0.0 {
            log::debug!("Rejected normal standard deviation {standard_deviation}: must be positive. ");
            return Err(DistError::DomainErr);
        }

        return Ok(Normal {
            std_normal: StdNormal::new(),
            mean,
            standard_deviation,
        });
    }

    /// Create a [Normal] distribution without checking for the corrrectness of the inputs.
    ///
    /// ## Safety
    ///
    ///  - The `mean` must be finite (No `+-inf` or NaNs)
    ///  - The `standard_deviation` must be finite (No `+-inf` or NaNs)
    ///  - The `standard_deviation` must be stricly greater than `0.0`.
    ///
    /// If those conditions are not fullfiled, the returned distribution
    /// will be invalid.
    #[must_use]
    pub const unsafe fn new_unchecked(mean: f64, standard_deviation: f64) -> Normal {
        return Normal {
            std_normal: StdNormal::new(),
            mean,
            standard_deviation,
        };
    }

    /// Returns the mean, the first parameter of the normal distribution.
    #[must_use]
    pub const fn get_mean(&self) -> f64 {
        return self.mean;
    }

    /// Returns the standard deviation, the second parameter of the normal distribution.
    #[must_use]
    pub const fn get_standard_deviation(&self) -> f64 {
        return self.standard_deviation;
    }

    /// Returns an iterator that generates [Normal] samples using `rng`.
    pub fn iter<R: Rng>(&self, rng: R) -> NormalGenerator<R> {
        return NormalGenerator {
            rng: self.std_normal.iter(rng),
            mean: self.mean,
            standard_deviation: self.standard_deviation,
        };
    }
}

impl Distribution for StdNormal {
    fn pdf(&self, x: f64) -> f64 {
        // exp(-inf) = 0, so the far tails underflow to 0 instead of a NaN
        return euclid::INV_SQRT_2_PI * (-x * x * 0.5).exp();
    }

    fn get_domain(&self) -> &ContinuousDomain {
        return &self.domain;
    }

    fn cdf(&self, x: f64) -> f64 {
        // Phi(x) = 0.5 * erfc(-x / sqrt(2))
        // erfc(0) is exacly 1, so Phi(0) is exacly 0.5
        return 0.5 * euclid::erfc(-x / euclid::SQRT_2);
    }

    fn expected_value(&self) -> Option<f64> {
        return Some(0.0);
    }

    fn variance(&self) -> Option<f64> {
        return Some(1.0);
    }
}

impl Sampling for StdNormal {
    fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        return self.iter(rng).next().unwrap_or(0.0);
    }

    fn sample_multiple_with<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<f64> {
        let mut ret: Vec<f64> = Vec::with_capacity(n);
        ret.extend(self.iter(rng).take(n));
        return ret;
    }
}

impl Distribution for Normal {
    fn pdf(&self, x: f64) -> f64 {
        // `1 / std_dev` is inf for a subnormal std_dev, divide instead
        let z: f64 = (x - self.mean) / self.standard_deviation;
        return self.std_normal.pdf(z) / self.standard_deviation;
    }

    fn get_domain(&self) -> &ContinuousDomain {
        return &self.std_normal.domain;
    }

    fn cdf(&self, x: f64) -> f64 {
        // 0.5 * erfc(-(x - mean) / (std_dev * sqrt(2)))
        let z: f64 = (x - self.mean) / self.standard_deviation;
        return self.std_normal.cdf(z);
    }

    fn pdf_multiple(&self, points: &[f64]) -> Vec<f64> {
        let mut ret: Vec<f64> = Vec::with_capacity(points.len());
        for &point in points {
            let z: f64 = (point - self.mean) / self.standard_deviation;
            ret.push(self.std_normal.pdf(z) / self.standard_deviation);
        }
        return ret;
    }

    fn expected_value(&self) -> Option<f64> {
        return Some(self.mean);
    }

    fn variance(&self) -> Option<f64> {
        return Some(self.standard_deviation * self.standard_deviation);
    }
}

impl Sampling for Normal {
    fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        return self.iter(rng).next().unwrap_or(self.mean);
    }

    fn sample_multiple_with<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<f64> {
        let mut ret: Vec<f64> = Vec::with_capacity(n);
        ret.extend(self.iter(rng).take(n));
        return ret;
    }
}

impl<R: Rng> StdNormalGenerator<R> {
    /// Creates a new generator that takes it's randomness from `rng`.
    pub fn new(rng: R) -> StdNormalGenerator<R> {
        return StdNormalGenerator { rng, spare: None };
    }
}

impl<R: Rng> Iterator for StdNormalGenerator<R> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if let Some(z) = self.spare.take() {
            return Some(z);
        }

        // u_1 in (0, 1] so the logarithm is finite
        let u_1: f64 = 1.0 - self.rng.random::<f64>();
        let u_2: f64 = self.rng.random::<f64>();

        let radius: f64 = (-2.0 * u_1.ln()).sqrt();
        let (sin, cos): (f64, f64) = (2.0 * PI * u_2).sin_cos();

        self.spare = Some(radius * sin);
        return Some(radius * cos);
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        return (usize::MAX, None);
    }
}

impl<R: Rng> Iterator for NormalGenerator<R> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let z: f64 = self.rng.next()?;
        return Some(z.mul_add(self.standard_deviation, self.mean));
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        return (usize::MAX, None);
    }
}

impl Default for Normal {
    fn default() -> Self {
        return Normal {
            std_normal: StdNormal::new(),
            mean: 0.0,
            standard_deviation: 1.0,
        };
    }
}
