//! # Vectorized interface
//!
//! This is the main entry point of the library. Every distribution has (up to) 3
//! functions that work over whole sequences of points:
//!
//!  - `density_*`: evaluates the pdf at every point.
//!  - `cumulative_*`: evaluates the cdf at every point.
//!  - `generate_*`: draws `n` random variates.
//!
//! All of them are builders (see [bon]) so the parameters with a deafult value
//! can be omitted:
//!
//! ```
//! use TheoreticalDistributions::{density_normal, samples::seq};
//!
//! let points: Vec<f64> = seq(-3.0, 3.0, 7);
//! let density: Vec<f64> = density_normal().points(&points).call().unwrap();
//! assert_eq!(density.len(), 7);
//!
//! let shifted: Vec<f64> = density_normal()
//!     .points(&points)
//!     .mean(1.0)
//!     .standard_deviation(2.0)
//!     .call()
//!     .unwrap();
//! assert_eq!(shifted.len(), 7);
//! ```
//!
//! The parameters are validated once per call and the points are checked for NaNs
//! once per call. If anything fails, an error is returned and no partial output
//! is produced.
//!
//! Generators use their own [StdRng]. If a `seed` is given the results are
//! reproducible, otherwise it is seeded from the thread-local generator.
//!

use rand::{SeedableRng, rngs::StdRng};

use crate::{
    distribution_trait::{Distribution, Sampling},
    distributions::{F::F, Normal::Normal, StudentT::StudentT, Uniform::Uniform},
    errors::DistError,
};

/// Returns [DistError::NanErr] if any of the points is a NaN.
fn check_points(points: &[f64]) -> Result<(), DistError> {
    if let Some(i) = points.iter().position(|x| x.is_nan()) {
        log::debug!("Rejected evaluation points: NaN at index {i}. ");
        return Err(DistError::NanErr);
    }
    return Ok(());
}

fn get_rng(seed: Option<u64>) -> StdRng {
    return match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_rng(&mut rand::rng()),
    };
}

// Uniform

/// Evaluates the pdf of a [Uniform] distribution in `[a, b]` at every point.
///
/// Defaults: `a = 0.0` and `b = 1.0`.
///
/// Returns an error if `points` contains a NaN or if the parameters are
/// not valid (see [Uniform::new]).
#[bon::builder]
pub fn density_uniform(
    points: &[f64],
    #[builder(default = 0.0)] a: f64,
    #[builder(default = 1.0)] b: f64,
) -> Result<Vec<f64>, DistError> {
    let distribution: Uniform = Uniform::new(a, b)?;
    check_points(points)?;
    return Ok(distribution.pdf_multiple(points));
}

/// Evaluates the cdf of a [Uniform] distribution in `[a, b]` at every point.
///
/// Defaults: `a = 0.0` and `b = 1.0`.
#[bon::builder]
pub fn cumulative_uniform(
    points: &[f64],
    #[builder(default = 0.0)] a: f64,
    #[builder(default = 1.0)] b: f64,
) -> Result<Vec<f64>, DistError> {
    let distribution: Uniform = Uniform::new(a, b)?;
    check_points(points)?;
    return distribution.try_cdf_multiple(points);
}

/// Generates `n` random variates of a [Uniform] distribution in `[a, b]`.
///
/// Defaults: `a = 0.0`, `b = 1.0` and a random seed.
#[bon::builder]
pub fn generate_uniform(
    n: usize,
    #[builder(default = 0.0)] a: f64,
    #[builder(default = 1.0)] b: f64,
    seed: Option<u64>,
) -> Result<Vec<f64>, DistError> {
    let distribution: Uniform = Uniform::new(a, b)?;
    let mut rng: StdRng = get_rng(seed);
    return Ok(distribution.sample_multiple_with(n, &mut rng));
}

// Normal

/// Evaluates the pdf of a [Normal] distribution at every point.
///
/// Defaults: `mean = 0.0` and `standard_deviation = 1.0`.
///
/// Returns an error if `points` contains a NaN or if the parameters are
/// not valid (see [Normal::new]).
#[bon::builder]
pub fn density_normal(
    points: &[f64],
    #[builder(default = 0.0)] mean: f64,
    #[builder(default = 1.0)] standard_deviation: f64,
) -> Result<Vec<f64>, DistError> {
    let distribution: Normal = Normal::new(mean, standard_deviation)?;
    check_points(points)?;
    return Ok(distribution.pdf_multiple(points));
}

/// Evaluates the cdf of a [Normal] distribution at every point.
///
/// Defaults: `mean = 0.0` and `standard_deviation = 1.0`.
#[bon::builder]
pub fn cumulative_normal(
    points: &[f64],
    #[builder(default = 0.0)] mean: f64,
    #[builder(default = 1.0)] standard_deviation: f64,
) -> Result<Vec<f64>, DistError> {
    let distribution: Normal = Normal::new(mean, standard_deviation)?;
    check_points(points)?;
    return distribution.try_cdf_multiple(points);
}

/// Generates `n` random variates of a [Normal] distribution.
///
/// Defaults: `mean = 0.0`, `standard_deviation = 1.0` and a random seed.
#[bon::builder]
pub fn generate_normal(
    n: usize,
    #[builder(default = 0.0)] mean: f64,
    #[builder(default = 1.0)] standard_deviation: f64,
    seed: Option<u64>,
) -> Result<Vec<f64>, DistError> {
    let distribution: Normal = Normal::new(mean, standard_deviation)?;
    let mut rng: StdRng = get_rng(seed);
    return Ok(distribution.sample_multiple_with(n, &mut rng));
}

// Student T

/// Evaluates the pdf of a [StudentT] distribution at every point.
///
/// `degrees_of_freedom` is requiered.
#[bon::builder]
pub fn density_t(points: &[f64], degrees_of_freedom: f64) -> Result<Vec<f64>, DistError> {
    let distribution: StudentT = StudentT::new(degrees_of_freedom)?;
    check_points(points)?;
    return Ok(distribution.pdf_multiple(points));
}

/// Evaluates the cdf of a [StudentT] distribution at every point.
///
/// `degrees_of_freedom` is requiered. If the incomplete beta function fails
/// to converge at any point, [DistError::NumericalError] is returned.
#[bon::builder]
pub fn cumulative_t(points: &[f64], degrees_of_freedom: f64) -> Result<Vec<f64>, DistError> {
    let distribution: StudentT = StudentT::new(degrees_of_freedom)?;
    check_points(points)?;
    return distribution.try_cdf_multiple(points);
}

// F

/// Evaluates the pdf of an [F] distribution at every point.
///
/// `d1` and `d2` are requiered.
#[bon::builder]
pub fn density_f(points: &[f64], d1: f64, d2: f64) -> Result<Vec<f64>, DistError> {
    let distribution: F = F::new(d1, d2)?;
    check_points(points)?;
    return Ok(distribution.pdf_multiple(points));
}

/// Evaluates the cdf of an [F] distribution at every point.
///
/// `d1` and `d2` are requiered. If the incomplete beta function fails
/// to converge at any point, [DistError::NumericalError] is returned.
#[bon::builder]
pub fn cumulative_f(points: &[f64], d1: f64, d2: f64) -> Result<Vec<f64>, DistError> {
    let distribution: F = F::new(d1, d2)?;
    check_points(points)?;
    return distribution.try_cdf_multiple(points);
}
