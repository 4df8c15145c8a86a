#![allow(
    non_snake_case,
    clippy::needless_return,
    clippy::assign_op_pattern,
    clippy::excessive_precision
)]

#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
)]
// ^Disable warning "crate `TheoreticalDistributions` should have a snake case name"
// and allow the distribution modules to be named after the distribution.
// The rest of the names will follow the snake_case convention.

//! # Theoretical Distributions
//!
//! A small library to evaluate the theoretical (continuous) probability
//! distributions used in statistical computing.
//!
//! For each distribution we provide:
//!
//!  - The **density** (pdf) evaluated over a whole sequence of points.
//!  - The **cumulative** distribution (cdf) evaluated over a whole sequence of points.
//!  - A **generator** of random variates (only for the Uniform and the Normal).
//!
//! The main entry point are the builders of the [vectorized] module (re-exported here):
//!
//! | Distribution | density | cumulative | generate |
//! |---|---|---|---|
//! | [Uniform](distributions::Uniform) ([Wiki](https://en.wikipedia.org/wiki/Continuous_uniform_distribution)) | [density_uniform] | [cumulative_uniform] | [generate_uniform] |
//! | [Normal](distributions::Normal) ([Wiki](https://en.wikipedia.org/wiki/Normal_distribution)) | [density_normal] | [cumulative_normal] | [generate_normal] |
//! | [Student's T](distributions::StudentT) ([Wiki](https://en.wikipedia.org/wiki/Student%27s_t-distribution)) | [density_t] | [cumulative_t] | - |
//! | [F](distributions::F) ([Wiki](https://en.wikipedia.org/wiki/F-distribution)) | [density_f] | [cumulative_f] | - |
//!
//! ```
//! use TheoreticalDistributions::{cumulative_t, samples::seq};
//!
//! let points: Vec<f64> = seq(-5.0, 5.0, 11);
//! let cdf: Vec<f64> = cumulative_t().points(&points).degrees_of_freedom(3.0).call().unwrap();
//! assert_eq!(cdf[5], 0.5);
//! ```
//!
//! If you want to work with a single distribution, the structures in
//! [distributions] implement the [Distribution](distribution_trait::Distribution)
//! trait (and [Sampling](distribution_trait::Sampling) when they can be sampled).
//!
//! The special functions needed (error function, log-gamma,
//! regularized incomplete beta...) are in [euclid].
//!
//! ## Logging
//!
//! The library logs through the [log] facade: rejected parameters at `debug`
//! level and numerical methods that do not converge at `warn` level. No logger
//! is installed, that is up to the final binary.
//!
//! ***
//!

pub mod configuration;
pub mod distribution_trait;
pub mod distributions;
pub mod domain;
pub mod errors;
pub mod euclid;
pub mod samples;
pub mod vectorized;

pub use vectorized::*;
