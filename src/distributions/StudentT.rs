//! # Student T
//!
//! The [Student T distribution](https://en.wikipedia.org/wiki/Student%27s_t-distribution#Probability_density_function)
//! is a continuous probability distribution.
//!
//! ### Parameters
//!
//! It has a single parameter, the degrees of freedom (usually denoted by the greek
//! letter `nu`).
//!  - The degrees of freedom is a stricly positive number (usually an integer).
//!  - If `nu = 1` then the distribution is a [Cauchy distribution](https://en.wikipedia.org/wiki/Cauchy_distribution).
//!  - If `nu` diverges to infinity, the distribution becomes a [standard normal distribution](crate::distributions::Normal).
//!

use std::f64;

use crate::{
    configuration,
    distribution_trait::Distribution,
    domain::ContinuousDomain,
    errors::DistError,
    euclid::{self, ln_gamma},
};

use super::Normal::StdNormal;

pub const STUDENT_T_DOMAIN: ContinuousDomain = ContinuousDomain::Reals;

#[derive(Debug, Clone, PartialEq)]
pub struct StudentT {
    degrees_of_freedom: f64,
    /// `ln(gamma((nu+1)/2) / (sqrt(pi*nu) * gamma(nu/2)))`
    ln_normalitzation_constant: f64,
}

impl StudentT {
    /// Create a [StudentT] distribution.
    ///
    /// `degrees_of_freedom` determines how *normal* does the distribution look.
    ///  - Must be finite (no `+-inf` nor NaN)
    ///  - Must be stricly positive (`0.0 < degrees_of_freedom`)
    ///  - Altough we accept a float, `degrees_of_freedom` almost always is an integer.
    ///
    /// ***
    ///
    /// Notes:
    ///  - A [StudentT] distribution with 1 degree of freedom is a [Cauchy distribution](https://en.wikipedia.org/wiki/Cauchy_distribution).
    ///  - A [StudentT] distribution with infinite degrees of freedom is a [standard normal distribution](crate::distributions::Normal).
    ///      - Above [configuration::STUDENT_T_NORMAL_LIMIT] degrees of freedom the
    ///         standard normal is used for all the computations.
    ///
    pub fn new(degrees_of_freedom: f64) -> Result<StudentT, DistError> {
        if let Some(error) = DistError::classify_non_finite(degrees_of_freedom) {
            log::debug!("Rejected StudentT degrees of freedom {degrees_of_freedom}: {error}");
            return Err(error);
        }

        if degrees_of_freedom <= 0.0 {
            log::debug!("Rejected StudentT degrees of freedom {degrees_of_freedom}: must be positive. ");
            return Err(DistError::DomainErr);
        }

        return Ok(StudentT {
            degrees_of_freedom,
            ln_normalitzation_constant: Self::compute_ln_normalitzation_constant(
                degrees_of_freedom,
            ),
        });
    }

    /// Create a [StudentT] distribution without checking for the corrrectness of the inputs.
    ///
    /// ## Safety
    ///
    /// `degrees_of_freedom` determines how *normal* does the distribution look.
    ///  - Must be finite (no `+-inf` nor NaN)
    ///  - Must be stricly positive (`0.0 < degrees_of_freedom`)
    ///
    /// If those conditions are not fullfiled, the returned distribution
    /// will be invalid.
    #[must_use]
    pub unsafe fn new_unchecked(degrees_of_freedom: f64) -> StudentT {
        return StudentT {
            degrees_of_freedom,
            ln_normalitzation_constant: Self::compute_ln_normalitzation_constant(
                degrees_of_freedom,
            ),
        };
    }

    /// Computes the logarithm of the normalitzation constant of the pdf.
    #[must_use]
    pub fn compute_ln_normalitzation_constant(degrees_of_freedom: f64) -> f64 {
        /*

        c = gamma((nu+1)/2) / (sqrt(pi*nu) * gamma(nu/2))
        ln(c) = ln(gamma((nu+1)/2) / (sqrt(pi*nu) * gamma(nu/2)))
        ln(c) = ln_gamma((nu+1)/2) - ln(sqrt(pi*nu)) - ln_gamma(nu/2)
        ln(c) = ln_gamma((nu+1)/2) - 0.5*ln(pi*nu) - ln_gamma(nu/2)

        The gamma functions overflow for nu > ~340, their logarithms do not.

         */

        return ln_gamma((degrees_of_freedom + 1.0) * 0.5)
            - ln_gamma(degrees_of_freedom * 0.5)
            - 0.5 * (f64::consts::PI * degrees_of_freedom).ln();
    }

    /// Returns the degrees_of_freedom.
    #[must_use]
    pub const fn get_degrees_of_freedom(&self) -> f64 {
        return self.degrees_of_freedom;
    }

    /// Returns the normalitzation constant of the pdf.
    #[must_use]
    pub fn get_normalitzation_constant(&self) -> f64 {
        return self.ln_normalitzation_constant.exp();
    }

    fn behaves_as_normal(&self) -> bool {
        return configuration::STUDENT_T_NORMAL_LIMIT < self.degrees_of_freedom;
    }
}

impl Distribution for StudentT {
    fn pdf(&self, x: f64) -> f64 {
        // let norm = gamma((nu+1)/2) / (sqrt(pi * nu) * gamma(nu/2))
        // pdf(x | nu) = norm(nu) * (1 + x^2 / nu) ^ (-(nu+1)/2)
        // ln(pdf(x | nu)) = ln(norm(nu)) - (nu+1)/2 * ln(1 + x^2 / nu)

        if self.behaves_as_normal() {
            return StdNormal::new().pdf(x);
        }

        let nu: f64 = self.degrees_of_freedom;
        let ln_base: f64 = (x * x / nu).ln_1p();
        let exponent: f64 = -(nu + 1.0) * 0.5;
        return exponent.mul_add(ln_base, self.ln_normalitzation_constant).exp();
    }

    fn get_domain(&self) -> &ContinuousDomain {
        return &STUDENT_T_DOMAIN;
    }

    fn cdf(&self, x: f64) -> f64 {
        return match self.try_cdf(x) {
            Ok(p) => p,
            Err(error) => {
                log::warn!(
                    "StudentT cdf could not be computed at x = {x} (nu = {}): {error}",
                    self.degrees_of_freedom
                );
                f64::NAN
            }
        };
    }

    fn try_cdf(&self, x: f64) -> Result<f64, DistError> {
        /*
            z = nu / (nu + x^2) = 1 / (1 + x^2 / nu)
            1 - z = x^2 / (nu + x^2) = 1 / (1 + nu / x^2)

            cdf(x) = 1 - 0.5 * I_z(nu/2, 1/2)     if 0 <= x
            cdf(x) = 0.5 * I_z(nu/2, 1/2)         if x < 0

            For small x, z rounds to 1, so the complement is given
            explicitly to the incomplete beta.

            For x = 0, z = 1 and I_1 = 1 exacly, so cdf(0) = 0.5 exacly.
            For x = +-inf, z = 0 and I_0 = 0 exacly.
        */

        if x.is_nan() {
            return Err(DistError::NanErr);
        }

        if self.behaves_as_normal() {
            return Ok(StdNormal::new().cdf(x));
        }

        let nu: f64 = self.degrees_of_freedom;
        let x_squared: f64 = x * x;
        let z: f64 = 1.0 / (1.0 + x_squared / nu);
        let complement: f64 = 1.0 / (1.0 + nu / x_squared);
        let half_tail: f64 = 0.5 * euclid::incomplete_beta_with_complement(z, complement, nu * 0.5, 0.5)?;

        return Ok(if x < 0.0 { half_tail } else { 1.0 - half_tail });
    }

    fn expected_value(&self) -> Option<f64> {
        return if 1.0 < self.degrees_of_freedom {
            Some(0.0)
        } else {
            None
        };
    }

    fn variance(&self) -> Option<f64> {
        return if 2.0 < self.degrees_of_freedom {
            Some(self.degrees_of_freedom / (self.degrees_of_freedom - 2.0))
        } else if 1.0 < self.degrees_of_freedom {
            Some(f64::INFINITY)
        } else {
            // (dof <= 1)
            None
        };
    }
}
