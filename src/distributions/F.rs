//! # The F distribution
//!
//! The [F distribution](https://en.wikipedia.org/wiki/F-distribution) is a
//! continuous probability distribution.
//!
//! It has 2 parameters: degrees_of_freedom_1 and degrees_of_freedom_2 (d1 and d2 reps.).
//!
//! If we have 2 independent random variables c_1 and c_2 wich have a
//! [Chi Squared](https://en.wikipedia.org/wiki/Chi-squared_distribution)
//! distribution with d1 and d2 degrees of freedom respectively, then:
//!
//! > (c_1 / d_1) / (c_2 / d2)
//!
//! Will have an F distribution. This statisitc plays a key role in the ANOVA test.
//!

use crate::{
    configuration,
    distribution_trait::Distribution,
    domain::ContinuousDomain,
    errors::DistError,
    euclid::{self, ln_beta},
};

pub const F_DOMAIN: ContinuousDomain = ContinuousDomain::From(0.0);

#[derive(Debug, Clone, PartialEq)]
pub struct F {
    d1: f64,
    d2: f64,
    /// `ln(B(d1/2, d2/2))`
    ln_beta: f64,
}

impl F {
    /// Creates a new [F] distribution with parameters `d1` and `d2`.
    /// Where `d1` is the degrees of freedom of the numerator and `d2` are
    /// the degrees of freedom of the denominator.
    ///
    ///
    /// It will return error under the following conditions:
    ///  - `d1` or `d2` is a NaN ([DistError::NanErr])
    ///  - `d1` or `d2` is `+-inf` ([DistError::InvalidNumber])
    ///  - `d1 <= 0.0` or `d2 <= 0.0` ([DistError::DomainErr])
    ///  - The values for `d1` and `d2` are too large to model properly ([DistError::NumericalError])
    ///      - This means that a [f64] value is not precise enough.
    ///      - Any of them above [configuration::F_DEGREES_OF_FREEDOM_LIMIT].
    ///
    pub fn new(d1: f64, d2: f64) -> Result<F, DistError> {
        for value in [d1, d2] {
            if let Some(error) = DistError::classify_non_finite(value) {
                log::debug!("Rejected F parameters d1 = {d1}, d2 = {d2}: {error}");
                return Err(error);
            }
        }

        if d1 <= 0.0 || d2 <= 0.0 {
            log::debug!("Rejected F parameters d1 = {d1}, d2 = {d2}: must be positive. ");
            return Err(DistError::DomainErr);
        }

        if configuration::F_DEGREES_OF_FREEDOM_LIMIT < d1.max(d2) {
            log::debug!(
                "Rejected F parameters d1 = {d1}, d2 = {d2}: above the limit of {} degrees of freedom. ",
                configuration::F_DEGREES_OF_FREEDOM_LIMIT
            );
            return Err(DistError::NumericalError);
        }

        let ln_beta: f64 = ln_beta(d1 * 0.5, d2 * 0.5);

        if !ln_beta.is_finite() {
            // we do not have enough precision to do the computations
            log::debug!("Rejected F parameters d1 = {d1}, d2 = {d2}: ln(B(d1/2, d2/2)) = {ln_beta}");
            return Err(DistError::NumericalError);
        }

        return Ok(F { d1, d2, ln_beta });
    }

    /// Creates a new [F] distribution without checking for correctness
    /// with parameters `d1` and `d2`.
    ///
    /// ## Safety
    ///
    /// If the following conditions are not fullfiled, the returned distribution
    /// will be invalid.
    ///
    ///  - `d1` and `d2` are finite (no `+-inf` or a NaN)
    ///  - `0.0 < d1` and `0.0 < d2`
    ///  - `d1` and `d2` are at most [configuration::F_DEGREES_OF_FREEDOM_LIMIT]
    ///
    #[must_use]
    pub unsafe fn new_unchecked(d1: f64, d2: f64) -> F {
        return F {
            d1,
            d2,
            ln_beta: ln_beta(d1 * 0.5, d2 * 0.5),
        };
    }

    #[must_use]
    pub const fn get_d1(&self) -> f64 {
        return self.d1;
    }

    #[must_use]
    pub const fn get_d2(&self) -> f64 {
        return self.d2;
    }
}

impl Distribution for F {
    fn pdf(&self, x: f64) -> f64 {
        /*
            pdf(x | d1, d2) = sqrt( (d1*x)^d1 * d2^d2 / (d1*x + d2)^(d1+d2) ) / (x * B(d1/2, d2/2))

            Any of the powers overflows easly, so everything is done in log space:

            ln(pdf) = 0.5 * (d1 * ln(d1*x) + d2 * ln(d2) - (d1+d2) * ln(d1*x + d2)) - ln(x) - ln(B(d1/2, d2/2))
        */

        if x.is_nan() {
            return x;
        }

        if x <= 0.0 || x.is_infinite() {
            return 0.0;
        }

        let ln_x: f64 = x.ln();
        let ln_d1_x: f64 = self.d1.ln() + ln_x;
        let ln_d2: f64 = self.d2.ln();

        // ln(d1*x + d2) without computing d1*x + d2 (that could overflow)
        let ln_sum: f64 = if ln_d2 < ln_d1_x {
            ln_d1_x + (ln_d2 - ln_d1_x).exp().ln_1p()
        } else {
            ln_d2 + (ln_d1_x - ln_d2).exp().ln_1p()
        };

        let ln_num: f64 = self.d1.mul_add(ln_d1_x, self.d2 * ln_d2);
        let ln_den: f64 = (self.d1 + self.d2) * ln_sum;

        let ln_pdf: f64 = 0.5 * (ln_num - ln_den) - ln_x - self.ln_beta;
        return ln_pdf.exp();
    }

    fn get_domain(&self) -> &ContinuousDomain {
        return &F_DOMAIN;
    }

    fn cdf(&self, x: f64) -> f64 {
        return match self.try_cdf(x) {
            Ok(p) => p,
            Err(error) => {
                log::warn!(
                    "F cdf could not be computed at x = {x} (d1 = {}, d2 = {}): {error}",
                    self.d1,
                    self.d2
                );
                f64::NAN
            }
        };
    }

    fn try_cdf(&self, x: f64) -> Result<f64, DistError> {
        /*
            cdf(x | d1, d2) = I_z(d1/2, d2/2)

            z     = d1*x / (d1*x + d2) = 1 / (1 + d2 / (d1*x))
            1 - z =   d2 / (d1*x + d2) = 1 / (1 + (d1*x) / d2)

            The second forms stay in [0, 1] even if d1*x overflows to inf.
        */

        if x.is_nan() {
            return Err(DistError::NanErr);
        }

        if x <= 0.0 {
            return Ok(0.0);
        }

        if x.is_infinite() {
            return Ok(1.0);
        }

        let d1_x: f64 = self.d1 * x;
        let z: f64 = 1.0 / (1.0 + self.d2 / d1_x);
        let complement: f64 = 1.0 / (1.0 + d1_x / self.d2);

        return euclid::incomplete_beta_with_complement(z, complement, self.d1 * 0.5, self.d2 * 0.5);
    }

    fn expected_value(&self) -> Option<f64> {
        if self.d2 <= 2.0 {
            return None;
        }
        return Some(self.d2 / (self.d2 - 2.0));
    }

    fn variance(&self) -> Option<f64> {
        if self.d2 <= 4.0 {
            return None;
        }

        let d2_minus_2: f64 = self.d2 - 2.0;
        let num: f64 = 2.0 * self.d2 * self.d2 * (self.d1 + d2_minus_2);
        let den: f64 = self.d1 * d2_minus_2 * d2_minus_2 * (self.d2 - 4.0);
        return Some(num / den);
    }
}
