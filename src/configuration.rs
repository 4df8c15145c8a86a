//! This file contains the deafult values and other numerical choices used trough the library.
//!
//! All the values are immutable, so every function of the library can be
//! called concurrently without any synchronitzation.
//!

/// Settings for the iterative methods (power series and continued fractions)
/// used by the special functions in [crate::euclid].
///
/// The continued fractions are evaluated with the
/// [modified Lentz's method](https://en.wikipedia.org/wiki/Lentz%27s_algorithm).
/// Lentz's method needs a tiny number to replace any denominator that becomes
/// exacly `0.0`, this is [LENTZ_TINY].
pub mod special_functions {

    /// The maximum number of iterations of a continued fraction before giving up.
    ///
    /// After the symmetry transform of the incomplete beta function the number of
    /// iterations grows like `sqrt(max(a, b))`, so this is plenty for any
    /// reasonable degrees of freedom.
    pub static CONTINUED_FRACTION_MAX_ITERATIONS: usize = 10_000;

    /// The maximum number of terms of a power series before giving up.
    pub static SERIES_MAX_ITERATIONS: usize = 10_000;

    /// Relative precision at wich an iterative method is considered converged.
    ///
    /// It is a small multiple of [f64::EPSILON].
    pub static CONVERGENCE_EPSILON: f64 = 4.0 * f64::EPSILON;

    /// Replacement for denominators that become `0.0` in Lentz's method.
    pub static LENTZ_TINY: f64 = 1.0e-300;

    /// Values of `x` slightly outside `[0, 1]` (because of floating point rounding)
    /// are accepted by [crate::euclid::incomplete_beta] and clamped if they are
    /// at most this far away from the interval.
    pub static INCOMPLETE_BETA_DOMAIN_TOLERANCE: f64 = 1.0e-12;
}

/// If the degrees of freedom of a [StudentT](crate::distributions::StudentT::StudentT)
/// are larger than this value, the standard normal is used instead.
///
/// The difference between both is of order `1/nu`, and for such large values
/// the Lanczos log-gamma differences lose more precision than that.
pub static STUDENT_T_NORMAL_LIMIT: f64 = 1.0e7;

/// The maximum degrees of freedom (`d1` and `d2`) accepted by an
/// [F](crate::distributions::F::F) distribution.
///
/// `ln(B(d1/2, d2/2))` is a difference of log-gamma values that grow like
/// `d * ln(d)`, so above this value the cancellation leaves less than
/// `1e-8` of absolute precision and the continued fraction of the incomplete
/// beta function gets too close to [special_functions::CONTINUED_FRACTION_MAX_ITERATIONS].
pub static F_DEGREES_OF_FREEDOM_LIMIT: f64 = 1.0e6;

/// The number of steps used for [crate::euclid::numerical_integration_finite]
/// when no other value is given.
///
/// `(1 << 16) + 1 = 65 537`, rounded up to an even number of subintervals.
pub static DEFAULT_INTEGRATION_NUM_STEPS: usize = (1 << 16) + 1;
