//! Euclid contains the special functions and other uscefull math used by the distributions.
//!
//! The cdf of the [Normal](crate::distributions::Normal), the
//! [StudentT](crate::distributions::StudentT) and the [F](crate::distributions::F)
//! distributions do not have an elementary closed form. They are all expressed
//! trough a few [special functions](https://en.wikipedia.org/wiki/Special_functions):
//!
//!  - The [error function](https://en.wikipedia.org/wiki/Error_function) ([erf])
//!     and it's complement ([erfc]).
//!  - The logarithm of the [gamma function](https://en.wikipedia.org/wiki/Gamma_function) ([ln_gamma]).
//!  - The [regularized incomplete gamma function](https://en.wikipedia.org/wiki/Incomplete_gamma_function#Regularized_gamma_functions_and_Poisson_random_variables)
//!     ([regularized_gamma_lower] and [regularized_gamma_upper]).
//!  - The [regularized incomplete beta function](https://en.wikipedia.org/wiki/Beta_function#Incomplete_beta_function)
//!     ([incomplete_beta] and [incomplete_beta_with_complement]).
//!
//! None of the functions keeps any state between calls.
//!

use std::f64::consts::PI;

use crate::{
    configuration::special_functions::{
        CONTINUED_FRACTION_MAX_ITERATIONS, CONVERGENCE_EPSILON, INCOMPLETE_BETA_DOMAIN_TOLERANCE,
        LENTZ_TINY, SERIES_MAX_ITERATIONS,
    },
    errors::DistError,
};

/// `sqrt(2)`
pub const SQRT_2: f64 = std::f64::consts::SQRT_2;
/// `sqrt(2 * pi)`
pub const SQRT_2_PI: f64 = 2.506_628_274_631_000_5;
/// `1 / sqrt(2 * pi)`
pub const INV_SQRT_2_PI: f64 = 0.398_942_280_401_432_7;
/// `ln(sqrt(2 * pi))`
pub const LN_SQRT_2_PI: f64 = 0.918_938_533_204_672_7;

/// The shift `g` of the Lanczos approximation.
const LANCZOS_G: f64 = 7.0;

/// Coefitients for the Lanczos approximation with `g = 7` and `n = 9`.
const LANCZOS_COEFFICIENTS: [f64; 9] = [
    0.999_999_999_999_809_93,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_13,
    -176.615_029_162_140_59,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_571_6e-6,
    1.505_632_735_149_311_6e-7,
];

/// The [error function](https://en.wikipedia.org/wiki/Error_function).
///
/// > erf(x) = 2/sqrt(pi) * integral {0 -> x} exp(-t^2) dt
///
/// It is computed trough the regularized lower incomplete gamma function:
/// `erf(x) = sign(x) * P(1/2, x^2)`, wich gives a precision close to [f64::EPSILON].
///
///  - `erf(0.0) = 0.0` exacly.
///  - `erf(+-inf) = +-1.0`.
///  - NaNs are propagated.
#[must_use]
pub fn erf(x: f64) -> f64 {
    if x.is_nan() || x == 0.0 {
        return x;
    }

    let x_squared: f64 = x * x;
    if !x_squared.is_finite() {
        return x.signum();
    }

    let p: f64 = if x_squared < 1.5 {
        gamma_series(0.5, x_squared)
    } else {
        1.0 - gamma_continued_fraction(0.5, x_squared)
    };

    return if x < 0.0 { -p } else { p };
}

/// The [complementary error function](https://en.wikipedia.org/wiki/Error_function#Complementary_error_function).
///
/// > erfc(x) = 1 - erf(x)
///
/// The upper tail is evaluated direcly with the continued fraction of the
/// regularized upper incomplete gamma function `Q(1/2, x^2)`, so there is no
/// catastrophic cancellation for large `x` (`1 - erf(x)` would just be `0.0`
/// for `x > 6`).
///
///  - `erfc(0.0) = 1.0` exacly.
///  - `erfc(+inf) = 0.0` and `erfc(-inf) = 2.0`.
///  - NaNs are propagated.
#[must_use]
pub fn erfc(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }

    if x == 0.0 {
        return 1.0;
    }

    let x_squared: f64 = x * x;
    if !x_squared.is_finite() {
        return if 0.0 < x { 0.0 } else { 2.0 };
    }

    // q = erfc(|x|)
    let q: f64 = if x_squared < 1.5 {
        // P(1/2, 1.5) ~= 0.917, no cancellation here
        1.0 - gamma_series(0.5, x_squared)
    } else {
        gamma_continued_fraction(0.5, x_squared)
    };

    // erfc(-x) = 2 - erfc(x)
    return if x < 0.0 { 2.0 - q } else { q };
}

/// The natural logarithm of the [gamma function](https://en.wikipedia.org/wiki/Gamma_function)
/// for `0.0 < x`.
///
/// Uses the [Lanczos approximation](https://en.wikipedia.org/wiki/Lanczos_approximation)
/// with `g = 7` (relative error of around `1e-15`) and the
/// [reflection formula](https://en.wikipedia.org/wiki/Gamma_function#Euler's_reflection_formula)
/// for `x < 0.5`.
///
/// Working with the logarithm allows to build ratios of gamma functions
/// (like the beta function) with large arguments without overflowing.
///
/// Returns `+inf` if `x <= 0.0` (poles or outside of the domain) and NaN for NaNs.
#[must_use]
pub fn ln_gamma(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }

    if x <= 0.0 || x.is_infinite() {
        return f64::INFINITY;
    }

    if x < 0.5 {
        // gamma(x) * gamma(1 - x) = pi / sin(pi * x)
        // sin(pi * x) is positive in (0, 0.5)
        return (PI / (PI * x).sin()).ln() - ln_gamma(1.0 - x);
    }

    let z: f64 = x - 1.0;
    let mut series: f64 = LANCZOS_COEFFICIENTS[0];
    for (i, coef) in LANCZOS_COEFFICIENTS.iter().enumerate().skip(1) {
        series += coef / (z + i as f64);
    }

    let t: f64 = z + LANCZOS_G + 0.5;
    return LN_SQRT_2_PI + (z + 0.5) * t.ln() - t + series.ln();
}

/// The natural logarithm of the [beta function](https://en.wikipedia.org/wiki/Beta_function).
///
/// > ln(B(a, b)) = ln_gamma(a) + ln_gamma(b) - ln_gamma(a + b)
#[must_use]
pub fn ln_beta(a: f64, b: f64) -> f64 {
    return ln_gamma(a) + ln_gamma(b) - ln_gamma(a + b);
}

/// The [beta function](https://en.wikipedia.org/wiki/Beta_function) `B(a, b)`.
///
/// Computed as `exp(ln_beta(a, b))` to avoid overflows in the intermediate
/// gamma functions.
#[must_use]
pub fn beta_fn(a: f64, b: f64) -> f64 {
    return ln_beta(a, b).exp();
}

/// The [regularized lower incomplete gamma function](https://en.wikipedia.org/wiki/Incomplete_gamma_function#Regularized_gamma_functions_and_Poisson_random_variables)
///
/// > P(a, x) = 1/gamma(a) * integral {0 -> x} t^(a-1) * exp(-t) dt
///
///  - `a` must be stricly positive and finite.
///  - `x` must be non-negative (`+inf` is accepted and gives `1.0`).
#[must_use = "The result may be an error"]
pub fn regularized_gamma_lower(a: f64, x: f64) -> Result<f64, DistError> {
    check_gamma_arguments(a, x)?;

    if x == 0.0 {
        return Ok(0.0);
    }
    if x.is_infinite() {
        return Ok(1.0);
    }

    let ret: f64 = if x < a + 1.0 {
        gamma_series(a, x)
    } else {
        1.0 - gamma_continued_fraction(a, x)
    };

    return Ok(ret.clamp(0.0, 1.0));
}

/// The [regularized upper incomplete gamma function](https://en.wikipedia.org/wiki/Incomplete_gamma_function#Regularized_gamma_functions_and_Poisson_random_variables)
///
/// > Q(a, x) = 1 - P(a, x)
///
/// The upper tail is computed direcly (not as `1 - P`) when `a + 1 <= x`.
///
///  - `a` must be stricly positive and finite.
///  - `x` must be non-negative (`+inf` is accepted and gives `0.0`).
#[must_use = "The result may be an error"]
pub fn regularized_gamma_upper(a: f64, x: f64) -> Result<f64, DistError> {
    check_gamma_arguments(a, x)?;

    if x == 0.0 {
        return Ok(1.0);
    }
    if x.is_infinite() {
        return Ok(0.0);
    }

    let ret: f64 = if x < a + 1.0 {
        1.0 - gamma_series(a, x)
    } else {
        gamma_continued_fraction(a, x)
    };

    return Ok(ret.clamp(0.0, 1.0));
}

fn check_gamma_arguments(a: f64, x: f64) -> Result<(), DistError> {
    if a.is_nan() || x.is_nan() {
        return Err(DistError::NanErr);
    }
    if a.is_infinite() {
        return Err(DistError::InvalidNumber);
    }
    if a <= 0.0 || x < 0.0 {
        return Err(DistError::DomainErr);
    }
    return Ok(());
}

/// `ln(x^a * exp(-x) / gamma(a))`, the common factor of the series and the
/// continued fraction of the incomplete gamma function.
fn ln_gamma_prefactor(a: f64, x: f64) -> f64 {
    return a * x.ln() - x - ln_gamma(a);
}

/// P(a, x) with the power series. Converges fast for `x < a + 1`.
fn gamma_series(a: f64, x: f64) -> f64 {
    /*
        P(a, x) = x^a * exp(-x) / gamma(a) * sum {n = 0 -> inf} x^n / (a * (a+1) * ... * (a+n))
    */
    let mut denominator: f64 = a;
    let mut term: f64 = 1.0 / a;
    let mut sum: f64 = term;

    let mut converged: bool = false;
    for _ in 0..SERIES_MAX_ITERATIONS {
        denominator += 1.0;
        term *= x / denominator;
        sum += term;
        if term.abs() < sum.abs() * CONVERGENCE_EPSILON {
            converged = true;
            break;
        }
    }

    if !converged {
        log::warn!("Incomplete gamma series did not converge for a = {a}, x = {x}. ");
    }

    return sum * ln_gamma_prefactor(a, x).exp();
}

/// Q(a, x) with the continued fraction (modified Lentz). Converges fast for `a + 1 <= x`.
fn gamma_continued_fraction(a: f64, x: f64) -> f64 {
    /*
        Q(a, x) = x^a * exp(-x) / gamma(a) * (1 / (x + 1 - a - (1 * (1 - a)) / (x + 3 - a - (2 * (2 - a)) / (x + 5 - a - ...))))
    */
    let mut b: f64 = x + 1.0 - a;
    let mut c: f64 = 1.0 / LENTZ_TINY;
    let mut d: f64 = 1.0 / b;
    let mut h: f64 = d;

    let mut converged: bool = false;
    for i in 1..=CONTINUED_FRACTION_MAX_ITERATIONS {
        let i_f: f64 = i as f64;
        let an: f64 = -i_f * (i_f - a);
        b += 2.0;

        d = an.mul_add(d, b);
        if d.abs() < LENTZ_TINY {
            d = LENTZ_TINY;
        }
        c = b + an / c;
        if c.abs() < LENTZ_TINY {
            c = LENTZ_TINY;
        }
        d = 1.0 / d;

        let delta: f64 = d * c;
        h *= delta;
        if (delta - 1.0).abs() < CONVERGENCE_EPSILON {
            converged = true;
            break;
        }
    }

    if !converged {
        log::warn!("Incomplete gamma continued fraction did not converge for a = {a}, x = {x}. ");
    }

    return h * ln_gamma_prefactor(a, x).exp();
}

/// The [regularized incomplete beta function](https://en.wikipedia.org/wiki/Beta_function#Incomplete_beta_function)
/// `I_x(a, b)`.
///
/// > I_x(a, b) = 1/B(a, b) * integral {0 -> x} t^(a-1) * (1-t)^(b-1) dt
///
///  - `x` must be in `[0.0, 1.0]`. Values that are outside by less than
///     [INCOMPLETE_BETA_DOMAIN_TOLERANCE] (rounding errors) are clamped.
///  - `a` and `b` must be stricly positive and finite.
///
/// `I_0(a, b) = 0.0` and `I_1(a, b) = 1.0` exacly.
///
/// The function is evaluated with a [continued fraction](https://en.wikipedia.org/wiki/Beta_function#Continued_fraction_expansion)
/// using the modified Lentz's method. The continued fraction converges fast for
/// `x < (a + 1) / (a + b + 2)`. For larger `x` we use the symmetry
///
/// > I_x(a, b) = 1 - I_(1-x)(b, a)
///
/// wich keeps the expansion convergent close to `x = 1`.
///
/// ## Errors
///
///  - [DistError::NanErr] if any input is NaN.
///  - [DistError::InvalidNumber] if `a` or `b` are infinite.
///  - [DistError::DomainErr] if `a <= 0`, `b <= 0` or `x` outside `[0, 1]`.
///  - [DistError::NumericalError] if the continued fraction did not converge in
///     [CONTINUED_FRACTION_MAX_ITERATIONS].
#[must_use = "The result may be an error"]
pub fn incomplete_beta(x: f64, a: f64, b: f64) -> Result<f64, DistError> {
    return incomplete_beta_with_complement(x, 1.0 - x, a, b);
}

/// Same as [incomplete_beta] but the caller also gives `complement = 1 - x`.
///
/// If `x` is very close to `1.0`, `1.0 - x` loses most of it's significant
/// digits (or is just `0.0`). When the caller can compute the complement
/// direcly (for example `x = p / (p + q)` and `complement = q / (p + q)`)
/// the symmetric branch keeps full precision.
///
/// `x + complement` must be `1.0` (up to rounding), otherwise the result is
/// meaningless. Both values follow the same domain rules as `x` in [incomplete_beta].
#[must_use = "The result may be an error"]
pub fn incomplete_beta_with_complement(
    x: f64,
    complement: f64,
    a: f64,
    b: f64,
) -> Result<f64, DistError> {
    if x.is_nan() || complement.is_nan() || a.is_nan() || b.is_nan() {
        return Err(DistError::NanErr);
    }

    if a.is_infinite() || b.is_infinite() {
        return Err(DistError::InvalidNumber);
    }

    if a <= 0.0 || b <= 0.0 {
        return Err(DistError::DomainErr);
    }

    for value in [x, complement] {
        if value < -INCOMPLETE_BETA_DOMAIN_TOLERANCE || 1.0 + INCOMPLETE_BETA_DOMAIN_TOLERANCE < value {
            return Err(DistError::DomainErr);
        }
    }

    let x: f64 = x.clamp(0.0, 1.0);
    let complement: f64 = complement.clamp(0.0, 1.0);

    if x == 0.0 {
        return Ok(0.0);
    }
    if x == 1.0 || complement == 0.0 {
        return Ok(1.0);
    }

    let ret: f64 = if (a + 1.0) / (a + b + 2.0) < x {
        1.0 - beta_continued_fraction(complement, x, b, a)?
    } else {
        beta_continued_fraction(x, complement, a, b)?
    };

    return Ok(ret.clamp(0.0, 1.0));
}

/// Evaluates `I_x(a, b)` with the continued fraction, `y = 1 - x`.
/// Only precise if `x <= (a + 1) / (a + b + 2)`.
fn beta_continued_fraction(x: f64, y: f64, a: f64, b: f64) -> Result<f64, DistError> {
    /*
        I_x(a, b) = x^a * (1-x)^b / (a * B(a, b)) * 1 / (1 + d_1 / (1 + d_2 / (1 + ...)))

        d_(2m)   =        m * (b - m) * x / ((a + 2m - 1) * (a + 2m))
        d_(2m+1) = -(a + m) * (a + b + m) * x / ((a + 2m) * (a + 2m + 1))

        The prefactor is computed in log space.
    */

    // use the smallest of x and y to get the logarithms
    let ln_x: f64 = if y < 0.5 { (-y).ln_1p() } else { x.ln() };
    let ln_y: f64 = if x < 0.5 { (-x).ln_1p() } else { y.ln() };

    let ln_prefactor: f64 = a.mul_add(ln_x, b * ln_y) - ln_beta(a, b);
    let prefactor: f64 = ln_prefactor.exp() / a;

    let a_plus_b: f64 = a + b;
    let a_plus_one: f64 = a + 1.0;
    let a_minus_one: f64 = a - 1.0;

    // first step: d_1 = -(a + b) * x / (a + 1)
    let mut c: f64 = 1.0;
    let mut d: f64 = 1.0 - a_plus_b * x / a_plus_one;
    if d.abs() < LENTZ_TINY {
        d = LENTZ_TINY;
    }
    d = 1.0 / d;
    let mut h: f64 = d;

    for m in 1..=CONTINUED_FRACTION_MAX_ITERATIONS {
        let m_f: f64 = m as f64;
        let two_m: f64 = 2.0 * m_f;

        // even step
        let even: f64 = m_f * (b - m_f) * x / ((a_minus_one + two_m) * (a + two_m));
        d = even.mul_add(d, 1.0);
        if d.abs() < LENTZ_TINY {
            d = LENTZ_TINY;
        }
        c = 1.0 + even / c;
        if c.abs() < LENTZ_TINY {
            c = LENTZ_TINY;
        }
        d = 1.0 / d;
        h *= d * c;

        // odd step
        let odd: f64 = -(a + m_f) * (a_plus_b + m_f) * x / ((a + two_m) * (a_plus_one + two_m));
        d = odd.mul_add(d, 1.0);
        if d.abs() < LENTZ_TINY {
            d = LENTZ_TINY;
        }
        c = 1.0 + odd / c;
        if c.abs() < LENTZ_TINY {
            c = LENTZ_TINY;
        }
        d = 1.0 / d;

        let delta: f64 = d * c;
        h *= delta;

        if (delta - 1.0).abs() < CONVERGENCE_EPSILON {
            log::trace!("Incomplete beta converged after {m} iterations (x = {x}, a = {a}, b = {b}). ");
            return Ok(prefactor * h);
        }
    }

    log::warn!(
        "Incomplete beta continued fraction did not converge after {CONTINUED_FRACTION_MAX_ITERATIONS} iterations (x = {x}, a = {a}, b = {b}). "
    );
    return Err(DistError::NumericalError);
}

/// Numerical integration of `func` over the finite interval `bounds` with
/// the composite [Simpson's rule](https://en.wikipedia.org/wiki/Simpson%27s_rule#Composite_Simpson's_1/3_rule).
///
/// `num_steps` is the number of subintervals. It is rounded up to the next
/// even number since Simpson's rule needs pairs of subintervals. If you do not
/// know wich value to use, [crate::configuration::DEFAULT_INTEGRATION_NUM_STEPS]
/// is a good start.
///
/// Both bounds must be finite.
#[must_use]
pub fn numerical_integration_finite(
    func: impl Fn(f64) -> f64,
    bounds: (f64, f64),
    num_steps: u64,
) -> f64 {
    let num_steps: u64 = match num_steps {
        0 => 2,
        n if n % 2 == 1 => n + 1,
        n => n,
    };

    let step_length: f64 = (bounds.1 - bounds.0) / num_steps as f64;

    let mut odd_acc: f64 = 0.0;
    let mut even_acc: f64 = 0.0;
    for i in 1..num_steps {
        let value: f64 = func(bounds.0 + step_length * i as f64);
        if i % 2 == 1 {
            odd_acc += value;
        } else {
            even_acc += value;
        }
    }

    let total: f64 = func(bounds.0) + func(bounds.1) + 4.0 * odd_acc + 2.0 * even_acc;
    return total * step_length / 3.0;
}
