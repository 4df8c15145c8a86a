//! Tests of the vectorized interface.
//!
//! The reference values are the ones given by the usual `dnorm`, `pnorm`, `dt`,
//! `pt`, `df`, `pf`, `dunif` and `punif` over the same sequences of points.
//!

use TheoreticalDistributions::{
    errors::DistError,
    euclid,
    samples::{Samples, seq},
    *,
};
use assert_approx_eq::assert_approx_eq;

#[inline]
fn assert_close(value: f64, expected: f64, eps: f64) {
    assert!(
        (value - expected).abs() < eps,
        "assertion failed: `(left !== right)` \
         (left: `{:?}`, right: `{:?}`, expect diff: `{:?}`, real diff: `{:?}`)",
        value,
        expected,
        eps,
        (value - expected).abs()
    );
}

#[cfg(test)]
mod uniform_tests {
    use super::*;

    #[test]
    fn density_standard() {
        let points: Vec<f64> = seq(0.0, 1.0, 1_000_000);
        let density: Vec<f64> = density_uniform().points(&points).call().unwrap();

        assert_eq!(density.len(), points.len());
        assert!(density.iter().all(|&d| d == 1.0));
    }

    #[test]
    fn density_shifted() {
        let points: Vec<f64> = seq(10.0, 100.0, 1_000_000);
        let density: Vec<f64> = density_uniform()
            .points(&points)
            .a(10.0)
            .b(100.0)
            .call()
            .unwrap();

        assert!(density.iter().all(|&d| d == 1.0 / 90.0));

        let area: f64 = euclid::numerical_integration_finite(
            |x: f64| density_uniform().points(&[x]).a(10.0).b(100.0).call().unwrap()[0],
            (10.0, 100.0),
            10_000,
        );
        assert_close(area, 1.0, 1.0e-9);
    }

    #[test]
    fn density_outside_support() {
        let density: Vec<f64> = density_uniform()
            .points(&[10.0 - 1.0e-7, 100.0 + 1.0e-7])
            .a(10.0)
            .b(100.0)
            .call()
            .unwrap();
        assert_eq!(density, vec![0.0, 0.0]);
    }

    #[test]
    fn cumulative_standard() {
        let points: Vec<f64> = seq(0.0, 1.0, 1_000_000);
        let n: usize = points.len();
        let cdf: Vec<f64> = cumulative_uniform().points(&points).call().unwrap();

        assert_eq!(cdf[0], 0.0);
        assert_eq!(cdf[n - 1], 1.0);
        assert_close(cdf[n / 2], 0.5, 1.0e-5);

        assert!(cdf.windows(2).all(|w| w[0] <= w[1]));
        assert!(cdf.iter().all(|&p| (0.0..=1.0).contains(&p)));
    }

    #[test]
    fn cumulative_saturates() {
        let cdf: Vec<f64> = cumulative_uniform().points(&[-1.0, 1.0]).call().unwrap();
        assert_eq!(cdf, vec![0.0, 1.0]);

        let cdf: Vec<f64> = cumulative_uniform()
            .points(&[0.0, 110.0])
            .a(10.0)
            .b(100.0)
            .call()
            .unwrap();
        assert_eq!(cdf, vec![0.0, 1.0]);
    }

    #[test]
    fn generate() {
        let n: usize = 1_000_000;

        for (a, b) in [(0.0, 1.0), (10.0, 20.0)] {
            let mut samples: Samples =
                Samples::new_move(generate_uniform().n(n).a(a).b(b).call().unwrap()).unwrap();

            assert_eq!(samples.count(), n);
            assert!(a < samples.minimum().unwrap());
            assert!(samples.maximum().unwrap() < b);
            assert_close(samples.mean().unwrap(), 0.5 * (a + b), 0.01 * (b - a));
        }
    }

    #[test]
    fn range_too_large() {
        assert_eq!(
            density_uniform().points(&[0.0]).a(-1.0e308).b(1.0e308).call(),
            Err(DistError::NumericalError)
        );
        assert_eq!(
            cumulative_uniform().points(&[0.0]).a(-1.0e308).b(1.0e308).call(),
            Err(DistError::NumericalError)
        );
        assert_eq!(
            generate_uniform().n(10).a(-1.0e308).b(1.0e308).call(),
            Err(DistError::NumericalError)
        );

        // the largest ranges that can be represented still work
        let density: Vec<f64> = density_uniform()
            .points(&[0.0])
            .a(-8.0e307)
            .b(8.0e307)
            .call()
            .unwrap();
        assert!(0.0 < density[0]);
        let cdf: Vec<f64> = cumulative_uniform()
            .points(&[0.0])
            .a(-8.0e307)
            .b(8.0e307)
            .call()
            .unwrap();
        assert_eq!(cdf, vec![0.5]);
    }

    #[test]
    fn invalid_parameters() {
        assert_eq!(
            density_uniform().points(&[0.5]).a(1.0).b(1.0).call(),
            Err(DistError::DomainErr)
        );
        assert_eq!(
            cumulative_uniform().points(&[0.5]).a(2.0).b(1.0).call(),
            Err(DistError::DomainErr)
        );
        assert_eq!(
            generate_uniform().n(10).b(f64::INFINITY).call(),
            Err(DistError::InvalidNumber)
        );
        assert_eq!(
            density_uniform().points(&[0.5, f64::NAN]).call(),
            Err(DistError::NanErr)
        );
    }
}

#[cfg(test)]
mod normal_tests {
    use super::*;

    #[test]
    fn density_standard() {
        let points: Vec<f64> = seq(-3.0, 3.0, 1_000_000);
        let n: usize = points.len();
        let density: Vec<f64> = density_normal().points(&points).call().unwrap();

        assert_eq!(density.len(), n);
        assert_close(density[0], 0.004431848, 1.0e-8);
        assert_close(density[n - 1], 0.004431848, 1.0e-8);
        assert_close(density[n / 2], 0.3989423, 1.0e-7);
    }

    #[test]
    fn density_shifted() {
        let points: Vec<f64> = seq(-20.0, 40.0, 1_000_000);
        let n: usize = points.len();
        let density: Vec<f64> = density_normal()
            .points(&points)
            .mean(10.0)
            .standard_deviation(10.0)
            .call()
            .unwrap();

        assert_close(density[0], 0.0004431848, 1.0e-9);
        assert_close(density[n - 1], 0.0004431848, 1.0e-9);
        assert_close(density[n / 2], 0.03989423, 1.0e-8);
    }

    #[test]
    fn density_symmetric() {
        let points: Vec<f64> = seq(0.0, 6.0, 1_000);
        let mirrored: Vec<f64> = points.iter().map(|x| 20.0 - x).collect();
        let shifted: Vec<f64> = points.iter().map(|x| 20.0 + x).collect();

        let left: Vec<f64> = density_normal()
            .points(&mirrored)
            .mean(20.0)
            .standard_deviation(2.0)
            .call()
            .unwrap();
        let right: Vec<f64> = density_normal()
            .points(&shifted)
            .mean(20.0)
            .standard_deviation(2.0)
            .call()
            .unwrap();

        for (l, r) in left.iter().zip(right.iter()) {
            assert_approx_eq!(*l, *r, 1.0e-14);
        }
    }

    #[test]
    fn density_area() {
        let area: f64 = euclid::numerical_integration_finite(
            |x: f64| density_normal().points(&[x]).call().unwrap()[0],
            (-6.0, 6.0),
            100_000,
        );
        assert_close(area, 1.0, 1.0e-5);

        let tails: Vec<f64> = density_normal()
            .points(&[-6.0, 6.0])
            .call()
            .unwrap();
        assert!(tails.iter().all(|&d| d < 1.0e-8));
    }

    #[test]
    fn cumulative_standard() {
        let points: Vec<f64> = seq(-3.0, 3.0, 1_000_000);
        let n: usize = points.len();
        let cdf: Vec<f64> = cumulative_normal().points(&points).call().unwrap();

        assert_close(cdf[0], 0.00134996, 1.0e-5);
        assert_close(cdf[n - 1], 0.998650, 1.0e-5);
        assert_close(cdf[n / 2], 0.5, 1.0e-5);
    }

    #[test]
    fn cumulative_shifted() {
        let points: Vec<f64> = seq(-20.0, 40.0, 1_000_000);
        let n: usize = points.len();
        let cdf: Vec<f64> = cumulative_normal()
            .points(&points)
            .mean(10.0)
            .standard_deviation(10.0)
            .call()
            .unwrap();

        assert_close(cdf[0], 0.001350, 1.0e-6);
        assert_close(cdf[n - 1], 0.998650, 1.0e-6);
        assert_close(cdf[n / 2], 0.5, 1.0e-5);

        let at_mean: Vec<f64> = cumulative_normal()
            .points(&[10.0])
            .mean(10.0)
            .standard_deviation(10.0)
            .call()
            .unwrap();
        assert_eq!(at_mean[0], 0.5);
    }

    #[test]
    fn generate() {
        let n: usize = 1_000_000;
        let mut samples: Samples =
            Samples::new_move(generate_normal().n(n).call().unwrap()).unwrap();

        assert_eq!(samples.count(), n);
        assert_close(samples.standard_deviation().unwrap(), 1.0, 0.01);
        assert_close(samples.mean().unwrap(), 0.0, 0.01);
        assert!(-6.0 < samples.minimum().unwrap());
        assert!(samples.maximum().unwrap() < 6.0);
    }

    #[test]
    fn generate_shifted() {
        let mut samples: Samples = Samples::new_move(
            generate_normal()
                .n(200_000)
                .mean(-3.0)
                .standard_deviation(0.5)
                .seed(7)
                .call()
                .unwrap(),
        )
        .unwrap();

        assert_close(samples.mean().unwrap(), -3.0, 0.01);
        assert_close(samples.standard_deviation().unwrap(), 0.5, 0.01);
    }

    #[test]
    fn seeded_generators_are_reproducible() {
        let a: Vec<f64> = generate_normal().n(1000).seed(42).call().unwrap();
        let b: Vec<f64> = generate_normal().n(1000).seed(42).call().unwrap();
        assert_eq!(a, b);

        let c: Vec<f64> = generate_uniform().n(1000).seed(42).call().unwrap();
        let d: Vec<f64> = generate_uniform().n(1000).seed(42).call().unwrap();
        assert_eq!(c, d);

        let e: Vec<f64> = generate_normal().n(1000).seed(43).call().unwrap();
        assert_ne!(a, e);

        assert!(generate_normal().n(0).call().unwrap().is_empty());
        assert_eq!(generate_normal().n(3).call().unwrap().len(), 3);
    }

    #[test]
    fn subnormal_standard_deviation() {
        let density: Vec<f64> = density_normal()
            .points(&[0.0, 1.0])
            .standard_deviation(1.0e-320)
            .call()
            .unwrap();
        assert!(density.iter().all(|d| !d.is_nan()));
        assert_eq!(density, vec![f64::INFINITY, 0.0]);

        let cdf: Vec<f64> = cumulative_normal()
            .points(&[-1.0, 0.0, 1.0])
            .standard_deviation(1.0e-320)
            .call()
            .unwrap();
        assert_eq!(cdf, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn invalid_parameters() {
        assert_eq!(
            density_normal().points(&[0.0]).standard_deviation(0.0).call(),
            Err(DistError::DomainErr)
        );
        assert_eq!(
            cumulative_normal().points(&[0.0]).standard_deviation(-1.0).call(),
            Err(DistError::DomainErr)
        );
        assert_eq!(
            generate_normal().n(10).mean(f64::NAN).call(),
            Err(DistError::NanErr)
        );
        assert_eq!(
            cumulative_normal().points(&[0.0, f64::NAN, 1.0]).call(),
            Err(DistError::NanErr)
        );
    }
}

#[cfg(test)]
mod student_t_tests {
    use super::*;

    #[test]
    fn density() {
        let points: Vec<f64> = seq(-5.0, 5.0, 100_000);
        let n: usize = points.len();

        let density: Vec<f64> = density_t()
            .points(&points)
            .degrees_of_freedom(1.0)
            .call()
            .unwrap();
        assert_close(density[0], 0.01224269, 1.0e-7);
        assert_close(density[n - 1], 0.01224269, 1.0e-7);
        assert_close(density[n / 2], 0.31830989, 1.0e-6);

        let density: Vec<f64> = density_t()
            .points(&points)
            .degrees_of_freedom(3.0)
            .call()
            .unwrap();
        assert_close(density[0], 0.004219354, 1.0e-7);
        assert_close(density[n - 1], 0.004219354, 1.0e-7);
        assert_close(density[n / 2], 0.3675526, 1.0e-6);

        let points: Vec<f64> = seq(-3.0, 3.0, 100_000);
        let density: Vec<f64> = density_t()
            .points(&points)
            .degrees_of_freedom(30.0)
            .call()
            .unwrap();
        assert_close(density[0], 0.006779063, 1.0e-7);
        assert_close(density[n - 1], 0.006779063, 1.0e-7);
        assert_close(density[n / 2], 0.3956322, 1.0e-6);
    }

    #[test]
    fn cumulative() {
        let points: Vec<f64> = seq(-5.0, 5.0, 10_000);
        let n: usize = points.len();

        let cdf: Vec<f64> = cumulative_t()
            .points(&points)
            .degrees_of_freedom(1.0)
            .call()
            .unwrap();
        assert_close(cdf[0], 0.06283296, 1.0e-3);
        assert_close(cdf[n - 1], 0.937167, 1.0e-3);
        assert_close(cdf[n / 2], 0.5, 1.0e-3);

        let cdf: Vec<f64> = cumulative_t()
            .points(&points)
            .degrees_of_freedom(3.0)
            .call()
            .unwrap();
        assert_close(cdf[0], 0.007696219, 1.0e-3);
        assert_close(cdf[n - 1], 0.9923038, 1.0e-3);

        let cdf: Vec<f64> = cumulative_t()
            .points(&points)
            .degrees_of_freedom(30.0)
            .call()
            .unwrap();
        assert_close(cdf[0], 0.00001164834, 1.0e-3);
        assert_close(cdf[n - 1], 0.9999884, 1.0e-3);
    }

    #[test]
    fn cumulative_at_zero() {
        for nu in [0.5, 1.0, 3.0, 30.0, 1.0e9] {
            let cdf: Vec<f64> = cumulative_t()
                .points(&[0.0])
                .degrees_of_freedom(nu)
                .call()
                .unwrap();
            assert_eq!(cdf[0], 0.5);
        }
    }

    #[test]
    fn cumulative_close_to_zero() {
        // with 1 degree of freedom cdf(x) = 0.5 + atan(x) / pi
        let points: [f64; 4] = [-1.0e-9, 1.0e-9, 1.0e-6, -3.0e-7];
        let cdf: Vec<f64> = cumulative_t()
            .points(&points)
            .degrees_of_freedom(1.0)
            .call()
            .unwrap();

        for (&x, &p) in points.iter().zip(cdf.iter()) {
            assert_approx_eq!(p - 0.5, x.atan() / std::f64::consts::PI, 1.0e-15);
        }

        let cdf: Vec<f64> = cumulative_t()
            .points(&[-1.0e-9, 1.0e-9])
            .degrees_of_freedom(3.0)
            .call()
            .unwrap();
        assert!(cdf[0] < 0.5 && 0.5 < cdf[1]);
    }

    #[test]
    fn invalid_parameters() {
        assert_eq!(
            density_t().points(&[0.0]).degrees_of_freedom(0.0).call(),
            Err(DistError::DomainErr)
        );
        assert_eq!(
            cumulative_t().points(&[0.0]).degrees_of_freedom(f64::NAN).call(),
            Err(DistError::NanErr)
        );
        assert_eq!(
            cumulative_t()
                .points(&[0.0])
                .degrees_of_freedom(f64::INFINITY)
                .call(),
            Err(DistError::InvalidNumber)
        );
        assert_eq!(
            density_t().points(&[f64::NAN]).degrees_of_freedom(3.0).call(),
            Err(DistError::NanErr)
        );
    }
}

#[cfg(test)]
mod f_tests {
    use super::*;

    #[test]
    fn density() {
        let points: Vec<f64> = seq(0.001, 10.0, 10_000);
        let n: usize = points.len();

        let density: Vec<f64> = density_f().points(&points).d1(1.0).d2(2.0).call().unwrap();
        assert_close(density[0], 11.17196, 1.0e-3);
        assert_close(density[n - 1], 0.007607258, 1.0e-3);
        assert_close(density[n / 2], 0.02414726, 1.0e-3);

        let density: Vec<f64> = density_f().points(&points).d1(3.0).d2(10.0).call().unwrap();
        assert_close(density[0], 0.07019374, 1.0e-3);
        assert_close(density[n - 1], 0.0008585295, 1.0e-3);
        assert_close(density[n / 2], 0.01288309, 1.0e-3);
    }

    #[test]
    fn density_outside_support() {
        let density: Vec<f64> = density_f()
            .points(&[-1.0, 0.0, f64::INFINITY])
            .d1(3.0)
            .d2(10.0)
            .call()
            .unwrap();
        assert_eq!(density, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn cumulative() {
        let points: Vec<f64> = seq(0.0, 10.0, 10_000);
        let n: usize = points.len();

        let cdf: Vec<f64> = cumulative_f().points(&points).d1(1.0).d2(2.0).call().unwrap();
        assert_eq!(cdf[0], 0.0);
        assert_close(cdf[n - 1], 0.9128709, 1.0e-3);
        assert_close(cdf[n / 2], 0.8451543, 1.0e-3);

        let cdf: Vec<f64> = cumulative_f().points(&points).d1(3.0).d2(10.0).call().unwrap();
        assert_eq!(cdf[0], 0.0);
        assert_close(cdf[n - 1], 0.9976484, 1.0e-3);
        assert_close(cdf[n / 2], 0.9773861, 1.0e-3);

        assert!(cdf.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn cumulative_huge_points() {
        let cdf: Vec<f64> = cumulative_f()
            .points(&[1.0, 1.0e308])
            .d1(10.0)
            .d2(1.0)
            .call()
            .unwrap();
        assert!(0.0 < cdf[0] && cdf[0] < 1.0);
        assert_eq!(cdf[1], 1.0);

        let cdf: Vec<f64> = cumulative_f()
            .points(&[1.0, 1.0e308, f64::MAX])
            .d1(3.0)
            .d2(10.0)
            .call()
            .unwrap();
        assert_close(cdf[0], 0.5676628, 1.0e-6);
        assert_eq!(cdf[1], 1.0);
        assert_eq!(cdf[2], 1.0);

        let density: Vec<f64> = density_f()
            .points(&[1.0e308])
            .d1(10.0)
            .d2(1.0)
            .call()
            .unwrap();
        assert!(density[0].is_finite());
    }

    #[test]
    fn large_degrees_of_freedom() {
        // d1 = d2 gives cdf(1) = 0.5 exacly
        let cdf: Vec<f64> = cumulative_f()
            .points(&[1.0])
            .d1(1.0e5)
            .d2(1.0e5)
            .call()
            .unwrap();
        assert_close(cdf[0], 0.5, 1.0e-6);

        assert!(density_f().points(&[1.0]).d1(1.0e6).d2(1.0e6).call().is_ok());

        assert_eq!(
            cumulative_f().points(&[1.0]).d1(1.0e9).d2(1.0e9).call(),
            Err(DistError::NumericalError)
        );
        assert_eq!(
            density_f().points(&[1.0]).d1(3.0).d2(1.0e11).call(),
            Err(DistError::NumericalError)
        );
    }

    #[test]
    fn invalid_parameters() {
        assert_eq!(
            density_f().points(&[1.0]).d1(-1.0).d2(2.0).call(),
            Err(DistError::DomainErr)
        );
        assert_eq!(
            cumulative_f().points(&[1.0]).d1(1.0).d2(0.0).call(),
            Err(DistError::DomainErr)
        );
        assert_eq!(
            density_f().points(&[1.0]).d1(f64::INFINITY).d2(2.0).call(),
            Err(DistError::InvalidNumber)
        );
        assert_eq!(
            cumulative_f().points(&[f64::NAN]).d1(1.0).d2(2.0).call(),
            Err(DistError::NanErr)
        );
    }
}
