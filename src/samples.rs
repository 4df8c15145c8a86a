//! Simple utilities over sequences of numbers.
//!
//! They are not part of the numerical engine, but they are needed to build
//! evaluation grids ([seq]) and to summarize the generated variates
//! ([Samples]: sum, mean, standard deviation, minimum and maximum).
//!

use crate::errors::DistError;

/// Creates `count` evenly spaced points from `start` to `end` (**both** inclusive).
///
///  - `count = 0` gives an empty vector.
///  - `count = 1` gives `[start]`.
///  - Otherwise the first point is exacly `start` and the last is exacly `end`.
///
/// `start` and `end` may be in any order.
#[must_use]
pub fn seq(start: f64, end: f64, count: usize) -> Vec<f64> {
    let mut ret: Vec<f64> = Vec::with_capacity(count);
    if count == 0 {
        return ret;
    }
    if count == 1 {
        ret.push(start);
        return ret;
    }

    let last: usize = count - 1;
    let step: f64 = (end - start) / last as f64;
    for i in 0..last {
        ret.push(step.mul_add(i as f64, start));
    }
    ret.push(end);

    return ret;
}

/// A set of samples (for example, the result of
/// [generate_normal](crate::vectorized::generate_normal)) and it's statistics.
///
/// The statistics are computed only once and stored in [SampleProperties].
#[derive(Debug, Clone, PartialEq)]
pub struct Samples {
    data: Vec<f64>,
    properties: SampleProperties,
}

/// Stores the sample properties of the data if they have been computed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SampleProperties {
    /// The sum of all the samples
    pub sum: Option<f64>,
    /// the average of the sample
    ///
    /// Or None if `data.len() == 0`
    pub mean: Option<f64>,
    /// the (unbiased) variance of the sample
    ///
    /// Or None if `data.len() <= 1`
    pub variance: Option<f64>,
    /// The maximum value of the sample
    pub maximum: Option<f64>,
    /// The minimum value of the sample
    pub minimum: Option<f64>,
}

impl Samples {
    /// Creates a new instance of [Samples] with the given `data`.
    ///
    /// `data` must not contain NaNs ([DistError::NanErr]) or
    /// infinities ([DistError::InvalidNumber]).
    ///
    /// If you want to just move the data without copying it,
    /// use [Samples::new_move].
    pub fn new(data: &[f64]) -> Result<Samples, DistError> {
        return Samples::new_move(Vec::from(data));
    }

    /// Creates a new instance of [Samples] with the given `data`.
    ///
    /// `data` must not contain NaNs ([DistError::NanErr]) or
    /// infinities ([DistError::InvalidNumber]).
    pub fn new_move(data: Vec<f64>) -> Result<Samples, DistError> {
        if let Some(error) = data.iter().find_map(|&x| DistError::classify_non_finite(x)) {
            return Err(error);
        }

        return Ok(Samples {
            data,
            properties: SampleProperties::default(),
        });
    }

    /// Gives a reference to the contained data.
    #[must_use]
    pub fn peek_data(&self) -> &[f64] {
        return &self.data;
    }

    /// Returns the contained data and drops self.
    #[must_use]
    pub fn get_data(self) -> Vec<f64> {
        return self.data;
    }

    /// Gives a reference to the properties computed so far.
    #[must_use]
    pub const fn peek_properties(&self) -> &SampleProperties {
        return &self.properties;
    }

    /// The number of samples.
    #[must_use]
    pub fn count(&self) -> usize {
        return self.data.len();
    }

    /// The sum of all the samples. `0.0` if there are no samples.
    pub fn sum(&mut self) -> f64 {
        if let Some(sum) = self.properties.sum {
            return sum;
        }

        let sum: f64 = self.data.iter().sum::<f64>();
        self.properties.sum = Some(sum);
        return sum;
    }

    /// Computes the sample [mean](https://en.wikipedia.org/wiki/Mean) and returns it.
    ///
    /// Returns [None] if there are no samples.
    pub fn mean(&mut self) -> Option<f64> {
        if self.properties.mean.is_some() {
            return self.properties.mean;
        }

        let n: usize = self.data.len();
        if n == 0 {
            return None;
        }

        let mean: f64 = self.sum() / n as f64;

        self.properties.mean = Some(mean);
        return Some(mean);
    }

    /// Computes the unbiased sample [variance](https://en.wikipedia.org/wiki/Variance)
    /// and returns it.
    ///
    /// Returns [None] if there is not enough samples (0 or 1 samples only).
    pub fn variance(&mut self) -> Option<f64> {
        if self.properties.variance.is_some() {
            return self.properties.variance;
        }

        let n: usize = self.data.len();
        if n < 2 {
            return None;
        }

        let mean: f64 = self.mean()?;

        // two pass algorithm, the naive `E[x^2] - E[x]^2` cancels badly
        let mut acc: f64 = 0.0;
        for &s in &self.data {
            let diff: f64 = s - mean;
            acc = diff.mul_add(diff, acc);
        }

        let variance: f64 = acc / (n as f64 - 1.0);

        self.properties.variance = Some(variance);
        return Some(variance);
    }

    /// The (unbiased) sample [standard deviation](https://en.wikipedia.org/wiki/Standard_deviation).
    ///
    /// Returns [None] if there is not enough samples (0 or 1 samples only).
    pub fn standard_deviation(&mut self) -> Option<f64> {
        return self.variance().map(f64::sqrt);
    }

    /// Returns the minimum among the data, or `None` if there are 0 samples.
    pub fn minimum(&mut self) -> Option<f64> {
        if self.properties.minimum.is_some() {
            return self.properties.minimum;
        }

        let min: Option<f64> = self.data.iter().copied().reduce(f64::min);
        self.properties.minimum = min;
        return min;
    }

    /// Returns the maximum among the data, or `None` if there are 0 samples.
    pub fn maximum(&mut self) -> Option<f64> {
        if self.properties.maximum.is_some() {
            return self.properties.maximum;
        }

        let max: Option<f64> = self.data.iter().copied().reduce(f64::max);
        self.properties.maximum = max;
        return max;
    }
}
