use crate::sort::sorted_copy;
use serde::{Deserialize, Serialize};

/// Run of sorted samples lying within tolerance of the run's first value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    /// Smallest value of the run.
    pub value: f64,
    /// Number of samples in the run.
    pub count: usize,
}

/// Descriptive statistics of one sample sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub count: usize,
    pub average: f64,
    pub geometric_average: f64,
    pub minimum: f64,
    pub maximum: f64,
    pub median: f64,
    /// `None` when no value repeats within the tolerance.
    pub mode: Option<f64>,
    pub std_dev: f64,
    pub std_error: f64,
    /// Relative standard deviation, in percent.
    pub coeff_of_variation: f64,
}

impl Summary {
    /// Compute every statistic of `samples`, bucketing the mode with `epsilon`.
    pub fn new(samples: &[f64], epsilon: f64) -> Self {
        Self {
            count: samples.len(),
            average: average(samples),
            geometric_average: geometric_average(samples),
            minimum: minimum(samples),
            maximum: maximum(samples),
            median: median(samples),
            mode: mode_checked(samples, epsilon),
            std_dev: std_dev(samples),
            std_error: std_error(samples),
            coeff_of_variation: coeff_of_variation(samples),
        }
    }
}

/// Arithmetic mean, computed as a running mean.
///
/// Returns NaN for an empty sequence.
pub fn average(samples: &[f64]) -> f64 {
    running_mean(samples.iter().copied())
}

/// Geometric mean, the exponential of the running mean of `ln(sample)`.
///
/// Samples must be positive; nothing guards against others. A negative sample
/// gives NaN. A zero sample makes the log mean infinite: the result is `0.0`
/// if the zero comes last and NaN if any sample follows it.
pub fn geometric_average(samples: &[f64]) -> f64 {
    running_mean(samples.iter().map(|val| val.ln())).exp()
}

fn running_mean<I: Iterator<Item = f64>>(vals: I) -> f64 {
    let mut n_vals: usize = 0;
    let mut mean = 0.0;
    for val in vals {
        n_vals += 1;
        mean += (val - mean) / n_vals as f64;
    }
    if n_vals == 0 { f64::NAN } else { mean }
}

pub fn minimum(samples: &[f64]) -> f64 {
    sorted_copy(samples).first().copied().unwrap_or(f64::NAN)
}

pub fn maximum(samples: &[f64]) -> f64 {
    sorted_copy(samples).last().copied().unwrap_or(f64::NAN)
}

/// Middle value of the sorted samples, or the mean of the two middle values
/// when the length is even. Returns NaN for an empty sequence.
pub fn median(samples: &[f64]) -> f64 {
    let sorted = sorted_copy(samples);
    let n_vals = sorted.len();
    if n_vals == 0 {
        return f64::NAN;
    }
    let mid = n_vals / 2;
    if n_vals & 1 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

/// Group the sorted samples into buckets of values closer than `epsilon` to
/// the bucket's first value.
///
/// Buckets come out in ascending order of value.
pub fn tally(samples: &[f64], epsilon: f64) -> Vec<Bucket> {
    let mut buckets: Vec<Bucket> = Vec::with_capacity(samples.len());
    for val in sorted_copy(samples) {
        match buckets.last_mut() {
            Some(bucket) if (val - bucket.value).abs() < epsilon => bucket.count += 1,
            _ => buckets.push(Bucket { value: val, count: 1 }),
        }
    }
    buckets
}

/// Most frequent value within tolerance `epsilon`, or `None` if nothing repeats.
///
/// Ties go to the smallest modal value.
pub fn mode_checked(samples: &[f64], epsilon: f64) -> Option<f64> {
    let mut best: Option<Bucket> = None;
    for bucket in tally(samples, epsilon) {
        if bucket.count > best.map_or(1, |best| best.count) {
            best = Some(bucket);
        }
    }
    best.map(|bucket| bucket.value)
}

/// Same as [`mode_checked`], but reports "no mode" as `0.0`.
///
/// The sentinel cannot be told apart from a genuine mode of zero.
pub fn mode(samples: &[f64], epsilon: f64) -> f64 {
    mode_checked(samples, epsilon).unwrap_or(0.0)
}

/// Sample standard deviation (denominator `m - 1`).
///
/// A single sample gives `0 / 0`, so the result is NaN.
pub fn std_dev(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return f64::NAN;
    }
    let mean = average(samples);
    let diff_2_sum: f64 = samples.iter().map(|&val| (val - mean).powi(2)).sum();
    (diff_2_sum / (samples.len() as f64 - 1.0)).sqrt()
}

/// Standard error of the mean.
pub fn std_error(samples: &[f64]) -> f64 {
    std_dev(samples) / (samples.len() as f64).sqrt()
}

/// Coefficient of variation in percent, `100 * std_dev / average`.
///
/// Infinite (or NaN) when the average is exactly zero.
pub fn coeff_of_variation(samples: &[f64]) -> f64 {
    100.0 * std_dev(samples) / average(samples)
}
