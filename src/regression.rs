use crate::stats::average;
use serde::{Deserialize, Serialize};

/// Least-squares line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Regression {
    pub slope: f64,
    pub intercept: f64,
}

impl Regression {
    /// Fit `y` against `x`. Both slices must have the same length.
    pub fn fit(x: &[f64], y: &[f64]) -> Self {
        Self {
            slope: slope(x, y),
            intercept: intercept(x, y),
        }
    }
}

/// Ordinary least-squares slope of `y` on `x`.
///
/// Pairs whose `x` equals the mean of `x` are left out of both sums. If every
/// `x` equals the mean the sums stay zero and the result is NaN.
pub fn slope(x: &[f64], y: &[f64]) -> f64 {
    let x_avg = average(x);
    let y_avg = average(y);

    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for (&x_val, &y_val) in x.iter().zip(y) {
        let x_diff = x_val - x_avg;
        if x_diff != 0.0 {
            numerator += x_diff * (y_val - y_avg);
            denominator += x_diff * x_diff;
        }
    }

    numerator / denominator
}

/// Intercept of the least-squares line of `y` on `x`.
pub fn intercept(x: &[f64], y: &[f64]) -> f64 {
    average(y) - slope(x, y) * average(x)
}
