//! Destructive clean-up of sample buffers.
//!
//! Every function here rewrites the caller's buffer in place. The filters
//! change the number of valid samples, so callers must carry on with the new
//! length they report.

/// Drop NaN and infinite samples, keeping the finite ones in order.
///
/// Returns the number of samples dropped.
pub fn filter_invalid(samples: &mut Vec<f64>) -> usize {
    let n_valid = compact_finite(samples);
    let n_dropped = samples.len() - n_valid;
    samples.truncate(n_valid);
    n_dropped
}

/// Move the finite samples to the front of a fixed buffer, in order.
///
/// Returns the number of finite samples. Elements at and past that index are
/// left over from the compaction and carry no meaning.
pub fn compact_finite(samples: &mut [f64]) -> usize {
    let mut n_valid = 0;
    for i in 0..samples.len() {
        if samples[i].is_finite() {
            samples[n_valid] = samples[i];
            n_valid += 1;
        }
    }
    if n_valid < samples.len() {
        log::debug!(
            "dropped {} non-finite samples out of {}",
            samples.len() - n_valid,
            samples.len()
        );
    }
    n_valid
}

/// Drop every index at which `x` or `y` is non-finite, keeping the pairs aligned.
///
/// Both vectors are truncated to the shorter length first. Returns the number
/// of pairs dropped.
pub fn filter_invalid_pairs(x: &mut Vec<f64>, y: &mut Vec<f64>) -> usize {
    let n_pairs = x.len().min(y.len());
    x.truncate(n_pairs);
    y.truncate(n_pairs);

    let mut n_valid = 0;
    for i in 0..n_pairs {
        if x[i].is_finite() && y[i].is_finite() {
            x[n_valid] = x[i];
            y[n_valid] = y[i];
            n_valid += 1;
        }
    }
    x.truncate(n_valid);
    y.truncate(n_valid);

    if n_valid < n_pairs {
        log::debug!("dropped {} non-finite pairs out of {n_pairs}", n_pairs - n_valid);
    }
    n_pairs - n_valid
}

/// Round every sample to `digits` decimal places.
///
/// Halfway cases round away from zero (`0.125` becomes `0.13` at two digits).
/// Negative `digits` round to tens, hundreds and so on.
pub fn round_to_precision(samples: &mut [f64], digits: i32) {
    let scale = 10f64.powi(digits);
    for val in samples.iter_mut() {
        *val = (*val * scale).round() / scale;
    }
}
