//! In-place ascending sort shared by the order statistics.

/// Sort `samples` into non-decreasing order in place.
///
/// Exchange sort whose passes shrink to the position of the last swap made by
/// the previous pass. NaN compares false against everything, so NaNs are never
/// moved by a comparison and can end up anywhere in the output.
pub fn bubble_sort(samples: &mut [f64]) {
    let mut bound = samples.len();
    while bound > 1 {
        let mut last_swap = 0;
        for i in 1..bound {
            if samples[i - 1] > samples[i] {
                samples.swap(i - 1, i);
                last_swap = i;
            }
        }
        bound = last_swap;
    }
}

/// Return a sorted copy of `samples`, leaving the input untouched.
pub fn sorted_copy(samples: &[f64]) -> Vec<f64> {
    let mut sorted = samples.to_vec();
    bubble_sort(&mut sorted);
    sorted
}
