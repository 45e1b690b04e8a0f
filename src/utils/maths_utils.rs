use argminmax::ArgMinMax;
use std::f64;

/// Arithmetic mean. NaN for an empty slice.
#[inline]
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Smallest and largest value, or None for an empty slice.
#[inline]
pub(crate) fn min_max(vec: &[f64]) -> Option<(f64, f64)> {
    if vec.is_empty() {
        return None;
    }
    let (min_index, max_index) = vec.argminmax();
    Some((vec[min_index], vec[max_index]))
}

/// Min-max normalization of a single value into 0.0..=1.0.
/// A degenerate range (max == min) maps everything to 0.0.
#[inline]
pub fn normalize_min_max(val: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    if span.abs() <= f64::EPSILON {
        return 0.0;
    }
    (val - min) / span
}

/// Biased central moments (m2, m3, m4) around the mean, as used by the moment-based
/// skewness and kurtosis statistics.
pub(crate) fn central_moments(data: &[f64]) -> (f64, f64, f64) {
    let m = mean(data);
    let n = data.len() as f64;
    let (m2, m3, m4) = data.iter().fold((0.0, 0.0, 0.0), |(s2, s3, s4), &x| {
        let d = x - m;
        let d2 = d * d;
        (s2 + d2, s3 + d2 * d, s4 + d2 * d2)
    });
    (m2 / n, m3 / n, m4 / n)
}
