use {
    crate::{config::ANALYSIS, utils::central_moments},
    statrs::distribution::{ChiSquared, ContinuousCDF},
};

/// D'Agostino-Pearson omnibus test. Returns the p-value of K² = Zs² + Zk² under χ²(2).
///
/// NaN when the sample is too small for the test to mean anything, has no spread,
/// or produces a non-finite statistic.
pub fn normality_p_value(sample: &[f64]) -> f64 {
    let n = sample.len();
    if n < ANALYSIS.statistics.normality_min_samples {
        return f64::NAN;
    }

    let (m2, m3, m4) = central_moments(sample);
    let scale = sample.iter().fold(0.0_f64, |acc, x| acc.max(x.abs()));
    if !m2.is_finite() || m2 <= (f64::EPSILON * scale).powi(2) {
        return f64::NAN;
    }

    let n = n as f64;
    let zs = skewness_z(n, m3 / m2.powf(1.5));
    let zk = kurtosis_z(n, m4 / (m2 * m2));
    let k2 = zs * zs + zk * zk;
    if !k2.is_finite() {
        return f64::NAN;
    }

    match ChiSquared::new(2.0) {
        Ok(dist) => dist.sf(k2),
        Err(e) => {
            log::error!("χ² distribution unavailable: {e}");
            f64::NAN
        }
    }
}

/// Skewness z-score (D'Agostino 1970 transformation of the sample skewness).
fn skewness_z(n: f64, b2: f64) -> f64 {
    let mut y = b2 * ((n + 1.0) * (n + 3.0) / (6.0 * (n - 2.0))).sqrt();
    let beta2 = 3.0 * (n * n + 27.0 * n - 70.0) * (n + 1.0) * (n + 3.0)
        / ((n - 2.0) * (n + 5.0) * (n + 7.0) * (n + 9.0));
    let w2 = -1.0 + (2.0 * (beta2 - 1.0)).sqrt();
    let delta = 1.0 / (0.5 * w2.ln()).sqrt();
    let alpha = (2.0 / (w2 - 1.0)).sqrt();
    if y == 0.0 {
        y = 1.0;
    }
    let ratio = y / alpha;
    delta * (ratio + (ratio * ratio + 1.0).sqrt()).ln()
}

/// Kurtosis z-score (Anscombe-Glynn transformation of the sample kurtosis).
fn kurtosis_z(n: f64, b2: f64) -> f64 {
    let expected = 3.0 * (n - 1.0) / (n + 1.0);
    let var_b2 = 24.0 * n * (n - 2.0) * (n - 3.0)
        / ((n + 1.0) * (n + 1.0) * (n + 3.0) * (n + 5.0));
    let x = (b2 - expected) / var_b2.sqrt();
    let sqrt_beta1 = 6.0 * (n * n - 5.0 * n + 2.0) / ((n + 7.0) * (n + 9.0))
        * (6.0 * (n + 3.0) * (n + 5.0) / (n * (n - 2.0) * (n - 3.0))).sqrt();
    let a = 6.0
        + 8.0 / sqrt_beta1 * (2.0 / sqrt_beta1 + (1.0 + 4.0 / (sqrt_beta1 * sqrt_beta1)).sqrt());
    let term1 = 1.0 - 2.0 / (9.0 * a);
    let denom = 1.0 + x * (2.0 / (a - 4.0)).sqrt();
    if denom == 0.0 {
        return f64::NAN;
    }
    let term2 = denom.signum() * ((1.0 - 2.0 / a) / denom.abs()).cbrt();
    (term1 - term2) / (2.0 / (9.0 * a)).sqrt()
}
