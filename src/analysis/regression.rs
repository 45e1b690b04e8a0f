use {
    crate::{
        config::ANALYSIS,
        models::{CompanyMetrics, RegressionResult},
    },
    anyhow::{Context, Result, bail},
    itertools::Itertools,
    ndarray::{Array1, Array2, Axis},
};

/// Fits the descriptive service-time model on the observed company metrics:
/// `avg_service_hours ~ frequency + avg_difficulty`, evaluated on its own training rows.
pub fn fit_service_time_model(companies: &[CompanyMetrics]) -> Result<RegressionResult> {
    let n_samples = companies.len();
    if n_samples < 2 {
        bail!(
            "regression needs at least 2 companies, got {}",
            n_samples
        );
    }

    if companies.iter().map(|c| c.frequency).all_equal() {
        bail!(
            "frequency is constant ({}) across all companies, regression is degenerate",
            companies[0].frequency
        );
    }

    let distinct_pairs = companies
        .iter()
        .map(|c| (c.frequency, c.avg_difficulty.to_bits()))
        .unique()
        .count();
    if distinct_pairs < 2 {
        bail!("regression needs at least 2 distinct (frequency, difficulty) combinations");
    }

    if let Some(bad) = companies.iter().find(|c| {
        !c.avg_difficulty.is_finite() || !c.avg_service_hours.is_finite()
    }) {
        bail!("non-finite metrics for company '{}'", bad.company);
    }

    let x_data: Vec<f64> = companies
        .iter()
        .flat_map(|c| [c.frequency as f64, c.avg_difficulty])
        .collect();
    let x = Array2::from_shape_vec((n_samples, 2), x_data)
        .context("Failed to build the predictor matrix")?;
    let y = Array1::from_iter(companies.iter().map(|c| c.avg_service_hours));

    fit_least_squares(&x, &y)
}

/// Ordinary least squares with intercept for two predictors.
///
/// Solves the centred normal equations through the pseudo-inverse of the 2x2 Gram matrix,
/// so rank-deficient designs yield the minimum-norm coefficients.
pub fn fit_least_squares(x: &Array2<f64>, y: &Array1<f64>) -> Result<RegressionResult> {
    if x.ncols() != 2 {
        bail!("expected 2 predictor columns, got {}", x.ncols());
    }
    if x.nrows() != y.len() {
        bail!(
            "predictor rows ({}) and targets ({}) differ in length",
            x.nrows(),
            y.len()
        );
    }

    let x_mean = x.mean_axis(Axis(0)).context("no samples to fit")?;
    let y_mean = y.mean().context("no samples to fit")?;
    let xc = x - &x_mean;
    let yc = y - y_mean;

    let gram = xc.t().dot(&xc);
    let moment = xc.t().dot(&yc);
    let pinv = pseudo_inverse_sym2(
        gram[[0, 0]],
        gram[[0, 1]],
        gram[[1, 1]],
        ANALYSIS.statistics.pinv_relative_cutoff,
    );
    let coef = pinv.dot(&moment);
    let intercept = y_mean - x_mean.dot(&coef);

    let predictions = x.dot(&coef) + intercept;
    if predictions.iter().any(|p| !p.is_finite()) {
        bail!("least-squares fit produced non-finite predictions");
    }

    let sse: f64 = (y - &predictions).mapv(|r| r * r).sum();
    let sst: f64 = yc.mapv(|d| d * d).sum();

    Ok(RegressionResult {
        r_squared: r_squared(sse, sst),
        coefficients: [coef[0], coef[1]],
        intercept,
        samples: y.len(),
    })
}

/// Coefficient of determination clamped into 0..=1.
/// A constant target is perfectly explained only when the residuals vanish too.
fn r_squared(sse: f64, sst: f64) -> f64 {
    const TOLERANCE: f64 = 1e-12;
    if sst <= TOLERANCE {
        return if sse <= TOLERANCE { 1.0 } else { 0.0 };
    }
    (1.0 - sse / sst).clamp(0.0, 1.0)
}

/// Moore-Penrose pseudo-inverse of the symmetric matrix [[a, b], [b, c]].
/// Eigenvalues at or below `cutoff * largest eigenvalue` are treated as zero.
fn pseudo_inverse_sym2(a: f64, b: f64, c: f64, cutoff: f64) -> Array2<f64> {
    let half_trace = (a + c) / 2.0;
    let radius = (((a - c) / 2.0).powi(2) + b * b).sqrt();
    let (l1, l2) = (half_trace + radius, half_trace - radius);

    // Orthonormal eigenvectors for l1 >= l2.
    let (v1, v2) = if b == 0.0 {
        if a >= c {
            ([1.0, 0.0], [0.0, 1.0])
        } else {
            ([0.0, 1.0], [1.0, 0.0])
        }
    } else {
        let (p, q) = (l1 - c, b);
        let norm = p.hypot(q);
        ([p / norm, q / norm], [-q / norm, p / norm])
    };

    let threshold = cutoff * l1.abs().max(l2.abs());
    let mut pinv = Array2::<f64>::zeros((2, 2));
    for (lambda, v) in [(l1, v1), (l2, v2)] {
        if lambda.abs() <= threshold || lambda == 0.0 {
            continue;
        }
        for i in 0..2 {
            for j in 0..2 {
                pinv[[i, j]] += v[i] * v[j] / lambda;
            }
        }
    }
    pinv
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn metrics(company: &str, frequency: usize, difficulty: f64, hours: f64) -> CompanyMetrics {
        CompanyMetrics {
            company: company.to_string(),
            frequency,
            avg_rack: 0.0,
            avg_shelf: 0.0,
            avg_service_hours: hours,
            avg_difficulty: difficulty,
            external_id: None,
        }
    }

    #[test]
    fn exact_plane_is_recovered() {
        // hours = 1 + 2 * freq - 0.5 * difficulty
        let x = array![[1.0, 4.0], [2.0, 1.0], [3.0, 7.0], [5.0, 2.0], [8.0, 3.0]];
        let y = x.map_axis(Axis(1), |row| 1.0 + 2.0 * row[0] - 0.5 * row[1]);
        let fit = fit_least_squares(&x, &y).unwrap();
        assert!((fit.coefficients[0] - 2.0).abs() < 1e-9);
        assert!((fit.coefficients[1] + 0.5).abs() < 1e-9);
        assert!((fit.intercept - 1.0).abs() < 1e-9);
        assert!((fit.r_squared - 1.0).abs() < 1e-12);
        assert_eq!(fit.samples, 5);
    }

    #[test]
    fn noisy_fit_has_partial_r_squared() {
        let x = array![[1.0, 2.0], [2.0, 1.0], [3.0, 4.0], [4.0, 3.0]];
        let y = array![1.0, 3.0, 2.0, 5.0];
        let fit = fit_least_squares(&x, &y).unwrap();
        assert!((fit.r_squared - 0.9714285714285714).abs() < 1e-9);
        assert!((fit.coefficients[0] - 1.625).abs() < 1e-9);
        assert!((fit.coefficients[1] + 0.875).abs() < 1e-9);
        // Residuals of an OLS fit with intercept sum to zero.
        let residual_sum: f64 = x
            .rows()
            .into_iter()
            .zip(y.iter())
            .map(|(row, yi)| yi - fit.predict(row[0], row[1]))
            .sum();
        assert!(residual_sum.abs() < 1e-9);
    }

    #[test]
    fn two_companies_use_minimum_norm_solution() {
        let companies = [metrics("A", 7, 9.2, 2.0), metrics("B", 3, 14.1, 8.0)];
        let fit = fit_service_time_model(&companies).unwrap();
        assert!((fit.coefficients[0] - -0.5998500374906275).abs() < 1e-9);
        assert!((fit.coefficients[1] - 0.7348162959260185).abs() < 1e-9);
        assert!((fit.intercept - -0.5613596600849764).abs() < 1e-9);
        assert!((fit.r_squared - 1.0).abs() < 1e-9);
        assert!((fit.predict(7.0, 9.2) - 2.0).abs() < 1e-9);
        assert!((fit.predict(3.0, 14.1) - 8.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_inputs_are_rejected() {
        let single = [metrics("A", 7, 9.2, 2.0)];
        assert!(fit_service_time_model(&single).is_err());

        let flat = [metrics("A", 4, 9.2, 2.0), metrics("B", 4, 14.1, 8.0)];
        let err = fit_service_time_model(&flat).unwrap_err();
        assert!(err.to_string().contains("constant"));

        let nan = [metrics("A", 4, f64::NAN, 2.0), metrics("B", 5, 14.1, 8.0)];
        assert!(fit_service_time_model(&nan).is_err());
    }

    #[test]
    fn constant_target_is_fully_explained() {
        let x = array![[1.0, 2.0], [2.0, 5.0], [3.0, 1.0]];
        let y = array![4.0, 4.0, 4.0];
        let fit = fit_least_squares(&x, &y).unwrap();
        assert_eq!(fit.r_squared, 1.0);
        assert!((fit.predict(10.0, 10.0) - 4.0).abs() < 1e-9);
    }

    #[test]
    fn pseudo_inverse_of_invertible_matrix_is_inverse() {
        let pinv = pseudo_inverse_sym2(4.0, 1.0, 3.0, 1e-10);
        let m = array![[4.0, 1.0], [1.0, 3.0]];
        let id = m.dot(&pinv);
        assert!((id[[0, 0]] - 1.0).abs() < 1e-12);
        assert!(id[[0, 1]].abs() < 1e-12);
        assert!((id[[1, 1]] - 1.0).abs() < 1e-12);
    }
}
