use {
    crate::{
        analysis::{fit_service_time_model, normality_p_value},
        config::{ANALYSIS, DF},
        domain::SlotPosition,
        errors::{AnalysisError, AnalysisResult, AnalysisStage},
        models::{CompanyAnalysis, FrequencyComputed, RecommendationComputed},
        utils::{min_max, normalize_min_max},
    },
    std::cmp::Reverse,
};

/// Slot for a company whose frequency sits at `freq_norm` (0..=1) of the observed range.
/// Busier companies move towards rack 1 (floored at 20% of the racks) and shelf 1.
pub fn recommend_slot(freq_norm: f64) -> SlotPosition {
    let bounds = ANALYSIS.slots;
    let factor = ANALYSIS.recommendation.rack_frequency_factor;

    let rack = (bounds.max_rack as f64 * (1.0 - freq_norm * factor)).round_ties_even();
    let shelf = (bounds.max_shelf as f64 * (1.0 - freq_norm)).round_ties_even();

    SlotPosition::new(rack.max(1.0) as u32, shelf.max(1.0) as u32)
}

/// Probabilities, normality diagnostic, model fit, recommended slots and predicted savings.
///
/// The model is fitted on observed difficulty first. Rows are then built from the
/// recommended slots and evaluated with that same model.
pub fn compute_recommendations(
    frequency: &FrequencyComputed,
) -> AnalysisResult<RecommendationComputed> {
    let fail = |reason: String| AnalysisError::computation(AnalysisStage::Recommendation, reason);

    let metrics = &frequency.companies;
    let total: usize = metrics.iter().map(|c| c.frequency).sum();
    if total == 0 {
        return Err(fail("no company has any movement".to_string()));
    }

    let frequencies: Vec<f64> = metrics.iter().map(|c| c.frequency as f64).collect();
    let normality = normality_p_value(&frequencies);

    let model = fit_service_time_model(metrics).map_err(|e| fail(format!("{:#}", e)))?;
    if DF.log_recommendation {
        log::info!(
            "Service-time model: R²={:.4}, coef_freq={:.4}, coef_diff={:.4}, intercept={:.4}",
            model.r_squared,
            model.coef_frequency(),
            model.coef_difficulty(),
            model.intercept
        );
    }

    let (min_freq, max_freq) =
        min_max(&frequencies).ok_or_else(|| fail("no companies to rank".to_string()))?;

    let mut companies: Vec<CompanyAnalysis> = metrics
        .iter()
        .map(|m| {
            let freq_norm = normalize_min_max(m.frequency as f64, min_freq, max_freq);
            let slot = recommend_slot(freq_norm);
            if DF.log_recommendation {
                log::info!("{} (freq {}): recommend {}", m.company, m.frequency, slot);
            }
            CompanyAnalysis::from_metrics(
                m,
                m.frequency as f64 / total as f64,
                normality,
                slot,
                &model,
            )
        })
        .collect();

    if let Some(bad) = companies
        .iter()
        .find(|c| !c.predicted_service_hours.is_finite())
    {
        return Err(fail(format!(
            "predicted service time for '{}' is not finite",
            bad.company
        )));
    }

    // Stable: equal frequencies keep name order.
    companies.sort_by_key(|c| Reverse(c.frequency));

    Ok(RecommendationComputed {
        frequency: frequency.clone(),
        companies,
        regression: model,
        normality_p_value: normality,
    })
}
