use {
    crate::{domain::SlotPosition, models::RegressionResult},
    serde::Serialize,
};

/// Observed per-company aggregates produced by the frequency stage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyMetrics {
    pub company: String,
    pub frequency: usize,
    pub avg_rack: f64,
    pub avg_shelf: f64,
    pub avg_service_hours: f64,
    /// Mean position difficulty of the slots the company's documents actually moved to.
    pub avg_difficulty: f64,
    pub external_id: Option<String>,
}

/// Final per-company row of the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyAnalysis {
    pub company: String,
    pub frequency: usize,
    pub avg_rack: f64,
    pub avg_shelf: f64,
    pub avg_service_hours: f64,
    /// Difficulty of the *recommended* slot. The observed value stays on `CompanyMetrics`.
    pub avg_difficulty: f64,
    pub external_id: Option<String>,
    pub probability: f64,
    /// Global diagnostic over the frequency distribution, repeated on every row.
    pub normality_p_value: f64,
    pub recommended_rack: u32,
    pub recommended_shelf: u32,
    pub predicted_service_hours: f64,
    pub estimated_time_saving: f64,
}

impl CompanyAnalysis {
    /// Builds the row from observed metrics and a model that was already fitted on them.
    /// Difficulty is re-derived from the recommended slot and fed to the unchanged model.
    pub(crate) fn from_metrics(
        metrics: &CompanyMetrics,
        probability: f64,
        normality_p_value: f64,
        recommended: SlotPosition,
        model: &RegressionResult,
    ) -> Self {
        let avg_difficulty = recommended.difficulty();
        let predicted_service_hours = model.predict(metrics.frequency as f64, avg_difficulty);

        Self {
            company: metrics.company.clone(),
            frequency: metrics.frequency,
            avg_rack: metrics.avg_rack,
            avg_shelf: metrics.avg_shelf,
            avg_service_hours: metrics.avg_service_hours,
            avg_difficulty,
            external_id: metrics.external_id.clone(),
            probability,
            normality_p_value,
            recommended_rack: recommended.rack,
            recommended_shelf: recommended.shelf,
            predicted_service_hours,
            estimated_time_saving: metrics.avg_service_hours - predicted_service_hours,
        }
    }

    pub fn recommended_slot(&self) -> SlotPosition {
        SlotPosition::new(self.recommended_rack, self.recommended_shelf)
    }
}
