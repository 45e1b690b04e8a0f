use {
    crate::models::{MovementTypeStats, RecommendationComputed},
    serde::Serialize,
};

/// Headline figures of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutiveSummary {
    pub company_count: usize,
    pub top_company: String,
    pub top_frequency: usize,
    pub total_time_saving: f64,
    /// `None` when the movement-type breakdown is unavailable.
    pub top_movement_type: Option<String>,
}

impl ExecutiveSummary {
    pub fn new(analysis: &RecommendationComputed, movement_types: Option<&[MovementTypeStats]>) -> Self {
        let (top_company, top_frequency) = analysis
            .top_company()
            .map_or((String::new(), 0), |c| (c.company.clone(), c.frequency));

        Self {
            company_count: analysis.companies.len(),
            top_company,
            top_frequency,
            total_time_saving: analysis.total_time_saving(),
            top_movement_type: movement_types
                .and_then(|stats| stats.first())
                .map(|s| s.movement_type.clone()),
        }
    }
}
