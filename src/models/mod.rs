mod company_analysis;
mod movement_type;
mod regression;
mod session;

pub use {
    company_analysis::{CompanyAnalysis, CompanyMetrics},
    movement_type::MovementTypeStats,
    regression::RegressionResult,
    session::{EventMetrics, FrequencyComputed, LoadedTables, RecommendationComputed},
};
