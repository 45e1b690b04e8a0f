use {
    crate::{
        domain::{Company, MovementEvent, MovementType},
        models::{CompanyAnalysis, CompanyMetrics, RegressionResult},
    },
    chrono::NaiveDateTime,
    itertools::Itertools,
    std::{collections::HashSet, path::PathBuf},
};

/// Raw tables read from one input workbook.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedTables {
    pub companies: Vec<Company>,
    pub events: Vec<MovementEvent>,
    pub movement_types: Vec<MovementType>,
    pub source: PathBuf,
}

impl LoadedTables {
    /// Earliest and latest request timestamps, `None` without movements.
    pub fn request_period(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        self.events
            .iter()
            .map(|e| e.requested_at)
            .minmax()
            .into_option()
    }
}

/// Event plus the per-event values every later stage reuses.
#[derive(Debug, Clone, PartialEq)]
pub struct EventMetrics {
    pub event: MovementEvent,
    pub service_hours: f64,
    pub position_difficulty: f64,
}

impl From<&MovementEvent> for EventMetrics {
    fn from(event: &MovementEvent) -> Self {
        Self {
            service_hours: event.service_hours(),
            position_difficulty: event.position_difficulty(),
            event: event.clone(),
        }
    }
}

/// Output of the frequency stage.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyComputed {
    pub events: Vec<EventMetrics>,
    /// One row per company with at least one event, ascending by name.
    pub companies: Vec<CompanyMetrics>,
    pub catalog: Vec<MovementType>,
    pub source: PathBuf,
}

impl FrequencyComputed {
    pub fn total_events(&self) -> usize {
        self.events.len()
    }

    pub(crate) fn catalog_names(&self) -> HashSet<&str> {
        self.catalog.iter().map(|t| t.name.as_str()).collect()
    }
}

/// Output of the recommendation stage. Keeps the frequency stage it was derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationComputed {
    pub frequency: FrequencyComputed,
    /// Descending by frequency; ties keep the frequency stage's name order.
    pub companies: Vec<CompanyAnalysis>,
    pub regression: RegressionResult,
    pub normality_p_value: f64,
}

impl RecommendationComputed {
    pub fn top_company(&self) -> Option<&CompanyAnalysis> {
        self.companies.first()
    }

    pub fn total_time_saving(&self) -> f64 {
        self.companies.iter().map(|c| c.estimated_time_saving).sum()
    }
}
