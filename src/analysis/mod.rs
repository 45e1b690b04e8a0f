// Analysis stages: frequency -> recommendation, plus the movement-type breakdown
mod frequency;
mod movement_types;
mod normality;
mod recommendation;
mod regression;

pub use {
    frequency::compute_frequency,
    movement_types::{analyze_movement_types, movement_type_stats},
    normality::normality_p_value,
    recommendation::{compute_recommendations, recommend_slot},
    regression::{fit_least_squares, fit_service_time_model},
};

use crate::{
    errors::AnalysisResult,
    models::{LoadedTables, RecommendationComputed},
    trace_time,
};

/// Runs both computation stages on freshly loaded tables.
pub fn run_pipeline(tables: &LoadedTables) -> AnalysisResult<RecommendationComputed> {
    let frequency = trace_time!("Frequency analysis", 2_000, { compute_frequency(tables) })?;
    trace_time!("Recommendation analysis", 2_000, {
        compute_recommendations(&frequency)
    })
}

#[cfg(test)]
pub(crate) mod test_support {
    use {
        crate::{
            domain::{Company, MovementEvent, MovementType, SlotPosition},
            models::LoadedTables,
        },
        chrono::{Duration, NaiveDate},
        std::path::PathBuf,
    };

    /// Event requested at 2024-03-01 08:00 that took `hours` to complete.
    pub(crate) fn event(
        company: &str,
        hours: f64,
        rack: u32,
        shelf: u32,
        movement_type: &str,
    ) -> MovementEvent {
        let requested_at = NaiveDate::from_ymd_opt(2024, 3, 1)
            .and_then(|d| d.and_hms_opt(8, 0, 0))
            .unwrap();
        MovementEvent {
            company: company.to_string(),
            requested_at,
            completed_at: requested_at + Duration::milliseconds((hours * 3_600_000.0) as i64),
            position: SlotPosition::new(rack, shelf),
            movement_type: movement_type.to_string(),
        }
    }

    /// Company A: 7 events at rack 5 shelf 2 taking 2h. Company B: 3 events at rack 40
    /// shelf 10 taking 8h. A's events come first.
    pub(crate) fn scenario_tables() -> LoadedTables {
        let mut events: Vec<MovementEvent> =
            (0..7).map(|_| event("A", 2.0, 5, 2, "Consulta")).collect();
        events.extend((0..3).map(|_| event("B", 8.0, 40, 10, "Arquivamento")));

        LoadedTables {
            companies: vec![
                Company {
                    name: "A".to_string(),
                    external_id: Some("ID-A".to_string()),
                },
                Company {
                    name: "B".to_string(),
                    external_id: Some("ID-B".to_string()),
                },
            ],
            events,
            movement_types: ["Consulta", "Arquivamento"]
                .into_iter()
                .map(|name| MovementType {
                    name: name.to_string(),
                })
                .collect(),
            source: PathBuf::from("scenario.xlsx"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{test_support::scenario_tables, *};

    #[test]
    fn pipeline_chains_both_stages() {
        let result = run_pipeline(&scenario_tables()).unwrap();
        assert_eq!(result.companies.len(), 2);
        assert_eq!(result.frequency.total_events(), 10);
        assert_eq!(result.top_company().map(|c| c.company.as_str()), Some("A"));
        let saving = -1.616595851037241 + -0.7348162959260183;
        assert!((result.total_time_saving() - saving).abs() < 1e-9);
    }
}
