use {
    crate::{
        config::DF,
        errors::{AnalysisError, AnalysisResult, AnalysisStage},
        models::{EventMetrics, FrequencyComputed, MovementTypeStats},
        utils::mean,
    },
    itertools::Itertools,
    std::cmp::Reverse,
};

/// Frequency and mean service time per movement type, or `None` when the analysis
/// cannot be produced. The failure is logged so the report can show a placeholder.
pub fn analyze_movement_types(frequency: &FrequencyComputed) -> Option<Vec<MovementTypeStats>> {
    match movement_type_stats(frequency) {
        Ok(stats) => Some(stats),
        Err(e) => {
            log::warn!("{}", e);
            None
        }
    }
}

/// Descending by frequency, ties by label.
pub fn movement_type_stats(frequency: &FrequencyComputed) -> AnalysisResult<Vec<MovementTypeStats>> {
    let fail = |reason: String| AnalysisError::computation(AnalysisStage::MovementTypes, reason);

    if frequency.events.is_empty() {
        return Err(fail("no movements to group by type".to_string()));
    }
    if let Some(position) = frequency
        .events
        .iter()
        .position(|e| e.event.movement_type.trim().is_empty())
    {
        return Err(fail(format!("movement #{} has no type label", position + 1)));
    }

    let catalog = frequency.catalog_names();

    let stats: Vec<MovementTypeStats> = frequency
        .events
        .iter()
        .map(|e| (e.event.movement_type.as_str(), e))
        .into_group_map()
        .into_iter()
        .map(|(label, group)| {
            let cataloged = catalog.contains(label);
            if !cataloged {
                log::warn!(
                    "Movement type '{}' is not listed in the movement-type catalog",
                    label
                );
            }
            let hours: Vec<f64> = group.iter().map(|e: &&EventMetrics| e.service_hours).collect();
            MovementTypeStats {
                movement_type: label.to_string(),
                frequency: group.len(),
                avg_service_hours: mean(&hours),
                cataloged,
            }
        })
        .sorted_by(|a, b| {
            (Reverse(a.frequency), &a.movement_type).cmp(&(Reverse(b.frequency), &b.movement_type))
        })
        .collect();

    if DF.log_movement_types {
        log::info!("Movement-type analysis: {} distinct types", stats.len());
    }

    Ok(stats)
}
