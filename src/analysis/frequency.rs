use {
    crate::{
        config::DF,
        errors::{AnalysisError, AnalysisResult, AnalysisStage},
        models::{CompanyMetrics, EventMetrics, FrequencyComputed, LoadedTables},
        utils::mean,
    },
    itertools::Itertools,
    std::collections::{HashMap, hash_map::Entry},
};

/// Per-event service time and difficulty, then per-company aggregates joined with
/// the company table on name (left join: unknown companies keep a missing identifier).
pub fn compute_frequency(tables: &LoadedTables) -> AnalysisResult<FrequencyComputed> {
    if tables.events.is_empty() {
        return Err(AnalysisError::computation(
            AnalysisStage::Frequency,
            "the movement sheet has no events to analyze",
        ));
    }

    let events: Vec<EventMetrics> = tables.events.iter().map(EventMetrics::from).collect();

    let negative = events.iter().filter(|e| e.service_hours < 0.0).count();
    if negative > 0 {
        log::warn!(
            "{} movement(s) complete before they were requested; negative service hours are kept as-is",
            negative
        );
    }

    let identifiers = company_identifiers(tables);

    let companies: Vec<CompanyMetrics> = events
        .iter()
        .map(|e| (e.event.company.as_str(), e))
        .into_group_map()
        .into_iter()
        .sorted_by(|(a, _), (b, _)| a.cmp(b))
        .map(|(name, group)| {
            let external_id = identifiers.get(name).cloned().flatten();
            if external_id.is_none() && DF.log_frequency {
                log::info!("No identifier found for company '{}'", name);
            }
            aggregate_company(name, &group, external_id)
        })
        .collect();

    if DF.log_frequency {
        log::info!(
            "Frequency analysis: {} events across {} companies",
            events.len(),
            companies.len()
        );
    }

    Ok(FrequencyComputed {
        events,
        companies,
        catalog: tables.movement_types.clone(),
        source: tables.source.clone(),
    })
}

fn aggregate_company(
    name: &str,
    group: &[&EventMetrics],
    external_id: Option<String>,
) -> CompanyMetrics {
    let column = |f: fn(&EventMetrics) -> f64| -> Vec<f64> { group.iter().map(|e| f(e)).collect() };

    CompanyMetrics {
        company: name.to_string(),
        frequency: group.len(),
        avg_rack: mean(&column(|e| e.event.position.rack as f64)),
        avg_shelf: mean(&column(|e| e.event.position.shelf as f64)),
        avg_service_hours: mean(&column(|e| e.service_hours)),
        avg_difficulty: mean(&column(|e| e.position_difficulty)),
        external_id,
    }
}

/// Name -> identifier lookup. The first row of a duplicated name wins.
fn company_identifiers(tables: &LoadedTables) -> HashMap<&str, Option<String>> {
    let mut lookup = HashMap::with_capacity(tables.companies.len());
    for company in &tables.companies {
        match lookup.entry(company.name.as_str()) {
            Entry::Vacant(slot) => {
                slot.insert(company.external_id.clone());
            }
            Entry::Occupied(_) => {
                log::warn!(
                    "Company '{}' is listed more than once; keeping its first identifier",
                    company.name
                );
            }
        }
    }
    lookup
}
