//! `archive-slotting analyze`: the same load → analysis → export chain as the form, without a window.

use {
    crate::{
        analysis::run_pipeline,
        config::default_report_path,
        data::load_workbook,
        models::{CompanyAnalysis, MovementTypeStats, RecommendationComputed, RegressionResult},
        report::{ExecutiveSummary, Report, build_report, export_report},
        utils::format_hours,
    },
    anyhow::Result,
    serde::Serialize,
    std::path::{Path, PathBuf},
    tabled::{Table, Tabled, settings::Style},
};

#[derive(Tabled)]
struct CompanyRow {
    #[tabled(rename = "Empresa")]
    company: String,
    #[tabled(rename = "Freq.")]
    frequency: usize,
    #[tabled(rename = "Prob.")]
    probability: String,
    #[tabled(rename = "Tempo médio")]
    avg_service: String,
    #[tabled(rename = "Recomendação")]
    slot: String,
    #[tabled(rename = "Previsto")]
    predicted: String,
    #[tabled(rename = "Economia")]
    saving: String,
}

#[derive(Serialize)]
struct JsonSummary<'a> {
    input: &'a Path,
    output: &'a Path,
    companies: &'a [CompanyAnalysis],
    regression: &'a RegressionResult,
    normality_p_value: f64,
    movement_types: Option<&'a [MovementTypeStats]>,
    summary: &'a ExecutiveSummary,
}

/// Runs the full chain and prints the result. Returns the path of the written report.
pub fn run_headless(input: &Path, output: Option<PathBuf>, json: bool) -> Result<PathBuf> {
    let output = output.unwrap_or_else(|| default_report_path(input));

    let tables = load_workbook(input)?;
    log::info!(
        "Loaded {} companies, {} events, {} movement types from {}",
        tables.companies.len(),
        tables.events.len(),
        tables.movement_types.len(),
        input.display()
    );

    let analysis = run_pipeline(&tables)?;
    let report = build_report(&analysis);
    export_report(&report, &output)?;

    if json {
        let summary = JsonSummary {
            input,
            output: &output,
            companies: &analysis.companies,
            regression: &analysis.regression,
            normality_p_value: analysis.normality_p_value,
            movement_types: report.movement_types.as_deref(),
            summary: &report.summary,
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", render_table(&analysis));
        println!("{}", render_footer(&analysis, &report, &output));
    }
    Ok(output)
}

fn render_table(analysis: &RecommendationComputed) -> String {
    let rows = analysis.companies.iter().map(|c| CompanyRow {
        company: c.company.clone(),
        frequency: c.frequency,
        probability: format!("{:.1}%", c.probability * 100.0),
        avg_service: format_hours(c.avg_service_hours),
        slot: c.recommended_slot().short_label(),
        predicted: format_hours(c.predicted_service_hours),
        saving: format_hours(c.estimated_time_saving),
    });
    Table::new(rows).with(Style::rounded()).to_string()
}

fn render_footer(analysis: &RecommendationComputed, report: &Report, output: &Path) -> String {
    let model = &analysis.regression;
    let mut lines = vec![format!(
        "R² = {:.4} | coef. frequência = {:.4} | coef. dificuldade = {:.4} | intercepto = {:.4}",
        model.r_squared,
        model.coef_frequency(),
        model.coef_difficulty(),
        model.intercept
    )];
    lines.push(format!(
        "Empresa mais frequente: {} ({} movimentações)",
        report.summary.top_company, report.summary.top_frequency
    ));
    lines.push(format!(
        "Economia total estimada: {}",
        format_hours(report.summary.total_time_saving)
    ));
    lines.push(format!("Relatório: {}", output.display()));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::test_support::scenario_tables;

    #[test]
    fn table_lists_companies_by_frequency() {
        let analysis = run_pipeline(&scenario_tables()).unwrap();
        let table = render_table(&analysis);
        let a = table.find("E10 / P1").unwrap();
        let b = table.find("E48 / P12").unwrap();
        assert!(a < b);
        assert!(table.contains("70.0%"));
    }

    #[test]
    fn footer_names_top_company_and_output() {
        let analysis = run_pipeline(&scenario_tables()).unwrap();
        let report = build_report(&analysis);
        let footer = render_footer(&analysis, &report, Path::new("out.xlsx"));
        assert!(footer.contains("Empresa mais frequente: A (7"));
        assert!(footer.ends_with("Relatório: out.xlsx"));
    }

    #[test]
    fn missing_input_fails_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.xlsx");
        let result = run_headless(&dir.path().join("absent.xlsx"), Some(output.clone()), false);
        assert!(result.is_err());
        assert!(!output.exists());
    }
}
