//! Output report: built in memory first, then written as a workbook.

mod summary;
mod tables;
mod writer;

pub use {
    summary::ExecutiveSummary,
    tables::{ReportCell, ReportSheet, ReportTable},
    writer::export_report,
};

use crate::{
    analysis::analyze_movement_types,
    config::REPORT,
    models::{CompanyAnalysis, MovementTypeStats, RecommendationComputed, RegressionResult},
};

/// Everything that goes into the output workbook.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    tables: Vec<ReportTable>,
    pub summary: ExecutiveSummary,
    pub movement_types: Option<Vec<MovementTypeStats>>,
}

impl Report {
    /// Sheets in workbook order. The movement-type sheet is absent when that analysis failed.
    pub fn sheets(&self) -> &[ReportTable] {
        &self.tables
    }

    pub fn table(&self, sheet: ReportSheet) -> Option<&ReportTable> {
        self.tables.iter().find(|t| t.sheet == sheet)
    }
}

/// Runs the movement-type breakdown and lays out every output sheet.
pub fn build_report(analysis: &RecommendationComputed) -> Report {
    let movement_types = analyze_movement_types(&analysis.frequency);
    let summary = ExecutiveSummary::new(analysis, movement_types.as_deref());

    let mut tables = vec![companies_table(&analysis.companies)];
    if let Some(stats) = &movement_types {
        tables.push(movement_types_table(stats));
    }
    tables.push(regression_table(&analysis.regression));
    tables.push(summary_table(&summary));

    Report {
        tables,
        summary,
        movement_types,
    }
}

fn companies_table(companies: &[CompanyAnalysis]) -> ReportTable {
    let cols = &REPORT.companies;
    let mut table = ReportTable::new(
        ReportSheet::Companies,
        vec![
            cols.company,
            cols.frequency,
            cols.avg_rack,
            cols.avg_shelf,
            cols.avg_service_hours,
            cols.avg_difficulty,
            cols.external_id,
            cols.probability,
            cols.normality_p_value,
            cols.recommended_rack,
            cols.recommended_shelf,
            cols.predicted_service_hours,
            cols.estimated_time_saving,
        ],
    );
    for c in companies {
        table.push_row(vec![
            c.company.as_str().into(),
            ReportCell::integer(c.frequency),
            ReportCell::number(c.avg_rack),
            ReportCell::number(c.avg_shelf),
            ReportCell::number(c.avg_service_hours),
            ReportCell::number(c.avg_difficulty),
            ReportCell::optional_text(c.external_id.as_deref()),
            ReportCell::number(c.probability),
            ReportCell::number(c.normality_p_value),
            ReportCell::integer(c.recommended_rack),
            ReportCell::integer(c.recommended_shelf),
            ReportCell::number(c.predicted_service_hours),
            ReportCell::number(c.estimated_time_saving),
        ]);
    }
    table
}

fn movement_types_table(stats: &[MovementTypeStats]) -> ReportTable {
    let cols = &REPORT.movement_types;
    let mut table = ReportTable::new(
        ReportSheet::MovementTypes,
        vec![
            cols.movement_type,
            cols.frequency,
            cols.avg_service_hours,
            cols.cataloged,
        ],
    );
    for s in stats {
        table.push_row(vec![
            s.movement_type.as_str().into(),
            ReportCell::integer(s.frequency),
            ReportCell::number(s.avg_service_hours),
            ReportCell::from(if s.cataloged { REPORT.yes } else { REPORT.no }),
        ]);
    }
    table
}

fn regression_table(model: &RegressionResult) -> ReportTable {
    let labels = &REPORT.regression;
    let mut table = ReportTable::new(ReportSheet::Regression, vec![labels.metric, labels.value]);
    for (label, value) in [
        (labels.r_squared, model.r_squared),
        (labels.coef_frequency, model.coef_frequency()),
        (labels.coef_difficulty, model.coef_difficulty()),
        (labels.intercept, model.intercept),
    ] {
        table.push_row(vec![label.into(), ReportCell::number(value)]);
    }
    table
}

fn summary_table(summary: &ExecutiveSummary) -> ReportTable {
    let cols = &REPORT.summary;
    let mut table = ReportTable::new(
        ReportSheet::Summary,
        vec![
            cols.company_count,
            cols.top_company,
            cols.top_frequency,
            cols.total_saving,
            cols.top_movement_type,
        ],
    );
    table.push_row(vec![
        ReportCell::integer(summary.company_count),
        summary.top_company.as_str().into(),
        ReportCell::integer(summary.top_frequency),
        ReportCell::number(summary.total_time_saving),
        summary
            .top_movement_type
            .as_deref()
            .unwrap_or(REPORT.not_available)
            .into(),
    ]);
    table
}
