use {
    crate::{
        config::DF,
        errors::{AnalysisError, AnalysisResult},
        report::{Report, ReportCell, ReportTable},
    },
    anyhow::{Context, Result},
    rust_xlsxwriter::{Format, Workbook, Worksheet},
    std::path::Path,
};

/// Writes every report sheet to `path`. The file may be left partially written on failure.
pub fn export_report(report: &Report, path: &Path) -> AnalysisResult<()> {
    write_workbook(report, path).map_err(|e| AnalysisError::export(path, e))
}

fn write_workbook(report: &Report, path: &Path) -> Result<()> {
    let header_format = Format::new().set_bold();
    let mut workbook = Workbook::new();

    for table in report.sheets() {
        let worksheet = workbook.add_worksheet();
        write_table(worksheet, table, &header_format)
            .with_context(|| format!("sheet '{}'", table.sheet.title()))?;
    }

    workbook.save(path).context("could not save the workbook")?;

    if DF.log_export {
        log::info!(
            "Exported {} sheets to {}",
            report.sheets().len(),
            path.display()
        );
    }
    Ok(())
}

fn write_table(worksheet: &mut Worksheet, table: &ReportTable, header_format: &Format) -> Result<()> {
    worksheet.set_name(table.sheet.title())?;

    for (col, header) in table.headers.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, header_format)?;
    }

    for (idx, row) in table.rows.iter().enumerate() {
        let row_num = idx as u32 + 1;
        for (col, cell) in row.iter().enumerate() {
            let col = col as u16;
            match cell {
                ReportCell::Text(text) => {
                    worksheet.write_string(row_num, col, text.as_str())?;
                }
                ReportCell::Integer(value) => {
                    worksheet.write_number(row_num, col, *value as f64)?;
                }
                ReportCell::Number(value) => {
                    worksheet.write_number(row_num, col, *value)?;
                }
                ReportCell::Empty => {}
            }
        }
    }

    worksheet.set_freeze_panes(1, 0)?;
    worksheet.autofit();
    Ok(())
}
