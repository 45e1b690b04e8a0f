use {
    crate::{
        config::{ANALYSIS, DF, WORKBOOK},
        data::cells::{cell_integer, cell_text, cell_timestamp},
        domain::{Company, MovementEvent, MovementType, SlotPosition},
        errors::{AnalysisError, AnalysisResult},
        models::LoadedTables,
        utils::format_timestamp,
    },
    anyhow::{Context, Result, bail},
    calamine::{Data, Range, Reader, Sheets, open_workbook_auto},
    std::{
        collections::HashMap,
        fs::File,
        io::BufReader,
        path::Path,
    },
};

static EMPTY_CELL: Data = Data::Empty;

/// Reads the companies, movements and movement-type catalog sheets.
/// Any missing sheet, missing column or unreadable cell aborts the whole load.
pub fn load_workbook(path: &Path) -> AnalysisResult<LoadedTables> {
    read_tables(path).map_err(|e| AnalysisError::load(path, e))
}

fn read_tables(path: &Path) -> Result<LoadedTables> {
    if !path.is_file() {
        bail!("file not found");
    }
    let mut workbook = open_workbook_auto(path).context("not a readable spreadsheet")?;

    let companies = read_companies(&SheetTable::open(&mut workbook, WORKBOOK.companies.name)?)?;
    let events = read_movements(&SheetTable::open(&mut workbook, WORKBOOK.movements.name)?)?;
    let movement_types =
        read_movement_types(&SheetTable::open(&mut workbook, WORKBOOK.movement_types.name)?)?;

    let tables = LoadedTables {
        companies,
        events,
        movement_types,
        source: path.to_path_buf(),
    };

    if DF.log_loader {
        let period = tables
            .request_period()
            .map_or("no requests".to_string(), |(first, last)| {
                format!("{} to {}", format_timestamp(first), format_timestamp(last))
            });
        log::info!(
            "Loaded {}: {} companies, {} movements ({}), {} movement types",
            path.display(),
            tables.companies.len(),
            tables.events.len(),
            period,
            tables.movement_types.len()
        );
    }

    Ok(tables)
}

/// A worksheet whose first used row is a header.
struct SheetTable {
    name: &'static str,
    range: Range<Data>,
    columns: HashMap<String, usize>,
    /// 1-based sheet row of the header.
    header_row: u32,
}

impl SheetTable {
    fn open(workbook: &mut Sheets<BufReader<File>>, name: &'static str) -> Result<Self> {
        let names = workbook.sheet_names();
        if !names.iter().any(|n| n == name) {
            bail!("missing sheet '{}' (found: {})", name, names.join(", "));
        }
        let range = workbook
            .worksheet_range(name)
            .with_context(|| format!("could not read sheet '{}'", name))?;
        Self::from_range(name, range)
    }

    fn from_range(name: &'static str, range: Range<Data>) -> Result<Self> {
        let header = range
            .rows()
            .next()
            .with_context(|| format!("sheet '{}' is empty", name))?;
        let mut columns = HashMap::new();
        for (idx, cell) in header.iter().enumerate() {
            if let Some(title) = cell_text(cell) {
                columns.entry(title).or_insert(idx);
            }
        }
        let header_row = range.start().map(|(row, _)| row + 1).unwrap_or(1);

        Ok(Self {
            name,
            range,
            columns,
            header_row,
        })
    }

    fn column(&self, title: &str) -> Result<usize> {
        match self.columns.get(title) {
            Some(idx) => Ok(*idx),
            None => bail!("sheet '{}' has no column '{}'", self.name, title),
        }
    }

    /// Data rows with their 1-based sheet row number. Fully blank rows are skipped.
    fn data_rows(&self) -> impl Iterator<Item = (u32, &[Data])> + '_ {
        self.range
            .rows()
            .enumerate()
            .skip(1)
            .map(|(idx, row)| (self.header_row + idx as u32, row))
            .filter(|(_, row)| !is_blank_row(row))
    }
}

/// Formula errors (`#N/A`, `#REF!`) count as content so the row is reported, not dropped.
fn is_blank_row(row: &[Data]) -> bool {
    row.iter()
        .all(|cell| !matches!(cell, Data::Error(_)) && cell_text(cell).is_none())
}

fn cell(row: &[Data], idx: usize) -> &Data {
    row.get(idx).unwrap_or(&EMPTY_CELL)
}

fn read_companies(sheet: &SheetTable) -> Result<Vec<Company>> {
    let spec = &WORKBOOK.companies;
    let name_col = sheet.column(spec.company_name)?;
    let id_col = sheet.column(spec.external_id)?;

    let mut companies = Vec::new();
    for (row_no, row) in sheet.data_rows() {
        let Some(name) = cell_text(cell(row, name_col)) else {
            log::warn!(
                "Sheet '{}' row {}: no company name, row skipped",
                sheet.name,
                row_no
            );
            continue;
        };
        companies.push(Company {
            name,
            external_id: cell_text(cell(row, id_col)),
        });
    }
    Ok(companies)
}

fn read_movements(sheet: &SheetTable) -> Result<Vec<MovementEvent>> {
    let spec = &WORKBOOK.movements;
    let company_col = sheet.column(spec.company)?;
    let requested_col = sheet.column(spec.requested_at)?;
    let completed_col = sheet.column(spec.completed_at)?;
    let rack_col = sheet.column(spec.rack)?;
    let shelf_col = sheet.column(spec.shelf)?;
    let type_col = sheet.column(spec.movement_type)?;

    let bounds = ANALYSIS.slots;
    let mut out_of_bounds = 0usize;
    let mut events = Vec::new();

    for (row_no, row) in sheet.data_rows() {
        let at = |title: &str| format!("sheet '{}' row {}, column '{}'", sheet.name, row_no, title);

        let company = cell_text(cell(row, company_col));
        let requested_at = cell_timestamp(cell(row, requested_col))
            .with_context(|| at(spec.requested_at))?;
        let completed_at = cell_timestamp(cell(row, completed_col))
            .with_context(|| at(spec.completed_at))?;
        let rack = slot_index(cell(row, rack_col)).with_context(|| at(spec.rack))?;
        let shelf = slot_index(cell(row, shelf_col)).with_context(|| at(spec.shelf))?;
        let movement_type = cell_text(cell(row, type_col));

        let (
            Some(company),
            Some(requested_at),
            Some(completed_at),
            Some(rack),
            Some(shelf),
            Some(movement_type),
        ) = (company, requested_at, completed_at, rack, shelf, movement_type)
        else {
            let missing: Vec<&str> = [
                (spec.company, cell_text(cell(row, company_col)).is_none()),
                (spec.requested_at, cell_text(cell(row, requested_col)).is_none()),
                (spec.completed_at, cell_text(cell(row, completed_col)).is_none()),
                (spec.rack, cell_text(cell(row, rack_col)).is_none()),
                (spec.shelf, cell_text(cell(row, shelf_col)).is_none()),
                (spec.movement_type, cell_text(cell(row, type_col)).is_none()),
            ]
            .into_iter()
            .filter_map(|(title, missing)| missing.then_some(title))
            .collect();
            bail!(
                "sheet '{}' row {}: missing value for {}",
                sheet.name,
                row_no,
                missing.join(", ")
            );
        };

        let position = SlotPosition::new(rack, shelf);
        if !position.within_bounds() {
            out_of_bounds += 1;
            if DF.log_loader {
                log::info!("Sheet '{}' row {}: {} outside the archive", sheet.name, row_no, position);
            }
        }

        events.push(MovementEvent {
            company,
            requested_at,
            completed_at,
            position,
            movement_type,
        });
    }

    if out_of_bounds > 0 {
        log::warn!(
            "{} movement(s) reference a slot beyond rack {} / shelf {}; kept as-is",
            out_of_bounds,
            bounds.max_rack,
            bounds.max_shelf
        );
    }

    Ok(events)
}

/// Rack or shelf number: a whole number of at least 1.
fn slot_index(cell: &Data) -> Result<Option<u32>> {
    match cell_integer(cell)? {
        None => Ok(None),
        Some(value) if value < 1 => bail!("{} is not a valid position (must be at least 1)", value),
        Some(value) => Ok(Some(
            u32::try_from(value).with_context(|| format!("{} is too large", value))?,
        )),
    }
}

fn read_movement_types(sheet: &SheetTable) -> Result<Vec<MovementType>> {
    let type_col = sheet.column(WORKBOOK.movement_types.type_name)?;

    let mut types = Vec::new();
    for (row_no, row) in sheet.data_rows() {
        match cell_text(cell(row, type_col)) {
            Some(name) => types.push(MovementType { name }),
            None => log::warn!(
                "Sheet '{}' row {}: no movement type, row skipped",
                sheet.name,
                row_no
            ),
        }
    }
    Ok(types)
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::CellErrorType;

    #[test]
    fn slot_index_rules() {
        assert_eq!(slot_index(&Data::Float(12.0)).unwrap(), Some(12));
        assert_eq!(slot_index(&Data::Empty).unwrap(), None);
        assert!(slot_index(&Data::Int(0)).is_err());
        assert!(slot_index(&Data::Float(-3.0)).is_err());
        assert!(slot_index(&Data::String("A3".into())).is_err());
    }

    fn sheet(name: &'static str, rows: &[Vec<Data>]) -> SheetTable {
        let width = rows.iter().map(Vec::len).max().unwrap_or(1) as u32;
        let mut range = Range::new((0, 0), (rows.len() as u32 - 1, width - 1));
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                range.set_value((r as u32, c as u32), value.clone());
            }
        }
        SheetTable::from_range(name, range).unwrap()
    }

    fn movements_header() -> Vec<Data> {
        let m = &WORKBOOK.movements;
        [m.company, m.requested_at, m.completed_at, m.rack, m.shelf, m.movement_type]
            .iter()
            .map(|t| Data::String(t.to_string()))
            .collect()
    }

    #[test]
    fn blank_rows_versus_error_rows() {
        assert!(is_blank_row(&[Data::Empty, Data::String("  ".into())]));
        assert!(!is_blank_row(&[Data::Empty, Data::Error(CellErrorType::NA)]));
        assert!(!is_blank_row(&[Data::Int(3)]));
    }

    #[test]
    fn error_only_row_is_reported_with_its_row_number() {
        let table = sheet(
            WORKBOOK.movements.name,
            &[
                movements_header(),
                vec![Data::Empty; 6],
                vec![
                    Data::Error(CellErrorType::NA),
                    Data::Error(CellErrorType::Ref),
                    Data::Empty,
                    Data::Empty,
                    Data::Empty,
                    Data::Empty,
                ],
            ],
        );
        assert_eq!(table.data_rows().map(|(n, _)| n).collect::<Vec<_>>(), [3]);

        let reason = format!("{:#}", read_movements(&table).unwrap_err());
        assert!(reason.contains("row 3"), "{reason}");
        assert!(reason.contains(WORKBOOK.movements.requested_at), "{reason}");
    }

    #[test]
    fn missing_file_is_a_load_failure() {
        let err = load_workbook(Path::new("does/not/exist.xlsx")).unwrap_err();
        assert!(matches!(err, AnalysisError::Load { .. }));
        assert!(err.to_string().contains("file not found"));
    }
}
