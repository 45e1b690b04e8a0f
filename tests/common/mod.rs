//! Builds small input workbooks inside a temp dir.

#![allow(dead_code)]

use {
    archive_slotting::WORKBOOK,
    rust_xlsxwriter::{Workbook, XlsxError},
    std::path::{Path, PathBuf},
};

#[derive(Debug, Clone, Copy)]
pub enum Cell<'a> {
    Text(&'a str),
    Number(f64),
    Blank,
}

pub struct Sheet<'a> {
    pub name: &'a str,
    pub headers: Vec<&'a str>,
    pub rows: Vec<Vec<Cell<'a>>>,
}

pub fn write_workbook(path: &Path, sheets: &[Sheet<'_>]) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    for sheet in sheets {
        let ws = workbook.add_worksheet();
        ws.set_name(sheet.name)?;
        for (col, title) in sheet.headers.iter().enumerate() {
            ws.write_string(0, col as u16, *title)?;
        }
        for (r, row) in sheet.rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let (r, c) = (r as u32 + 1, c as u16);
                match cell {
                    Cell::Text(text) => {
                        ws.write_string(r, c, *text)?;
                    }
                    Cell::Number(value) => {
                        ws.write_number(r, c, *value)?;
                    }
                    Cell::Blank => {}
                }
            }
        }
    }
    workbook.save(path)
}

pub fn companies_sheet<'a>(rows: &[(&'a str, Option<&'a str>)]) -> Sheet<'a> {
    Sheet {
        name: WORKBOOK.companies.name,
        headers: vec![WORKBOOK.companies.company_name, WORKBOOK.companies.external_id],
        rows: rows
            .iter()
            .map(|&(name, id)| vec![Cell::Text(name), id.map_or(Cell::Blank, Cell::Text)])
            .collect(),
    }
}

pub fn movements_headers() -> Vec<&'static str> {
    let m = &WORKBOOK.movements;
    vec![
        m.company,
        m.requested_at,
        m.completed_at,
        m.rack,
        m.shelf,
        m.movement_type,
    ]
}

pub fn movements_sheet<'a>(rows: Vec<Vec<Cell<'a>>>) -> Sheet<'a> {
    Sheet {
        name: WORKBOOK.movements.name,
        headers: movements_headers(),
        rows,
    }
}

pub fn movement_types_sheet<'a>(names: &[&'a str]) -> Sheet<'a> {
    Sheet {
        name: WORKBOOK.movement_types.name,
        headers: vec![WORKBOOK.movement_types.type_name],
        rows: names.iter().map(|&n| vec![Cell::Text(n)]).collect(),
    }
}

/// One movement row with text timestamps.
pub fn movement<'a>(
    company: &'a str,
    requested: &'a str,
    completed: &'a str,
    rack: f64,
    shelf: f64,
    movement_type: &'a str,
) -> Vec<Cell<'a>> {
    vec![
        Cell::Text(company),
        Cell::Text(requested),
        Cell::Text(completed),
        Cell::Number(rack),
        Cell::Number(shelf),
        Cell::Text(movement_type),
    ]
}

/// Company A: 7 consultations at E5/P2 taking 2h. Company B: 3 filings at E40/P10 taking 8h.
pub fn scenario_movements() -> Vec<Vec<Cell<'static>>> {
    let mut rows = Vec::new();
    for _ in 0..7 {
        rows.push(movement(
            "A",
            "2024-03-01 08:00",
            "2024-03-01 10:00",
            5.0,
            2.0,
            "Consulta",
        ));
    }
    for _ in 0..3 {
        rows.push(movement(
            "B",
            "01/03/2024 08:00",
            "01/03/2024 16:00",
            40.0,
            10.0,
            "Arquivamento",
        ));
    }
    rows
}

/// Writes the two-company scenario and returns its path.
pub fn scenario_workbook(dir: &Path) -> PathBuf {
    let path = dir.join("scenario.xlsx");
    write_workbook(
        &path,
        &[
            companies_sheet(&[("A", Some("ID-A")), ("B", Some("ID-B"))]),
            movements_sheet(scenario_movements()),
            movement_types_sheet(&["Consulta", "Arquivamento"]),
        ],
    )
    .unwrap();
    path
}
