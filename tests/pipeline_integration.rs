//! End-to-end: real workbooks in, real report out.

mod common;

use {
    archive_slotting::{
        AnalysisError, build_report, export_report, load_workbook, run_headless, run_pipeline,
    },
    calamine::{Data, Range, Reader, open_workbook_auto},
    common::*,
    std::path::Path,
};

fn load_error(path: &Path) -> String {
    match load_workbook(path) {
        Err(AnalysisError::Load { reason, .. }) => reason,
        other => panic!("expected a load failure, got {:?}", other.map(|t| t.events.len())),
    }
}

fn read_sheet(path: &Path, name: &str) -> Range<Data> {
    let mut workbook = open_workbook_auto(path).unwrap();
    workbook.worksheet_range(name).unwrap()
}

fn header_of(range: &Range<Data>) -> Vec<String> {
    range
        .rows()
        .next()
        .unwrap()
        .iter()
        .map(|c| c.to_string())
        .collect()
}

#[test]
fn scenario_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let input = scenario_workbook(dir.path());

    let tables = load_workbook(&input).unwrap();
    assert_eq!(tables.companies.len(), 2);
    assert_eq!(tables.events.len(), 10);
    assert_eq!(tables.movement_types.len(), 2);
    assert!((tables.events[0].service_hours() - 2.0).abs() < 1e-9);
    assert!((tables.events[9].service_hours() - 8.0).abs() < 1e-9);
    let (first, last) = tables.request_period().unwrap();
    assert_eq!(first, last);
    assert_eq!(archive_slotting::utils::format_timestamp(first), "2024-03-01 08:00");

    let analysis = run_pipeline(&tables).unwrap();
    let a = &analysis.companies[0];
    let b = &analysis.companies[1];
    assert_eq!(a.company, "A");
    assert_eq!(a.external_id.as_deref(), Some("ID-A"));
    assert_eq!((a.recommended_rack, a.recommended_shelf), (10, 1));
    assert_eq!((b.recommended_rack, b.recommended_shelf), (48, 12));
    assert!((a.probability - 0.7).abs() < 1e-12);
    assert!((a.predicted_service_hours - 3.616595851037241).abs() < 1e-9);
    assert!((b.estimated_time_saving - -0.7348162959260183).abs() < 1e-9);
    assert!((analysis.regression.r_squared - 1.0).abs() < 1e-9);
}

#[test]
fn exported_report_reads_back() {
    let dir = tempfile::tempdir().unwrap();
    let input = scenario_workbook(dir.path());
    let output = dir.path().join("report.xlsx");

    let analysis = run_pipeline(&load_workbook(&input).unwrap()).unwrap();
    let report = build_report(&analysis);
    export_report(&report, &output).unwrap();

    let workbook = open_workbook_auto(&output).unwrap();
    assert_eq!(
        workbook.sheet_names(),
        [
            "Análise Empresas",
            "Análise Tipos Movimentação",
            "Regressão Linear",
            "Resumo Executivo"
        ]
    );

    let companies = read_sheet(&output, "Análise Empresas");
    let header = header_of(&companies);
    assert_eq!(header.len(), 13);
    assert_eq!(header[0], "Empresa");
    assert_eq!(header[8], "Distribuição Normal (p-value)");
    assert_eq!(header[12], "Economia de tempo estimada (h)");

    let rows: Vec<&[Data]> = companies.rows().skip(1).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][0], Data::String("A".to_string()));
    assert_eq!(rows[0][1], Data::Float(7.0));
    assert_eq!(rows[0][6], Data::String("ID-A".to_string()));
    // Fewer than 8 companies: no normality p-value.
    assert_eq!(rows[0][8], Data::Empty);
    assert_eq!(rows[0][9], Data::Float(10.0));
    assert_eq!(rows[1][10], Data::Float(12.0));

    let types = read_sheet(&output, "Análise Tipos Movimentação");
    let rows: Vec<&[Data]> = types.rows().skip(1).collect();
    assert_eq!(rows[0][0], Data::String("Consulta".to_string()));
    assert_eq!(rows[0][1], Data::Float(7.0));
    assert_eq!(rows[0][2], Data::Float(2.0));
    assert_eq!(rows[1][3], Data::String("Sim".to_string()));

    let regression = read_sheet(&output, "Regressão Linear");
    let labels: Vec<String> = regression.rows().skip(1).map(|r| r[0].to_string()).collect();
    assert_eq!(
        labels,
        ["R²", "Coeficiente Frequência", "Coeficiente Dificuldade", "Intercepto"]
    );

    let summary = read_sheet(&output, "Resumo Executivo");
    let row = summary.rows().nth(1).unwrap();
    assert_eq!(row[0], Data::Float(2.0));
    assert_eq!(row[1], Data::String("A".to_string()));
    assert_eq!(row[2], Data::Float(7.0));
    match row[3] {
        Data::Float(v) => assert!((v - analysis.total_time_saving()).abs() < 1e-9),
        ref other => panic!("unexpected total saving cell {:?}", other),
    }
    assert_eq!(row[4], Data::String("Consulta".to_string()));
}

#[test]
fn serial_dates_and_uncataloged_types() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("serial.xlsx");
    // 45352.5 is 2024-03-01 12:00.
    let mut rows = scenario_movements();
    rows.push(vec![
        Cell::Text("B"),
        Cell::Number(45352.5),
        Cell::Number(45352.75),
        Cell::Number(60.0),
        Cell::Number(3.0),
        Cell::Text("Transferência"),
    ]);
    write_workbook(
        &path,
        &[
            companies_sheet(&[("A", Some("ID-A")), ("B", None), ("B", Some("ignored"))]),
            movements_sheet(rows),
            movement_types_sheet(&["Consulta", "Arquivamento"]),
        ],
    )
    .unwrap();

    let tables = load_workbook(&path).unwrap();
    let serial = &tables.events[10];
    assert!((serial.service_hours() - 6.0).abs() < 1e-6);
    // Beyond the archive bounds but kept.
    assert_eq!(serial.position.rack, 60);

    let analysis = run_pipeline(&tables).unwrap();
    let b = analysis.companies.iter().find(|c| c.company == "B").unwrap();
    assert_eq!(b.frequency, 4);
    assert_eq!(b.external_id, None);

    let report = build_report(&analysis);
    let stats = report.movement_types.as_ref().unwrap();
    let transfer = stats
        .iter()
        .find(|s| s.movement_type == "Transferência")
        .unwrap();
    assert!(!transfer.cataloged);
    assert_eq!(transfer.frequency, 1);
}

#[test]
fn missing_sheet_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_types.xlsx");
    write_workbook(
        &path,
        &[
            companies_sheet(&[("A", None)]),
            movements_sheet(scenario_movements()),
        ],
    )
    .unwrap();

    let reason = load_error(&path);
    assert!(reason.contains("missing sheet 'Tipos de movimentações'"), "{reason}");
}

#[test]
fn missing_column_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_column.xlsx");
    let mut movements = movements_sheet(
        scenario_movements()
            .into_iter()
            .map(|mut r| {
                r.pop();
                r
            })
            .collect(),
    );
    movements.headers.pop();
    write_workbook(
        &path,
        &[
            companies_sheet(&[("A", None)]),
            movements,
            movement_types_sheet(&["Consulta"]),
        ],
    )
    .unwrap();

    let reason = load_error(&path);
    assert!(reason.contains("no column 'Tipo de movimentação'"), "{reason}");
}

fn workbook_with_extra_row(dir: &Path, row: Vec<Cell<'static>>) -> std::path::PathBuf {
    let path = dir.join("extra.xlsx");
    let mut rows = scenario_movements();
    rows.push(row);
    write_workbook(
        &path,
        &[
            companies_sheet(&[("A", None), ("B", None)]),
            movements_sheet(rows),
            movement_types_sheet(&["Consulta", "Arquivamento"]),
        ],
    )
    .unwrap();
    path
}

#[test]
fn unreadable_date_names_row_and_column() {
    let dir = tempfile::tempdir().unwrap();
    let path = workbook_with_extra_row(
        dir.path(),
        movement("A", "ontem", "2024-03-01 10:00", 5.0, 2.0, "Consulta"),
    );

    let reason = load_error(&path);
    assert!(reason.contains("row 12"), "{reason}");
    assert!(reason.contains("Data do requerimento"), "{reason}");
    assert!(reason.contains("'ontem'"), "{reason}");
}

#[test]
fn extreme_date_serial_is_a_load_failure() {
    let dir = tempfile::tempdir().unwrap();
    let mut row = movement("A", "2024-03-01 08:00", "2024-03-01 10:00", 5.0, 2.0, "Consulta");
    row[1] = Cell::Number(-1e12);
    let path = workbook_with_extra_row(dir.path(), row);

    let reason = load_error(&path);
    assert!(reason.contains("row 12"), "{reason}");
    assert!(reason.contains("Data do requerimento"), "{reason}");
    assert!(reason.contains("outside the supported date range"), "{reason}");
}

#[test]
fn non_numeric_rack_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let mut row = movement("A", "2024-03-01 08:00", "2024-03-01 10:00", 0.0, 2.0, "Consulta");
    row[3] = Cell::Text("abc");
    let path = workbook_with_extra_row(dir.path(), row);

    let reason = load_error(&path);
    assert!(reason.contains("Estante alterada"), "{reason}");
    assert!(reason.contains("not a number"), "{reason}");
}

#[test]
fn fractional_and_zero_slots_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = workbook_with_extra_row(
        dir.path(),
        movement("A", "2024-03-01 08:00", "2024-03-01 10:00", 2.5, 2.0, "Consulta"),
    );
    assert!(load_error(&path).contains("not a whole number"));

    let path = workbook_with_extra_row(
        dir.path(),
        movement("A", "2024-03-01 08:00", "2024-03-01 10:00", 3.0, 0.0, "Consulta"),
    );
    let reason = load_error(&path);
    assert!(reason.contains("Prateleira alterada"), "{reason}");
    assert!(reason.contains("at least 1"), "{reason}");
}

#[test]
fn partial_row_is_a_load_failure() {
    let dir = tempfile::tempdir().unwrap();
    let mut row = movement("A", "2024-03-01 08:00", "2024-03-01 10:00", 5.0, 2.0, "Consulta");
    row[4] = Cell::Blank;
    let path = workbook_with_extra_row(dir.path(), row);

    let reason = load_error(&path);
    assert!(reason.contains("row 12: missing value for Prateleira alterada"), "{reason}");
}

#[test]
fn blank_rows_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gaps.xlsx");
    let mut rows = scenario_movements();
    rows.insert(3, vec![Cell::Blank; 6]);
    rows.insert(3, vec![Cell::Text("   "), Cell::Blank, Cell::Blank]);
    write_workbook(
        &path,
        &[
            companies_sheet(&[("A", None), ("B", None)]),
            movements_sheet(rows),
            movement_types_sheet(&["Consulta", "Arquivamento"]),
        ],
    )
    .unwrap();
    assert_eq!(load_workbook(&path).unwrap().events.len(), 10);
}

#[test]
fn single_company_fails_in_computation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("single.xlsx");
    let rows = scenario_movements().into_iter().take(7).collect();
    write_workbook(
        &path,
        &[
            companies_sheet(&[("A", None)]),
            movements_sheet(rows),
            movement_types_sheet(&["Consulta"]),
        ],
    )
    .unwrap();

    let tables = load_workbook(&path).unwrap();
    assert!(matches!(
        run_pipeline(&tables),
        Err(AnalysisError::Computation { .. })
    ));
}

#[test]
fn headless_run_writes_default_report() {
    let dir = tempfile::tempdir().unwrap();
    let input = scenario_workbook(dir.path());

    let written = run_headless(&input, None, true).unwrap();
    assert_eq!(written, dir.path().join("scenario_analise.xlsx"));
    assert!(written.is_file());
}
