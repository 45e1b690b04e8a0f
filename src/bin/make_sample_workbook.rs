use {
    anyhow::{Context, Result},
    archive_slotting::WORKBOOK,
    chrono::{Duration, NaiveDate, NaiveDateTime},
    clap::Parser,
    rust_xlsxwriter::{Format, Workbook, Worksheet},
    std::path::PathBuf,
};

// Demo archive: (company, identifier, relative request weight)
const COMPANIES: &[(&str, Option<&str>, u32)] = &[
    ("Alfa Contabilidade", Some("EMP-001"), 30),
    ("Beta Engenharia", Some("EMP-002"), 18),
    ("Construtora Gama", Some("EMP-003"), 12),
    ("Delta Advogados", None, 9),
    ("Epsilon Saúde", Some("EMP-005"), 6),
    ("Zeta Logística", Some("EMP-006"), 4),
    ("Eta Educação", Some("EMP-007"), 2),
];

const MOVEMENT_TYPES: &[&str] = &["Consulta", "Arquivamento", "Retirada", "Devolução"];
// Shows up in the movements but not in the catalog sheet.
const UNCATALOGED_TYPE: &str = "Transferência";

const EVENT_COUNT: usize = 600;
const SEED: u64 = 0x5EED_A4C1_1F0E_2024;

#[derive(Parser, Debug)]
#[command(about = "Writes a deterministic demo input workbook")]
struct Args {
    /// Output workbook
    #[arg(long, default_value = "movimentos_exemplo.xlsx")]
    output: PathBuf,

    /// Number of movement rows
    #[arg(long, default_value_t = EVENT_COUNT)]
    events: usize,
}

/// xorshift64*, enough for reproducible demo data.
struct DemoRng(u64);

impl DemoRng {
    fn next_u64(&mut self) -> u64 {
        self.0 ^= self.0 >> 12;
        self.0 ^= self.0 << 25;
        self.0 ^= self.0 >> 27;
        self.0.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n.max(1)
    }

    fn unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

struct DemoEvent {
    company: &'static str,
    requested_at: NaiveDateTime,
    completed_at: NaiveDateTime,
    rack: u32,
    shelf: u32,
    movement_type: &'static str,
}

fn main() -> Result<()> {
    // 1. Setup Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    log::info!("Building demo workbook: {}", args.output.display());

    // 2. Generate rows
    let events = generate_events(args.events)?;
    log::info!(
        "Generated {} movements for {} companies",
        events.len(),
        COMPANIES.len()
    );

    // 3. Write sheets
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let date_format = Format::new().set_num_format("dd/mm/yyyy hh:mm");

    write_companies(workbook.add_worksheet(), &header)?;
    write_movements(workbook.add_worksheet(), &header, &date_format, &events)?;
    write_movement_types(workbook.add_worksheet(), &header)?;

    workbook
        .save(&args.output)
        .with_context(|| format!("failed to save {}", args.output.display()))?;

    log::info!("✅ Saved {}", args.output.display());
    Ok(())
}

fn generate_events(count: usize) -> Result<Vec<DemoEvent>> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 2)
        .and_then(|d| d.and_hms_opt(8, 0, 0))
        .context("invalid start date")?;
    let total_weight: u32 = COMPANIES.iter().map(|(_, _, w)| w).sum();
    let mut rng = DemoRng(SEED);

    let events = (0..count)
        .map(|_| {
            let mut pick = rng.below(total_weight as u64) as u32;
            let company = COMPANIES
                .iter()
                .find(|(_, _, w)| {
                    if pick < *w {
                        true
                    } else {
                        pick -= w;
                        false
                    }
                })
                .map_or(COMPANIES[0].0, |(name, _, _)| *name);

            let requested_at = start
                + Duration::days(rng.below(180) as i64)
                + Duration::minutes(rng.below(9 * 60) as i64);
            // Deep slots take longer to serve.
            let rack = 1 + rng.below(48) as u32;
            let shelf = 1 + rng.below(12) as u32;
            let hours = 0.5 + rng.unit() * 6.0 + rack as f64 * 0.15 + shelf as f64 * 0.25;
            let completed_at = requested_at + Duration::minutes((hours * 60.0).round() as i64);

            let movement_type = if rng.below(40) == 0 {
                UNCATALOGED_TYPE
            } else {
                MOVEMENT_TYPES[rng.below(MOVEMENT_TYPES.len() as u64) as usize]
            };

            DemoEvent {
                company,
                requested_at,
                completed_at,
                rack,
                shelf,
                movement_type,
            }
        })
        .collect();
    Ok(events)
}

fn write_companies(sheet: &mut Worksheet, header: &Format) -> Result<()> {
    let schema = &WORKBOOK.companies;
    sheet.set_name(schema.name)?;
    sheet.write_string_with_format(0, 0, schema.company_name, header)?;
    sheet.write_string_with_format(0, 1, schema.external_id, header)?;
    for (i, (name, id, _)) in COMPANIES.iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write_string(row, 0, *name)?;
        if let Some(id) = id {
            sheet.write_string(row, 1, *id)?;
        }
    }
    sheet.autofit();
    Ok(())
}

fn write_movements(
    sheet: &mut Worksheet,
    header: &Format,
    date_format: &Format,
    events: &[DemoEvent],
) -> Result<()> {
    let schema = &WORKBOOK.movements;
    sheet.set_name(schema.name)?;
    let titles = [
        schema.company,
        schema.requested_at,
        schema.completed_at,
        schema.rack,
        schema.shelf,
        schema.movement_type,
    ];
    for (col, title) in titles.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *title, header)?;
    }

    for (i, e) in events.iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write_string(row, 0, e.company)?;
        sheet.write_number_with_format(row, 1, excel_serial(e.requested_at), date_format)?;
        sheet.write_number_with_format(row, 2, excel_serial(e.completed_at), date_format)?;
        sheet.write_number(row, 3, e.rack)?;
        sheet.write_number(row, 4, e.shelf)?;
        sheet.write_string(row, 5, e.movement_type)?;
    }
    sheet.set_freeze_panes(1, 0)?;
    sheet.autofit();
    Ok(())
}

fn write_movement_types(sheet: &mut Worksheet, header: &Format) -> Result<()> {
    let schema = &WORKBOOK.movement_types;
    sheet.set_name(schema.name)?;
    sheet.write_string_with_format(0, 0, schema.type_name, header)?;
    for (i, name) in MOVEMENT_TYPES.iter().enumerate() {
        sheet.write_string(i as u32 + 1, 0, *name)?;
    }
    sheet.autofit();
    Ok(())
}

/// Days since 1899-12-30, the spreadsheet epoch.
fn excel_serial(at: NaiveDateTime) -> f64 {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default();
    (at - epoch).num_seconds() as f64 / 86_400.0
}
