//! Typed reads of single spreadsheet cells.

use {
    crate::utils::parse_timestamp_text,
    anyhow::{Result, bail},
    calamine::{Data, DataType},
    chrono::NaiveDateTime,
    std::ops::RangeInclusive,
};

/// Trimmed text of a cell. Numbers are rendered without a trailing `.0` when integral
/// (identifiers typed as numbers). `None` for blank cells.
pub(crate) fn cell_text(cell: &Data) -> Option<String> {
    let text = match cell {
        Data::Empty | Data::Error(_) => return None,
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.trim().to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(_) => cell.as_datetime()?.to_string(),
    };
    (!text.is_empty()).then_some(text)
}

/// Whole number held by a cell, as a number or as numeric text. `Ok(None)` for blanks.
pub(crate) fn cell_integer(cell: &Data) -> Result<Option<i64>> {
    let value = match cell {
        Data::Empty => return Ok(None),
        Data::Int(i) => return Ok(Some(*i)),
        Data::Float(f) => *f,
        Data::String(s) => {
            let text = s.trim();
            if text.is_empty() {
                return Ok(None);
            }
            if let Ok(i) = text.parse::<i64>() {
                return Ok(Some(i));
            }
            match text.replace(',', ".").parse::<f64>() {
                Ok(f) => f,
                Err(_) => bail!("'{}' is not a number", text),
            }
        }
        other => bail!("expected a number, found {:?}", other),
    };

    if !value.is_finite() || value.fract() != 0.0 {
        bail!("{} is not a whole number", value);
    }
    Ok(Some(value as i64))
}

/// Spreadsheet serials (days since 1899-12-30) for 0001-01-01 ..= 9999-12-31.
const SERIAL_RANGE: RangeInclusive<f64> = -693_593.0..=2_958_466.0;

/// Timestamp held by a cell: a native date, a spreadsheet serial number or text.
/// `Ok(None)` for blanks.
pub(crate) fn cell_timestamp(cell: &Data) -> Result<Option<NaiveDateTime>> {
    match cell {
        Data::Empty => Ok(None),
        Data::String(s) if s.trim().is_empty() => Ok(None),
        Data::String(s) => match parse_timestamp_text(s) {
            Some(dt) => Ok(Some(dt)),
            None => bail!("'{}' is not a recognised date/time", s.trim()),
        },
        Data::DateTimeIso(s) => match cell.as_datetime().or_else(|| parse_timestamp_text(s)) {
            Some(dt) => Ok(Some(dt)),
            None => bail!("'{}' is not a recognised date/time", s),
        },
        Data::Int(_) | Data::Float(_) | Data::DateTime(_) => {
            let serial = match cell {
                Data::Int(i) => *i as f64,
                Data::Float(f) => *f,
                Data::DateTime(dt) => dt.as_f64(),
                _ => f64::NAN,
            };
            if !SERIAL_RANGE.contains(&serial) {
                bail!("{} is outside the supported date range (years 1 to 9999)", cell);
            }
            match cell.as_datetime() {
                Some(dt) => Ok(Some(dt)),
                None => bail!("{} cannot be read as a date/time", cell),
            }
        }
        other => bail!("expected a date/time, found {:?}", other),
    }
}
