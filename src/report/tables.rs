use {
    crate::config::REPORT,
    strum_macros::{Display, EnumIter},
};

/// One cell of an output sheet. Non-finite numbers become blanks.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportCell {
    Text(String),
    Integer(i64),
    Number(f64),
    Empty,
}

impl ReportCell {
    pub fn number(value: f64) -> Self {
        if value.is_finite() {
            Self::Number(value)
        } else {
            Self::Empty
        }
    }

    pub fn integer(value: impl TryInto<i64>) -> Self {
        value.try_into().map_or(Self::Empty, Self::Integer)
    }

    pub fn optional_text(value: Option<&str>) -> Self {
        value.map_or(Self::Empty, Self::from)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(i) => Some(*i as f64),
            Self::Number(f) => Some(*f),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl From<&str> for ReportCell {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ReportCell {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Output sheets in workbook order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum ReportSheet {
    Companies,
    MovementTypes,
    Regression,
    Summary,
}

impl ReportSheet {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Companies => REPORT.sheets.companies,
            Self::MovementTypes => REPORT.sheets.movement_types,
            Self::Regression => REPORT.sheets.regression,
            Self::Summary => REPORT.sheets.summary,
        }
    }
}

/// Header plus rows of one output sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportTable {
    pub sheet: ReportSheet,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<ReportCell>>,
}

impl ReportTable {
    pub fn new(sheet: ReportSheet, headers: Vec<&'static str>) -> Self {
        Self {
            sheet,
            headers,
            rows: Vec::new(),
        }
    }

    pub(crate) fn push_row(&mut self, row: Vec<ReportCell>) {
        debug_assert_eq!(row.len(), self.headers.len());
        self.rows.push(row);
    }

    pub fn column(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| *h == header)
    }

    pub fn cell(&self, row: usize, header: &str) -> Option<&ReportCell> {
        self.rows.get(row)?.get(self.column(header)?)
    }
}
