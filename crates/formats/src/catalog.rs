use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use tracing::warn;

use foundation::color::Rgb;
use foundation::symbology::{column_height, magnitude_color};

/// Header names the source table must carry, exactly as written.
pub const REQUIRED_COLUMNS: [&str; 4] = ["Date", "Latitude", "Longitude", "Magnitude"];

/// One normalized earthquake event. `year`, `height` and `color` are
/// derived once at load time and never recomputed downstream.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EventRecord {
    pub date: NaiveDate,
    pub year: i32,
    pub latitude: f64,
    pub longitude: f64,
    pub magnitude: f64,
    /// ln(1 + magnitude) * 30000, meters.
    pub height: f64,
    pub color: Rgb,
}

/// Ordered event collection. Duplicates are valid distinct events;
/// insertion order carries no meaning.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct EventCatalog {
    pub events: Vec<EventRecord>,
    /// Rows discarded because their date failed to parse.
    pub dropped_rows: usize,
}

#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Csv(csv::Error),
    MissingColumn(&'static str),
    BadNumber { line: u64, column: &'static str },
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Io(e) => write!(f, "read catalog: {e}"),
            CatalogError::Csv(e) => write!(f, "malformed CSV: {e}"),
            CatalogError::MissingColumn(name) => {
                write!(f, "catalog is missing required column {name:?}")
            }
            CatalogError::BadNumber { line, column } => {
                write!(f, "line {line}: {column} is not a number")
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io(e) => Some(e),
            CatalogError::Csv(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(e: std::io::Error) -> Self {
        CatalogError::Io(e)
    }
}

impl From<csv::Error> for CatalogError {
    fn from(e: csv::Error) -> Self {
        CatalogError::Csv(e)
    }
}

impl EventCatalog {
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let file = File::open(path.as_ref())?;
        Self::from_csv_reader(file)
    }

    /// Reads a headered CSV table and normalizes it. Rows whose date
    /// cannot be parsed are dropped and counted rather than reported
    /// as an error; the count is surfaced in `dropped_rows` and as a
    /// single `warn` event.
    pub fn from_csv_reader(reader: impl Read) -> Result<Self, CatalogError> {
        let mut table = csv::Reader::from_reader(reader);
        let headers = table.headers()?.clone();

        let mut columns = [0usize; REQUIRED_COLUMNS.len()];
        for (slot, name) in columns.iter_mut().zip(REQUIRED_COLUMNS) {
            *slot = headers
                .iter()
                .position(|h| h == name)
                .ok_or(CatalogError::MissingColumn(name))?;
        }
        let [date_col, lat_col, lon_col, mag_col] = columns;

        let mut events = Vec::new();
        let mut dropped_rows = 0usize;

        for row in table.records() {
            let row = row?;
            let line = row.position().map(|p| p.line()).unwrap_or(0);

            let Some(date) = parse_event_date(row.get(date_col).unwrap_or("")) else {
                dropped_rows += 1;
                continue;
            };

            let latitude = parse_number(&row, lat_col, "Latitude", line)?;
            let longitude = parse_number(&row, lon_col, "Longitude", line)?;
            let magnitude = parse_number(&row, mag_col, "Magnitude", line)?;

            events.push(EventRecord {
                date,
                year: date.year(),
                latitude,
                longitude,
                magnitude,
                height: column_height(magnitude),
                color: magnitude_color(magnitude),
            });
        }

        if dropped_rows > 0 {
            warn!(dropped_rows, "dropped rows with unparseable dates");
        }

        Ok(Self {
            events,
            dropped_rows,
        })
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Inclusive (min, max) of the derived years, `None` when empty.
    pub fn year_range(&self) -> Option<(i32, i32)> {
        let first = self.events.first()?.year;
        let mut min = first;
        let mut max = first;
        for e in self.events.iter().skip(1) {
            min = min.min(e.year);
            max = max.max(e.year);
        }
        Some((min, max))
    }

    /// Inclusive (min, max) magnitude, `None` when empty.
    pub fn magnitude_range(&self) -> Option<(f64, f64)> {
        let first = self.events.first()?.magnitude;
        let mut min = first;
        let mut max = first;
        for e in self.events.iter().skip(1) {
            min = min.min(e.magnitude);
            max = max.max(e.magnitude);
        }
        Some((min, max))
    }
}

fn parse_number(
    row: &csv::StringRecord,
    col: usize,
    column: &'static str,
    line: u64,
) -> Result<f64, CatalogError> {
    row.get(col)
        .and_then(|s| s.trim().parse::<f64>().ok())
        .ok_or(CatalogError::BadNumber { line, column })
}

/// Accepts the date shapes seen in public earthquake catalogs.
/// Returns `None` rather than an error: the caller drops and counts
/// those rows.
fn parse_event_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    const DATE_FORMATS: [&str; 4] = ["%m/%d/%Y", "%Y-%m-%d", "%Y/%m/%d", "%d-%m-%Y"];
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(raw, fmt) {
            return Some(d);
        }
    }

    // Timestamps like "1975-02-23T02:58:41.000Z" keep their date part.
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|dt| dt.date())
}
