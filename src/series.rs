use crate::models::StockRecord;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::Serialize;
use thiserror::Error;

/// One point on the chart. `date` is a display label, not a parseable date.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DataPoint {
    pub date: String,
    pub value: f64,
}

/// Ordered points as displayed; order is the x-axis order.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Series {
    points: Vec<DataPoint>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("value is empty")]
    Empty,
    #[error("'{0}' is not a number")]
    NotNumeric(String),
    #[error("'{0}' is too large")]
    OutOfRange(String),
}

impl Series {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: &[StockRecord]) -> Self {
        Self {
            points: normalize(records),
        }
    }

    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn replace(&mut self, points: Vec<DataPoint>) {
        self.points = points;
    }

    /// Takes the backend's full stock list after an add as the new contents.
    pub fn apply_add_response(&mut self, records: &[StockRecord]) {
        self.replace(normalize(records));
    }
}

/// Maps backend records to points. Records without a usable date get a 1-based `Day N` label.
pub fn normalize(records: &[StockRecord]) -> Vec<DataPoint> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| DataPoint {
            date: record
                .date
                .as_deref()
                .and_then(format_date_label)
                .unwrap_or_else(|| format!("Day {}", index + 1)),
            value: record.value,
        })
        .collect()
}

/// Formats a backend timestamp as a short local date, e.g. `1/5/2026`.
pub fn format_date_label(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let date = if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        parsed.with_timezone(&Local).date_naive()
    } else if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        parsed.date()
    } else {
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?
    };

    Some(date.format("%-m/%-d/%Y").to_string())
}

/// Largest magnitude that survives the backend's float storage unchanged.
pub const MAX_EXACT_VALUE: i64 = (1 << 53) - 1;

/// Parses the add-value field: optional sign, digits, optional `.digits`.
/// The fractional part is dropped.
pub fn parse_input(raw: &str) -> Result<i64, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }

    let not_numeric = || InputError::NotNumeric(trimmed.to_string());
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, "0"));
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(whole) || !all_digits(fraction) {
        return Err(not_numeric());
    }

    let magnitude = whole.parse::<i64>().map_err(|_| InputError::OutOfRange(trimmed.to_string()))?;
    if magnitude > MAX_EXACT_VALUE {
        return Err(InputError::OutOfRange(trimmed.to_string()));
    }
    Ok(if negative { -magnitude } else { magnitude })
}
