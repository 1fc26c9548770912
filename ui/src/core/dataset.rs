//! Chart-ready tables built from report payloads.

use serde_json::Value;

use super::report::{PresenceTable, RawReport, ReportError, ReportKind, WeekdayDuration, WeekdaySpan};
use super::time_of_day::{to_time_of_day, TimeOfDay};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    String,
    Number,
    DateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub label: String,
    pub kind: ColumnType,
}

impl Column {
    pub fn new(label: impl Into<String>, kind: ColumnType) -> Self {
        Self {
            label: label.into(),
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    DateTime(TimeOfDay),
}

impl Cell {
    pub fn column_type(&self) -> ColumnType {
        match self {
            Cell::Text(_) => ColumnType::String,
            Cell::Number(_) => ColumnType::Number,
            Cell::DateTime(_) => ColumnType::DateTime,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Plottable magnitude: numbers as-is, clock values as seconds since the
    /// anchor day's midnight.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Number(value) => Some(*value),
            Cell::DateTime(value) => Some(value.to_seconds()),
            Cell::Text(_) => None,
        }
    }
}

/// Named, typed columns plus rows conforming to them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartDataset {
    columns: Vec<Column>,
    rows: Vec<Vec<Cell>>,
}

impl ChartDataset {
    pub fn with_columns(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<Cell>) {
        debug_assert_eq!(row.len(), self.columns.len(), "row arity must match columns");
        debug_assert!(
            row.iter()
                .zip(&self.columns)
                .all(|(cell, column)| cell.column_type() == column.kind),
            "cell types must match column types"
        );
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|cells| cells.get(column))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartStyle {
    Column,
    Pie,
    Timeline,
}

/// Kind-specific rendering hints handed over with a dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartOptions {
    pub style: ChartStyle,
    pub h_axis_title: Option<String>,
    /// Columns whose clock values display as `HH:mm:ss`.
    pub time_columns: Vec<usize>,
}

impl ChartOptions {
    pub fn for_kind(kind: ReportKind) -> Self {
        match kind {
            ReportKind::MeanTimeByWeekday => Self {
                style: ChartStyle::Column,
                h_axis_title: Some("Weekday".into()),
                time_columns: vec![1],
            },
            ReportKind::PresenceByWeekday => Self {
                style: ChartStyle::Pie,
                h_axis_title: None,
                time_columns: Vec::new(),
            },
            ReportKind::StartEndByWeekday => Self {
                style: ChartStyle::Timeline,
                h_axis_title: Some("Weekday".into()),
                time_columns: vec![1, 2],
            },
        }
    }
}

/// Validate a raw payload for `kind` and turn it into a dataset.
pub fn build(kind: ReportKind, payload: &Value) -> Result<ChartDataset, ReportError> {
    Ok(build_report(&RawReport::parse(kind, payload)?))
}

pub fn build_report(report: &RawReport) -> ChartDataset {
    match report {
        RawReport::MeanTime(rows) => mean_time(rows),
        RawReport::Presence(table) => presence(table),
        RawReport::StartEnd(rows) => start_end(rows),
    }
}

fn mean_time(rows: &[WeekdayDuration]) -> ChartDataset {
    let mut dataset = ChartDataset::with_columns(vec![
        Column::new("Weekday", ColumnType::String),
        Column::new("Mean time (h:m:s)", ColumnType::DateTime),
    ]);
    for WeekdayDuration(label, seconds) in rows {
        dataset.push_row(vec![
            Cell::Text(label.clone()),
            Cell::DateTime(to_time_of_day(*seconds)),
        ]);
    }
    dataset
}

fn presence(table: &PresenceTable) -> ChartDataset {
    let (label_header, value_header) = &table.header;
    let mut dataset = ChartDataset::with_columns(vec![
        Column::new(label_header.clone(), ColumnType::String),
        Column::new(value_header.clone(), ColumnType::Number),
    ]);
    for WeekdayDuration(label, seconds) in &table.rows {
        dataset.push_row(vec![Cell::Text(label.clone()), Cell::Number(*seconds)]);
    }
    dataset
}

fn start_end(rows: &[WeekdaySpan]) -> ChartDataset {
    let mut dataset = ChartDataset::with_columns(vec![
        Column::new("Weekday", ColumnType::String),
        Column::new("Start", ColumnType::DateTime),
        Column::new("End", ColumnType::DateTime),
    ]);
    for WeekdaySpan(label, start, end) in rows {
        dataset.push_row(vec![
            Cell::Text(label.clone()),
            Cell::DateTime(to_time_of_day(*start)),
            Cell::DateTime(to_time_of_day(*end)),
        ]);
    }
    dataset
}
