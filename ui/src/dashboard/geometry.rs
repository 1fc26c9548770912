//! Layout math for the SVG chart surface. Pure functions of a dataset.

use std::f64::consts::PI;

use crate::core::dataset::{Cell, ChartDataset, ChartOptions};
use crate::core::format::{format_cell, format_percent};

pub const WIDTH: f64 = 640.0;
pub const HEIGHT: f64 = 320.0;
pub const MARGIN_LEFT: f64 = 56.0;
pub const MARGIN_RIGHT: f64 = 16.0;
pub const MARGIN_TOP: f64 = 16.0;
pub const MARGIN_BOTTOM: f64 = 40.0;

const PIE_RADIUS: f64 = 120.0;
const PIE_CENTER: (f64, f64) = (WIDTH / 2.0, HEIGHT / 2.0);

const PALETTE: [&str; 7] = [
    "#3366cc", "#dc3912", "#ff9900", "#109618", "#990099", "#0099c6", "#dd4477",
];

fn plot_width() -> f64 {
    WIDTH - MARGIN_LEFT - MARGIN_RIGHT
}

fn plot_height() -> f64 {
    HEIGHT - MARGIN_TOP - MARGIN_BOTTOM
}

/// A labelled rectangle: a column bar or a timeline span.
#[derive(Debug, Clone, PartialEq)]
pub struct Mark {
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: String,
    pub path: String,
    pub share: f64,
    pub color: &'static str,
    pub caption: String,
}

fn label_of(row: &[Cell]) -> String {
    row.first()
        .and_then(Cell::as_text)
        .unwrap_or_default()
        .to_string()
}

fn value_of(row: &[Cell], column: usize) -> f64 {
    row.get(column)
        .and_then(Cell::as_f64)
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
        .max(0.0)
}

/// One bar per row, heights scaled against the largest value in column 1.
pub fn column_bars(dataset: &ChartDataset, options: &ChartOptions) -> Vec<Mark> {
    let rows = dataset.rows();
    if rows.is_empty() {
        return Vec::new();
    }

    let max = rows.iter().map(|row| value_of(row, 1)).fold(0.0, f64::max);
    let slot = plot_width() / rows.len() as f64;
    let bar_width = slot * 0.6;
    let baseline = MARGIN_TOP + plot_height();

    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            let value = value_of(row, 1);
            let height = if max > 0.0 {
                value / max * plot_height()
            } else {
                0.0
            };
            Mark {
                label: label_of(row),
                x: MARGIN_LEFT + slot * index as f64 + (slot - bar_width) / 2.0,
                y: baseline - height,
                width: bar_width,
                height,
                caption: row
                    .get(1)
                    .map(|cell| format_cell(cell, 1, options))
                    .unwrap_or_default(),
            }
        })
        .collect()
}

/// One horizontal span per row from column 1 to column 2.
///
/// The horizontal axis covers the earliest start to the latest end across
/// all rows.
pub fn timeline_spans(dataset: &ChartDataset, options: &ChartOptions) -> Vec<Mark> {
    let rows = dataset.rows();
    if rows.is_empty() {
        return Vec::new();
    }

    let earliest = rows
        .iter()
        .map(|row| value_of(row, 1))
        .fold(f64::INFINITY, f64::min);
    let latest = rows
        .iter()
        .map(|row| value_of(row, 2))
        .fold(f64::NEG_INFINITY, f64::max);
    let range = (latest - earliest).max(1.0);
    let band = plot_height() / rows.len() as f64;
    let scale = |value: f64| MARGIN_LEFT + (value - earliest) / range * plot_width();

    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            let start = value_of(row, 1);
            let end = value_of(row, 2).max(start);
            let caption = match (row.get(1), row.get(2)) {
                (Some(first), Some(last)) => format!(
                    "{} – {}",
                    format_cell(first, 1, options),
                    format_cell(last, 2, options)
                ),
                _ => String::new(),
            };
            Mark {
                label: label_of(row),
                x: scale(start),
                y: MARGIN_TOP + band * index as f64 + band * 0.15,
                width: scale(end) - scale(start),
                height: band * 0.7,
                caption,
            }
        })
        .collect()
}

/// Pie slices for column 1, clockwise from twelve o'clock.
pub fn pie_slices(dataset: &ChartDataset, options: &ChartOptions) -> Vec<Slice> {
    let rows = dataset.rows();
    let total: f64 = rows.iter().map(|row| value_of(row, 1)).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut angle = 0.0;
    rows.iter()
        .enumerate()
        .filter(|(_, row)| value_of(row, 1) > 0.0)
        .map(|(index, row)| {
            let share = value_of(row, 1) / total;
            let start = angle;
            angle += share * 2.0 * PI;
            let value = row
                .get(1)
                .map(|cell| format_cell(cell, 1, options))
                .unwrap_or_default();
            Slice {
                label: label_of(row),
                path: arc_path(start, angle),
                share,
                color: PALETTE[index % PALETTE.len()],
                caption: format!("{value} ({})", format_percent(share)),
            }
        })
        .collect()
}

fn point_at(angle: f64) -> (f64, f64) {
    (
        PIE_CENTER.0 + PIE_RADIUS * angle.sin(),
        PIE_CENTER.1 - PIE_RADIUS * angle.cos(),
    )
}

fn arc_path(start: f64, end: f64) -> String {
    let (cx, cy) = PIE_CENTER;
    let r = PIE_RADIUS;
    if end - start >= 2.0 * PI - 1e-9 {
        // A single arc cannot close on itself; draw two halves.
        return format!(
            "M {cx:.2} {top:.2} A {r} {r} 0 1 1 {cx:.2} {bottom:.2} A {r} {r} 0 1 1 {cx:.2} {top:.2} Z",
            top = cy - r,
            bottom = cy + r,
        );
    }
    let (x0, y0) = point_at(start);
    let (x1, y1) = point_at(end);
    let large = if end - start > PI { 1 } else { 0 };
    format!("M {cx:.2} {cy:.2} L {x0:.2} {y0:.2} A {r} {r} 0 {large} 1 {x1:.2} {y1:.2} Z")
}
