//! Formatting helpers for presenting report values.

use super::dataset::{Cell, ChartOptions};

/// Seconds as a compact duration, e.g. `6h 42m`.
pub fn format_hours_minutes(seconds: f64) -> String {
    if !seconds.is_finite() {
        return "—".into();
    }
    let total_minutes = (seconds.max(0.0) / 60.0).round() as u64;
    let (hours, minutes) = (total_minutes / 60, total_minutes % 60);
    match (hours, minutes) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}

pub fn format_percent(value: f64) -> String {
    if value.is_finite() {
        format!("{:.1}%", value * 100.0)
    } else {
        "—".into()
    }
}

/// Display text for one cell of column `column`.
///
/// Clock values render as `HH:mm:ss` when the options mark their column as a
/// time column and as a full timestamp otherwise. Numbers are durations.
pub fn format_cell(cell: &Cell, column: usize, options: &ChartOptions) -> String {
    match cell {
        Cell::Text(text) => text.clone(),
        Cell::Number(value) => format_hours_minutes(*value),
        Cell::DateTime(value) if options.time_columns.contains(&column) => value.format_hms(),
        Cell::DateTime(value) => format!("{} {}", value.date(), value.format_hms()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::report::ReportKind;
    use crate::core::time_of_day::to_time_of_day;

    #[test]
    fn hours_minutes() {
        assert_eq!(format_hours_minutes(0.0), "0m");
        assert_eq!(format_hours_minutes(59.0 * 60.0), "59m");
        assert_eq!(format_hours_minutes(7200.0), "2h");
        assert_eq!(format_hours_minutes(24_123.0), "6h 42m");
        assert_eq!(format_hours_minutes(f64::NAN), "—");
    }

    #[test]
    fn percent() {
        assert_eq!(format_percent(0.25), "25.0%");
        assert_eq!(format_percent(f64::INFINITY), "—");
    }

    #[test]
    fn cells_follow_options() {
        let options = ChartOptions::for_kind(ReportKind::MeanTimeByWeekday);
        assert_eq!(format_cell(&Cell::Text("Mon".into()), 0, &options), "Mon");
        assert_eq!(
            format_cell(&Cell::DateTime(to_time_of_day(3661.0)), 1, &options),
            "01:01:01"
        );
        assert_eq!(format_cell(&Cell::Number(3600.0), 1, &options), "1h");
    }
}
