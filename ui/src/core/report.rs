//! Typed views of the raw report payloads.
//!
//! Every report is a JSON array of weekday rows whose shape depends on the
//! report kind:
//!
//! | kind                   | row                                   |
//! |------------------------|---------------------------------------|
//! | mean time by weekday   | `[label, seconds]`                    |
//! | presence by weekday    | `[label, seconds]` after a header row |
//! | start/end by weekday   | `[label, start_seconds, end_seconds]` |
//!
//! Shape and kind travel in lockstep by contract with the backend, so any
//! mismatch is reported as a [`ReportError`] rather than patched up.

use std::collections::HashSet;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

pub use api::ReportKind;

pub const PRESENCE_LABEL_HEADER: &str = "Weekday";
pub const PRESENCE_VALUE_HEADER: &str = "Presence (s)";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("{kind} payload has an unexpected shape: {source}")]
    Shape {
        kind: ReportKind,
        #[source]
        source: serde_json::Error,
    },
    #[error("{kind} payload repeats weekday {label:?}")]
    DuplicateWeekday { kind: ReportKind, label: String },
    #[error("presence payload has a header at row {0}; only row 0 may be a header")]
    MisplacedHeader(usize),
}

/// `[label, seconds]`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeekdayDuration(pub String, pub f64);

/// `[label, start_seconds, end_seconds]`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeekdaySpan(pub String, pub f64, pub f64);

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PresenceRow {
    Header(String, String),
    Entry(String, f64),
}

/// Presence payload: its own column header plus magnitudes.
#[derive(Debug, Clone, PartialEq)]
pub struct PresenceTable {
    pub header: (String, String),
    pub rows: Vec<WeekdayDuration>,
}

/// A validated payload, tagged with the kind it was requested for.
#[derive(Debug, Clone, PartialEq)]
pub enum RawReport {
    MeanTime(Vec<WeekdayDuration>),
    Presence(PresenceTable),
    StartEnd(Vec<WeekdaySpan>),
}

impl RawReport {
    pub fn parse(kind: ReportKind, payload: &Value) -> Result<Self, ReportError> {
        let report = match kind {
            ReportKind::MeanTimeByWeekday => RawReport::MeanTime(decode(kind, payload)?),
            ReportKind::StartEndByWeekday => RawReport::StartEnd(decode(kind, payload)?),
            ReportKind::PresenceByWeekday => {
                RawReport::Presence(presence_table(decode(kind, payload)?)?)
            }
        };
        report.ensure_unique_weekdays()?;
        Ok(report)
    }

    pub fn kind(&self) -> ReportKind {
        match self {
            RawReport::MeanTime(_) => ReportKind::MeanTimeByWeekday,
            RawReport::Presence(_) => ReportKind::PresenceByWeekday,
            RawReport::StartEnd(_) => ReportKind::StartEndByWeekday,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            RawReport::MeanTime(rows) => rows.len(),
            RawReport::Presence(table) => table.rows.len(),
            RawReport::StartEnd(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn labels(&self) -> Vec<&str> {
        match self {
            RawReport::MeanTime(rows) => rows.iter().map(|row| row.0.as_str()).collect(),
            RawReport::Presence(table) => table.rows.iter().map(|row| row.0.as_str()).collect(),
            RawReport::StartEnd(rows) => rows.iter().map(|row| row.0.as_str()).collect(),
        }
    }

    fn ensure_unique_weekdays(&self) -> Result<(), ReportError> {
        let mut seen = HashSet::new();
        for label in self.labels() {
            if !seen.insert(label) {
                return Err(ReportError::DuplicateWeekday {
                    kind: self.kind(),
                    label: label.to_string(),
                });
            }
        }
        Ok(())
    }
}

fn decode<T: serde::de::DeserializeOwned>(kind: ReportKind, payload: &Value) -> Result<T, ReportError> {
    T::deserialize(payload).map_err(|source| ReportError::Shape { kind, source })
}

fn presence_table(rows: Vec<PresenceRow>) -> Result<PresenceTable, ReportError> {
    let mut header = None;
    let mut entries = Vec::with_capacity(rows.len());

    for (index, row) in rows.into_iter().enumerate() {
        match row {
            PresenceRow::Header(label, value) if index == 0 => header = Some((label, value)),
            PresenceRow::Header(..) => return Err(ReportError::MisplacedHeader(index)),
            PresenceRow::Entry(label, seconds) => entries.push(WeekdayDuration(label, seconds)),
        }
    }

    Ok(PresenceTable {
        header: header.unwrap_or_else(|| {
            (
                PRESENCE_LABEL_HEADER.to_string(),
                PRESENCE_VALUE_HEADER.to_string(),
            )
        }),
        rows: entries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_mean_time_rows() {
        let report = RawReport::parse(
            ReportKind::MeanTimeByWeekday,
            &json!([["Mon", 30047.0], ["Tue", 0]]),
        )
        .unwrap();

        assert_eq!(
            report,
            RawReport::MeanTime(vec![
                WeekdayDuration("Mon".into(), 30047.0),
                WeekdayDuration("Tue".into(), 0.0),
            ])
        );
    }

    #[test]
    fn presence_header_is_split_from_rows() {
        let report = RawReport::parse(
            ReportKind::PresenceByWeekday,
            &json!([["Weekday", "Presence (s)"], ["Mon", 24123], ["Tue", 16564]]),
        )
        .unwrap();

        let RawReport::Presence(table) = report else {
            panic!("expected presence table");
        };
        assert_eq!(table.header, ("Weekday".into(), "Presence (s)".into()));
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1], WeekdayDuration("Tue".into(), 16564.0));
    }

    #[test]
    fn presence_without_header_gets_default() {
        let report = RawReport::parse(ReportKind::PresenceByWeekday, &json!([])).unwrap();
        let RawReport::Presence(table) = report else {
            panic!("expected presence table");
        };
        assert_eq!(table.header.0, PRESENCE_LABEL_HEADER);
        assert_eq!(table.header.1, PRESENCE_VALUE_HEADER);
        assert!(table.rows.is_empty());
    }

    #[test]
    fn presence_header_must_lead() {
        let err = RawReport::parse(
            ReportKind::PresenceByWeekday,
            &json!([["Mon", 1], ["Weekday", "Presence (s)"]]),
        )
        .unwrap_err();
        assert!(matches!(err, ReportError::MisplacedHeader(1)));
    }

    #[test]
    fn start_end_rows_need_three_fields() {
        let err = RawReport::parse(ReportKind::StartEndByWeekday, &json!([["Mon", 3600]]))
            .unwrap_err();
        assert!(matches!(
            err,
            ReportError::Shape {
                kind: ReportKind::StartEndByWeekday,
                ..
            }
        ));
    }

    #[test]
    fn mean_time_rejects_start_end_shape() {
        let err = RawReport::parse(
            ReportKind::MeanTimeByWeekday,
            &json!([["Mon", 3600, 7200]]),
        )
        .unwrap_err();
        assert!(matches!(err, ReportError::Shape { .. }));
    }

    #[test]
    fn non_array_payload_is_rejected() {
        let err = RawReport::parse(ReportKind::MeanTimeByWeekday, &json!({"Mon": 1}))
            .unwrap_err();
        assert!(err.to_string().starts_with("mean_time payload"));
    }

    #[test]
    fn duplicate_weekdays_are_rejected() {
        let err = RawReport::parse(
            ReportKind::StartEndByWeekday,
            &json!([["Mon", 1, 2], ["Mon", 3, 4]]),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ReportError::DuplicateWeekday { ref label, .. } if label == "Mon"
        ));
    }
}
