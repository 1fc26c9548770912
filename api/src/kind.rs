use std::fmt;

/// The three precomputed reports the backend serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    MeanTimeByWeekday,
    PresenceByWeekday,
    StartEndByWeekday,
}

impl ReportKind {
    pub const ALL: [ReportKind; 3] = [
        ReportKind::PresenceByWeekday,
        ReportKind::MeanTimeByWeekday,
        ReportKind::StartEndByWeekday,
    ];

    /// Path segment of the report endpoint (`{base}/{segment}/{user_id}`).
    pub fn endpoint(self) -> &'static str {
        match self {
            ReportKind::MeanTimeByWeekday => "mean_time_weekday",
            ReportKind::PresenceByWeekday => "presence_weekday",
            ReportKind::StartEndByWeekday => "presence_start_end",
        }
    }

    /// Short stable identifier, used in logs and CSS modifiers.
    pub fn slug(self) -> &'static str {
        match self {
            ReportKind::MeanTimeByWeekday => "mean_time",
            ReportKind::PresenceByWeekday => "presence_weekday",
            ReportKind::StartEndByWeekday => "start_end",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}
