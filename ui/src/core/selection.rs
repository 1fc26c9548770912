//! Selection state machine driving the dashboard.
//!
//! ```text
//!            select(None)                  select(Some) / kind change
//!   Idle <---------------- any phase ----------------------------> Loading
//!                                                                    |
//!                                     resolve(latest, Ok) ----------+--> Rendered
//!                                     resolve(latest, Err) ---------+--> Idle (last_error)
//!                                     resolve(older, _) ----------------> dropped
//! ```
//!
//! Every outgoing request carries a [`RequestTag`]. Only the tag of the most
//! recently issued request is accepted when a response comes back; anything
//! else is stale and ignored, so a slow response can never paint over a newer
//! selection.

use serde_json::Value;

use api::ApiError;

use super::dataset::{build, ChartDataset, ChartOptions};
use super::directory::{Individual, IndividualId};
use super::report::ReportKind;

/// Identity of one report request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTag {
    pub seq: u64,
    pub individual: IndividualId,
    pub kind: ReportKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Idle,
    Loading {
        tag: RequestTag,
    },
    Rendered {
        tag: RequestTag,
        dataset: ChartDataset,
        options: ChartOptions,
    },
}

/// What became of a response handed to [`SelectionController::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Rendered,
    Failed,
    Stale,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectionController {
    individual: Option<Individual>,
    kind: ReportKind,
    next_seq: u64,
    phase: Phase,
    last_error: Option<String>,
}

impl SelectionController {
    pub fn new(kind: ReportKind) -> Self {
        Self {
            individual: None,
            kind,
            next_seq: 0,
            phase: Phase::Idle,
            last_error: None,
        }
    }

    pub fn individual(&self) -> Option<&Individual> {
        self.individual.as_ref()
    }

    pub fn kind(&self) -> ReportKind {
        self.kind
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Change (or clear) the selected individual.
    ///
    /// Returns the request to issue, if any. Clearing never issues one.
    pub fn select_individual(&mut self, individual: Option<Individual>) -> Option<RequestTag> {
        self.individual = individual;
        self.last_error = None;
        match self.individual.as_ref().map(|individual| individual.id) {
            Some(id) => Some(self.begin(id)),
            None => {
                if let Phase::Loading { tag } = &self.phase {
                    tracing::debug!(seq = tag.seq, "selection cleared while loading");
                }
                self.phase = Phase::Idle;
                None
            }
        }
    }

    /// Switch the active report kind. Reloads when someone is selected.
    pub fn select_kind(&mut self, kind: ReportKind) -> Option<RequestTag> {
        if kind == self.kind {
            return None;
        }
        self.kind = kind;
        self.last_error = None;
        match self.individual.as_ref().map(|individual| individual.id) {
            Some(id) => Some(self.begin(id)),
            None => {
                self.phase = Phase::Idle;
                None
            }
        }
    }

    /// Feed back the outcome of a request issued earlier.
    pub fn resolve(&mut self, tag: RequestTag, outcome: Result<Value, ApiError>) -> Resolution {
        if !self.is_pending(tag) {
            tracing::debug!(
                seq = tag.seq,
                individual = %tag.individual,
                kind = %tag.kind,
                "dropping stale report response"
            );
            return Resolution::Stale;
        }

        let dataset = outcome
            .map_err(|err| {
                tracing::warn!(seq = tag.seq, %err, "report request failed");
                err.to_string()
            })
            .and_then(|payload| {
                build(tag.kind, &payload).map_err(|err| {
                    tracing::error!(seq = tag.seq, %err, "malformed report payload");
                    err.to_string()
                })
            });

        match dataset {
            Ok(dataset) => {
                tracing::debug!(seq = tag.seq, rows = dataset.row_count(), "report rendered");
                self.phase = Phase::Rendered {
                    tag,
                    dataset,
                    options: ChartOptions::for_kind(tag.kind),
                };
                Resolution::Rendered
            }
            Err(message) => {
                self.phase = Phase::Idle;
                self.last_error = Some(message);
                Resolution::Failed
            }
        }
    }

    pub fn loading_visible(&self) -> bool {
        matches!(self.phase, Phase::Loading { .. })
    }

    pub fn chart_visible(&self) -> bool {
        matches!(self.phase, Phase::Rendered { .. })
    }

    /// Dataset and options currently on screen.
    pub fn rendered(&self) -> Option<(&ChartDataset, &ChartOptions)> {
        match &self.phase {
            Phase::Rendered {
                dataset, options, ..
            } => Some((dataset, options)),
            _ => None,
        }
    }

    pub fn avatar(&self) -> Option<&str> {
        self.individual
            .as_ref()
            .and_then(|individual| individual.avatar.as_deref())
    }

    fn is_pending(&self, tag: RequestTag) -> bool {
        let current = self.individual.as_ref().map(|individual| individual.id);
        matches!(self.phase, Phase::Loading { tag: pending } if pending == tag)
            && current == Some(tag.individual)
            && self.kind == tag.kind
    }

    fn begin(&mut self, individual: IndividualId) -> RequestTag {
        self.next_seq += 1;
        let tag = RequestTag {
            seq: self.next_seq,
            individual,
            kind: self.kind,
        };
        tracing::debug!(seq = tag.seq, %individual, kind = %tag.kind, "requesting report");
        self.phase = Phase::Loading { tag };
        tag
    }
}

impl Default for SelectionController {
    fn default() -> Self {
        Self::new(ReportKind::PresenceByWeekday)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn person(id: u32) -> Individual {
        Individual {
            id: IndividualId(id),
            name: format!("User {id}"),
            avatar: Some(format!("/avatars/{id}.png")),
        }
    }

    #[test]
    fn starts_idle_with_nothing_visible() {
        let controller = SelectionController::new(ReportKind::MeanTimeByWeekday);
        assert_eq!(controller.phase(), &Phase::Idle);
        assert!(!controller.loading_visible());
        assert!(!controller.chart_visible());
        assert!(controller.avatar().is_none());
    }

    #[test]
    fn selecting_enters_loading() {
        let mut controller = SelectionController::new(ReportKind::MeanTimeByWeekday);
        let tag = controller.select_individual(Some(person(1))).unwrap();

        assert_eq!(tag.individual, IndividualId(1));
        assert_eq!(tag.kind, ReportKind::MeanTimeByWeekday);
        assert!(controller.loading_visible());
        assert!(!controller.chart_visible());
        assert_eq!(controller.avatar(), Some("/avatars/1.png"));
    }

    #[test]
    fn successful_response_renders() {
        let mut controller = SelectionController::new(ReportKind::MeanTimeByWeekday);
        let tag = controller.select_individual(Some(person(1))).unwrap();

        let resolution = controller.resolve(tag, Ok(json!([["Mon", 3661]])));
        assert_eq!(resolution, Resolution::Rendered);
        assert!(!controller.loading_visible());
        assert!(controller.chart_visible());

        let (dataset, options) = controller.rendered().unwrap();
        assert_eq!(dataset.row_count(), 1);
        assert_eq!(options, &ChartOptions::for_kind(ReportKind::MeanTimeByWeekday));
    }

    #[test]
    fn stale_response_is_dropped() {
        let mut controller = SelectionController::new(ReportKind::MeanTimeByWeekday);
        let first = controller.select_individual(Some(person(1))).unwrap();
        let second = controller.select_individual(Some(person(2))).unwrap();

        assert_eq!(controller.resolve(first, Ok(json!([["Mon", 1]]))), Resolution::Stale);
        assert!(controller.loading_visible());
        assert!(controller.rendered().is_none());

        assert_eq!(controller.resolve(second, Ok(json!([["Tue", 2]]))), Resolution::Rendered);
        let (dataset, _) = controller.rendered().unwrap();
        assert_eq!(dataset.rows()[0][0].as_text(), Some("Tue"));
    }

    #[test]
    fn reselecting_the_same_individual_supersedes_the_older_request() {
        let mut controller = SelectionController::new(ReportKind::MeanTimeByWeekday);
        let first = controller.select_individual(Some(person(1))).unwrap();
        controller.select_individual(Some(person(2)));
        let third = controller.select_individual(Some(person(1))).unwrap();

        assert_ne!(first, third);
        assert_eq!(controller.resolve(first, Ok(json!([]))), Resolution::Stale);
        assert_eq!(controller.resolve(third, Ok(json!([]))), Resolution::Rendered);
    }

    #[test]
    fn late_response_after_render_is_dropped() {
        let mut controller = SelectionController::new(ReportKind::MeanTimeByWeekday);
        let tag = controller.select_individual(Some(person(1))).unwrap();
        controller.resolve(tag, Ok(json!([["Mon", 1]])));

        assert_eq!(controller.resolve(tag, Ok(json!([["Mon", 2]]))), Resolution::Stale);
    }

    #[test]
    fn clearing_hides_everything_and_issues_nothing() {
        let mut controller = SelectionController::new(ReportKind::MeanTimeByWeekday);
        let tag = controller.select_individual(Some(person(1))).unwrap();
        controller.resolve(tag, Ok(json!([["Mon", 1]])));

        assert_eq!(controller.select_individual(None), None);
        assert_eq!(controller.phase(), &Phase::Idle);
        assert!(!controller.chart_visible());
        assert!(!controller.loading_visible());
        assert!(controller.avatar().is_none());
    }

    #[test]
    fn clearing_while_loading_drops_the_pending_response() {
        let mut controller = SelectionController::new(ReportKind::MeanTimeByWeekday);
        let tag = controller.select_individual(Some(person(1))).unwrap();
        controller.select_individual(None);

        assert_eq!(controller.resolve(tag, Ok(json!([["Mon", 1]]))), Resolution::Stale);
        assert!(!controller.chart_visible());
    }

    #[test]
    fn kind_change_reloads_current_individual() {
        let mut controller = SelectionController::new(ReportKind::MeanTimeByWeekday);
        let first = controller.select_individual(Some(person(1))).unwrap();

        let second = controller.select_kind(ReportKind::StartEndByWeekday).unwrap();
        assert_eq!(second.individual, IndividualId(1));
        assert_eq!(second.kind, ReportKind::StartEndByWeekday);

        // The mean-time response can no longer land on the start/end view.
        assert_eq!(controller.resolve(first, Ok(json!([["Mon", 1]]))), Resolution::Stale);
        assert_eq!(
            controller.resolve(second, Ok(json!([["Mon", 3600, 7200]]))),
            Resolution::Rendered
        );
    }

    #[test]
    fn kind_change_without_selection_is_quiet() {
        let mut controller = SelectionController::new(ReportKind::MeanTimeByWeekday);
        assert_eq!(controller.select_kind(ReportKind::PresenceByWeekday), None);
        assert_eq!(controller.kind(), ReportKind::PresenceByWeekday);
        assert_eq!(controller.select_kind(ReportKind::PresenceByWeekday), None);
    }

    #[test]
    fn transport_failure_returns_to_idle() {
        let mut controller = SelectionController::new(ReportKind::MeanTimeByWeekday);
        let tag = controller.select_individual(Some(person(1))).unwrap();

        let resolution = controller.resolve(
            tag,
            Err(ApiError::Status {
                url: "/api/v1/mean_time_weekday/1".into(),
                status: 401,
            }),
        );

        assert_eq!(resolution, Resolution::Failed);
        assert_eq!(controller.phase(), &Phase::Idle);
        assert!(!controller.loading_visible());
        assert!(controller.last_error().unwrap().contains("401"));

        // Retrying by reselecting clears the notice.
        controller.select_individual(Some(person(1)));
        assert!(controller.last_error().is_none());
    }

    #[test]
    fn malformed_payload_is_not_rendered() {
        let mut controller = SelectionController::new(ReportKind::StartEndByWeekday);
        let tag = controller.select_individual(Some(person(1))).unwrap();

        let resolution = controller.resolve(tag, Ok(json!([["Mon", 3600]])));
        assert_eq!(resolution, Resolution::Failed);
        assert!(controller.rendered().is_none());
        assert!(controller.last_error().is_some());
    }
}
