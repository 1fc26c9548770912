//! Dioxus glue around the selection pipeline.
//!
//! One coroutine owns every state change. UI controls and finished requests
//! post [`DashboardEvent`]s to it; it loads the directory once, feeds
//! selections into the [`SelectionController`], and spawns report requests
//! whose results come back as further events.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;
use serde_json::Value;

use api::{ApiError, PresenceApi};

use crate::core::directory::{load_directory, DirectoryState};
use crate::core::platform;
use crate::core::report::ReportKind;
use crate::core::selection::{RequestTag, Resolution, SelectionController};

mod chart;
pub use chart::ChartSurface;

mod geometry;

mod panel;
pub use panel::Dashboard;

mod picker;
pub use picker::{AvatarBadge, UserPicker};

#[derive(Debug)]
pub enum DashboardEvent {
    /// Raw value of the selection control; empty means "none".
    SelectIndividual(String),
    SelectKind(ReportKind),
    ReportLoaded {
        tag: RequestTag,
        outcome: Result<Value, ApiError>,
    },
}

/// Signals shared with every dashboard page through context.
#[derive(Clone, Copy, PartialEq)]
pub struct DashboardState {
    pub directory: Signal<DirectoryState>,
    pub selection: Signal<SelectionController>,
}

type SenderSlot = Rc<RefCell<Option<UnboundedSender<DashboardEvent>>>>;

/// Install the dashboard state and its event loop above the router.
///
/// Selection survives page changes, so switching report pages reloads the
/// current individual for the new kind.
pub fn use_dashboard_provider<A>(api: A) -> DashboardState
where
    A: PresenceApi + Clone + 'static,
{
    let directory = use_signal(DirectoryState::default);
    let selection = use_signal(SelectionController::default);
    let sender_slot: SenderSlot = use_hook(|| Rc::new(RefCell::new(None)));

    let coroutine = {
        let sender_slot = sender_slot.clone();

        use_coroutine(move |mut rx: UnboundedReceiver<DashboardEvent>| {
            let sender_slot = sender_slot.clone();
            let api = api.clone();
            let mut directory = directory;
            let mut selection = selection;

            async move {
                directory.set(load_directory(&api).await);

                while let Some(event) = rx.next().await {
                    match event {
                        DashboardEvent::SelectIndividual(value) => {
                            let individual = directory.read().lookup(&value).cloned();
                            let request =
                                selection.with_mut(|sel| sel.select_individual(individual));
                            if let Some(tag) = request {
                                queue_report(sender_slot.clone(), api.clone(), tag);
                            }
                        }
                        DashboardEvent::SelectKind(kind) => {
                            if let Some(tag) = selection.with_mut(|sel| sel.select_kind(kind)) {
                                queue_report(sender_slot.clone(), api.clone(), tag);
                            }
                        }
                        DashboardEvent::ReportLoaded { tag, outcome } => {
                            let resolution = selection.with_mut(|sel| sel.resolve(tag, outcome));
                            if resolution == Resolution::Stale {
                                tracing::debug!(seq = tag.seq, "ignored superseded report");
                            }
                        }
                    }
                }
            }
        })
    };

    sender_slot.borrow_mut().replace(coroutine.tx());

    use_context_provider(|| DashboardState {
        directory,
        selection,
    })
}

fn queue_report<A>(sender_slot: SenderSlot, api: A, tag: RequestTag)
where
    A: PresenceApi + 'static,
{
    let Some(sender) = sender_slot.borrow().as_ref().cloned() else {
        tracing::warn!(seq = tag.seq, "dashboard loop not ready; report not requested");
        return;
    };

    platform::spawn_future(async move {
        let outcome = api.fetch_report(tag.kind, tag.individual.0).await;
        if sender
            .unbounded_send(DashboardEvent::ReportLoaded { tag, outcome })
            .is_err()
        {
            tracing::debug!(seq = tag.seq, "dashboard closed before the report arrived");
        }
    });
}
