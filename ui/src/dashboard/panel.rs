use dioxus::prelude::*;

use crate::core::report::ReportKind;
use crate::t;

use super::{AvatarBadge, ChartSurface, DashboardEvent, DashboardState, UserPicker};

const DASHBOARD_CSS: Asset = asset!("/assets/styling/dashboard.css");

/// Report view for one kind. Mounting it makes `kind` the active report.
#[component]
pub fn Dashboard(kind: ReportKind) -> Element {
    let state = use_context::<DashboardState>();
    let events = use_coroutine_handle::<DashboardEvent>();

    use_effect(use_reactive!(|kind| {
        events.send(DashboardEvent::SelectKind(kind));
    }));

    let directory = (state.directory)();
    let selection = (state.selection)();
    let selected = selection.individual().cloned();
    // The controller may still be on the previous page's kind until the
    // effect above has run.
    let rendered = selection
        .rendered()
        .filter(|_| selection.kind() == kind)
        .map(|(dataset, options)| (dataset.clone(), options.clone()));
    let loading = selection.loading_visible();
    let failure = selection.last_error().map(str::to_string);
    let modifier = kind.slug();

    rsx! {
        document::Link { rel: "stylesheet", href: DASHBOARD_CSS }

        div { class: "dashboard dashboard--{modifier}",
            div { class: "dashboard__controls",
                UserPicker { directory, selected: selected.as_ref().map(|i| i.id) }
                AvatarBadge { individual: selected }
            }

            if loading {
                p { id: "loading", class: "dashboard__loading", {t!("report-loading")} }
            }

            if let Some(reason) = failure {
                p { class: "dashboard__notice dashboard__notice--error",
                    {t!("report-failed", reason = reason)}
                }
            }

            if let Some((dataset, options)) = rendered {
                ChartSurface { dataset, options }
            }
        }
    }
}
