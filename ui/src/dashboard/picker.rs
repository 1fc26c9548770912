use dioxus::prelude::*;

use crate::core::directory::{DirectoryState, Individual, IndividualId};
use crate::t;

use super::DashboardEvent;

/// Selection control listing the directory.
///
/// Stays hidden behind a loading line until the directory arrives. A failed
/// load leaves nothing to pick.
#[component]
pub fn UserPicker(directory: DirectoryState, selected: Option<IndividualId>) -> Element {
    let events = use_coroutine_handle::<DashboardEvent>();

    let individuals = match directory {
        DirectoryState::Loading => {
            return rsx! {
                p { id: "loading", class: "dashboard__loading", {t!("directory-loading")} }
            };
        }
        DirectoryState::Failed(_) => {
            return rsx! {
                p { class: "dashboard__notice dashboard__notice--error", {t!("directory-failed")} }
            };
        }
        DirectoryState::Ready(list) if list.is_empty() => {
            return rsx! {
                p { class: "dashboard__notice", {t!("directory-empty")} }
            };
        }
        DirectoryState::Ready(list) => list,
    };

    let current = selected.map(|id| id.to_string()).unwrap_or_default();

    rsx! {
        div { class: "dashboard__picker",
            label { r#for: "user_id", {t!("picker-label")} }
            select {
                id: "user_id",
                value: "{current}",
                onchange: move |evt: FormEvent| {
                    events.send(DashboardEvent::SelectIndividual(evt.value()));
                },
                option { value: "", {t!("picker-placeholder")} }
                for individual in individuals {
                    option {
                        key: "{individual.id}",
                        value: "{individual.id}",
                        selected: selected == Some(individual.id),
                        "{individual.name}"
                    }
                }
            }
        }
    }
}

/// Avatar of the selected individual, if they have one.
#[component]
pub fn AvatarBadge(individual: Option<Individual>) -> Element {
    let Some(Individual {
        name,
        avatar: Some(avatar),
        ..
    }) = individual
    else {
        return rsx! {};
    };
    let alt = t!("avatar-alt", name = name);

    rsx! {
        div { id: "user_data", class: "dashboard__avatar",
            img { src: "{avatar}", alt: "{alt}" }
        }
    }
}
