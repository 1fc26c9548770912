use dioxus::prelude::*;

use crate::core::report::ReportKind;
use crate::dashboard::Dashboard;

#[component]
pub fn PresenceWeekday() -> Element {
    // Subscribe to the global language code so the page re-renders on switch.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-presence",
            h1 { {crate::t!("page-presence-title")} }
            p { {crate::t!("page-presence-intro")} }
            Dashboard { kind: ReportKind::PresenceByWeekday }
        }
    }
}
