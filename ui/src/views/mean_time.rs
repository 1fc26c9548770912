use dioxus::prelude::*;

use crate::core::report::ReportKind;
use crate::dashboard::Dashboard;

#[component]
pub fn MeanTime() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-mean-time",
            h1 { {crate::t!("page-mean-time-title")} }
            p { {crate::t!("page-mean-time-intro")} }
            Dashboard { kind: ReportKind::MeanTimeByWeekday }
        }
    }
}
