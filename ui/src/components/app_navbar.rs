use crate::i18n::{self};
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Platform-supplied link constructors.
///
/// `ui` does not know the platform's `Route` enum, so the binary registers one
/// function per report page. Each receives the localized label and returns a
/// `Link` containing it. These links are the report-kind switch: following one
/// mounts the page for that kind.
///
/// ```ignore
/// register_nav(NavBuilder {
///     presence: |label| rsx!(Link { class: "navbar__link", to: Route::Presence {}, "{label}" }),
///     mean_time: |label| rsx!(Link { class: "navbar__link", to: Route::MeanTime {}, "{label}" }),
///     start_end: |label| rsx!(Link { class: "navbar__link", to: Route::StartEnd {}, "{label}" }),
/// });
/// ```
pub struct NavBuilder {
    pub presence: fn(label: &str) -> Element,
    pub mean_time: fn(label: &str) -> Element,
    pub start_end: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    if NAV_BUILDER.set(builder).is_err() {
        tracing::debug!("nav builder already registered");
    }
}

#[component]
pub fn AppNavbar(children: Element) -> Element {
    i18n::init();

    let mut current_lang = use_signal(|| "en-US".to_string());
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    // Global language code, when the platform provides one.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    let on_change = move |evt: FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => tracing::warn!(%err, lang = %val, "language switch failed"),
        }
    };

    let internal_nav = NAV_BUILDER.get().map(|b| {
        let presence = (b.presence)(&t!("nav-presence"));
        let mean_time = (b.mean_time)(&t!("nav-mean-time"));
        let start_end = (b.start_end)(&t!("nav-start-end"));

        rsx! {
            nav { class: "navbar__links",
                {presence}
                {mean_time}
                {start_end}
            }
        }
    });

    let tagline = t!("tagline");

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        header {
            id: "navbar",
            class: "navbar",
            // Re-render marker for the global language signal.
            div { style: "display:none", "{_lang_marker}" }
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-mark", "Presence Analyzer" }
                    span { class: "navbar__brand-subtitle", "{tagline}" }
                }

                if let Some(nav) = internal_nav {
                    {nav}
                } else {
                    nav { class: "navbar__links", {children} }
                }

                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            { langs().iter().map(|code| {
                                let c = code.clone();
                                rsx!{
                                    option { key: "{c}", value: "{c}", "{c}" }
                                }
                            })}
                        }
                    }
                }
            }
        }
    }
}
