use dioxus::prelude::*;

use api::{Endpoints, HttpClient};
use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::dashboard::use_dashboard_provider;
use ui::views::{MeanTime, PresenceWeekday, StartEnd};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    PresenceWeekday {},
    #[route("/mean_time")]
    MeanTime {},
    #[route("/start_end")]
    StartEnd {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn nav_presence(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::PresenceWeekday {},
        "{label}"
    })
}
fn nav_mean_time(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::MeanTime {},
        "{label}"
    })
}
fn nav_start_end(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::StartEnd {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_nav(NavBuilder {
        presence: nav_presence,
        mean_time: nav_mean_time,
        start_end: nav_start_end,
    });

    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    // Directory and selection live above the router so they survive page switches.
    use_dashboard_provider(HttpClient::new(Endpoints::default()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Web layout: shared navbar above the routed page.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
