use dioxus::prelude::*;

use ui::components::header::{register_nav, NavBuilder};
use ui::components::Header;
use ui::providers::locale::LocaleProvider;
use ui::views::{About, Home};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "site-header__link",
        to: Route::Home {},
        "{label}"
    })
}
fn nav_about(label: &str) -> Element {
    rsx!(Link {
        class: "site-header__link",
        to: Route::About {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        // Register localized navigation builders before the first render.
        register_nav(NavBuilder {
            home: nav_home,
            about: nav_about,
        });
    }

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        LocaleProvider {
            Router::<Route> {}
        }
    }
}

/// A web-specific shell around the shared `Header` component which allows
/// us to use the web-specific `Route` enum.
#[component]
fn WebShell() -> Element {
    rsx! {
        Header {}
        Outlet::<Route> {}
    }
}
