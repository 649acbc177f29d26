use dioxus::prelude::*;

use crate::providers::locale::use_i18n;

const LANDING_CSS: Asset = asset!("/assets/styling/landing.css");

/// Secondary page; doubles as a living demo of scoped dictionary access.
#[component]
pub fn About() -> Element {
    let i18n = use_i18n();
    let translation = i18n.translation();
    let nav = translation.t("navigation");
    let title = format!("{} | Sala", nav.text("about"));

    rsx! {
        document::Title { "{title}" }
        document::Link { rel: "stylesheet", href: LANDING_CSS }
        main { class: "page page-about",
            h1 { class: "page-about__title", {nav.text("about")} }
            p { class: "page-about__locale", "Current locale: {translation.locale}" }
            p { class: "page-about__description", {translation.t("homePage").text("description")} }

            ul { class: "page-about__nav-list",
                li { {nav.text("home")} }
                li { {nav.text("about")} }
                li { {nav.text("features")} }
                li { {nav.text("contact")} }
            }
        }
    }
}
