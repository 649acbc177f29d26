use dioxus::prelude::*;

use crate::providers::locale::use_i18n;

const LANDING_CSS: Asset = asset!("/assets/styling/landing.css");

#[component]
pub fn Hero() -> Element {
    let i18n = use_i18n();
    let translation = i18n.translation();
    let hero = translation.t("homePage.hero");

    rsx! {
        document::Link { rel: "stylesheet", href: LANDING_CSS }

        section { class: "hero",
            div { class: "hero__inner",
                h1 { class: "hero__title", {hero.text("title")} }
                p { class: "hero__description", {hero.text("description")} }
                div { class: "hero__actions",
                    button { class: "button button--primary", {hero.text("getStarted")} }
                    button { class: "button button--ghost", {hero.text("learnMore")} }
                }
            }
        }
    }
}
