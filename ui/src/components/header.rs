use dioxus::prelude::*;
use once_cell::sync::OnceCell;

use crate::components::language_switcher::LanguageSwitcher;
use crate::providers::locale::use_i18n;

const HEADER_CSS: Asset = asset!("/assets/styling/header.css");

/// Platform crates register link builders so `ui` never needs to know each
/// platform's `Route` enum. The header renders localized labels *inside*
/// each supplied link.
///
/// Wiring in a platform crate:
/// ```ignore
/// use ui::components::header::{register_nav, NavBuilder};
/// fn install_nav() {
///     register_nav(NavBuilder {
///         home: |label| rsx!( Link { class: "site-header__link", to: Route::Home {}, "{label}" } ),
///         about: |label| rsx!( Link { class: "site-header__link", to: Route::About {}, "{label}" } ),
///     });
/// }
/// ```
///
/// Without a registered builder the header still renders the in-page anchor
/// links, so `ui` previews stay usable.
pub struct NavBuilder {
    pub home: fn(label: &str) -> Element,
    pub about: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn Header() -> Element {
    let i18n = use_i18n();
    let translation = i18n.translation();
    let nav = translation.t("navigation");

    #[cfg(debug_assertions)]
    {
        println!("[i18n] Header render locale={}", translation.locale);
    }

    let route_links = NAV_BUILDER.get().map(|builder| {
        let home = (builder.home)(nav.text("home"));
        let about = (builder.about)(nav.text("about"));
        rsx! {
            {home}
            {about}
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: HEADER_CSS }

        header { class: "site-header",
            div { class: "site-header__inner",
                div { class: "site-header__brand",
                    span { class: "site-header__brand-mark", "Sala" }
                    span { class: "site-header__brand-tagline", {translation.t("site").text("tagline")} }
                }

                nav { class: "site-header__links",
                    if let Some(links) = route_links {
                        {links}
                    }
                    a { class: "site-header__link", href: "/#features", {nav.text("features")} }
                    a { class: "site-header__link", href: "mailto:hello@sala.example", {nav.text("contact")} }
                }

                LanguageSwitcher {}
            }
        }
    }
}
