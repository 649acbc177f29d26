use dioxus::prelude::*;

use crate::providers::locale::use_i18n;

/// Cards are driven by the `features.*` scope: each entry names a
/// name/description key pair (`<key>` / `<key>Desc`) plus a glyph.
const FEATURES: &[(&str, &str)] = &[
    ("performance", "⚡"),
    ("responsive", "📱"),
    ("animations", "✨"),
    ("i18n", "🌐"),
];

#[component]
pub fn Features() -> Element {
    let i18n = use_i18n();
    let translation = i18n.translation();
    let features = translation.t("features");

    let cards = FEATURES.iter().copied().map(|(key, glyph)| {
        let desc_key = format!("{key}Desc");
        rsx! {
            article { key: "{key}", class: "feature-card",
                span { class: "feature-card__glyph", aria_hidden: "true", "{glyph}" }
                h3 { class: "feature-card__name", {features.text(key)} }
                p { class: "feature-card__description", {features.text(&desc_key)} }
            }
        }
    });

    rsx! {
        section { id: "features", class: "features",
            div { class: "features__inner",
                h2 { class: "features__title", {features.text("title")} }
                div { class: "features__grid", {cards} }
            }
        }
    }
}
