use dioxus::prelude::*;

use crate::i18n::Locale;
use crate::providers::locale::use_i18n;

/// One button per registry locale. The active locale is highlighted and the
/// whole group is disabled while a switch's dictionary is in flight.
#[component]
pub fn LanguageSwitcher() -> Element {
    let i18n = use_i18n();
    let translation = i18n.translation();
    let current = translation.locale;
    let pending = i18n.pending();
    let group_label = translation.t("navigation").text("language").to_string();

    let buttons = Locale::all().iter().copied().map(|locale| {
        let class = if locale == current {
            "locale-switcher__button locale-switcher__button--active"
        } else {
            "locale-switcher__button"
        };
        let code = locale.code().to_uppercase();
        let native_name = locale.native_name();
        rsx! {
            button {
                key: "{locale}",
                class: "{class}",
                disabled: pending,
                title: "{native_name}",
                onclick: move |_| i18n.switch(locale),
                span { class: "locale-switcher__flag", aria_hidden: "true", {locale.flag()} }
                span { class: "locale-switcher__code", "{code}" }
            }
        }
    });

    rsx! {
        div { class: "locale-switcher", role: "group", aria_label: "{group_label}",
            {buttons}
        }
    }
}
