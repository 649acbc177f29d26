use dioxus::prelude::*;

use crate::components::{Features, Hero};
use crate::providers::locale::use_i18n;

#[cfg(debug_assertions)]
fn log_home_render(locale: &str) {
    // Lightweight render trace for diagnosing locale refresh issues.
    println!("[i18n] Home render (locale={locale})");
}

#[component]
pub fn Home() -> Element {
    let i18n = use_i18n();
    let translation = i18n.translation();
    let title = translation.t("homePage.hero").text("title").to_string();

    #[cfg(debug_assertions)]
    {
        log_home_render(translation.locale.code());
    }

    rsx! {
        document::Title { "{title}" }
        main { class: "page page-home",
            Hero {}
            Features {}
        }
    }
}
