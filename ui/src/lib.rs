//! Shared UI crate for Sala. Components, views and the i18n core live here.

pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Localized site header with platform-registered nav links (components/header.rs)
    pub mod header;
    pub use header::register_nav;
    pub use header::Header;
    pub use header::NavBuilder;

    pub mod hero;
    pub use hero::Hero;

    pub mod features;
    pub use features::Features;

    pub mod language_switcher;
    pub use language_switcher::LanguageSwitcher;
}

pub mod providers {
    // Locale context provider (providers/locale.rs)
    pub mod locale;
    pub use locale::use_i18n;
    pub use locale::I18nContext;
    pub use locale::LocaleProvider;
}
