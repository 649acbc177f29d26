//! Locale context provider.
//!
//! `LocaleProvider` runs the whole read path once per instantiation: the
//! locale cookie is read on the server, validated against the registry, and
//! the matching dictionary is loaded before children render. Consumers reach
//! the result through [`use_i18n`].
//!
//! Switching works the way a cookie-persisted preference has to: persist
//! first, then re-run the read path. [`I18nContext::switch`] writes the
//! cookie from the client and restarts the translation resource; the restart
//! cancels any in-flight load, so the latest switch always wins.

use dioxus::prelude::*;

use crate::core::cookies;
use crate::i18n::{load_dictionary, Locale, Translation, DEFAULT_LOCALE};

/// Handle exposed to every component below a `LocaleProvider`.
#[derive(Clone, Copy)]
pub struct I18nContext {
    current: Signal<Option<Translation>>,
    switching: Signal<bool>,
    resource: Resource<Result<Translation, String>>,
}

impl I18nContext {
    /// The bound locale + dictionary. Only replaced when a new pair
    /// resolves, so subscribers re-render exactly on locale switches.
    pub fn translation(&self) -> Translation {
        (self.current)()
            .expect("LocaleProvider renders children only after a dictionary is bound")
    }

    pub fn locale(&self) -> Locale {
        self.translation().locale
    }

    /// True while a switch is waiting for its dictionary.
    pub fn pending(&self) -> bool {
        (self.switching)()
    }

    /// Persist `locale` and re-run the read path.
    pub fn switch(&self, locale: Locale) {
        let mut this = *self;
        spawn(async move {
            this.switching.set(true);
            cookies::write(api::LOCALE_COOKIE, locale.code(), cookies::MAX_AGE_ONE_YEAR).await;
            this.resource.restart();
        });
    }
}

/// Read the locale context.
///
/// Panics when called outside a `LocaleProvider`; that is an integration
/// bug worth failing loudly on rather than rendering untranslated defaults.
pub fn use_i18n() -> I18nContext {
    try_use_context::<I18nContext>()
        .expect("use_i18n must be called from a component under LocaleProvider")
}

/// Cookie → registry → dictionary: the per-request read path.
///
/// An absent or unknown cookie value degrades silently to the default
/// locale; only a dictionary failure for the default locale itself comes
/// back as an error. Errors cross the hydration boundary as display
/// strings.
async fn fetch_translation() -> Result<Translation, String> {
    let cookie = api::locale_cookie().await.ok().flatten();
    let locale = cookie
        .as_deref()
        .and_then(Locale::from_code)
        .unwrap_or(DEFAULT_LOCALE);
    let dict = load_dictionary(locale)
        .await
        .map_err(|err| err.to_string())?;
    Ok(Translation { locale, dict })
}

#[component]
pub fn LocaleProvider(children: Element) -> Element {
    let resource = use_server_future(fetch_translation)?;

    // Sticky last-good value: while a switch reloads, the previous
    // translation stays visible instead of suspending the subtree.
    let initial = resource.value()();
    let initial_err = match &initial {
        Some(Err(message)) => Some(message.clone()),
        _ => None,
    };
    let initial_ok = match initial {
        Some(Ok(translation)) => Some(translation),
        _ => None,
    };
    let mut current = use_signal(move || initial_ok);
    let mut fatal = use_signal(move || initial_err);
    let mut switching = use_signal(|| false);

    use_effect(move || match resource.value()() {
        Some(Ok(translation)) => {
            fatal.set(None);
            switching.set(false);
            // Guarded write: consumers subscribe to `current`, which must
            // only change when the locale/dictionary pair actually changed.
            if current.peek().as_ref() != Some(&translation) {
                current.set(Some(translation));
            }
        }
        Some(Err(message)) => {
            fatal.set(Some(message));
            switching.set(false);
        }
        None => {}
    });

    use_context_provider(|| I18nContext {
        current,
        switching,
        resource,
    });

    if let Some(message) = fatal() {
        // Double fallback failed; there is nothing translated to render.
        return rsx! {
            section { class: "i18n-error",
                h1 { "Translations unavailable" }
                p { "{message}" }
            }
        };
    }

    if current.read().is_some() {
        rsx! { {children} }
    } else {
        rsx! {}
    }
}
