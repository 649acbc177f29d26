//! Locale dictionary loading.
//!
//! One JSON document per locale, embedded at compile time. A broken or
//! missing document falls back to the default locale's document; only a
//! failure of *that* document surfaces to the caller.

use rust_embed::Embed;
use thiserror::Error;

use super::{Locale, DEFAULT_LOCALE};

/// Full nested translation data for one locale: string keys mapping to
/// further mappings or leaf strings.
pub type Dictionary = serde_json::Value;

/// Embedded locale documents (`i18n/<code>.json`).
#[derive(Embed)]
#[folder = "i18n"]
struct Documents;

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("no dictionary document embedded for locale `{0}`")]
    Missing(Locale),
    #[error("dictionary document for locale `{locale}` is not valid JSON")]
    Parse {
        locale: Locale,
        #[source]
        source: serde_json::Error,
    },
}

/// Load the dictionary for `locale`.
///
/// Falls back to [`DEFAULT_LOCALE`]'s document when the requested one is
/// missing or unparseable, logging the original failure so a broken document
/// stays visible in server logs. There is no secondary fallback: an error
/// from the default document itself is returned.
pub async fn load_dictionary(locale: Locale) -> Result<Dictionary, DictionaryError> {
    match fetch_document(locale) {
        Ok(dict) => Ok(dict),
        Err(err) if locale != DEFAULT_LOCALE => {
            eprintln!(
                "[i18n] dictionary for `{locale}` failed to load ({err}); falling back to `{DEFAULT_LOCALE}`"
            );
            fetch_document(DEFAULT_LOCALE)
        }
        Err(err) => Err(err),
    }
}

fn fetch_document(locale: Locale) -> Result<Dictionary, DictionaryError> {
    let path = format!("{}.json", locale.code());
    let file = Documents::get(&path).ok_or(DictionaryError::Missing(locale))?;
    serde_json::from_slice(&file.data).map_err(|source| DictionaryError::Parse { locale, source })
}
