//! Server functions shared by the Sala front end.

use dioxus::prelude::*;

/// Cookie holding the visitor's locale preference.
pub const LOCALE_COOKIE: &str = "NEXT_LOCALE";

/// Raw value of the locale cookie on the current request, if any.
///
/// Validation against the locale registry happens in `ui`; this function
/// only does the request-scoped read.
#[server]
pub async fn locale_cookie() -> Result<Option<String>, ServerFnError> {
    let headers: http::HeaderMap = extract().await?;
    Ok(headers
        .get(http::header::COOKIE)
        .and_then(|header| header.to_str().ok())
        .and_then(|raw| cookie_value(raw, LOCALE_COOKIE)))
}

/// Pull `name` out of a `Cookie` request header (`k=v; k2=v2; ...`).
pub fn cookie_value(header: &str, name: &str) -> Option<String> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key.trim() == name).then(|| value.trim().to_string())
    })
}
