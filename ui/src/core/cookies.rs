//! Browser cookie helpers.
//!
//! Writes are best-effort: an environment that disallows cookie writes
//! leaves the stored preference unchanged and the next request simply sees
//! the old value.

use dioxus::prelude::*;

/// Lifetime of the locale preference.
pub const MAX_AGE_ONE_YEAR: u64 = 31_536_000;

/// Set `name=value` on the document, scoped to the whole site.
pub async fn write(name: &str, value: &str, max_age: u64) {
    let _ = document::eval(&set_cookie_js(name, value, max_age)).await;
}

/// JS statement performing the write. Kept separate so the attribute string
/// stays testable without a browser.
fn set_cookie_js(name: &str, value: &str, max_age: u64) -> String {
    format!(
        r#"(function(){{ try {{ document.cookie = "{name}={value}; path=/; max-age={max_age}; SameSite=Lax"; }} catch(e) {{}} return ""; }})()"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookie_attributes_match_the_persisted_contract() {
        let js = set_cookie_js("NEXT_LOCALE", "en", MAX_AGE_ONE_YEAR);
        assert!(js.contains("NEXT_LOCALE=en"));
        assert!(js.contains("path=/"));
        assert!(js.contains("max-age=31536000"));
        assert!(js.contains("SameSite=Lax"));
    }
}
