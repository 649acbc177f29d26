//! Dot-path lookup into a loaded dictionary.

use serde_json::Value;

use super::dictionary::Dictionary;

/// Resolve `scope` (e.g. `"homePage.hero"`) against `dict`.
///
/// The empty path returns the whole dictionary; a path naming an
/// intermediate node returns that sub-mapping. Any missing key, or a step
/// through a non-mapping node, resolves to `None` instead of failing, so a
/// missing translation never takes rendering down.
pub fn resolve<'a>(dict: &'a Dictionary, scope: &str) -> Option<&'a Value> {
    if scope.is_empty() {
        return Some(dict);
    }
    scope.split('.').try_fold(dict, |node, key| node.get(key))
}

/// A resolved position in a dictionary.
///
/// Absent positions are inert: every further lookup stays absent and leaves
/// render as the empty string, so views can index below a scope without
/// guarding each step.
#[derive(Debug, Clone, Copy)]
pub struct Scoped<'a> {
    node: Option<&'a Value>,
}

impl<'a> Scoped<'a> {
    pub(crate) fn new(node: Option<&'a Value>) -> Self {
        Self { node }
    }

    /// Narrow this scope by a further dot path.
    pub fn t(self, scope: &str) -> Scoped<'a> {
        Scoped::new(self.node.and_then(|node| resolve(node, scope)))
    }

    /// Leaf string under this scope, or `""` when absent or not a string.
    pub fn text(self, scope: &str) -> &'a str {
        self.t(scope).as_str()
    }

    /// This node as a leaf string, or `""`.
    pub fn as_str(self) -> &'a str {
        self.node.and_then(Value::as_str).unwrap_or("")
    }

    pub fn exists(self) -> bool {
        self.node.is_some()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn sample() -> Dictionary {
        json!({
            "homePage": {
                "hero": { "title": "X" }
            }
        })
    }

    #[test]
    fn empty_path_returns_the_whole_dictionary() {
        let dict = sample();
        assert_eq!(resolve(&dict, ""), Some(&dict));
    }

    #[test]
    fn intermediate_paths_resolve_to_sub_mappings() {
        let dict = sample();
        assert_eq!(
            resolve(&dict, "homePage.hero"),
            Some(&json!({ "title": "X" }))
        );
    }

    #[test]
    fn leaf_paths_resolve_to_values() {
        let dict = sample();
        assert_eq!(resolve(&dict, "homePage.hero.title"), Some(&json!("X")));
    }

    #[test]
    fn missing_intermediate_keys_resolve_to_none() {
        let dict = sample();
        assert_eq!(resolve(&dict, "homePage.missing.title"), None);
    }

    #[test]
    fn paths_through_leaves_resolve_to_none() {
        let dict = sample();
        assert_eq!(resolve(&dict, "homePage.hero.title.deeper"), None);
    }

    #[test]
    fn scoped_chaining_matches_direct_resolution() {
        let dict = sample();
        let root = Scoped::new(Some(&dict));
        assert_eq!(root.t("homePage").t("hero").text("title"), "X");
        assert_eq!(root.text("homePage.hero.title"), "X");
    }

    #[test]
    fn scoped_access_below_an_absent_node_stays_absent() {
        let dict = sample();
        let missing = Scoped::new(resolve(&dict, "homePage.missing"));
        assert!(!missing.exists());
        assert_eq!(missing.text("title"), "");
        assert_eq!(missing.t("deeper.path").as_str(), "");
    }

    #[test]
    fn mappings_do_not_render_as_text() {
        let dict = sample();
        let hero = Scoped::new(resolve(&dict, "homePage.hero"));
        assert!(hero.exists());
        assert_eq!(hero.as_str(), "");
    }
}
