use std::collections::BTreeSet;

use serde_json::Value;

/// Locale document shape test.
/// Ensures every non-default locale provides *exactly* the leaf paths
/// present in the default (th) `i18n/th.json`, so a missing or orphaned
/// translation cannot slip in.
///
/// If you add a new locale:
/// 1. Create `ui/i18n/<code>.json` with the same key shape as `th.json`.
/// 2. Register it in `LOCALES` below and in the locale registry.
/// 3. Run `cargo test -p sala-ui` to confirm completeness.

const TH: &str = include_str!("../i18n/th.json");
const EN: &str = include_str!("../i18n/en.json");

const LOCALES: &[(&str, &str)] = &[
    ("en", EN),
    // Add new locales here.
];

#[test]
fn all_locales_match_the_default_shape() {
    let reference = leaf_paths(&parse("th", TH));
    assert!(
        !reference.is_empty(),
        "Default (th) document contains no keys."
    );

    let mut failures = Vec::new();

    for (locale, src) in LOCALES {
        let keys = leaf_paths(&parse(locale, src));

        let missing: Vec<String> = reference.difference(&keys).cloned().collect();
        let extra: Vec<String> = keys.difference(&reference).cloned().collect();

        if !missing.is_empty() {
            failures.push(format!(
                "Locale {locale} is missing {} key(s):\n  {}",
                missing.len(),
                missing.join("\n  ")
            ));
        }
        if !extra.is_empty() {
            failures.push(format!(
                "Locale {locale} has {} key(s) absent from th:\n  {}",
                extra.len(),
                extra.join("\n  ")
            ));
        }
    }

    if !failures.is_empty() {
        panic!(
            "Locale document shape check failed:\n\n{}\n\nHint: mirror the key shape of th.json, then translate.",
            failures.join("\n\n")
        );
    }
}

#[test]
fn no_document_contains_empty_values() {
    for (locale, src) in [("th", TH), ("en", EN)] {
        let doc = parse(locale, src);
        for path in leaf_paths(&doc) {
            let value = path.split('.').fold(&doc, |node, key| &node[key]);
            assert_ne!(
                value.as_str().unwrap_or(""),
                "",
                "{locale}: `{path}` is empty or not a string"
            );
        }
    }
}

fn parse(locale: &str, src: &str) -> Value {
    serde_json::from_str(src)
        .unwrap_or_else(|err| panic!("{locale}.json is not valid JSON: {err}"))
}

/// Dot paths of every leaf in `doc`.
fn leaf_paths(doc: &Value) -> BTreeSet<String> {
    let mut paths = BTreeSet::new();
    collect(doc, String::new(), &mut paths);
    paths
}

fn collect(node: &Value, prefix: String, out: &mut BTreeSet<String>) {
    match node.as_object() {
        Some(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                collect(child, path, out);
            }
        }
        None => {
            out.insert(prefix);
        }
    }
}
