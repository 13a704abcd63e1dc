use std::collections::{BTreeSet, HashSet};

/// Every non-fallback locale must define at least the keys of the pt-BR
/// fallback `portfolio-ui.ftl`, and no catalogue may define a key twice.
///
/// To add a locale:
/// 1. Create `ui/i18n/<locale>/portfolio-ui.ftl`
/// 2. Copy all keys from `pt-BR/portfolio-ui.ftl` and translate them
/// 3. Register it in `LOCALES` below
#[test]
fn all_locales_have_all_fallback_keys() {
    const PT_BR: &str = include_str!("../i18n/pt-BR/portfolio-ui.ftl");
    const LOCALES: &[(&str, &str)] = &[("en-US", include_str!("../i18n/en-US/portfolio-ui.ftl"))];

    let fallback = keys_of(PT_BR, "pt-BR");
    assert!(!fallback.is_empty(), "fallback (pt-BR) contains no keys");

    let failures: Vec<String> = LOCALES
        .iter()
        .filter_map(|(locale, src)| {
            let keys = keys_of(src, locale);
            let missing: BTreeSet<&String> = fallback.iter().filter(|k| !keys.contains(*k)).collect();
            (!missing.is_empty()).then(|| {
                format!(
                    "{locale} is missing {} key(s):\n  {}",
                    missing.len(),
                    missing.into_iter().cloned().collect::<Vec<_>>().join("\n  ")
                )
            })
        })
        .collect();

    assert!(
        failures.is_empty(),
        "translation completeness failed:\n\n{}",
        failures.join("\n\n")
    );
}

#[test]
fn toast_and_navigation_copy_is_translated() {
    let pt = include_str!("../i18n/pt-BR/portfolio-ui.ftl");
    let en = include_str!("../i18n/en-US/portfolio-ui.ftl");
    assert!(pt.contains("toast-email-copied = E-mail copiado!"));
    assert!(en.contains("toast-email-copied = E-mail copied!"));
    assert!(pt.contains("nav-services = Serviços"));
}

/// Message ids of a Fluent file; panics on a duplicate definition.
fn keys_of(src: &str, locale: &str) -> HashSet<String> {
    let mut keys = HashSet::new();
    for raw in src.lines() {
        if raw.starts_with(char::is_whitespace) {
            continue;
        }
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('-') {
            continue;
        }
        let Some((left, _)) = line.split_once('=') else {
            continue;
        };
        let key = left.trim();
        if key.is_empty() || key.contains(char::is_whitespace) {
            continue;
        }
        assert!(
            keys.insert(key.to_string()),
            "duplicate key `{key}` in {locale} (line: \"{raw}\")"
        );
    }
    keys
}
