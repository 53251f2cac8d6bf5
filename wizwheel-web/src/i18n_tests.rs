//! Locale bundle parity: the `en` and `id` tables must carry the same key set.

use serde_json::Value;
use std::collections::BTreeSet;

fn load_locale(locale: &str) -> Value {
    let path = format!("i18n/{locale}.json");
    let content =
        std::fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read {path}"));
    serde_json::from_str(&content).unwrap_or_else(|_| panic!("Failed to parse JSON in {path}"))
}

fn collect_keys(prefix: &str, value: &Value, out: &mut BTreeSet<String>) {
    if let Value::Object(map) = value {
        for (k, v) in map {
            let next_prefix = if prefix.is_empty() {
                k.clone()
            } else {
                format!("{prefix}.{k}")
            };
            if v.is_object() {
                collect_keys(&next_prefix, v, out);
            } else {
                out.insert(next_prefix);
            }
        }
    }
}

fn keys_of(locale: &str) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();
    collect_keys("", &load_locale(locale), &mut keys);
    keys
}

#[test]
fn locales_have_matching_keys_in_both_directions() {
    let en = keys_of("en");
    let id = keys_of("id");

    for key in &en {
        assert!(id.contains(key), "Missing key '{key}' in locale 'id'");
    }
    for key in &id {
        assert!(en.contains(key), "Missing key '{key}' in locale 'en'");
    }
}

#[test]
fn required_feature_keys_exist() {
    let required_keys = [
        "app.title",
        "start.begin",
        "splash.title",
        "wheel.chooseLanguage",
        "wheel.welcome",
        "wheel.instruction",
        "wheel.spinButton",
        "wheel.landedOn",
        "wheel.modalButton",
        "form.yourName",
        "form.castSpell",
        "form.tagWizards",
        "form.shareWhatsApp",
        "form.generateLink",
        "form.linkCopied",
        "nucleus.title",
        "nucleus.complete",
        "reflection.title",
        "reflection.submit",
        "reflection.notEnough",
        "reflection.failed",
        "profile.title",
        "profile.guidingPrinciple",
        "profile.latentPower",
        "closing.title",
        "closing.complete",
        "audio.sfx",
        "audio.music",
        "audio.volume",
    ];

    for locale in ["en", "id"] {
        let keys = keys_of(locale);
        for key in required_keys {
            assert!(keys.contains(key), "Missing key '{key}' in locale '{locale}'");
        }
    }
}

#[test]
fn all_leaf_values_are_non_empty_strings() {
    for locale in ["en", "id"] {
        let json = load_locale(locale);
        let mut keys = BTreeSet::new();
        collect_keys("", &json, &mut keys);
        for key in keys {
            let mut current = &json;
            for part in key.split('.') {
                current = &current[part];
            }
            let text = current.as_str().unwrap_or_default();
            assert!(!text.is_empty(), "Empty value for '{key}' in '{locale}'");
        }
    }
}
