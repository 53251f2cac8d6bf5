//! Locale bundles and text lookup.
//!
//! Two embedded bundles (`en`, `id`) that stay structurally parallel; the
//! parity is enforced by tests. Lookup falls back to English, and a missing
//! key renders as the key itself so broken copy is visible rather than blank.

use serde_json::Value;
use std::cell::RefCell;
use wizwheel_game::Locale;

const LOCALE_TABLE: &[(&str, &str)] = &[
    ("en", include_str!("../i18n/en.json")),
    ("id", include_str!("../i18n/id.json")),
];

pub struct I18nBundle {
    pub lang: String,
    translations: Value,
    fallback: Value,
}

fn load_translations(lang: &str) -> Option<Value> {
    let bundle = LOCALE_TABLE
        .iter()
        .find_map(|(code, data)| (*code == lang).then_some(*data))
        .unwrap_or(LOCALE_TABLE[0].1);

    serde_json::from_str(bundle).ok()
}

fn build_bundle(lang: &str) -> Option<I18nBundle> {
    let fallback = load_translations("en")?;
    let translations = load_translations(lang)?;

    Some(I18nBundle {
        lang: lang.to_string(),
        translations,
        fallback,
    })
}

fn fallback_bundle() -> I18nBundle {
    let fallback = load_translations("en").unwrap_or(Value::Object(serde_json::Map::new()));

    I18nBundle {
        lang: "en".to_string(),
        translations: fallback.clone(),
        fallback,
    }
}

fn saved_lang() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item("wizwheel.locale").ok().flatten())
            .unwrap_or_else(|| "en".to_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        "en".to_string()
    }
}

thread_local! {
    static CURRENT: RefCell<I18nBundle> = RefCell::new({
        let initial = saved_lang();
        build_bundle(&initial).unwrap_or_else(|| build_bundle("en").unwrap_or_else(fallback_bundle))
    });
}

/// Set the current display language.
///
/// Swaps the active bundle, updates the document `lang` attribute, and
/// persists the choice for future sessions.
pub fn set_lang(lang: &str) {
    if let Some(b) = build_bundle(lang) {
        CURRENT.with(|cell| cell.replace(b));
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(doc) = web_sys::window().and_then(|w| w.document())
                && let Some(el) = doc.document_element()
            {
                let _ = el.set_attribute("lang", lang);
            }
            if let Some(storage) =
                web_sys::window().and_then(|win| win.local_storage().ok().flatten())
            {
                let _ = storage.set_item("wizwheel.locale", lang);
            }
        }
    }
}

/// Set the current display language from a session locale.
pub fn set_locale(locale: Locale) {
    set_lang(locale.as_str());
}

/// Get the current active language code.
#[must_use]
pub fn current_lang() -> String {
    CURRENT.with(|c| c.borrow().lang.clone())
}

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    let mut current = obj;
    for k in key.split('.') {
        match current.get(k) {
            Some(value) => current = value,
            None => return None,
        }
    }
    Some(current)
}

fn lookup(bundle: &I18nBundle, key: &str) -> Option<String> {
    get_nested_value(&bundle.translations, key)
        .or_else(|| get_nested_value(&bundle.fallback, key))
        .and_then(Value::as_str)
        .map(ToString::to_string)
}

/// Translate a dot-separated key.
#[must_use]
pub fn t(key: &str) -> String {
    CURRENT.with(|c| lookup(&c.borrow(), key)).unwrap_or_else(|| key.to_string())
}

/// Translate a key and substitute `{placeholder}` arguments.
#[must_use]
pub fn tr(key: &str, args: &[(&str, &str)]) -> String {
    let mut text = t(key);
    for (name, value) in args {
        text = text.replace(&format!("{{{name}}}"), value);
    }
    text
}
