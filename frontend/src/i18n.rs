use std::rc::Rc;

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;
use web_sys::Window;
use yew::prelude::*;

use crate::config::LANGUAGE_STORAGE_KEY;

const BUNDLE_EN: &str = include_str!("../locales/en.json");
const BUNDLE_RU: &str = include_str!("../locales/ru.json");
const BUNDLE_UZ: &str = include_str!("../locales/uz.json");

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    En,
    Ru,
    Uz,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Ru, Language::Uz];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ru => "ru",
            Language::Uz => "uz",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Ru => "RU",
            Language::Uz => "UZ",
        }
    }

    /// Accepts bare codes and region tags like `ru-RU`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag.split(['-', '_']).next()?.to_ascii_lowercase();
        Language::ALL.into_iter().find(|lang| lang.code() == primary)
    }

    /// Stored preference first, then the browser language, then English.
    pub fn detect(window: &Window) -> Self {
        let stored = window
            .local_storage()
            .ok()
            .flatten()
            .and_then(|storage| storage.get_item(LANGUAGE_STORAGE_KEY).ok())
            .flatten();
        stored
            .as_deref()
            .and_then(Language::from_tag)
            .or_else(|| window.navigator().language().as_deref().and_then(Language::from_tag))
            .unwrap_or_default()
    }

    pub fn persist(self, window: &Window) {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(LANGUAGE_STORAGE_KEY, self.code());
        }
    }
}

/// Every bundle, parsed once at startup.
#[derive(Debug, Default)]
pub struct Catalog {
    en: Value,
    ru: Value,
    uz: Value,
}

impl Catalog {
    pub fn load() -> Self {
        Self {
            en: parse_bundle(Language::En, BUNDLE_EN),
            ru: parse_bundle(Language::Ru, BUNDLE_RU),
            uz: parse_bundle(Language::Uz, BUNDLE_UZ),
        }
    }

    fn bundle(&self, language: Language) -> &Value {
        match language {
            Language::En => &self.en,
            Language::Ru => &self.ru,
            Language::Uz => &self.uz,
        }
    }

    /// Looks `key` up in `language`, then English.
    pub fn lookup(&self, language: Language, key: &str) -> Option<&Value> {
        walk(self.bundle(language), key).or_else(|| walk(&self.en, key))
    }

    /// The translated string, or the key itself when no bundle has it.
    pub fn text(&self, language: Language, key: &str) -> String {
        match self.lookup(language, key) {
            Some(Value::String(text)) => text.clone(),
            _ => {
                debug!("missing translation {} for {}", key, language.code());
                key.to_string()
            }
        }
    }

    /// Structured entries such as feature lists; empty when missing or
    /// malformed.
    pub fn list<T: DeserializeOwned>(&self, language: Language, key: &str) -> Vec<T> {
        self.lookup(language, key)
            .cloned()
            .and_then(|value| serde_json::from_value(value).ok())
            .unwrap_or_default()
    }
}

fn parse_bundle(language: Language, source: &str) -> Value {
    serde_json::from_str(source).unwrap_or_else(|err| {
        warn!("locale bundle {} failed to parse: {}", language.code(), err);
        Value::Null
    })
}

fn walk<'a>(root: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(root, |node, part| node.get(part))
}

/// Translation context handed down from the app root.
#[derive(Clone)]
pub struct I18n {
    pub language: Language,
    pub catalog: Rc<Catalog>,
    pub set_language: Callback<Language>,
}

impl PartialEq for I18n {
    fn eq(&self, other: &Self) -> bool {
        self.language == other.language && Rc::ptr_eq(&self.catalog, &other.catalog)
    }
}

impl I18n {
    pub fn t(&self, key: &str) -> String {
        self.catalog.text(self.language, key)
    }

    pub fn list<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        self.catalog.list(self.language, key)
    }
}

thread_local! {
    static CATALOG: Rc<Catalog> = Rc::new(Catalog::load());
}

/// The process-wide catalog; bundles are parsed on first use.
pub fn shared_catalog() -> Rc<Catalog> {
    CATALOG.with(Rc::clone)
}

#[hook]
pub fn use_i18n() -> I18n {
    use_context::<I18n>().unwrap_or_else(|| I18n {
        language: Language::En,
        catalog: shared_catalog(),
        set_language: Callback::noop(),
    })
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[test]
    fn bundles_parse() {
        let catalog = Catalog::load();
        for language in Language::ALL {
            assert!(catalog.bundle(language).is_object(), "{} bundle", language.code());
        }
    }

    #[test]
    fn english_has_every_section_title() {
        let catalog = Catalog::load();
        for key in [
            "nav.services",
            "hero.title",
            "stats.title",
            "timeline.title",
            "services.title",
            "platforms.title",
            "clients.title",
            "mission.title",
            "whyUs.title",
            "cta.title",
            "cta.form.success",
            "cta.form.error",
            "serviceDetail.backToServices",
        ] {
            assert_ne!(catalog.text(Language::En, key), key, "missing {}", key);
        }
    }

    #[test]
    fn missing_keys_fall_back_to_english_then_the_key() {
        let catalog = Catalog::load();
        let english = catalog.text(Language::En, "serviceDetail.eld.title");
        assert_eq!(catalog.text(Language::Uz, "no.such.key"), "no.such.key");
        assert!(!catalog.text(Language::Ru, "serviceDetail.eld.title").is_empty());
        assert_ne!(english, "serviceDetail.eld.title");
    }

    #[test]
    fn language_tags() {
        assert_eq!(Language::from_tag("ru-RU"), Some(Language::Ru));
        assert_eq!(Language::from_tag("UZ"), Some(Language::Uz));
        assert_eq!(Language::from_tag("en_US"), Some(Language::En));
        assert_eq!(Language::from_tag("de"), None);
        assert_eq!(Language::from_tag(""), None);
    }

    #[derive(Deserialize)]
    struct Feature {
        title: String,
        description: String,
    }

    #[test]
    fn every_service_has_features() {
        let catalog = Catalog::load();
        for service in crate::content::ServiceKey::ALL {
            let features: Vec<Feature> =
                catalog.list(Language::En, &format!("serviceDetail.{}.features", service));
            assert!(!features.is_empty(), "{} has no features", service);
            assert!(features.iter().all(|f| !f.title.is_empty() && !f.description.is_empty()));
        }
    }
}
