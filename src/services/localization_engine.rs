use std::collections::HashMap;

use serde_json::Value;

use crate::types::errors::LocaleError;

/// Bundled locale tables, keyed by language code.
const BUNDLED_LOCALES: &[(&str, &str)] = &[
    ("pt", include_str!("../../resources/locales/pt.json")),
    ("en", include_str!("../../resources/locales/en.json")),
];

/// Default locale when the requested or system locale is not bundled.
const DEFAULT_LOCALE: &str = "pt";

/// Trait defining the localization engine interface.
pub trait LocalizationEngineTrait {
    fn initialize(&mut self) -> Result<(), LocaleError>;
    fn set_locale(&mut self, lang: &str) -> Result<(), LocaleError>;
    fn get_locale(&self) -> &str;
    fn t(&self, key: &str, params: Option<&HashMap<String, String>>) -> String;
    fn plural(&self, key: &str, count: u64, params: Option<&HashMap<String, String>>) -> String;
    fn get_available_locales(&self) -> Vec<String>;
}

/// UI strings for Portuguese (default) and English.
pub struct LocalizationEngine {
    current_locale: String,
    locales: HashMap<String, Value>,
}

impl LocalizationEngine {
    pub fn new() -> Self {
        Self {
            current_locale: DEFAULT_LOCALE.to_string(),
            locales: HashMap::new(),
        }
    }

    /// Initialized engine switched to `lang`, falling back to the default
    /// locale when `lang` is not bundled.
    pub fn for_language(lang: &str) -> Result<Self, LocaleError> {
        let mut engine = Self::new();
        engine.initialize()?;
        if let Err(e) = engine.set_locale(lang) {
            tracing::warn!(error = %e, fallback = DEFAULT_LOCALE, "using default locale");
        }
        Ok(engine)
    }

    /// Looks up a nested key in a JSON value using dot notation.
    /// For example, "detail.visit" looks up `value["detail"]["visit"]`.
    fn lookup_key<'a>(data: &'a Value, key: &str) -> Option<&'a Value> {
        key.split('.').try_fold(data, |current, part| current.get(part))
    }

    /// Replaces `{param_name}` placeholders in a string with values from the params map.
    fn interpolate(template: &str, params: &HashMap<String, String>) -> String {
        let mut result = template.to_string();
        for (key, value) in params {
            let placeholder = format!("{{{}}}", key);
            result = result.replace(&placeholder, value);
        }
        result
    }

    /// Portuguese groups 0 and 1 under "one"; English only 1.
    fn get_plural_form(&self, count: u64) -> &'static str {
        match (self.current_locale.as_str(), count) {
            ("pt", 0 | 1) => "one",
            (_, 1) => "one",
            _ => "other",
        }
    }
}

impl Default for LocalizationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalizationEngineTrait for LocalizationEngine {
    /// Parses all bundled locale tables.
    fn initialize(&mut self) -> Result<(), LocaleError> {
        for (lang, raw) in BUNDLED_LOCALES {
            let data: Value = serde_json::from_str(raw)
                .map_err(|e| LocaleError::ParseError(format!("{}: {}", lang, e)))?;
            self.locales.insert(lang.to_string(), data);
        }
        Ok(())
    }

    fn set_locale(&mut self, lang: &str) -> Result<(), LocaleError> {
        if !self.locales.contains_key(lang) {
            return Err(LocaleError::UnsupportedLocale(lang.to_string()));
        }
        self.current_locale = lang.to_string();
        Ok(())
    }

    fn get_locale(&self) -> &str {
        &self.current_locale
    }

    /// Translates `key`; unknown keys come back unchanged.
    fn t(&self, key: &str, params: Option<&HashMap<String, String>>) -> String {
        let text = self
            .locales
            .get(&self.current_locale)
            .and_then(|data| Self::lookup_key(data, key))
            .and_then(Value::as_str);

        match (text, params) {
            (Some(s), Some(p)) => Self::interpolate(s, p),
            (Some(s), None) => s.to_string(),
            (None, _) => key.to_string(),
        }
    }

    /// Picks `{key}_{form}` for `count`, falling back to `{key}_other`.
    /// `{count}` is always available to the template.
    fn plural(&self, key: &str, count: u64, params: Option<&HashMap<String, String>>) -> String {
        let plural_key = format!("{}_{}", key, self.get_plural_form(count));

        let mut merged_params = params.cloned().unwrap_or_default();
        merged_params
            .entry("count".to_string())
            .or_insert_with(|| count.to_string());

        let result = self.t(&plural_key, Some(&merged_params));
        if result != plural_key {
            return result;
        }

        let other_key = format!("{}_other", key);
        let other_result = self.t(&other_key, Some(&merged_params));
        if other_result == other_key {
            key.to_string()
        } else {
            other_result
        }
    }

    fn get_available_locales(&self) -> Vec<String> {
        let mut locales: Vec<String> = self.locales.keys().cloned().collect();
        locales.sort();
        locales
    }
}
