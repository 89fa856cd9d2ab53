//! Internationalization module
//!
//! Provides report labels for English (en) and Indonesian (id).
//! Supports automatic language detection based on system locale.

mod en;
mod id;

use std::collections::HashMap;

/// Internationalization manager
pub struct I18n {
    current_lang: String,
    translations: HashMap<String, String>,
}

impl I18n {
    /// Create a new I18n instance with the specified language
    pub fn new(lang: &str) -> Self {
        let mut i18n = Self {
            current_lang: String::new(),
            translations: HashMap::new(),
        };
        i18n.set_language(lang);
        i18n
    }

    /// Set the current language
    pub fn set_language(&mut self, lang: &str) {
        let lang = if lang == "auto" {
            detect_system_language()
        } else {
            lang.to_string()
        };

        self.translations = match lang.as_str() {
            "id" => id::get_translations(),
            _ => en::get_translations(),
        };
        self.current_lang = if lang == "id" { lang } else { "en".to_string() };

        log::info!("Language set to: {}", self.current_lang);
    }

    /// Get a translated string by key, falling back to the key itself
    pub fn get(&self, key: &str) -> String {
        self.translations
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Get the current language code
    pub fn current_language(&self) -> &str {
        &self.current_lang
    }

    /// Get available languages
    pub fn available_languages() -> Vec<(&'static str, &'static str)> {
        vec![("en", "English"), ("id", "Bahasa Indonesia")]
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new("auto")
    }
}

/// Detect system language from the locale environment variables
fn detect_system_language() -> String {
    let lang_env = std::env::var("LANG")
        .or_else(|_| std::env::var("LC_ALL"))
        .or_else(|_| std::env::var("LC_MESSAGES"))
        .unwrap_or_else(|_| "en".to_string());

    language_from_locale(&lang_env).to_string()
}

/// Extract a supported language code (e.g., "id_ID.UTF-8" -> "id")
fn language_from_locale(locale: &str) -> &'static str {
    let lang_code = locale
        .split('_')
        .next()
        .unwrap_or("en")
        .split('.')
        .next()
        .unwrap_or("en");

    match lang_code {
        "id" => "id",
        _ => "en",
    }
}
