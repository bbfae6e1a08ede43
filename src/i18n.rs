//! Localized text lookup.
//!
//! A [`TranslationTable`] is built once and shared read-only. The current
//! language lives in a [`Translator`], which callers pass to whatever needs
//! localized text.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::{FalimError, Result};

mod locales;

// ---------------------------
// ## Languages
// ---------------------------

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Tr,
    En,
    De,
    Fr,
    Es,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::Tr,
        Language::En,
        Language::De,
        Language::Fr,
        Language::Es,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Language::Tr => "tr",
            Language::En => "en",
            Language::De => "de",
            Language::Fr => "fr",
            Language::Es => "es",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Language::Tr => "Türkçe",
            Language::En => "English",
            Language::De => "Deutsch",
            Language::Fr => "Français",
            Language::Es => "Español",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Language::Tr => "🇹🇷",
            Language::En => "🇺🇸",
            Language::De => "🇩🇪",
            Language::Fr => "🇫🇷",
            Language::Es => "🇪🇸",
        }
    }

    fn entries(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Language::Tr => locales::TR,
            Language::En => locales::EN,
            Language::De => locales::DE,
            Language::Fr => locales::FR,
            Language::Es => locales::ES,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Language {
    type Err = FalimError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Language::ALL
            .iter()
            .copied()
            .find(|language| language.code() == wanted)
            .ok_or_else(|| FalimError::UnsupportedLanguage {
                code: s.to_string(),
            })
    }
}

// ---------------------------
// ## Translation table
// ---------------------------

/// Extra or replacement entries, keyed by language code then message key.
/// Parsed from TOML such as `[en]\nhome = "Start"`.
pub type TranslationOverrides = BTreeMap<String, BTreeMap<String, String>>;

#[derive(Debug, Clone, PartialEq)]
pub struct TranslationTable {
    messages: HashMap<Language, HashMap<String, String>>,
}

impl TranslationTable {
    /// The catalogue shipped with the crate, covering every supported language.
    pub fn builtin() -> Self {
        let messages = Language::ALL
            .iter()
            .map(|&language| {
                let entries: HashMap<String, String> = language
                    .entries()
                    .iter()
                    .map(|(key, text)| (key.to_string(), text.to_string()))
                    .collect();
                (language, entries)
            })
            .collect();
        TranslationTable { messages }
    }

    pub fn get(&self, language: Language, key: &str) -> Option<&str> {
        self.messages
            .get(&language)
            .and_then(|entries| entries.get(key))
            .map(String::as_str)
    }

    /// Keys defined for `language`, sorted.
    pub fn keys(&self, language: Language) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .messages
            .get(&language)
            .map(|entries| entries.keys().map(String::as_str).collect())
            .unwrap_or_default();
        keys.sort_unstable();
        keys
    }

    pub fn with_overrides(mut self, overrides: TranslationOverrides) -> Result<Self> {
        for (code, entries) in overrides {
            let language: Language = code.parse()?;
            let table = self.messages.entry(language).or_default();
            tracing::debug!(language = %language, count = entries.len(), "applying translation overrides");
            table.extend(entries);
        }
        Ok(self)
    }

    pub fn with_overrides_toml(self, content: &str) -> Result<Self> {
        let overrides: TranslationOverrides = toml::from_str(content)?;
        self.with_overrides(overrides)
    }

    pub fn with_overrides_file<P: AsRef<Path>>(self, path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        tracing::info!(path = %path.as_ref().display(), "loading translation overrides");
        self.with_overrides_toml(&content)
    }
}

impl Default for TranslationTable {
    fn default() -> Self {
        TranslationTable::builtin()
    }
}

// ---------------------------
// ## Translator
// ---------------------------

/// Localization context: a shared table plus the selected language.
#[derive(Debug, Clone)]
pub struct Translator {
    table: Arc<TranslationTable>,
    current: Language,
}

impl Translator {
    pub fn new(table: Arc<TranslationTable>, language: Language) -> Self {
        Translator {
            table,
            current: language,
        }
    }

    pub fn builtin(language: Language) -> Self {
        Translator::new(Arc::new(TranslationTable::builtin()), language)
    }

    /// Looks `key` up in the current language. Missing or empty entries
    /// resolve to the key itself so untranslated text stays visible.
    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        match self.table.get(self.current, key) {
            Some(text) if !text.is_empty() => text,
            _ => {
                tracing::debug!(key, language = %self.current, "missing translation");
                key
            }
        }
    }

    /// Translates `key` and substitutes `{name}` placeholders.
    pub fn format(&self, key: &str, args: &[(&str, &str)]) -> String {
        args.iter()
            .fold(self.translate(key).to_string(), |text, (name, value)| {
                text.replace(&format!("{{{}}}", name), value)
            })
    }

    pub fn set_language(&mut self, language: Language) {
        if language != self.current {
            tracing::debug!(from = %self.current, to = %language, "switching language");
        }
        self.current = language;
    }

    /// Selects a language by code. Unknown codes are rejected and the
    /// current selection is left unchanged.
    pub fn set_language_code(&mut self, code: &str) -> Result<()> {
        let language = code.parse()?;
        self.set_language(language);
        Ok(())
    }

    pub fn current_language(&self) -> Language {
        self.current
    }

    pub fn languages(&self) -> &'static [Language] {
        &Language::ALL
    }
}

impl Default for Translator {
    fn default() -> Self {
        Translator::builtin(Language::default())
    }
}
