//! Declarative translator configuration.
//!
//! ```json
//! {
//!   "language": {
//!     "default": "en",
//!     "supported": ["en", "uk"],
//!     "mapping": [
//!       { "language": "uk", "patterns": [{ "exact": "ua" }, { "regex": "^ua-" }] }
//!     ],
//!     "initial": "ua"
//!   },
//!   "debug": { "enabled": false },
//!   "text": {
//!     "en": { "action.save": "Save" },
//!     "uk": { "action.save": "Зберегти" }
//!   }
//! }
//! ```

use serde::Deserialize;

use super::catalog::Catalog;
use super::data::{merge_text_data, TextData};
use super::error::TranslateError;
use super::language::Language;
use super::language_store::LanguageStore;
use super::mapping::{LanguageMapping, LanguagePattern};
use super::resolver::DefaultLanguageResolver;
use super::translator::{DebugOptions, Translator};

/// A language pattern as written in configuration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternConfig {
    /// Case-insensitive exact tag.
    Exact(String),
    /// Regular expression.
    Regex(String),
}

impl PatternConfig {
    fn compile(&self) -> Result<LanguagePattern, TranslateError> {
        match self {
            Self::Exact(tag) => Ok(LanguagePattern::exact(tag.as_str())),
            Self::Regex(pattern) => LanguagePattern::regex(pattern),
        }
    }
}

/// One mapping rule: languages matching `patterns` resolve to `language`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MappingRule {
    /// The target language.
    pub language: Language,
    /// The patterns selecting requests for the target.
    pub patterns: Vec<PatternConfig>,
}

/// Language settings.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LanguageConfig {
    /// The fallback language.
    pub default: Language,
    /// The supported languages. Empty means only the default.
    #[serde(default)]
    pub supported: Vec<Language>,
    /// Mapping rules, in priority order.
    #[serde(default)]
    pub mapping: Vec<MappingRule>,
    /// The language requested at start-up. Defaults to `default`.
    #[serde(default)]
    pub initial: Option<Language>,
}

impl LanguageConfig {
    /// Creates settings with only a default language.
    pub fn new(default: impl Into<Language>) -> Self {
        Self {
            default: default.into(),
            supported: Vec::new(),
            mapping: Vec::new(),
            initial: None,
        }
    }

    /// Compiles the mapping rules.
    ///
    /// # Errors
    ///
    /// Returns [`TranslateError::InvalidPattern`] for an invalid regular
    /// expression.
    pub fn language_mapping(&self) -> Result<LanguageMapping, TranslateError> {
        self.mapping
            .iter()
            .try_fold(LanguageMapping::new(), |mapping, rule| {
                let patterns = rule
                    .patterns
                    .iter()
                    .map(PatternConfig::compile)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(mapping.with(rule.language.clone(), patterns))
            })
    }

    /// Builds the language store.
    ///
    /// # Errors
    ///
    /// Returns [`TranslateError::InvalidPattern`] for an invalid mapping
    /// pattern and [`TranslateError::UnsupportedDefault`] when `supported` is
    /// not empty and lacks the default language.
    pub fn into_store(self) -> Result<LanguageStore, TranslateError> {
        if !self.supported.is_empty() && !self.supported.contains(&self.default) {
            return Err(TranslateError::UnsupportedDefault(self.default.to_string()));
        }

        let mapping = self.language_mapping()?;
        let supported = if self.supported.is_empty() {
            vec![self.default.clone()]
        } else {
            self.supported
        };
        let initial = self.initial.unwrap_or_else(|| self.default.clone());
        let resolver = DefaultLanguageResolver::new(self.default.clone(), supported.clone(), mapping);

        Ok(LanguageStore::new(initial, self.default, supported, resolver))
    }
}

/// Everything needed to build a [`Translator`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TranslateConfig {
    /// Language settings.
    pub language: LanguageConfig,
    /// Diagnostics.
    #[serde(default)]
    pub debug: DebugOptions,
    /// Phrases by language.
    #[serde(default)]
    pub text: TextData,
}

impl TranslateConfig {
    /// Creates a configuration without phrases.
    #[must_use]
    pub fn new(language: LanguageConfig) -> Self {
        Self {
            language,
            debug: DebugOptions::default(),
            text: TextData::new(),
        }
    }

    /// Parses a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TranslateError::Config`] when `json` is malformed.
    pub fn from_json(json: &str) -> Result<Self, TranslateError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Merges more phrases over the configured ones.
    #[must_use]
    pub fn with_text(mut self, text: TextData) -> Self {
        self.text = merge_text_data([std::mem::take(&mut self.text), text]);
        self
    }

    /// Builds the translator.
    ///
    /// # Errors
    ///
    /// See [`LanguageConfig::into_store`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ngry::translate::{Language, Params, TranslateConfig};
    ///
    /// let translator = TranslateConfig::from_json(r#"{
    ///     "language": { "default": "en", "supported": ["en", "uk"], "initial": "uk" },
    ///     "text": { "uk": { "greeting": "Привіт, {{ name }}" } }
    /// }"#)?
    /// .into_translator()?;
    ///
    /// assert_eq!(translator.language(), Language::new("uk"));
    /// assert_eq!(
    ///     translator.translate("greeting", &Params::new().with("name", "Alex")),
    ///     "Привіт, Alex"
    /// );
    /// # Ok::<(), ngry::translate::TranslateError>(())
    /// ```
    pub fn into_translator(self) -> Result<Translator, TranslateError> {
        let store = self.language.into_store()?;
        let catalog = Catalog::compile(&self.text);

        Ok(Translator::new(store, catalog).with_debug(self.debug))
    }
}
