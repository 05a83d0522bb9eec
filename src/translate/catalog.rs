//! Compiled translation data.
//!
//! Every phrase is compiled once when the catalog is built; lookups are map
//! reads and never compile again.

use std::collections::HashMap;

use super::data::{BundleData, StandalonePhraseData, TextData};
use super::language::Language;
use super::phrase::Phrase;

/// The compiled phrases of one language.
#[derive(Clone, Debug, Default)]
pub struct Bundle {
    phrases: HashMap<String, Phrase>,
}

impl Bundle {
    /// Compiles every phrase of `data`.
    #[must_use]
    pub fn compile(data: &BundleData) -> Self {
        Self {
            phrases: data
                .iter()
                .map(|(key, phrase)| (key.clone(), Phrase::compile(phrase)))
                .collect(),
        }
    }

    /// Returns the phrase stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Phrase> {
        self.phrases.get(key)
    }

    /// Returns the number of phrases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Returns `true` when the bundle has no phrase.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

/// Compiled bundles by language.
///
/// # Examples
///
/// ```rust
/// use ngry::translate::{BundleData, Catalog, Language, Params, PhraseData, TextData};
///
/// let data = TextData::from([(
///     Language::new("en"),
///     BundleData::from([("greeting".to_string(), PhraseData::from("Hello {{ name }}"))]),
/// )]);
/// let catalog = Catalog::compile(&data);
///
/// let phrase = catalog.phrase(&Language::new("en"), "greeting").unwrap();
/// assert_eq!(phrase.render(&Params::new().with("name", "Alex")), "Hello Alex");
/// assert!(catalog.phrase(&Language::new("uk"), "greeting").is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    bundles: HashMap<Language, Bundle>,
}

impl Catalog {
    /// Compiles every bundle of `data`.
    #[must_use]
    pub fn compile(data: &TextData) -> Self {
        let bundles: HashMap<Language, Bundle> = data
            .iter()
            .map(|(language, bundle)| (language.clone(), Bundle::compile(bundle)))
            .collect();
        tracing::debug!(languages = bundles.len(), "catalog compiled");

        Self { bundles }
    }

    /// Returns the bundle of `language`.
    #[must_use]
    pub fn bundle(&self, language: &Language) -> Option<&Bundle> {
        self.bundles.get(language)
    }

    /// Returns the phrase `key` of `language`.
    #[must_use]
    pub fn phrase(&self, language: &Language, key: &str) -> Option<&Phrase> {
        self.bundle(language).and_then(|bundle| bundle.get(key))
    }

    /// Returns `true` when no language has a bundle.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }
}

/// A phrase supplied inline for several languages, compiled per language.
///
/// # Examples
///
/// ```rust
/// use ngry::translate::{Language, Params, PhraseData, StandalonePhrase, StandalonePhraseData};
///
/// let phrase = StandalonePhrase::compile(&StandalonePhraseData::from([
///     (Language::new("en"), PhraseData::from("Hello")),
///     (Language::new("uk"), PhraseData::from("Привіт")),
/// ]));
///
/// let render = |tag: &str| {
///     phrase
///         .get(&Language::new(tag))
///         .map(|phrase| phrase.render(&Params::new()))
/// };
/// assert_eq!(render("uk").as_deref(), Some("Привіт"));
/// assert_eq!(render("ua"), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct StandalonePhrase {
    phrases: HashMap<Language, Phrase>,
}

impl StandalonePhrase {
    /// Compiles the phrase for every language of `data`.
    #[must_use]
    pub fn compile(data: &StandalonePhraseData) -> Self {
        Self {
            phrases: data
                .iter()
                .map(|(language, phrase)| (language.clone(), Phrase::compile(phrase)))
                .collect(),
        }
    }

    /// Returns the phrase for `language`.
    #[must_use]
    pub fn get(&self, language: &Language) -> Option<&Phrase> {
        self.phrases.get(language)
    }
}

impl From<&StandalonePhraseData> for StandalonePhrase {
    fn from(data: &StandalonePhraseData) -> Self {
        Self::compile(data)
    }
}
