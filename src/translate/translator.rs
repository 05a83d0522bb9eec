//! Translating phrases into the current language.

use std::sync::Arc;

use futures::stream::{Stream, StreamExt};
use serde::Deserialize;

use super::catalog::{Catalog, StandalonePhrase};
use super::language::Language;
use super::language_store::LanguageStore;
use super::params::Params;
use crate::store::distinct_until_changed;

/// Controls diagnostics for missing phrases. Disabled unless turned on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DebugOptions {
    /// Log a warning whenever a phrase falls back.
    pub enabled: bool,
}

/// Looks phrases up in a [`Catalog`] for the language held by a
/// [`LanguageStore`].
///
/// Clones share the language store and catalog.
///
/// # Examples
///
/// ```rust
/// use ngry::translate::{
///     BundleData, Catalog, Language, LanguageStore, Params, PhraseData, SupportedGuard,
///     TextData, Translator,
/// };
///
/// let data = TextData::from([
///     (Language::new("en"), BundleData::from([("action.save".to_string(), PhraseData::from("Save"))])),
///     (Language::new("uk"), BundleData::from([("action.save".to_string(), PhraseData::from("Зберегти"))])),
/// ]);
/// let language = LanguageStore::new(
///     Language::new("en"),
///     "en",
///     ["en", "uk"],
///     SupportedGuard::new("en", ["en", "uk"]),
/// );
/// let translator = Translator::new(language, Catalog::compile(&data));
///
/// assert_eq!(translator.translate("action.save", &Params::new()), "Save");
///
/// translator.use_language("uk");
/// assert_eq!(translator.translate("action.save", &Params::new()), "Зберегти");
/// assert_eq!(translator.translate("action.unknown", &Params::new()), "action.unknown");
/// ```
#[derive(Clone, Debug)]
pub struct Translator {
    language: LanguageStore,
    catalog: Arc<Catalog>,
    debug: DebugOptions,
}

impl Translator {
    /// Creates a translator with debugging disabled.
    #[must_use]
    pub fn new(language: LanguageStore, catalog: Catalog) -> Self {
        Self {
            language,
            catalog: Arc::new(catalog),
            debug: DebugOptions::default(),
        }
    }

    /// Replaces the debug options.
    #[must_use]
    pub const fn with_debug(mut self, debug: DebugOptions) -> Self {
        self.debug = debug;
        self
    }

    /// Returns the current language.
    #[must_use]
    pub fn language(&self) -> Language {
        self.language.current()
    }

    /// Returns the language store.
    #[must_use]
    pub const fn language_store(&self) -> &LanguageStore {
        &self.language
    }

    /// Returns the catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Requests a language switch and returns the language in use afterwards.
    pub fn use_language(&self, language: impl Into<Language>) -> Language {
        self.language.request(&language.into())
    }

    /// Stream of the current language followed by every change.
    pub fn language_changes(&self) -> impl Stream<Item = Language> + use<> {
        self.language.changes()
    }

    /// Renders the phrase `key` in the current language.
    ///
    /// An unknown key renders as the key itself.
    #[must_use]
    pub fn translate(&self, key: &str, params: &Params) -> String {
        self.translate_in(&self.language(), key, params)
    }

    /// Renders the phrase `key` in `language`, with the same fallback as
    /// [`Translator::translate`].
    #[must_use]
    pub fn translate_in(&self, language: &Language, key: &str, params: &Params) -> String {
        match self.catalog.phrase(language, key) {
            Some(phrase) => phrase.render(params),
            None => {
                if self.debug.enabled {
                    tracing::warn!("Phrase \"{key}\" is not defined within language \"{language}\"");
                }
                key.to_owned()
            }
        }
    }

    /// Renders a standalone phrase in the current language.
    ///
    /// A phrase without a value for the current language renders as the
    /// empty string.
    #[must_use]
    pub fn translate_standalone(&self, phrase: &StandalonePhrase, params: &Params) -> String {
        self.translate_standalone_in(&self.language(), phrase, params)
    }

    /// Renders a standalone phrase in `language`.
    #[must_use]
    pub fn translate_standalone_in(
        &self,
        language: &Language,
        phrase: &StandalonePhrase,
        params: &Params,
    ) -> String {
        match phrase.get(language) {
            Some(phrase) => phrase.render(params),
            None => {
                if self.debug.enabled {
                    tracing::warn!(
                        "Phrase {phrase:?} does not include a value for language \"{language}\""
                    );
                }
                String::new()
            }
        }
    }

    /// Stream of `key` rendered in the current language, updated on every
    /// language change and deduplicated.
    pub fn translate_changes(
        &self,
        key: &str,
        params: Params,
    ) -> impl Stream<Item = String> + use<> {
        let key = key.to_owned();
        let translator = self.clone();

        distinct_until_changed(
            self.language_changes()
                .map(move |language| translator.translate_in(&language, &key, &params)),
        )
    }

    /// Stream of a standalone phrase rendered in the current language.
    pub fn translate_standalone_changes(
        &self,
        phrase: StandalonePhrase,
        params: Params,
    ) -> impl Stream<Item = String> + use<> {
        let translator = self.clone();

        distinct_until_changed(
            self.language_changes()
                .map(move |language| {
                    translator.translate_standalone_in(&language, &phrase, &params)
                }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translate::{BundleData, Language, PhraseData, StandalonePhraseData, SupportedGuard, TextData};
    use futures::executor::block_on;
    use rstest::{fixture, rstest};

    #[fixture]
    fn translator() -> Translator {
        let data = TextData::from([
            (
                Language::new("en"),
                BundleData::from([("action.save".to_string(), PhraseData::from("Save"))]),
            ),
            (
                Language::new("uk"),
                BundleData::from([("action.save".to_string(), PhraseData::from("Зберегти"))]),
            ),
        ]);
        let language = LanguageStore::new(
            Language::new("en"),
            "en",
            ["en", "uk"],
            SupportedGuard::new("en", ["en", "uk"]),
        );
        Translator::new(language, Catalog::compile(&data))
    }

    fn hello() -> StandalonePhrase {
        StandalonePhrase::compile(&StandalonePhraseData::from([
            (Language::new("en"), PhraseData::from("Hello")),
            (Language::new("uk"), PhraseData::from("Привіт")),
        ]))
    }

    #[rstest]
    fn unknown_key_falls_back_to_key(translator: Translator) {
        assert_eq!(translator.translate("action.unknown", &Params::new()), "action.unknown");

        translator.use_language("uk");

        assert_eq!(translator.translate("action.unknown", &Params::new()), "action.unknown");
    }

    #[rstest]
    fn standalone_phrase_follows_language(translator: Translator) {
        let phrase = hello();
        assert_eq!(translator.translate_standalone(&phrase, &Params::new()), "Hello");

        translator.use_language("uk");

        assert_eq!(translator.translate_standalone(&phrase, &Params::new()), "Привіт");
    }

    #[rstest]
    fn standalone_phrase_without_language_is_empty(translator: Translator) {
        let phrase = StandalonePhrase::compile(&StandalonePhraseData::from([(
            Language::new("uk"),
            PhraseData::from("Привіт"),
        )]));

        assert_eq!(translator.translate_standalone(&phrase, &Params::new()), "");
    }

    #[rstest]
    fn translate_changes_emits_per_language(translator: Translator) {
        let values = translator.translate_changes("action.save", Params::new());
        let standalone = translator.translate_standalone_changes(hello(), Params::new());

        translator.use_language("uk");
        translator.language_store().store().destroy();

        assert_eq!(block_on(values.collect::<Vec<_>>()), vec!["Save", "Зберегти"]);
        assert_eq!(block_on(standalone.collect::<Vec<_>>()), vec!["Hello", "Привіт"]);
    }
}
