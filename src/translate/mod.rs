//! Internationalization: language resolution, phrase compilation and
//! interpolation.
//!
//! # Overview
//!
//! - [`Language`] and [`LanguageState`]: language tags and the current,
//!   default and supported languages
//! - [`LanguageMapping`] and [`LanguagePattern`]: rewrite requested tags
//!   (`ua`, `en-US`) onto supported ones
//! - [`LanguageResolver`]: [`DefaultLanguageResolver`], [`MappingGuard`],
//!   [`SupportedGuard`] or any closure
//! - [`Params`], [`PhraseData`], [`Template`] and [`Phrase`]: raw and
//!   compiled phrases with `{{ name }}` interpolation
//! - [`Catalog`], [`Bundle`] and [`StandalonePhrase`]: compiled phrases by
//!   language
//! - [`LanguageStore`] and [`LanguageChangeHandler`]: the current language
//!   and how requests change it
//! - [`Translator`]: phrase lookup with fallbacks
//! - [`TranslateConfig`]: the whole setup from JSON
//!
//! Missing phrases and parameters never fail: they fall back to the key, an
//! empty string or an empty parameter value, and are logged with `tracing`.
//!
//! # Examples
//!
//! ```rust
//! use ngry::translate::{Language, LanguageConfig, Params, TranslateConfig, TextData, BundleData, PhraseData};
//!
//! let mut language = LanguageConfig::new("en");
//! language.supported = vec![Language::new("en"), Language::new("uk")];
//!
//! let translator = TranslateConfig::new(language)
//!     .with_text(TextData::from([(
//!         Language::new("en"),
//!         BundleData::from([("items".to_string(), PhraseData::from("{{ count }} items"))]),
//!     )]))
//!     .into_translator()
//!     .unwrap();
//!
//! assert_eq!(translator.translate("items", &Params::new().with("count", 3)), "3 items");
//! ```

mod catalog;
mod config;
mod data;
mod error;
mod language;
mod language_store;
mod mapping;
mod params;
mod phrase;
mod resolver;
mod translator;

pub use catalog::{Bundle, Catalog, StandalonePhrase};
pub use config::{LanguageConfig, MappingRule, PatternConfig, TranslateConfig};
pub use data::{merge_bundle_data, merge_text_data, BundleData, StandalonePhraseData, TextData};
pub use error::TranslateError;
pub use language::{Language, LanguageChangeRequest, LanguageState};
pub use language_store::{CurrentLanguage, LanguageChangeHandler, LanguageStore, TargetLanguage};
pub use mapping::{LanguageMapping, LanguagePattern};
pub use params::Params;
pub use phrase::{Phrase, PhraseData, PhraseFn, Template};
pub use resolver::{DefaultLanguageResolver, LanguageResolver, MappingGuard, SupportedGuard};
pub use translator::{DebugOptions, Translator};
