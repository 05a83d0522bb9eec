//! Language resolution and guards.
//!
//! A resolver turns any requested language into one the application can use.
//! Guards are single resolution steps; [`DefaultLanguageResolver`] combines
//! the mapping step with the supported-language fallback.

use std::collections::BTreeSet;

use super::language::Language;
use super::mapping::LanguageMapping;

/// Rewrites a requested language.
///
/// Implemented for every `Fn(&Language) -> Language`.
pub trait LanguageResolver: Send + Sync {
    /// Returns the language to use for a request of `language`.
    fn resolve(&self, language: &Language) -> Language;
}

impl<F> LanguageResolver for F
where
    F: Fn(&Language) -> Language + Send + Sync,
{
    fn resolve(&self, language: &Language) -> Language {
        self(language)
    }
}

/// Mapping first, then the language itself when supported, otherwise the
/// default.
///
/// # Examples
///
/// ```rust
/// use ngry::translate::{
///     DefaultLanguageResolver, Language, LanguageMapping, LanguagePattern, LanguageResolver,
/// };
///
/// let resolver = DefaultLanguageResolver::new(
///     "en",
///     ["en", "uk"],
///     LanguageMapping::new().with("uk", [LanguagePattern::exact("ua")]),
/// );
///
/// assert_eq!(resolver.resolve(&Language::new("ua")), Language::new("uk"));
/// assert_eq!(resolver.resolve(&Language::new("uk")), Language::new("uk"));
/// assert_eq!(resolver.resolve(&Language::new("de")), Language::new("en"));
/// ```
#[derive(Clone, Debug)]
pub struct DefaultLanguageResolver {
    mapping: LanguageMapping,
    supported: SupportedGuard,
}

impl DefaultLanguageResolver {
    /// Creates a resolver.
    pub fn new<I, L>(default: impl Into<Language>, supported: I, mapping: LanguageMapping) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Language>,
    {
        Self {
            mapping,
            supported: SupportedGuard::new(default, supported),
        }
    }
}

impl LanguageResolver for DefaultLanguageResolver {
    fn resolve(&self, language: &Language) -> Language {
        self.mapping
            .map(language)
            .unwrap_or_else(|| self.supported.resolve(language))
    }
}

/// Rewrites a language through a [`LanguageMapping`], leaving unmatched
/// languages unchanged.
#[derive(Clone, Debug)]
pub struct MappingGuard {
    mapping: LanguageMapping,
}

impl MappingGuard {
    /// Creates a guard over `mapping`.
    #[must_use]
    pub const fn new(mapping: LanguageMapping) -> Self {
        Self { mapping }
    }
}

impl LanguageResolver for MappingGuard {
    fn resolve(&self, language: &Language) -> Language {
        self.mapping
            .map(language)
            .unwrap_or_else(|| language.clone())
    }
}

/// Passes supported languages through and replaces the rest with the
/// default.
#[derive(Clone, Debug)]
pub struct SupportedGuard {
    default: Language,
    supported: BTreeSet<Language>,
}

impl SupportedGuard {
    /// Creates a guard.
    pub fn new<I, L>(default: impl Into<Language>, supported: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Language>,
    {
        Self {
            default: default.into(),
            supported: supported.into_iter().map(Into::into).collect(),
        }
    }
}

impl LanguageResolver for SupportedGuard {
    fn resolve(&self, language: &Language) -> Language {
        if self.supported.contains(language) {
            language.clone()
        } else {
            self.default.clone()
        }
    }
}
