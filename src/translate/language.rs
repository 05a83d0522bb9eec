//! Language tags and the language state.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A language tag such as `en`, `uk` or `en-US`.
///
/// The tag is kept exactly as given. Equality is case-sensitive; only
/// [`LanguagePattern::Exact`](super::LanguagePattern::Exact) matching
/// ignores case.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Language(String);

impl Language {
    /// Creates a language from its tag.
    #[inline]
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Returns the tag.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Language {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl From<&str> for Language {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl From<String> for Language {
    fn from(tag: String) -> Self {
        Self(tag)
    }
}

impl AsRef<str> for Language {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Language {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Language {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// The current language together with the fallback and the supported set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LanguageState {
    /// The language phrases are translated into.
    pub current: Language,
    /// The fallback for unsupported requests.
    pub default: Language,
    /// Every language the application can switch to.
    pub supported: BTreeSet<Language>,
}

impl LanguageState {
    /// Returns `true` when `language` is in the supported set.
    #[must_use]
    pub fn supports(&self, language: &Language) -> bool {
        self.supported.contains(language)
    }
}

/// A request to switch from the current language to a resolved target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LanguageChangeRequest {
    /// The language in use when the request was made.
    pub current: Language,
    /// The resolved language being asked for.
    pub target: Language,
}
