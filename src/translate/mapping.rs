//! Language mapping: rewriting requested languages onto supported ones.

use std::fmt;

use regex::Regex;

use super::error::TranslateError;
use super::language::Language;

/// A rule matching requested language tags.
#[derive(Clone)]
pub enum LanguagePattern {
    /// Matches the tag exactly, ignoring case.
    Exact(String),
    /// Matches when the regular expression finds a match anywhere in the tag.
    Regex(Regex),
}

impl LanguagePattern {
    /// Creates a case-insensitive exact pattern.
    pub fn exact(tag: impl Into<String>) -> Self {
        Self::Exact(tag.into())
    }

    /// Compiles a regular expression pattern.
    ///
    /// # Errors
    ///
    /// Returns [`TranslateError::InvalidPattern`] when `pattern` is not a valid
    /// regular expression.
    pub fn regex(pattern: &str) -> Result<Self, TranslateError> {
        Regex::new(pattern)
            .map(Self::Regex)
            .map_err(|source| TranslateError::InvalidPattern {
                pattern: pattern.to_owned(),
                source,
            })
    }

    /// Returns `true` when `language` matches.
    #[must_use]
    pub fn matches(&self, language: &Language) -> bool {
        match self {
            Self::Exact(tag) => tag.to_lowercase() == language.as_str().to_lowercase(),
            Self::Regex(regex) => regex.is_match(language.as_str()),
        }
    }
}

impl fmt::Debug for LanguagePattern {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(tag) => formatter.debug_tuple("Exact").field(tag).finish(),
            Self::Regex(regex) => formatter.debug_tuple("Regex").field(&regex.as_str()).finish(),
        }
    }
}

impl PartialEq for LanguagePattern {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Exact(left), Self::Exact(right)) => left == right,
            (Self::Regex(left), Self::Regex(right)) => left.as_str() == right.as_str(),
            _ => false,
        }
    }
}

impl From<&str> for LanguagePattern {
    fn from(tag: &str) -> Self {
        Self::exact(tag)
    }
}

impl From<Regex> for LanguagePattern {
    fn from(regex: Regex) -> Self {
        Self::Regex(regex)
    }
}

/// An ordered list of `target <- patterns` rules.
///
/// Order matters: when a language matches several targets the first one
/// declared wins.
///
/// # Examples
///
/// ```rust
/// use ngry::translate::{Language, LanguageMapping, LanguagePattern};
///
/// let mapping = LanguageMapping::new()
///     .with("en", [LanguagePattern::exact("en-US"), LanguagePattern::exact("en-GB")])
///     .with("uk", [LanguagePattern::regex("^ua").unwrap()]);
///
/// assert_eq!(mapping.map(&Language::new("EN-us")), Some(Language::new("en")));
/// assert_eq!(mapping.map(&Language::new("ua-UA")), Some(Language::new("uk")));
/// assert_eq!(mapping.map(&Language::new("de")), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LanguageMapping {
    rules: Vec<(Language, Vec<LanguagePattern>)>,
}

impl LanguageMapping {
    /// Creates an empty mapping.
    #[must_use]
    pub const fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule mapping any language matched by `patterns` to `target`.
    #[must_use]
    pub fn with<I>(mut self, target: impl Into<Language>, patterns: I) -> Self
    where
        I: IntoIterator<Item = LanguagePattern>,
    {
        self.rules
            .push((target.into(), patterns.into_iter().collect()));
        self
    }

    /// Returns `true` when no rule is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Lists every target with a pattern matching `language`, in declaration
    /// order.
    #[must_use]
    pub fn candidates(&self, language: &Language) -> Vec<&Language> {
        self.rules
            .iter()
            .filter(|(_, patterns)| patterns.iter().any(|pattern| pattern.matches(language)))
            .map(|(target, _)| target)
            .collect()
    }

    /// Returns the first matching target, warning when several matched.
    #[must_use]
    pub fn map(&self, language: &Language) -> Option<Language> {
        let candidates = self.candidates(language);

        if let [first, _, ..] = candidates.as_slice() {
            let listed = candidates
                .iter()
                .map(|candidate| format!("\"{candidate}\""))
                .collect::<Vec<_>>()
                .join(", ");
            tracing::warn!(
                "Found {} candidates for language \"{language}\": {listed}. The first one ({first}) will be used.",
                candidates.len(),
            );
        }

        candidates.first().map(|&target| target.clone())
    }
}
