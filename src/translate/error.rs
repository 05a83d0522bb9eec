//! Errors raised while building translation components.

/// An error raised while building a translator or one of its parts.
///
/// Lookups never fail: missing phrases and parameters fall back to defaults
/// and are logged instead.
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    /// A language pattern is not a valid regular expression.
    #[error("invalid language pattern `{pattern}`")]
    InvalidPattern {
        /// The rejected pattern.
        pattern: String,
        /// The regex compilation error.
        #[source]
        source: regex::Error,
    },

    /// The default language is not among the supported ones.
    #[error("default language `{0}` is not supported")]
    UnsupportedDefault(String),

    /// The configuration could not be parsed.
    #[error("invalid translate configuration")]
    Config(#[from] serde_json::Error),
}
