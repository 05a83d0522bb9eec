//! Phrase data and compiled phrases.

use std::fmt;
use std::sync::{Arc, LazyLock};

use regex::{Captures, Regex};
use serde::{Deserialize, Deserializer};

use super::params::Params;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([0-9A-Za-z_]+)\s*\}\}").expect("placeholder pattern is valid")
});

/// A phrase computed by user code from its parameters.
pub type PhraseFn = Arc<dyn Fn(&Params) -> String + Send + Sync>;

/// Raw phrase content as supplied by the application.
///
/// Text deserializes from a JSON string; functions can only be built in code.
#[derive(Clone)]
pub enum PhraseData {
    /// Plain text or a `{{ name }}` template.
    Text(String),
    /// A custom function of the parameters.
    Function(PhraseFn),
}

impl PhraseData {
    /// Wraps a custom phrase function.
    pub fn function<F>(function: F) -> Self
    where
        F: Fn(&Params) -> String + Send + Sync + 'static,
    {
        Self::Function(Arc::new(function))
    }
}

impl fmt::Debug for PhraseData {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => formatter.debug_tuple("Text").field(text).finish(),
            Self::Function(_) => formatter.write_str("Function(..)"),
        }
    }
}

impl PartialEq for PhraseData {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Text(left), Self::Text(right)) => left == right,
            (Self::Function(left), Self::Function(right)) => Arc::ptr_eq(left, right),
            _ => false,
        }
    }
}

impl From<&str> for PhraseData {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for PhraseData {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl<'de> Deserialize<'de> for PhraseData {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self::Text)
    }
}

/// Text with `{{ name }}` placeholders.
///
/// Placeholder names are ASCII word characters; whitespace inside the braces
/// is ignored.
///
/// # Examples
///
/// ```rust
/// use ngry::translate::{Params, Template};
///
/// let template = Template::parse("{{a}} + {{b}} = {{ sum }}").unwrap();
/// let params = Params::new().with("a", 1).with("b", 1).with("sum", 2);
///
/// assert_eq!(template.render(&params), "1 + 1 = 2");
/// assert!(Template::parse("no placeholders").is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    source: String,
}

impl Template {
    /// Returns `true` when `text` contains at least one placeholder.
    #[must_use]
    pub fn is_template(text: &str) -> bool {
        PLACEHOLDER.is_match(text)
    }

    /// Parses `text`, returning `None` when it has no placeholder.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        Self::is_template(text).then(|| Self {
            source: text.to_owned(),
        })
    }

    /// Returns the template text.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Lists the placeholder names in order of appearance.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        PLACEHOLDER
            .captures_iter(&self.source)
            .filter_map(|captures| captures.get(1))
            .map(|name| name.as_str())
    }

    /// Substitutes every placeholder.
    ///
    /// A parameter that is missing or `None` renders as the empty string and
    /// is logged.
    #[must_use]
    pub fn render(&self, params: &Params) -> String {
        PLACEHOLDER
            .replace_all(&self.source, |captures: &Captures<'_>| {
                let name = &captures[1];
                params.get(name).map_or_else(
                    || {
                        tracing::warn!(
                            "Parameter \"{name}\" of phrase \"{}\" is missing",
                            self.source
                        );
                        String::new()
                    },
                    str::to_owned,
                )
            })
            .into_owned()
    }
}

/// A phrase ready to render.
#[derive(Clone)]
pub enum Phrase {
    /// Text returned as is.
    Plain(String),
    /// Text with placeholders.
    Template(Template),
    /// A custom function.
    Function(PhraseFn),
}

impl Phrase {
    /// Compiles raw phrase data.
    ///
    /// Text with placeholders becomes a [`Phrase::Template`], other text a
    /// [`Phrase::Plain`], and functions are kept as they are.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ngry::translate::{Params, Phrase, PhraseData};
    ///
    /// let plain = Phrase::compile(&PhraseData::from("Hello world"));
    /// assert_eq!(plain.render(&Params::new()), "Hello world");
    ///
    /// let greeting = Phrase::compile(&PhraseData::from("Hello {{name}}"));
    /// assert_eq!(greeting.render(&Params::new().with("name", "folks")), "Hello folks");
    /// ```
    #[must_use]
    pub fn compile(data: &PhraseData) -> Self {
        match data {
            PhraseData::Text(text) => {
                Template::parse(text).map_or_else(|| Self::Plain(text.clone()), Self::Template)
            }
            PhraseData::Function(function) => Self::Function(Arc::clone(function)),
        }
    }

    /// Renders the phrase with `params`.
    #[must_use]
    pub fn render(&self, params: &Params) -> String {
        match self {
            Self::Plain(text) => text.clone(),
            Self::Template(template) => template.render(params),
            Self::Function(function) => function(params),
        }
    }
}

impl fmt::Debug for Phrase {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain(text) => formatter.debug_tuple("Plain").field(text).finish(),
            Self::Template(template) => formatter.debug_tuple("Template").field(template).finish(),
            Self::Function(_) => formatter.write_str("Function(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Hello {{name}}", Params::new().with("name", "world"), "Hello world")]
    #[case("Hello {{ name }}", Params::new().with("name", "world"), "Hello world")]
    #[case("Hello {{ name }}", Params::new(), "Hello ")]
    #[case("Hello {{ name }}", Params::new().with("value", "world"), "Hello ")]
    #[case("Hello {{ name }}", Params::new().with_optional("name", None::<&str>), "Hello ")]
    #[case("Checked: {{ checked }}", Params::new().with("checked", true), "Checked: true")]
    #[case("Checked: {{ checked }}", Params::new().with("checked", false), "Checked: false")]
    fn template_interpolates_parameters(
        #[case] text: &str,
        #[case] params: Params,
        #[case] expected: &str,
    ) {
        let template = Template::parse(text).unwrap();
        assert_eq!(template.render(&params), expected);
    }

    #[rstest]
    fn placeholders_are_listed_in_order() {
        let template = Template::parse("{{ a }} and {{b}} and {{ a }}").unwrap();
        assert_eq!(template.placeholders().collect::<Vec<_>>(), vec!["a", "b", "a"]);
    }

    #[rstest]
    #[case("{{}}")]
    #[case("{{ two words }}")]
    #[case("{ name }")]
    fn malformed_placeholders_are_plain_text(#[case] text: &str) {
        assert!(matches!(Phrase::compile(&PhraseData::from(text)), Phrase::Plain(_)));
    }

    #[rstest]
    fn function_phrase_receives_params() {
        let data = PhraseData::function(|params: &Params| {
            format!("{} items", params.get("count").unwrap_or("no"))
        });

        let phrase = Phrase::compile(&data);

        assert_eq!(phrase.render(&Params::new().with("count", 2)), "2 items");
        assert_eq!(phrase.render(&Params::new()), "no items");
    }

    #[rstest]
    fn text_deserializes_from_string() {
        let data: PhraseData = serde_json::from_str("\"Hello\"").unwrap();
        assert_eq!(data, PhraseData::from("Hello"));
    }
}
