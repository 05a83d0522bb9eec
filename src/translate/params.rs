//! Named interpolation values for phrases.

use std::collections::BTreeMap;

/// Parameters passed to a phrase.
///
/// Values are rendered with [`ToString`]. A parameter set to `None` is
/// treated exactly like a missing one.
///
/// # Examples
///
/// ```rust
/// use ngry::translate::Params;
///
/// let params = Params::new()
///     .with("name", "Alex")
///     .with("count", 3)
///     .with_optional("nickname", None::<&str>);
///
/// assert_eq!(params.get("count"), Some("3"));
/// assert_eq!(params.get("nickname"), None);
/// assert_eq!(params.get("missing"), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Params {
    values: BTreeMap<String, Option<String>>,
}

impl Params {
    /// Creates an empty parameter set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Sets `name` to `value`.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.insert(name, Some(value));
        self
    }

    /// Sets `name` to `value`, or marks it as absent when `value` is `None`.
    #[must_use]
    pub fn with_optional<V: ToString>(mut self, name: impl Into<String>, value: Option<V>) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets `name` in place.
    pub fn insert<V: ToString>(&mut self, name: impl Into<String>, value: Option<V>) {
        self.values
            .insert(name.into(), value.map(|value| value.to_string()));
    }

    /// Returns the rendered value of `name`, if set to something.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).and_then(Option::as_deref)
    }

    /// Returns `true` when no parameter is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Params
where
    K: Into<String>,
    V: ToString,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: ToString,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(entries: I) -> Self {
        entries
            .into_iter()
            .fold(Self::new(), |params, (name, value)| params.with(name, value))
    }
}
