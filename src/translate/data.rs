//! Raw translation data and merging.

use std::collections::BTreeMap;

use super::language::Language;
use super::phrase::PhraseData;

/// Phrases of one language by key.
pub type BundleData = BTreeMap<String, PhraseData>;

/// Bundles by language.
pub type TextData = BTreeMap<Language, BundleData>;

/// One phrase given for several languages.
pub type StandalonePhraseData = BTreeMap<Language, PhraseData>;

/// Merges bundles left to right. A key defined again replaces the earlier
/// phrase and is logged.
///
/// # Examples
///
/// ```rust
/// use ngry::translate::{merge_bundle_data, BundleData, PhraseData};
///
/// let base = BundleData::from([("hello".to_string(), PhraseData::from("Hello"))]);
/// let extra = BundleData::from([("hello".to_string(), PhraseData::from("Hi"))]);
///
/// let merged = merge_bundle_data([base, extra]);
/// assert_eq!(merged["hello"], PhraseData::from("Hi"));
/// ```
pub fn merge_bundle_data<I>(dataset: I) -> BundleData
where
    I: IntoIterator<Item = BundleData>,
{
    dataset.into_iter().fold(BundleData::new(), |mut merged, data| {
        for (key, phrase) in data {
            if let Some(previous) = merged.get(&key) {
                tracing::warn!(
                    "Phrase \"{key}\" with value {previous:?} has been overridden with value {phrase:?}"
                );
            }
            merged.insert(key, phrase);
        }
        merged
    })
}

/// Merges text data left to right, merging the bundles of each language with
/// [`merge_bundle_data`].
pub fn merge_text_data<I>(dataset: I) -> TextData
where
    I: IntoIterator<Item = TextData>,
{
    dataset.into_iter().fold(TextData::new(), |mut merged, data| {
        for (language, bundle) in data {
            let previous = merged.remove(&language).unwrap_or_default();
            merged.insert(language, merge_bundle_data([previous, bundle]));
        }
        merged
    })
}
