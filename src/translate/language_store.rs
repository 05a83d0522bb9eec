//! The language store and language change handling.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use futures::stream::Stream;

use super::language::{Language, LanguageChangeRequest, LanguageState};
use super::resolver::LanguageResolver;
use crate::store::Store;

/// Decides which language a change request switches to.
///
/// Implemented for every `Fn(&LanguageChangeRequest) -> Language`, so a
/// handler can accept the target, keep the current language, or pick another
/// one. A result outside the supported set leaves the language unchanged.
pub trait LanguageChangeHandler: Send + Sync {
    /// Returns the language to switch to.
    fn handle(&self, request: &LanguageChangeRequest) -> Language;
}

impl<F> LanguageChangeHandler for F
where
    F: Fn(&LanguageChangeRequest) -> Language + Send + Sync,
{
    fn handle(&self, request: &LanguageChangeRequest) -> Language {
        self(request)
    }
}

/// Accepts every request. The default handler.
#[derive(Clone, Copy, Debug, Default)]
pub struct TargetLanguage;

impl LanguageChangeHandler for TargetLanguage {
    fn handle(&self, request: &LanguageChangeRequest) -> Language {
        request.target.clone()
    }
}

/// Rejects every request, keeping the current language.
#[derive(Clone, Copy, Debug, Default)]
pub struct CurrentLanguage;

impl LanguageChangeHandler for CurrentLanguage {
    fn handle(&self, request: &LanguageChangeRequest) -> Language {
        request.current.clone()
    }
}

/// A [`Store`] of the [`LanguageState`] plus the resolution pipeline for
/// language requests.
///
/// # Examples
///
/// ```rust
/// use ngry::translate::{DefaultLanguageResolver, Language, LanguageMapping, LanguageStore};
///
/// let store = LanguageStore::new(
///     Language::new("uk"),
///     "en",
///     ["en", "uk"],
///     DefaultLanguageResolver::new("en", ["en", "uk"], LanguageMapping::new()),
/// );
/// assert_eq!(store.current(), Language::new("uk"));
///
/// store.request(&Language::new("ru"));
/// assert_eq!(store.current(), Language::new("en"));
/// ```
#[derive(Clone)]
pub struct LanguageStore {
    store: Store<LanguageState>,
    resolver: Arc<dyn LanguageResolver>,
    handler: Arc<dyn LanguageChangeHandler>,
}

impl LanguageStore {
    /// Creates a store whose current language is `source` run through
    /// `resolver`.
    ///
    /// An empty `supported` set means only `default` is supported.
    pub fn new<I, L, R>(source: Language, default: impl Into<Language>, supported: I, resolver: R) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Language>,
        R: LanguageResolver + 'static,
    {
        let default = default.into();
        let mut supported: BTreeSet<Language> = supported.into_iter().map(Into::into).collect();
        if supported.is_empty() {
            supported.insert(default.clone());
        }

        let current = resolver.resolve(&source);
        tracing::debug!(%source, %current, "language store created");

        Self {
            store: Store::new(LanguageState {
                current,
                default,
                supported,
            }),
            resolver: Arc::new(resolver),
            handler: Arc::new(TargetLanguage),
        }
    }

    /// Replaces the change handler.
    #[must_use]
    pub fn with_handler(mut self, handler: impl LanguageChangeHandler + 'static) -> Self {
        self.handler = Arc::new(handler);
        self
    }

    /// Returns the current language.
    #[must_use]
    pub fn current(&self) -> Language {
        self.store.get(|state| state.current.clone())
    }

    /// Returns the whole language state.
    #[must_use]
    pub fn state(&self) -> LanguageState {
        self.store.snapshot()
    }

    /// Returns the underlying store.
    #[must_use]
    pub const fn store(&self) -> &Store<LanguageState> {
        &self.store
    }

    /// Requests a switch to `language` and returns the language in use
    /// afterwards.
    ///
    /// The request is resolved first. When the resolved language is already
    /// current nothing happens; otherwise the change handler picks the new
    /// language, which is applied only if supported.
    ///
    /// The comparison, the handler call and the switch run as one store
    /// update, so the handler sees the language that is actually current. The
    /// handler runs under the store lock and must not use this store.
    pub fn request(&self, language: &Language) -> Language {
        let target = self.resolver.resolve(language);
        let mut current = None;

        self.store.update(|state| {
            if state.current == target {
                current = Some(target.clone());
                return state.clone();
            }

            let request = LanguageChangeRequest {
                current: state.current.clone(),
                target: target.clone(),
            };
            let chosen = self.handler.handle(&request);

            if state.supports(&chosen) {
                current = Some(chosen.clone());
                LanguageState {
                    current: chosen,
                    ..state.clone()
                }
            } else {
                tracing::warn!(language = %chosen, "language change rejected: unsupported");
                current = Some(state.current.clone());
                state.clone()
            }
        });

        // A destroyed store ignores the update and keeps its language.
        let current = current
            .filter(|_| !self.store.is_destroyed())
            .unwrap_or_else(|| self.current());
        tracing::debug!(requested = %language, %current, "language requested");
        current
    }

    /// Stream of the current language: the language now, then every change.
    pub fn changes(&self) -> impl Stream<Item = Language> + use<> {
        self.store.select(|state| state.current.clone())
    }
}

impl fmt::Debug for LanguageStore {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("LanguageStore")
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}
