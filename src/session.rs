//! The lookup session: one resident catalog and the language it is in.
//!
//! Loading is the only mutation. A completed load replaces the whole state
//! in a single send on a `watch` channel, so readers keep seeing the old
//! catalog until the new one is fully parsed. When two loads overlap, the
//! one that completes last wins.

use std::sync::Arc;

use tokio::sync::watch;

use crate::catalog::{Catalog, CatalogLoader};
use crate::core::{Field, FieldValue, Record};
use crate::error::LoadError;
use crate::i18n::Lang;
use crate::search::{Query, SearchOutcome, tokenize};

/// What the session currently holds.
#[derive(Debug, Clone, Default)]
pub enum CatalogState {
    /// No load has completed yet.
    #[default]
    Unloaded,
    Loaded(Arc<Catalog>),
    /// The most recent load for `lang` failed.
    Unavailable { lang: Lang, error: LoadError },
}

impl CatalogState {
    #[must_use]
    pub fn catalog(&self) -> Option<&Arc<Catalog>> {
        match self {
            Self::Loaded(catalog) => Some(catalog),
            Self::Unloaded | Self::Unavailable { .. } => None,
        }
    }

    /// Language of the resident catalog, or of the load that failed.
    #[must_use]
    pub fn lang(&self) -> Option<Lang> {
        match self {
            Self::Unloaded => None,
            Self::Loaded(catalog) => Some(catalog.lang()),
            Self::Unavailable { lang, .. } => Some(*lang),
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&LoadError> {
        match self {
            Self::Unavailable { error, .. } => Some(error),
            Self::Unloaded | Self::Loaded(_) => None,
        }
    }

    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }
}

#[derive(Debug)]
pub struct Session {
    loader: CatalogLoader,
    state: watch::Sender<CatalogState>,
}

impl Session {
    #[must_use]
    pub fn new(loader: CatalogLoader) -> Self {
        let (state, _) = watch::channel(CatalogState::Unloaded);
        Self { loader, state }
    }

    #[must_use]
    pub const fn loader(&self) -> &CatalogLoader {
        &self.loader
    }

    /// Fetch the catalog for `lang` and make it resident.
    ///
    /// On failure the session becomes [`CatalogState::Unavailable`] and the
    /// error is returned as well, so callers can report it.
    pub async fn load(&self, lang: Lang) -> Result<Arc<Catalog>, LoadError> {
        match self.loader.load(lang).await {
            Ok(catalog) => {
                let catalog = Arc::new(catalog);
                self.state.send_replace(CatalogState::Loaded(Arc::clone(&catalog)));
                Ok(catalog)
            }
            Err(error) => {
                tracing::warn!(%lang, kind = ?error.kind, cause = %error.cause, "catalog unavailable");
                self.state.send_replace(CatalogState::Unavailable {
                    lang,
                    error: error.clone(),
                });
                Err(error)
            }
        }
    }

    /// Current state, cheap to clone.
    #[must_use]
    pub fn snapshot(&self) -> CatalogState {
        self.state.borrow().clone()
    }

    /// Observe state changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<CatalogState> {
        self.state.subscribe()
    }

    #[must_use]
    pub fn catalog(&self) -> Option<Arc<Catalog>> {
        self.state.borrow().catalog().cloned()
    }

    /// Language of the resident catalog; `None` before the first load.
    #[must_use]
    pub fn active_language(&self) -> Option<Lang> {
        self.state.borrow().lang()
    }

    /// Matching records from the resident catalog; empty when none is loaded.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<Record> {
        self.search_outcome(query).into_records()
    }

    /// Like [`Session::search`], keeping the outcome kind. Without a
    /// resident catalog the outcome is empty rather than an error.
    #[must_use]
    pub fn search_outcome(&self, query: &str) -> SearchOutcome<Record> {
        match self.catalog() {
            Some(catalog) => catalog.search_outcome(query).cloned(),
            None => {
                tracing::debug!(%query, "search without a resident catalog");
                match tokenize(query) {
                    Query::Empty => SearchOutcome::EmptyQuery { records: Vec::new() },
                    Query::Terms { raw, .. } => SearchOutcome::NoMatches { query: raw },
                }
            }
        }
    }

    /// Resolve `field` of `record` in the active language.
    #[must_use]
    pub fn resolve(&self, record: &Record, field: Field) -> FieldValue {
        let fallback = self.loader.options().fallback;
        let lang = self.active_language().unwrap_or(fallback);
        record.resolve(field, lang.code(), fallback.code())
    }
}
