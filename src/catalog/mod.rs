//! Loaded allowance catalogs
//!
//! A [`Catalog`] holds every record for one language, plus each record's
//! normalized searchable text so searches never re-normalize the data.
//! Catalogs are immutable; a language change builds a new one.

pub mod loader;
pub mod source;

pub use loader::{CatalogLoader, LoaderOptions, parse_catalog};
pub use source::CatalogSource;

use crate::core::{Field, FieldValue, Record};
use crate::i18n::Lang;
use crate::search::{self, SearchOutcome, normalize};

#[derive(Debug, Clone)]
pub struct Catalog {
    lang: Lang,
    fallback: Lang,
    records: Vec<Record>,
    haystacks: Vec<String>,
}

impl Catalog {
    /// Build a catalog for `lang`, resolving missing translations through
    /// `fallback`.
    #[must_use]
    pub fn new(lang: Lang, fallback: Lang, records: Vec<Record>) -> Self {
        let haystacks = records
            .iter()
            .map(|record| normalize(&record.searchable_text(lang.code(), fallback.code())))
            .collect();
        Self {
            lang,
            fallback,
            records,
            haystacks,
        }
    }

    #[must_use]
    pub const fn lang(&self) -> Lang {
        self.lang
    }

    #[must_use]
    pub const fn fallback(&self) -> Lang {
        self.fallback
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records paired with their normalized searchable text.
    pub fn entries(&self) -> impl Iterator<Item = (&Record, &str)> {
        self.records
            .iter()
            .zip(self.haystacks.iter().map(String::as_str))
    }

    /// Resolve a record field in this catalog's language.
    #[must_use]
    pub fn resolve(&self, record: &Record, field: Field) -> FieldValue {
        record.resolve(field, self.lang.code(), self.fallback.code())
    }

    #[must_use]
    pub fn search(&self, raw: &str) -> Vec<&Record> {
        search::search(self, raw)
    }

    #[must_use]
    pub fn search_outcome(&self, raw: &str) -> SearchOutcome<&Record> {
        search::search_outcome(self, raw)
    }
}
