//! Conjunctive substring search over a loaded catalog.
//!
//! A record matches when every query token occurs somewhere in its
//! normalized searchable text (see [`Record::searchable_text`]). Results keep
//! catalog order; there is no scoring.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::core::Record;

use super::query::{Query, tokenize};

/// Result of running a query.
///
/// `EmptyQuery` and `NoMatches` are distinct so a caller can tell "nothing
/// was asked" from "nothing was found".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SearchOutcome<R> {
    /// Blank query; the whole catalog in its original order.
    EmptyQuery { records: Vec<R> },
    /// At least one record matched.
    Matches { query: String, records: Vec<R> },
    /// Nothing matched `query` (the trimmed input, echoed back).
    NoMatches { query: String },
}

impl<R> SearchOutcome<R> {
    #[must_use]
    pub fn records(&self) -> &[R] {
        match self {
            Self::EmptyQuery { records } | Self::Matches { records, .. } => records,
            Self::NoMatches { .. } => &[],
        }
    }

    #[must_use]
    pub fn into_records(self) -> Vec<R> {
        match self {
            Self::EmptyQuery { records } | Self::Matches { records, .. } => records,
            Self::NoMatches { .. } => Vec::new(),
        }
    }

    /// The echoed query text; `None` for a blank query.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        match self {
            Self::EmptyQuery { .. } => None,
            Self::Matches { query, .. } | Self::NoMatches { query } => Some(query),
        }
    }

    #[must_use]
    pub fn map<S>(self, f: impl FnMut(R) -> S) -> SearchOutcome<S> {
        match self {
            Self::EmptyQuery { records } => SearchOutcome::EmptyQuery {
                records: records.into_iter().map(f).collect(),
            },
            Self::Matches { query, records } => SearchOutcome::Matches {
                query,
                records: records.into_iter().map(f).collect(),
            },
            Self::NoMatches { query } => SearchOutcome::NoMatches { query },
        }
    }
}

impl SearchOutcome<&Record> {
    /// Detach the outcome from the catalog it borrows.
    #[must_use]
    pub fn cloned(self) -> SearchOutcome<Record> {
        self.map(Record::clone)
    }
}

/// Records whose normalized text contains every term, in catalog order.
///
/// An empty term list matches everything.
#[must_use]
pub fn filter<'a>(catalog: &'a Catalog, terms: &[String]) -> Vec<&'a Record> {
    catalog
        .entries()
        .filter(|(_, haystack)| terms.iter().all(|term| haystack.contains(term.as_str())))
        .map(|(record, _)| record)
        .collect()
}

/// Run an already tokenized query against `catalog`.
#[must_use]
pub fn run<'a>(catalog: &'a Catalog, query: &Query) -> SearchOutcome<&'a Record> {
    match query {
        Query::Empty => SearchOutcome::EmptyQuery {
            records: catalog.records().iter().collect(),
        },
        Query::Terms { raw, terms } => {
            let records = filter(catalog, terms);
            tracing::debug!(
                query = %raw,
                terms = terms.len(),
                matches = records.len(),
                lang = %catalog.lang(),
                "catalog search"
            );
            if records.is_empty() {
                SearchOutcome::NoMatches { query: raw.clone() }
            } else {
                SearchOutcome::Matches {
                    query: raw.clone(),
                    records,
                }
            }
        }
    }
}

/// Tokenize `raw` and run it against `catalog`.
#[must_use]
pub fn search_outcome<'a>(catalog: &'a Catalog, raw: &str) -> SearchOutcome<&'a Record> {
    run(catalog, &tokenize(raw))
}

/// Matching records for `raw`, in catalog order.
///
/// A blank query returns the whole catalog.
#[must_use]
pub fn search<'a>(catalog: &'a Catalog, raw: &str) -> Vec<&'a Record> {
    search_outcome(catalog, raw).into_records()
}
