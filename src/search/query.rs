//! Query tokenization.

use super::normalize::normalize;

/// A parsed user query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Blank input: the caller shows the whole catalog.
    Empty,
    /// Normalized tokens, plus the trimmed input for echoing back.
    Terms { raw: String, terms: Vec<String> },
}

impl Query {
    /// Normalized tokens; empty for [`Query::Empty`].
    #[must_use]
    pub fn terms(&self) -> &[String] {
        match self {
            Self::Empty => &[],
            Self::Terms { terms, .. } => terms,
        }
    }

    /// The trimmed text the user typed, if any.
    #[must_use]
    pub fn raw(&self) -> Option<&str> {
        match self {
            Self::Empty => None,
            Self::Terms { raw, .. } => Some(raw),
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Trim `raw`, normalize it and split on whitespace runs.
#[must_use]
pub fn tokenize(raw: &str) -> Query {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Query::Empty;
    }

    let terms = normalize(trimmed)
        .split_whitespace()
        .map(str::to_string)
        .collect();

    Query::Terms {
        raw: trimmed.to_string(),
        terms,
    }
}
