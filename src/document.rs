//! Links from records to pages of the reference document.

use std::num::NonZeroU32;

use crate::core::Record;

/// The labor code PDF that records cite by page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceDocument {
    path: String,
}

impl ReferenceDocument {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// `<path>#page=<n>`, the fragment PDF viewers use to open a page.
    #[must_use]
    pub fn page_url(&self, page: NonZeroU32) -> String {
        let base = self.path.split('#').next().unwrap_or_default();
        format!("{base}#page={page}")
    }

    /// Link for `record`, if it cites a page.
    #[must_use]
    pub fn link_for(&self, record: &Record) -> Option<String> {
        record.document_page().map(|page| self.page_url(page))
    }
}
