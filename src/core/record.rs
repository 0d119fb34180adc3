//! Allowance records as stored in catalog files.

use std::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use super::localized::{Localized, null_as_default};

/// Social-contribution or income-tax liability of an allowance.
///
/// Catalogs spell it "Oui"/"Non" (or the English and Arabic equivalents);
/// anything else is preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Liability {
    Yes,
    No,
    Other(String),
}

impl Liability {
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Yes => Some(true),
            Self::No => Some(false),
            Self::Other(_) => None,
        }
    }
}

impl From<String> for Liability {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "oui" | "yes" | "نعم" => Self::Yes,
            "non" | "no" | "لا" => Self::No,
            _ => Self::Other(value),
        }
    }
}

impl From<Liability> for String {
    fn from(value: Liability) -> Self {
        match value {
            Liability::Yes => "Oui".to_string(),
            Liability::No => "Non".to_string(),
            Liability::Other(raw) => raw,
        }
    }
}

impl fmt::Display for Liability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yes => f.write_str("Oui"),
            Self::No => f.write_str("Non"),
            Self::Other(raw) => f.write_str(raw),
        }
    }
}

/// One allowance/indemnity entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: Localized<String>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub abbreviations: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub keywords: Localized<Vec<String>>,
    pub definition: Localized<String>,
    pub reason: Localized<String>,
    pub cotisable: Liability,
    pub imposable: Liability,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exoneration_reason: Option<Localized<String>>,
    #[serde(default, rename = "pdfPage", alias = "pdf_page", skip_serializing_if = "Option::is_none")]
    pub pdf_page: Option<u32>,
}

/// Fields a caller can resolve for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Abbreviations,
    Keywords,
    Definition,
    Reason,
    ExonerationReason,
}

/// A resolved field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::List(items) => items.is_empty(),
        }
    }
}

impl Record {
    /// Resolve `field` for `lang`, falling back to `fallback`, then to an
    /// empty value. Abbreviations are not localized and come back as stored.
    #[must_use]
    pub fn resolve(&self, field: Field, lang: &str, fallback: &str) -> FieldValue {
        match field {
            Field::Name => FieldValue::Text(self.name.resolve(lang, fallback)),
            Field::Abbreviations => FieldValue::List(self.abbreviations.clone()),
            Field::Keywords => FieldValue::List(self.keywords.resolve(lang, fallback)),
            Field::Definition => FieldValue::Text(self.definition.resolve(lang, fallback)),
            Field::Reason => FieldValue::Text(self.reason.resolve(lang, fallback)),
            Field::ExonerationReason => FieldValue::Text(
                self.exoneration_reason
                    .as_ref()
                    .map(|field| field.resolve(lang, fallback))
                    .unwrap_or_default(),
            ),
        }
    }

    /// Concatenate the searchable fields, resolved for `lang`, with single
    /// spaces: name, abbreviations, keywords, definition, reason.
    #[must_use]
    pub fn searchable_text(&self, lang: &str, fallback: &str) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(4 + self.abbreviations.len());
        parts.push(text_or_empty(&self.name, lang, fallback));
        parts.extend(self.abbreviations.iter().map(String::as_str));
        if let Some(keywords) = self.keywords.get(lang, fallback) {
            parts.extend(keywords.iter().map(String::as_str));
        }
        parts.push(text_or_empty(&self.definition, lang, fallback));
        parts.push(text_or_empty(&self.reason, lang, fallback));
        parts.join(" ")
    }

    /// Page of the reference document this record points at, if any.
    #[must_use]
    pub fn document_page(&self) -> Option<NonZeroU32> {
        self.pdf_page.and_then(NonZeroU32::new)
    }
}

fn text_or_empty<'a>(field: &'a Localized<String>, lang: &str, fallback: &str) -> &'a str {
    field.get(lang, fallback).map_or("", String::as_str)
}
