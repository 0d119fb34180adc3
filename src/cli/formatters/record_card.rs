//! Card view of a single allowance record

use console::style;
use serde::Serialize;

use crate::catalog::Catalog;
use crate::cli::output::{Formattable, HumanLayout, OutputFormat};
use crate::core::{Field, FieldValue, Liability, Record};
use crate::document::ReferenceDocument;
use crate::i18n::{Lang, t};

/// A record rendered in one interface language
#[derive(Debug, Clone)]
pub struct RecordCard<'a> {
    pub record: &'a Record,
    pub lang: Lang,
    pub fallback: Lang,
    pub document: Option<&'a ReferenceDocument>,
}

/// Serializable, fully resolved record
#[derive(Debug, Clone, Serialize)]
pub struct RecordView {
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub abbreviations: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    pub definition: String,
    pub reason: String,
    pub cotisable: Liability,
    pub imposable: Liability,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exoneration_reason: Option<String>,
    #[serde(rename = "pdfPage", skip_serializing_if = "Option::is_none")]
    pub pdf_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf_url: Option<String>,
}

impl<'a> RecordCard<'a> {
    pub const fn new(record: &'a Record, lang: Lang, fallback: Lang) -> Self {
        Self {
            record,
            lang,
            fallback,
            document: None,
        }
    }

    /// Card in the language of the catalog holding `record`.
    pub const fn in_catalog(record: &'a Record, catalog: &Catalog) -> Self {
        Self::new(record, catalog.lang(), catalog.fallback())
    }

    /// Link the cited page of `document`
    #[must_use]
    pub const fn with_document(mut self, document: &'a ReferenceDocument) -> Self {
        self.document = Some(document);
        self
    }

    fn text(&self, field: Field) -> String {
        match self
            .record
            .resolve(field, self.lang.code(), self.fallback.code())
        {
            FieldValue::Text(text) => text,
            FieldValue::List(items) => items.join(", "),
        }
    }

    fn list(&self, field: Field) -> Vec<String> {
        match self
            .record
            .resolve(field, self.lang.code(), self.fallback.code())
        {
            FieldValue::List(items) => items,
            FieldValue::Text(text) if text.is_empty() => Vec::new(),
            FieldValue::Text(text) => vec![text],
        }
    }

    fn pdf_url(&self) -> Option<String> {
        self.document.and_then(|doc| doc.link_for(self.record))
    }

    #[must_use]
    pub fn to_view(&self) -> RecordView {
        let exoneration = self.text(Field::ExonerationReason);
        RecordView {
            name: self.text(Field::Name),
            abbreviations: self.record.abbreviations.clone(),
            keywords: self.list(Field::Keywords),
            definition: self.text(Field::Definition),
            reason: self.text(Field::Reason),
            cotisable: self.record.cotisable.clone(),
            imposable: self.record.imposable.clone(),
            exoneration_reason: (!exoneration.is_empty()).then_some(exoneration),
            pdf_page: self.record.document_page().map(|page| page.get()),
            pdf_url: self.pdf_url(),
        }
    }

    /// Name followed by abbreviations in parentheses.
    #[must_use]
    pub fn heading(&self) -> String {
        let name = self.text(Field::Name);
        if self.record.abbreviations.is_empty() {
            name
        } else {
            format!("{name} ({})", self.record.abbreviations.join(", "))
        }
    }

    fn liability(&self, value: &Liability) -> String {
        match value {
            Liability::Yes => t(self.lang, "yes").to_string(),
            Liability::No => t(self.lang, "no").to_string(),
            Liability::Other(raw) => raw.clone(),
        }
    }

    fn styled_liability(&self, value: &Liability, colored: bool) -> String {
        let label = self.liability(value);
        if !colored {
            return label;
        }
        match value.as_bool() {
            Some(true) => style(label).green().to_string(),
            Some(false) => style(label).yellow().to_string(),
            None => label,
        }
    }

    /// Lines of the card, for embedding in a larger layout.
    pub fn write_to(&self, layout: &mut HumanLayout, colored: bool) {
        let view = self.to_view();
        let heading = self.heading();
        if colored {
            layout.push_line(style(heading).cyan().bold().to_string());
        } else {
            layout.push_line(heading);
        }

        if !view.definition.is_empty() {
            layout.kv(t(self.lang, "definition"), &view.definition);
        }
        layout.kv(
            t(self.lang, "cotisable"),
            &self.styled_liability(&view.cotisable, colored),
        );
        layout.kv(
            t(self.lang, "imposable"),
            &self.styled_liability(&view.imposable, colored),
        );
        if !view.reason.is_empty() {
            layout.kv(t(self.lang, "legal-reference"), &view.reason);
        }
        if let Some(reason) = &view.exoneration_reason {
            layout.kv(t(self.lang, "exoneration"), reason);
        }
        if let Some(url) = &view.pdf_url {
            layout.kv(t(self.lang, "show-pdf"), url);
        }
    }

    fn format_layout(&self, format: OutputFormat) -> String {
        let mut layout = HumanLayout::for_format(format).with_direction(self.lang.direction());
        self.write_to(&mut layout, format.use_colors());
        layout.build()
    }

    fn format_plain_line(&self) -> String {
        let mut parts = vec![
            self.heading(),
            format!(
                "{}: {}",
                t(self.lang, "cotisable"),
                self.liability(&self.record.cotisable)
            ),
            format!(
                "{}: {}",
                t(self.lang, "imposable"),
                self.liability(&self.record.imposable)
            ),
        ];
        let reason = self.text(Field::Reason);
        if !reason.is_empty() {
            parts.push(reason);
        }
        self.lang.direction().isolate(&parts.join(" | "))
    }
}

impl Formattable for RecordCard<'_> {
    fn format(&self, fmt: OutputFormat) -> String {
        match fmt {
            OutputFormat::Human => self.format_layout(fmt),
            OutputFormat::Plain => self.format_plain_line(),
            OutputFormat::Json => serde_json::to_string_pretty(&self.to_view()).unwrap_or_default(),
            OutputFormat::Jsonl => serde_json::to_string(&self.to_view()).unwrap_or_default(),
        }
    }
}
