//! Search results formatter

use console::style;
use serde::Serialize;

use crate::cli::output::{Formattable, HumanLayout, OutputFormat};
use crate::core::Record;
use crate::document::ReferenceDocument;
use crate::error::LoadError;
use crate::i18n::{Lang, t};
use crate::search::SearchOutcome;

use super::record_card::{RecordCard, RecordView};

/// What a search produced, including the case where no catalog was available.
#[derive(Debug, Clone)]
pub enum ResultsBody {
    Outcome(SearchOutcome<Record>),
    Unavailable(LoadError),
}

/// Search results collection for formatted display
#[derive(Debug, Clone)]
pub struct SearchResults {
    pub lang: Lang,
    pub fallback: Lang,
    pub body: ResultsBody,
    pub document: Option<ReferenceDocument>,
}

/// Serializable search response for JSON output
#[derive(Debug, Clone, Serialize)]
struct SearchResponseJson {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    outcome: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    query: Option<String>,
    count: usize,
    results: Vec<RecordView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl SearchResults {
    pub fn new(outcome: SearchOutcome<Record>, lang: Lang, fallback: Lang) -> Self {
        Self {
            lang,
            fallback,
            body: ResultsBody::Outcome(outcome),
            document: None,
        }
    }

    /// Results for a language whose catalog failed to load.
    pub fn unavailable(error: LoadError, lang: Lang, fallback: Lang) -> Self {
        Self {
            lang,
            fallback,
            body: ResultsBody::Unavailable(error),
            document: None,
        }
    }

    #[must_use]
    pub fn with_document(mut self, document: ReferenceDocument) -> Self {
        self.document = Some(document);
        self
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        match &self.body {
            ResultsBody::Outcome(outcome) => outcome.records(),
            ResultsBody::Unavailable(_) => &[],
        }
    }

    fn card<'a>(&'a self, record: &'a Record) -> RecordCard<'a> {
        let card = RecordCard::new(record, self.lang, self.fallback);
        match &self.document {
            Some(doc) => card.with_document(doc),
            None => card,
        }
    }

    fn views(&self) -> Vec<RecordView> {
        self.records()
            .iter()
            .map(|record| self.card(record).to_view())
            .collect()
    }

    fn to_json_response(&self) -> SearchResponseJson {
        match &self.body {
            ResultsBody::Outcome(outcome) => SearchResponseJson {
                status: "ok",
                outcome: Some(match outcome {
                    SearchOutcome::EmptyQuery { .. } => "empty_query",
                    SearchOutcome::Matches { .. } => "matches",
                    SearchOutcome::NoMatches { .. } => "no_matches",
                }),
                query: outcome.query().map(str::to_string),
                count: outcome.records().len(),
                results: self.views(),
                error: None,
            },
            ResultsBody::Unavailable(err) => SearchResponseJson {
                status: "unavailable",
                outcome: None,
                query: None,
                count: 0,
                results: Vec::new(),
                error: Some(err.to_string()),
            },
        }
    }

    fn format_layout(&self, format: OutputFormat) -> String {
        let colored = format.use_colors();
        let mut layout = HumanLayout::for_format(format).with_direction(self.lang.direction());

        match &self.body {
            ResultsBody::Unavailable(err) => {
                let headline = t(self.lang, "no-data");
                if colored {
                    layout.push_line(format!("{} {headline}", style("!").red()));
                } else {
                    layout.push_line(headline);
                }
                layout.muted(&format!("{}: {}", t(self.lang, "data-error"), err.cause));
            }
            ResultsBody::Outcome(SearchOutcome::NoMatches { query }) => {
                let quoted = format!("\"{query}\"");
                let quoted = if colored {
                    style(quoted).cyan().to_string()
                } else {
                    quoted
                };
                layout.push_line(format!("{} {quoted}", t(self.lang, "no-results-for")));
                layout.muted(t(self.lang, "try-again"));
            }
            ResultsBody::Outcome(outcome) if outcome.records().is_empty() => {
                layout.push_line(t(self.lang, "no-results"));
            }
            ResultsBody::Outcome(outcome) => {
                let count = outcome.records().len().to_string();
                let count = if colored {
                    style(count).bold().to_string()
                } else {
                    count
                };
                layout.push_line(format!("{count} {}", t(self.lang, "results-count")));
                for record in outcome.records() {
                    layout.blank();
                    self.card(record).write_to(&mut layout, colored);
                }
            }
        }

        layout.build()
    }

    fn format_plain(&self) -> String {
        match &self.body {
            ResultsBody::Outcome(SearchOutcome::NoMatches { query }) => self
                .lang
                .direction()
                .isolate(&format!("{} \"{query}\"", t(self.lang, "no-results-for"))),
            ResultsBody::Outcome(outcome) => outcome
                .records()
                .iter()
                .map(|record| self.card(record).format(OutputFormat::Plain))
                .collect::<Vec<_>>()
                .join("\n"),
            ResultsBody::Unavailable(_) => self.format_layout(OutputFormat::Plain),
        }
    }

    /// One record view per line. Outcomes without records get a single
    /// status line instead of empty output.
    fn format_jsonl(&self) -> String {
        let status = match &self.body {
            ResultsBody::Unavailable(err) => Some(serde_json::json!({
                "status": "unavailable",
                "lang": err.lang,
                "kind": err.kind,
                "error": err.to_string(),
            })),
            ResultsBody::Outcome(SearchOutcome::NoMatches { query }) => Some(serde_json::json!({
                "status": "ok",
                "outcome": "no_matches",
                "query": query,
            })),
            ResultsBody::Outcome(_) => None,
        };
        if let Some(status) = status {
            return status.to_string();
        }

        self.views()
            .iter()
            .filter_map(|view| serde_json::to_string(view).ok())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Formattable for SearchResults {
    fn format(&self, fmt: OutputFormat) -> String {
        match fmt {
            OutputFormat::Human => self.format_layout(fmt),
            OutputFormat::Json => {
                serde_json::to_string_pretty(&self.to_json_response()).unwrap_or_default()
            }
            OutputFormat::Jsonl => self.format_jsonl(),
            OutputFormat::Plain => self.format_plain(),
        }
    }
}
