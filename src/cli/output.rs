use chrono::{DateTime, Utc};
use clap::ValueEnum;
use console::style;
use serde::Serialize;

use crate::error::{ErrorCode, IndemnityError, Result, StructuredError};
use crate::i18n::{Direction, Lang};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable formatted output with colors (default)
    #[default]
    Human,
    /// Pretty-printed JSON
    Json,
    /// Newline-delimited JSON (one object per line)
    Jsonl,
    /// Plain text without colors or formatting
    Plain,
}

impl OutputFormat {
    /// Parse the `output.format` config value.
    #[must_use]
    pub fn from_config(value: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(value.trim(), true).ok()
    }

    /// Check if this format should use colors
    #[must_use]
    pub const fn use_colors(&self) -> bool {
        matches!(self, Self::Human)
    }

    /// Check if this format is machine-readable
    #[must_use]
    pub const fn is_machine_readable(&self) -> bool {
        matches!(self, Self::Json | Self::Jsonl)
    }
}

/// Versioned envelope around JSON output.
#[derive(Serialize)]
pub struct JsonResponse<T> {
    pub status: ResponseStatus,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<Lang>,
    pub data: T,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStatus {
    Ok,
    Error {
        code: ErrorCode,
        numeric_code: u16,
        message: String,
        suggestion: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        context: Option<serde_json::Value>,
        recoverable: bool,
        category: String,
    },
}

impl From<StructuredError> for ResponseStatus {
    fn from(err: StructuredError) -> Self {
        Self::Error {
            code: err.code,
            numeric_code: err.numeric_code,
            message: err.message,
            suggestion: err.suggestion,
            context: err.context,
            recoverable: err.recoverable,
            category: err.category,
        }
    }
}

impl From<&IndemnityError> for ResponseStatus {
    fn from(err: &IndemnityError) -> Self {
        err.to_structured().into()
    }
}

impl<T> JsonResponse<T> {
    #[must_use]
    pub fn with_lang(mut self, lang: Lang) -> Self {
        self.lang = Some(lang);
        self
    }

    #[must_use]
    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }
}

pub fn json_ok<T: Serialize>(data: T) -> JsonResponse<T> {
    JsonResponse {
        status: ResponseStatus::Ok,
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        lang: None,
        data,
        warnings: Vec::new(),
    }
}

/// Error envelope carrying the structured form of `err`.
pub fn json_error(err: &IndemnityError) -> JsonResponse<serde_json::Value> {
    JsonResponse {
        status: err.into(),
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        lang: None,
        data: serde_json::Value::Null,
        warnings: Vec::new(),
    }
}

pub fn emit_json<T: Serialize>(value: &T) -> Result<()> {
    let payload = serde_json::to_string_pretty(value)?;
    println!("{payload}");
    Ok(())
}

/// Emit a slice of items in JSONL format (one JSON object per line)
pub fn emit_jsonl<T: Serialize>(items: &[T]) -> Result<()> {
    for item in items {
        println!("{}", serde_json::to_string(item)?);
    }
    Ok(())
}

/// Builder for key/value terminal layouts.
///
/// Styling is only applied when `colored` is set, so the same layout code
/// serves both human and plain output. Right-to-left layouts wrap every
/// line in a directional isolate.
pub struct HumanLayout {
    lines: Vec<String>,
    key_width: usize,
    colored: bool,
    direction: Direction,
}

impl Default for HumanLayout {
    fn default() -> Self {
        Self::new(true)
    }
}

impl HumanLayout {
    #[must_use]
    pub const fn new(colored: bool) -> Self {
        Self {
            lines: Vec::new(),
            key_width: 18,
            colored,
            direction: Direction::Ltr,
        }
    }

    #[must_use]
    pub const fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    #[must_use]
    pub const fn for_format(format: OutputFormat) -> Self {
        Self::new(format.use_colors())
    }

    pub fn title(&mut self, text: &str) -> &mut Self {
        let line = if self.colored {
            style(text).bold().to_string()
        } else {
            text.to_string()
        };
        self.lines.push(line);
        self
    }

    pub fn kv(&mut self, key: &str, value: &str) -> &mut Self {
        let pad = self.key_width.saturating_sub(key.chars().count() + 1);
        let key = format!("{key}:");
        let key = if self.colored {
            style(key).dim().to_string()
        } else {
            key
        };
        self.lines.push(format!("{key}{} {value}", " ".repeat(pad)));
        self
    }

    pub fn muted(&mut self, text: &str) -> &mut Self {
        let line = if self.colored {
            style(text).dim().to_string()
        } else {
            text.to_string()
        };
        self.lines.push(line);
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.lines.push(String::new());
        self
    }

    pub fn push_line(&mut self, line: impl Into<String>) -> &mut Self {
        self.lines.push(line.into());
        self
    }

    #[must_use]
    pub fn build(self) -> String {
        let direction = self.direction;
        self.lines
            .into_iter()
            .map(|line| {
                if line.is_empty() {
                    line
                } else {
                    direction.isolate(&line)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub fn emit_human(layout: HumanLayout) {
    println!("{}", layout.build());
}

/// Trait for types that can format themselves for different output modes
pub trait Formattable {
    /// Format this value for the given output format
    fn format(&self, fmt: OutputFormat) -> String;
}

/// Emit a formattable value to stdout
pub fn emit<T: Formattable>(value: &T, format: OutputFormat) {
    println!("{}", value.format(format));
}
