//! Error handling for indemnity.
//!
//! This module provides:
//! - [`IndemnityError`]: The main error enum for all operations
//! - [`LoadError`]: The failure signal of a catalog load, with its cause
//! - [`ErrorCode`]: Standardized error codes for machine parsing
//! - [`StructuredError`]: Rich error type with suggestions and context

mod codes;
mod suggestions;

use std::io;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub use codes::ErrorCode;
pub use suggestions::suggest_for_error;

/// What went wrong while loading a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadErrorKind {
    /// The resource could not be reached (network error, missing file).
    Unreachable,
    /// The server answered with a non-success status.
    HttpStatus,
    /// The load did not complete within the configured timeout.
    Timeout,
    /// The payload was not a valid record array.
    Malformed,
}

/// Failure of a single catalog load.
///
/// Carries the language that was requested and a human-readable cause.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("failed to load catalog for '{lang}': {cause}")]
pub struct LoadError {
    pub lang: String,
    pub kind: LoadErrorKind,
    pub cause: String,
}

impl LoadError {
    pub fn new(lang: impl Into<String>, kind: LoadErrorKind, cause: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            kind,
            cause: cause.into(),
        }
    }

    pub fn unreachable(lang: impl Into<String>, cause: impl Into<String>) -> Self {
        Self::new(lang, LoadErrorKind::Unreachable, cause)
    }

    pub fn malformed(lang: impl Into<String>, cause: impl Into<String>) -> Self {
        Self::new(lang, LoadErrorKind::Malformed, cause)
    }
}

/// Main error type for indemnity operations.
#[derive(Error, Debug)]
pub enum IndemnityError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Missing required config: {0}")]
    MissingConfig(String),

    #[error("Preference storage error: {0}")]
    Preferences(String),
}

impl IndemnityError {
    /// Get the error code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Load(err) => match err.kind {
                LoadErrorKind::Unreachable => ErrorCode::CatalogUnreachable,
                LoadErrorKind::HttpStatus => ErrorCode::CatalogHttpStatus,
                LoadErrorKind::Timeout => ErrorCode::CatalogTimeout,
                LoadErrorKind::Malformed => ErrorCode::CatalogMalformed,
            },
            Self::Io(_) => ErrorCode::IoError,
            Self::Json(_) => ErrorCode::SerializationError,
            Self::UnsupportedLanguage(_) => ErrorCode::LanguageUnsupported,
            Self::Config(_) => ErrorCode::ConfigInvalid,
            Self::MissingConfig(_) => ErrorCode::ConfigMissingRequired,
            Self::Preferences(_) => ErrorCode::PreferencesUnusable,
        }
    }

    /// Get context information for this error as JSON.
    #[must_use]
    pub fn context(&self) -> Option<Value> {
        match self {
            Self::Load(err) => Some(serde_json::json!({
                "lang": err.lang,
                "kind": err.kind,
                "cause": err.cause,
            })),
            Self::UnsupportedLanguage(lang) => Some(serde_json::json!({ "lang": lang })),
            Self::MissingConfig(key) => Some(serde_json::json!({ "config_key": key })),
            _ => None,
        }
    }

    /// Convert this error to a structured error.
    #[must_use]
    pub fn to_structured(&self) -> StructuredError {
        StructuredError::from_error(self)
    }
}

/// A structured error with machine-readable code, suggestion, and context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredError {
    /// The error code (e.g., "CATALOG_UNREACHABLE")
    pub code: ErrorCode,

    /// The numeric error code (e.g., 101)
    pub numeric_code: u16,

    /// Human-readable error message
    pub message: String,

    /// Actionable suggestion for recovery
    pub suggestion: String,

    /// Additional context for debugging
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,

    /// Whether this error is potentially recoverable by the user
    pub recoverable: bool,

    /// Error category (e.g., "catalog", "config")
    pub category: String,
}

impl StructuredError {
    /// Create a new structured error.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            numeric_code: code.numeric(),
            suggestion: code.suggestion().to_string(),
            context: None,
            recoverable: code.is_recoverable(),
            category: code.category().to_string(),
            code,
            message: message.into(),
        }
    }

    /// Create a structured error from an [`IndemnityError`].
    #[must_use]
    pub fn from_error(err: &IndemnityError) -> Self {
        let code = err.code();
        let context = err.context();
        let suggestion = suggest_for_error(code, context.as_ref());

        Self {
            code,
            numeric_code: code.numeric(),
            message: err.to_string(),
            suggestion,
            context,
            recoverable: code.is_recoverable(),
            category: code.category().to_string(),
        }
    }
}

impl std::fmt::Display for StructuredError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl From<&IndemnityError> for StructuredError {
    fn from(err: &IndemnityError) -> Self {
        Self::from_error(err)
    }
}

/// Result type alias using [`IndemnityError`].
pub type Result<T> = std::result::Result<T, IndemnityError>;
