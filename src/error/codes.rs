//! Standardized error codes for machine-parseable output.
//!
//! Error codes follow a numeric taxonomy:
//! - 1xx: Catalog loading errors
//! - 2xx: Language errors
//! - 3xx: Config errors
//! - 6xx: Storage errors
//! - 9xx: Internal errors

use serde::{Deserialize, Serialize};

/// Standardized error codes for JSON output.
///
/// Each variant maps to a numeric code (e.g., `CatalogUnreachable` -> E101).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // ========================================
    // Catalog errors (1xx)
    // ========================================
    /// E101: Catalog resource could not be reached
    CatalogUnreachable,
    /// E102: Catalog server answered with a non-success status
    CatalogHttpStatus,
    /// E103: Catalog load did not finish in time
    CatalogTimeout,
    /// E104: Catalog payload is not a valid record array
    CatalogMalformed,

    // ========================================
    // Language errors (2xx)
    // ========================================
    /// E201: Language code is not one the interface supports
    LanguageUnsupported,

    // ========================================
    // Config errors (3xx)
    // ========================================
    /// E301: Config file has invalid syntax or values
    ConfigInvalid,
    /// E302: Required config value is missing
    ConfigMissingRequired,

    // ========================================
    // Storage errors (6xx)
    // ========================================
    /// E601: Preference file could not be read or written
    PreferencesUnusable,
    /// E605: Serialization/deserialization failed
    SerializationError,

    // ========================================
    // Internal errors (9xx)
    // ========================================
    /// E906: IO operation failed
    IoError,
}

impl ErrorCode {
    /// Get the numeric error code (e.g., `CatalogUnreachable` -> 101).
    #[must_use]
    pub const fn numeric(&self) -> u16 {
        match self {
            Self::CatalogUnreachable => 101,
            Self::CatalogHttpStatus => 102,
            Self::CatalogTimeout => 103,
            Self::CatalogMalformed => 104,

            Self::LanguageUnsupported => 201,

            Self::ConfigInvalid => 301,
            Self::ConfigMissingRequired => 302,

            Self::PreferencesUnusable => 601,
            Self::SerializationError => 605,

            Self::IoError => 906,
        }
    }

    /// Get the error code as a formatted string (e.g., "E101").
    #[must_use]
    pub fn code_string(&self) -> String {
        format!("E{}", self.numeric())
    }

    /// Get the default suggestion for this error code.
    #[must_use]
    pub const fn suggestion(&self) -> &'static str {
        match self {
            Self::CatalogUnreachable => "Check --data-root or --data-url and make sure the catalog resource exists",
            Self::CatalogHttpStatus => "The catalog server rejected the request. Verify the base URL and path template",
            Self::CatalogTimeout => "The catalog took too long to load. Retry or raise data.timeout_secs",
            Self::CatalogMalformed => "The catalog must be a JSON array of records. Set data.skip_malformed = true to skip bad entries",

            Self::LanguageUnsupported => "Use one of the supported language codes: fr, ar, en",

            Self::ConfigInvalid => "Check TOML syntax and values in the config file",
            Self::ConfigMissingRequired => "Set the required value in indemnity.toml or through an INDEMNITY_* variable",

            Self::PreferencesUnusable => "Fix or delete the preferences file, or point INDEMNITY_PREFERENCES elsewhere",
            Self::SerializationError => "The data format may be corrupted. Check input data for validity",

            Self::IoError => "File operation failed. Check path exists and permissions are correct",
        }
    }

    /// Check if this error is potentially recoverable by the user.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        match self {
            Self::CatalogUnreachable
            | Self::CatalogHttpStatus
            | Self::CatalogTimeout
            | Self::CatalogMalformed
            | Self::LanguageUnsupported
            | Self::ConfigInvalid
            | Self::ConfigMissingRequired
            | Self::PreferencesUnusable
            | Self::IoError => true,

            Self::SerializationError => false,
        }
    }

    /// Get the error category name.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self.numeric() / 100 {
            1 => "catalog",
            2 => "language",
            3 => "config",
            6 => "storage",
            9 => "internal",
            _ => "unknown",
        }
    }

    /// Iterate over all error codes.
    pub fn all() -> impl Iterator<Item = Self> {
        [
            Self::CatalogUnreachable,
            Self::CatalogHttpStatus,
            Self::CatalogTimeout,
            Self::CatalogMalformed,
            Self::LanguageUnsupported,
            Self::ConfigInvalid,
            Self::ConfigMissingRequired,
            Self::PreferencesUnusable,
            Self::SerializationError,
            Self::IoError,
        ]
        .into_iter()
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code_string())
    }
}
