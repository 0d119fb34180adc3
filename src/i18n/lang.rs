//! Interface languages and their text direction.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::IndemnityError;

/// Languages the interface ships strings and catalogs for.
///
/// Each variant maps to an ISO 639-1 two-letter code, which is also the
/// key used inside localized record fields and the catalog file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    Fr,
    Ar,
    En,
}

/// Layout direction of a language's script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Lang {
    /// ISO 639-1 two-letter code for this language.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Fr => "fr",
            Self::Ar => "ar",
            Self::En => "en",
        }
    }

    /// Parse an ISO 639-1 code into a supported language.
    ///
    /// Accepts any case and surrounding whitespace; returns `None` for
    /// unsupported codes.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "fr" => Some(Self::Fr),
            "ar" => Some(Self::Ar),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    /// All supported languages, in the order the language switcher shows them.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Fr, Self::Ar, Self::En]
    }

    /// Native name, as shown on the language switcher.
    #[must_use]
    pub const fn native_name(&self) -> &'static str {
        match self {
            Self::Fr => "Français",
            Self::Ar => "العربية",
            Self::En => "English",
        }
    }

    #[must_use]
    pub const fn direction(&self) -> Direction {
        match self {
            Self::Ar => Direction::Rtl,
            Self::Fr | Self::En => Direction::Ltr,
        }
    }

    #[must_use]
    pub const fn is_rtl(&self) -> bool {
        matches!(self.direction(), Direction::Rtl)
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Lang {
    type Err = IndemnityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| IndemnityError::UnsupportedLanguage(s.trim().to_string()))
    }
}

impl Direction {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }

    /// Wrap `text` in a directional isolate so terminals that implement the
    /// Unicode bidi algorithm lay it out in this direction.
    ///
    /// Left-to-right text is returned unchanged.
    #[must_use]
    pub fn isolate(&self, text: &str) -> String {
        match self {
            // RIGHT-TO-LEFT ISOLATE ... POP DIRECTIONAL ISOLATE
            Self::Rtl => format!("\u{2067}{text}\u{2069}"),
            Self::Ltr => text.to_string(),
        }
    }
}
