//! Where catalog documents come from.

use std::fmt;
use std::path::PathBuf;

use crate::i18n::Lang;

/// Placeholder replaced by the language code in a path template.
pub const LANG_PLACEHOLDER: &str = "{lang}";

/// Default location of a catalog relative to its source.
pub const DEFAULT_PATH_TEMPLATE: &str = "data/{lang}.json";

/// Static resource holding one JSON catalog per language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// Files under a local directory.
    Directory(PathBuf),
    /// Documents served under an HTTP(S) base URL.
    Http(String),
}

impl CatalogSource {
    /// Resolve the location of the catalog for `lang`.
    #[must_use]
    pub fn locate(&self, template: &str, lang: Lang) -> String {
        let relative = template.replace(LANG_PLACEHOLDER, lang.code());
        match self {
            Self::Directory(root) => root.join(relative).display().to_string(),
            Self::Http(base) => format!(
                "{}/{}",
                base.trim_end_matches('/'),
                relative.trim_start_matches('/')
            ),
        }
    }

    #[must_use]
    pub const fn is_remote(&self) -> bool {
        matches!(self, Self::Http(_))
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directory(root) => write!(f, "{}", root.display()),
            Self::Http(base) => f.write_str(base),
        }
    }
}
