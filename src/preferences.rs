//! Persisted user preferences.
//!
//! Only the interface language survives between runs. It lives in a small
//! TOML file under the user config directory:
//!
//! ```toml
//! language = "ar"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{IndemnityError, Result};
use crate::i18n::Lang;

const PREFERENCES_FILENAME: &str = "preferences.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Lang>,
}

/// On-disk raw form; unknown language codes are tolerated on read.
#[derive(Debug, Default, Deserialize)]
struct RawPreferences {
    language: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `INDEMNITY_PREFERENCES`, else `<config dir>/indemnity/preferences.toml`.
    pub fn open_default() -> Result<Self> {
        if let Ok(path) = std::env::var("INDEMNITY_PREFERENCES") {
            return Ok(Self::new(path));
        }
        let config_dir = dirs::config_dir()
            .ok_or_else(|| IndemnityError::MissingConfig("INDEMNITY_PREFERENCES".to_string()))?;
        Ok(Self::new(config_dir.join("indemnity").join(PREFERENCES_FILENAME)))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored preferences; a missing file yields defaults.
    pub fn load(&self) -> Result<Preferences> {
        if !self.path.exists() {
            return Ok(Preferences::default());
        }

        let raw = fs::read_to_string(&self.path).map_err(|e| {
            IndemnityError::Preferences(format!("read {}: {e}", self.path.display()))
        })?;
        let raw: RawPreferences = toml::from_str(&raw).map_err(|e| {
            IndemnityError::Preferences(format!("parse {}: {e}", self.path.display()))
        })?;

        let language = raw.language.and_then(|code| {
            let lang = Lang::from_code(&code);
            if lang.is_none() {
                warn!(%code, path = %self.path.display(), "ignoring unsupported saved language");
            }
            lang
        });

        Ok(Preferences { language })
    }

    /// The saved language, if any.
    pub fn language(&self) -> Result<Option<Lang>> {
        Ok(self.load()?.language)
    }

    pub fn save(&self, preferences: &Preferences) -> Result<()> {
        let text = toml::to_string(preferences)
            .map_err(|e| IndemnityError::Preferences(format!("serialize preferences: {e}")))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                IndemnityError::Preferences(format!("create {}: {e}", parent.display()))
            })?;
        }

        // write then rename so a crash never leaves a truncated file
        let temp_path = self.path.with_extension("toml.tmp");
        fs::write(&temp_path, text).map_err(|e| {
            IndemnityError::Preferences(format!("write {}: {e}", temp_path.display()))
        })?;
        fs::rename(&temp_path, &self.path).map_err(|e| {
            IndemnityError::Preferences(format!("save {}: {e}", self.path.display()))
        })?;

        debug!(path = %self.path.display(), "preferences saved");
        Ok(())
    }

    /// Persist `lang` as the interface language.
    pub fn set_language(&self, lang: Lang) -> Result<()> {
        let mut preferences = self.load().unwrap_or_default();
        preferences.language = Some(lang);
        self.save(&preferences)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store(temp: &TempDir) -> PreferenceStore {
        PreferenceStore::new(temp.path().join("nested/indemnity/preferences.toml"))
    }

    #[test]
    fn missing_file_is_default() {
        let temp = TempDir::new().unwrap();
        assert_eq!(store(&temp).load().unwrap(), Preferences::default());
        assert_eq!(store(&temp).language().unwrap(), None);
    }

    #[test]
    fn set_language_persists() {
        let temp = TempDir::new().unwrap();
        let store = store(&temp);
        store.set_language(Lang::Ar).unwrap();

        assert_eq!(store.language().unwrap(), Some(Lang::Ar));
        let raw = fs::read_to_string(store.path()).unwrap();
        assert_eq!(raw.trim(), "language = \"ar\"");
        assert!(!store.path().with_extension("toml.tmp").exists());
    }

    #[test]
    fn overwrites_previous_language() {
        let temp = TempDir::new().unwrap();
        let store = store(&temp);
        store.set_language(Lang::En).unwrap();
        store.set_language(Lang::Fr).unwrap();
        assert_eq!(store.language().unwrap(), Some(Lang::Fr));
    }

    #[test]
    fn unsupported_saved_language_is_ignored() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("preferences.toml");
        fs::write(&path, "language = \"de\"\n").unwrap();
        assert_eq!(PreferenceStore::new(&path).language().unwrap(), None);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("preferences.toml");
        fs::write(&path, "language = [[[").unwrap();
        let err = PreferenceStore::new(&path).load().unwrap_err();
        assert!(matches!(err, IndemnityError::Preferences(_)));
    }

    #[test]
    fn set_language_recovers_from_corrupt_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("preferences.toml");
        fs::write(&path, "not toml {").unwrap();
        let store = PreferenceStore::new(&path);
        store.set_language(Lang::En).unwrap();
        assert_eq!(store.language().unwrap(), Some(Lang::En));
    }
}
