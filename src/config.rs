use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogSource;
use crate::catalog::source::{DEFAULT_PATH_TEMPLATE, LANG_PLACEHOLDER};
use crate::error::{IndemnityError, Result};
use crate::i18n::Lang;

/// File name of the project-level config, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "indemnity.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub i18n: I18nConfig,
    #[serde(default)]
    pub document: DocumentConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    pub fn load(explicit_path: Option<&Path>, project_root: &Path) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("INDEMNITY_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch);
            }
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(project) = Self::load_project(project_root)? {
                config.merge_patch(project);
            }
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Reject values no catalog load can honour.
    pub fn validate(&self) -> Result<()> {
        if self.data.timeout_secs == 0 {
            return Err(IndemnityError::Config(
                "data.timeout_secs must be at least 1".to_string(),
            ));
        }
        if !self.data.path_template.contains(LANG_PLACEHOLDER) {
            return Err(IndemnityError::Config(format!(
                "data.path_template must contain {LANG_PLACEHOLDER}, got {:?}",
                self.data.path_template
            )));
        }
        Ok(())
    }

    /// Path of the per-user config file, if the platform has a config dir.
    #[must_use]
    pub fn global_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("indemnity/config.toml"))
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        match Self::global_path() {
            Some(path) => Self::load_patch(&path),
            None => Ok(None),
        }
    }

    fn load_project(project_root: &Path) -> Result<Option<ConfigPatch>> {
        Self::load_patch(&project_root.join(PROJECT_CONFIG_FILE))
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| IndemnityError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| IndemnityError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.data {
            self.data.merge(patch);
        }
        if let Some(patch) = patch.i18n {
            self.i18n.merge(patch);
        }
        if let Some(patch) = patch.document {
            self.document.merge(patch);
        }
        if let Some(patch) = patch.output {
            self.output.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(value) = env_string("INDEMNITY_DATA_ROOT") {
            self.data.root = PathBuf::from(value);
        }
        if let Some(value) = env_string("INDEMNITY_DATA_URL") {
            self.data.base_url = Some(value);
        }
        if let Some(value) = env_string("INDEMNITY_DATA_PATH_TEMPLATE") {
            self.data.path_template = value;
        }
        if let Some(value) = env_u64("INDEMNITY_DATA_TIMEOUT_SECS")? {
            self.data.timeout_secs = value;
        }
        if let Some(value) = env_bool("INDEMNITY_DATA_SKIP_MALFORMED") {
            self.data.skip_malformed = value;
        }

        if let Some(value) = env_lang("INDEMNITY_LANG")? {
            self.i18n.default_language = value;
        }
        if let Some(value) = env_lang("INDEMNITY_FALLBACK_LANG")? {
            self.i18n.fallback_language = value;
        }

        if let Some(value) = env_string("INDEMNITY_DOCUMENT_PATH") {
            self.document.path = value;
        }

        if let Some(value) = env_string("INDEMNITY_OUTPUT_FORMAT") {
            self.output.format = value;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Directory the path template is resolved against.
    #[serde(default)]
    pub root: PathBuf,
    /// When set, catalogs are fetched over HTTP from this base URL instead.
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub path_template: String,
    #[serde(default)]
    pub timeout_secs: u64,
    #[serde(default)]
    pub skip_malformed: bool,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            base_url: None,
            path_template: DEFAULT_PATH_TEMPLATE.to_string(),
            timeout_secs: 10,
            skip_malformed: false,
        }
    }
}

impl DataConfig {
    /// The configured catalog source: HTTP when a base URL is set,
    /// otherwise the root directory.
    #[must_use]
    pub fn source(&self) -> CatalogSource {
        match &self.base_url {
            Some(url) if !url.trim().is_empty() => CatalogSource::Http(url.trim().to_string()),
            _ => CatalogSource::Directory(self.root.clone()),
        }
    }

    fn merge(&mut self, patch: DataPatch) {
        if let Some(value) = patch.root {
            self.root = value;
        }
        if let Some(value) = patch.base_url {
            self.base_url = Some(value);
        }
        if let Some(value) = patch.path_template {
            self.path_template = value;
        }
        if let Some(value) = patch.timeout_secs {
            self.timeout_secs = value;
        }
        if let Some(value) = patch.skip_malformed {
            self.skip_malformed = value;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct I18nConfig {
    /// Language used when no preference has been saved.
    #[serde(default)]
    pub default_language: Lang,
    /// Language record fields fall back to when the active one is missing.
    #[serde(default)]
    pub fallback_language: Lang,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_language: Lang::Fr,
            fallback_language: Lang::Fr,
        }
    }
}

impl I18nConfig {
    fn merge(&mut self, patch: I18nPatch) {
        if let Some(value) = patch.default_language {
            self.default_language = value;
        }
        if let Some(value) = patch.fallback_language {
            self.fallback_language = value;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentConfig {
    /// Path or URL of the reference document (the labor code PDF).
    #[serde(default)]
    pub path: String,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            path: "assets/code-travail.pdf".to_string(),
        }
    }
}

impl DocumentConfig {
    fn merge(&mut self, patch: DocumentPatch) {
        if let Some(value) = patch.path {
            self.path = value;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "human".to_string(),
        }
    }
}

impl OutputConfig {
    fn merge(&mut self, patch: OutputPatch) {
        if let Some(value) = patch.format {
            self.format = value;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub data: Option<DataPatch>,
    pub i18n: Option<I18nPatch>,
    pub document: Option<DocumentPatch>,
    pub output: Option<OutputPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct DataPatch {
    pub root: Option<PathBuf>,
    pub base_url: Option<String>,
    pub path_template: Option<String>,
    pub timeout_secs: Option<u64>,
    pub skip_malformed: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct I18nPatch {
    pub default_language: Option<Lang>,
    pub fallback_language: Option<Lang>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct DocumentPatch {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct OutputPatch {
    pub format: Option<String>,
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key).ok().map(|value| parse_bool(&value))
}

fn env_u64(key: &str) -> Result<Option<u64>> {
    match std::env::var(key) {
        Ok(value) => value.parse::<u64>().map(Some).map_err(|err| {
            IndemnityError::Config(format!("invalid {key} value {value}: {err}"))
        }),
        Err(_) => Ok(None),
    }
}

fn env_lang(key: &str) -> Result<Option<Lang>> {
    match std::env::var(key) {
        Ok(value) => parse_lang(key, &value).map(Some),
        Err(_) => Ok(None),
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

fn parse_lang(key: &str, value: &str) -> Result<Lang> {
    Lang::from_code(value).ok_or_else(|| {
        IndemnityError::Config(format!("invalid {key} value {value} (expected fr|ar|en)"))
    })
}
