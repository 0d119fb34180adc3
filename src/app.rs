//! Application context shared by every command.

use crate::catalog::CatalogLoader;
use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::document::ReferenceDocument;
use crate::error::{IndemnityError, Result};
use crate::i18n::Lang;
use crate::preferences::PreferenceStore;
use crate::session::Session;

/// Where the effective language came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LangSource {
    Flag,
    Preference,
    Config,
}

impl LangSource {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Flag => "flag",
            Self::Preference => "preference",
            Self::Config => "config",
        }
    }
}

pub struct AppContext {
    pub config: Config,
    pub output_format: OutputFormat,
    pub lang: Lang,
    pub lang_source: LangSource,
    pub preferences: PreferenceStore,
    pub document: ReferenceDocument,
    pub session: Session,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let mut config = Config::load(cli.config.as_deref(), &cwd)?;
        apply_cli_overrides(&mut config, cli);

        let preferences = PreferenceStore::open_default()?;
        let (lang, lang_source) = effective_language(cli.lang.as_deref(), &preferences, &config)?;

        let output_format = cli.output_format(&config.output.format);
        let loader = CatalogLoader::from_config(&config.data, config.i18n.fallback_language)?;
        let session = Session::new(loader);
        let document = ReferenceDocument::new(config.document.path.clone());

        tracing::debug!(
            %lang,
            source = lang_source.as_str(),
            catalogs = %session.loader().source(),
            "context ready"
        );

        Ok(Self {
            output_format,
            lang,
            lang_source,
            preferences,
            document,
            session,
            config,
        })
    }

    #[must_use]
    pub fn fallback(&self) -> Lang {
        self.config.i18n.fallback_language
    }
}

fn apply_cli_overrides(config: &mut Config, cli: &Cli) {
    if let Some(root) = &cli.data_root {
        config.data.root = root.clone();
        config.data.base_url = None;
    }
    if let Some(url) = &cli.data_url {
        config.data.base_url = Some(url.clone());
    }
}

/// `--lang` flag, else the saved preference, else `i18n.default_language`.
fn effective_language(
    flag: Option<&str>,
    preferences: &PreferenceStore,
    config: &Config,
) -> Result<(Lang, LangSource)> {
    if let Some(code) = flag {
        let lang = code.parse::<Lang>()?;
        return Ok((lang, LangSource::Flag));
    }

    match preferences.language() {
        Ok(Some(lang)) => return Ok((lang, LangSource::Preference)),
        Ok(None) => {}
        Err(IndemnityError::Preferences(reason)) => {
            tracing::warn!(%reason, "ignoring unreadable preferences");
        }
        Err(err) => return Err(err),
    }

    Ok((config.i18n.default_language, LangSource::Config))
}
