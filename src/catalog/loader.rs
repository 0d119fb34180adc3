//! Asynchronous catalog loading.
//!
//! A load fetches the whole document for one language, parses it, and only
//! then hands back a [`Catalog`]. Any failure yields a [`LoadError`]; no
//! partially parsed catalog ever escapes.

use std::time::Duration;

use crate::config::DataConfig;
use crate::core::Record;
use crate::error::{IndemnityError, LoadError, LoadErrorKind, Result};
use crate::i18n::Lang;

use super::Catalog;
use super::source::{CatalogSource, DEFAULT_PATH_TEMPLATE};

const USER_AGENT: &str = concat!("indemnity/", env!("CARGO_PKG_VERSION"));

/// Knobs for [`CatalogLoader`].
#[derive(Debug, Clone)]
pub struct LoaderOptions {
    pub path_template: String,
    pub timeout: Duration,
    pub skip_malformed: bool,
    pub fallback: Lang,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            path_template: DEFAULT_PATH_TEMPLATE.to_string(),
            timeout: Duration::from_secs(10),
            skip_malformed: false,
            fallback: Lang::Fr,
        }
    }
}

pub struct CatalogLoader {
    source: CatalogSource,
    options: LoaderOptions,
    client: reqwest::Client,
}

impl std::fmt::Debug for CatalogLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogLoader")
            .field("source", &self.source)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl CatalogLoader {
    pub fn new(source: CatalogSource, options: LoaderOptions) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(options.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|err| IndemnityError::Config(format!("catalog http client: {err}")))?;

        Ok(Self {
            source,
            options,
            client,
        })
    }

    /// Build a loader from the `[data]` config section.
    pub fn from_config(data: &DataConfig, fallback: Lang) -> Result<Self> {
        let options = LoaderOptions {
            path_template: data.path_template.clone(),
            timeout: Duration::from_secs(data.timeout_secs),
            skip_malformed: data.skip_malformed,
            fallback,
        };
        Self::new(data.source(), options)
    }

    #[must_use]
    pub const fn source(&self) -> &CatalogSource {
        &self.source
    }

    #[must_use]
    pub const fn options(&self) -> &LoaderOptions {
        &self.options
    }

    /// Location the catalog for `lang` is fetched from.
    #[must_use]
    pub fn location(&self, lang: Lang) -> String {
        self.source.locate(&self.options.path_template, lang)
    }

    /// Fetch and parse the catalog for `lang`.
    pub async fn load(&self, lang: Lang) -> std::result::Result<Catalog, LoadError> {
        let location = self.location(lang);
        tracing::debug!(%lang, %location, remote = self.source.is_remote(), "loading catalog");

        let bytes = match tokio::time::timeout(self.options.timeout, self.fetch(lang, &location)).await
        {
            Ok(result) => result?,
            Err(_) => {
                return Err(LoadError::new(
                    lang.code(),
                    LoadErrorKind::Timeout,
                    format!(
                        "no response from {location} within {:?}",
                        self.options.timeout
                    ),
                ));
            }
        };

        let catalog = parse_catalog(lang, self.options.fallback, &bytes, self.options.skip_malformed)?;
        tracing::info!(%lang, records = catalog.len(), %location, "catalog loaded");
        Ok(catalog)
    }

    async fn fetch(&self, lang: Lang, location: &str) -> std::result::Result<Vec<u8>, LoadError> {
        match &self.source {
            CatalogSource::Directory(_) => tokio::fs::read(location)
                .await
                .map_err(|err| LoadError::unreachable(lang.code(), format!("read {location}: {err}"))),
            CatalogSource::Http(_) => self.fetch_http(lang, location).await,
        }
    }

    async fn fetch_http(&self, lang: Lang, url: &str) -> std::result::Result<Vec<u8>, LoadError> {
        let response = self.client.get(url).send().await.map_err(|err| {
            let kind = if err.is_timeout() {
                LoadErrorKind::Timeout
            } else {
                LoadErrorKind::Unreachable
            };
            LoadError::new(lang.code(), kind, format!("GET {url}: {err}"))
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::new(
                lang.code(),
                LoadErrorKind::HttpStatus,
                format!("GET {url}: HTTP {status}"),
            ));
        }

        response
            .bytes()
            .await
            .map(|body| body.to_vec())
            .map_err(|err| LoadError::unreachable(lang.code(), format!("read body of {url}: {err}")))
    }
}

/// Parse a catalog document: a JSON array of records.
///
/// With `skip_malformed` unset, one bad record rejects the whole document;
/// with it set, bad records are logged and dropped.
pub fn parse_catalog(
    lang: Lang,
    fallback: Lang,
    bytes: &[u8],
    skip_malformed: bool,
) -> std::result::Result<Catalog, LoadError> {
    let entries: Vec<serde_json::Value> = serde_json::from_slice(bytes).map_err(|err| {
        LoadError::malformed(lang.code(), format!("expected a JSON array of records: {err}"))
    })?;

    let mut records = Vec::with_capacity(entries.len());
    let mut skipped = 0usize;
    for (index, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<Record>(entry) {
            Ok(record) => records.push(record),
            Err(err) if skip_malformed => {
                skipped += 1;
                tracing::warn!(%lang, index, error = %err, "skipping malformed record");
            }
            Err(err) => {
                return Err(LoadError::malformed(
                    lang.code(),
                    format!("record {index}: {err}"),
                ));
            }
        }
    }

    if skipped > 0 {
        tracing::warn!(%lang, skipped, kept = records.len(), "catalog loaded with skipped records");
    }

    Ok(Catalog::new(lang, fallback, records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::{SAMPLE_FR_JSON, UnitTestFixture};

    const ONE_BAD: &str = r#"[
        {"name": "Prime de panier", "definition": "Repas", "reason": "Décret 96-208",
         "cotisable": "Oui", "imposable": "Oui"},
        {"name": "Sans définition", "reason": "?", "cotisable": "Oui", "imposable": "Oui"}
    ]"#;

    fn loader_for(fixture: &UnitTestFixture, skip_malformed: bool) -> CatalogLoader {
        CatalogLoader::new(
            CatalogSource::Directory(fixture.data_path.clone()),
            LoaderOptions {
                skip_malformed,
                ..LoaderOptions::default()
            },
        )
        .unwrap()
    }

    #[test]
    fn parse_rejects_non_array() {
        let err = parse_catalog(Lang::Fr, Lang::Fr, br#"{"name": "x"}"#, false).unwrap_err();
        assert_eq!(err.kind, LoadErrorKind::Malformed);
        assert_eq!(err.lang, "fr");
    }

    #[test]
    fn parse_strict_rejects_whole_document() {
        let err = parse_catalog(Lang::Fr, Lang::Fr, ONE_BAD.as_bytes(), false).unwrap_err();
        assert_eq!(err.kind, LoadErrorKind::Malformed);
        assert!(err.cause.starts_with("record 1:"), "{}", err.cause);
    }

    #[test]
    fn parse_lenient_skips_bad_records() {
        let catalog = parse_catalog(Lang::Fr, Lang::Fr, ONE_BAD.as_bytes(), true).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn parse_empty_array_is_valid() {
        let catalog = parse_catalog(Lang::Ar, Lang::Fr, b"[]", false).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.lang(), Lang::Ar);
    }

    #[tokio::test]
    async fn loads_from_directory() {
        let fixture = UnitTestFixture::new();
        fixture.create_file("data/fr.json", SAMPLE_FR_JSON);

        let catalog = loader_for(&fixture, false).load(Lang::Fr).await.unwrap();
        assert!(!catalog.is_empty());
        assert_eq!(catalog.lang(), Lang::Fr);
    }

    #[tokio::test]
    async fn missing_file_is_unreachable() {
        let fixture = UnitTestFixture::new();
        let err = loader_for(&fixture, false).load(Lang::En).await.unwrap_err();
        assert_eq!(err.kind, LoadErrorKind::Unreachable);
        assert!(err.cause.contains("en.json"));
    }

    #[tokio::test]
    async fn malformed_file_is_reported() {
        let fixture = UnitTestFixture::new();
        fixture.create_file("data/fr.json", "[{\"name\": ");
        let err = loader_for(&fixture, true).load(Lang::Fr).await.unwrap_err();
        assert_eq!(err.kind, LoadErrorKind::Malformed);
    }

    #[test]
    fn from_config_uses_template() {
        let data = DataConfig {
            root: std::path::PathBuf::from("/srv"),
            path_template: "catalogs/{lang}.json".to_string(),
            ..DataConfig::default()
        };
        let loader = CatalogLoader::from_config(&data, Lang::Fr).unwrap();
        assert_eq!(loader.location(Lang::Ar), "/srv/catalogs/ar.json");
    }

    #[test]
    fn from_config_keeps_timeout_and_http_source() {
        let data = DataConfig {
            base_url: Some("http://localhost:9000/".to_string()),
            timeout_secs: 3,
            ..DataConfig::default()
        };
        let loader = CatalogLoader::from_config(&data, Lang::Ar).unwrap();
        assert!(loader.source().is_remote());
        assert_eq!(loader.options().timeout, Duration::from_secs(3));
        assert_eq!(loader.options().fallback, Lang::Ar);
        assert_eq!(loader.location(Lang::En), "http://localhost:9000/data/en.json");
    }
}
