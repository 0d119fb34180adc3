//! Catalog server fixture: an httpmock server plus a session reading from it.

use std::time::Duration;

use httpmock::Method::GET;
use httpmock::{Mock, MockServer};

use indemnity::catalog::{CatalogLoader, CatalogSource, LoaderOptions};
use indemnity::i18n::Lang;
use indemnity::session::Session;
use indemnity::test_utils::fixtures::sample_json;

pub struct CatalogServer {
    pub server: MockServer,
}

impl CatalogServer {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start_async().await,
        }
    }

    /// Serve the sample catalog for `lang`, optionally after `delay`.
    pub async fn serve(&self, lang: Lang, delay: Option<Duration>) -> Mock<'_> {
        self.serve_body(lang, 200, sample_json(lang), delay).await
    }

    pub async fn serve_body(
        &self,
        lang: Lang,
        status: u16,
        body: &str,
        delay: Option<Duration>,
    ) -> Mock<'_> {
        let path = format!("/data/{}.json", lang.code());
        let body = body.to_string();
        self.server
            .mock_async(move |when, then| {
                when.method(GET).path(path);
                let then = then
                    .status(status)
                    .header("content-type", "application/json")
                    .body(body);
                if let Some(delay) = delay {
                    then.delay(delay);
                }
            })
            .await
    }

    pub fn session(&self, timeout: Duration) -> Session {
        let options = LoaderOptions {
            timeout,
            ..LoaderOptions::default()
        };
        let loader =
            CatalogLoader::new(CatalogSource::Http(self.server.base_url()), options).unwrap();
        Session::new(loader)
    }
}
