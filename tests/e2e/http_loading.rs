//! Catalog loads over HTTP: success and each failure kind.

use std::time::Duration;

use indemnity::error::LoadErrorKind;
use indemnity::i18n::Lang;
use indemnity::search::SearchOutcome;
use indemnity::session::CatalogState;
use indemnity::test_utils::logging::TestLogger;

use super::fixture::CatalogServer;

const TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::test]
async fn test_http_load_makes_catalog_resident() {
    let log = TestLogger::new("test_http_load_makes_catalog_resident");
    let server = CatalogServer::start().await;
    let mock = server.serve(Lang::Fr, None).await;
    let session = server.session(TIMEOUT);

    let catalog = session.load(Lang::Fr).await.unwrap();
    log.log_actual(&catalog.len());

    mock.assert_async().await;
    assert_eq!(catalog.len(), 5);
    assert_eq!(session.active_language(), Some(Lang::Fr));
    assert_eq!(session.search("prime").len(), 2);
    assert_eq!(session.search("").len(), 5);
    log.pass();
}

#[tokio::test]
async fn test_http_error_status_leaves_no_catalog() {
    let log = TestLogger::new("test_http_error_status_leaves_no_catalog");
    let server = CatalogServer::start().await;
    server.serve_body(Lang::Fr, 404, "not found", None).await;
    let session = server.session(TIMEOUT);

    let err = session.load(Lang::Fr).await.unwrap_err();
    log.log_actual(&err);

    assert_eq!(err.kind, LoadErrorKind::HttpStatus);
    assert_eq!(err.lang, "fr");
    assert!(err.cause.contains("404"));
    assert!(matches!(
        session.snapshot(),
        CatalogState::Unavailable { lang: Lang::Fr, .. }
    ));
    assert!(session.search("prime").is_empty());
    assert_eq!(
        session.search_outcome(""),
        SearchOutcome::EmptyQuery {
            records: Vec::new()
        }
    );
    log.pass();
}

#[tokio::test]
async fn test_malformed_body_rejected() {
    let log = TestLogger::new("test_malformed_body_rejected");
    let server = CatalogServer::start().await;
    server
        .serve_body(Lang::Fr, 200, r#"{"name": "not an array"}"#, None)
        .await;
    let session = server.session(TIMEOUT);

    let err = session.load(Lang::Fr).await.unwrap_err();
    log.log_actual(&err);

    assert_eq!(err.kind, LoadErrorKind::Malformed);
    assert!(session.catalog().is_none());
    log.pass();
}

#[tokio::test]
async fn test_slow_server_times_out() {
    let log = TestLogger::new("test_slow_server_times_out");
    let server = CatalogServer::start().await;
    server.serve(Lang::Ar, Some(Duration::from_secs(3))).await;
    let session = server.session(Duration::from_millis(200));
    log.log_input("timeout", &Duration::from_millis(200));

    let err = session.load(Lang::Ar).await.unwrap_err();
    log.log_actual(&err);

    assert_eq!(err.kind, LoadErrorKind::Timeout);
    assert_eq!(session.snapshot().lang(), Some(Lang::Ar));
    log.pass();
}
