//! Switching languages against a live catalog server.

use std::time::Duration;

use indemnity::core::{Field, FieldValue, Liability};
use indemnity::i18n::Lang;
use indemnity::test_utils::logging::TestLogger;

use super::fixture::CatalogServer;

const TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::test]
async fn test_switch_replaces_catalog() {
    let log = TestLogger::new("test_switch_replaces_catalog");
    let server = CatalogServer::start().await;
    server.serve(Lang::Fr, None).await;
    server.serve(Lang::Ar, None).await;
    let session = server.session(TIMEOUT);

    session.load(Lang::Fr).await.unwrap();
    assert_eq!(session.search("licenciement").len(), 1);

    session.load(Lang::Ar).await.unwrap();
    log.log_actual(&session.active_language());

    assert_eq!(session.active_language(), Some(Lang::Ar));
    assert!(session.search("licenciement").is_empty());
    let hits = session.search("التسريح");
    assert_eq!(hits.len(), 1);
    assert_eq!(
        session.resolve(&hits[0], Field::Name),
        FieldValue::Text("تعويض التسريح".to_string())
    );
    assert_eq!(hits[0].cotisable, Liability::No);
    log.pass();
}

#[tokio::test]
async fn test_failed_switch_drops_previous_catalog() {
    let log = TestLogger::new("test_failed_switch_drops_previous_catalog");
    let server = CatalogServer::start().await;
    server.serve(Lang::Fr, None).await;
    server.serve_body(Lang::En, 500, "boom", None).await;
    let session = server.session(TIMEOUT);

    session.load(Lang::Fr).await.unwrap();
    let err = session.load(Lang::En).await.unwrap_err();
    log.log_actual(&err);

    assert!(session.catalog().is_none());
    assert_eq!(session.snapshot().lang(), Some(Lang::En));
    assert!(session.search("prime").is_empty());
    log.pass();
}

#[tokio::test]
async fn test_last_completed_load_wins() {
    let log = TestLogger::new("test_last_completed_load_wins");
    let server = CatalogServer::start().await;
    server.serve(Lang::Fr, Some(Duration::from_millis(600))).await;
    server.serve(Lang::En, None).await;
    let session = server.session(TIMEOUT);

    // French is requested first but finishes last
    let (fr, en) = tokio::join!(session.load(Lang::Fr), session.load(Lang::En));
    assert!(fr.is_ok());
    assert!(en.is_ok());
    log.log_actual(&session.active_language());

    assert_eq!(session.active_language(), Some(Lang::Fr));
    assert_eq!(session.search("").len(), 5);
    log.pass();
}
