use fxrates_rs::FxError;
use fxrates_rs::rates::LatestBuilder;
use httpmock::Method::GET;
use httpmock::MockServer;

use crate::common;

#[tokio::test]
async fn status_429_maps_to_rate_limited_regardless_of_body() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/latest");
        // A provider-style body must not override the quota classification.
        then.status(429)
            .header("content-type", "application/json")
            .body(r#"{"code": 104, "info": "usage limit reached"}"#);
    });

    let client = common::test_client(&server);
    let err = LatestBuilder::new(&client).fetch().await.unwrap_err();

    mock.assert();
    match err {
        FxError::RateLimited { url } => assert!(url.contains("/api/latest")),
        other => panic!("expected RateLimited, got {other:?}"),
    }
}

#[tokio::test]
async fn status_401_without_provider_body_maps_to_unauthorized() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/latest");
        then.status(401)
            .header("content-type", "text/plain")
            .body("denied");
    });

    let client = common::test_client(&server);
    let err = LatestBuilder::new(&client).fetch().await.unwrap_err();

    mock.assert();
    match err {
        FxError::Unauthorized { url } => assert!(url.contains("/api/latest")),
        other => panic!("expected Unauthorized, got {other:?}"),
    }
}

#[tokio::test]
async fn status_401_with_provider_body_maps_to_provider_error() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/latest");
        then.status(401)
            .header("content-type", "application/json")
            .body(r#"{"code": 101, "info": "No API Key was specified."}"#);
    });

    let client = common::test_client(&server);
    let err = LatestBuilder::new(&client).fetch().await.unwrap_err();

    mock.assert();
    match err {
        FxError::Provider { code, info } => {
            assert_eq!(code, 101);
            assert_eq!(info, "No API Key was specified.");
        }
        other => panic!("expected Provider, got {other:?}"),
    }
}

#[tokio::test]
async fn other_statuses_map_to_status() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/latest");
        then.status(503).body("upstream down");
    });

    let client = common::test_client(&server);
    let err = LatestBuilder::new(&client).fetch().await.unwrap_err();

    mock.assert();
    match err {
        FxError::Status { status, url } => {
            assert_eq!(status, 503);
            assert!(url.contains("/api/latest"));
        }
        other => panic!("expected Status, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_success_body_maps_to_no_data() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/latest");
        then.status(200);
    });

    let client = common::test_client(&server);
    let err = LatestBuilder::new(&client).fetch().await.unwrap_err();

    mock.assert();
    assert!(matches!(err, FxError::NoData), "got {err:?}");
}

#[tokio::test]
async fn malformed_success_body_maps_to_decode() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/latest");
        then.status(200)
            .header("content-type", "application/json")
            .body("{not json");
    });

    let client = common::test_client(&server);
    let err = LatestBuilder::new(&client).fetch().await.unwrap_err();

    mock.assert();
    assert!(matches!(err, FxError::Decode(_)), "got {err:?}");
}
