use fxrates_rs::{ConversionRequest, FxSession, SessionPhase};
use httpmock::Method::GET;
use httpmock::MockServer;

use crate::common;

/// Seeds a session whose table holds `{USD: 1.0, VND: 25000.0, EUR: 0.92}`.
async fn ready_session(server: &MockServer) -> FxSession {
    server.mock(|when, then| {
        when.method(GET).path("/api/latest");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::LATEST_BODY);
    });
    let mut session = FxSession::new(common::test_client(server));
    session.refresh_rates().await.unwrap();
    assert_eq!(session.phase(), SessionPhase::Ready);
    session
}

#[tokio::test]
async fn cached_pair_converts_locally_without_network() {
    let server = MockServer::start();
    let mut session = ready_session(&server).await;

    let convert_mock = server.mock(|when, then| {
        when.method(GET).path("/api/convert");
        then.status(200).body("{}");
    });

    let req = ConversionRequest::new(10.0, "USD", "VND").unwrap();
    let result = session.convert(req).await.unwrap();

    assert_eq!(result, 250_000.0);
    assert_eq!(session.result(), Some(250_000.0));
    assert_eq!(session.error(), None);
    assert_eq!(convert_mock.hits(), 0, "local hit must not call /convert");
}

#[tokio::test]
async fn local_round_trip_returns_the_original_amount() {
    let server = MockServer::start();
    let mut session = ready_session(&server).await;

    let there = session
        .convert(ConversionRequest::new(42.5, "EUR", "VND").unwrap())
        .await
        .unwrap();
    let back = session
        .convert(ConversionRequest::new(there, "VND", "EUR").unwrap())
        .await
        .unwrap();

    assert!((back - 42.5).abs() < 1e-9, "round trip drifted: {back}");
}

#[tokio::test]
async fn local_success_clears_a_prior_error() {
    let server = MockServer::start();
    let mut session = ready_session(&server).await;

    // Force a failed remote attempt first.
    let fail_mock = server.mock(|when, then| {
        when.method(GET).path("/api/convert");
        then.status(503).body("down");
    });
    session
        .convert(ConversionRequest::new(1.0, "USD", "GBP").unwrap())
        .await
        .unwrap_err();
    assert!(session.error().is_some());
    fail_mock.assert();

    session
        .convert(ConversionRequest::new(1.0, "USD", "EUR").unwrap())
        .await
        .unwrap();
    assert_eq!(session.error(), None);
    assert_eq!(session.result(), Some(0.92));
}
