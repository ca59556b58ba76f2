use std::sync::Arc;

use jiff::{civil::date, tz::TimeZone, Zoned};
use standby_core::{
    CredentialStore, FixedClock, HttpStatusClient, StaticCredentials, StatusSync, StatusUpdate,
    SyncError,
};

mod common;

use common::{unreachable_base_url, StubServer};

fn window() -> (Zoned, Zoned) {
    let start = date(2024, 6, 14)
        .at(13, 0, 0, 0)
        .to_zoned(TimeZone::UTC)
        .unwrap();
    let end = date(2024, 6, 14)
        .at(14, 30, 0, 0)
        .to_zoned(TimeZone::UTC)
        .unwrap();
    (start, end)
}

fn client_for(base_url: &str, credentials: Arc<StaticCredentials>) -> HttpStatusClient {
    HttpStatusClient::builder()
        .with_base_url(base_url)
        .with_credentials(credentials)
        .build()
        .expect("Failed to build client")
}

#[tokio::test]
async fn test_push_sends_authorized_put() {
    let server = StubServer::start(200).await;
    let credentials = Arc::new(StaticCredentials::new(Some("secret-token".to_string())));
    let client = client_for(&server.base_url(), credentials);

    let (start, end) = window();
    client
        .push(&StatusUpdate::go_offline(&start, &end))
        .await
        .expect("Failed to push update");

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.method, "PUT");
    assert_eq!(request.path, "/api/account/status");
    assert_eq!(request.header("authorization"), Some("Bearer secret-token"));
    assert_eq!(request.header("content-type"), Some("application/json"));

    let body = request.json();
    assert_eq!(body["makeOnline"], false);
    assert_eq!(body["makeOffline"], true);
    assert_eq!(body["offlineFrom"], "2024-06-14T13:00:00Z");
    assert_eq!(body["offlineTo"], "2024-06-14T14:30:00Z");
}

#[tokio::test]
async fn test_push_without_token_omits_authorization() {
    let server = StubServer::start(204).await;
    let client = client_for(&server.base_url(), Arc::new(StaticCredentials::new(None)));

    let (start, end) = window();
    client.push(&StatusUpdate::go_offline(&start, &end)).await.unwrap();

    assert_eq!(server.requests()[0].header("authorization"), None);
}

#[tokio::test]
async fn test_non_success_status_is_rejected() {
    let server = StubServer::start(500).await;
    let client = client_for(&server.base_url(), Arc::new(StaticCredentials::default()));

    let (start, end) = window();
    let err = client
        .push(&StatusUpdate::go_offline(&start, &end))
        .await
        .unwrap_err();
    assert!(matches!(err, SyncError::Rejected { status: 500 }));
}

#[tokio::test]
async fn test_unauthorized_clears_token() {
    let server = StubServer::start(401).await;
    let credentials = Arc::new(StaticCredentials::new(Some("expired".to_string())));
    let client = client_for(&server.base_url(), credentials.clone());

    let (start, end) = window();
    let err = client
        .push(&StatusUpdate::go_offline(&start, &end))
        .await
        .unwrap_err();
    assert!(matches!(err, SyncError::Unauthorized));
    assert_eq!(credentials.token(), None);

    // The next update goes out without a credential
    server.respond_with(200);
    client.push(&StatusUpdate::go_offline(&start, &end)).await.unwrap();
    assert_eq!(server.requests()[1].header("authorization"), None);
}

#[tokio::test]
async fn test_unreachable_server_is_a_transport_error() {
    let base_url = unreachable_base_url().await;
    let client = client_for(&base_url, Arc::new(StaticCredentials::default()));

    let (start, end) = window();
    let err = client
        .push(&StatusUpdate::go_offline(&start, &end))
        .await
        .unwrap_err();
    assert!(matches!(err, SyncError::Transport(_)));
}

#[tokio::test]
async fn test_update_status_reports_outcome_as_bool() {
    let server = StubServer::start(200).await;
    let tz = TimeZone::get("Europe/Berlin").unwrap();
    let now = date(2024, 6, 14).at(9, 15, 0, 0).to_zoned(tz).unwrap();
    let client = HttpStatusClient::builder()
        .with_base_url(server.base_url())
        .with_clock(Arc::new(FixedClock::new(now)))
        .build()
        .expect("Failed to build client");

    let (start, end) = window();
    assert!(client.update_status(false, true, Some(&start), Some(&end)).await);

    server.respond_with(503);
    assert!(!client.update_status(true, false, None, None).await);

    let requests = server.requests();
    assert_eq!(requests.len(), 2);
    let defaulted = requests[1].json();
    assert_eq!(defaulted["makeOnline"], true);
    assert_eq!(defaulted["makeOffline"], false);
    assert_eq!(defaulted["offlineFrom"], "2024-06-14T07:15:00Z");
    assert_eq!(defaulted["offlineTo"], "2024-06-14T21:59:59.999Z");
}
