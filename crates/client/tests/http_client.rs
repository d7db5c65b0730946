//! HTTP client tests against a local mock backend

use std::time::Duration;

use httpmock::prelude::*;
use iconic_client::HttpClient;
use iconic_shared::{Error, EventId, NewParticipation, TicketingApi, ViewTab};
use serde_json::json;

fn client(server: &MockServer) -> HttpClient {
    HttpClient::new(&server.base_url(), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_recommended_events_are_read_with_bearer_token() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/events/recommended")
                .header("authorization", "Bearer tok-1");
            then.status(200).json_body(json!([
                {"id": 1, "is_exclusive": true, "title": "Gala"},
                {"id": 2, "is_participating": true}
            ]));
        })
        .await;

    let events = client(&server)
        .list_events(ViewTab::Events, Some("tok-1"))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].id, EventId::Number(1));
    assert_eq!(events[0].is_exclusive, Some(true));
    assert_eq!(events[1].is_participating, Some(true));
}

#[tokio::test]
async fn test_my_tickets_tab_reads_participating_events() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/events/participating");
            then.status(200).json_body(json!([]));
        })
        .await;

    let events = client(&server)
        .list_events(ViewTab::MyTickets, None)
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(events.is_empty());
}

#[tokio::test]
async fn test_server_error_is_reported_with_status() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/events/recommended");
            then.status(503);
        })
        .await;

    let err = client(&server)
        .list_events(ViewTab::Events, None)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Status(503)));
}

#[tokio::test]
async fn test_malformed_body_is_a_decode_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/events/recommended");
            then.status(200).body("{\"not\": \"a list\"}");
        })
        .await;

    let err = client(&server)
        .list_events(ViewTab::Events, None)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Decode(_)));
}

#[tokio::test]
async fn test_participation_is_posted_as_confirmed() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/event-participations")
                .json_body(json!({"event_id": 12, "status": "confirmed"}));
            then.status(201);
        })
        .await;

    client(&server)
        .create_participation(&NewParticipation::confirmed(EventId::Number(12)), Some("tok"))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_iconic_upgrade_sends_transaction_header() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/users/iconic/user-3")
                .header("authorization", "Bearer jwt")
                .header("x-transaction-id", "0xbeef")
                .json_body(json!({}));
            then.status(200);
        })
        .await;

    client(&server)
        .upgrade_to_iconic("user-3", "jwt", &"0xbeef".into())
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_refused_upgrade_maps_to_forbidden() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/users/iconic/user-3");
            then.status(403);
        })
        .await;

    let err = client(&server)
        .upgrade_to_iconic("user-3", "jwt", &"0xbeef".into())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Forbidden));
}

#[tokio::test]
async fn test_expired_token_maps_to_unauthenticated() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/event-participations");
            then.status(401);
        })
        .await;

    let err = client(&server)
        .create_participation(&NewParticipation::confirmed(EventId::Number(4)), Some("stale"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Unauthenticated));
}

#[tokio::test]
async fn test_unreachable_backend_is_a_transport_error() {
    let client = HttpClient::new("http://127.0.0.1:9", Duration::from_millis(500)).unwrap();

    let err = client
        .list_events(ViewTab::Events, None)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Transport(_)));
}
