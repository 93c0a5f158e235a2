//! Integration tests for the fetch pipeline: `spawn_fetch` against an
//! in-process stub of the to-do API.
//!
//! These tests validate:
//! - The initial load announces `Loading` and delivers both collections.
//! - `FetchCommand::Refresh` runs a full second load.
//! - HTTP errors and malformed bodies surface as `FetchEvent::Failed`.
//! - `FetchCommand::Shutdown` terminates the background task cleanly.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::time::Duration;

use axum::{Json, Router, http::StatusCode, routing::get};
use serde_json::{Value, json};
use tokio::sync::mpsc;

use todomatic::net::{self, FetchCommand, FetchConfig, FetchEvent};

/// Fixture rows in the shape the real API returns.
fn todos_body() -> Value {
    json!([
        { "userId": 1, "id": 1, "title": "delectus aut autem", "completed": false },
        { "userId": 1, "id": 2, "title": "quis ut nam facilis", "completed": false },
        { "userId": 2, "id": 3, "title": "fugiat veniam minus", "completed": true }
    ])
}

fn users_body() -> Value {
    json!([
        { "id": 1, "username": "Bret", "name": "Leanne Graham" },
        { "id": 2, "username": "Antonette", "name": "Ervin Howell" }
    ])
}

/// Start a stub API server in-process and return its base URL.
async fn start_stub(app: Router) -> (String, tokio::task::JoinHandle<()>) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub server");
    let addr = listener.local_addr().expect("local addr");
    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("stub server error: {e}");
        }
    });
    (format!("http://{addr}"), handle)
}

/// A stub serving the happy-path fixture on both endpoints.
async fn start_fixture_stub() -> (String, tokio::task::JoinHandle<()>) {
    let app = Router::new()
        .route("/todos", get(|| async { Json(todos_body()) }))
        .route("/users", get(|| async { Json(users_body()) }));
    start_stub(app).await
}

fn make_config(base_url: &str) -> FetchConfig {
    FetchConfig {
        base_url: base_url.to_string(),
        request_timeout: Duration::from_secs(5),
        channel_capacity: 32,
    }
}

/// Receive the next event or panic after a timeout.
async fn next_event(rx: &mut mpsc::Receiver<FetchEvent>) -> FetchEvent {
    tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("timeout waiting for fetch event")
        .expect("event channel closed unexpectedly")
}

// =============================================================================
// Initial load
// =============================================================================

#[tokio::test]
async fn initial_load_delivers_both_collections() {
    let (url, _server) = start_fixture_stub().await;
    let (_cmd_tx, mut evt_rx) = net::spawn_fetch(&make_config(&url)).expect("spawn_fetch");

    assert!(matches!(next_event(&mut evt_rx).await, FetchEvent::Loading));

    match next_event(&mut evt_rx).await {
        FetchEvent::Loaded { tasks, users } => {
            assert_eq!(tasks.len(), 3);
            assert_eq!(users.len(), 2);
            assert_eq!(tasks[0].title, "delectus aut autem");
            assert_eq!(users[0].username, "Bret");
        }
        other => panic!("expected Loaded, got: {other:?}"),
    }
}

// =============================================================================
// Refresh
// =============================================================================

#[tokio::test]
async fn refresh_runs_a_full_second_load() {
    let (url, _server) = start_fixture_stub().await;
    let (cmd_tx, mut evt_rx) = net::spawn_fetch(&make_config(&url)).expect("spawn_fetch");

    // Drain the initial load.
    assert!(matches!(next_event(&mut evt_rx).await, FetchEvent::Loading));
    assert!(matches!(
        next_event(&mut evt_rx).await,
        FetchEvent::Loaded { .. }
    ));

    cmd_tx
        .send(FetchCommand::Refresh)
        .await
        .expect("send refresh");

    assert!(matches!(next_event(&mut evt_rx).await, FetchEvent::Loading));
    match next_event(&mut evt_rx).await {
        FetchEvent::Loaded { tasks, users } => {
            assert_eq!(tasks.len(), 3);
            assert_eq!(users.len(), 2);
        }
        other => panic!("expected Loaded, got: {other:?}"),
    }
}

// =============================================================================
// Failure paths
// =============================================================================

#[tokio::test]
async fn server_error_surfaces_as_failed() {
    let app = Router::new()
        .route("/todos", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
        .route("/users", get(|| async { Json(users_body()) }));
    let (url, _server) = start_stub(app).await;

    let (_cmd_tx, mut evt_rx) = net::spawn_fetch(&make_config(&url)).expect("spawn_fetch");

    assert!(matches!(next_event(&mut evt_rx).await, FetchEvent::Loading));
    match next_event(&mut evt_rx).await {
        FetchEvent::Failed(message) => {
            assert!(message.contains("500"), "unexpected message: {message}");
        }
        other => panic!("expected Failed, got: {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_surfaces_as_failed() {
    let app = Router::new()
        .route("/todos", get(|| async { "not json at all" }))
        .route("/users", get(|| async { Json(users_body()) }));
    let (url, _server) = start_stub(app).await;

    let (_cmd_tx, mut evt_rx) = net::spawn_fetch(&make_config(&url)).expect("spawn_fetch");

    assert!(matches!(next_event(&mut evt_rx).await, FetchEvent::Loading));
    match next_event(&mut evt_rx).await {
        FetchEvent::Failed(message) => {
            assert!(
                message.contains("decode"),
                "unexpected message: {message}"
            );
        }
        other => panic!("expected Failed, got: {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_server_surfaces_as_failed() {
    // Bind a port, then drop the listener so connections are refused.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let (_cmd_tx, mut evt_rx) =
        net::spawn_fetch(&make_config(&format!("http://{addr}"))).expect("spawn_fetch");

    assert!(matches!(next_event(&mut evt_rx).await, FetchEvent::Loading));
    assert!(matches!(
        next_event(&mut evt_rx).await,
        FetchEvent::Failed(_)
    ));
}

// =============================================================================
// Shutdown
// =============================================================================

#[tokio::test]
async fn shutdown_closes_the_event_channel() {
    let (url, _server) = start_fixture_stub().await;
    let (cmd_tx, mut evt_rx) = net::spawn_fetch(&make_config(&url)).expect("spawn_fetch");

    // Drain the initial load.
    assert!(matches!(next_event(&mut evt_rx).await, FetchEvent::Loading));
    assert!(matches!(
        next_event(&mut evt_rx).await,
        FetchEvent::Loaded { .. }
    ));

    cmd_tx
        .send(FetchCommand::Shutdown)
        .await
        .expect("send shutdown");

    let closed = tokio::time::timeout(Duration::from_secs(5), evt_rx.recv())
        .await
        .expect("timeout waiting for channel close");
    assert!(closed.is_none(), "event channel should close after shutdown");
}
