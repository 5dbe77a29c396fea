// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use portal_client::{fallback_leaderboard, ClientError, PortalClient};
use portal_server::{build_router, AppState, PortalConfig};
use portal_store::{default_dataset, StaticSource};

async fn serve(app: Router) -> std::net::SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });
    addr
}

#[tokio::test]
async fn live_backend_is_rendered_without_warning() {
    let app = build_router(AppState::new(
        Arc::new(StaticSource::new(default_dataset())),
        PortalConfig::default(),
    ));
    let addr = serve(app).await;

    let client = PortalClient::new(format!("http://{addr}"));
    let view = client.fetch_leaderboard().await;
    assert!(!view.is_fallback());
    assert_eq!(view.entries.len(), 10);
    assert_eq!(view.entries[0].record.name, "Priya Sharma");
    assert_eq!(view.entries[0].rank, 1);
    assert_eq!(view.summary.participants, 10);
    assert_eq!(view.summary.total_raised, 60_000);
    assert_eq!(view.summary.average_donation, Some(6_000));
}

#[tokio::test]
async fn unreachable_backend_falls_back_with_warning() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let client = PortalClient::new(format!("http://{addr}"));
    let err = client
        .try_fetch_leaderboard()
        .await
        .expect_err("nothing listening");
    assert!(matches!(err, ClientError::Transport(_)));

    let view = client.fetch_leaderboard().await;
    assert!(view.is_fallback());
    assert_eq!(view.entries, fallback_leaderboard());
    assert!(view
        .warning
        .as_deref()
        .is_some_and(|w| w.starts_with("Using fallback data (Backend error:")));
}

#[tokio::test]
async fn error_status_falls_back() {
    let app = Router::new().route(
        "/api/leaderboard",
        get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
    );
    let addr = serve(app).await;

    let client = PortalClient::new(format!("http://{addr}"));
    assert_eq!(
        client.try_fetch_leaderboard().await,
        Err(ClientError::Status(503))
    );
    let view = client.fetch_leaderboard().await;
    assert_eq!(
        view.warning.as_deref(),
        Some("Using fallback data (Backend error: HTTP error! status: 503)")
    );
}

#[tokio::test]
async fn undecodable_body_falls_back() {
    let app = Router::new().route("/api/leaderboard", get(|| async { "not json" }));
    let addr = serve(app).await;

    let client = PortalClient::new(format!("http://{addr}"));
    assert!(matches!(
        client.try_fetch_leaderboard().await,
        Err(ClientError::Decode(_))
    ));
    assert!(client.fetch_leaderboard().await.is_fallback());
}
