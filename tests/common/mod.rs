// Each integration test file is a separate binary; helpers not used in every
// binary would otherwise trigger dead_code warnings from clippy.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{header, HeaderMap, Request, StatusCode},
    routing::get,
    Router,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use feedcard_server::{handlers, state::AppState};

pub const TEST_PROFILE_URL: &str = "https://blog.example.com/@tester";

/// Build the API router wired to the given state.
pub fn create_test_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/blog", get(handlers::blog::get_blog_posts))
        .route("/api/blog/cards", get(handlers::blog::get_blog_cards))
        .with_state(state)
}

/// State pointed at the given upstream feed URL, with a short client timeout
/// so failure-path tests don't hang.
pub fn test_state(feed_url: &str) -> AppState {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(2))
        .build()
        .expect("Failed to build test HTTP client");
    AppState::new(client, feed_url, TEST_PROFILE_URL)
}

/// GET `uri` against `app`, returning status, headers, and body text.
pub async fn get_response(app: Router, uri: &str) -> (StatusCode, HeaderMap, String) {
    let response = app
        .oneshot(
            Request::builder()
                .uri(uri)
                .header(header::ACCEPT, "application/json, text/html")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
}

/// Serve a fixed response at a random loopback port, standing in for the
/// upstream feed. Returns the URL to fetch and a counter of upstream hits.
pub async fn spawn_feed_server(
    status: StatusCode,
    body: &'static str,
) -> (String, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let handler_hits = Arc::clone(&hits);

    let app = Router::new().route(
        "/feed",
        get(move || {
            let hits = Arc::clone(&handler_hits);
            async move {
                hits.fetch_add(1, Ordering::SeqCst);
                (
                    status,
                    [(header::CONTENT_TYPE, "application/rss+xml")],
                    body,
                )
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fixture server");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}/feed"), hits)
}

/// Wait (bounded) until the state's cache holds an entry for `feed_url`.
/// The cache write happens on a spawned task after the response is sent.
pub async fn wait_for_cache_write(state: &AppState, feed_url: &str) {
    for _ in 0..100 {
        if state.feed_cache.lock().unwrap().contains_key(feed_url) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("cache write for {feed_url} never happened");
}
