use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use feedcard_server::config::Config;
use feedcard_server::handlers;
use feedcard_server::handlers::blog::{FETCH_TIMEOUT, USER_AGENT};
use feedcard_server::state::AppState;

#[tokio::main]
async fn main() {
    // Initialize tracing — JSON in production, human-readable in dev.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "feedcard_server=info,tower_http=info".parse().unwrap());

    if std::env::var("APP_ENV").as_deref() == Ok("production") {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let config = Config::from_env();
    info!("📝 Configuration loaded, feed: {}", config.feed_url);

    // CORS: permissive in dev, restrictive in production.
    let cors = if config.is_dev {
        info!("🔓 CORS: permissive (dev mode)");
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
    };

    let http_client = reqwest::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()
        .expect("Failed to build HTTP client");

    let state = AppState::new(http_client, &config.feed_url, &config.profile_url);

    let app = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/blog", get(handlers::blog::get_blog_posts))
        .route("/api/blog/cards", get(handlers::blog::get_blog_cards))
        // Front-end assets (index, styles, carousel script)
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    let addr = config.server_addr();
    info!("🎧 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .await
        .expect("Server failed to start");
}
