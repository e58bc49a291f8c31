use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::extract::State;
use axum::http::header::{HeaderName, CACHE_CONTROL};
use axum::response::Html;
use axum::Json;

use crate::error::{FeedError, FeedResult};
use crate::feed;
use crate::models::{BlogFeedDto, PostSummary};
use crate::render;
use crate::state::AppState;

pub const MAX_POSTS: usize = 6;
pub const CACHE_TTL: Duration = Duration::from_secs(1800);
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);
pub const USER_AGENT: &str = "Mozilla/5.0 (compatible; FeedcardBot/1.0)";
pub const FEED_ACCEPT: &str =
    "application/rss+xml, application/xml, text/xml;q=0.9, */*;q=0.8";

const CACHE_CONTROL_VALUE: &str = "public, max-age=1800, s-maxage=1800";
const FETCH_ERROR_MESSAGE: &str = "Unable to fetch blog posts right now.";

type CacheHeaders = [(HeaderName, &'static str); 1];

fn cache_headers() -> CacheHeaders {
    [(CACHE_CONTROL, CACHE_CONTROL_VALUE)]
}

/// GET /api/blog
///
/// Always returns 200: upstream failures surface as an empty post list with
/// an `error` message so clients can fall back gracefully instead of handling
/// a 5xx.
pub async fn get_blog_posts(State(state): State<AppState>) -> (CacheHeaders, Json<BlogFeedDto>) {
    let dto = match load_posts(&state).await {
        Ok(posts) => BlogFeedDto { posts, error: None },
        Err(e) => {
            tracing::warn!(error = %e, feed_url = %state.feed_url, "Failed to load feed");
            BlogFeedDto {
                posts: Vec::new(),
                error: Some(FETCH_ERROR_MESSAGE.into()),
            }
        }
    };
    (cache_headers(), Json(dto))
}

/// GET /api/blog/cards
///
/// Server-rendered, escaped card markup for the same data. Failures render
/// the static fallback card, again with status 200.
pub async fn get_blog_cards(State(state): State<AppState>) -> (CacheHeaders, Html<String>) {
    let markup = match load_posts(&state).await {
        Ok(posts) => render::render_cards(&posts, &state.profile_url),
        Err(e) => {
            tracing::warn!(error = %e, feed_url = %state.feed_url, "Failed to load feed");
            render::fallback_card(&state.profile_url)
        }
    };
    (cache_headers(), Html(markup))
}

/// Cached feed load. A hit inside the TTL skips the network entirely; a miss
/// fetches and parses, then schedules the cache write on a separate task so
/// the response is not held up by it. Error results are never cached.
async fn load_posts(state: &AppState) -> FeedResult<Vec<PostSummary>> {
    let feed_url = state.feed_url.to_string();

    {
        let cache = state.feed_cache.lock().unwrap();
        if let Some((posts, cached_at)) = cache.get(&feed_url) {
            if cached_at.elapsed() < CACHE_TTL {
                return Ok(posts.clone());
            }
        }
    }

    let response = state
        .http_client
        .get(&feed_url)
        .header(reqwest::header::ACCEPT, FEED_ACCEPT)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(FeedError::UpstreamStatus(response.status()));
    }

    let xml = response.text().await?;
    let posts = feed::parse_feed(&xml, MAX_POSTS)?;

    let cache = Arc::clone(&state.feed_cache);
    let cached_posts = posts.clone();
    tokio::spawn(async move {
        cache
            .lock()
            .unwrap()
            .insert(feed_url, (cached_posts, Instant::now()));
    });

    Ok(posts)
}
