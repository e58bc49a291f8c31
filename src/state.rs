use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use reqwest::Client as ReqwestClient;

use crate::models::PostSummary;

/// Parsed posts keyed by feed URL, with the time they were stored.
pub type FeedCache = Arc<Mutex<HashMap<String, (Vec<PostSummary>, Instant)>>>;

/// Shared application state passed to all handlers.
///
/// The outbound client is built once at startup (timeout + user agent set
/// there) rather than per request.
#[derive(Clone)]
pub struct AppState {
    pub http_client: ReqwestClient,
    pub feed_url: Arc<str>,
    pub profile_url: Arc<str>,
    pub feed_cache: FeedCache,
}

impl AppState {
    pub fn new(http_client: ReqwestClient, feed_url: &str, profile_url: &str) -> Self {
        AppState {
            http_client,
            feed_url: Arc::from(feed_url),
            profile_url: Arc::from(profile_url),
            feed_cache: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}
