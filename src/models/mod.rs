use serde::{Deserialize, Serialize};

/// One post extracted from the upstream feed.
///
/// `pub_date` keeps the source string untouched (RFC 2822 in RSS 2.0);
/// formatting happens at render time. `image` is `None` when the post body
/// carries no usable `<img>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostSummary {
    pub title: String,
    pub link: String,
    #[serde(rename = "pubDate")]
    pub pub_date: String,
    pub excerpt: String,
    pub image: Option<String>,
}

/// Body of `GET /api/blog`.
///
/// Always paired with HTTP 200 — upstream failures surface as an empty
/// `posts` list plus an `error` message, never as a 5xx.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogFeedDto {
    pub posts: Vec<PostSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
