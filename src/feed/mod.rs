//! Turns an RSS 2.0 document into a bounded list of [`PostSummary`] values.
//!
//! The document itself goes through a real XML parser (`rss`), so malformed
//! markup fails cleanly instead of being half-matched. The HTML embedded in
//! `content:encoded`/`description` is handled with `scraper` for text and
//! image extraction.

use once_cell::sync::Lazy;
use regex::Regex;
use rss::{Channel, Item};
use scraper::{Html, Selector};
use url::Url;

use crate::models::PostSummary;

/// Longest excerpt emitted, excluding the trailing ellipsis.
pub const EXCERPT_MAX_CHARS: usize = 160;
/// Truncation point that leaves room for the `...` marker.
const EXCERPT_CUT_CHARS: usize = 157;

/// Shown when a post has no usable body text.
pub const EXCERPT_PLACEHOLDER: &str = "Read the latest post.";

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());
// Feeds from hosted platforms append a "Continue reading on ..." trailer to
// truncated bodies; it carries no information the card link doesn't.
static CONTINUE_READING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Continue reading.*$").unwrap());

/// Parse a feed document and return up to `max_posts` summaries in source
/// order. Fails only when the document itself is unparsable; items with
/// missing fields are kept and filled with safe defaults.
pub fn parse_feed(xml: &str, max_posts: usize) -> Result<Vec<PostSummary>, rss::Error> {
    let channel = Channel::read_from(xml.as_bytes())?;
    Ok(channel
        .items()
        .iter()
        .take(max_posts)
        .map(summarize_item)
        .collect())
}

fn summarize_item(item: &Item) -> PostSummary {
    let title = clean_text(item.title().unwrap_or_default());
    let link = clean_text(item.link().unwrap_or_default());
    let pub_date = clean_text(item.pub_date().unwrap_or_default());

    let description = item.description().unwrap_or_default();
    let content = item
        .content()
        .filter(|c| !c.trim().is_empty())
        .unwrap_or(description);

    let excerpt = excerpt(content);
    let image = extract_image(content).or_else(|| extract_image(description));

    PostSummary {
        title,
        link,
        pub_date,
        excerpt,
        image,
    }
}

/// Derive a plain-text excerpt from an HTML fragment: strip markup, decode
/// entities, collapse whitespace, drop the "continue reading" trailer, and
/// truncate to [`EXCERPT_MAX_CHARS`] with an ellipsis.
pub fn excerpt(html: &str) -> String {
    let text = html_to_text(html);
    let decoded = decode_entities(&text);
    let collapsed = WHITESPACE.replace_all(&decoded, " ");
    let clean = CONTINUE_READING.replace(&collapsed, "").trim().to_string();

    if clean.is_empty() {
        return EXCERPT_PLACEHOLDER.to_string();
    }
    if clean.chars().count() <= EXCERPT_MAX_CHARS {
        return clean;
    }
    let cut: String = clean.chars().take(EXCERPT_CUT_CHARS).collect();
    format!("{}...", cut.trim_end())
}

/// `src` of the first `<img>` in an HTML fragment, if it is an http(s) URL.
pub fn extract_image(html: &str) -> Option<String> {
    let selector = Selector::parse("img[src]").ok()?;
    let fragment = Html::parse_fragment(html);
    fragment
        .select(&selector)
        .filter_map(|el| el.value().attr("src"))
        .map(|src| decode_entities(src.trim()))
        .find(|src| is_http_url(src))
}

/// Reverse the fixed entity set feeds commonly double-encode. Idempotent on
/// already-decoded text.
pub fn decode_entities(value: &str) -> String {
    value
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
}

/// Replace markup with spaces. Used for scalar fields (title, link, date)
/// where CDATA blocks occasionally smuggle tags through.
pub fn strip_tags(value: &str) -> String {
    TAG.replace_all(value, " ").into_owned()
}

fn clean_text(value: &str) -> String {
    decode_entities(&strip_tags(value)).trim().to_string()
}

fn html_to_text(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    fragment.root_element().text().collect::<Vec<_>>().join(" ")
}

fn is_http_url(value: &str) -> bool {
    Url::parse(value)
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false)
}
