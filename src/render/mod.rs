//! Escaped HTML card markup for post summaries.
//!
//! Everything interpolated here came from an untrusted feed, so every field
//! passes through [`escape_html`] before it reaches the fragment. The static
//! front-end injects the fragment verbatim and only wires up behavior.

use chrono::DateTime;

use crate::feed::EXCERPT_PLACEHOLDER;
use crate::models::PostSummary;

/// Meta line shown when a post date is missing or unparsable.
pub const DATE_FALLBACK: &str = "Blog";
const UNTITLED: &str = "Untitled";
const FALLBACK_STATUS: &str = "New posts will appear here automatically.";

/// Escape text for interpolation into HTML content or attribute values.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Format an RFC 2822 feed date as an en-US short date ("Aug 18, 2025").
pub fn format_pub_date(value: &str) -> String {
    match DateTime::parse_from_rfc2822(value.trim()) {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => DATE_FALLBACK.to_string(),
    }
}

/// Render post summaries as card markup. An empty list falls back to the
/// static "check back later" card, so the caller always gets something to
/// inject.
pub fn render_cards(posts: &[PostSummary], profile_url: &str) -> String {
    if posts.is_empty() {
        return fallback_card(profile_url);
    }
    posts
        .iter()
        .map(|post| render_card(post, profile_url))
        .collect()
}

fn render_card(post: &PostSummary, profile_url: &str) -> String {
    let title = if post.title.is_empty() {
        UNTITLED.to_string()
    } else {
        escape_html(&post.title)
    };
    let excerpt = if post.excerpt.is_empty() {
        EXCERPT_PLACEHOLDER.to_string()
    } else {
        escape_html(&post.excerpt)
    };
    let link = if post.link.is_empty() {
        escape_html(profile_url)
    } else {
        escape_html(&post.link)
    };
    let date = escape_html(&format_pub_date(&post.pub_date));
    let thumb = post
        .image
        .as_deref()
        .filter(|src| !src.is_empty())
        .map(|src| {
            format!(
                r#"<img class="blog-thumb" src="{}" alt="{title}">"#,
                escape_html(src)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<article class="blog-card reveal">
  {thumb}
  <div class="blog-card-body">
    <p class="blog-meta">{date}</p>
    <h3 class="blog-title">{title}</h3>
    <p class="blog-excerpt">{excerpt}</p>
    <a class="blog-link" href="{link}" target="_blank" rel="noreferrer">Read &rarr;</a>
  </div>
</article>
"#
    )
}

/// Static card shown when no posts could be loaded.
pub fn fallback_card(profile_url: &str) -> String {
    format!(
        r#"<article class="blog-card">
  <div class="blog-card-body">
    <p class="blog-status">{FALLBACK_STATUS}</p>
    <a class="blog-link" href="{}" target="_blank" rel="noreferrer">Read &rarr;</a>
  </div>
</article>
"#,
        escape_html(profile_url)
    )
}
