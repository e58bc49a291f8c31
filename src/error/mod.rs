use thiserror::Error;

/// Failures on the upstream feed path.
///
/// These never surface as HTTP errors: the blog handlers log them and
/// convert them into an empty-result body with an error flag, keeping the
/// `/api/blog` contract at "always 200, possibly empty".
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("feed request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("feed request failed with status {0}")]
    UpstreamStatus(reqwest::StatusCode),

    #[error("feed document could not be parsed: {0}")]
    Parse(#[from] rss::Error),
}

pub type FeedResult<T> = Result<T, FeedError>;
