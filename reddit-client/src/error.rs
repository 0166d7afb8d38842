use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    /// The token endpoint answered with anything other than 200.
    #[error("Access token request failed with status: {0}")]
    Authentication(StatusCode),

    /// A listing endpoint answered with anything other than 200, after the single retry.
    #[error("Upstream request failed with status: {0}")]
    UpstreamRequest(StatusCode),

    #[error("Malformed upstream response: {0}")]
    MalformedResponse(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
}

impl ClientError {
    /// Whether the transport gave up waiting on the upstream.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(err) if err.is_timeout())
    }
}
