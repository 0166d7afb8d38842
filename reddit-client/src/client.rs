use crate::builder::RedditClientBuilder;
use crate::clock::Clock;
use crate::error::ClientError;
use crate::sort::SortOrder;
use crate::token::{AccessTokenResponse, Credentials, TokenState};
use log::{debug, warn};
use reqwest::header::{AUTHORIZATION, HeaderValue};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::Mutex;
use url::Url;

pub const DEFAULT_TOKEN_URL: &str = "https://www.reddit.com/api/v1/access_token";
pub const DEFAULT_API_URL: &str = "https://oauth.reddit.com";

/// One upstream content item, exactly as found in a listing child's `data` field.
pub type Submission = serde_json::Map<String, serde_json::Value>;

/// Where the client fetches tokens and listings from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub token_url: Url,
    pub api_url: Url,
}

impl Endpoints {
    pub fn new(token_url: &str, api_url: &str) -> Result<Self, ClientError> {
        Ok(Self {
            token_url: Url::parse(token_url)?,
            api_url: Url::parse(api_url)?,
        })
    }

    /// The public Reddit endpoints.
    pub fn reddit() -> Result<Self, ClientError> {
        Self::new(DEFAULT_TOKEN_URL, DEFAULT_API_URL)
    }

    /// Builds `{api_url}/{segments...}`, percent-encoding every segment.
    fn api(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::Url(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

/// Reddit API client authenticated with the OAuth2 client-credentials grant.
///
/// The access token is requested lazily, reused until shortly before it expires, and
/// refreshed once when a listing request is rejected with 401 or 403. The
/// check-refresh-write sequence runs under a lock, so concurrent callers observing an
/// expired token trigger a single token request.
pub struct RedditClient {
    pub(crate) http: Client,
    pub(crate) credentials: Credentials,
    pub(crate) endpoints: Endpoints,
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) token: Mutex<TokenState>,
}

impl std::fmt::Debug for RedditClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedditClient")
            .field("credentials", &self.credentials)
            .field("endpoints", &self.endpoints)
            // Skip the http client and the token state
            .finish_non_exhaustive()
    }
}

impl RedditClient {
    pub fn new(credentials: Credentials) -> Result<Self, ClientError> {
        Self::builder(credentials).build()
    }

    pub fn builder(credentials: Credentials) -> RedditClientBuilder {
        RedditClientBuilder::new(credentials)
    }

    /// Requests a fresh access token and stores it, whether or not the current one is still valid.
    pub async fn authorize(&self) -> Result<(), ClientError> {
        let mut token = self.token.lock().await;
        self.authorize_locked(&mut token).await.map(|_| ())
    }

    /// Loads up to `limit` submissions of a subreddit. The sort order is a path segment.
    pub async fn subreddit_submissions(
        &self,
        subreddit: &str,
        limit: u32,
        sort: SortOrder,
    ) -> Result<Vec<Submission>, ClientError> {
        let url = self.endpoints.api(&["r", subreddit, sort.as_str()])?;
        let params = [("limit", limit.to_string())];
        self.get_submissions(url, &params).await
    }

    /// Loads up to `limit` submissions of a user. The sort order is a query parameter.
    pub async fn user_submissions(
        &self,
        user: &str,
        limit: u32,
        sort: SortOrder,
    ) -> Result<Vec<Submission>, ClientError> {
        let url = self.endpoints.api(&["user", user, "submitted"])?;
        let params = [
            ("limit", limit.to_string()),
            ("sort", sort.as_str().to_string()),
        ];
        self.get_submissions(url, &params).await
    }

    async fn get_submissions(
        &self,
        url: Url,
        params: &[(&str, String)],
    ) -> Result<Vec<Submission>, ClientError> {
        let bearer = self.current_bearer().await?;
        let mut response = self.send_get(&url, params, &bearer).await?;

        if matches!(
            response.status(),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
        ) {
            warn!(
                "Request to {} rejected with status {}, refreshing access token",
                url.path(),
                response.status()
            );
            let bearer = self.refresh_rejected(&bearer).await?;
            response = self.send_get(&url, params, &bearer).await?;
        }

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ClientError::UpstreamRequest(status));
        }

        let body = response.bytes().await?;
        let listing: Listing = serde_json::from_slice(&body)
            .map_err(|e| ClientError::MalformedResponse(format!("listing: {e}")))?;
        Ok(listing.into_submissions())
    }

    async fn send_get(
        &self,
        url: &Url,
        params: &[(&str, String)],
        bearer: &HeaderValue,
    ) -> Result<Response, ClientError> {
        debug!("Fetching submissions from {}", url);
        Ok(self
            .http
            .get(url.clone())
            .query(params)
            .header(AUTHORIZATION, bearer.clone())
            .send()
            .await?)
    }

    /// The stored bearer header, refreshed first if it is missing or expired.
    async fn current_bearer(&self) -> Result<HeaderValue, ClientError> {
        let mut token = self.token.lock().await;
        if let Some(bearer) = token.valid_bearer(self.clock.now()) {
            return Ok(bearer.clone());
        }
        self.authorize_locked(&mut token).await
    }

    /// Refreshes after `rejected` was turned down, unless another caller already replaced it.
    async fn refresh_rejected(&self, rejected: &HeaderValue) -> Result<HeaderValue, ClientError> {
        let mut token = self.token.lock().await;
        if let Some(current) = token.valid_bearer(self.clock.now()) {
            if current != rejected {
                return Ok(current.clone());
            }
        }
        self.authorize_locked(&mut token).await
    }

    async fn authorize_locked(&self, token: &mut TokenState) -> Result<HeaderValue, ClientError> {
        debug!("Requesting access token from {}", self.endpoints.token_url);
        let response = self
            .http
            .post(self.endpoints.token_url.clone())
            .basic_auth(
                &self.credentials.client_id,
                Some(&self.credentials.client_secret),
            )
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ClientError::Authentication(status));
        }

        let body = response.bytes().await?;
        let grant: AccessTokenResponse = serde_json::from_slice(&body)
            .map_err(|e| ClientError::MalformedResponse(format!("access token: {e}")))?;

        let bearer = token.store(&grant.access_token, grant.expires_in, self.clock.now())?;
        debug!("Access token refreshed, expires in {}s", grant.expires_in);
        Ok(bearer)
    }

    #[cfg(test)]
    pub(crate) async fn token_expires_at(&self) -> Option<std::time::Instant> {
        self.token.lock().await.expires_at()
    }
}

/// Upstream pagination envelope: `{"data": {"children": [{"data": {...}}, ...]}}`.
#[derive(Debug, Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Debug, Deserialize)]
struct ListingData {
    children: Vec<ListingChild>,
}

#[derive(Debug, Deserialize)]
struct ListingChild {
    data: Submission,
}

impl Listing {
    fn into_submissions(self) -> Vec<Submission> {
        self.data.children.into_iter().map(|child| child.data).collect()
    }
}
