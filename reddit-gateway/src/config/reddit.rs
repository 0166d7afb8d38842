//! Reddit application credentials and upstream endpoints

use confique::Config;
use reddit_client::{ClientError, Credentials, Endpoints};
use std::time::Duration;

/// Configuration for the Reddit API client
#[derive(Debug, Config, Clone)]
pub struct RedditConfig {
    /// Reddit app client ID
    #[config(env = "REDDIT_CLIENT_ID")]
    pub client_id: String,

    /// Reddit app client secret
    #[config(env = "REDDIT_CLIENT_SECRET")]
    pub client_secret: String,

    /// User agent sent with every upstream request, e.g. "linux:my-app:v1.0 (by /u/me)"
    #[config(env = "REDDIT_CLIENT_USER_AGENT")]
    pub user_agent: String,

    /// OAuth2 access token endpoint (default: https://www.reddit.com/api/v1/access_token)
    #[config(
        env = "REDDIT_TOKEN_URL",
        default = "https://www.reddit.com/api/v1/access_token"
    )]
    pub token_url: String,

    /// Base URL of the authenticated API (default: https://oauth.reddit.com)
    #[config(env = "REDDIT_API_URL", default = "https://oauth.reddit.com")]
    pub api_url: String,

    /// Timeout for upstream requests in seconds (default: none)
    #[config(env = "REDDIT_REQUEST_TIMEOUT")]
    pub request_timeout: Option<u64>,
}

impl RedditConfig {
    pub fn credentials(&self) -> Credentials {
        Credentials::new(&self.client_id, &self.client_secret, &self.user_agent)
    }

    pub fn endpoints(&self) -> Result<Endpoints, ClientError> {
        Endpoints::new(&self.token_url, &self.api_url)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout.map(Duration::from_secs)
    }
}
