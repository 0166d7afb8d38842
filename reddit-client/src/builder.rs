use crate::client::{Endpoints, RedditClient};
use crate::clock::{Clock, SystemClock};
use crate::error::ClientError;
use crate::token::{Credentials, TokenState};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// Builder for [`RedditClient`]. Only the credentials are required.
pub struct RedditClientBuilder {
    credentials: Credentials,
    endpoints: Option<Endpoints>,
    clock: Arc<dyn Clock>,
    timeout: Option<Duration>,
}

impl RedditClientBuilder {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoints: None,
            clock: Arc::new(SystemClock),
            timeout: None,
        }
    }

    /// Overrides the token and API URLs. [`Endpoints::reddit`] is used otherwise.
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = Some(endpoints);
        self
    }

    /// Overrides the time source used for expiry checks.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Sets a transport level timeout on every request. There is none by default.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<RedditClient, ClientError> {
        let endpoints = match self.endpoints {
            Some(endpoints) => endpoints,
            None => Endpoints::reddit()?,
        };

        let mut http = Client::builder().user_agent(self.credentials.user_agent.as_str());
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }

        Ok(RedditClient {
            http: http.build()?,
            credentials: self.credentials,
            endpoints,
            clock: self.clock,
            token: Mutex::new(TokenState::default()),
        })
    }
}
