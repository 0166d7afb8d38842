use crate::config::GatewayConfig;
use reddit_client::{ClientError, RedditClient};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<GatewayConfig>,
    pub reddit: Arc<RedditClient>,
}

impl AppState {
    pub fn new(config: &GatewayConfig) -> Result<Self, ClientError> {
        let mut builder = RedditClient::builder(config.reddit.credentials())
            .with_endpoints(config.reddit.endpoints()?);
        if let Some(timeout) = config.reddit.request_timeout() {
            builder = builder.with_timeout(timeout);
        }

        Ok(Self {
            config: Arc::new(config.clone()),
            reddit: Arc::new(builder.build()?),
        })
    }
}
