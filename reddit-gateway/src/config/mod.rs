pub(crate) use crate::config::defaults::DefaultsConfig;
pub(crate) use crate::config::reddit::RedditConfig;
use confique::Config;

pub mod defaults;
pub mod reddit;

/// Environment variable pointing at an optional TOML configuration file
pub const CONFIG_FILE_ENV: &str = "GATEWAY_CONFIG_FILE";
const DEFAULT_CONFIG_FILE: &str = "gateway.toml";

/// Main configuration structure for the gateway
///
/// Values are taken from environment variables first, then from the TOML file, then from
/// the defaults below.
#[derive(Debug, Config, Clone)]
pub struct GatewayConfig {
    /// The port the gateway will listen to (default: 7788)
    #[config(env = "GATEWAY_PORT", default = 7788)]
    pub port: u16,

    /// Reddit API client configuration
    #[config(nested)]
    pub reddit: RedditConfig,

    /// Route defaults
    #[config(nested)]
    pub defaults: DefaultsConfig,
}

impl GatewayConfig {
    /// Loads the configuration from the environment and the file named by `GATEWAY_CONFIG_FILE`
    pub fn new() -> Result<Self, confique::Error> {
        let file = std::env::var(CONFIG_FILE_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.into());
        Self::builder().env().file(file).load()
    }

    /// Loads the configuration from a TOML file only, ignoring the environment
    #[cfg(test)]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, confique::Error> {
        Self::builder().file(path.as_ref()).load()
    }

    #[cfg(test)]
    pub fn for_test_with_mocks(reddit_mock: &wiremock::MockServer) -> Self {
        Self {
            port: 0, // Let the OS choose a port
            reddit: RedditConfig {
                client_id: "test-client-id".to_string(),
                client_secret: "test-client-secret".to_string(),
                user_agent: "linux:reddit-gateway-test:v0.1.0".to_string(),
                token_url: format!("{}/api/v1/access_token", reddit_mock.uri()),
                api_url: reddit_mock.uri(),
                request_timeout: Some(5),
            },
            defaults: DefaultsConfig {
                load_count: 25,
                subreddit: "all".to_string(),
            },
        }
    }
}
