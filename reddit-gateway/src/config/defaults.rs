use confique::Config;

/// Values used when a route leaves out an optional path segment
#[derive(Debug, Config, Clone)]
pub struct DefaultsConfig {
    /// How many submissions to request when no load count is given (default: 25)
    #[config(env = "DEFAULT_LOAD_COUNT", default = 25)]
    pub load_count: u32,

    /// Subreddit listed when none is given (default: all)
    #[config(env = "DEFAULT_SUBREDDIT", default = "all")]
    pub subreddit: String,
}
