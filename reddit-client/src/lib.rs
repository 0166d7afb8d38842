//! # reddit-client
//!
//! A minimal Reddit API client using application-only OAuth2 (client credentials).
//!
//! ## Components
//!
//! - **Token:** Access token lifecycle with a safety margin before the announced expiry.
//! - **Client:** Subreddit and user submission listings with a single refresh-and-retry
//!   on 401/403.
//! - **Sort:** The listing sort orders, parsed strictly or leniently.

pub mod builder;
pub mod client;
pub mod clock;
pub mod error;
pub mod sort;
pub mod token;

pub use builder::RedditClientBuilder;
pub use client::{Endpoints, RedditClient, Submission};
pub use clock::{Clock, SystemClock};
pub use error::ClientError;
pub use sort::{SortOrder, UnknownSortOrder};
pub use token::{Credentials, SAFETY_MARGIN};
