//! Submission listing routes.
//!
//! Trailing path segments are optional: a missing subreddit or load count falls back to the
//! configured defaults, a missing sort order to `hot`.

pub(crate) mod subreddit;
pub(crate) mod text;
pub(crate) mod user;

use crate::errors::ApiError;
use crate::state::AppState;
use axum::Router;
use reddit_client::{SortOrder, Submission};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Envelope returned by every listing route
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubmissionList {
    /// Number of submissions in the list
    pub count: usize,
    /// Submissions exactly as returned by Reddit, in upstream order
    #[schema(value_type = Vec<Object>)]
    pub submissions: Vec<Submission>,
}

impl From<Vec<Submission>> for SubmissionList {
    fn from(submissions: Vec<Submission>) -> Self {
        Self {
            count: submissions.len(),
            submissions,
        }
    }
}

/// Path segments of the subreddit listing routes
#[derive(Debug, Default, Deserialize)]
pub(crate) struct SubredditPath {
    #[serde(default)]
    pub subreddit: Option<String>,
    #[serde(default)]
    pub load_count: Option<u32>,
    #[serde(default)]
    pub sort: Option<String>,
}

impl SubredditPath {
    /// Subreddit and load count with the configured defaults filled in
    pub(crate) fn resolve(self, state: &AppState) -> (String, u32, Option<String>) {
        let defaults = &state.config.defaults;
        (
            self.subreddit.unwrap_or_else(|| defaults.subreddit.clone()),
            self.load_count.unwrap_or(defaults.load_count),
            self.sort,
        )
    }
}

/// Parses a sort order that must be one of the known names, `hot` when absent
pub(crate) fn strict_sort(sort: Option<&str>) -> Result<SortOrder, ApiError> {
    Ok(sort.map(str::parse::<SortOrder>).transpose()?.unwrap_or_default())
}

pub(super) fn router() -> Router<AppState> {
    Router::new()
        .merge(subreddit::router())
        .merge(text::router())
        .merge(user::router())
}
