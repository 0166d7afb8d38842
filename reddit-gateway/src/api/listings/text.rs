use super::{SubmissionList, SubredditPath};
use crate::errors::ApiError;
use crate::openapi::SUBREDDIT_TAG;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::{routing::get, Json, Router};
use log::debug;
use reddit_client::{SortOrder, Submission};
use serde_json::Value;

/// Text submissions of the default subreddit
#[utoipa::path(
    get,
    path = "/subreddit/text",
    tag = SUBREDDIT_TAG,
    responses(
        (
            status = 200,
            description = "Text submissions of the default subreddit",
            body = SubmissionList
        ),
        (status = 403, description = "Reddit refused access"),
        (status = 404, description = "Subreddit not found"),
        (status = 429, description = "Reddit rate limit exceeded"),
        (status = 502, description = "Reddit request failed"),
        (status = 504, description = "Reddit request timed out")
    )
)]
pub(crate) async fn default_text_submissions(
    State(state): State<AppState>,
) -> Result<Json<SubmissionList>, ApiError> {
    load_text_submissions(&state, SubredditPath::default()).await
}

/// Text submissions of a subreddit
///
/// Only self posts are returned, so the list is usually shorter than the load count. Any sort
/// order other than top, new or controversial is treated as hot.
#[utoipa::path(
    get,
    path = "/subreddit/text/{subreddit}/{load_count}/{sort}",
    tag = SUBREDDIT_TAG,
    params(
        ("subreddit" = String, Path, description = "Subreddit to load submissions from"),
        ("load_count" = u32, Path, description = "How many submissions to load before filtering"),
        ("sort" = String, Path, description = "top, new or controversial, anything else is hot")
    ),
    responses(
        (status = 200, description = "Text submissions of the subreddit", body = SubmissionList),
        (status = 400, description = "Load count is not a number"),
        (status = 403, description = "Reddit refused access"),
        (status = 404, description = "Subreddit not found"),
        (status = 429, description = "Reddit rate limit exceeded"),
        (status = 502, description = "Reddit request failed"),
        (status = 504, description = "Reddit request timed out")
    )
)]
pub(crate) async fn text_submissions(
    State(state): State<AppState>,
    Path(path): Path<SubredditPath>,
) -> Result<Json<SubmissionList>, ApiError> {
    load_text_submissions(&state, path).await
}

async fn load_text_submissions(
    state: &AppState,
    path: SubredditPath,
) -> Result<Json<SubmissionList>, ApiError> {
    let (subreddit, load_count, sort) = path.resolve(state);
    let sort = SortOrder::lenient(sort.as_deref());

    debug!(
        "Loading {} {} text submissions of r/{}",
        load_count, sort, subreddit
    );
    let submissions = state
        .reddit
        .subreddit_submissions(&subreddit, load_count, sort)
        .await?;

    let text_submissions: Vec<Submission> = submissions.into_iter().filter(is_self_post).collect();
    Ok(Json(text_submissions.into()))
}

fn is_self_post(submission: &Submission) -> bool {
    submission.get("is_self").and_then(Value::as_bool) == Some(true)
}

pub(super) fn router() -> Router<AppState> {
    Router::new()
        .route("/subreddit/text", get(default_text_submissions))
        .route("/subreddit/text/{subreddit}", get(text_submissions))
        .route(
            "/subreddit/text/{subreddit}/{load_count}",
            get(text_submissions),
        )
        .route(
            "/subreddit/text/{subreddit}/{load_count}/{sort}",
            get(text_submissions),
        )
}
