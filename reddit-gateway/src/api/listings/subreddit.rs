use super::{strict_sort, SubmissionList, SubredditPath};
use crate::errors::ApiError;
use crate::openapi::SUBREDDIT_TAG;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::{routing::get, Json, Router};
use log::debug;

/// Articles of the default subreddit
#[utoipa::path(
    get,
    path = "/subreddit/article",
    tag = SUBREDDIT_TAG,
    responses(
        (status = 200, description = "Articles of the default subreddit", body = SubmissionList),
        (status = 403, description = "Reddit refused access"),
        (status = 404, description = "Subreddit not found"),
        (status = 429, description = "Reddit rate limit exceeded"),
        (status = 502, description = "Reddit request failed"),
        (status = 504, description = "Reddit request timed out")
    )
)]
pub(crate) async fn default_subreddit_articles(
    State(state): State<AppState>,
) -> Result<Json<SubmissionList>, ApiError> {
    load_articles(&state, SubredditPath::default()).await
}

/// Articles of a subreddit
///
/// The load count and the sort order may be left out. The returned list can be shorter than
/// the load count when the subreddit has fewer articles.
#[utoipa::path(
    get,
    path = "/subreddit/article/{subreddit}/{load_count}/{sort}",
    tag = SUBREDDIT_TAG,
    params(
        ("subreddit" = String, Path, description = "Subreddit to load articles from"),
        ("load_count" = u32, Path, description = "How many articles to load"),
        ("sort" = String, Path, description = "One of hot, top, new, controversial")
    ),
    responses(
        (status = 200, description = "Articles of the subreddit", body = SubmissionList),
        (status = 400, description = "Load count is not a number"),
        (status = 403, description = "Reddit refused access"),
        (status = 404, description = "Unknown sort order or subreddit"),
        (status = 429, description = "Reddit rate limit exceeded"),
        (status = 502, description = "Reddit request failed"),
        (status = 504, description = "Reddit request timed out")
    )
)]
pub(crate) async fn subreddit_articles(
    State(state): State<AppState>,
    Path(path): Path<SubredditPath>,
) -> Result<Json<SubmissionList>, ApiError> {
    load_articles(&state, path).await
}

async fn load_articles(
    state: &AppState,
    path: SubredditPath,
) -> Result<Json<SubmissionList>, ApiError> {
    let (subreddit, load_count, sort) = path.resolve(state);
    let sort = strict_sort(sort.as_deref())?;

    debug!("Loading {} {} articles of r/{}", load_count, sort, subreddit);
    let submissions = state
        .reddit
        .subreddit_submissions(&subreddit, load_count, sort)
        .await?;
    Ok(Json(submissions.into()))
}

pub(super) fn router() -> Router<AppState> {
    Router::new()
        .route("/subreddit/article", get(default_subreddit_articles))
        .route("/subreddit/article/{subreddit}", get(subreddit_articles))
        .route(
            "/subreddit/article/{subreddit}/{load_count}",
            get(subreddit_articles),
        )
        .route(
            "/subreddit/article/{subreddit}/{load_count}/{sort}",
            get(subreddit_articles),
        )
}
