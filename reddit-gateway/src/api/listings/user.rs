use super::{strict_sort, SubmissionList};
use crate::errors::ApiError;
use crate::openapi::USER_TAG;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::{routing::get, Json, Router};
use log::debug;
use serde::Deserialize;

/// Path segments of the user listing routes
#[derive(Debug, Deserialize)]
pub(crate) struct UserPath {
    username: String,
    #[serde(default)]
    load_count: Option<u32>,
    #[serde(default)]
    sort: Option<String>,
}

/// Articles submitted by a user
///
/// The load count and the sort order may be left out. The returned list can be shorter than
/// the load count when the user has fewer articles.
#[utoipa::path(
    get,
    path = "/user/article/{username}/{load_count}/{sort}",
    tag = USER_TAG,
    params(
        ("username" = String, Path, description = "User to load articles from"),
        ("load_count" = u32, Path, description = "How many articles to load"),
        ("sort" = String, Path, description = "One of hot, top, new, controversial")
    ),
    responses(
        (status = 200, description = "Articles of the user", body = SubmissionList),
        (status = 400, description = "Load count is not a number"),
        (status = 403, description = "Reddit refused access, e.g. a suspended user"),
        (status = 404, description = "Unknown sort order or user"),
        (status = 429, description = "Reddit rate limit exceeded"),
        (status = 502, description = "Reddit request failed"),
        (status = 504, description = "Reddit request timed out")
    )
)]
pub(crate) async fn user_articles(
    State(state): State<AppState>,
    Path(path): Path<UserPath>,
) -> Result<Json<SubmissionList>, ApiError> {
    let load_count = path.load_count.unwrap_or(state.config.defaults.load_count);
    let sort = strict_sort(path.sort.as_deref())?;

    debug!(
        "Loading {} {} articles of u/{}",
        load_count, sort, path.username
    );
    let submissions = state
        .reddit
        .user_submissions(&path.username, load_count, sort)
        .await?;
    Ok(Json(submissions.into()))
}

pub(super) fn router() -> Router<AppState> {
    Router::new()
        .route("/user/article/{username}", get(user_articles))
        .route("/user/article/{username}/{load_count}", get(user_articles))
        .route(
            "/user/article/{username}/{load_count}/{sort}",
            get(user_articles),
        )
}
