use crate::state::AppState;
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

pub(crate) const HEALTH_TAG: &str = "Health API";
pub(crate) const SUBREDDIT_TAG: &str = "Subreddit API";
pub(crate) const USER_TAG: &str = "User API";

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::health::health_check,
        crate::api::listings::subreddit::default_subreddit_articles,
        crate::api::listings::subreddit::subreddit_articles,
        crate::api::listings::text::default_text_submissions,
        crate::api::listings::text::text_submissions,
        crate::api::listings::user::user_articles,
    ),
    tags(
        (name = HEALTH_TAG, description = "Health check endpoints"),
        (name = SUBREDDIT_TAG, description = "Subreddit submission listings"),
        (name = USER_TAG, description = "User submission listings"),
    ),
    info(
        title = "Reddit Gateway API",
        description = "Read-only gateway to Reddit submission listings"
    )
)]
pub(crate) struct ApiDoc;

/// Serves the OpenAPI document as JSON
async fn openapi_json_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Creates a router for OpenAPI documentation routes
pub(crate) fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json_handler))
}
