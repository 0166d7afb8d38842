use axum::response::IntoResponse;
use axum::Json;
use http::StatusCode;
use log::error;
use reddit_client::{ClientError, UnknownSortOrder};
use serde_json::json;

#[derive(Debug, Clone)]
pub struct ApiError {
    pub detail: String,
    pub status_code: StatusCode,
}

impl ApiError {
    /// Create a new ApiError with a detail message and status code
    pub fn new<S: ToString>(detail: S, status_code: StatusCode) -> Self {
        Self {
            detail: detail.to_string(),
            status_code,
        }
    }

    /// Create new Internal Server Error (500) with a detail message
    pub fn internal<S: ToString>(detail: S) -> Self {
        Self::new(detail, StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Create new Not Found Error (404) with a detail message
    pub fn not_found<S: ToString>(detail: S) -> Self {
        Self::new(detail, StatusCode::NOT_FOUND)
    }

    /// Create new Bad Gateway (502) with a detail message
    pub fn bad_gateway<S: ToString>(detail: S) -> Self {
        Self::new(detail, StatusCode::BAD_GATEWAY)
    }

    /// Create new Gateway Timeout (504) with a detail message
    pub fn gateway_timeout<S: ToString>(detail: S) -> Self {
        Self::new(detail, StatusCode::GATEWAY_TIMEOUT)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status_code = self.status_code;
        let body = json!({
            "detail": self.detail,
        });
        (status_code, Json(body)).into_response()
    }
}

impl From<UnknownSortOrder> for ApiError {
    fn from(err: UnknownSortOrder) -> Self {
        ApiError::not_found(err)
    }
}

impl From<ClientError> for ApiError {
    fn from(err: ClientError) -> Self {
        error!("Reddit request failed: {}", err);
        if err.is_timeout() {
            return ApiError::gateway_timeout("Reddit request timed out");
        }
        match err {
            ClientError::UpstreamRequest(
                status @ (StatusCode::NOT_FOUND
                | StatusCode::FORBIDDEN
                | StatusCode::TOO_MANY_REQUESTS),
            ) => ApiError::new(format!("Reddit request failed with status: {}", status), status),
            ClientError::UpstreamRequest(status) => {
                ApiError::bad_gateway(format!("Reddit request failed with status: {}", status))
            }
            ClientError::Authentication(status) => ApiError::bad_gateway(format!(
                "Reddit authorization failed with status: {}",
                status
            )),
            ClientError::MalformedResponse(e) => {
                ApiError::bad_gateway(format!("Failed to parse Reddit response: {}", e))
            }
            ClientError::Http(_) => ApiError::bad_gateway("Failed to send request to Reddit"),
            ClientError::InvalidHeader(_) | ClientError::Url(_) => {
                ApiError::internal("Failed to build request to Reddit")
            }
        }
    }
}
