// HTTP error mapping for handlers
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The tower-log collaborator could not be reached or returned garbage.
    #[error(transparent)]
    Upstream(#[from] anyhow::Error),

    #[error("no readings available yet")]
    NoData,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Upstream(e) => {
                tracing::error!("upstream failure: {:#}", e);
                (StatusCode::BAD_GATEWAY, "upstream tower-log request failed").into_response()
            }
            ApiError::NoData => {
                (StatusCode::NOT_FOUND, "no readings available yet").into_response()
            }
        }
    }
}
