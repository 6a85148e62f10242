use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum AppError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Unexpected response body: {0}")]
    Decode(String),

    #[error("Backend unreachable: {0}")]
    Upstream(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Whether the failure happened before the backend produced any response.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Request(_) | Self::Upstream(_))
    }
}

#[cfg(feature = "ssr")]
mod ssr_impl {
    use super::AppError;
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use axum::Json;

    #[derive(serde::Serialize)]
    struct ErrorResponse {
        message: String,
    }

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            let status = match &self {
                AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
                AppError::Config(_)
                | AppError::Request(_)
                | AppError::Decode(_)
                | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (
                status,
                Json(ErrorResponse {
                    message: self.to_string(),
                }),
            )
                .into_response()
        }
    }
}
