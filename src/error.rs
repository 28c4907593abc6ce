use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Terminal request failures. None of these are retried; each becomes an
/// HTTP error status with a one-line JSON message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid JSON body: {0}")]
    MalformedInput(String),
    #[error("missing required parameters: {0}")]
    MissingParameters(String),
    #[error("failed to get access token: {0}")]
    TokenExchange(#[source] anyhow::Error),
    #[error("failed to send template message: {0}")]
    Delivery(#[source] anyhow::Error),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::MalformedInput(_) | AppError::MissingParameters(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::TokenExchange(_) | AppError::Delivery(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.to_string()
        }));

        (self.status(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_errors_map_to_bad_request() {
        assert_eq!(
            AppError::MalformedInput("oops".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::MissingParameters("appid".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn upstream_errors_map_to_internal_server_error() {
        assert_eq!(
            AppError::TokenExchange(anyhow::anyhow!("down")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Delivery(anyhow::anyhow!("down")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
