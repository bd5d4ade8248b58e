//! HTTP-visible error outcomes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors a request can end in.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// `/play` without a usable `core` or `rom`.
    #[error("Missing core or rom parameter")]
    MissingParameters,

    #[error("Not Found")]
    NotFound,

    /// Template failure; never expected with the embedded page.
    #[error("failed to render play page: {0}")]
    Render(#[from] tera::Error),
}

impl BridgeError {
    pub fn status(&self) -> StatusCode {
        match self {
            BridgeError::MissingParameters => StatusCode::BAD_REQUEST,
            BridgeError::NotFound => StatusCode::NOT_FOUND,
            BridgeError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for BridgeError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            BridgeError::Render(e) => {
                tracing::error!(error = %e, "Play page rendering failed");
                (status, "Internal Server Error").into_response()
            }
            other => (status, other.to_string()).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(BridgeError::MissingParameters.status(), StatusCode::BAD_REQUEST);
        assert_eq!(BridgeError::NotFound.status(), StatusCode::NOT_FOUND);

        let response = BridgeError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
