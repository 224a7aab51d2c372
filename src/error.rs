use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Use POST")]
    MethodNotAllowed,

    #[error("Invalid JSON body")]
    InvalidBody,

    #[error("Missing text")]
    MissingText,

    /// Deployment problem: the Azure key or region was never configured.
    #[error("Server missing Azure env vars")]
    MissingCredentials,

    /// Non-2xx answer from the speech endpoint, relayed with its own status.
    #[error("Azure TTS error")]
    Upstream { status: u16, detail: String },

    /// Anything unanticipated. The message is logged, never returned.
    #[error("Unexpected server error")]
    Internal(String),
}

/// Error response body: `{ error, detail? }`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::InvalidBody | Self::MissingText => StatusCode::BAD_REQUEST,
            Self::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            Self::MissingCredentials | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        let detail = match self {
            Self::Upstream { detail, .. } => Some(detail.clone()),
            _ => None,
        };

        ErrorResponse {
            error: self.to_string(),
            detail,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            Self::Internal(cause) => tracing::error!(
                error = %self,
                cause = %cause,
                status = %status.as_u16(),
                "Request failed"
            ),
            Self::MissingCredentials | Self::Upstream { .. } => tracing::error!(
                error = %self,
                status = %status.as_u16(),
                "Request failed"
            ),
            _ => tracing::warn!(
                error = %self,
                status = %status.as_u16(),
                "Request rejected"
            ),
        }

        (status, Json(self.to_response())).into_response()
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
