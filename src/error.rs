use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use common::{ErrorPayload, ValidationError};
use thiserror::Error;
use tracing::{error, warn};

pub const UPSTREAM_UNAVAILABLE_MESSAGE: &str = "Prediction service unavailable";

#[derive(Debug, Error)]
pub enum GatewayError {
    /// Request body rejected before it reached the prediction service.
    #[error("{0}")]
    Validation(String),

    /// The prediction service answered with an `error` field.
    #[error("{message}")]
    Upstream { status: StatusCode, message: String },

    /// The prediction service could not be reached, or its answer was not
    /// a valid reply.
    #[error("Prediction service unavailable")]
    UpstreamUnavailable { reason: String },

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl GatewayError {
    pub fn unavailable(reason: impl ToString) -> Self {
        Self::UpstreamUnavailable {
            reason: reason.to_string(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            GatewayError::Upstream { status, .. } => *status,
            GatewayError::UpstreamUnavailable { .. } => StatusCode::BAD_GATEWAY,
            GatewayError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationError> for GatewayError {
    fn from(err: ValidationError) -> Self {
        GatewayError::Validation(err.to_string())
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            GatewayError::UpstreamUnavailable { reason } => {
                error!("Prediction service unavailable: {}", reason)
            }
            GatewayError::Config(e) => error!("Configuration error: {}", e),
            other => warn!(status = status.as_u16(), "Request failed: {}", other),
        }

        (status, Json(ErrorPayload::new(self.to_string()))).into_response()
    }
}
