use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use scoring::{ScoringError, dto::conversion::InvalidInput};
use serde_json::json;
use std::fmt;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";
pub const OUT_OF_RANGE_MESSAGE: &str = "Invalid score: converted score is out of range";

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    Scoring(ScoringError),
    InvalidInput(InvalidInput),
    BadRequest(String),
    InternalServerError(String),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scoring(e) => write!(f, "Scoring error: {}", e),
            Self::InvalidInput(e) => write!(f, "{}", e),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::InternalServerError(msg) => write!(f, "Internal server error: {}", msg),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            Self::Scoring(ScoringError::OutOfRange(_)) => StatusCode::BAD_REQUEST,
            Self::Scoring(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = match &self {
            Self::Scoring(e @ ScoringError::OutOfRange(_)) => {
                tracing::debug!("Rejected conversion request: {}", e);
                json!({
                    "error": OUT_OF_RANGE_MESSAGE
                })
            }
            Self::Scoring(e) => {
                tracing::error!("Scoring error: {:?}", e);
                json!({
                    "error": INTERNAL_ERROR_MESSAGE
                })
            }
            Self::InvalidInput(e) => {
                tracing::debug!("Rejected conversion request: {}", e);
                json!({
                    "error": e.to_string()
                })
            }
            Self::BadRequest(msg) => {
                tracing::debug!("Bad request: {}", msg);
                json!({
                    "error": msg
                })
            }
            Self::InternalServerError(msg) => {
                tracing::error!("Internal server error: {}", msg);
                json!({
                    "error": INTERNAL_ERROR_MESSAGE
                })
            }
        };

        (status_code, Json(body)).into_response()
    }
}

impl From<ScoringError> for WebError {
    fn from(error: ScoringError) -> Self {
        Self::Scoring(error)
    }
}

impl From<InvalidInput> for WebError {
    fn from(error: InvalidInput) -> Self {
        Self::InvalidInput(error)
    }
}

pub type WebResult<T> = Result<T, WebError>;
