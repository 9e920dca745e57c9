use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Failures while flattening a raw catalog record.
///
/// These signal upstream data that does not have the shape the normalizer relies on.
/// They are never recovered locally.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum NormalizeError {
    #[error("record is missing required field '{0}'")]
    MissingField(&'static str),

    #[error("field '{field}' has unexpected shape: expected {expected}")]
    UnexpectedShape {
        field: &'static str,
        expected: &'static str,
    },

    #[error("record has an empty 'release_dates' list")]
    EmptyReleaseDates,

    #[error("unknown category code {0}")]
    UnknownCategory(i64),

    #[error("unknown age rating code {0}")]
    UnknownAgeRating(i64),
}

/// Failures during corpus-level remapping.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RemapError {
    #[error("genre '{0}' is not in the genre vocabulary")]
    UnknownGenre(String),

    #[error("unknown corpus column '{0}'")]
    UnknownColumn(String),

    #[error("invalid subsidiary pattern: {0}")]
    InvalidPattern(String),
}

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Normalization error: {0}")]
    Normalize(#[from] NormalizeError),

    #[error("Remap error: {0}")]
    Remap(#[from] RemapError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("External API error: {0}")]
    ExternalApi(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Remap(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
            AppError::ExternalApi(msg) => (StatusCode::BAD_GATEWAY, msg),
            AppError::HttpClient(_) | AppError::Normalize(_) => {
                (StatusCode::BAD_GATEWAY, self.to_string())
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
