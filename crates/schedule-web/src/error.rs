use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::extract::rejection::MultipartRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use schedule_parsing::ParsingError;
use thiserror::Error;

use crate::models::ErrorResponse;

pub const NO_PAGES_MESSAGE: &str = "PDF has no pages.";
pub const PROCESSING_MESSAGE: &str = "Failed to process PDF.";
pub const MISSING_FILE_MESSAGE: &str = "No file uploaded.";

/// Errors surfaced by the HTTP handlers.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("PDF has no pages")]
    NoPages,
    #[error("no file uploaded")]
    MissingFile,
    #[error("invalid multipart request: {0}")]
    Rejected(#[from] MultipartRejection),
    #[error("failed to read upload: {0}")]
    Upload(#[from] MultipartError),
    #[error("{0}")]
    Processing(String),
}

impl From<ParsingError> for ApiError {
    fn from(err: ParsingError) -> Self {
        match err {
            ParsingError::NoPages => ApiError::NoPages,
            other => ApiError::Processing(other.to_string()),
        }
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::Processing(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::NoPages => (StatusCode::BAD_REQUEST, ErrorResponse::new(NO_PAGES_MESSAGE)),
            ApiError::MissingFile => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse::new(MISSING_FILE_MESSAGE),
            ),
            ApiError::Rejected(rejection) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse::with_details(MISSING_FILE_MESSAGE, rejection.body_text()),
            ),
            ApiError::Upload(err) => (err.status(), ErrorResponse::new(err.body_text())),
            ApiError::Processing(details) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::with_details(PROCESSING_MESSAGE, details),
            ),
        };

        if status.is_server_error() {
            tracing::error!(status = %status, details = ?body.details, "{}", body.error);
        } else {
            tracing::warn!(status = %status, "{}", body.error);
        }

        (status, Json(body)).into_response()
    }
}
