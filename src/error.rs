use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid username or password.")]
    InvalidCredentials,

    #[error("Username already exists. Please choose another.")]
    DuplicateUser,

    #[error("{0}")]
    InvalidInput(String),

    /// A required field was blank. Surfaces as a silent no-op.
    #[error("Nothing to save")]
    EmptyInput,

    #[error("Please log in first.")]
    NotAuthenticated,

    #[error("Invalid or expired session")]
    InvalidSession,

    #[error("Task not found")]
    TaskNotFound,

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::DuplicateUser => StatusCode::CONFLICT,
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::EmptyInput => StatusCode::NO_CONTENT,
            AppError::NotAuthenticated | AppError::InvalidSession => StatusCode::UNAUTHORIZED,
            AppError::TaskNotFound => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            AppError::EmptyInput => status.into_response(),
            AppError::Internal(ref e) => {
                error!(error = %e, "internal error");
                (status, Json(json!({ "error": "Internal error" }))).into_response()
            }
            other => (status, Json(json!({ "error": other.to_string() }))).into_response(),
        }
    }
}
