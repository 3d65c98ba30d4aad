use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
///
/// Every failure a handler can produce maps to exactly one variant here;
/// the `IntoResponse` impl below is the single place where error kinds
/// become transport-level status codes.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Duplicate email or mobile number at registration. Holds the display
    /// name of the conflicting field ("Email" or "Mobile number").
    #[error("{0} already registered")]
    Conflict(String),

    #[error("Invalid email or password")]
    Unauthorized,

    #[error("{0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    /// The catalog scan accepted zero rows. Distinct from "no items matched
    /// the user's preferences", which is a successful empty result.
    #[error("CSV parsing failed or empty")]
    EmptyCatalog,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            // The registration contract fixes duplicates at 400, not 409.
            AppError::Conflict(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, self.to_string()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::EmptyCatalog => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
            AppError::Database(_)
            | AppError::Io(_)
            | AppError::Csv(_)
            | AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
