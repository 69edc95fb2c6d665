use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::app_error::{AppError, ErrorCode};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::MissingEmail => error_resp(StatusCode::BAD_REQUEST, ErrorCode::MissingEmail),
            AppError::InvalidEmail => error_resp(StatusCode::BAD_REQUEST, ErrorCode::InvalidEmail),
            AppError::DuplicateEmail => {
                error_resp(StatusCode::CONFLICT, ErrorCode::DuplicateEmail)
            }
            AppError::Database(detail) => {
                tracing::error!(error = %detail, "Waitlist database error");
                error_resp(StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::DatabaseError)
            }
            AppError::Internal(detail) => {
                tracing::error!(error = %detail, "Waitlist API error");
                error_resp(StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::InternalError)
            }
        }
    }
}

// Unreadable request bodies surface as the generic internal error.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Internal(rejection.to_string())
    }
}

fn error_resp(status: StatusCode, code: ErrorCode) -> Response {
    let body = serde_json::json!({
        "success": false,
        "message": code.message(),
        "error": code.as_str(),
    });
    (status, Json(body)).into_response()
}
