use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Email is required")]
    MissingEmail,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("This email is already on the waitlist")]
    DuplicateEmail,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Clone, Copy, Debug)]
pub enum ErrorCode {
    MissingEmail,
    InvalidEmail,
    DuplicateEmail,
    DatabaseError,
    InternalError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::MissingEmail => "MISSING_EMAIL",
            ErrorCode::InvalidEmail => "INVALID_EMAIL",
            ErrorCode::DuplicateEmail => "DUPLICATE_EMAIL",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Fixed client-facing message for each code. Responses are never built
    /// from internal error detail, so storage internals cannot leak out.
    pub fn message(&self) -> &'static str {
        match self {
            ErrorCode::MissingEmail => "Email is required",
            ErrorCode::InvalidEmail => "Please enter a valid email address",
            ErrorCode::DuplicateEmail => "This email is already on the waitlist",
            ErrorCode::DatabaseError => "Failed to join waitlist. Please try again.",
            ErrorCode::InternalError => "An unexpected error occurred. Please try again.",
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
