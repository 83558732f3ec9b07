use actix_web::{
    http::{header, StatusCode},
    HttpResponse, ResponseError,
};
use json_patch::PatchError;
use serde::Serialize;
use thiserror::Error;

pub const QUIZ_NOT_FOUND: &str = "There is no such quiz!";
pub const UNAUTHORIZED_ACCESS: &str = "You are not authorized to access this quiz!";
pub const NO_USER: &str = "There is no authenticated user!";
pub const EMAIL_TAKEN: &str = "Your email has already been registered";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    AlreadyExists(String),

    #[error("{0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn quiz_not_found() -> Self {
        AppError::NotFound(QUIZ_NOT_FOUND.to_string())
    }

    pub fn forbidden() -> Self {
        AppError::Forbidden(UNAUTHORIZED_ACCESS.to_string())
    }

    pub fn unauthenticated() -> Self {
        AppError::Unauthorized(NO_USER.to_string())
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::AlreadyExists(_) => "ALREADY_EXISTS",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::DatabaseError(_) => "DATABASE_ERROR",
            AppError::Unauthorized(_) => "UNAUTHORIZED",
            AppError::Forbidden(_) => "FORBIDDEN",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    pub kind: &'static str,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AlreadyExists(_) => StatusCode::CONFLICT,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let AppError::Unauthorized(_) = self {
            builder.insert_header((header::WWW_AUTHENTICATE, "Basic realm=\"quizzes\""));
        }

        // Storage and internal details stay in the log.
        let error = match self {
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                log::error!("{}", self);
                "Internal server error".to_string()
            }
            _ => self.to_string(),
        };

        builder.json(ErrorResponse {
            error,
            code: self.status_code().as_u16(),
            kind: self.error_code(),
        })
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::DatabaseError(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for AppError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        AppError::InternalError(format!("BSON serialization error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(validation_message(&err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<PatchError> for AppError {
    fn from(err: PatchError) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

/// Flattens field errors into their user-facing messages, ordered by field name.
pub fn validation_message(errors: &validator::ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Field '{}' is invalid", field))
            })
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// Names of the fields that failed validation, ordered by field name.
pub fn invalid_fields(errors: &validator::ValidationErrors) -> Vec<String> {
    let mut fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|field| field.to_string())
        .collect();
    fields.sort();
    fields
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(AppError::quiz_not_found().status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::forbidden().status_code(), StatusCode::FORBIDDEN);
        assert_eq!(AppError::unauthenticated().status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AppError::AlreadyExists("test".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::ValidationError("test".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_error_messages_are_fixed_texts() {
        assert_eq!(AppError::quiz_not_found().to_string(), "There is no such quiz!");
        assert_eq!(
            AppError::forbidden().to_string(),
            "You are not authorized to access this quiz!"
        );
        assert_eq!(
            AppError::unauthenticated().to_string(),
            "There is no authenticated user!"
        );
    }

    #[test]
    fn test_unauthorized_response_carries_challenge() {
        let response = AppError::unauthenticated().error_response();
        assert!(response.headers().contains_key(header::WWW_AUTHENTICATE));
    }

    #[test]
    fn test_database_error_details_are_hidden() {
        let response = AppError::DatabaseError("connection refused".into()).error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
