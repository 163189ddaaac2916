use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use log::error;
use serde::Serialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Everything a route handler can fail with, normalized to one wire shape:
/// `{"error": "<message>"}` plus the matching status code. Internal details
/// are logged server-side and never reach the caller.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    NotFound(String),
    #[error("an unexpected error occurred")]
    Internal,
}

impl ApiError {
    pub fn not_found(entity: &str, id: i32) -> Self {
        ApiError::NotFound(format!("{} with id {} not found", entity, id))
    }
}

impl actix_web::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

impl From<crate::repository::database::DbError> for ApiError {
    fn from(err: crate::repository::database::DbError) -> Self {
        use crate::repository::database::DbError;
        use diesel::result::{DatabaseErrorKind, Error as DieselError};
        match err {
            DbError::Query(DieselError::NotFound) => {
                ApiError::NotFound("record not found".to_string())
            }
            DbError::Query(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info)) => {
                ApiError::Validation(info.message().to_string())
            }
            DbError::Query(DieselError::DatabaseError(
                DatabaseErrorKind::ForeignKeyViolation,
                info,
            )) => ApiError::Validation(info.message().to_string()),
            other => {
                error!("database failure: {:?}", other);
                ApiError::Internal
            }
        }
    }
}

/// Runs the schema's `validator` rules and flattens field-level failures into
/// one 400 message, e.g. `email: invalid email; goals_scored: out of range`.
pub fn validate_schema<T: Validate>(schema: &T) -> Result<(), ApiError> {
    schema.validate().map_err(format_validation_errors)
}

fn format_validation_errors(errors: ValidationErrors) -> ApiError {
    let mut parts: Vec<String> = errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let detail = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect::<Vec<_>>()
                .join(", ");
            format!("{}: {}", field, detail)
        })
        .collect();
    parts.sort();
    ApiError::Validation(parts.join("; "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "must not be empty"))]
        name: String,
        #[validate(range(min = 0, message = "must not be negative"))]
        goals: i32,
    }

    #[test]
    fn validation_failures_become_bad_request() {
        let sample = Sample {
            name: String::new(),
            goals: -1,
        };
        let err = validate_schema(&sample).unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        let message = err.to_string();
        assert!(message.contains("name: must not be empty"));
        assert!(message.contains("goals: must not be negative"));
    }

    #[test]
    fn status_codes_follow_the_taxonomy() {
        assert_eq!(
            ApiError::Unauthorized("no".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::not_found("player", 7).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Internal.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::not_found("player", 7).to_string(),
            "player with id 7 not found"
        );
    }
}
