//! Error responses shared by the HTTP modules.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

impl From<&DomainError> for ErrorResponse {
    fn from(err: &DomainError) -> Self {
        let details = if err.details.is_empty() {
            None
        } else {
            serde_json::to_value(&err.details).ok()
        };
        Self {
            code: err.code.to_string(),
            message: err.message.clone(),
            details,
        }
    }
}

/// Failure of an API call.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Domain(DomainError),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError::Domain(err)
    }
}

/// HTTP status for a domain error code.
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed
        | ErrorCode::EmptyField
        | ErrorCode::OutOfRange
        | ErrorCode::InvalidFormat => StatusCode::BAD_REQUEST,
        ErrorCode::EmptyCategory | ErrorCode::WeightSum => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::AssessmentNotFound => StatusCode::NOT_FOUND,
        ErrorCode::AssessmentNotScored | ErrorCode::ConsentNotGranted => StatusCode::CONFLICT,
        ErrorCode::DeliveryFailed => StatusCode::BAD_GATEWAY,
        ErrorCode::StorageError | ErrorCode::ExportFailed | ErrorCode::InternalError => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg)),
            ApiError::Domain(err) => {
                let status = status_for(err.code);
                if status.is_server_error() {
                    tracing::error!(code = %err.code, error = %err.message, "Request failed");
                }
                (status, ErrorResponse::from(&err))
            }
        };

        (status, Json(error)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_codes_are_client_errors() {
        assert_eq!(status_for(ErrorCode::OutOfRange), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(ErrorCode::WeightSum), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(status_for(ErrorCode::AssessmentNotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_for(ErrorCode::AssessmentNotScored), StatusCode::CONFLICT);
    }

    #[test]
    fn collaborator_failures_are_server_errors() {
        assert!(status_for(ErrorCode::StorageError).is_server_error());
        assert!(status_for(ErrorCode::ExportFailed).is_server_error());
    }

    #[test]
    fn details_are_carried_over() {
        let err = DomainError::validation("ratings.plan", "expected 3 ratings, got 2");
        let response = ErrorResponse::from(&err);
        assert_eq!(response.code, "VALIDATION_FAILED");
        assert_eq!(response.details.unwrap()["field"], "ratings.plan");
    }

    #[test]
    fn empty_details_are_omitted() {
        let err = DomainError::new(ErrorCode::InternalError, "boom");
        let json = serde_json::to_value(ErrorResponse::from(&err)).unwrap();
        assert!(json.get("details").is_none());
    }
}
