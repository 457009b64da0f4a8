//! Defines the error types shared across the service.
//!
//! `ServiceError` is the single error currency: storage failures, payload
//! validation failures, and request-intake failures all funnel into it, and
//! its `IntoResponse` implementation maps each variant onto the HTTP error
//! contract of the API.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result alias used by storage and handler signatures.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// One field that failed the account schema check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ServiceError {
    /// A payload was well-formed JSON but failed the account schema check.
    #[error("{message}")]
    Validation {
        message: String,
        fields: Vec<FieldError>,
    },

    /// The request body could not be read as a JSON object at all.
    #[error("{message}")]
    BadData { message: String },

    /// The request declared a content type other than `application/json`.
    #[error("{message}")]
    UnsupportedMediaType { message: String },

    /// The referenced entity does not exist.
    #[error("{entity} with id [{id}] could not be found")]
    NotFound { entity: String, id: i64 },

    /// The backing store failed.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ServiceError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            fields: Vec::new(),
        }
    }

    pub fn validation_fields(message: impl Into<String>, fields: Vec<FieldError>) -> Self {
        Self::Validation {
            message: message.into(),
            fields,
        }
    }

    pub fn bad_data(message: impl Into<String>) -> Self {
        Self::BadData {
            message: message.into(),
        }
    }

    pub fn unsupported_media_type(message: impl Into<String>) -> Self {
        Self::UnsupportedMediaType {
            message: message.into(),
        }
    }

    pub fn not_found(entity: impl Into<String>, id: i64) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id,
        }
    }
}

/// Wire shape of every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, kind, message, details) = match self {
            ServiceError::Validation { message, fields } => {
                let details = if fields.is_empty() { None } else { Some(fields) };
                (StatusCode::BAD_REQUEST, "validation_error", message, details)
            }
            ServiceError::BadData { message } => {
                (StatusCode::BAD_REQUEST, "bad_request", message, None)
            }
            ServiceError::UnsupportedMediaType { message } => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "unsupported_media_type",
                message,
                None,
            ),
            ServiceError::NotFound { entity, id } => (
                StatusCode::NOT_FOUND,
                "not_found",
                format!("{entity} with id [{id}] could not be found"),
                None,
            ),
            ServiceError::Database(source) => {
                tracing::error!("Database error: {source}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "database_error",
                    "Internal server error".to_string(),
                    None,
                )
            }
        };

        let body = ErrorBody {
            error: kind.to_string(),
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}
