//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes:
//! `{"success": false, "error": <status>, "message": <reason>, "detail": ...}`

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Input failed validation (422)
    Validation(ValidationError),

    /// Body isn't JSON at all (400)
    BadRequest { message: String },

    /// Record not found (404)
    NotFound { resource: &'static str, id: String },

    /// Collection or page is empty (404)
    Empty { resource: &'static str },

    /// Route exists but not for this method (405)
    MethodNotAllowed { method: String, path: String },

    /// Database error (500, logged)
    Database(DbError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } | Self::Empty { .. } => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// A page past the end of a listing.
    pub fn page_not_found(page: u32) -> Self {
        Self::NotFound {
            resource: "page",
            id: page.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (message, detail) = match &self {
            Self::Validation(e) => ("unprocessable", Some(e.to_string())),
            Self::BadRequest { message } => ("bad request", Some(message.clone())),
            Self::NotFound { resource, id } => {
                ("not found", Some(format!("{} '{}' not found", resource, id)))
            }
            Self::Empty { resource } => ("not found", Some(format!("no {} found", resource))),
            Self::MethodNotAllowed { method, path } => (
                "method not allowed",
                Some(format!("{} is not supported on {}", method, path)),
            ),
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                ("internal server error", None)
            }
        };

        let mut body = json!({
            "success": false,
            "error": status.as_u16(),
            "message": message,
        });
        if let Some(detail) = detail {
            body["detail"] = json!(detail);
        }

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            _ => Self::Database(e),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            // Valid JSON of the wrong shape
            JsonRejection::JsonDataError(e) => Self::Validation(ValidationError::InvalidFormat {
                field: "body",
                reason: e.body_text(),
            }),
            other => Self::BadRequest {
                message: other.body_text(),
            },
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Validation(ValidationError::InvalidFormat {
            field: "query",
            reason: rejection.body_text(),
        })
    }
}
