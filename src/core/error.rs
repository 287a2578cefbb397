//! Typed error handling for the workforce service
//!
//! Every layer returns [`WorkforceError`]. The rule engine raises the domain
//! categories, the persistence gateway raises [`StorageError`] (or a duplicate
//! error when a unique constraint fires), and the request boundary turns any
//! of them into an HTTP response through [`IntoResponse`].
//!
//! # Error Categories
//!
//! - [`EntityError`]: missing entities and uniqueness violations
//! - [`RuleError`]: business rule rejections (bad arguments, forbidden state)
//! - [`ValidationError`]: structural payload rejections, reported per field
//! - [`StorageError`]: failures of the persistence gateway
//!
//! # Example
//!
//! ```rust,ignore
//! match employees.fetch_by_id(id).await {
//!     Ok(employee) => println!("{}", employee.full_name()),
//!     Err(WorkforceError::Entity(EntityError::NotFound { id, .. })) => {
//!         println!("no employee {}", id);
//!     }
//!     Err(e) => eprintln!("other error: {}", e),
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// Message returned to clients for failures whose details must stay internal
const GENERIC_FAILURE_MESSAGE: &str =
    "An unexpected error occurred. Please contact the administrator.";

/// The main error type of the crate
#[derive(Debug, Error)]
pub enum WorkforceError {
    /// Missing entities and uniqueness violations
    #[error(transparent)]
    Entity(#[from] EntityError),

    /// Business rule rejections
    #[error(transparent)]
    Rule(#[from] RuleError),

    /// Payload validation errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Persistence gateway errors
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Anything else (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl WorkforceError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            WorkforceError::Entity(e) => e.status_code(),
            WorkforceError::Rule(e) => e.status_code(),
            WorkforceError::Validation(_) => StatusCode::BAD_REQUEST,
            WorkforceError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            WorkforceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            WorkforceError::Entity(e) => e.error_code(),
            WorkforceError::Rule(e) => e.error_code(),
            WorkforceError::Validation(e) => e.error_code(),
            WorkforceError::Storage(_) => "STORAGE_ERROR",
            WorkforceError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether the message may be shown to the caller as is
    fn is_public(&self) -> bool {
        !matches!(
            self,
            WorkforceError::Storage(_) | WorkforceError::Internal(_)
        )
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        let message = if self.is_public() {
            self.to_string()
        } else {
            GENERIC_FAILURE_MESSAGE.to_string()
        };

        ErrorResponse {
            code: self.error_code().to_string(),
            message,
            details: self.details(),
        }
    }

    /// Get additional details for the error
    fn details(&self) -> Option<serde_json::Value> {
        match self {
            WorkforceError::Entity(EntityError::NotFound { entity_type, id }) => {
                Some(serde_json::json!({
                    "entity_type": entity_type,
                    "id": id.to_string()
                }))
            }
            WorkforceError::Entity(EntityError::NotFoundByKey {
                entity_type,
                field,
                value,
            }) => Some(serde_json::json!({
                "entity_type": entity_type,
                field.as_str(): value
            })),
            WorkforceError::Validation(ValidationError::FieldErrors(errors)) => {
                let fields: serde_json::Map<String, serde_json::Value> = errors
                    .iter()
                    .map(|e| (e.field.clone(), serde_json::Value::String(e.message.clone())))
                    .collect();
                Some(serde_json::json!({ "fields": fields }))
            }
            _ => None,
        }
    }

    /// Shorthand for a [`RuleError::InvalidArgument`]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        WorkforceError::Rule(RuleError::InvalidArgument {
            message: message.into(),
        })
    }

    /// Shorthand for a [`RuleError::InvalidState`]
    pub fn invalid_state(message: impl Into<String>) -> Self {
        WorkforceError::Rule(RuleError::InvalidState {
            message: message.into(),
        })
    }

    /// Shorthand for an [`EntityError::NotFound`]
    pub fn not_found(entity_type: &str, id: Uuid) -> Self {
        WorkforceError::Entity(EntityError::NotFound {
            entity_type: entity_type.to_string(),
            id,
        })
    }
}

impl IntoResponse for WorkforceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, code = self.error_code(), "request failed");
        }
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Entity Errors
// =============================================================================

/// Errors related to entity lookups and uniqueness
#[derive(Debug, Error)]
pub enum EntityError {
    /// Entity was not found by identity
    #[error("{entity_type} with id '{id}' not found")]
    NotFound { entity_type: String, id: Uuid },

    /// Entity was not found by a natural key (email, name)
    #[error("{entity_type} with {field} '{value}' not found")]
    NotFoundByKey {
        entity_type: String,
        field: String,
        value: String,
    },

    /// Another employee already uses this email
    #[error("An employee with email '{email}' already exists")]
    DuplicateEmail { email: String },

    /// Another entity of the same type already uses this name
    #[error("A {entity_type} named '{name}' already exists")]
    DuplicateName { entity_type: String, name: String },
}

impl EntityError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            EntityError::NotFound { .. } => StatusCode::NOT_FOUND,
            EntityError::NotFoundByKey { .. } => StatusCode::NOT_FOUND,
            EntityError::DuplicateEmail { .. } => StatusCode::CONFLICT,
            EntityError::DuplicateName { .. } => StatusCode::CONFLICT,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            EntityError::NotFound { .. } => "ENTITY_NOT_FOUND",
            EntityError::NotFoundByKey { .. } => "ENTITY_NOT_FOUND",
            EntityError::DuplicateEmail { .. } => "DUPLICATE_EMAIL",
            EntityError::DuplicateName { .. } => "DUPLICATE_NAME",
        }
    }
}

// =============================================================================
// Rule Errors
// =============================================================================

/// Rejections raised by the rule engine
#[derive(Debug, Error)]
pub enum RuleError {
    /// Malformed or semantically invalid input, including cross-field checks
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Operation forbidden by the current relationships
    #[error("Invalid state: {message}")]
    InvalidState { message: String },
}

impl RuleError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RuleError::InvalidArgument { .. } => StatusCode::BAD_REQUEST,
            RuleError::InvalidState { .. } => StatusCode::CONFLICT,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RuleError::InvalidArgument { .. } => "INVALID_ARGUMENT",
            RuleError::InvalidState { .. } => "INVALID_STATE",
        }
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to request payload validation
#[derive(Debug, Error)]
pub enum ValidationError {
    /// One or more fields failed validation
    #[error("Validation errors: {}", join_field_errors(.0))]
    FieldErrors(Vec<FieldValidationError>),

    /// Body is not valid JSON for the expected shape
    #[error("Invalid JSON: {message}")]
    InvalidJson { message: String },

    /// Path segment is not a UUID
    #[error("Invalid UUID format: {value}")]
    InvalidUuid { value: String },

    /// Query string could not be parsed
    #[error("Invalid query: {message}")]
    InvalidQuery { message: String },
}

/// A single field validation error
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldValidationError {
    pub field: String,
    pub message: String,
}

fn join_field_errors(errors: &[FieldValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::FieldErrors(_) => "VALIDATION_ERROR",
            ValidationError::InvalidJson { .. } => "INVALID_JSON",
            ValidationError::InvalidUuid { .. } => "INVALID_UUID",
            ValidationError::InvalidQuery { .. } => "INVALID_QUERY",
        }
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors raised by the persistence gateway
#[derive(Debug, Error)]
pub enum StorageError {
    /// Could not reach the backend
    #[error("Failed to connect to {backend}: {message}")]
    ConnectionError { backend: String, message: String },

    /// Query execution failed
    #[error("{backend} query error: {message}")]
    QueryError { backend: String, message: String },

    /// An in-process lock was poisoned by a panicking writer
    #[error("Storage lock poisoned: {message}")]
    Poisoned { message: String },
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<serde_json::Error> for WorkforceError {
    fn from(err: serde_json::Error) -> Self {
        WorkforceError::Validation(ValidationError::InvalidJson {
            message: err.to_string(),
        })
    }
}

impl From<uuid::Error> for WorkforceError {
    fn from(err: uuid::Error) -> Self {
        WorkforceError::Validation(ValidationError::InvalidUuid {
            value: err.to_string(),
        })
    }
}

/// Anything that is not a domain error lands in the generic bucket
impl From<anyhow::Error> for WorkforceError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<WorkforceError>() {
            Ok(err) => err,
            Err(err) => WorkforceError::Internal(err.to_string()),
        }
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for workforce operations
pub type WorkforceResult<T> = Result<T, WorkforceError>;

// =============================================================================
// Tests
// =============================================================================
