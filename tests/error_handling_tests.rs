//! Tests for the typed error handling system
//!
//! These tests verify that:
//! - Errors return correct HTTP status codes
//! - Error responses are properly formatted
//! - Error conversions work correctly
//! - Storage failures never leak into the response body

use axum::http::StatusCode;
use axum::response::IntoResponse;
use uuid::Uuid;
use workforce::core::error::{FieldValidationError, StorageError};
use workforce::prelude::*;

fn not_found() -> WorkforceError {
    WorkforceError::Entity(EntityError::NotFound {
        entity_type: "employee".to_string(),
        id: Uuid::nil(),
    })
}

fn field_errors() -> WorkforceError {
    WorkforceError::Validation(ValidationError::FieldErrors(vec![
        FieldValidationError {
            field: "email".to_string(),
            message: "must be a valid email address".to_string(),
        },
        FieldValidationError {
            field: "salary".to_string(),
            message: "must be at least 0.01".to_string(),
        },
    ]))
}

// =============================================================================
// HTTP Status Code Tests
// =============================================================================

mod status_code_tests {
    use super::*;

    #[test]
    fn test_not_found_returns_404() {
        assert_eq!(not_found().status_code(), StatusCode::NOT_FOUND);

        let by_key = WorkforceError::Entity(EntityError::NotFoundByKey {
            entity_type: "department".to_string(),
            field: "name".to_string(),
            value: "IT".to_string(),
        });
        assert_eq!(by_key.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_duplicates_return_409() {
        let email = WorkforceError::Entity(EntityError::DuplicateEmail {
            email: "juan@x.com".to_string(),
        });
        let name = WorkforceError::Entity(EntityError::DuplicateName {
            entity_type: "project".to_string(),
            name: "Alpha".to_string(),
        });
        assert_eq!(email.status_code(), StatusCode::CONFLICT);
        assert_eq!(name.status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_invalid_argument_returns_400_and_invalid_state_409() {
        assert_eq!(
            WorkforceError::invalid_argument("min > max").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            WorkforceError::invalid_state("department has employees").status_code(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_request_shape_errors_return_400() {
        let errors = [
            field_errors(),
            ValidationError::InvalidJson {
                message: "EOF".to_string(),
            }
            .into(),
            ValidationError::InvalidUuid {
                value: "42".to_string(),
            }
            .into(),
            ValidationError::InvalidQuery {
                message: "missing field `min`".to_string(),
            }
            .into(),
        ];
        for err in errors {
            assert_eq!(err.status_code(), StatusCode::BAD_REQUEST, "{}", err);
        }
    }

    #[test]
    fn test_storage_error_returns_500() {
        let err = WorkforceError::Storage(StorageError::QueryError {
            backend: "postgres".to_string(),
            message: "relation \"employees\" does not exist".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

// =============================================================================
// Error Code Tests
// =============================================================================

mod error_code_tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(not_found().error_code(), "ENTITY_NOT_FOUND");
        assert_eq!(field_errors().error_code(), "VALIDATION_ERROR");
        assert_eq!(
            WorkforceError::invalid_argument("x").error_code(),
            "INVALID_ARGUMENT"
        );
        assert_eq!(WorkforceError::invalid_state("x").error_code(), "INVALID_STATE");
        assert_eq!(
            WorkforceError::Internal("boom".to_string()).error_code(),
            "INTERNAL_ERROR"
        );
        assert_eq!(
            WorkforceError::Storage(StorageError::Poisoned {
                message: "lock".to_string()
            })
            .error_code(),
            "STORAGE_ERROR"
        );
    }
}

// =============================================================================
// Error Response Format Tests
// =============================================================================

mod error_response_tests {
    use super::*;

    #[test]
    fn test_error_response_has_code_and_message() {
        let response = WorkforceError::invalid_argument("min > max").to_response();
        assert_eq!(response.code, "INVALID_ARGUMENT");
        assert!(response.message.contains("min > max"));
        assert!(response.details.is_none());
    }

    #[test]
    fn test_not_found_details_name_the_entity() {
        let details = not_found().to_response().details.unwrap();
        assert_eq!(details["entity_type"], "employee");
        assert_eq!(details["id"], Uuid::nil().to_string());
    }

    #[test]
    fn test_field_errors_become_a_map() {
        let details = field_errors().to_response().details.unwrap();
        assert_eq!(details["fields"]["email"], "must be a valid email address");
        assert_eq!(details["fields"]["salary"], "must be at least 0.01");
    }

    #[test]
    fn test_internal_details_are_hidden() {
        let err = WorkforceError::Storage(StorageError::ConnectionError {
            backend: "postgres".to_string(),
            message: "password authentication failed for user \"admin\"".to_string(),
        });
        let response = err.to_response();
        assert_eq!(response.code, "STORAGE_ERROR");
        assert!(!response.message.contains("password"));
        assert!(response.details.is_none());
    }
}

// =============================================================================
// Error Conversion Tests
// =============================================================================

mod error_conversion_tests {
    use super::*;

    #[test]
    fn test_rule_error_converts() {
        let err: WorkforceError = RuleError::InvalidState {
            message: "busy".to_string(),
        }
        .into();
        assert!(matches!(err, WorkforceError::Rule(_)));
    }

    #[test]
    fn test_serde_json_error_converts_to_invalid_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: WorkforceError = json_err.into();
        assert_eq!(err.error_code(), "INVALID_JSON");
    }

    #[test]
    fn test_uuid_error_converts_to_invalid_uuid() {
        let uuid_err = Uuid::parse_str("not-a-uuid").unwrap_err();
        let err: WorkforceError = uuid_err.into();
        assert_eq!(err.error_code(), "INVALID_UUID");
    }

    #[test]
    fn test_anyhow_round_trip_keeps_the_kind() {
        let wrapped = anyhow::Error::from(not_found());
        let err: WorkforceError = wrapped.into();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

        let foreign: WorkforceError = anyhow::anyhow!("disk full").into();
        assert_eq!(foreign.error_code(), "INTERNAL_ERROR");
    }
}

// =============================================================================
// IntoResponse Tests
// =============================================================================

mod into_response_tests {
    use super::*;

    #[test]
    fn test_into_response_status() {
        assert_eq!(not_found().into_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(
            field_errors().into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            WorkforceError::Internal("boom".to_string())
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
