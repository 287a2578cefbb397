//! Axum extractor for validated request payloads
//!
//! This module provides the `Validated<T>` extractor that deserializes and
//! validates request payloads before they reach handlers.

use super::field_errors;
use crate::core::error::{ValidationError, WorkforceError};
use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Axum extractor that deserializes a JSON body and runs its validation rules
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_employee(
///     State(state): State<AppState>,
///     Validated(draft): Validated<EmployeeDraft>,
/// ) -> WorkforceResult<(StatusCode, Json<Employee>)> {
///     // draft passed every field rule
/// }
/// ```
#[derive(Debug)]
pub struct Validated<T>(pub T);

impl<T> Validated<T> {
    /// Get the inner payload
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> std::ops::Deref for Validated<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S, T> FromRequest<S> for Validated<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + Send,
{
    type Rejection = WorkforceError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state).await.map_err(|e| {
            WorkforceError::Validation(ValidationError::InvalidJson {
                message: e.body_text(),
            })
        })?;

        payload.validate().map_err(|errors| {
            WorkforceError::Validation(ValidationError::FieldErrors(field_errors(&errors)))
        })?;

        Ok(Validated(payload))
    }
}
