//! Validation system
//!
//! Request drafts derive [`validator::Validate`]. The same rules run twice:
//! at the HTTP boundary through the [`Validated`] extractor (reported field by
//! field) and again inside the services through [`check`] (reported as a
//! single invalid-argument rejection).

pub mod extractor;
pub mod validators;

pub use extractor::Validated;

use crate::core::error::{FieldValidationError, WorkforceError, WorkforceResult};
use validator::{Validate, ValidationErrors};

/// Flatten validator output into one entry per failing field, sorted by name
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldValidationError> {
    let mut fields: Vec<FieldValidationError> = errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, errs)| {
            errs.first().map(|err| FieldValidationError {
                field: field.to_string(),
                message: err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string()),
            })
        })
        .collect();
    fields.sort_by(|a, b| a.field.cmp(&b.field));
    fields
}

/// Run the validation rules of `draft`, rejecting with an invalid argument
pub fn check<T: Validate>(draft: &T) -> WorkforceResult<()> {
    draft.validate().map_err(|errors| {
        let summary = field_errors(&errors)
            .into_iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect::<Vec<_>>()
            .join(", ");
        WorkforceError::invalid_argument(summary)
    })
}
