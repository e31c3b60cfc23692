//! Explicit request validation.
//!
//! DTOs implement [`validator::Validate`] by hand using the rule helpers
//! below, so every failure is recorded as a `{field, constraint}` pair that
//! [`violations`] flattens into the error body's `details`.
//!
//! ```ignore
//! impl Validate for CreateMaterial {
//!     fn validate(&self) -> Result<(), ValidationErrors> {
//!         let mut errors = ValidationErrors::new();
//!         require_non_blank(&mut errors, "name", &self.name);
//!         require_min(&mut errors, "quantity", i64::from(self.quantity), 0);
//!         into_result(errors)
//!     }
//! }
//! ```

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{ValidationError, ValidationErrors};

/// One failed rule on one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldViolation {
    /// JSON field name as sent by the client (camelCase)
    #[schema(example = "quantity")]
    pub field: String,
    /// Rule identifier, e.g. `required` or `min`
    #[schema(example = "min")]
    pub constraint: String,
    #[schema(example = "quantity must not be less than 0")]
    pub message: String,
}

impl FieldViolation {
    pub fn new(
        field: impl Into<String>,
        constraint: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            constraint: constraint.into(),
            message: message.into(),
        }
    }
}

/// Flattens validator errors into violations sorted by field, then constraint.
pub fn violations(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut out: Vec<FieldViolation> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = field.to_string();
            errs.iter().map(move |err| {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid"));
                FieldViolation::new(field.clone(), err.code.to_string(), message)
            })
        })
        .collect();

    out.sort_by(|a, b| {
        a.field
            .cmp(&b.field)
            .then_with(|| a.constraint.cmp(&b.constraint))
    });
    out
}

/// Records a `required` failure when `value` is empty or whitespace only.
pub fn require_non_blank(errors: &mut ValidationErrors, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        errors.add(
            field,
            violation("required", format!("{field} should not be empty")),
        );
    }
}

/// Like [`require_non_blank`] for a field that must be present.
pub fn require_present(errors: &mut ValidationErrors, field: &'static str, value: Option<&str>) {
    match value {
        Some(value) => require_non_blank(errors, field, value),
        None => errors.add(field, violation("required", format!("{field} is required"))),
    }
}

/// Records a `min` failure when `value < min`.
pub fn require_min(errors: &mut ValidationErrors, field: &'static str, value: i64, min: i64) {
    if value < min {
        let mut err = violation("min", format!("{field} must not be less than {min}"));
        err.add_param(Cow::Borrowed("min"), &min);
        err.add_param(Cow::Borrowed("value"), &value);
        errors.add(field, err);
    }
}

/// `Ok(())` when no rule failed.
pub fn into_result(errors: ValidationErrors) -> Result<(), ValidationErrors> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn violation(constraint: &'static str, message: String) -> ValidationError {
    ValidationError::new(constraint).with_message(Cow::Owned(message))
}
