//! Request validation
//!
//! Services validate incoming payloads with the reusable checks in
//! [`validators`] and collect the failures with [`FieldChecks`]. A failed
//! check set becomes a single `VALIDATION_ERROR` carrying every field error.

pub mod validators;

use crate::core::error::{CafeError, CafeResult, FieldError};

/// Collects per-field validation results
///
/// # Example
///
/// ```rust,ignore
/// FieldChecks::new()
///     .check("name", validators::non_blank("name", payload.name.as_deref()))
///     .check("price", validators::positive("price", payload.price))
///     .into_result("Name and price are required")?;
/// ```
#[derive(Debug, Default)]
pub struct FieldChecks {
    errors: Vec<FieldError>,
}

impl FieldChecks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of one validator
    pub fn check(mut self, field: impl Into<String>, result: Result<(), String>) -> Self {
        if let Err(message) = result {
            self.errors.push(FieldError {
                field: field.into(),
                message,
            });
        }
        self
    }

    /// Merge the errors of another check set, prefixing their field names
    pub fn nested(mut self, prefix: &str, other: FieldChecks) -> Self {
        self.errors
            .extend(other.errors.into_iter().map(|e| FieldError {
                field: format!("{}.{}", prefix, e.field),
                message: e.message,
            }));
        self
    }

    /// Merge the errors of another check set as-is
    pub fn merge(mut self, other: FieldChecks) -> Self {
        self.errors.extend(other.errors);
        self
    }

    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Turn the collected errors into a `VALIDATION_ERROR` with `message`
    pub fn into_result(self, message: impl Into<String>) -> CafeResult<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(CafeError::Validation {
                message: message.into(),
                fields: self.errors,
            })
        }
    }
}
