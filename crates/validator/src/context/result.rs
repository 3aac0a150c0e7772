//! Outcome of a single check application.

use std::fmt;

use crate::foundation::ValidationError;

/// Result of applying one check through a [`Validation`](super::Validation).
///
/// A failed result borrows the error it just recorded, so [`key`](Self::key)
/// and [`message`](Self::message) rewrite that error in place. Both are no-ops
/// on a successful result.
///
/// ```rust,ignore
/// v.required(name).key("name").message("Name is missing");
/// v.min(age, 18).message(format_args!("{name} is too young"));
/// ```
#[derive(Debug)]
pub struct ValidationResult<'a> {
    ok: bool,
    error: Option<&'a mut ValidationError>,
}

impl<'a> ValidationResult<'a> {
    pub(crate) fn passed() -> Self {
        Self {
            ok: true,
            error: None,
        }
    }

    pub(crate) fn failed(error: &'a mut ValidationError) -> Self {
        Self {
            ok: false,
            error: Some(error),
        }
    }

    /// Returns true when the check was satisfied.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.ok
    }

    /// The recorded error, when the check failed.
    #[must_use]
    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_deref()
    }

    /// Reports the error under `key`.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        if let Some(error) = self.error.as_deref_mut() {
            error.key = key.into();
        }
        self
    }

    /// Replaces the error message.
    ///
    /// Accepts anything [`Display`](fmt::Display), including `format_args!`.
    pub fn message(mut self, message: impl fmt::Display) -> Self {
        if let Some(error) = self.error.as_deref_mut() {
            error.message = message.to_string();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passed_result_ignores_key_and_message() {
        let result = ValidationResult::passed().key("name").message("ignored");
        assert!(result.is_ok());
        assert!(result.error().is_none());
    }

    #[test]
    fn failed_result_rewrites_error() {
        let mut error = ValidationError::new("Required");
        let result = ValidationResult::failed(&mut error)
            .key("age")
            .message(format_args!("Age {} is missing", "field"));
        assert!(!result.is_ok());
        assert_eq!(result.error().map(|e| e.key.as_str()), Some("age"));
        drop(result);
        assert_eq!(error.message, "Age field is missing");
    }
}
