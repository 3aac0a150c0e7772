//! Key-first check builder.

use regex::Regex;

use super::{Validation, ValidationResult};
use crate::foundation::{Check, Value};

/// A [`Validation`] with a field key already chosen.
///
/// Returned by [`Validation::field`]. Each method runs the matching check on
/// the context and reports any failure under the bound key, overriding the
/// call-site default.
#[derive(Debug)]
#[must_use = "a field binding does nothing until a check is run"]
pub struct FieldValidation<'a> {
    validation: &'a mut Validation,
    key: String,
}

impl<'a> FieldValidation<'a> {
    pub(super) fn new(validation: &'a mut Validation, key: String) -> Self {
        Self { validation, key }
    }

    fn into_parts(self) -> (&'a mut Validation, String) {
        (self.validation, self.key)
    }

    /// The bound key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// See [`Validation::check`].
    #[track_caller]
    pub fn check(self, value: impl Into<Value>, checks: &[&dyn Check]) -> ValidationResult<'a> {
        let (validation, key) = self.into_parts();
        validation.check(value, checks).key(key)
    }

    /// See [`Validation::required`].
    #[track_caller]
    pub fn required(self, value: impl Into<Value>) -> ValidationResult<'a> {
        let (validation, key) = self.into_parts();
        validation.required(value).key(key)
    }

    /// See [`Validation::min`].
    #[track_caller]
    pub fn min(self, n: i64, min: i64) -> ValidationResult<'a> {
        let (validation, key) = self.into_parts();
        validation.min(n, min).key(key)
    }

    /// See [`Validation::max`].
    #[track_caller]
    pub fn max(self, n: i64, max: i64) -> ValidationResult<'a> {
        let (validation, key) = self.into_parts();
        validation.max(n, max).key(key)
    }

    /// See [`Validation::min_float`].
    #[track_caller]
    pub fn min_float(self, n: f64, min: f64) -> ValidationResult<'a> {
        let (validation, key) = self.into_parts();
        validation.min_float(n, min).key(key)
    }

    /// See [`Validation::max_float`].
    #[track_caller]
    pub fn max_float(self, n: f64, max: f64) -> ValidationResult<'a> {
        let (validation, key) = self.into_parts();
        validation.max_float(n, max).key(key)
    }

    /// See [`Validation::range`].
    #[track_caller]
    pub fn range(self, n: i64, min: i64, max: i64) -> ValidationResult<'a> {
        let (validation, key) = self.into_parts();
        validation.range(n, min, max).key(key)
    }

    /// See [`Validation::range_float`].
    #[track_caller]
    pub fn range_float(self, n: f64, min: f64, max: f64) -> ValidationResult<'a> {
        let (validation, key) = self.into_parts();
        validation.range_float(n, min, max).key(key)
    }

    /// See [`Validation::min_size`].
    #[track_caller]
    pub fn min_size(self, value: impl Into<Value>, min: usize) -> ValidationResult<'a> {
        let (validation, key) = self.into_parts();
        validation.min_size(value, min).key(key)
    }

    /// See [`Validation::max_size`].
    #[track_caller]
    pub fn max_size(self, value: impl Into<Value>, max: usize) -> ValidationResult<'a> {
        let (validation, key) = self.into_parts();
        validation.max_size(value, max).key(key)
    }

    /// See [`Validation::length`].
    #[track_caller]
    pub fn length(self, value: impl Into<Value>, length: usize) -> ValidationResult<'a> {
        let (validation, key) = self.into_parts();
        validation.length(value, length).key(key)
    }

    /// See [`Validation::matches`].
    #[track_caller]
    pub fn matches(self, text: &str, pattern: &Regex) -> ValidationResult<'a> {
        let (validation, key) = self.into_parts();
        validation.matches(text, pattern).key(key)
    }

    /// See [`Validation::email`].
    #[track_caller]
    pub fn email(self, text: &str) -> ValidationResult<'a> {
        let (validation, key) = self.into_parts();
        validation.email(text).key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::length;

    #[test]
    fn bound_key_applies_to_failure() {
        let mut v = Validation::new();
        v.field("code").check("abc", &[&length(2)]);
        assert_eq!(v.error_map()["code"], "Required length is 2");
    }

    #[test]
    fn bound_key_allows_message_override() {
        let mut v = Validation::new();
        v.field("age").range(200, 0, 150).message("Age is implausible");
        assert_eq!(v.errors()[0].key, "age");
        assert_eq!(v.errors()[0].message, "Age is implausible");
    }

    #[test]
    fn passing_check_records_nothing() {
        let mut v = Validation::new();
        assert!(v.field("name").required("Alex").is_ok());
        assert!(!v.has_errors());
    }
}
