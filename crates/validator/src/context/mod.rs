//! Validation context
//!
//! A [`Validation`] applies checks to values and accumulates the failures of
//! one validation pass, in invocation order. Callers attach a field key to
//! each failure either explicitly (`.key(...)` or [`Validation::field`]) or
//! implicitly through a [`DefaultKeys`] table keyed by call site.
//!
//! # Examples
//!
//! ```
//! use tranzo_validator::context::Validation;
//!
//! let mut v = Validation::new();
//! v.required("").key("name").message("Name is missing");
//! v.range(42, 1, 10).key("age");
//!
//! assert!(v.has_errors());
//! let errors = v.error_map();
//! assert_eq!(errors["name"], "Name is missing");
//! assert_eq!(errors["age"], "Range is 1 to 10");
//! ```

mod field;
mod keys;
mod result;

use std::fmt;
use std::panic::Location;
use std::sync::Arc;

use regex::Regex;

pub use field::FieldValidation;
pub use keys::{DefaultKeys, DefaultKeysBuilder};
pub use result::ValidationResult;

use crate::checks::{
    Email, Length, Match, Max, MaxFloat, MaxSize, Min, MinFloat, MinSize, Range, RangeFloat,
    Required,
};
use crate::foundation::{Check, ErrorMap, ValidationError, Value, first_failure};
use crate::response::ValidationRejection;

/// Accumulates the errors of one validation pass.
///
/// Every check method is `#[track_caller]`: when the check fails, the caller's
/// source location is looked up in the attached [`DefaultKeys`] to find a
/// default field key.
#[derive(Debug, Default)]
pub struct Validation {
    errors: Vec<ValidationError>,
    keep: bool,
    default_keys: Option<Arc<DefaultKeys>>,
}

impl Validation {
    /// Creates an empty context with no default keys.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty context that resolves default keys from `keys`.
    #[must_use]
    pub fn with_default_keys(keys: Arc<DefaultKeys>) -> Self {
        Self {
            default_keys: Some(keys),
            ..Self::default()
        }
    }

    // ------------------------------------------------------------------------
    // Generic application
    // ------------------------------------------------------------------------

    /// Applies one check to `value`.
    ///
    /// Nothing is recorded when the check is satisfied.
    #[track_caller]
    pub fn apply(&mut self, check: &dyn Check, value: &Value) -> ValidationResult<'_> {
        if check.is_satisfied(value) {
            return ValidationResult::passed();
        }
        self.fail(check)
    }

    /// Applies `checks` in order and stops at the first failure.
    ///
    /// Returns the failing result, or an ok result when every check passes
    /// (including when `checks` is empty).
    #[track_caller]
    pub fn check(
        &mut self,
        value: impl Into<Value>,
        checks: &[&dyn Check],
    ) -> ValidationResult<'_> {
        let value = value.into();
        match first_failure(&value, checks) {
            Some(failed) => self.fail(failed),
            None => ValidationResult::passed(),
        }
    }

    #[track_caller]
    fn fail(&mut self, check: &dyn Check) -> ValidationResult<'_> {
        let key = self.default_key(Location::caller());
        self.record(ValidationError::new(check.default_message()).with_key(key))
    }

    fn default_key(&self, location: &Location<'_>) -> String {
        let found = self
            .default_keys
            .as_deref()
            .and_then(|keys| keys.lookup(location));
        match found {
            Some(field) => field.to_owned(),
            None => {
                tracing::trace!(
                    file = location.file(),
                    line = location.line(),
                    "no default key for call site"
                );
                String::new()
            }
        }
    }

    fn record(&mut self, error: ValidationError) -> ValidationResult<'_> {
        tracing::trace!(key = %error.key, message = %error.message, "check failed");
        let at = self.errors.len();
        self.errors.push(error);
        ValidationResult::failed(&mut self.errors[at])
    }

    // ------------------------------------------------------------------------
    // Convenience checks
    // ------------------------------------------------------------------------

    /// The value is present and non-empty.
    #[track_caller]
    pub fn required(&mut self, value: impl Into<Value>) -> ValidationResult<'_> {
        self.apply(&Required, &value.into())
    }

    /// `n >= min`.
    #[track_caller]
    pub fn min(&mut self, n: i64, min: i64) -> ValidationResult<'_> {
        self.apply(&Min::new(min), &Value::Int(n))
    }

    /// `n <= max`.
    #[track_caller]
    pub fn max(&mut self, n: i64, max: i64) -> ValidationResult<'_> {
        self.apply(&Max::new(max), &Value::Int(n))
    }

    /// `n >= min` for floats.
    #[track_caller]
    pub fn min_float(&mut self, n: f64, min: f64) -> ValidationResult<'_> {
        self.apply(&MinFloat::new(min), &Value::Float(n))
    }

    /// `n <= max` for floats.
    #[track_caller]
    pub fn max_float(&mut self, n: f64, max: f64) -> ValidationResult<'_> {
        self.apply(&MaxFloat::new(max), &Value::Float(n))
    }

    /// `min <= n <= max`.
    #[track_caller]
    pub fn range(&mut self, n: i64, min: i64, max: i64) -> ValidationResult<'_> {
        self.apply(&Range::new(min, max), &Value::Int(n))
    }

    /// `min <= n <= max` for floats.
    #[track_caller]
    pub fn range_float(&mut self, n: f64, min: f64, max: f64) -> ValidationResult<'_> {
        self.apply(&RangeFloat::new(min, max), &Value::Float(n))
    }

    /// A string or sequence has at least `min` elements.
    #[track_caller]
    pub fn min_size(&mut self, value: impl Into<Value>, min: usize) -> ValidationResult<'_> {
        self.apply(&MinSize::new(min), &value.into())
    }

    /// A string or sequence has at most `max` elements.
    #[track_caller]
    pub fn max_size(&mut self, value: impl Into<Value>, max: usize) -> ValidationResult<'_> {
        self.apply(&MaxSize::new(max), &value.into())
    }

    /// A trimmed string, or a sequence, has exactly `length` elements.
    #[track_caller]
    pub fn length(&mut self, value: impl Into<Value>, length: usize) -> ValidationResult<'_> {
        self.apply(&Length::new(length), &value.into())
    }

    /// `text` matches `pattern`.
    #[track_caller]
    pub fn matches(&mut self, text: &str, pattern: &Regex) -> ValidationResult<'_> {
        self.apply(&Match::from_regex(pattern.clone()), &Value::from(text))
    }

    /// `text` is a well-formed email address.
    #[track_caller]
    pub fn email(&mut self, text: &str) -> ValidationResult<'_> {
        self.apply(&Email::new(), &Value::from(text))
    }

    /// Binds `key` to the next check, so it is reported under that field.
    ///
    /// ```
    /// use tranzo_validator::context::Validation;
    ///
    /// let mut v = Validation::new();
    /// v.field("name").required("  ");
    /// assert_eq!(v.error_map()["name"], "Required");
    /// ```
    pub fn field(&mut self, key: impl Into<String>) -> FieldValidation<'_> {
        FieldValidation::new(self, key.into())
    }

    // ------------------------------------------------------------------------
    // Recording and reporting
    // ------------------------------------------------------------------------

    /// Records a custom error with no key.
    pub fn error(&mut self, message: impl fmt::Display) -> ValidationResult<'_> {
        self.record(ValidationError::new(message.to_string()))
    }

    /// Returns true when at least one error has been recorded.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// All recorded errors, in the order they were recorded.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Key → message, keeping the first error recorded for each key.
    #[must_use]
    pub fn error_map(&self) -> ErrorMap {
        let mut map = ErrorMap::with_capacity(self.errors.len());
        for error in &self.errors {
            map.entry(error.key.clone())
                .or_insert_with(|| error.message.clone());
        }
        map
    }

    /// The 400 response body, or `None` when nothing failed.
    #[must_use]
    pub fn rejection(&self) -> Option<ValidationRejection> {
        self.has_errors()
            .then(|| ValidationRejection::new(self.error_map()))
    }

    /// Discards all recorded errors.
    pub fn clear(&mut self) {
        self.errors.clear();
    }

    /// Asks the surrounding request handling to carry these errors forward.
    pub fn keep(&mut self) {
        self.keep = true;
    }

    /// Returns true once [`keep`](Self::keep) has been called.
    #[must_use]
    pub fn is_kept(&self) -> bool {
        self.keep
    }
}
