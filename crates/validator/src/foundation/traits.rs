//! Core traits for the validation system
//!
//! [`Check`] is implemented by every rule object; [`Validate`] is implemented
//! by record types that run a set of checks against their own fields.

use std::fmt;
use std::sync::Arc;

use crate::context::{DefaultKeys, Validation};
use crate::foundation::{ErrorMap, Value};

// ============================================================================
// CHECK TRAIT
// ============================================================================

/// A stateless rule tested against one value.
///
/// Checks carry only their parameters, so a single instance can be shared by
/// any number of validation passes, including across threads.
///
/// # Examples
///
/// ```rust,ignore
/// use tranzo_validator::foundation::{Check, Value};
///
/// #[derive(Debug)]
/// struct Even;
///
/// impl Check for Even {
///     fn is_satisfied(&self, value: &Value) -> bool {
///         matches!(value, Value::Int(n) if n % 2 == 0)
///     }
///
///     fn default_message(&self) -> String {
///         "Must be even".to_string()
///     }
/// }
/// ```
pub trait Check: fmt::Debug + Send + Sync {
    /// Returns true when `value` meets the constraint.
    ///
    /// Must be a pure function of `self` and `value`. A value of a variant the
    /// check does not understand is not satisfied.
    fn is_satisfied(&self, value: &Value) -> bool;

    /// The message recorded when the check fails and the caller does not
    /// override it.
    fn default_message(&self) -> String;
}

impl<C: Check + ?Sized> Check for &C {
    fn is_satisfied(&self, value: &Value) -> bool {
        (**self).is_satisfied(value)
    }

    fn default_message(&self) -> String {
        (**self).default_message()
    }
}

impl<C: Check + ?Sized> Check for Box<C> {
    fn is_satisfied(&self, value: &Value) -> bool {
        (**self).is_satisfied(value)
    }

    fn default_message(&self) -> String {
        (**self).default_message()
    }
}

// ============================================================================
// RECORD VALIDATION
// ============================================================================

/// Implemented by record types that validate their own fields.
///
/// Implementors only write [`rules`](Validate::rules); [`validate`](Validate::validate)
/// runs them on a fresh [`Validation`] and reports the outcome.
///
/// ```rust,ignore
/// impl Validate for Details {
///     fn rules(&self, v: &mut Validation) {
///         v.required(self.name.as_str()).key("name").message("Name is missing");
///     }
/// }
///
/// let (has_errors, errors) = details.validate();
/// ```
pub trait Validate {
    /// Runs this record's checks against `validation`.
    fn rules(&self, validation: &mut Validation);

    /// Validates the record on a fresh context.
    ///
    /// Returns whether any check failed, and the first message per key.
    fn validate(&self) -> (bool, ErrorMap) {
        finish(self, Validation::new())
    }

    /// Validates the record on a fresh context that resolves default keys
    /// from `keys`.
    fn validate_with(&self, keys: Arc<DefaultKeys>) -> (bool, ErrorMap) {
        finish(self, Validation::with_default_keys(keys))
    }
}

fn finish<R: Validate + ?Sized>(record: &R, mut validation: Validation) -> (bool, ErrorMap) {
    record.rules(&mut validation);
    (validation.has_errors(), validation.error_map())
}
