//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the engine:
//!
//! - **Traits**: [`Check`], [`Validate`]
//! - **Values**: [`Value`], [`ObjectId`]
//! - **Errors**: [`ValidationError`], [`ErrorMap`], [`ConfigError`]
//!
//! # Architecture
//!
//! A check only answers "is this value acceptable" and "what is the default
//! message". Field keys, message overrides and error accumulation live in
//! [`Validation`](crate::context::Validation), so checks stay reusable across
//! records and passes.
//!
//! ```rust,ignore
//! use tranzo_validator::prelude::*;
//!
//! let check = range(1, 10);
//! assert!(check.is_satisfied(&Value::Int(5)));
//! assert_eq!(check.default_message(), "Range is 1 to 10");
//! ```

pub mod error;
pub mod traits;
pub mod value;

pub use error::{ConfigError, ErrorMap, ValidationError};
pub use traits::{Check, Validate};
pub use value::{ObjectId, Value};

/// Common imports for implementing checks.
pub mod prelude {
    pub use super::{Check, ErrorMap, ObjectId, Validate, ValidationError, Value};
}

// ============================================================================
// UTILITIES
// ============================================================================

/// Tests a value against every check, without recording anything.
///
/// Returns the first unsatisfied check, if any.
///
/// ```rust,ignore
/// use tranzo_validator::foundation::first_failure;
///
/// let failed = first_failure(&Value::Int(0), &[&min(1), &max(10)]);
/// assert_eq!(failed.map(|c| c.default_message()), Some("Minimum is 1".into()));
/// ```
pub fn first_failure<'c>(value: &Value, checks: &[&'c dyn Check]) -> Option<&'c dyn Check> {
    checks
        .iter()
        .copied()
        .find(|check| !check.is_satisfied(value))
}
