//! Prelude module for convenient imports.
//!
//! Provides a single `use tranzo_validator::prelude::*;` import that brings
//! in the context, the traits, and every built-in check with its factory.
//!
//! # Examples
//!
//! ```rust,ignore
//! use tranzo_validator::prelude::*;
//!
//! let mut v = Validation::new();
//! v.check(Value::Int(0), &[&min(1), &max(10)]).key("age");
//! v.field("email").email("nope");
//! ```

// ============================================================================
// FOUNDATION: Core traits, values, errors
// ============================================================================

pub use crate::foundation::{
    Check, ConfigError, ErrorMap, ObjectId, Validate, ValidationError, Value,
};

// ============================================================================
// CONTEXT: Accumulating validation pass
// ============================================================================

pub use crate::context::{DefaultKeys, FieldValidation, Validation, ValidationResult};

// ============================================================================
// CHECKS: All built-in checks
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::checks::*;

// ============================================================================
// RESPONSE: Rejection body
// ============================================================================

pub use crate::response::ValidationRejection;
