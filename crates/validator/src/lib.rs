//! # tranzo-validator
//!
//! Field validation engine: data-model types declare checks against their
//! fields, a [`Validation`](context::Validation) context applies them and
//! accumulates failures keyed by field name, and the finished
//! [`ErrorMap`](foundation::ErrorMap) is reported back as a `400` body.
//!
//! ## Quick Start
//!
//! ```
//! use tranzo_validator::prelude::*;
//!
//! let mut v = Validation::new();
//! v.required("").key("name").message("Name is missing");
//! v.check(Value::Int(0), &[&min(1), &max(10)]).key("age");
//! v.field("email").email("not-an-address");
//!
//! assert!(v.has_errors());
//! let errors = v.error_map();
//! assert_eq!(errors["name"], "Name is missing");
//! assert_eq!(errors["age"], "Minimum is 1");
//! assert_eq!(errors["email"], "Must be a valid email address");
//! ```
//!
//! ## Creating Checks
//!
//! Use the [`check!`] macro for zero-boilerplate checks,
//! or implement [`Check`](foundation::Check) manually for complex cases.
//!
//! ## Built-in Checks
//!
//! - **Presence**: [`Required`](checks::Required)
//! - **Numeric**: [`Min`](checks::Min), [`Max`](checks::Max), [`Range`](checks::Range),
//!   and their float variants
//! - **Size**: [`MinSize`](checks::MinSize), [`MaxSize`](checks::MaxSize),
//!   [`Length`](checks::Length)
//! - **Pattern**: [`Match`](checks::Match), [`Email`](checks::Email)
//!
//! ## Default keys
//!
//! A failure recorded without `.key(...)` is reported under the field that a
//! [`DefaultKeys`](context::DefaultKeys) table registers for the calling
//! source line, or under the empty key when none is registered.

pub mod checks;
pub mod context;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod response;
