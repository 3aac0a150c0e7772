//! Built-in checks
//!
//! # Categories
//!
//! - **Presence**: [`Required`]
//! - **Numeric**: [`Min`], [`Max`], [`MinFloat`], [`MaxFloat`], [`Range`], [`RangeFloat`]
//! - **Size**: [`MinSize`], [`MaxSize`], [`Length`]
//! - **Pattern**: [`Match`], [`Email`]
//!
//! Every check has a snake_case factory function of the same name.
//!
//! # Examples
//!
//! ```rust,ignore
//! use tranzo_validator::prelude::*;
//!
//! let mut v = Validation::new();
//! v.check(Value::Int(0), &[&min(1), &max(10)]).key("age");
//! assert_eq!(v.error_map()["age"], "Minimum is 1");
//! ```

pub mod pattern;
pub mod range;
pub mod required;
pub mod size;

pub use pattern::{Email, Match, email, matches};
pub use range::{
    Max, MaxFloat, Min, MinFloat, Range, RangeFloat, max, max_float, min, min_float, range,
    range_float,
};
pub use required::{Required, required};
pub use size::{Length, MaxSize, MinSize, length, max_size, min_size};
