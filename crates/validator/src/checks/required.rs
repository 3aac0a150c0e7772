//! Presence check
//!
//! [`Required`] decides what "missing" means for each kind of value:
//!
//! | Value | Present when |
//! |---|---|
//! | absent | never |
//! | string | trimmed text is non-empty |
//! | bool | `true` |
//! | int / float | non-zero |
//! | id | hex form is non-empty |
//! | timestamp | not the zero instant (the Unix epoch) |
//! | sequence | at least one element |

use chrono::{DateTime, Utc};

use crate::foundation::Value;

crate::check! {
    /// Validates that a value is present and non-empty.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use tranzo_validator::checks::required;
    /// use tranzo_validator::foundation::{Check, Value};
    ///
    /// assert!(required().is_satisfied(&Value::from("a")));
    /// assert!(!required().is_satisfied(&Value::from("   ")));
    /// ```
    pub Required;
    satisfied(value) { is_present(value) }
    message { "Required".to_string() }
    fn required();
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Absent => false,
        Value::Str(s) => !s.trim().is_empty(),
        Value::Bool(b) => *b,
        Value::Int(n) => *n != 0,
        Value::Float(n) => *n != 0.0,
        Value::Id(id) => !id.to_hex().is_empty(),
        Value::Timestamp(at) => *at != DateTime::<Utc>::default(),
        Value::Seq(items) => !items.is_empty(),
    }
}
