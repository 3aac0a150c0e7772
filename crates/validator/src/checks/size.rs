//! Size and length checks
//!
//! Strings are measured in UTF-8 bytes; sequences by element count. Any other
//! value is not satisfied.

use crate::foundation::Value;

/// Measures a string or sequence; `None` for any other value.
fn size_of(value: &Value) -> Option<usize> {
    match value {
        Value::Str(s) => Some(s.len()),
        Value::Seq(items) => Some(items.len()),
        _ => None,
    }
}

// ============================================================================
// MIN SIZE
// ============================================================================

crate::check! {
    /// Validates that a string or sequence has at least `min` elements.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinSize { min: usize };
    satisfied(self, value) { size_of(value).is_some_and(|size| size >= self.min) }
    message(self) { format!("Minimum size is {}", self.min) }
    fn min_size(min: usize);
}

// ============================================================================
// MAX SIZE
// ============================================================================

crate::check! {
    /// Validates that a string or sequence has at most `max` elements.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxSize { max: usize };
    satisfied(self, value) { size_of(value).is_some_and(|size| size <= self.max) }
    message(self) { format!("Maximum size is {}", self.max) }
    fn max_size(max: usize);
}

// ============================================================================
// EXACT LENGTH
// ============================================================================

crate::check! {
    /// Validates that a string or sequence has exactly `length` elements.
    ///
    /// Strings are trimmed before counting, so `"ab "` has length 2.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Length { length: usize };
    satisfied(self, value) {
        match value {
            Value::Str(s) => s.trim().len() == self.length,
            Value::Seq(items) => items.len() == self.length,
            _ => false,
        }
    }
    message(self) { format!("Required length is {}", self.length) }
    fn length(length: usize);
}

// ============================================================================
// TESTS
// ============================================================================
