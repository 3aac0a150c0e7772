//! Pattern checks
//!
//! [`Match`] tests a string against a regular expression; [`Email`] is a
//! [`Match`] with a fixed address pattern and its own message. Word
//! characters in the address pattern are ASCII only.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{Check, Value};

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[0-9A-Za-z_!#$%&'*+/=?^`{|}~-]+(?:\.[0-9A-Za-z_!#$%&'*+/=?^`{|}~-]+)*@(?:[0-9A-Za-z_](?:[0-9A-Za-z_-]*[0-9A-Za-z_])?\.)+[a-zA-Z0-9](?:[0-9A-Za-z_-]*[0-9A-Za-z_])?$",
    )
    .expect("email pattern is valid")
});

// ============================================================================
// MATCH
// ============================================================================

/// Validates that a string matches a regular expression.
///
/// Non-string values are not satisfied.
#[derive(Debug, Clone)]
pub struct Match {
    /// The compiled pattern.
    pub pattern: Regex,
}

impl Match {
    /// Compiles `pattern`.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    /// Wraps an already compiled pattern.
    #[must_use]
    pub fn from_regex(pattern: Regex) -> Self {
        Self { pattern }
    }

    /// Matches `text` literally anywhere in the input.
    ///
    /// ```
    /// use tranzo_validator::checks::Match;
    /// use tranzo_validator::foundation::{Check, Value};
    ///
    /// let check = Match::literal("a+b");
    /// assert!(check.is_satisfied(&Value::from("xa+by")));
    /// assert!(!check.is_satisfied(&Value::from("aab")));
    /// ```
    #[must_use]
    pub fn literal(text: &str) -> Self {
        Self::from_regex(Regex::new(&regex::escape(text)).expect("escaped literal is valid"))
    }

    fn matches(&self, value: &Value) -> bool {
        value.as_str().is_some_and(|s| self.pattern.is_match(s))
    }
}

impl Check for Match {
    fn is_satisfied(&self, value: &Value) -> bool {
        self.matches(value)
    }

    fn default_message(&self) -> String {
        format!("Must match {}", self.pattern.as_str())
    }
}

/// Creates a [`Match`] check from a pattern string.
pub fn matches(pattern: &str) -> Result<Match, regex::Error> {
    Match::new(pattern)
}

// ============================================================================
// EMAIL
// ============================================================================

/// Validates email address format.
#[derive(Debug, Clone)]
pub struct Email {
    inner: Match,
}

impl Email {
    /// Creates the check with the built-in address pattern.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Match::from_regex(EMAIL_REGEX.clone()),
        }
    }
}

impl Default for Email {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for Email {
    fn is_satisfied(&self, value: &Value) -> bool {
        self.inner.matches(value)
    }

    fn default_message(&self) -> String {
        "Must be a valid email address".to_string()
    }
}

/// Creates an [`Email`] check.
#[must_use]
pub fn email() -> Email {
    Email::new()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match() {
        let check = matches(r"^\d{3}-\d{4}$").unwrap();
        assert!(check.is_satisfied(&Value::from("123-4567")));
        assert!(!check.is_satisfied(&Value::from("invalid")));
        assert_eq!(check.default_message(), r"Must match ^\d{3}-\d{4}$");
    }

    #[test]
    fn test_match_rejects_bad_pattern() {
        assert!(matches("(unclosed").is_err());
    }

    #[test]
    fn test_match_non_string() {
        let check = matches(r"\d+").unwrap();
        assert!(!check.is_satisfied(&Value::Int(42)));
        assert!(!check.is_satisfied(&Value::Absent));
    }

    #[test]
    fn test_email() {
        let check = email();
        assert!(check.is_satisfied(&Value::from("user@example.com")));
        assert!(check.is_satisfied(&Value::from("first.last+tag@mail.example.co.uk")));
        assert!(!check.is_satisfied(&Value::from("invalid")));
        assert!(!check.is_satisfied(&Value::from("@example.com")));
        assert!(!check.is_satisfied(&Value::from("user@")));
        assert!(!check.is_satisfied(&Value::from("user@example")));
        assert_eq!(check.default_message(), "Must be a valid email address");
    }

    #[test]
    fn test_email_rejects_non_ascii_word_chars() {
        let check = email();
        assert!(!check.is_satisfied(&Value::from("josé@example.com")));
        assert!(!check.is_satisfied(&Value::from("user@exämple.com")));
        assert!(check.is_satisfied(&Value::from("o_k-1@ex-ample.com")));
    }
}
