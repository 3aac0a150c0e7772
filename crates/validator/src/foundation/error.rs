//! Error types for validation failures and engine configuration
//!
//! A failed check is data, not a Rust error: it becomes a [`ValidationError`]
//! recorded on the context. [`ConfigError`] covers the fallible setup paths.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// One failed check application: the field it belongs to and what went wrong.
///
/// `key` is empty when the caller supplied none and no default key matched.
///
/// # Examples
///
/// ```rust,ignore
/// use tranzo_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("Required").with_key("name");
/// assert_eq!(error.to_string(), "Required");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Human-readable message.
    pub message: String,
    /// Field key the error is reported under.
    pub key: String,
}

impl ValidationError {
    /// Creates an error with a message and no key.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            key: String::new(),
        }
    }

    /// Sets the key.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }
}

// ============================================================================
// ERROR MAP
// ============================================================================

/// Final report of a validation pass: key to message, first error per key.
///
/// Iteration order follows the order keys were first recorded. Serializes as a
/// plain JSON object.
pub type ErrorMap = IndexMap<String, String>;

// ============================================================================
// CONFIG ERROR
// ============================================================================

/// Errors raised while loading or building [`DefaultKeys`](crate::context::DefaultKeys).
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The key table could not be read from disk.
    #[error("failed to read default keys from {}: {source}", path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The key table is not valid TOML or has the wrong shape.
    #[error("invalid default key table: {0}")]
    Parse(#[from] toml::de::Error),

    /// Two entries name the same call site.
    #[error("call site {file}:{line} is registered twice")]
    DuplicateSite {
        /// Source file of the call site.
        file: String,
        /// Line of the call site.
        line: u32,
    },
}
