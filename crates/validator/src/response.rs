//! Rejection body for failed validation passes
//!
//! A handler that validated its input answers with [`ValidationRejection`]:
//! status `400 Bad Request` and the error map as a flat JSON object.
//!
//! ```json
//! { "name": "Name is missing", "age": "Range is 1 to 150" }
//! ```

use http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::foundation::ErrorMap;

/// The `400 Bad Request` payload built from a finished validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationRejection {
    errors: ErrorMap,
}

impl ValidationRejection {
    /// Wraps an error map.
    #[must_use]
    pub fn new(errors: ErrorMap) -> Self {
        Self { errors }
    }

    /// Always [`StatusCode::BAD_REQUEST`].
    #[must_use]
    pub fn status(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    /// The field errors, first message per key.
    #[must_use]
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Serializes the body as JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Unwraps the error map.
    #[must_use]
    pub fn into_errors(self) -> ErrorMap {
        self.errors
    }
}

impl From<ErrorMap> for ValidationRejection {
    fn from(errors: ErrorMap) -> Self {
        Self::new(errors)
    }
}
