//! The imported person record.

use serde::{Deserialize, Serialize};
use tranzo_validator::context::Validation;
use tranzo_validator::foundation::{ObjectId, Validate};

/// One person row. Age and gender are kept as the raw cell text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Details {
    /// Assigned when the record is stored; nil until then.
    pub id: ObjectId,
    pub name: String,
    pub age: String,
    pub gender: String,
}

impl Details {
    /// Builds an unsaved record.
    pub fn new(name: impl Into<String>, age: impl Into<String>, gender: impl Into<String>) -> Self {
        Self {
            id: ObjectId::nil(),
            name: name.into(),
            age: age.into(),
            gender: gender.into(),
        }
    }
}

impl Validate for Details {
    fn rules(&self, v: &mut Validation) {
        v.required(self.name.as_str())
            .key("name")
            .message("Name is missing");
    }
}
