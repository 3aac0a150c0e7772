//! Call-site to field-name table
//!
//! When a check fails without an explicit `.key(...)`, the context asks its
//! [`DefaultKeys`] which field the failing call site was checking. Sites are
//! identified by source file and line as reported by
//! [`Location::caller`](std::panic::Location::caller).
//!
//! # File format
//!
//! ```toml
//! [[keys]]
//! file = "crates/import/src/details.rs"
//! line = 42
//! field = "name"
//! ```

use std::collections::HashMap;
use std::panic::Location;
use std::path::Path;

use serde::Deserialize;

use crate::foundation::ConfigError;

/// Read-only table of call site → field name.
///
/// Built once at startup and shared through an `Arc`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefaultKeys {
    sites: HashMap<(String, u32), String>,
}

impl DefaultKeys {
    /// Starts an empty builder.
    #[must_use]
    pub fn builder() -> DefaultKeysBuilder {
        DefaultKeysBuilder::default()
    }

    /// Parses a TOML table of `[[keys]]` entries.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let file: KeysFile = toml::from_str(source)?;
        file.keys
            .into_iter()
            .fold(Self::builder(), |builder, entry| {
                builder.register(entry.file, entry.line, entry.field)
            })
            .build()
    }

    /// Reads and parses a TOML key table from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let keys = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), sites = keys.len(), "loaded default keys");
        Ok(keys)
    }

    /// The field registered for `location`, if any.
    #[must_use]
    pub fn lookup(&self, location: &Location<'_>) -> Option<&str> {
        self.get(location.file(), location.line())
    }

    /// The field registered for `file:line`, if any.
    #[must_use]
    pub fn get(&self, file: &str, line: u32) -> Option<&str> {
        self.sites
            .get(&(file.to_owned(), line))
            .map(String::as_str)
    }

    /// Number of registered sites.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    /// Returns true when no site is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }
}

/// Collects registrations for a [`DefaultKeys`] table.
#[derive(Debug, Default)]
#[must_use = "builder does nothing until .build() is called"]
pub struct DefaultKeysBuilder {
    entries: Vec<KeyEntry>,
}

impl DefaultKeysBuilder {
    /// Maps the call site `file:line` to `field`.
    pub fn register(
        mut self,
        file: impl Into<String>,
        line: u32,
        field: impl Into<String>,
    ) -> Self {
        self.entries.push(KeyEntry {
            file: file.into(),
            line,
            field: field.into(),
        });
        self
    }

    /// Builds the table.
    ///
    /// # Errors
    ///
    /// [`ConfigError::DuplicateSite`] when two entries share a call site.
    pub fn build(self) -> Result<DefaultKeys, ConfigError> {
        let mut sites = HashMap::with_capacity(self.entries.len());
        for KeyEntry { file, line, field } in self.entries {
            if sites.contains_key(&(file.clone(), line)) {
                return Err(ConfigError::DuplicateSite { file, line });
            }
            sites.insert((file, line), field);
        }
        Ok(DefaultKeys { sites })
    }
}

#[derive(Debug, Deserialize)]
struct KeysFile {
    #[serde(default)]
    keys: Vec<KeyEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct KeyEntry {
    file: String,
    line: u32,
    field: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_registers_sites() {
        let keys = DefaultKeys::builder()
            .register("src/a.rs", 3, "name")
            .register("src/a.rs", 4, "age")
            .build()
            .unwrap();
        assert_eq!(keys.len(), 2);
        assert_eq!(keys.get("src/a.rs", 3), Some("name"));
        assert_eq!(keys.get("src/a.rs", 5), None);
    }

    #[test]
    fn lookup_uses_caller_location() {
        let here = Location::caller();
        let keys = DefaultKeys::builder()
            .register(here.file(), here.line(), "here")
            .build()
            .unwrap();
        assert_eq!(keys.lookup(here), Some("here"));
    }

    #[test]
    fn duplicate_site_is_rejected() {
        let err = DefaultKeys::builder()
            .register("src/a.rs", 3, "name")
            .register("src/a.rs", 3, "other")
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateSite { line: 3, .. }));
    }

    #[test]
    fn parses_toml() {
        let keys = DefaultKeys::from_toml_str(
            r#"
            [[keys]]
            file = "src/models.rs"
            line = 10
            field = "name"
            "#,
        )
        .unwrap();
        assert_eq!(keys.get("src/models.rs", 10), Some("name"));
    }

    #[test]
    fn empty_toml_is_empty_table() {
        assert!(DefaultKeys::from_toml_str("").unwrap().is_empty());
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let err = DefaultKeys::from_toml_str("[[keys]]\nfile = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
