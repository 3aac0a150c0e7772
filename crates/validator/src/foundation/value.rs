//! Tagged values that checks inspect.
//!
//! Every check receives a [`Value`] and pattern-matches on its variant. A value
//! of the wrong variant is simply "not satisfied" for numeric and size checks;
//! the typed convenience methods on [`Validation`](crate::context::Validation)
//! rule most of those mismatches out at compile time.

use std::fmt;
use std::sync::LazyLock;
use std::sync::atomic::{AtomicU32, Ordering};

use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

// ============================================================================
// VALUE
// ============================================================================

/// A value submitted to a check.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// No value at all (`None`).
    #[default]
    Absent,
    /// Text.
    Str(String),
    /// Boolean flag.
    Bool(bool),
    /// Whole number.
    Int(i64),
    /// Floating point number.
    Float(f64),
    /// Document identifier.
    Id(ObjectId),
    /// Point in time.
    Timestamp(DateTime<Utc>),
    /// Ordered sequence of values.
    Seq(Vec<Value>),
}

impl Value {
    /// Returns true for [`Value::Absent`].
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns the text when this is a [`Value::Str`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Short name of the variant, used in trace output.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Str(_) => "string",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Id(_) => "id",
            Self::Timestamp(_) => "timestamp",
            Self::Seq(_) => "sequence",
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

macro_rules! int_value {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )+
    };
}

int_value!(i8, i16, i32, i64, u8, u16, u32);

/// Counts above `i64::MAX` saturate to `i64::MAX`.
impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Self::Int(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<ObjectId> for Value {
    fn from(value: ObjectId) -> Self {
        Self::Id(value)
    }
}

impl From<&ObjectId> for Value {
    fn from(value: &ObjectId) -> Self {
        Self::Id(*value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Timestamp(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Self::Seq(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<Value>> From<&[T]> for Value {
    fn from(values: &[T]) -> Self {
        Self::Seq(values.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

// ============================================================================
// OBJECT ID
// ============================================================================

static PROCESS_UNIQUE: LazyLock<[u8; 5]> = LazyLock::new(rand::random);
static COUNTER: LazyLock<AtomicU32> = LazyLock::new(|| AtomicU32::new(rand::random::<u32>()));

/// A 12-byte document identifier, possibly unassigned.
///
/// Layout of generated ids: 4-byte big-endian seconds since the epoch,
/// 5 bytes unique to this process, 3-byte big-endian counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ObjectId(Option<[u8; 12]>);

impl ObjectId {
    /// An unassigned id. Its hex form is empty.
    #[must_use]
    pub const fn nil() -> Self {
        Self(None)
    }

    /// Wraps raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 12]) -> Self {
        Self(Some(bytes))
    }

    /// Generates a fresh id.
    #[must_use]
    pub fn generate() -> Self {
        let seconds = u32::try_from(Utc::now().timestamp()).unwrap_or(u32::MAX);
        let count = COUNTER.fetch_add(1, Ordering::Relaxed) & 0x00ff_ffff;

        let mut bytes = [0u8; 12];
        bytes[..4].copy_from_slice(&seconds.to_be_bytes());
        bytes[4..9].copy_from_slice(&*PROCESS_UNIQUE);
        bytes[9..].copy_from_slice(&count.to_be_bytes()[1..]);
        Self(Some(bytes))
    }

    /// Parses a 24-character hex string. The empty string yields [`ObjectId::nil`].
    pub fn parse_hex(s: &str) -> Result<Self, hex::FromHexError> {
        if s.is_empty() {
            return Ok(Self::nil());
        }
        let mut bytes = [0u8; 12];
        hex::decode_to_slice(s, &mut bytes)?;
        Ok(Self(Some(bytes)))
    }

    /// Lowercase hex form; empty when unassigned.
    #[must_use]
    pub fn to_hex(&self) -> String {
        self.0.map(hex::encode).unwrap_or_default()
    }

    /// Returns true when no bytes are assigned.
    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_none()
    }

    /// The raw bytes, if assigned.
    #[must_use]
    pub fn bytes(&self) -> Option<&[u8; 12]> {
        self.0.as_ref()
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for ObjectId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for ObjectId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct HexVisitor;

        impl Visitor<'_> for HexVisitor {
            type Value = ObjectId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a 24-character hex string")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<ObjectId, E> {
                ObjectId::parse_hex(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(HexVisitor)
    }
}
