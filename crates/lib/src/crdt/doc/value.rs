//! Value types for partial documents.
//!
//! This module provides the [`Value`] enum stored under every key of a
//! [`Doc`]. Values are either leaves (booleans, numbers, text, lists), nested
//! maps, or the [`Value::Deleted`] tombstone.

use std::fmt;

use super::{Doc, TombstonePolicy};
use crate::crdt::CRDTError;

/// Values that can be stored in partial documents.
///
/// The wire form is plain JSON: `null` decodes to [`Value::Deleted`] and
/// [`Value::Deleted`] encodes back to `null`, so a tombstone survives a
/// round trip through storage unchanged.
///
/// # Merge Behavior
///
/// - **Leaf values**: Last-write-wins
/// - **Maps**: Merged key by key, recursively
/// - **Tombstones**: An incoming tombstone always wins
/// - **Resurrection**: A value written over a tombstone replaces it outright,
///   nothing from before the tombstone survives
///
/// ```
/// # use folio::crdt::{Doc, TombstonePolicy, Value};
/// let mut val = Value::Int(42);
/// val.merge(&Value::Int(100), TombstonePolicy::Retain);
/// assert_eq!(val, Value::Int(100));
///
/// val.merge(&Value::Deleted, TombstonePolicy::Retain);
/// assert!(val.is_deleted());
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Tombstone marker, `null` on the wire
    Deleted,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating point value (positions are stored as floats)
    Float(f64),
    /// Text string value
    Text(String),
    /// Ordered list, replaced as a whole on merge
    List(Vec<Value>),
    /// Nested map, merged key by key
    Map(Doc),
}

impl Value {
    /// Returns true if this value represents a deletion
    pub fn is_deleted(&self) -> bool {
        matches!(self, Value::Deleted)
    }

    /// Returns true if this is a nested map
    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Deleted => "deleted",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }

    /// Attempts to convert to a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to convert to an integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to read a number, accepting both integers and floats
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to convert to a string
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to convert to a nested map
    pub fn as_map(&self) -> Option<&Doc> {
        match self {
            Value::Map(doc) => Some(doc),
            _ => None,
        }
    }

    /// Attempts to convert to a mutable nested map
    pub fn as_map_mut(&mut self) -> Option<&mut Doc> {
        match self {
            Value::Map(doc) => Some(doc),
            _ => None,
        }
    }

    /// Attempts to convert to a list
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    /// Merges another value into this one.
    ///
    /// Two maps merge recursively under `policy`. Any other pair is
    /// last-write-wins; the incoming value is copied with
    /// [`Value::settled`] so that an applied merge never leaves nested
    /// tombstones behind.
    pub fn merge(&mut self, other: &Value, policy: TombstonePolicy) {
        match other {
            Value::Deleted => *self = Value::Deleted,
            Value::Map(incoming) => match self {
                Value::Map(current) => current.merge(incoming, policy),
                current => *current = other.settled(policy),
            },
            _ => *self = other.settled(policy),
        }
    }

    /// Returns a copy of this value prepared for insertion under `policy`.
    ///
    /// Under [`TombstonePolicy::Apply`] nested tombstones are dropped, since a
    /// freshly inserted value has nothing underneath it to delete.
    pub fn settled(&self, policy: TombstonePolicy) -> Value {
        match (self, policy) {
            (Value::Map(doc), TombstonePolicy::Apply) => Value::Map(doc.without_tombstones()),
            _ => self.clone(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Deleted => write!(f, "<deleted>"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Text(s) => write!(f, "{s:?}"),
            Value::List(list) => {
                write!(f, "[")?;
                for (i, item) in list.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Map(doc) => write!(f, "{doc}"),
        }
    }
}

// Convenient From implementations for common types
impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<Doc> for Value {
    fn from(value: Doc) -> Self {
        Value::Map(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Deleted, Into::into)
    }
}

// TryFrom implementations for typed reads
impl<'a> TryFrom<&'a Value> for &'a str {
    type Error = CRDTError;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        value.as_text().ok_or_else(|| CRDTError::TypeMismatch {
            expected: "text".to_string(),
            actual: value.type_name().to_string(),
        })
    }
}

impl TryFrom<&Value> for String {
    type Error = CRDTError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        <&str>::try_from(value).map(str::to_string)
    }
}

impl TryFrom<&Value> for bool {
    type Error = CRDTError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_bool().ok_or_else(|| CRDTError::TypeMismatch {
            expected: "bool".to_string(),
            actual: value.type_name().to_string(),
        })
    }
}

impl TryFrom<&Value> for i64 {
    type Error = CRDTError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_int().ok_or_else(|| CRDTError::TypeMismatch {
            expected: "int".to_string(),
            actual: value.type_name().to_string(),
        })
    }
}

impl TryFrom<&Value> for f64 {
    type Error = CRDTError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_f64().ok_or_else(|| CRDTError::TypeMismatch {
            expected: "number".to_string(),
            actual: value.type_name().to_string(),
        })
    }
}

// PartialEq implementations for comparing Value with primitives
impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.as_text() == Some(other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.as_text() == Some(*other)
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        self.as_int() == Some(*other)
    }
}
