//! The partial document type and its merge.
//!
//! A [`Doc`] is an ordered map from string keys to [`Value`]s. At the top
//! level of a fragment the keys are block identity keys and the values are
//! payloads or tombstones; inside a payload the keys are field names.
//!
//! # Usage
//!
//! ```
//! use folio::crdt::{Doc, TombstonePolicy, Value};
//!
//! let mut snapshot = Doc::new()
//!     .with("paragraph:a", Doc::new().with("markdown", "hello"))
//!     .with("paragraph:b", Doc::new().with("markdown", "world"));
//!
//! let fragment = Doc::new()
//!     .with("paragraph:a", Doc::new().with("markdown", "hi"))
//!     .with("paragraph:b", Value::Deleted);
//!
//! snapshot.merge(&fragment, TombstonePolicy::Apply);
//! assert_eq!(snapshot.len(), 1);
//! assert!(!snapshot.contains_key("paragraph:b"));
//! ```

use std::{collections::BTreeMap, fmt};

use crate::crdt::CRDTError;

pub mod value;

pub use value::Value;

/// How a merge treats incoming tombstones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TombstonePolicy {
    /// Keep tombstones as [`Value::Deleted`] entries.
    ///
    /// Used where the merged document is itself a set of changes: composing
    /// deltas into the shadow overlay, or building a fragment.
    Retain,
    /// Remove the key when a tombstone arrives.
    ///
    /// Used where the merged document is state: the committed snapshot, the
    /// composed read snapshot and the durable snapshot.
    Apply,
}

/// A partial document: the one encoding for "a set of block changes".
///
/// Serializes transparently as a JSON object. Unlike most maps, a `Doc` can
/// hold tombstones; [`Doc::get`], [`Doc::iter`] and [`Doc::len`] hide them,
/// while [`Doc::entries`] and [`Doc::tombstones`] expose them.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Doc {
    /// Child values indexed by string keys
    children: BTreeMap<String, Value>,
}

impl Doc {
    /// Creates a new empty document
    pub fn new() -> Self {
        Self {
            children: BTreeMap::new(),
        }
    }

    /// Returns true if the document has no entries at all.
    ///
    /// Tombstones count as entries here: a fragment that only deletes blocks
    /// is not empty.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the number of live keys (excluding tombstones)
    pub fn len(&self) -> usize {
        self.children.values().filter(|v| !v.is_deleted()).count()
    }

    /// Returns true if the document has a live value for the given key
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns true if the given key holds a tombstone
    pub fn is_tombstone(&self, key: &str) -> bool {
        matches!(self.children.get(key), Some(Value::Deleted))
    }

    /// Gets a live value by key, hiding tombstones
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self.children.get(key) {
            Some(Value::Deleted) | None => None,
            value => value,
        }
    }

    /// Gets a value by key, tombstones included
    pub fn entry(&self, key: &str) -> Option<&Value> {
        self.children.get(key)
    }

    /// Gets a mutable reference to a live value
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        match self.children.get_mut(key) {
            Some(Value::Deleted) | None => None,
            value => value,
        }
    }

    /// Gets a value with automatic type conversion.
    ///
    /// ```
    /// # use folio::crdt::Doc;
    /// let doc = Doc::new().with("text", "hello").with("ordered", true);
    /// assert_eq!(doc.get_as::<&str>("text"), Some("hello"));
    /// assert_eq!(doc.get_as::<bool>("ordered"), Some(true));
    /// assert_eq!(doc.get_as::<bool>("text"), None);
    /// ```
    pub fn get_as<'a, T>(&'a self, key: &str) -> Option<T>
    where
        T: TryFrom<&'a Value, Error = CRDTError>,
    {
        T::try_from(self.get(key)?).ok()
    }

    /// Gets a text value
    pub fn get_text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_text)
    }

    /// Gets a numeric value, integer or float
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }

    /// Gets a nested map
    pub fn get_map(&self, key: &str) -> Option<&Doc> {
        self.get(key).and_then(Value::as_map)
    }

    /// Sets a value, returning the previous live value if any
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        match self.children.insert(key.into(), value.into()) {
            Some(Value::Deleted) => None,
            old => old,
        }
    }

    /// Writes a tombstone at `key`, returning the previous live value if any
    pub fn delete(&mut self, key: impl Into<String>) -> Option<Value> {
        self.set(key, Value::Deleted)
    }

    /// Removes the entry for `key` entirely, tombstone or not
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.children.remove(key)
    }

    /// Builder method to set a value and return self
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Builder method to write a tombstone and return self
    pub fn with_tombstone(mut self, key: impl Into<String>) -> Self {
        self.delete(key);
        self
    }

    /// Returns an iterator over live key-value pairs
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.children.iter().filter(|(_, v)| !v.is_deleted())
    }

    /// Returns an iterator over every entry, tombstones included
    pub fn entries(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.children.iter()
    }

    /// Returns an iterator over live keys
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.iter().map(|(k, _)| k)
    }

    /// Returns an iterator over the keys holding tombstones
    pub fn tombstones(&self) -> impl Iterator<Item = &String> {
        self.children
            .iter()
            .filter(|(_, v)| v.is_deleted())
            .map(|(k, _)| k)
    }

    /// Merges `other` into this document.
    ///
    /// This is the single merge used by the fragment reducer, the shadow
    /// overlay and the storage adapters:
    ///
    /// - A tombstone in `other` deletes the key ([`TombstonePolicy::Apply`])
    ///   or is recorded as [`Value::Deleted`] ([`TombstonePolicy::Retain`]).
    /// - A key missing here is inserted.
    /// - A key present on both sides is merged with [`Value::merge`]: maps
    ///   field by field, everything else last-write-wins.
    ///
    /// The merge is total; no input shape makes it fail.
    pub fn merge(&mut self, other: &Doc, policy: TombstonePolicy) {
        for (key, incoming) in &other.children {
            if policy == TombstonePolicy::Apply && incoming.is_deleted() {
                self.children.remove(key);
                continue;
            }
            match self.children.get_mut(key) {
                Some(current) => current.merge(incoming, policy),
                None => {
                    self.children.insert(key.clone(), incoming.settled(policy));
                }
            }
        }
    }

    /// Returns a merged copy, leaving `self` untouched
    pub fn merged(&self, other: &Doc, policy: TombstonePolicy) -> Doc {
        let mut result = self.clone();
        result.merge(other, policy);
        result
    }

    /// Applies a slice of fragments in order with [`TombstonePolicy::Apply`].
    ///
    /// Fragments must be applied one at a time: composing them first would
    /// turn "tombstone, then fresh payload" into a plain payload that merges
    /// with whatever was there before the tombstone.
    pub fn apply_all<'a>(&mut self, fragments: impl IntoIterator<Item = &'a Doc>) {
        for fragment in fragments {
            self.merge(fragment, TombstonePolicy::Apply);
        }
    }

    /// Returns a copy with every tombstone removed, recursively
    pub fn without_tombstones(&self) -> Doc {
        self.children
            .iter()
            .filter(|(_, v)| !v.is_deleted())
            .map(|(k, v)| (k.clone(), v.settled(TombstonePolicy::Apply)))
            .collect()
    }

    /// Decodes a partial document from its JSON wire form
    pub fn from_json_str(json: &str) -> Result<Doc, CRDTError> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| CRDTError::DeserializationFailed {
                reason: e.to_string(),
            })?;
        match value {
            Value::Map(doc) => Ok(doc),
            other => Err(CRDTError::NotAnObject {
                actual: other.type_name().to_string(),
            }),
        }
    }
}

impl fmt::Display for Doc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.children.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        write!(f, "}}")
    }
}

impl FromIterator<(String, Value)> for Doc {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Doc {
            children: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Doc {
    type Item = (String, Value);
    type IntoIter = std::collections::btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.into_iter()
    }
}
