//! Typed attribute storage for items
//!
//! Items carry an open key→value mapping (creation timestamps, labels,
//! special-role flags). The key space is a closed enumeration and the value
//! is a tagged union, so the bag stays extensible without unbounded dynamic
//! typing.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Attribute kinds an item may carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AttributeKey {
    /// Creation/registration timestamp, milliseconds since the epoch
    Date,
    /// Free-form description override
    Description,
    /// Owning entity marker
    Owner,
    /// Short display label
    Label,
}

/// Attribute value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    /// Integer value
    Int(i64),
    /// Boolean value
    Bool(bool),
    /// Text value
    Text(String),
}

impl AttributeValue {
    /// Get as integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }

    /// Name of the contained type, for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Bool(_) => "bool",
            Self::Text(_) => "text",
        }
    }
}

/// Attribute bag carried by an item
///
/// Items holding a non-empty bag never stack-merge: merging would silently
/// drop instance data such as reward stamps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributeBag {
    entries: BTreeMap<AttributeKey, AttributeValue>,
}

impl AttributeBag {
    /// Create an empty bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, replacing any previous value under the key
    pub fn set(&mut self, key: AttributeKey, value: AttributeValue) {
        self.entries.insert(key, value);
    }

    /// Get an attribute
    pub fn get(&self, key: AttributeKey) -> Option<&AttributeValue> {
        self.entries.get(&key)
    }

    /// Remove an attribute, returning the previous value
    pub fn remove(&mut self, key: AttributeKey) -> Option<AttributeValue> {
        self.entries.remove(&key)
    }

    /// Check whether the bag holds no attributes
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of attributes set
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate over entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (AttributeKey, &AttributeValue)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }
}
