// Copyright (c) 2025 - Cowboy AI, Inc.
//! Parameter Store
//!
//! Ordered mapping from canonical parameter names to values. Every entry
//! point canonicalizes its key, so `"Ensure"`, `"ensure"` and `" ensure "`
//! all address the same slot. Iteration follows insertion order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

use super::Value;

/// Canonical parameter name (trimmed, lowercase)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ParameterKey(String);

impl ParameterKey {
    /// The identity alias that resolves to a type's namevar
    pub const NAME: &'static str = "name";

    /// Canonicalize a parameter name
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().trim().to_lowercase())
    }

    /// Get the canonical name
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if this is the `name` alias
    pub fn is_name(&self) -> bool {
        self.0 == Self::NAME
    }
}

impl fmt::Display for ParameterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ParameterKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ParameterKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ParameterKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ParameterKey {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&ParameterKey> for ParameterKey {
    fn from(key: &ParameterKey) -> Self {
        key.clone()
    }
}

impl From<ParameterKey> for String {
    fn from(key: ParameterKey) -> Self {
        key.0
    }
}

/// Insertion-ordered parameter map keyed on [`ParameterKey`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Parameters {
    inner: IndexMap<ParameterKey, Value>,
}

impl Parameters {
    /// Create an empty parameter store
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a value
    pub fn get(&self, key: impl Into<ParameterKey>) -> Option<&Value> {
        self.inner.get(key.into().as_str())
    }

    /// Insert or replace a value, returning the previous one
    ///
    /// Replacing keeps the key's original position.
    pub fn insert(&mut self, key: impl Into<ParameterKey>, value: impl Into<Value>) -> Option<Value> {
        self.inner.insert(key.into(), value.into())
    }

    /// Check if a key is present
    pub fn contains_key(&self, key: impl Into<ParameterKey>) -> bool {
        self.inner.contains_key(key.into().as_str())
    }

    /// Remove a key, preserving the order of the remaining entries
    pub fn remove(&mut self, key: impl Into<ParameterKey>) -> Option<Value> {
        self.inner.shift_remove(key.into().as_str())
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &ParameterKey> {
        self.inner.keys()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> indexmap::map::Iter<'_, ParameterKey, Value> {
        self.inner.iter()
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if there are no parameters
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<'a> IntoIterator for &'a Parameters {
    type Item = (&'a ParameterKey, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, ParameterKey, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl IntoIterator for Parameters {
    type Item = (ParameterKey, Value);
    type IntoIter = indexmap::map::IntoIter<ParameterKey, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<K: Into<ParameterKey>, V: Into<Value>> FromIterator<(K, V)> for Parameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut parameters = Self::new();
        for (key, value) in iter {
            parameters.insert(key, value);
        }
        parameters
    }
}
