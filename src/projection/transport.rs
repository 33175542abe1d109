// Copyright (c) 2025 - Cowboy AI, Inc.
//! Transport Projection
//!
//! Backward-compatible flattened shapes for consumers that predate the
//! richer resource model.
//!
//! # Shapes
//!
//! - **Bucket**: unregistered types carry only name, type and source location
//! - **Object**: registered types also carry tags and a flattened parameter map
//!
//! Both serialize untagged; an object is told apart by its `parameters` field.
//!
//! # Flattening Rules
//!
//! - A reference becomes the pair `[type, title]`, also inside lists
//! - A single-element list collapses to its element
//! - Longer lists stay lists

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use tracing::trace;

use crate::domain::{Resource, Tagging, Value};
use crate::registry::TypeRegistry;

/// Lightweight transport shape for unregistered types
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransBucket {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
}

/// Full transport shape for registered types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransObject {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub parameters: IndexMap<String, JsonValue>,
}

/// Transport representation of a resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Transportable {
    Object(TransObject),
    Bucket(TransBucket),
}

impl Transportable {
    /// Resource title
    pub fn name(&self) -> &str {
        match self {
            Self::Bucket(bucket) => &bucket.name,
            Self::Object(object) => &object.name,
        }
    }

    /// Resource type name
    pub fn kind(&self) -> &str {
        match self {
            Self::Bucket(bucket) => &bucket.kind,
            Self::Object(object) => &object.kind,
        }
    }

    /// Declaring manifest file
    pub fn file(&self) -> Option<&str> {
        match self {
            Self::Bucket(bucket) => bucket.file.as_deref(),
            Self::Object(object) => object.file.as_deref(),
        }
    }

    /// Declaration line
    pub fn line(&self) -> Option<u32> {
        match self {
            Self::Bucket(bucket) => bucket.line,
            Self::Object(object) => object.line,
        }
    }

    /// Get the object shape, if this is one
    pub fn as_object(&self) -> Option<&TransObject> {
        match self {
            Self::Object(object) => Some(object),
            Self::Bucket(_) => None,
        }
    }

    /// Check if this is the bucket shape
    pub fn is_bucket(&self) -> bool {
        matches!(self, Self::Bucket(_))
    }
}

impl Resource {
    /// Convert to the legacy transport shape
    ///
    /// The shape follows `types`, not the binding the resource was built
    /// with. Types found in the registry become a [`TransObject`] whose
    /// parameters come from [`Resource::to_map`] under that type's namevar.
    /// Everything else becomes a [`TransBucket`].
    pub fn to_trans<R: TypeRegistry + ?Sized>(&self, types: &R) -> Transportable {
        let mut bound = self.clone();
        bound.bind_types(types);
        bound.transport()
    }

    fn transport(&self) -> Transportable {
        if !self.is_builtin() {
            trace!(resource = %self.reference(), "Transporting as bucket");
            return Transportable::Bucket(TransBucket {
                name: self.title().to_string(),
                kind: self.kind().to_string(),
                file: self.file().map(str::to_string),
                line: self.line(),
            });
        }

        trace!(resource = %self.reference(), "Transporting as object");
        let parameters = self
            .to_map()
            .iter()
            .map(|(key, value)| (key.to_string(), flatten(value)))
            .collect();

        Transportable::Object(TransObject {
            name: self.title().to_string(),
            kind: self.kind().to_string(),
            file: self.file().map(str::to_string),
            line: self.line(),
            tags: self.tags(),
            parameters,
        })
    }
}

/// Flatten a top-level parameter value
fn flatten(value: &Value) -> JsonValue {
    match value {
        Value::List(items) if items.len() == 1 => flatten_item(&items[0]),
        other => flatten_item(other),
    }
}

/// Convert references to pairs, recursing into lists without collapsing them
fn flatten_item(value: &Value) -> JsonValue {
    match value {
        Value::Boolean(b) => JsonValue::Bool(*b),
        Value::Integer(i) => JsonValue::from(*i),
        Value::Float(x) => JsonValue::from(*x),
        Value::String(s) => JsonValue::String(s.clone()),
        Value::List(items) => JsonValue::Array(items.iter().map(flatten_item).collect()),
        Value::Reference(reference) => {
            let [kind, title] = reference.to_trans_ref();
            JsonValue::Array(vec![JsonValue::String(kind), JsonValue::String(title)])
        }
    }
}
