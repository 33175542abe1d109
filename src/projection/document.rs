// Copyright (c) 2025 - Cowboy AI, Inc.
//! Document Projection
//!
//! Full-fidelity serialized form of a resource. Decoding an encoded
//! resource yields an equal resource: same type, title and parameters, with
//! reference values restored as [`Reference`]s rather than bare maps.
//!
//! ```json
//! {
//!   "type": "file",
//!   "title": "/etc/motd",
//!   "tags": ["file"],
//!   "line": 4,
//!   "parameters": {
//!     "require": {"type": "package", "title": "motd"}
//!   }
//! }
//! ```
//!
//! Type bindings are not part of the document. Use
//! [`Resource::from_json_with_types`] to rebind on decode.
//!
//! [`Reference`]: crate::Reference

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::domain::{Parameters, Resource, Tagging};
use crate::errors::{ResourceError, ResourceResult};
use crate::registry::TypeRegistry;

/// Wire shape of a resource
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ResourceDocument {
    #[serde(rename = "type")]
    kind: String,
    title: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    line: Option<u32>,
    #[serde(default, skip_serializing_if = "is_false")]
    implicit: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    exported: bool,
    #[serde(default, rename = "virtual", skip_serializing_if = "is_false")]
    virtual_: bool,
    #[serde(default)]
    parameters: Parameters,
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

impl From<&Resource> for ResourceDocument {
    fn from(resource: &Resource) -> Self {
        Self {
            kind: resource.kind().to_string(),
            title: resource.title().to_string(),
            tags: resource.tags(),
            file: resource.file().map(str::to_string),
            line: resource.line(),
            implicit: resource.is_implicit(),
            exported: resource.is_exported(),
            virtual_: resource.is_virtual(),
            parameters: resource.parameters().clone(),
        }
    }
}

impl TryFrom<ResourceDocument> for Resource {
    type Error = ResourceError;

    fn try_from(doc: ResourceDocument) -> Result<Self, Self::Error> {
        let mut builder = Resource::builder()
            .kind(doc.kind)
            .title(doc.title)
            .parameters(doc.parameters)
            .implicit(doc.implicit)
            .exported(doc.exported)
            .virtual_(doc.virtual_);

        if let Some(file) = doc.file {
            builder = builder.file(file);
        }
        if let Some(line) = doc.line {
            builder = builder.line(line);
        }
        for tag in doc.tags {
            builder = builder.tag(tag);
        }

        builder.build()
    }
}

impl Serialize for Resource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ResourceDocument::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Resource {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let doc = ResourceDocument::deserialize(deserializer)?;
        Resource::try_from(doc).map_err(serde::de::Error::custom)
    }
}

impl Resource {
    /// Encode as compact JSON
    pub fn to_json(&self) -> ResourceResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Encode as indented JSON
    pub fn to_json_pretty(&self) -> ResourceResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode an unbound resource from JSON
    pub fn from_json(json: &str) -> ResourceResult<Self> {
        let resource: Resource = serde_json::from_str(json)
            .map_err(|e| ResourceError::Deserialization(e.to_string()))?;

        debug!(resource = %resource.reference(), "Decoded resource document");
        Ok(resource)
    }

    /// Decode a resource from JSON and bind it to its type in `types`
    pub fn from_json_with_types<R: TypeRegistry + ?Sized>(json: &str, types: &R) -> ResourceResult<Self> {
        let mut resource = Self::from_json(json)?;
        resource.bind_types(types);
        Ok(resource)
    }
}
