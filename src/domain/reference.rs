// Copyright (c) 2025 - Cowboy AI, Inc.
//! Resource Reference Value Object
//!
//! A reference is the immutable `(type, title)` pair that names a resource
//! uniquely within a catalog. It renders as `Type[title]`, with every
//! `::`-separated segment of the type capitalized.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::errors::{ResourceError, ResourceResult};

/// Canonical identity of a resource
///
/// # Invariants
/// - Type and title are non-empty
/// - Neither changes after construction
/// - Types compare case-insensitively, titles exactly
///
/// # Examples
///
/// ```rust
/// use cim_resource::Reference;
///
/// let reference = Reference::new("file", "/etc/hosts").unwrap();
/// assert_eq!(reference.to_string(), "File[/etc/hosts]");
///
/// let nested = Reference::new("apache::vhost", "www").unwrap();
/// assert_eq!(nested.to_string(), "Apache::Vhost[www]");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ReferenceDocument", into = "ReferenceDocument")]
pub struct Reference {
    kind: String,
    title: String,
}

impl Reference {
    /// Create a reference from a type name and a title
    ///
    /// Fails with [`ResourceError::Arity`] if either argument is empty.
    pub fn new(kind: impl Into<String>, title: impl Into<String>) -> ResourceResult<Self> {
        let kind = kind.into();
        let title = title.into();

        if kind.is_empty() {
            return Err(ResourceError::missing("type"));
        }
        if title.is_empty() {
            return Err(ResourceError::missing("title"));
        }

        Ok(Self { kind, title })
    }

    /// Parse a `Type[title]` reference string
    pub fn parse(input: &str) -> ResourceResult<Self> {
        let invalid = || ResourceError::InvalidReference(input.to_string());

        let (kind, rest) = input.split_once('[').ok_or_else(invalid)?;
        let title = rest.strip_suffix(']').ok_or_else(invalid)?;

        Self::new(kind.trim(), title).map_err(|_| invalid())
    }

    /// Resource type name, case preserved as given
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Resource title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Legacy two-element `[type, title]` form used by the transport layer
    pub fn to_trans_ref(&self) -> [String; 2] {
        [self.kind.clone(), self.title.clone()]
    }
}

/// Capitalize each `::`-separated segment of a type name
fn capitalize_kind(kind: &str) -> String {
    kind.split("::")
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join("::")
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", capitalize_kind(&self.kind), self.title)
    }
}

impl PartialEq for Reference {
    fn eq(&self, other: &Self) -> bool {
        self.kind.eq_ignore_ascii_case(&other.kind) && self.title == other.title
    }
}

impl Eq for Reference {}

impl Hash for Reference {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.to_ascii_lowercase().hash(state);
        self.title.hash(state);
    }
}

impl FromStr for Reference {
    type Err = ResourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Wire shape of a reference: `{"type": .., "title": ..}`
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ReferenceDocument {
    #[serde(rename = "type")]
    kind: String,
    title: String,
}

impl TryFrom<ReferenceDocument> for Reference {
    type Error = ResourceError;

    fn try_from(doc: ReferenceDocument) -> Result<Self, Self::Error> {
        Reference::new(doc.kind, doc.title)
    }
}

impl From<Reference> for ReferenceDocument {
    fn from(reference: Reference) -> Self {
        Self {
            kind: reference.kind,
            title: reference.title,
        }
    }
}
