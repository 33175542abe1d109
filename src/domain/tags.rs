// Copyright (c) 2025 - Cowboy AI, Inc.
//! Tag Set and Tagging Capability
//!
//! Tags are lowercase labels attached to resources for selection. A tag
//! must start with a word character (ASCII alphanumeric or `_`) and may
//! continue with word characters, `-`, `:` or `.`. Anything path-like such
//! as `/etc/hosts` is rejected.

use serde::{Deserialize, Serialize};

use crate::errors::{ResourceError, ResourceResult};

/// Check a string against the tag grammar
///
/// ```rust
/// use cim_resource::valid_tag;
///
/// assert!(valid_tag("apache::vhost"));
/// assert!(!valid_tag("/etc/hosts"));
/// ```
pub fn valid_tag(name: &str) -> bool {
    let mut chars = name.chars();

    let Some(first) = chars.next() else {
        return false;
    };
    if !is_word_char(first) {
        return false;
    }

    chars.all(|c| is_word_char(c) || matches!(c, '-' | ':' | '.'))
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Case-insensitive, insertion-ordered set of tags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSet(Vec<String>);

impl TagSet {
    /// Create an empty tag set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tag, plus each segment of a `::`-qualified tag
    ///
    /// # Invariants
    /// - Tag must satisfy [`valid_tag`]
    /// - Stored lowercase, without duplicates
    pub fn insert(&mut self, name: &str) -> ResourceResult<()> {
        if !valid_tag(name) {
            return Err(ResourceError::InvalidTag(name.to_string()));
        }

        let name = name.to_lowercase();
        if name.contains("::") {
            for segment in name.split("::").filter(|s| !s.is_empty()) {
                self.push_unique(segment.to_string());
            }
        }
        self.push_unique(name);
        Ok(())
    }

    fn push_unique(&mut self, name: String) {
        if !self.0.contains(&name) {
            self.0.push(name);
        }
    }

    /// Check if a tag is present
    pub fn contains(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.0.iter().any(|tag| *tag == name)
    }

    /// Tags in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Number of tags
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copy the tags out as owned strings
    pub fn to_vec(&self) -> Vec<String> {
        self.0.clone()
    }
}

/// Generic tagging capability
///
/// Implementors only expose their tag storage; `tag` and `is_tagged` are
/// shared behavior.
pub trait Tagging {
    /// Read access to the tag set
    fn tag_set(&self) -> &TagSet;

    /// Write access to the tag set
    fn tag_set_mut(&mut self) -> &mut TagSet;

    /// Add a tag
    fn tag(&mut self, name: &str) -> ResourceResult<()> {
        self.tag_set_mut().insert(name)
    }

    /// Add several tags, stopping at the first invalid one
    fn tag_all<'a>(&mut self, names: impl IntoIterator<Item = &'a str>) -> ResourceResult<()>
    where
        Self: Sized,
    {
        for name in names {
            self.tag(name)?;
        }
        Ok(())
    }

    /// Check if a tag is present
    fn is_tagged(&self, name: &str) -> bool {
        self.tag_set().contains(name)
    }

    /// All tags in insertion order
    fn tags(&self) -> Vec<String> {
        self.tag_set().to_vec()
    }
}
