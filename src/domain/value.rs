// Copyright (c) 2025 - Cowboy AI, Inc.
//! Parameter Values
//!
//! Closed sum type for everything a manifest statement can assign to a
//! resource parameter. Every renderer matches on it exhaustively.

use serde::{ser, Deserialize, Serialize, Serializer};
use std::fmt;

use super::Reference;

/// A resource parameter value
///
/// Serializes untagged: scalars and lists as plain JSON, references as
/// `{"type": .., "title": ..}` objects so they decode back into
/// [`Value::Reference`]. NaN and infinite floats have no JSON form and
/// fail to serialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Boolean scalar
    Boolean(bool),
    /// Integer scalar
    Integer(i64),
    /// Floating point scalar
    Float(#[serde(serialize_with = "serialize_finite")] f64),
    /// String scalar
    String(String),
    /// Ordered list of values
    List(Vec<Value>),
    /// Reference to another resource
    Reference(Reference),
}

impl Value {
    /// Get the string slice if this is a string scalar
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the list items if this is a list
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Get the reference if this is a reference
    pub fn as_reference(&self) -> Option<&Reference> {
        match self {
            Self::Reference(reference) => Some(reference),
            _ => None,
        }
    }

    /// Check if this value is a list
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }
}

fn serialize_finite<S: Serializer>(x: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if !x.is_finite() {
        return Err(ser::Error::custom(format!("non-finite float {} cannot be serialized", x)));
    }
    serializer.serialize_f64(*x)
}

/// Plain text form: scalars as written, lists comma-joined, references as `Type[title]`
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(b) => write!(f, "{}", b),
            Self::Integer(i) => write!(f, "{}", i),
            Self::Float(x) => write!(f, "{}", x),
            Self::String(s) => f.write_str(s),
            Self::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
            Self::Reference(reference) => write!(f, "{}", reference),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::Integer(i64::from(i))
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Self::Integer(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Reference> for Value {
    fn from(reference: Reference) -> Self {
        Self::Reference(reference)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}
