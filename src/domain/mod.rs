// Copyright (c) 2025 - Cowboy AI, Inc.
//! Resource Domain Models
//!
//! Value objects and the resource entity that a manifest statement resolves
//! into before any conversion happens.
//!
//! # Value Objects
//!
//! - [`Reference`] - Immutable `(type, title)` identity
//! - [`Value`] - Closed sum type of parameter values
//! - [`ParameterKey`] - Canonical parameter name
//! - [`TagSet`] - Validated, case-insensitive labels
//! - [`CatalogId`] - Handle to an owning catalog
//!
//! # Entities
//!
//! - [`Resource`] - Reference + parameters + tags + source metadata

pub mod catalog;
pub mod parameters;
pub mod reference;
pub mod resource;
pub mod tags;
pub mod value;

pub use catalog::CatalogId;
pub use parameters::{ParameterKey, Parameters};
pub use reference::Reference;
pub use resource::{Resource, ResourceBuilder};
pub use tags::{valid_tag, TagSet, Tagging};
pub use value::Value;
