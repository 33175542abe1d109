// Copyright (c) 2025 - Cowboy AI, Inc.
//! Managed resources for declarative infrastructure configuration
//!
//! A [`Resource`] is the typed, named, parameterized unit of desired state
//! that a manifest statement resolves into. This crate canonicalizes its
//! identity and parameters and converts it into the representations the
//! rest of the pipeline consumes:
//!
//! - a runtime object via an injected [`TypeRegistry`] ([`Resource::to_ral`])
//! - manifest source text ([`Resource::to_manifest`])
//! - the legacy transport shape ([`Resource::to_trans`])
//! - a round-trippable JSON document ([`Resource::to_json`])

pub mod domain;
pub mod errors;
pub mod projection;
pub mod registry;

// Re-export commonly used types
pub use domain::{
    valid_tag, CatalogId, ParameterKey, Parameters, Reference, Resource, ResourceBuilder, TagSet,
    Tagging, Value,
};
pub use errors::{ResourceError, ResourceResult};
pub use projection::{ManifestConfig, TransBucket, TransObject, Transportable};
pub use registry::{Component, ResourceType, TypeRegistry};
