// Copyright (c) 2025 - Cowboy AI, Inc.
//! Resource Projections
//!
//! Four independent, read-only conversions of a [`Resource`] into the
//! representations consumed elsewhere in the pipeline:
//!
//! ```text
//!                    ┌──> runtime    to_ral()       registry instance or Component
//!                    │
//! Resource ──────────┼──> manifest   to_manifest()  human-oriented source text
//!                    │
//!                    ├──> transport  to_trans()     legacy flattened bucket/object
//!                    │
//!                    └──> document   to_json()      full-fidelity serialized form
//! ```
//!
//! Each conversion allocates a fresh output and leaves the resource
//! untouched. They share no formatting rules: the transport flattening
//! never leaks into the document form and vice versa.
//!
//! [`Resource`]: crate::Resource

pub mod document;
pub mod manifest;
pub mod runtime;
pub mod transport;

pub use manifest::ManifestConfig;
pub use transport::{TransBucket, TransObject, Transportable};
