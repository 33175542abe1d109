// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for cim-resource
//!
//! Provides a small in-memory type registry and deterministic resources.
//!
//! # Registered Types
//! - `file` with namevar `path`
//! - `mytype` with namevar `myvar`
//! - `failing` whose constructor always errors
//!
//! Everything else is unregistered.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Once;

use cim_resource::{Component, ParameterKey, Resource, ResourceType};

/// Runtime object produced by the fixture registry
#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeObject {
    /// Instance of a registered type
    Managed { kind: String, identity: String },
    /// Generic aggregate for unregistered types
    Component(Component),
}

impl From<Component> for RuntimeObject {
    fn from(component: Component) -> Self {
        RuntimeObject::Component(component)
    }
}

/// Error raised by the fixture registry
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot create {0}")]
pub struct CreateError(pub String);

/// Registered type with a configurable namevar
pub struct FixtureType {
    namevar: &'static str,
    fails: bool,
}

impl ResourceType for FixtureType {
    type Instance = RuntimeObject;
    type Error = CreateError;

    fn namevar(&self) -> ParameterKey {
        ParameterKey::new(self.namevar)
    }

    fn create(&self, resource: &Resource) -> Result<RuntimeObject, CreateError> {
        if self.fails {
            return Err(CreateError(resource.to_ref()));
        }

        let identity = resource
            .get("name")
            .map(|value| value.to_string())
            .unwrap_or_default();

        Ok(RuntimeObject::Managed {
            kind: resource.kind().to_lowercase(),
            identity,
        })
    }
}

/// Registry with `file`, `mytype` and `failing`
pub fn type_registry() -> HashMap<String, FixtureType> {
    HashMap::from([
        ("file".to_string(), FixtureType { namevar: "path", fails: false }),
        ("mytype".to_string(), FixtureType { namevar: "myvar", fails: false }),
        ("failing".to_string(), FixtureType { namevar: "name", fails: true }),
    ])
}

/// The `file { '/my/file': one => 'test', two => 'other' }` resource
pub fn file_fixture() -> Resource {
    Resource::builder()
        .kind("file")
        .title("/my/file")
        .parameter("one", "test")
        .parameter("two", "other")
        .build()
        .expect("Invalid file fixture")
}

/// Install a test subscriber once; honors `RUST_LOG`
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
