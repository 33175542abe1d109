// Copyright (c) 2025 - Cowboy AI, Inc.
//! Type Registry Seam
//!
//! The catalog of resource *types* lives outside this crate. A registry is
//! injected wherever a resource needs to know its type: at construction to
//! learn the namevar, and in [`Resource::to_ral`] to build the runtime
//! instance.
//!
//! Types unknown to the registry fall back to [`Component`], a generic
//! aggregate that simply carries the resource's identity and parameters.
//!
//! [`Resource::to_ral`]: crate::Resource::to_ral

use std::collections::{BTreeMap, HashMap};

use crate::domain::{ParameterKey, Parameters, Reference, Resource, TagSet, Tagging};

/// A registered resource type
pub trait ResourceType {
    /// Runtime object produced by [`ResourceType::create`]
    type Instance;

    /// Error raised while building an instance
    type Error;

    /// Parameter that carries the resource's identity
    fn namevar(&self) -> ParameterKey;

    /// Build the runtime object for a resource of this type
    fn create(&self, resource: &Resource) -> Result<Self::Instance, Self::Error>;
}

/// Lookup of resource types by lowercase name
pub trait TypeRegistry {
    /// Type descriptor stored in the registry
    type Type: ResourceType;

    /// Find a type by its lowercase name
    fn lookup(&self, name: &str) -> Option<&Self::Type>;
}

impl<T: ResourceType> TypeRegistry for HashMap<String, T> {
    type Type = T;

    fn lookup(&self, name: &str) -> Option<&T> {
        self.get(name)
    }
}

impl<T: ResourceType> TypeRegistry for BTreeMap<String, T> {
    type Type = T;

    fn lookup(&self, name: &str) -> Option<&T> {
        self.get(name)
    }
}

impl<R: TypeRegistry + ?Sized> TypeRegistry for &R {
    type Type = R::Type;

    fn lookup(&self, name: &str) -> Option<&Self::Type> {
        (**self).lookup(name)
    }
}

/// Resolve the namevar of a type, matching the type name case-insensitively
pub(crate) fn namevar_for<R: TypeRegistry + ?Sized>(types: &R, kind: &str) -> Option<ParameterKey> {
    types.lookup(&kind.to_lowercase()).map(ResourceType::namevar)
}

/// Generic aggregate for resources whose type is not registered
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    reference: Reference,
    parameters: Parameters,
    tags: TagSet,
}

impl Component {
    /// Build a component from a resource
    pub fn create(resource: &Resource) -> Self {
        Self {
            reference: resource.reference().clone(),
            parameters: resource.to_map(),
            tags: resource.tag_set().clone(),
        }
    }

    /// Reference of the resource this component was built from
    pub fn reference(&self) -> &Reference {
        &self.reference
    }

    /// Snapshot of the resource parameters, with the name defaulted
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Tags copied from the resource
    pub fn tags(&self) -> &TagSet {
        &self.tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Value;
    use std::convert::Infallible;

    struct FileType;

    impl ResourceType for FileType {
        type Instance = String;
        type Error = Infallible;

        fn namevar(&self) -> ParameterKey {
            ParameterKey::new("path")
        }

        fn create(&self, resource: &Resource) -> Result<String, Infallible> {
            Ok(resource.to_ref())
        }
    }

    #[test]
    fn test_map_registry_lookup() {
        let mut types = HashMap::new();
        types.insert("file".to_string(), FileType);

        assert!(types.lookup("file").is_some());
        assert!(types.lookup("service").is_none());
        assert_eq!(namevar_for(&types, "File"), Some(ParameterKey::new("path")));
        assert_eq!(namevar_for(&types, "service"), None);
    }

    #[test]
    fn test_component_snapshot() {
        let mut resource = Resource::new("site::web", "frontend").unwrap();
        resource.set("port", 8080);

        let component = Component::create(&resource);
        assert_eq!(component.reference(), resource.reference());
        assert_eq!(component.parameters().get("port"), Some(&Value::from(8080)));
        assert_eq!(component.parameters().get("name"), Some(&Value::from("frontend")));
        assert!(component.tags().contains("site::web"));
    }
}
