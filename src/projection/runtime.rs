// Copyright (c) 2025 - Cowboy AI, Inc.
//! Runtime Projection
//!
//! Resolution point between the declarative resource and its executable
//! form. Registered types build their own instance; anything else becomes a
//! generic [`Component`].

use tracing::debug;

use crate::domain::Resource;
use crate::registry::{Component, ResourceType, TypeRegistry};

impl Resource {
    /// Build the runtime object for this resource
    ///
    /// Looks the type up in `types`; a registered type's `create` result is
    /// returned as-is, errors included. Unregistered types produce a
    /// [`Component`] converted into the registry's instance type. Nothing is
    /// cached between calls.
    pub fn to_ral<R>(
        &self,
        types: &R,
    ) -> Result<<R::Type as ResourceType>::Instance, <R::Type as ResourceType>::Error>
    where
        R: TypeRegistry + ?Sized,
        <R::Type as ResourceType>::Instance: From<Component>,
    {
        match types.lookup(&self.kind().to_lowercase()) {
            Some(resource_type) => {
                debug!(resource = %self.reference(), "Creating runtime instance");
                resource_type.create(self)
            }
            None => {
                debug!(resource = %self.reference(), "Type not registered, creating component");
                Ok(Component::create(self).into())
            }
        }
    }
}
